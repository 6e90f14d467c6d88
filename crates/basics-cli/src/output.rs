//! CLI output formatting.

use std::fmt::Display;
use std::io::{self, Write};

use basics_core::constants::TERM_SEPARATOR;

/// How terms of a sequence are separated on the output line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    /// `", "` after every term, including the last (`0, 1, 1, `).
    #[default]
    Trailing,
    /// `", "` only between terms (`0, 1, 1`).
    Between,
}

/// Format a calculator result in the layout of a Java `double`.
///
/// Integral values keep one decimal (`2.0`), magnitudes outside
/// `[1e-3, 1e7)` use an exponent (`1.0E10`), and non-finite values print as
/// `Infinity`, `-Infinity` or `NaN`.
///
/// Digits are Rust's shortest round-trip form. That matches Java for normal
/// values but not for every subnormal: `5e-324` prints as `5.0E-324` where
/// Java prints `4.9E-324`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let s = value.to_string();
        if s.contains('.') {
            s
        } else {
            format!("{s}.0")
        }
    } else {
        let s = format!("{value:e}");
        let (mantissa, exponent) = s.split_once('e').unwrap_or((s.as_str(), "0"));
        if mantissa.contains('.') {
            format!("{mantissa}E{exponent}")
        } else {
            format!("{mantissa}.0E{exponent}")
        }
    }
}

/// The calculator's result line.
#[must_use]
pub fn result_line(value: f64) -> String {
    format!("Result: {}", format_value(value))
}

/// The Fibonacci printer's header line.
#[must_use]
pub fn fibonacci_header(count: usize) -> String {
    format!("Fibonacci Series till {count} terms:")
}

/// Write terms on one line as they are produced, then end the line.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_sequence<T: Display>(
    out: &mut dyn Write,
    terms: &mut dyn Iterator<Item = T>,
    separator: Separator,
) -> io::Result<()> {
    let mut first = true;
    for term in terms {
        match separator {
            Separator::Trailing => write!(out, "{term}{TERM_SEPARATOR}")?,
            Separator::Between if first => write!(out, "{term}")?,
            Separator::Between => write!(out, "{TERM_SEPARATOR}{term}")?,
        }
        first = false;
    }
    writeln!(out)
}

/// Format terms as a single line, without the trailing newline.
#[must_use]
pub fn format_sequence<T: Display>(
    terms: impl IntoIterator<Item = T>,
    separator: Separator,
) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_sequence(&mut buf, &mut terms.into_iter(), separator);
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    line.pop();
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_one_decimal() {
        assert_eq!(format_value(2.0), "2.0");
        assert_eq!(format_value(-3.0), "-3.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(-0.0), "-0.0");
        assert_eq!(format_value(1_000_000.0), "1000000.0");
    }

    #[test]
    fn fractional_values() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_value(0.001), "0.001");
    }

    #[test]
    fn exponent_form() {
        assert_eq!(format_value(1e7), "1.0E7");
        assert_eq!(format_value(1e10), "1.0E10");
        assert_eq!(format_value(1.5e-5), "1.5E-5");
        assert_eq!(format_value(-2.5e20), "-2.5E20");
    }

    #[test]
    fn subnormal_uses_shortest_digits() {
        let smallest = f64::from_bits(1);
        assert_eq!(format_value(smallest), "5.0E-324");
        assert_eq!(format_value(-smallest), "-5.0E-324");
        assert_eq!(format_value(smallest).parse::<f64>().unwrap(), smallest);
    }

    #[test]
    fn non_finite() {
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn result_and_header_lines() {
        assert_eq!(result_line(2.0), "Result: 2.0");
        assert_eq!(fibonacci_header(10), "Fibonacci Series till 10 terms:");
    }

    #[test]
    fn sequence_trailing() {
        assert_eq!(format_sequence([0, 1, 1, 2], Separator::Trailing), "0, 1, 1, 2, ");
        assert_eq!(format_sequence([0], Separator::Trailing), "0, ");
    }

    #[test]
    fn sequence_between() {
        assert_eq!(format_sequence([0, 1, 1, 2], Separator::Between), "0, 1, 1, 2");
        assert_eq!(format_sequence([0], Separator::Between), "0");
    }

    #[test]
    fn sequence_empty() {
        let none: [u64; 0] = [];
        assert_eq!(format_sequence(none, Separator::Trailing), "");
        assert_eq!(format_sequence(none, Separator::Between), "");
    }

    #[test]
    fn write_sequence_ends_line() {
        let mut buf = Vec::new();
        write_sequence(&mut buf, &mut [3, 5].into_iter(), Separator::Between).unwrap();
        assert_eq!(buf, b"3, 5\n");
    }
}
