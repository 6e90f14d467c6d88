//! CLI presenter for both programs.

use std::io::{self, Write};

use num_bigint::BigUint;

use basics_core::constants::INVALID_OPERATOR_MESSAGE;
use basics_core::interfaces::{CalculatorPresenter, SequencePresenter};

use crate::output::{fibonacci_header, format_value, result_line, write_sequence, Separator};

/// Writes prompts, results, and sequences to an output stream.
///
/// In quiet mode prompts and the sequence header are skipped and the result
/// is printed without its `Result: ` label.
pub struct CliPresenter<W: Write> {
    out: W,
    quiet: bool,
    separator: Separator,
}

impl<W: Write> CliPresenter<W> {
    #[must_use]
    pub fn new(out: W, quiet: bool) -> Self {
        Self {
            out,
            quiet,
            separator: Separator::default(),
        }
    }

    /// Use the given separator style for sequences.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Consume the presenter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CalculatorPresenter for CliPresenter<W> {
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    fn present_result(&mut self, result: f64) -> io::Result<()> {
        if self.quiet {
            writeln!(self.out, "{}", format_value(result))
        } else {
            writeln!(self.out, "{}", result_line(result))
        }
    }

    fn present_invalid_operator(&mut self, _symbol: char) -> io::Result<()> {
        writeln!(self.out, "{INVALID_OPERATOR_MESSAGE}")
    }
}

impl<W: Write> SequencePresenter for CliPresenter<W> {
    fn present_header(&mut self, count: usize) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}", fibonacci_header(count))
    }

    fn present_sequence(&mut self, terms: &mut dyn Iterator<Item = BigUint>) -> io::Result<()> {
        write_sequence(&mut self.out, terms, self.separator)?;
        self.out.flush()
    }
}
