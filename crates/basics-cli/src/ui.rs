//! Styled diagnostics on stderr.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Build an `[ERROR]` line, styled unless `plain` is set.
#[must_use]
pub fn error_line(text: &str, plain: bool) -> String {
    if plain {
        format!("[ERROR] {text}")
    } else {
        format!("{} {text}", style("[ERROR]").red().bold())
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", error_line(text, is_color_disabled()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_line() {
        assert_eq!(
            error_line("invalid number: \"abc\"", true),
            "[ERROR] invalid number: \"abc\""
        );
    }

    #[test]
    fn styled_error_line_keeps_text() {
        let line = error_line("boom", false);
        assert!(line.contains("[ERROR]"));
        assert!(line.ends_with(" boom"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("test error message");
    }
}
