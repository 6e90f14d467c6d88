//! Prompts, messages, and exit codes shared by the programs.

/// Number of Fibonacci terms printed when no count is given.
pub const DEFAULT_TERMS: usize = 10;

/// Prompt shown before reading the first operand.
pub const PROMPT_FIRST: &str = "Enter first number: ";

/// Prompt shown before reading the second operand.
pub const PROMPT_SECOND: &str = "Enter second number: ";

/// Prompt shown before reading the operator.
pub const PROMPT_OPERATOR: &str = "Enter operator (+, -, *, /): ";

/// Message printed when the operator is not one of `+ - * /`.
pub const INVALID_OPERATOR_MESSAGE: &str = "Invalid operator!";

/// Separator written after every Fibonacci term.
pub const TERM_SEPARATOR: &str = ", ";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution, including the invalid-operator path.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O failure on stdin or stdout).
    pub const ERROR_GENERIC: i32 = 1;
    /// Input could not be read as the expected value.
    pub const ERROR_INPUT: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_end_with_space() {
        for prompt in [PROMPT_FIRST, PROMPT_SECOND, PROMPT_OPERATOR] {
            assert!(prompt.ends_with(": "), "{prompt:?}");
        }
    }

    #[test]
    fn exit_codes_distinct() {
        assert_ne!(exit_codes::SUCCESS, exit_codes::ERROR_GENERIC);
        assert_ne!(exit_codes::ERROR_GENERIC, exit_codes::ERROR_INPUT);
    }
}
