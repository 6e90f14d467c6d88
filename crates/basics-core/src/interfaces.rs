//! Presentation seams for the interactive sessions.

use std::io;

use num_bigint::BigUint;

/// Receives the calculator's prompts and its final outcome.
pub trait CalculatorPresenter {
    /// Show a prompt before an input is read.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Present a computed result.
    fn present_result(&mut self, result: f64) -> io::Result<()>;

    /// Report an operator outside `+ - * /`.
    fn present_invalid_operator(&mut self, symbol: char) -> io::Result<()>;
}

/// Receives the Fibonacci printer's output.
pub trait SequencePresenter {
    /// Present the header naming the number of terms.
    fn present_header(&mut self, count: usize) -> io::Result<()>;

    /// Present the terms, consuming them as they are produced.
    fn present_sequence(&mut self, terms: &mut dyn Iterator<Item = BigUint>) -> io::Result<()>;
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl CalculatorPresenter for NullPresenter {
    fn prompt(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }

    fn present_result(&mut self, _result: f64) -> io::Result<()> {
        Ok(())
    }

    fn present_invalid_operator(&mut self, _symbol: char) -> io::Result<()> {
        Ok(())
    }
}

impl SequencePresenter for NullPresenter {
    fn present_header(&mut self, _count: usize) -> io::Result<()> {
        Ok(())
    }

    fn present_sequence(&mut self, terms: &mut dyn Iterator<Item = BigUint>) -> io::Result<()> {
        terms.for_each(drop);
        Ok(())
    }
}
