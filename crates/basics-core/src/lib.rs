//! # basics-core
//!
//! Core library for the `basics` programs: a four-function calculator and a
//! Fibonacci sequence printer, plus the interactive sessions that drive them.

pub mod calculator;
pub mod constants;
pub mod fibonacci;
pub mod input;
pub mod interfaces;
pub mod session;

// Re-exports
pub use calculator::{compute, CalcError, Operator};
pub use constants::{exit_codes, DEFAULT_TERMS};
pub use fibonacci::{terms, FibIterator};
pub use input::TokenReader;
pub use interfaces::{CalculatorPresenter, NullPresenter, SequencePresenter};
pub use session::{run_calculator, run_fibonacci, CalcOutcome, SessionError};
