//! The two interactive programs, run against any reader and presenter.

use std::io::{self, BufRead};

use tracing::debug;

use crate::calculator::{CalcError, Operator};
use crate::constants::{PROMPT_FIRST, PROMPT_OPERATOR, PROMPT_SECOND};
use crate::fibonacci::terms;
use crate::input::TokenReader;
use crate::interfaces::{CalculatorPresenter, SequencePresenter};

/// Errors that end a session before its normal output.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An operand token is not a number.
    #[error("invalid number: {token:?}")]
    InvalidNumber { token: String },

    /// Input ended before the named value was read.
    #[error("missing input: expected {0}")]
    MissingInput(&'static str),

    /// Reading input or writing output failed.
    #[error("I/O error")]
    Io(#[from] io::Error),
}

/// How a calculator session finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcOutcome {
    /// The operation was applied and its result presented.
    Computed {
        lhs: f64,
        operator: Operator,
        rhs: f64,
        result: f64,
    },
    /// The operator was rejected; nothing was computed.
    InvalidOperator(char),
}

/// Run the calculator: prompt for two operands and an operator, then present
/// the result.
///
/// An unknown operator is reported through the presenter and returned as
/// [`CalcOutcome::InvalidOperator`]; it is not an error.
pub fn run_calculator<R, P>(
    input: &mut TokenReader<R>,
    presenter: &mut P,
) -> Result<CalcOutcome, SessionError>
where
    R: BufRead,
    P: CalculatorPresenter + ?Sized,
{
    presenter.prompt(PROMPT_FIRST)?;
    let lhs = read_operand(input, "first number")?;

    presenter.prompt(PROMPT_SECOND)?;
    let rhs = read_operand(input, "second number")?;

    presenter.prompt(PROMPT_OPERATOR)?;
    let token = input
        .next_token()?
        .ok_or(SessionError::MissingInput("operator"))?;

    match token.parse::<Operator>() {
        Ok(operator) => {
            let result = operator.apply(lhs, rhs);
            debug!(lhs, rhs, %operator, result, "computed");
            presenter.present_result(result)?;
            Ok(CalcOutcome::Computed {
                lhs,
                operator,
                rhs,
                result,
            })
        }
        Err(CalcError::InvalidOperator(symbol)) => {
            debug!(%token, "rejected operator");
            presenter.present_invalid_operator(symbol)?;
            Ok(CalcOutcome::InvalidOperator(symbol))
        }
    }
}

/// Run the Fibonacci printer for `count` terms.
pub fn run_fibonacci<P>(presenter: &mut P, count: usize) -> Result<(), SessionError>
where
    P: SequencePresenter + ?Sized,
{
    debug!(count, "printing fibonacci series");
    presenter.present_header(count)?;
    presenter.present_sequence(&mut terms(count))?;
    Ok(())
}

fn read_operand<R: BufRead>(
    input: &mut TokenReader<R>,
    what: &'static str,
) -> Result<f64, SessionError> {
    let token = input.next_token()?.ok_or(SessionError::MissingInput(what))?;
    let value = token
        .parse::<f64>()
        .map_err(|_| SessionError::InvalidNumber { token })?;
    debug!(what, value, "read operand");
    Ok(value)
}
