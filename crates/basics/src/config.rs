//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};
use tracing::Level;

use basics_cli::output::Separator;
use basics_core::constants::DEFAULT_TERMS;

/// basics — interactive calculator and Fibonacci series printer.
#[derive(Parser, Debug)]
#[command(name = "basics", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Quiet mode (no prompts, labels, or headers).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (debug logging on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Program to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read two numbers and an operator from stdin and print the result.
    Calc,

    /// Print the first terms of the Fibonacci series.
    Fib {
        /// Number of terms to print.
        #[arg(short = 'n', long, default_value_t = DEFAULT_TERMS, env = "BASICS_FIB_TERMS")]
        terms: usize,

        /// Omit the ", " after the last term.
        #[arg(long)]
        no_trailing_separator: bool,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Minimum tracing level added to the `RUST_LOG` filter.
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

impl Command {
    /// Separator style for the Fibonacci line.
    #[must_use]
    pub fn separator(&self) -> Separator {
        match self {
            Command::Fib {
                no_trailing_separator: true,
                ..
            } => Separator::Between,
            _ => Separator::Trailing,
        }
    }
}
