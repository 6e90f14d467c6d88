//! Application entry point and dispatch.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::CommandFactory;
use tracing::info;

use basics_cli::completion::generate_completion;
use basics_cli::presenter::CliPresenter;
use basics_core::input::TokenReader;
use basics_core::session::{run_calculator, run_fibonacci};

use crate::config::{AppConfig, Command};

/// Run the application on stdin and stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, stdin.lock(), stdout.lock())
}

/// Run the application against the given input and output.
pub fn run_with<R: BufRead, W: Write>(config: &AppConfig, input: R, mut output: W) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = AppConfig::command();
        generate_completion(&mut cmd, shell, &mut output);
        return Ok(());
    }

    match &config.command {
        Some(Command::Calc) => run_calc(config, input, output),
        Some(command @ Command::Fib { terms, .. }) => {
            let mut presenter =
                CliPresenter::new(output, config.quiet).with_separator(command.separator());
            run_fibonacci(&mut presenter, *terms)?;
            Ok(())
        }
        None => {
            write!(output, "{}", AppConfig::command().render_help())?;
            Ok(())
        }
    }
}

fn run_calc<R: BufRead, W: Write>(config: &AppConfig, input: R, output: W) -> Result<()> {
    let mut reader = TokenReader::new(input);
    let mut presenter = CliPresenter::new(output, config.quiet);
    let outcome = run_calculator(&mut reader, &mut presenter)?;
    info!(?outcome, "calculator finished");
    Ok(())
}
