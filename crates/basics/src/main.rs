//! basics — interactive calculator and Fibonacci series printer.

use basics_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing on stderr so stdout carries only program output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        basics_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
