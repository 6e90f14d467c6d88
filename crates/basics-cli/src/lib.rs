//! # basics-cli
//!
//! CLI output formatting, presenters, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use output::Separator;
pub use presenter::CliPresenter;
