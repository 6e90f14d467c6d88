//! basics library — application logic for the calculator and Fibonacci programs.

pub mod app;
pub mod config;
pub mod errors;
