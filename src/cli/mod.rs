//! Command-line entry point
mod commands;
mod logging;

pub use commands::{Cli, Commands, PlayArgs, run};
pub use logging::{LOG_ENV, init_logging};
