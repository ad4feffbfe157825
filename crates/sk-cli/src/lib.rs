//! sk-cli library
//!
//! Exposes the command runner to the `sk` binary and its tests.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;


pub use app::run;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
