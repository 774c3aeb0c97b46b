//! # dbot-cli
//!
//! Command line for the book-radar bot: argument parsing, config loading, startup wiring.

pub mod app;
pub mod cli;

pub use app::{build_handler_chain, run_bot};
pub use cli::{load_config, Cli, Commands};
