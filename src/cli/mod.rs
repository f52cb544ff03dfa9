//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, enums, prompting and subcommand handlers.

pub mod args;
mod commands;
mod enums;
mod prompt;

pub use args::{Args, Command};
pub use commands::{handle_config_action, render};
