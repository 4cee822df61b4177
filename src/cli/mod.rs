//! Command-line interface
//!
//! This module contains the CLI commands, argument parsing and the
//! interactive menu for the catalog application.

pub mod commands;
pub mod menu;

pub use commands::{Command, Opt};
pub use menu::run_menu;
