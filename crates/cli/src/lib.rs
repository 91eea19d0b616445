//! Operator tool for persisted bridge endpoint records.
//!
//! Provides commands for:
//! - Validating and pretty-printing stored records
//! - Computing store keys and key prefixes

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
