//! CLI configuration and argument parsing.

use clap::Parser;

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(name = "bridgectl", about = "Inspect persisted bridge endpoint records")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn run(self) -> anyhow::Result<()> {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        tracing_subscriber::fmt().with_max_level(level).init();
        self.command.execute()
    }
}
