//! Command-line interface for Loopwise
//!
//! This module provides the main CLI structure and command handling. It uses
//! clap for argument parsing.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// Loopwise - Nested-loop detection and OpenMP parallelization advisor
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze source files for nested loops
    Analyze {
        /// Specific files to analyze (comma-separated or multiple -i flags)
        #[arg(short = 'i', long, value_delimiter = ',')]
        files: Vec<String>,

        /// Analyze a specific directory
        #[arg(short, long)]
        directory: Option<String>,

        /// Insert the suggested template into files with nested loops
        #[arg(long)]
        insert: bool,
    },
    /// Show parallelization templates
    Templates {
        /// Template strategy key to show (e.g. OpenMP)
        key: Option<String>,
    },
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize configuration
    Init,
    /// Validate configuration
    Validate,
    /// Show current configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Analyze {
                files,
                directory,
                insert,
            }) => {
                commands::analyze::execute(
                    files,
                    directory,
                    insert,
                    self.config.as_deref(),
                    &self.format,
                    &output,
                )
                .await
            }
            Some(Commands::Templates { key }) => {
                commands::templates::execute(key.as_deref(), &output).await
            }
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, self.config.as_deref(), &output).await
            }
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
