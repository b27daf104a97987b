//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::env::EnvArgs;
use super::commands::resolve::ResolveArgs;
use super::commands::show::ShowArgs;

/// Command line of the `configor` binary.
#[derive(Parser, Debug)]
#[command(name = "configor")]
#[command(about = "Configor - layered configuration inspection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Environment name, overriding CONFIGOR_ENV
    #[arg(short, long, global = true, value_name = "NAME")]
    pub environment: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the active environment name and variable prefix
    Env(EnvArgs),

    /// List the files that would be merged, in merge order
    Resolve(ResolveArgs),

    /// Print the merged configuration document
    Show(ShowArgs),
}
