//! Command-line interface
//!
//! Inspection commands for layered configuration: the active environment,
//! the resolved merge order and the merged document.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::infrastructure::config::ConfigLoader;

/// Run a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(environment) = cli.environment {
        loader = loader.with_environment(environment);
    }

    match cli.command {
        Commands::Env(args) => commands::env::execute(args, &loader, cli.json),
        Commands::Resolve(args) => commands::resolve::execute(args, &loader, cli.json),
        Commands::Show(args) => commands::show::execute(args, &loader, cli.json),
    }
}

/// Print an error chain to stderr and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        eprintln!(
            "{}",
            serde_json::json!({ "success": false, "error": err.to_string(), "causes": chain })
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
