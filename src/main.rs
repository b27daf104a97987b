//! Configor CLI entry point.

use clap::Parser;

use configor::cli::{self, Cli};
use configor::infrastructure::env::ProcessEnv;
use configor::infrastructure::logging::{self, LogConfig};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let log_config = match LogConfig::from_env(&ProcessEnv) {
        Ok(config) => config,
        Err(err) => cli::handle_error(&anyhow::Error::from(err), json),
    };
    if let Err(err) = logging::init(&log_config) {
        cli::handle_error(&err, json);
    }

    if let Err(err) = cli::run(cli) {
        cli::handle_error(&err, json);
    }
}
