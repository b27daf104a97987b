//! Implementation of the `configor resolve` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{list_table, output, CommandOutput};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::files::ResolvedFile;

/// Arguments for `configor resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Base configuration files, highest priority first
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Merge order for one environment.
#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    /// Environment the files were resolved for
    pub environment: String,
    /// Files in merge order
    pub files: Vec<ResolvedFile>,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["#", "kind", "path"]);
        for (index, file) in self.files.iter().enumerate() {
            table.add_row(vec![
                (index + 1).to_string(),
                file.kind.to_string(),
                file.path.display().to_string(),
            ]);
        }
        format!("Merge order for environment {}:\n{table}", self.environment)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Resolve `args.files` and print the merge order.
pub fn execute(args: ResolveArgs, loader: &ConfigLoader, json_mode: bool) -> Result<()> {
    let files = loader
        .resolve(&args.files)
        .context("Failed to resolve configuration files")?;
    output(
        &ResolveOutput {
            environment: loader.environment().to_string(),
            files,
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::files::FileKind;

    #[test]
    fn test_resolve_output_lists_files_in_order() {
        let out = ResolveOutput {
            environment: "test".to_string(),
            files: vec![
                ResolvedFile {
                    path: PathBuf::from("app.yml"),
                    kind: FileKind::Base,
                },
                ResolvedFile {
                    path: PathBuf::from("app.test.yml"),
                    kind: FileKind::Environment,
                },
            ],
        };

        let human = out.to_human();
        assert!(human.contains("environment test"));
        let base = human.find("app.yml").unwrap();
        let env = human.find("app.test.yml").unwrap();
        assert!(base < env);

        let json = out.to_json();
        assert_eq!(json["files"][1]["kind"], "environment");
    }
}
