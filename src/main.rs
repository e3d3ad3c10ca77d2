mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::{changelog, commit, diff};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::fs::LocalFileStore;
use crate::infra::git::GitCli;
use crate::infra::llm::GeminiClient;
use crate::workflow::commit_message::render_changes;

#[derive(Parser)]
#[command(
    name = "scribe",
    author,
    version,
    about = "Suggest commit messages from uncommitted changes"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a commit message for the changes in the current directory.
    Commit,
    /// Print the per-file diffs that `commit` would send to the model.
    Diff,
    /// Write the project changelog to COMMITS.md.
    Changelog,
    /// Inspect CLI configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if let Err(error) = run(cli.command).await {
        eprintln!("{}", render_error(&error));
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    match command {
        Commands::Config(args) => config_cmd::run(args.command, &config),
        Commands::Commit => {
            if config.gemini_api_key.is_none() {
                tracing::warn!("Gemini API key not configured; message generation will fail.");
            }
            let ctx = build_context(config).await?;
            let message = commit::run(&ctx).await?;
            println!("\nSuggested commit message:\n");
            println!("{message}");
            Ok(())
        }
        Commands::Diff => {
            let ctx = build_context(config).await?;
            let records = diff::run(&ctx).await?;
            if records.is_empty() {
                println!("No changes detected.");
            } else {
                println!("{}", render_changes(&records));
            }
            Ok(())
        }
        Commands::Changelog => {
            let file_store = LocalFileStore::new(config.workspace_root.clone());
            let status = changelog::run(&file_store).await?;
            println!("{status}");
            Ok(())
        }
    }
}

async fn build_context(config: AppConfig) -> AppResult<AppContext> {
    let git = Arc::new(GitCli::open(config.workspace_root.clone()).await?);
    let language_model = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
        config.request_timeout,
    )?);

    Ok(AppContext::new(config, git, language_model))
}

fn render_error(error: &AppError) -> String {
    match error {
        AppError::FileWrite { .. } => error.to_string(),
        other => format!("Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn file_write_errors_are_not_double_prefixed() {
        let error = AppError::FileWrite {
            path: PathBuf::from("COMMITS.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            render_error(&error),
            "Error creating markdown file 'COMMITS.md': denied"
        );
    }

    #[test]
    fn other_errors_get_a_prefix() {
        let error = AppError::RepositoryAccess("not a repo".to_string());
        assert_eq!(
            render_error(&error),
            "Error: repository access error: not a repo"
        );
    }

    #[test]
    fn parses_diff_subcommand() {
        let cli = Cli::try_parse_from(["scribe", "-v", "diff"]).unwrap();
        assert!(matches!(cli.command, Commands::Diff));
        assert_eq!(cli.verbose, 1);
    }
}
