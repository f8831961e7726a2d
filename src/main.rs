//! git-commit-msg - commit-msg hook entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use git_commit_msg::emoji::{NoSuggestions, UnicodeCatalog};
use git_commit_msg::{Config, ConfigOverrides, HookOutcome, Pipeline, run_hook};

/// Annotate a commit message with emojis, contexts and the branch ticket.
#[derive(Parser, Debug)]
#[command(name = "git-commit-msg")]
#[command(about = "Annotate a commit message with emojis, contexts and the branch ticket")]
#[command(version)]
struct Cli {
    /// Path to the commit message file (passed by Git)
    commit_msg_file: PathBuf,

    /// Skip all emoji annotation (overrides GIT_COMMIT_MSG_HOOK_SKIP_ADDING_EMOJIS)
    #[arg(long)]
    skip_emojis: bool,

    /// Skip auto-suggested emojis (overrides GIT_COMMIT_MSG_HOOK_SKIP_AUTO_SUGGEST)
    #[arg(long)]
    skip_auto_suggest: bool,

    /// Keep the auto-suggestion stage but never look words up
    #[arg(long)]
    no_suggest_lookup: bool,

    /// Log each stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::resolve(ConfigOverrides {
        skip_emoji_annotation: cli.skip_emojis.then_some(true),
        skip_auto_suggest: cli.skip_auto_suggest.then_some(true),
    });

    let pipeline = if cli.no_suggest_lookup {
        Pipeline::with_lookups(config, &NoSuggestions, &UnicodeCatalog)
    } else {
        Pipeline::new(config)
    };

    let outcome = run_hook(&cli.commit_msg_file, &pipeline).with_context(|| {
        format!(
            "Failed to process commit message {}",
            cli.commit_msg_file.display()
        )
    })?;

    if outcome == HookOutcome::Rewritten {
        tracing::debug!("Annotated {}", cli.commit_msg_file.display());
    }

    Ok(())
}
