//! The `drs review` command: one image, one verdict on stdout.

use super::setup::{build_referee, LlmArgs};
use clap::Args;
use drs_core::Config;
use std::path::PathBuf;

/// Arguments for the `review` command.
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Image to review (defaults to review.sample_image)
    pub image: Option<PathBuf>,

    /// Print the model's answer without stripping code fences
    #[arg(long)]
    pub raw: bool,

    #[command(flatten)]
    pub llm: LlmArgs,
}

/// Execute the review command.
///
/// A failed inference call still prints its description and exits 0; only
/// config and image-read failures are errors here.
pub async fn execute(args: ReviewArgs, config: &Config) -> anyhow::Result<()> {
    let path = args
        .image
        .as_deref()
        .map(super::expand_path)
        .unwrap_or_else(|| config.sample_image());
    let referee = build_referee(config, &args.llm, config.review.normalize && !args.raw)?;

    tracing::info!("Reviewing {:?} with {}", path, referee.model());
    let verdict = referee.review(&path).await?;
    println!("{verdict}");

    Ok(())
}
