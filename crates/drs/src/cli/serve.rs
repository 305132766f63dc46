//! The `drs serve` command: the image-upload review page.

use super::setup::{build_referee, LlmArgs};
use clap::Args;
use drs_core::Config;

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on (defaults to server.bind)
    #[arg(long)]
    pub bind: Option<String>,

    #[command(flatten)]
    pub llm: LlmArgs,
}

/// Execute the serve command. Runs until the process is stopped.
pub async fn execute(args: ServeArgs, config: &Config) -> anyhow::Result<()> {
    let referee = build_referee(config, &args.llm, config.review.normalize)?;
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());

    crate::server::run(referee, &bind, config.server.max_upload_bytes()).await
}
