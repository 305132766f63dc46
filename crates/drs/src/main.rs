//! DRS CLI - LBW decision review from a single image.
//!
//! Sends a still of the ball hitting the pad to a hosted vision model and
//! prints its Leg Before Wicket verdict, or serves the same review as an
//! image-upload page.
//!
//! # Usage
//!
//! ```bash
//! # Review the bundled sample image
//! drs review
//!
//! # Review a specific image without stripping code fences
//! drs review appeal.png --raw
//!
//! # Start the upload widget on http://127.0.0.1:7860
//! drs serve
//!
//! # View configuration
//! drs config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;
mod server;

/// DRS - LBW decision review powered by a vision model.
#[derive(Parser, Debug)]
#[command(name = "drs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "DRS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Review one image and print the verdict
    Review(cli::review::ReviewArgs),

    /// Serve the image-upload review page
    Serve(cli::serve::ServeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials may live in a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref().map(cli::expand_path);

    // Config commands manage the file itself, so they must not fail on a
    // broken one.
    if let Commands::Config(args) = cli.command {
        logging::init(logging::effective_level("info", cli.verbose), cli.json_logs);
        return cli::config::execute(args, config_path.as_deref()).await;
    }

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match &config_path {
        Some(path) => drs_core::Config::load_from(path)?,
        None => match drs_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Check your config file with `drs config path`."
                );
                drs_core::Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("DRS v{}", drs_core::VERSION);

    match cli.command {
        Commands::Review(args) => cli::review::execute(args, &config).await,
        Commands::Serve(args) => cli::serve::execute(args, &config).await,
        Commands::Config(_) => unreachable!("config commands dispatched above"),
    }
}
