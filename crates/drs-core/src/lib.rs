//! DRS Core - LBW decision review from a single image.
//!
//! Given a still of the ball striking the pad, the pipeline asks a hosted
//! vision model to apply the Leg Before Wicket rules and hands back its
//! verdict text:
//!
//! ```text
//! Image file → base64 data URI → LBW prompt → chat completion → strip fences → Verdict
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use drs_core::{Config, Referee};
//!
//! #[tokio::main]
//! async fn main() -> drs_core::Result<()> {
//!     let config = Config::load()?;
//!     let referee = Referee::from_config(&config)?;
//!
//!     let verdict = referee.review("data/example2.png".as_ref()).await?;
//!     println!("{verdict}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod image;
pub mod llm;
pub mod normalize;
pub mod prompt;
pub mod referee;
pub mod verdict;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, DrsError, InferenceError, Result};
pub use llm::{ChatCompletionsClient, InferenceClient};
pub use normalize::strip_code_fences;
pub use prompt::{build_message, ChatMessage, LBW_INSTRUCTIONS};
pub use referee::Referee;
pub use verdict::Verdict;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
