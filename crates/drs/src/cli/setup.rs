//! Referee construction shared by `review` and `serve`.

use clap::Args;
use drs_core::{Config, Referee};

/// Per-invocation overrides of the `[llm]` config section.
#[derive(Args, Debug, Default, Clone)]
pub struct LlmArgs {
    /// Vision model identifier
    #[arg(long, env = "DRS_MODEL")]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "DRS_BASE_URL")]
    pub base_url: Option<String>,
}

impl LlmArgs {
    /// Apply the overrides on top of `config`.
    pub fn apply(&self, config: &Config) -> Config {
        let mut config = config.clone();
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.llm.base_url = base_url.clone();
        }
        config
    }
}

/// Build the referee for this process.
pub fn build_referee(config: &Config, llm: &LlmArgs, normalize: bool) -> anyhow::Result<Referee> {
    let mut config = llm.apply(config);
    config.review.normalize = normalize;
    let referee = Referee::from_config(&config)?;
    tracing::debug!(
        "Referee ready: model {}, normalize {}",
        referee.model(),
        referee.normalizes()
    );
    Ok(referee)
}
