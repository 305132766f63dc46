//! The review pipeline: image file in, verdict out.

use crate::config::Config;
use crate::error::Result;
use crate::image::{load_image, ImageInput};
use crate::llm::{ChatCompletionsClient, InferenceClient};
use crate::normalize::strip_code_fences;
use crate::prompt::build_message;
use crate::verdict::Verdict;
use std::path::Path;

/// Runs LBW reviews against one inference client.
///
/// Holds no per-review state; one instance serves every request for the
/// lifetime of the process.
pub struct Referee {
    client: Box<dyn InferenceClient>,
    normalize: bool,
}

impl Referee {
    /// Create a referee around an existing client.
    pub fn new(client: Box<dyn InferenceClient>, normalize: bool) -> Self {
        Self { client, normalize }
    }

    /// Create a referee talking to the endpoint named in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ChatCompletionsClient::from_config(&config.llm)?;
        tracing::debug!("Using model {} at {}", config.llm.model, client.endpoint());
        Ok(Self::new(Box::new(client), config.review.normalize))
    }

    /// Model identifier of the underlying client.
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Whether answers have code fences stripped.
    pub fn normalizes(&self) -> bool {
        self.normalize
    }

    /// Review the image at `path`.
    ///
    /// Only local failures (the image cannot be read) are returned as
    /// errors. A failed inference call comes back as
    /// [`Verdict::Unavailable`].
    pub async fn review(&self, path: &Path) -> Result<Verdict> {
        let bytes = load_image(path).await?;
        let image = ImageInput::from_bytes(&bytes);
        drop(bytes);
        let message = build_message(&image);

        match self.client.complete(&message).await {
            Ok(text) if self.normalize => Ok(Verdict::Answered(strip_code_fences(&text))),
            Ok(text) => Ok(Verdict::Answered(text)),
            Err(e) => {
                tracing::warn!(
                    status = e.status_code(),
                    "Inference failed for {:?}: {e}",
                    path
                );
                Ok(Verdict::Unavailable(e))
            }
        }
    }
}
