//! The inference client trait.

use crate::error::InferenceError;
use crate::prompt::ChatMessage;
use async_trait::async_trait;

/// A remote model that answers one multimodal chat message.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the referee holds a `Box<dyn InferenceClient>`).
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Model identifier, for logging.
    fn model(&self) -> &str;

    /// Send `message` as a single-turn conversation and return the text of
    /// the first completion, unmodified.
    async fn complete(&self, message: &ChatMessage) -> Result<String, InferenceError>;
}
