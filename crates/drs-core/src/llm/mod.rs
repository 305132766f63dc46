//! Inference client abstraction over OpenAI-compatible chat-completion APIs.

pub(crate) mod client;
pub(crate) mod openai;

pub use client::InferenceClient;
pub use openai::ChatCompletionsClient;
