use async_trait::async_trait;

use crate::agent::input_types::Message;
use crate::agent::output_types::ModelReply;

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Send one rendered prompt and wait for the full completion.
    ///
    /// Implementations make exactly one request per call and never retry.
    async fn chat_completion(&self, messages: &[Message]) -> anyhow::Result<ModelReply>;

    /// Model identifier, for logging and health output
    fn model_name(&self) -> &str;
}
