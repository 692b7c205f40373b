use anyhow::Result;

use crate::agent::output_types::ModelReply;

/// Reduces a model reply to its plain-text completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrOutputParser;

impl StrOutputParser {
    pub fn parse(&self, reply: ModelReply) -> Result<String> {
        reply
            .content
            .ok_or_else(|| anyhow::anyhow!("Model returned no text content"))
    }
}
