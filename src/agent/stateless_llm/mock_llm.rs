use std::sync::Mutex;

use async_trait::async_trait;

use super::stateless_llm_interface::StatelessLLMInterface;
use crate::agent::input_types::Message;
use crate::agent::output_types::ModelReply;

/// Canned provider for tests: records every prompt and answers with a fixed outcome.
pub struct MockLLM {
    outcome: Result<String, String>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl MockLLM {
    pub fn replying(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatelessLLMInterface for MockLLM {
    async fn chat_completion(&self, messages: &[Message]) -> anyhow::Result<ModelReply> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match &self.outcome {
            Ok(text) => Ok(ModelReply::from_text(text.as_str())),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
