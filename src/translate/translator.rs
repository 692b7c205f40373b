use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, instrument};

use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::translate::output_parser::StrOutputParser;
use crate::translate::prompt::ChatPromptTemplate;

/// Prompt -> model -> parser, run once per request.
pub struct Translator {
    prompt: ChatPromptTemplate,
    llm: Arc<dyn StatelessLLMInterface>,
    parser: StrOutputParser,
}

impl Translator {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>) -> Result<Self> {
        let prompt = ChatPromptTemplate::translation()?;
        debug!("Prompt variables: {:?}", prompt.input_variables());

        Ok(Self {
            prompt,
            llm,
            parser: StrOutputParser,
        })
    }

    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    /// Errors are returned as produced by the failing step so the caller can
    /// report the original message.
    #[instrument(skip(self, text), fields(model = %self.llm.model_name(), text_len = text.len()))]
    pub async fn translate(&self, language: &str, text: &str) -> Result<String> {
        let variables = HashMap::from([("language", language), ("text", text)]);
        let messages = self.prompt.format(&variables)?;

        let reply = self.llm.chat_completion(&messages).await?;
        debug!(
            "Model reply: finish_reason={:?}, usage={:?}",
            reply.finish_reason, reply.usage
        );

        self.parser.parse(reply)
    }
}
