use std::sync::Arc;
use tracing::info;
use anyhow::Result;

use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::agent::stateless_llm::openai_compatible_llm::OpenAICompatibleLLM;
use crate::config_manager::LLMConfig;

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// `openai_compatible_llm` has no public default endpoint, so it needs `base_url`.
    pub fn create_llm(config: &LLMConfig) -> Result<Arc<dyn StatelessLLMInterface>> {
        info!("Initializing LLM: {}", config.llm_provider);

        let default_base_url = match config.llm_provider.as_str() {
            "groq_llm" => Some(GROQ_BASE_URL),
            "openai_llm" => Some(OPENAI_BASE_URL),
            "openai_compatible_llm" => None,
            other => anyhow::bail!("Unsupported LLM provider: {}", other),
        };

        let base_url = config
            .base_url
            .clone()
            .or_else(|| default_base_url.map(str::to_string))
            .ok_or_else(|| {
                anyhow::anyhow!("base_url is required for provider {}", config.llm_provider)
            })?;

        Ok(Arc::new(OpenAICompatibleLLM::new(
            config.model.clone(),
            base_url,
            config.llm_api_key.clone(),
            config.temperature,
            config.request_timeout(),
        )?))
    }
}
