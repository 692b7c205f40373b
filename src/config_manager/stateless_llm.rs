use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_LLM_PROVIDER: &str = "groq_llm";
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Configuration for the model provider used by the translator
#[derive(Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default = "default_llm_provider")]
    pub llm_provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Falls back to the provider's public endpoint when unset
    #[serde(default)]
    pub base_url: Option<String>,

    /// Usually left empty so the key comes from `api_key_env`
    #[serde(default)]
    pub llm_api_key: String,

    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub max_text_chars: Option<usize>,
}

fn default_llm_provider() -> String {
    DEFAULT_LLM_PROVIDER.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl LLMConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Fill `llm_api_key` from the environment when the config file left it empty.
    ///
    /// A `${VAR}` left behind by substitution counts as empty.
    pub fn resolve_api_key(&mut self, env: &HashMap<String, String>) -> anyhow::Result<()> {
        let configured = self.llm_api_key.trim();
        if configured.contains("${") {
            anyhow::bail!(
                "llm_api_key refers to an unset variable ({}); a model provider API key is required",
                configured
            );
        }
        if !configured.is_empty() {
            return Ok(());
        }

        match env.get(&self.api_key_env).filter(|key| !key.trim().is_empty()) {
            Some(key) => {
                self.llm_api_key = key.clone();
                Ok(())
            }
            None => anyhow::bail!(
                "{} is not set; a model provider API key is required",
                self.api_key_env
            ),
        }
    }
}

impl fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMConfig")
            .field("llm_provider", &self.llm_provider)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("llm_api_key", &"<redacted>")
            .field("api_key_env", &self.api_key_env)
            .field("temperature", &self.temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_text_chars", &self.max_text_chars)
            .finish()
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_llm_provider(),
            model: default_model(),
            base_url: None,
            llm_api_key: String::new(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
            max_text_chars: None,
        }
    }
}
