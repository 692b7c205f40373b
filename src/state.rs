use std::sync::Arc;

use crate::agent::{StatelessLLMFactory, StatelessLLMInterface};
use crate::config_manager::Config;
use crate::translate::Translator;

/// Read-only after startup; cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<Translator>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = StatelessLLMFactory::create_llm(&config.llm_config)?;
        Self::with_llm(config, llm)
    }

    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> anyhow::Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            translator: Arc::new(Translator::new(llm)?),
        })
    }
}
