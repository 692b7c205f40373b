use std::collections::HashMap;

use anyhow::Result;
use config::{Environment, File};
use serde::{Deserialize, Serialize};

use crate::config_manager::stateless_llm::LLMConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::utils::read_config_file;

/// Prefix for environment overrides, e.g. `TRANSLATE__SYSTEM_CONFIG__PORT=8080`
pub const ENV_PREFIX: &str = "TRANSLATE";

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(default)]
    pub llm_config: LLMConfig,
}

impl Config {
    /// Load configuration from an optional file and the process environment.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(path, &env)
    }

    /// Layer defaults, the config file and `TRANSLATE__*` variables from `env`,
    /// then resolve the provider API key.
    pub fn load_from(path: Option<&str>, env: &HashMap<String, String>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            let (content, format) = read_config_file(path, env)?;
            builder = builder.add_source(File::from_str(&content, format));
        }

        let overrides: config::Map<String, String> =
            env.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(Some(overrides)),
        );

        let mut config: Config = builder.build()?.try_deserialize()?;
        config.llm_config.resolve_api_key(env)?;
        Ok(config)
    }
}
