use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use config::FileFormat;
use regex::Regex;
use tracing::debug;

/// Read a configuration file and expand `${VAR_NAME}` references from `env`.
///
/// Unknown variables are left untouched so the parser reports them in place.
pub fn read_config_file(config_path: &str, env: &HashMap<String, String>) -> Result<(String, FileFormat)> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read configuration file: {}", config_path))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    debug!("Read configuration file {}", config_path);
    Ok((substitute_env_vars(content, env)?, guess_format(config_path)))
}

/// Replace environment variables: ${VAR_NAME}
pub fn substitute_env_vars(content: &str, env: &HashMap<String, String>) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        env.get(&caps[1])
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

fn guess_format(config_path: &str) -> FileFormat {
    let path_lower = config_path.to_lowercase();
    if path_lower.ends_with(".json") {
        FileFormat::Json
    } else if path_lower.ends_with(".toml") {
        FileFormat::Toml
    } else {
        FileFormat::Yaml
    }
}
