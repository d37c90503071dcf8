use std::path::PathBuf;

use hydrazine_core::Topology;
use hydrazine_openrouter::GenerationParams;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::HydError;

pub const DEFAULT_START_LOCATION: &str = "Seraphim Station";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    /// JSON array of pre-generated builds.
    pub offline_builds: Option<PathBuf>,
    /// Custom topology JSON replacing the built-in Stanton map.
    pub topology: Option<PathBuf>,
    pub start_location: Option<String>,
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerationConfig {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub seed: Option<u64>,
}

impl From<&GenerationConfig> for GenerationParams {
    fn from(config: &GenerationConfig) -> Self {
        GenerationParams {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            seed: config.seed,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hydrazine").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, HydError> {
    Ok(toml::from_str(content)?)
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(&path) else {
        return Config::default();
    };

    match parse_config(&content) {
        Ok(config) => {
            debug!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Config::default()
        }
    }
}

impl Config {
    pub fn api_key(&self) -> Result<String, HydError> {
        // First, try environment variable
        if let Ok(key) = std::env::var("OPENROUTER_API_KEY") {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        // Then, the config file
        if let Some(key) = &self.openrouter_api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }

        Err(HydError::ApiKeyNotFound)
    }

    pub fn start_location(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.start_location.clone())
            .unwrap_or_else(|| DEFAULT_START_LOCATION.to_string())
    }

    pub fn offline_library(&self, cli: Option<PathBuf>) -> Result<PathBuf, HydError> {
        cli.or_else(|| self.offline_builds.clone())
            .ok_or(HydError::NoOfflineLibrary)
    }

    /// The configured topology, or the built-in Stanton map.
    pub fn topology(&self, cli: Option<PathBuf>) -> Result<Topology, HydError> {
        match cli.or_else(|| self.topology.clone()) {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .map_err(|source| HydError::Read { path, source })?;
                Ok(Topology::from_json(&json)?)
            }
            None => Ok(Topology::stanton()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = parse_config(
            r#"
            openrouter_api_key = "sk-test"
            model = "openai/gpt-4o-mini"
            offline_builds = "/srv/builds.json"
            start_location = "Port Tressler"
            offline = true

            [generation]
            temperature = 0.2
            max_tokens = 4096
            "#,
        )
        .unwrap();

        assert_eq!(config.model.as_deref(), Some("openai/gpt-4o-mini"));
        assert!(config.offline);
        assert_eq!(config.start_location(None), "Port Tressler");
        assert_eq!(
            config.start_location(Some("Lorville".to_string())),
            "Lorville"
        );
        let params = GenerationParams::from(&config.generation);
        assert_eq!(params.temperature, Some(0.2));
        assert_eq!(params.max_tokens, Some(4096));
        assert_eq!(params.seed, None);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert!(!config.offline);
        assert_eq!(config.start_location(None), DEFAULT_START_LOCATION);
        assert!(matches!(
            config.offline_library(None),
            Err(HydError::NoOfflineLibrary)
        ));
        assert_eq!(config.topology(None).unwrap().len(), 30);
    }

    #[test]
    fn invalid_config_is_an_error() {
        assert!(matches!(
            parse_config("offline = \"maybe\""),
            Err(HydError::Config(_))
        ));
    }
}
