use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HydError {
    #[error("API key not found. Set OPENROUTER_API_KEY or configure ~/.config/hydrazine/config.toml")]
    ApiKeyNotFound,

    #[error("No offline build library configured. Pass --library or set offline_builds in config.toml")]
    NoOfflineLibrary,

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed build in {path}: {diagnostic}")]
    MalformedBuild { path: PathBuf, diagnostic: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Topology error: {0}")]
    Topology(#[from] hydrazine_core::TopologyError),

    #[error("Offline engine error: {0}")]
    Offline(#[from] hydrazine_core::OfflineError),

    #[error("Recommendation service unavailable: {0}")]
    OpenRouter(#[from] hydrazine_openrouter::OpenRouterError),
}
