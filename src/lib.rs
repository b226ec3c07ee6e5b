//! HealthAI assistant core library
//!
//! This module exports the patient data model, the prompt templates, and
//! the query dispatcher that mediates between structured patient data and
//! a hosted text-generation backend.

pub mod api;
pub mod core;
pub mod error;
pub mod models;

/// Application configuration
pub mod config {
    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Config {
        pub server: ServerConfig,
        pub backend: BackendConfig,
        pub data: DataConfig,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ServerConfig {
        pub host: String,
        pub port: u16,
    }

    /// Hosted text-generation endpoint settings. Credentials come from the
    /// environment; nothing here is baked into the binary.
    #[derive(Debug, Clone, Deserialize)]
    pub struct BackendConfig {
        pub endpoint: String,
        pub api_key: String,
        pub model_id: String,
        pub project_id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct DataConfig {
        pub patient_file: String,
    }

    /// Load configuration from file
    pub fn load_config() -> Result<Config, config::ConfigError> {
        // Start with default settings, override with environment-specific
        // settings, then with HEALTHAI__* environment variables.
        let env = std::env::var("HEALTHAI_ENV").unwrap_or_else(|_| "development".into());
        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("HEALTHAI").separator("__"))
            .build()?
            .try_deserialize()
    }
}
