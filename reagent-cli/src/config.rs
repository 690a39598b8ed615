use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "mistral";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub base_url: String,
    pub model: String,
}

impl CliConfig {
    /// Reads the endpoint and model from the environment, after `.env` has
    /// been loaded. Missing variables fall back to the local defaults.
    pub fn from_env() -> Self {
        let base_url =
            env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("REAGENT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self { base_url, model }
    }
}
