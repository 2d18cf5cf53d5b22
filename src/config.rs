//! Configuration for briefit.
//!
//! Everything is established once at process start: the API key from the
//! environment (a `.env` file is honoured), the model identifier, and the
//! fixed generation parameters applied to every request. Nothing here is
//! mutated afterwards.

use serde::Serialize;

/// Default Gemini model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Sampling parameters sent with every generation request.
///
/// Serialised camelCase straight into the `generationConfig` field of the
/// Gemini request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.9,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 2048,
        }
    }
}

/// Root configuration, built once in `main` and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. An absent key is not an error here; the first
    /// remote call fails instead, and the session reports it.
    pub api_key: String,
    /// Model identifier (e.g. "gemini-pro").
    pub model: String,
    /// Fixed sampling parameters for every request.
    pub generation: GenerationConfig,
}

impl Config {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        // Load a .env file if one exists; missing is fine.
        let _ = dotenvy::dotenv();

        Self {
            api_key: std::env::var("GOOGLE_API_KEY").unwrap_or_default(),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            generation: GenerationConfig::default(),
        }
    }
}
