//! Summarisation client for the Gemini API.
//!
//! Builds one natural-language instruction embedding the requested length
//! qualifier and the full source text, and issues a single
//! `generateContent` call under the fixed generation configuration. No
//! chunking or token budgeting; oversized inputs fail with whatever the
//! service reports.

use crate::config::{Config, GenerationConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("summarisation request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("summarisation service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("service returned no candidates")]
    EmptyResponse,
}

/// Requested summary length, embedded as a qualifier in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLength {
    Short,
    Long,
}

impl SummaryLength {
    /// Map the `s`/`l` menu selector; anything other than `s` means long.
    pub fn from_selector(choice: &str) -> Self {
        if choice.trim().eq_ignore_ascii_case("s") {
            SummaryLength::Short
        } else {
            SummaryLength::Long
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Long => "long",
        }
    }
}

impl std::fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single instruction sent to the model.
fn build_prompt(text: &str, length: SummaryLength) -> String {
    format!("Summarize the following text in a {} format: {}", length, text)
}

/// Summarise `text` at the requested length.
///
/// Exactly one outbound request per call; every failure mode (auth, quota,
/// network, malformed response) surfaces as an `AgentError`.
pub async fn summarize(
    text: &str,
    length: SummaryLength,
    config: &Config,
) -> Result<String, AgentError> {
    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(text, length),
            }],
        }],
        generation_config: &config.generation,
    };

    let url = format!(
        "{}/{}:generateContent?key={}",
        API_BASE, config.model, config.api_key
    );

    let client = reqwest::Client::builder().build()?;
    let response = client.post(&url).json(&request).send().await?;

    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ApiErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        return Err(AgentError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body: GenerateContentResponse = response.json().await?;
    let summary = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or(AgentError::EmptyResponse)?;

    Ok(summary)
}
