//! # briefit
//!
//! A CLI for summarising text, documents and webpages using the Gemini API.
//!
//! ## Features
//!
//! - **Any source**: typed text, local files (PDF, DOCX, plain text) or URLs
//! - **Two lengths**: short or long summaries via a single prompt qualifier
//! - **Resilient loop**: no failure ends the session; errors are reported
//!   and the prompt comes back

pub mod agent;
pub mod config;
pub mod document;
pub mod fetch;
pub mod input;
pub mod session;

pub use agent::SummaryLength;
pub use config::Config;
pub use input::RawInput;
