//! Input acquisition: turning a user selection into one text payload.
//!
//! Three sources are supported. Typed text passes through untouched, file
//! paths dispatch on extension to the document extractor or a plain UTF-8
//! read, and URLs go to the fetcher. Every failure comes back as an
//! explicit error; callers never see a half-valid payload.

use crate::document::{self, DocumentError, DocumentKind};
use crate::fetch::{self, FetchError};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("{0}")]
    Document(#[from] DocumentError),
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// A user-selected input source, immutable once chosen.
#[derive(Debug, Clone)]
pub enum RawInput {
    /// Text entered directly. Used verbatim, even when empty.
    TypedText(String),
    /// Path to a local file; cleaned of quotes and whitespace before use.
    FilePath(String),
    /// URL fetched over HTTP.
    Url(String),
}

/// Strip surrounding whitespace and enclosing quote characters from a path.
///
/// Shells and file managers love to hand over paths wrapped in quotes;
/// this undoes that. Idempotent.
pub fn clean_path(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '"' || c == '\'')
}

/// Resolve a raw input selection into normalised text.
pub async fn normalize(input: RawInput) -> Result<String, InputError> {
    match input {
        RawInput::TypedText(text) => Ok(text),
        RawInput::FilePath(path) => read_file(clean_path(&path)),
        RawInput::Url(url) => Ok(fetch::fetch_text(&url).await?),
    }
}

/// Read a local file, extracting text from PDF/DOCX and treating everything
/// else as UTF-8 text.
fn read_file(path: &str) -> Result<String, InputError> {
    let path = Path::new(path);

    match DocumentKind::from_path(path) {
        DocumentKind::Pdf => {
            println!("Loading PDF file...");
            Ok(document::extract_pdf(path)?)
        }
        DocumentKind::Docx => {
            println!("Loading DOCX file...");
            Ok(document::extract_docx(path)?)
        }
        DocumentKind::PlainText | DocumentKind::Unknown => {
            println!("Loading file...");
            Ok(std::fs::read_to_string(path)?)
        }
    }
}
