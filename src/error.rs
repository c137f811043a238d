//! Structured error types for gallerywall.
//!
//! The layout engine itself cannot fail. Errors only come from the document
//! surface: JSON that doesn't parse, a document that names no column source
//! or whose heights can't fit a column, and the CLI's file access.

use thiserror::Error;

/// The unified error type returned by the document-level API.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// JSON input failed to parse as a gallery document.
    #[error("Failed to parse gallery document: {source}{}", format_hint(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },

    /// The document gave neither `columnCount` nor `viewportWidth`.
    #[error("Gallery document needs either `columnCount` or `viewportWidth`")]
    MissingColumns,

    /// Item heights plus gaps could exceed the largest representable column.
    #[error("{items} items of up to {tallest}px with a {gap}px gap overflow a column height")]
    HeightOverflow { items: usize, tallest: u32, gap: u32 },

    /// Reading input or writing output failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {hint}")
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the gallery document schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        LayoutError::ParseError { source: e, hint }
    }
}
