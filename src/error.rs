//! Error types for INI parsing and document manipulation

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, IniError>;

#[derive(Error, Debug)]
pub enum IniError {
    /// A line matched none of the section/comment/key grammar alternatives.
    #[error("{origin}:{line}: unrecognized line: {text:?}")]
    Format {
        origin: String,
        line: usize,
        text: String,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("cannot read [{}] {key} = {value:?} as {target}", .section.as_deref().unwrap_or(""))]
    NumberFormat {
        section: Option<String>,
        key: String,
        value: String,
        target: &'static str,
    },

    #[error("document already loaded from {origin}; use merge to add more data")]
    AlreadyLoaded { origin: String },

    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot fetch {url}: {message}")]
    Fetch { url: String, message: String },
}

impl IniError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Line number for format errors, `None` for every other kind.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}
