// src/error.rs
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// The page answered 404. The URL may be wrong or access may be restricted.
    #[error("404 Not Found: {url} (the URL may be wrong or access may be restricted)")]
    NotFound { url: String },

    /// The page no longer has the layout the extractor expects, or the
    /// request was served a consent/bot wall instead.
    #[error("Expected page structure not found: {0}")]
    StructureNotFound(&'static str),

    /// A market value could not be turned into a number.
    #[error("Not a market value: {text:?}")]
    Parse { text: String },

    #[error("Invalid request header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Chart window failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
