//! scribefix - A post-processing correction pass for speech transcription output
//!
//! Recognized text is rewritten in two stages: ordered regex substitution,
//! then fuzzy replacement of single words against a list of known terms.

pub mod cli;
pub mod config;
pub mod correction;

pub use correction::{correct_text, correct_text_with, Corrector};

use thiserror::Error;

/// Main error type for scribefix
#[derive(Error, Debug)]
pub enum ScribefixError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid correction pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ScribefixError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "scribefix";
