use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for LazyClock
#[derive(Error, Debug)]
pub enum LazyClockError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Gemini error: {0}")]
    Gemini(#[from] GeminiError),

    #[error("Clockify error: {0}")]
    Clockify(#[from] ClockifyError),

    #[error("Invalid entries: {0}")]
    Validation(#[from] ValidationError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Day description is empty")]
    EmptyDescription,

    #[error("Scripted prompter ran out of answers at: {0}")]
    ScriptExhausted(String),

    #[error("{failed} of {total} entries could not be sent")]
    SubmissionIncomplete { failed: usize, total: usize },
}

/// Errors related to the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Response has no generated text: {0}")]
    MissingText(String),

    #[error("Generated text is not a valid entry list ({message}). Raw text: {raw}")]
    InvalidJson { message: String, raw: String },
}

/// Errors related to the Clockify API
#[derive(Error, Debug)]
pub enum ClockifyError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// First rule violated by an entry sequence
///
/// `entry` is the 1-based position of the offending entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Entry {entry}: invalid start time '{value}' (expected HH:MM)")]
    InvalidStart { entry: usize, value: String },

    #[error("Entry {entry}: invalid end time '{value}' (expected HH:MM)")]
    InvalidEnd { entry: usize, value: String },

    #[error("Entry {entry}: end must be later than start")]
    EndNotAfterStart { entry: usize },

    #[error("Entry {entry}: overlaps with the previous entry")]
    Overlap { entry: usize },
}

impl ValidationError {
    /// 1-based index of the entry that failed
    pub fn entry(&self) -> usize {
        match self {
            ValidationError::InvalidStart { entry, .. }
            | ValidationError::InvalidEnd { entry, .. }
            | ValidationError::EndNotAfterStart { entry }
            | ValidationError::Overlap { entry } => *entry,
        }
    }
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        // the request URL may carry the API key
        let err = err.without_url();
        if let Some(status) = err.status() {
            GeminiError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            GeminiError::RequestFailed(err.to_string())
        }
    }
}

impl From<reqwest::Error> for ClockifyError {
    fn from(err: reqwest::Error) -> Self {
        // the request URL may carry the API key
        let err = err.without_url();
        if let Some(status) = err.status() {
            ClockifyError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ClockifyError::RequestFailed(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, LazyClockError>;
