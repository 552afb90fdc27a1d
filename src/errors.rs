/*!
 * Error types for the subtool application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when rendering or parsing subtitle documents
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubtitleError {
    /// The requested output format is not one of srt, vtt, ass or sub
    #[error("Unsupported subtitle format: {0}")]
    UnsupportedFormat(String),

    /// A subtitle block could not be parsed
    ///
    /// The SRT parser recovers from this locally, so it never escapes
    /// `parse_srt_string`.
    #[error("Malformed subtitle input: {0}")]
    MalformedInput(String),
}

/// Errors that can occur when editing segment timings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimingError {
    /// Segment index outside the sequence
    #[error("Invalid segment index {index} (sequence has {len} segments)")]
    InvalidIndex {
        /// Index requested by the caller
        index: usize,
        /// Length of the sequence at the time of the call
        len: usize,
    },
}

/// Errors reported by a translation backend
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making a request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Target language code is not a known ISO 639 code
    #[error("Unsupported target language: {0}")]
    UnsupportedLanguage(String),
}

/// Errors raised by the in-memory session store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// No session registered under this id
    #[error("Session not found: {0}")]
    NotFound(String),

    /// Session exists but has no segments for the requested language
    #[error("No {language} segments in session {id}")]
    LanguageNotFound {
        /// Session id
        id: String,
        /// Requested language code
        language: String,
    },

    /// Language code is not a known ISO 639 code
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    /// Translated sequence does not line up with the original
    #[error("Translation has {actual} segments, expected {expected}")]
    MismatchedTranslation {
        /// Number of original segments
        expected: usize,
        /// Number of translated segments supplied
        actual: usize,
    },

    /// The originals changed while a translation of them was in flight
    #[error("Segments of session {0} changed during translation")]
    Stale(String),

    /// A timing edit on the session's segments failed
    #[error("Timing error: {0}")]
    Timing(#[from] TimingError),

    /// Rendering the session's segments failed
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from a timing edit
    #[error("Timing error: {0}")]
    Timing(#[from] TimingError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from the session store
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
