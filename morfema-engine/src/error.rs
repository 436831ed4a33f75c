//! Engine error types
//!
//! Per-word analyzer and lookup failures never propagate into the
//! disambiguation cascade; they degrade to "no candidates" for that word.
//! The types here exist so callers and tests can still observe them.

use thiserror::Error;

/// Errors raised while building or driving the post-filter
#[derive(Error, Debug)]
pub enum EngineError {
    /// The post-filter cannot work without a lexicon
    #[error("a lexicon is required to build the post-filter")]
    MissingLexicon,

    /// A record-level failure from the tag model
    #[error(transparent)]
    Core(#[from] morfema_core::CoreError),
}

/// A failure of the external morphological analyzer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("analyzer failure: {message}")]
pub struct AnalyzerError {
    pub message: String,
}

impl AnalyzerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A failure of the lexicon backend (connection loss, malformed row)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("lexicon lookup failed: {message}")]
pub struct LookupError {
    pub message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
