// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Three of them carry the harvest's own semantics: `NotFound` for a single
//! absent document or comment, `FetchFailure` for a broken listing run and
//! `NoData` for a document lookup that produced nothing. Every variant maps
//! to a distinct process exit code.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of upstream resource a lookup targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Document,
    Comment,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::Comment => write!(f, "comment"),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("No {kind} found for {id} (HTTP {status})")]
    NotFound {
        kind: ResourceKind,
        id: String,
        status: reqwest::StatusCode,
    },

    #[error("No data found for {document_id}: {reason}")]
    NoData { document_id: String, reason: String },

    #[error("Failed to fetch comments for {document_id} on {day} (page {page}): {reason}")]
    FetchFailure {
        document_id: String,
        day: String,
        page: u32,
        reason: String,
    },

    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cache file {path} rejected: {reason}")]
    InvalidCache { path: PathBuf, reason: String },

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl AppError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingConfiguration(_) | Self::Validation(_) => 2,
            Self::NoData { .. } => 3,
            Self::FetchFailure { .. } => 4,
            Self::NotFound { .. } => 5,
            Self::UpstreamStatus { .. }
            | Self::NetworkFailure(_)
            | Self::MalformedResponse(_) => 6,
            Self::Io(_)
            | Self::Csv(_)
            | Self::InvalidCache { .. }
            | Self::DeliveryFailed { .. } => 7,
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
