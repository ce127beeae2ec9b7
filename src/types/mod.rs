use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid {kind} ID format: {input}")]
    InvalidId { kind: &'static str, input: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid keyword: {keyword:?} - {reason}")]
    InvalidKeyword { keyword: String, reason: String },

    #[error("Invalid report name: {name} - {reason}")]
    InvalidReportName { name: String, reason: String },
}
