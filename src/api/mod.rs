// src/api/mod.rs
//! Regulations.gov API interaction: the ability to retrieve documents and
//! the comments posted on them.
//!
//! The HTTP details live in [`client`], response decoding in [`parser`], and
//! the day-bucketed listing walk in [`fetcher`]. Business logic depends on
//! [`RegulationsRepository`], never on reqwest.

pub mod client;
pub mod fetcher;
pub mod parser;
mod responses;
mod types;

use crate::error::AppError;
use crate::model::{Comment, Document};
use crate::types::{CommentId, DocumentId};

pub use types::{CommentPage, CommentQuery};

/// The ability to retrieve records from regulations.gov.
///
/// Implementations report a non-success status on the detail lookups as
/// [`AppError::NotFound`].
#[async_trait::async_trait]
pub trait RegulationsRepository: Send + Sync {
    async fn retrieve_document(&self, id: &DocumentId) -> Result<Document, AppError>;
    async fn retrieve_comment_page(&self, query: &CommentQuery) -> Result<CommentPage, AppError>;
    async fn retrieve_comment(&self, id: &CommentId) -> Result<Comment, AppError>;
}

#[async_trait::async_trait]
impl<R: RegulationsRepository + ?Sized> RegulationsRepository for Box<R> {
    async fn retrieve_document(&self, id: &DocumentId) -> Result<Document, AppError> {
        (**self).retrieve_document(id).await
    }

    async fn retrieve_comment_page(&self, query: &CommentQuery) -> Result<CommentPage, AppError> {
        (**self).retrieve_comment_page(query).await
    }

    async fn retrieve_comment(&self, id: &CommentId) -> Result<Comment, AppError> {
        (**self).retrieve_comment(id).await
    }
}

// Re-export the public interface
pub use client::{ApiResponse, RegulationsHttpClient};
pub use fetcher::{CommentFetcher, FetchWindow};
