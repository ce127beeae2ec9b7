// src/api/responses.rs
//! Wire envelopes of the regulations.gov JSON responses.

use crate::model::{Attributes, Comment, ExtraFields};
use serde::Deserialize;

/// `{ "data": ... }` wrapper used by the detail endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// The `data` object of a `documentdetails` response.
///
/// The record's own `id` is optional; callers key it by the id they asked
/// for.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Body of `GET /comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentListResponse {
    #[serde(default)]
    pub data: Vec<Comment>,
    pub meta: PageMeta,
}

/// Paging metadata of a listing response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub last_page: bool,
    #[serde(default)]
    pub total_elements: Option<u64>,
}
