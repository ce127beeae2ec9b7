// src/lib.rs
//! regcomments library: harvests public comments on a regulations.gov
//! document and filters them into keyword reports.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ResourceKind`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `RunConfig`
//! - **Domain model**: `Document`, `Comment`, `FilteredRecord`
//! - **API client**: `RegulationsRepository`, `RegulationsHttpClient`, `CommentFetcher`
//! - **Reporting**: `enrich`, `filter_by_keyword`, `write_outputs`
//! - **Pipeline**: `CommentHarvest` and its stage traits

mod api;
mod cache;
mod config;
mod constants;
mod error;
mod model;
mod output;
mod pipeline;
mod report;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, ResourceKind};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, RunConfig};
pub use crate::constants::LOG_FILE_NAME;

// --- Domain Model ---
pub use crate::model::{
    format_posted_date, parse_comment_start_date, Comment, Document, FilteredRecord,
};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, BaseUrl, CommentId, DocumentId, Id, Keyword, KeywordSet,
};

// --- API Client ---
pub use crate::api::{
    client::extract_response_text,
    parser::{parse_comment_page, parse_comment_response, parse_document_response},
    ApiResponse, CommentFetcher, CommentPage, CommentQuery, FetchWindow, RegulationsHttpClient,
    RegulationsRepository,
};

// --- Cache ---
pub use crate::cache::{CacheStage, CommentCache};

// --- Reporting ---
pub use crate::output::{
    decode_attachments, deliver, encode_attachments, parse_csv_report, plan_report, render_csv,
    render_json, write_outputs, DeliveryTarget, OutputPlan, OutputReport,
};
pub use crate::report::{enrich, filter_by_keyword, EnrichmentStats};

// --- Pipeline Traits ---
pub use crate::pipeline::{
    CommentHarvest, CommentSource, HarvestSummary, ReportComposer, ReportDelivery,
};
