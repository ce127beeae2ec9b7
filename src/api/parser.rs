// src/api/parser.rs
//! Decoding of regulations.gov responses into domain types.
//!
//! Every function takes the raw [`ApiResponse`] so live responses and
//! recorded fixtures go through the same path.

use super::client::ApiResponse;
use super::responses::{CommentListResponse, DataEnvelope, DetailRecord};
use super::types::CommentPage;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::AppError;
use crate::model::{Comment, Document};
use crate::types::{CommentId, DocumentId};

/// Parse any response body, treating a non-success status as the error.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if !result.status.is_success() {
        return Err(AppError::UpstreamStatus {
            status: result.status,
            url: result.url,
        });
    }

    serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", result.url, e);
        AppError::MalformedResponse(format!(
            "{} (body: {})",
            e,
            preview(&result.data)
        ))
    })
}

/// Parse a `documentdetails` response for the document `id`.
pub fn parse_document_response(
    result: ApiResponse<String>,
    id: &DocumentId,
) -> Result<Document, AppError> {
    let record = parse_detail_record(result, id.as_str())?;
    Ok(Document {
        id: id.clone(),
        attributes: record.attributes,
        extra: record.extra,
    })
}

/// Parse a `documentdetails` response for the comment `id`.
pub fn parse_comment_response(
    result: ApiResponse<String>,
    id: &CommentId,
) -> Result<Comment, AppError> {
    let record = parse_detail_record(result, id.as_str())?;
    Ok(Comment {
        id: id.clone(),
        attributes: record.attributes,
        extra: record.extra,
    })
}

fn parse_detail_record(
    result: ApiResponse<String>,
    requested: &str,
) -> Result<DetailRecord, AppError> {
    let envelope: DataEnvelope<DetailRecord> = parse_api_response(result)?;
    if let Some(served) = envelope.data.id.as_deref().filter(|s| *s != requested) {
        log::debug!("Asked for {} but upstream labelled it {}", requested, served);
    }
    Ok(envelope.data)
}

/// Parse one page of the comment listing.
pub fn parse_comment_page(result: ApiResponse<String>) -> Result<CommentPage, AppError> {
    let response: CommentListResponse = parse_api_response(result)?;
    if let Some(total) = response.meta.total_elements {
        log::debug!("Listing reports {} comments in total", total);
    }
    Ok(CommentPage {
        comments: response.data,
        last_page: response.meta.last_page,
    })
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}
