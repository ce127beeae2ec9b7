//! Shared fixtures: an in-memory regulations.gov with scripted pages.

#![allow(dead_code)]

use chrono::NaiveDate;
use regcomments::{
    AppError, Comment, CommentId, CommentPage, CommentQuery, Document, DocumentId,
    RegulationsRepository, ResourceKind,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

pub const DOCUMENT_ID: &str = "FSA-2020-0004-0003";
pub const OBJECT_ID: &str = "09000064846eebaf";

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn document_id() -> DocumentId {
    DocumentId::parse(DOCUMENT_ID).unwrap()
}

pub fn document(start: &str) -> Document {
    serde_json::from_value(json!({
        "id": DOCUMENT_ID,
        "type": "documents",
        "attributes": {
            "objectId": OBJECT_ID,
            "commentStartDate": start,
            "title": "Pima Agriculture Cotton Trust Fund"
        }
    }))
    .unwrap()
}

pub fn comment(id: &str, attributes: Value) -> Comment {
    serde_json::from_value(json!({
        "id": id,
        "type": "comments",
        "attributes": attributes
    }))
    .unwrap()
}

pub fn summary(id: &str, posted: &str) -> Comment {
    comment(id, json!({ "postedDate": posted, "title": format!("Comment {}", id) }))
}

pub fn ids(comments: &[Comment]) -> Vec<String> {
    comments.iter().map(|c| c.id.to_string()).collect()
}

enum PageScript {
    Page { comments: Vec<Comment>, last_page: bool },
    Fail(StatusCode),
}

/// Serves scripted responses and records every request.
///
/// A (day, page) pair without a script answers with an empty last page.
#[derive(Default)]
pub struct ScriptedRepository {
    documents: HashMap<String, Document>,
    pages: HashMap<(NaiveDate, u32), PageScript>,
    details: HashMap<String, Comment>,
    page_requests: Mutex<Vec<CommentQuery>>,
    detail_requests: Mutex<Vec<String>>,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.insert(document.id.to_string(), document);
        self
    }

    pub fn with_page(
        mut self,
        day: NaiveDate,
        page: u32,
        comments: Vec<Comment>,
        last_page: bool,
    ) -> Self {
        self.pages.insert((day, page), PageScript::Page { comments, last_page });
        self
    }

    pub fn with_failure(mut self, day: NaiveDate, page: u32, status: StatusCode) -> Self {
        self.pages.insert((day, page), PageScript::Fail(status));
        self
    }

    pub fn with_detail(mut self, detail: Comment) -> Self {
        self.details.insert(detail.id.to_string(), detail);
        self
    }

    pub fn page_requests(&self) -> Vec<CommentQuery> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn detail_requests(&self) -> Vec<String> {
        self.detail_requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RegulationsRepository for ScriptedRepository {
    async fn retrieve_document(&self, id: &DocumentId) -> Result<Document, AppError> {
        self.documents
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| AppError::NotFound {
                kind: ResourceKind::Document,
                id: id.to_string(),
                status: StatusCode::NOT_FOUND,
            })
    }

    async fn retrieve_comment_page(&self, query: &CommentQuery) -> Result<CommentPage, AppError> {
        self.page_requests.lock().unwrap().push(query.clone());
        match self.pages.get(&(query.posted_date, query.page_number)) {
            Some(PageScript::Page { comments, last_page }) => Ok(CommentPage {
                comments: comments.clone(),
                last_page: *last_page,
            }),
            Some(PageScript::Fail(status)) => Err(AppError::UpstreamStatus {
                status: *status,
                url: "memory://comments".to_string(),
            }),
            None => Ok(CommentPage {
                comments: Vec::new(),
                last_page: true,
            }),
        }
    }

    async fn retrieve_comment(&self, id: &CommentId) -> Result<Comment, AppError> {
        self.detail_requests.lock().unwrap().push(id.to_string());
        self.details
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| AppError::NotFound {
                kind: ResourceKind::Comment,
                id: id.to_string(),
                status: StatusCode::NOT_FOUND,
            })
    }
}
