// src/api/fetcher.rs
//! Enumerates every comment on a document.
//!
//! The listing endpoint sorts newest-first and stops answering after a fixed
//! page depth, so a single query cannot reach old comments on a busy
//! document. Instead the walk buckets by posting day: starting at the
//! document's `commentStartDate` it pages through one day at a time, moving
//! to the next day when upstream flags the last page, until the end of the
//! [`FetchWindow`]. Comments are keyed by id, so overlap between pages
//! collapses to one entry.

use super::types::CommentQuery;
use super::RegulationsRepository;
use crate::error::AppError;
use crate::model::{format_posted_date, Comment, Document};
use crate::types::{CommentId, DocumentId};
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;

/// The range of posting days a listing walk covers, ending at "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    today: NaiveDate,
    include_today: bool,
}

impl FetchWindow {
    pub fn new(today: NaiveDate, include_today: bool) -> Self {
        Self {
            today,
            include_today,
        }
    }

    /// A window ending at the local calendar date.
    pub fn ending_today(include_today: bool) -> Self {
        Self::new(Local::now().date_naive(), include_today)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Whether comments posted on `day` are still to be fetched.
    pub fn contains(&self, day: NaiveDate) -> bool {
        if self.include_today {
            day <= self.today
        } else {
            day < self.today
        }
    }
}

/// Fetches documents, comment listings and comment details through a
/// [`RegulationsRepository`].
pub struct CommentFetcher<R> {
    repository: R,
    window: FetchWindow,
}

impl<R: RegulationsRepository> CommentFetcher<R> {
    pub fn new(repository: R, window: FetchWindow) -> Self {
        Self { repository, window }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn window(&self) -> FetchWindow {
        self.window
    }

    /// Fetches one document's metadata. Not retried.
    pub async fn get_document(&self, id: &DocumentId) -> Result<Document, AppError> {
        self.repository.retrieve_document(id).await
    }

    /// Fetches one comment's detail record. Not retried.
    pub async fn get_comment_detail(&self, id: &CommentId) -> Result<Comment, AppError> {
        self.repository.retrieve_comment(id).await
    }

    /// Returns every comment posted on `document_id` within the window,
    /// each id once, in first-seen order.
    ///
    /// A failed page request aborts the whole walk: nothing collected so
    /// far is returned.
    pub async fn list_comments(&self, document_id: &DocumentId) -> Result<Vec<Comment>, AppError> {
        let document = self.get_document(document_id).await.map_err(|e| {
            log::info!("No data found for {}", document_id);
            AppError::NoData {
                document_id: document_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        let object_id = document.object_id()?;
        let start = document.comment_start_date()?;
        log::info!(
            "Listing comments for {} (objectId {}) from {} to {}{}",
            document_id,
            object_id,
            format_posted_date(start),
            format_posted_date(self.window.today()),
            if self.window.include_today {
                " inclusive"
            } else {
                ""
            }
        );

        let mut comments: IndexMap<CommentId, Comment> = IndexMap::new();
        let mut query = CommentQuery::first_page(object_id, start);
        let mut requests = 0u32;

        while self.window.contains(query.posted_date) {
            let page = self
                .repository
                .retrieve_comment_page(&query)
                .await
                .map_err(|e| {
                    log::error!("Failed to fetch comments for {}", document_id);
                    AppError::FetchFailure {
                        document_id: document_id.to_string(),
                        day: format_posted_date(query.posted_date),
                        page: query.page_number,
                        reason: e.to_string(),
                    }
                })?;
            requests += 1;

            let received = page.comments.len();
            for comment in page.comments {
                comments.insert(comment.id.clone(), comment);
            }
            log::debug!(
                "{} page {}: {} comments ({} unique so far)",
                format_posted_date(query.posted_date),
                query.page_number,
                received,
                comments.len()
            );

            query = if page.last_page {
                query.next_day()
            } else if received == 0 {
                log::warn!(
                    "Empty page {} for {} without lastPage; moving to the next day",
                    query.page_number,
                    format_posted_date(query.posted_date)
                );
                query.next_day()
            } else {
                query.next_page()
            };
        }

        log::info!(
            "Collected {} unique comments for {} in {} requests",
            comments.len(),
            document_id,
            requests
        );
        Ok(comments.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_excludes_today_by_default() {
        let window = FetchWindow::new(day(2020, 3, 2), false);
        assert!(window.contains(day(2020, 3, 1)));
        assert!(!window.contains(day(2020, 3, 2)));
        assert!(!window.contains(day(2020, 3, 3)));
    }

    #[test]
    fn window_can_include_today() {
        let window = FetchWindow::new(day(2020, 3, 2), true);
        assert!(window.contains(day(2020, 3, 2)));
        assert!(!window.contains(day(2020, 3, 3)));
    }
}
