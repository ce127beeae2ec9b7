// src/report.rs
//! Enrichment and keyword filtering of a document's comments.

use crate::api::{CommentFetcher, RegulationsRepository};
use crate::model::{Comment, FilteredRecord};
use crate::types::KeywordSet;

/// Counts of what enrichment did, for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    pub enriched: usize,
    pub skipped: usize,
}

/// Merges each comment's detail record into its summary.
///
/// Details are fetched one at a time in list order. A comment whose detail
/// cannot be fetched is logged and kept as it was.
pub async fn enrich<R: RegulationsRepository>(
    fetcher: &CommentFetcher<R>,
    mut comments: Vec<Comment>,
) -> (Vec<Comment>, EnrichmentStats) {
    let total = comments.len();
    let mut stats = EnrichmentStats::default();

    for (i, comment) in comments.iter_mut().enumerate() {
        log::debug!("{} of {}", i, total);
        match fetcher.get_comment_detail(&comment.id).await {
            Ok(detail) => {
                comment.merge_detail(detail);
                stats.enriched += 1;
            }
            Err(e) => {
                log::warn!("Skipping enrichment of {}: {}", comment.id, e);
                stats.skipped += 1;
            }
        }
    }

    log::info!(
        "Enriched {} of {} comments ({} skipped)",
        stats.enriched,
        total,
        stats.skipped
    );
    (comments, stats)
}

/// Keeps the comments whose text mentions any keyword.
///
/// Comments without text never match.
pub fn filter_by_keyword(comments: &[Comment], keywords: &KeywordSet) -> Vec<FilteredRecord> {
    let records: Vec<FilteredRecord> = comments
        .iter()
        .filter_map(|comment| {
            let content = comment.content()?;
            keywords.matches(content).then(|| FilteredRecord {
                id: comment.id.clone(),
                comment: content.to_string(),
                attachments: comment.attachment_urls(),
            })
        })
        .collect();

    log::info!(
        "{} of {} comments mention {}",
        records.len(),
        comments.len(),
        keywords
    );
    records
}
