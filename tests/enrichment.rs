//! Detail enrichment followed by keyword filtering.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use regcomments::{enrich, filter_by_keyword, CommentFetcher, EnrichmentStats, FetchWindow, KeywordSet};
use serde_json::json;

fn fetcher(repo: ScriptedRepository) -> CommentFetcher<ScriptedRepository> {
    CommentFetcher::new(repo, FetchWindow::new(day(2020, 3, 2), false))
}

fn cotton_keywords() -> KeywordSet {
    KeywordSet::parse(&["cotton", "pima"]).unwrap()
}

#[tokio::test]
async fn detail_fields_are_merged_and_failures_skipped() {
    let repo = ScriptedRepository::new().with_detail(comment(
        "c-1",
        json!({ "content": "Cotton growers support this", "title": "From detail" }),
    ));
    let fetcher = fetcher(repo);
    let listed = vec![
        summary("c-1", "2020-03-01T12:00:00Z"),
        summary("c-2", "2020-03-01T10:00:00Z"),
    ];

    let (comments, stats) = enrich(&fetcher, listed).await;

    assert_eq!(stats, EnrichmentStats { enriched: 1, skipped: 1 });
    assert_eq!(ids(&comments), vec!["c-1", "c-2"]);
    assert_eq!(comments[0].content(), Some("Cotton growers support this"));
    assert_eq!(comments[0].attributes["title"], json!("From detail"));
    assert_eq!(comments[0].posted_date(), Some("2020-03-01T12:00:00Z"));
    assert_eq!(comments[1].content(), None);
    assert_eq!(fetcher.repository().detail_requests(), vec!["c-1", "c-2"]);
}

#[tokio::test]
async fn enriching_twice_changes_nothing() {
    let repo = ScriptedRepository::new()
        .with_detail(comment("c-1", json!({ "content": "pima", "title": "detail" })));
    let fetcher = fetcher(repo);

    let (once, _) = enrich(&fetcher, vec![summary("c-1", "2020-03-01T12:00:00Z")]).await;
    let (twice, _) = enrich(&fetcher, once.clone()).await;

    assert_eq!(once, twice);
}

#[tokio::test]
async fn pima_comment_with_attachment_reaches_the_report() {
    let repo = ScriptedRepository::new()
        .with_detail(comment(
            "FSA-2020-0004-0101",
            json!({
                "content": "The Pima program helps us",
                "attachments": [ {
                    "fileFormats": [
                        { "fileUrl": "https://downloads.regulations.gov/FSA-2020-0004-0101/attachment_1.pdf" },
                        { "fileUrl": "https://downloads.regulations.gov/FSA-2020-0004-0101/attachment_1.docx" }
                    ]
                } ]
            }),
        ))
        .with_detail(comment(
            "FSA-2020-0004-0102",
            json!({ "content": "Peanut allocations should change" }),
        ))
        .with_detail(comment("FSA-2020-0004-0103", json!({ "content": null })));
    let fetcher = fetcher(repo);
    let listed = vec![
        summary("FSA-2020-0004-0101", "2020-03-01T12:00:00Z"),
        summary("FSA-2020-0004-0102", "2020-03-01T11:00:00Z"),
        summary("FSA-2020-0004-0103", "2020-03-01T10:00:00Z"),
    ];

    let (comments, stats) = enrich(&fetcher, listed).await;
    let records = filter_by_keyword(&comments, &cotton_keywords());

    assert_eq!(stats.enriched, 3);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id.as_str(), "FSA-2020-0004-0101");
    assert_eq!(records[0].comment, "The Pima program helps us");
    assert_eq!(
        records[0].attachments,
        vec![
            "https://downloads.regulations.gov/FSA-2020-0004-0101/attachment_1.pdf",
            "https://downloads.regulations.gov/FSA-2020-0004-0101/attachment_1.docx",
        ]
    );
}

#[tokio::test]
async fn nothing_to_enrich_issues_no_requests() {
    let fetcher = fetcher(ScriptedRepository::new());

    let (comments, stats) = enrich(&fetcher, Vec::new()).await;

    assert!(comments.is_empty());
    assert_eq!(stats, EnrichmentStats::default());
    assert!(fetcher.repository().detail_requests().is_empty());
}
