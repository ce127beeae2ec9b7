// src/pipeline.rs
//! Pipeline capability traits and the harvest that implements them.
//!
//! A run has three stages: collect the enriched comments of a document,
//! compose the keyword report, deliver it to disk. Each trait describes a
//! single stage so it can be exercised in isolation.

use crate::api::{CommentFetcher, RegulationsRepository};
use crate::cache::{CacheStage, CommentCache};
use crate::config::RunConfig;
use crate::error::AppError;
use crate::model::{Comment, FilteredRecord};
use crate::output::{write_outputs, OutputReport};
use crate::report::{enrich, filter_by_keyword, EnrichmentStats};
use crate::types::DocumentId;
use std::path::PathBuf;

/// Retrieves the enriched comments of a document.
#[async_trait::async_trait]
pub trait CommentSource {
    async fn collect(&self, id: &DocumentId) -> Result<Vec<Comment>, AppError>;
}

/// Turns enriched comments into report records.
pub trait ReportComposer {
    fn compose(&self, comments: &[Comment]) -> Vec<FilteredRecord>;
}

/// Writes report records to their destinations.
pub trait ReportDelivery {
    fn deliver(&self, records: &[FilteredRecord]) -> Result<OutputReport, AppError>;
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestSummary {
    pub comments: usize,
    pub matched: usize,
    /// Zero counts when the enriched list came from the cache.
    pub enrichment: EnrichmentStats,
    pub written: Vec<PathBuf>,
}

/// Orchestrates listing, enrichment, filtering and delivery for one
/// document, consulting the cache between stages when it is enabled.
pub struct CommentHarvest<'a, R> {
    config: &'a RunConfig,
    fetcher: CommentFetcher<R>,
    cache: Option<CommentCache>,
}

impl<'a, R: RegulationsRepository> CommentHarvest<'a, R> {
    pub async fn new(config: &'a RunConfig, fetcher: CommentFetcher<R>) -> Result<Self, AppError> {
        let cache = match &config.cache_dir {
            Some(dir) => {
                log::info!("Cache enabled in {}", dir.display());
                Some(CommentCache::new(dir).await?)
            }
            None => {
                log::debug!("Cache disabled; every stage goes to regulations.gov");
                None
            }
        };
        Ok(Self {
            config,
            fetcher,
            cache,
        })
    }

    pub fn fetcher(&self) -> &CommentFetcher<R> {
        &self.fetcher
    }

    /// Runs every stage for the configured document.
    pub async fn run(&self) -> Result<HarvestSummary, AppError> {
        let (comments, enrichment) = self.gather(&self.config.document_id).await?;
        let records = self.compose(&comments);
        let report = self.deliver(&records)?;

        Ok(HarvestSummary {
            comments: comments.len(),
            matched: records.len(),
            enrichment,
            written: report.written_files().into_iter().cloned().collect(),
        })
    }

    /// Enriched comments plus what enrichment did on this run.
    async fn gather(
        &self,
        id: &DocumentId,
    ) -> Result<(Vec<Comment>, EnrichmentStats), AppError> {
        if let Some(cache) = &self.cache {
            if let Some(comments) = cache.load(CacheStage::Enriched, id).await {
                return Ok((comments, EnrichmentStats::default()));
            }
        }

        let listed = self.listed_comments(id).await?;
        self.enriched_comments(id, listed).await
    }

    async fn listed_comments(&self, id: &DocumentId) -> Result<Vec<Comment>, AppError> {
        if let Some(cache) = &self.cache {
            if let Some(comments) = cache.load(CacheStage::Listed, id).await {
                return Ok(comments);
            }
        }

        let comments = self.fetcher.list_comments(id).await?;
        if let Some(cache) = &self.cache {
            cache.store(CacheStage::Listed, id, &comments).await?;
        }
        Ok(comments)
    }

    async fn enriched_comments(
        &self,
        id: &DocumentId,
        listed: Vec<Comment>,
    ) -> Result<(Vec<Comment>, EnrichmentStats), AppError> {
        let (comments, stats) = enrich(&self.fetcher, listed).await;
        if let Some(cache) = &self.cache {
            cache.store(CacheStage::Enriched, id, &comments).await?;
        }
        Ok((comments, stats))
    }
}

#[async_trait::async_trait]
impl<R: RegulationsRepository> CommentSource for CommentHarvest<'_, R> {
    async fn collect(&self, id: &DocumentId) -> Result<Vec<Comment>, AppError> {
        let (comments, _) = self.gather(id).await?;
        Ok(comments)
    }
}

impl<R: RegulationsRepository> ReportComposer for CommentHarvest<'_, R> {
    fn compose(&self, comments: &[Comment]) -> Vec<FilteredRecord> {
        filter_by_keyword(comments, &self.config.keywords)
    }
}

impl<R: RegulationsRepository> ReportDelivery for CommentHarvest<'_, R> {
    fn deliver(&self, records: &[FilteredRecord]) -> Result<OutputReport, AppError> {
        write_outputs(records, &self.config.output_dir, &self.config.report_name)
    }
}
