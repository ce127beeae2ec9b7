// src/cache.rs
//! Disk cache of the intermediate comment lists.
//!
//! Two stages are cached per document: the raw listing
//! (`<document_id>.json`) and the list after detail merge
//! (`enriched_<document_id>.json`). Each file wraps the comments in a
//! versioned envelope naming the document and stage; a file whose envelope
//! does not match is never trusted. Files are written to a temporary
//! sibling and renamed into place, so a reader sees a complete file or none.

use crate::constants::{CACHE_FORMAT_VERSION, ENRICHED_CACHE_PREFIX};
use crate::error::AppError;
use crate::model::Comment;
use crate::types::DocumentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which pipeline stage a cache file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheStage {
    /// Comment summaries as returned by the listing walk.
    Listed,
    /// Summaries with their detail records merged in.
    Enriched,
}

impl CacheStage {
    pub fn file_name(&self, document_id: &DocumentId) -> String {
        match self {
            Self::Listed => format!("{}.json", document_id),
            Self::Enriched => format!("{}{}.json", ENRICHED_CACHE_PREFIX, document_id),
        }
    }
}

impl fmt::Display for CacheStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listed => write!(f, "listed"),
            Self::Enriched => write!(f, "enriched"),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CacheEnvelope<C> {
    version: u32,
    document_id: String,
    stage: CacheStage,
    comments: C,
}

/// File cache for comment lists, one file per document and stage.
pub struct CommentCache {
    cache_dir: PathBuf,
}

impl CommentCache {
    /// Opens (and creates if needed) the cache directory.
    pub async fn new(cache_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let cache_dir = cache_dir.into();
        tokio::fs::create_dir_all(&cache_dir).await?;
        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn path_for(&self, stage: CacheStage, document_id: &DocumentId) -> PathBuf {
        self.cache_dir.join(stage.file_name(document_id))
    }

    /// Returns the cached comments, or `None` when the file is absent or
    /// rejected. Rejections are logged; the caller refetches.
    pub async fn load(&self, stage: CacheStage, document_id: &DocumentId) -> Option<Vec<Comment>> {
        match self.read(stage, document_id).await {
            Ok(Some(comments)) => {
                log::info!(
                    "Cache hit: {} comments ({}) for {}",
                    comments.len(),
                    stage,
                    document_id
                );
                Some(comments)
            }
            Ok(None) => {
                log::debug!("Cache miss: {} ({})", document_id, stage);
                None
            }
            Err(e) => {
                log::warn!("Ignoring cache: {}", e);
                None
            }
        }
    }

    /// Reads and validates a cache file. `Ok(None)` means no file.
    pub async fn read(
        &self,
        stage: CacheStage,
        document_id: &DocumentId,
    ) -> Result<Option<Vec<Comment>>, AppError> {
        let path = self.path_for(stage, document_id);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let envelope: CacheEnvelope<Vec<Comment>> =
            serde_json::from_str(&content).map_err(|e| AppError::InvalidCache {
                path: path.clone(),
                reason: format!("not a cache file: {}", e),
            })?;

        if envelope.version != CACHE_FORMAT_VERSION {
            return Err(AppError::InvalidCache {
                path,
                reason: format!(
                    "format version {} (expected {})",
                    envelope.version, CACHE_FORMAT_VERSION
                ),
            });
        }
        if envelope.document_id != document_id.as_str() {
            return Err(AppError::InvalidCache {
                path,
                reason: format!("holds document {}", envelope.document_id),
            });
        }
        if envelope.stage != stage {
            return Err(AppError::InvalidCache {
                path,
                reason: format!("holds the {} stage", envelope.stage),
            });
        }

        Ok(Some(envelope.comments))
    }

    /// Writes the comments for `stage`, replacing any previous file whole.
    pub async fn store(
        &self,
        stage: CacheStage,
        document_id: &DocumentId,
        comments: &[Comment],
    ) -> Result<PathBuf, AppError> {
        let envelope = CacheEnvelope {
            version: CACHE_FORMAT_VERSION,
            document_id: document_id.to_string(),
            stage,
            comments,
        };
        let json = serde_json::to_string_pretty(&envelope)?;

        let path = self.path_for(stage, document_id);
        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, json.as_bytes()).await?;
        tokio::fs::rename(&staging, &path).await?;

        log::info!(
            "Cached {} comments ({}) at {}",
            comments.len(),
            stage,
            path.display()
        );
        Ok(path)
    }
}
