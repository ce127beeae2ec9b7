use crate::types::CommentId;
use serde::{Deserialize, Serialize};

/// A comment that mentioned one of the topic keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredRecord {
    pub id: CommentId,
    pub comment: String,
    pub attachments: Vec<String>,
}
