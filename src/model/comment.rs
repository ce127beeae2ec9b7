use super::{Attributes, ExtraFields};
use crate::types::CommentId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A public comment, either the summary from the listing or the result of
/// merging its detail record in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Comment {
    /// Comment text. `None` when absent or null upstream.
    pub fn content(&self) -> Option<&str> {
        self.attributes.get("content").and_then(Value::as_str)
    }

    pub fn posted_date(&self) -> Option<&str> {
        self.attributes.get("postedDate").and_then(Value::as_str)
    }

    /// Every `fileUrl` of every file format of every attachment, in order.
    pub fn attachment_urls(&self) -> Vec<String> {
        let Some(attachments) = self.attributes.get("attachments").and_then(Value::as_array)
        else {
            return Vec::new();
        };

        attachments
            .iter()
            .filter_map(|a| a.get("fileFormats").and_then(Value::as_array))
            .flatten()
            .filter_map(|f| f.get("fileUrl").and_then(Value::as_str))
            .map(str::to_string)
            .collect()
    }

    /// Merges a detail record into this one.
    ///
    /// Detail values win on key collision; keys only the summary carries are
    /// kept. Applying the same detail twice leaves the record unchanged.
    pub fn merge_detail(&mut self, detail: Comment) {
        let Comment {
            id: _,
            attributes,
            extra,
        } = detail;
        self.attributes.extend(attributes);
        self.extra.extend(extra);
    }
}
