use super::{parse_comment_start_date, Attributes, ExtraFields};
use crate::error::AppError;
use crate::types::DocumentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A regulatory document comments are attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Document {
    /// The opaque key that scopes the comment listing to this document.
    ///
    /// Upstream serves it as either a string or a number.
    pub fn object_id(&self) -> Result<String, AppError> {
        match self.attributes.get("objectId") {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => Err(AppError::MalformedResponse(format!(
                "document {} has no objectId",
                self.id
            ))),
        }
    }

    /// The first day comments can have been posted on.
    pub fn comment_start_date(&self) -> Result<NaiveDate, AppError> {
        let raw = self
            .attributes
            .get("commentStartDate")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::MalformedResponse(format!(
                    "document {} has no commentStartDate",
                    self.id
                ))
            })?;

        parse_comment_start_date(raw).ok_or_else(|| {
            AppError::MalformedResponse(format!(
                "document {} has an unreadable commentStartDate: {}",
                self.id, raw
            ))
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title").and_then(Value::as_str)
    }
}
