use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Regulations.gov identifiers look like `FSA-2020-0004-0003`: letters,
/// digits, dashes, underscores and dots. Anything else (slashes in
/// particular) would leak into URL paths and cache file names.
static REGULATIONS_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$")
        .expect("Failed to compile regulations ID regex - this is a bug in the code")
});

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentMarker;

/// Human-readable name of an ID kind, used in validation messages.
pub trait IdKind {
    const NAME: &'static str;
}

impl IdKind for DocumentMarker {
    const NAME: &'static str = "document";
}

impl IdKind for CommentMarker {
    const NAME: &'static str = "comment";
}

/// Type aliases for specific ID types
pub type DocumentId = Id<DocumentMarker>;
pub type CommentId = Id<CommentMarker>;

impl<T: IdKind> Id<T> {
    /// Parse and validate an ID supplied by the user.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if !REGULATIONS_ID.is_match(trimmed) {
            return Err(ValidationError::InvalidId {
                kind: T::NAME,
                input: input.to_string(),
            });
        }
        Ok(Self::from_normalized(trimmed.to_string()))
    }
}

impl<T> Id<T> {
    /// Create an ID from a string the upstream API already vouched for.
    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_normalized(value))
    }
}
