mod comment;
mod dates;
mod document;
mod record;

pub use comment::Comment;
pub use dates::{format_posted_date, parse_comment_start_date};
pub use document::Document;
pub use record::FilteredRecord;

use serde_json::{Map, Value};

/// Top-level JSON fields other than `id` and `attributes`, kept verbatim.
pub type ExtraFields = Map<String, Value>;

/// The `attributes` object of a regulations.gov record.
pub type Attributes = Map<String, Value>;
