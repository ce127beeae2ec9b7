// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Regulations.gov API
// ---------------------------------------------------------------------------

/// Base path of the regulations.gov API the harvest talks to.
pub const REGULATIONS_API_BASE_URL: &str = "https://beta.regulations.gov/api";

/// Endpoint serving both document and comment detail records.
pub const DOCUMENT_DETAILS_ENDPOINT: &str = "documentdetails";

/// Endpoint listing comment summaries.
pub const COMMENTS_ENDPOINT: &str = "comments";

/// Listing order: newest comments first.
pub const COMMENTS_SORT_ORDER: &str = "-postedDate";

/// Day format accepted by the `filter[postedDate]` query parameter.
pub const POSTED_DATE_FORMAT: &str = "%m-%d-%Y";

/// Page numbers start at one for every day bucket.
pub const FIRST_PAGE_NUMBER: u32 = 1;

/// Environment variable holding an optional API key.
pub const API_KEY_ENV_VAR: &str = "REGULATIONS_API_KEY";

// ---------------------------------------------------------------------------
// Harvest defaults
// ---------------------------------------------------------------------------

/// Document harvested when none is given on the command line.
pub const DEFAULT_DOCUMENT_ID: &str = "FSA-2020-0004-0003";

/// Topic keywords matched when none are given on the command line.
pub const DEFAULT_KEYWORDS: [&str; 2] = ["cotton", "pima"];

/// Base name of the JSON and CSV reports.
pub const DEFAULT_REPORT_NAME: &str = "cotton";

// ---------------------------------------------------------------------------
// Local files
// ---------------------------------------------------------------------------

/// Format version written into every cache file. Bump when the envelope
/// or the comment representation changes shape.
pub const CACHE_FORMAT_VERSION: u32 = 1;

/// Prefix of the cache file holding comments after detail merge.
pub const ENRICHED_CACHE_PREFIX: &str = "enriched_";

/// Column order of the CSV report.
pub const CSV_COLUMNS: [&str; 3] = ["id", "comment", "attachments"];

/// Log file written alongside console output.
pub const LOG_FILE_NAME: &str = "regcomments.log";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
