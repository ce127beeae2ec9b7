use crate::constants::{
    API_KEY_ENV_VAR, DEFAULT_DOCUMENT_ID, DEFAULT_KEYWORDS, DEFAULT_REPORT_NAME,
    REGULATIONS_API_BASE_URL,
};
use crate::error::AppError;
use crate::types::{ApiKey, BaseUrl, DocumentId, KeywordSet, ValidationError};
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// regulations.gov document whose comments are harvested
    #[arg(long, default_value = DEFAULT_DOCUMENT_ID)]
    pub document_id: String,

    /// Topic keyword to match in comment text (repeatable); each also
    /// matches with its first letter capitalized
    #[arg(short, long = "keyword", default_values_t = DEFAULT_KEYWORDS.map(String::from))]
    pub keywords: Vec<String>,

    /// Base URL of the regulations.gov API
    #[arg(long, default_value = REGULATIONS_API_BASE_URL)]
    pub base_url: String,

    /// Reuse and write the intermediate comment lists in --cache-dir
    #[arg(long, default_value_t = false)]
    pub cache: bool,

    /// Directory holding the intermediate comment lists
    #[arg(long, default_value = ".")]
    pub cache_dir: String,

    /// Directory the JSON and CSV reports are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Base name of the report files (<name>.json, <name>.csv)
    #[arg(long, default_value = DEFAULT_REPORT_NAME)]
    pub report_name: String,

    /// Also fetch comments posted today (the walk stops before today otherwise)
    #[arg(long, default_value_t = false)]
    pub include_today: bool,
}

/// Resolved run configuration, validated and ready to drive every stage.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub document_id: DocumentId,
    pub keywords: KeywordSet,
    pub base_url: BaseUrl,
    pub api_key: Option<ApiKey>,
    /// `Some` when the intermediate cache is enabled.
    pub cache_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub report_name: String,
    pub include_today: bool,
    pub debug: bool,
}

impl RunConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key = match std::env::var(API_KEY_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Some(ApiKey::new(raw)?),
            _ => None,
        };
        Self::from_input(cli, api_key)
    }

    /// Validates CLI input with an already resolved API key.
    pub fn from_input(cli: CommandLineInput, api_key: Option<ApiKey>) -> Result<Self, AppError> {
        let document_id = DocumentId::parse(&cli.document_id)?;
        let keywords = KeywordSet::parse(&cli.keywords)?;
        let base_url = BaseUrl::parse(&cli.base_url)?;
        let report_name = validate_report_name(&cli.report_name)?;

        Ok(RunConfig {
            document_id,
            keywords,
            base_url,
            api_key,
            cache_dir: cli.cache.then(|| PathBuf::from(cli.cache_dir)),
            output_dir: PathBuf::from(cli.output_dir),
            report_name,
            include_today: cli.include_today,
            debug: cli.debug,
        })
    }

    pub fn json_report_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.report_name))
    }

    pub fn csv_report_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.csv", self.report_name))
    }
}

fn validate_report_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField("report name"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(ValidationError::InvalidReportName {
            name: name.to_string(),
            reason: "must be a file name, not a path".to_string(),
        });
    }
    Ok(name.to_string())
}
