// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Rendering the report artifacts is pure ([`render`]); building the list of
//! file operations is pure ([`plan_report`]); only [`deliver`] touches the
//! filesystem.

mod render;
mod types;
mod writer;

use crate::error::AppError;
use crate::model::FilteredRecord;
use std::path::Path;

pub use render::{decode_attachments, encode_attachments, parse_csv_report, render_csv, render_json};
pub use types::{CompletedOperation, DeliveryTarget, FailedOperation, OutputPlan, OutputReport};
pub use writer::deliver;

/// Plans the JSON and CSV reports `<report_name>.json` and
/// `<report_name>.csv` under `output_dir`.
pub fn plan_report(
    records: &[FilteredRecord],
    output_dir: &Path,
    report_name: &str,
) -> Result<OutputPlan, AppError> {
    let json = render_json(records)?;
    let csv = render_csv(records)?;

    Ok(OutputPlan::new()
        .with_operation(DeliveryTarget::CreateDirectory {
            path: output_dir.to_path_buf(),
        })
        .with_operation(DeliveryTarget::WriteFile {
            path: output_dir.join(format!("{}.json", report_name)),
            content: json,
        })
        .with_operation(DeliveryTarget::WriteFile {
            path: output_dir.join(format!("{}.csv", report_name)),
            content: csv,
        }))
}

/// Renders and writes both report artifacts. Fails if any write failed.
pub fn write_outputs(
    records: &[FilteredRecord],
    output_dir: &Path,
    report_name: &str,
) -> Result<OutputReport, AppError> {
    let report = deliver(plan_report(records, output_dir, report_name)?)?;

    if !report.is_success() {
        return Err(AppError::DeliveryFailed {
            failures: report.failure_messages(),
        });
    }

    Ok(report)
}
