// src/output/writer.rs
//! The only place report files touch the disk.

use super::types::{DeliveryTarget, OutputPlan, OutputReport};
use crate::error::AppError;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Runs every operation of `plan` in order, recording each outcome.
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let started = Instant::now();
    let mut report = OutputReport::new();
    log::debug!(
        "Delivering {} operations ({} bytes)",
        plan.operations.len(),
        plan.payload_size()
    );

    for operation in plan.operations {
        let outcome = match &operation {
            DeliveryTarget::WriteFile { path, content } => write_file(path, content),
            DeliveryTarget::CreateDirectory { path } => create_directory(path).map(|()| 0),
        };
        match outcome {
            Ok(bytes) => report.record_success(operation, bytes),
            Err(e) => {
                log::error!("Could not write {}: {}", operation.path().display(), e);
                report.record_failure(operation, &e);
            }
        }
    }

    report.elapsed_ms = started.elapsed().as_millis() as u64;
    log::debug!(
        "Delivery finished: {} ok, {} failed, {} bytes in {}ms",
        report.completed.len(),
        report.failed.len(),
        report.bytes_written(),
        report.elapsed_ms
    );
    Ok(report)
}

/// Writes to `<path>.tmp` and renames it over `path`, so readers never see
/// a half-written report.
fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    fs::write(&staging, content)?;
    fs::rename(&staging, path)?;

    log::info!("Wrote {}", path.display());
    Ok(content.len())
}

fn create_directory(path: &Path) -> Result<(), AppError> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        )));
    }
    fs::create_dir_all(path)?;
    log::debug!("Created {}", path.display());
    Ok(())
}
