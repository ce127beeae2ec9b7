// src/output/types.rs
//! Planned and executed report writes.

use crate::error::AppError;
use std::path::{Path, PathBuf};

/// Ordered file operations for one run's report artifacts.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }

    /// Bytes the plan writes if every operation succeeds.
    pub fn payload_size(&self) -> usize {
        self.operations
            .iter()
            .map(|op| match op {
                DeliveryTarget::WriteFile { content, .. } => content.len(),
                DeliveryTarget::CreateDirectory { .. } => 0,
            })
            .sum()
    }
}

/// A single filesystem effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Replace the file at `path` with `content`.
    WriteFile { path: PathBuf, content: String },
    /// Ensure `path` exists as a directory.
    CreateDirectory { path: PathBuf },
}

impl DeliveryTarget {
    pub fn path(&self) -> &Path {
        match self {
            Self::WriteFile { path, .. } | Self::CreateDirectory { path } => path,
        }
    }
}

/// What delivering a plan did. A failed operation does not stop the ones
/// after it.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub completed: Vec<CompletedOperation>,
    pub failed: Vec<FailedOperation>,
    pub elapsed_ms: u64,
}

impl OutputReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, operation: DeliveryTarget, bytes_written: usize) {
        self.completed.push(CompletedOperation {
            operation,
            bytes_written,
        });
    }

    pub fn record_failure(&mut self, operation: DeliveryTarget, error: &AppError) {
        self.failed.push(FailedOperation {
            operation,
            error: error.to_string(),
        });
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn bytes_written(&self) -> usize {
        self.completed.iter().map(|c| c.bytes_written).sum()
    }

    /// Paths of the report files actually written, in plan order.
    pub fn written_files(&self) -> Vec<&PathBuf> {
        self.completed
            .iter()
            .filter_map(|c| match &c.operation {
                DeliveryTarget::WriteFile { path, .. } => Some(path),
                DeliveryTarget::CreateDirectory { .. } => None,
            })
            .collect()
    }

    /// One `<path>: <error>` line per failed operation.
    pub fn failure_messages(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|f| format!("{}: {}", f.operation.path().display(), f.error))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CompletedOperation {
    pub operation: DeliveryTarget,
    pub bytes_written: usize,
}

#[derive(Debug, Clone)]
pub struct FailedOperation {
    pub operation: DeliveryTarget,
    pub error: String,
}
