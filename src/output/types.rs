// src/output/types.rs
//! Type definitions for delivering rendered request bodies.
//!
//! Plans and reports are plain values. Building a plan never touches the
//! filesystem; only `deliver` does.

use std::path::PathBuf;

/// Ordered list of deliveries for one assembly run.
#[derive(Debug, Clone, Default)]
pub struct OutputPlan {
    /// Deliveries, performed in insertion order
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    /// Creates a plan with nothing to deliver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a delivery to the plan.
    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }
}

/// Where rendered request bodies go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Write the bodies to a file, creating parent directories as needed
    WriteFile { path: PathBuf, content: String },
    /// Print the bodies to stdout, followed by a newline
    PrintToStdout { content: String },
}

/// Outcome of delivering a plan.
///
/// Every operation in the plan ends up in exactly one of `completed` or
/// `failed`.
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    /// Deliveries that finished
    pub completed: Vec<CompletedOperation>,
    /// Deliveries that failed, with the error text
    pub failed: Vec<FailedOperation>,
    /// Totals across the whole plan
    pub stats: ExecutionStats,
}

impl OutputReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished delivery and adds its bytes to the totals.
    pub fn with_completed(mut self, operation: CompletedOperation) -> Self {
        self.stats.operations_completed += 1;
        self.stats.bytes_written += operation.bytes_written;
        self.completed.push(operation);
        self
    }

    /// Records a failed delivery.
    pub fn with_failed(mut self, operation: FailedOperation) -> Self {
        self.stats.operations_failed += 1;
        self.failed.push(operation);
        self
    }

    /// True when no delivery failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Error text of each failed delivery, in plan order.
    pub fn failure_messages(&self) -> Vec<String> {
        self.failed.iter().map(|f| f.error.clone()).collect()
    }
}

/// A delivery that finished.
#[derive(Debug, Clone)]
pub struct CompletedOperation {
    pub operation: DeliveryTarget,
    /// Bytes of request-body JSON written, excluding the trailing newline on stdout
    pub bytes_written: usize,
    pub duration_ms: u64,
}

/// A delivery that failed.
#[derive(Debug, Clone)]
pub struct FailedOperation {
    pub operation: DeliveryTarget,
    pub error: String,
}

/// Totals for one delivered plan.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    pub operations_completed: usize,
    pub operations_failed: usize,
    pub bytes_written: usize,
    pub total_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stdout(content: &str) -> DeliveryTarget {
        DeliveryTarget::PrintToStdout {
            content: content.to_string(),
        }
    }

    #[test]
    fn report_tallies_both_outcomes() {
        let report = OutputReport::new()
            .with_completed(CompletedOperation {
                operation: stdout("{}"),
                bytes_written: 2,
                duration_ms: 0,
            })
            .with_failed(FailedOperation {
                operation: stdout("[]"),
                error: "broken pipe".to_string(),
            });

        assert!(!report.is_success());
        assert_eq!(report.stats.operations_completed, 1);
        assert_eq!(report.stats.operations_failed, 1);
        assert_eq!(report.stats.bytes_written, 2);
        assert_eq!(report.failure_messages(), vec!["broken pipe".to_string()]);
    }

    #[test]
    fn plans_keep_insertion_order() {
        let plan = OutputPlan::new().with_operation(stdout("a")).with_operation(stdout("b"));
        assert_eq!(plan.operations, vec![stdout("a"), stdout("b")]);
    }
}
