// src/output/mod.rs
//! Output handling with planning separated from execution.
//!
//! The binary builds an `OutputPlan` of pure values; `deliver` is the only
//! place that touches the filesystem or stdout.

mod types;
mod writer;

pub use types::{
    CompletedOperation, DeliveryTarget, ExecutionStats, FailedOperation, OutputPlan, OutputReport,
};
pub use writer::deliver;
