// src/lib.rs
//! notion-blocks library: typed content units that emit Notion block payloads.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Content units**: `Divider`, `Image`, `Mention`, `LinkPreview`,
//!   `RichText`, `KeyedTable`, `NumericTable`, `Column`, `ColumnList`, all
//!   variants of `ContentUnit`
//! - **Aggregation**: `Block`, `Document`, `ChildrenBatch`
//! - **Emission**: the `EmitPayload` trait and its `Payload` output
//! - **Error handling**: `EmitError`, `AppError`, `ValidationError`
//! - **Command-line plumbing**: `CommandLineInput`, `AssembleConfig`, output delivery

pub mod batch;
mod config;
mod constants;
mod error;
pub mod model;
mod output;
pub mod payload;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, EmitError, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{AssembleConfig, CommandLineInput, DocumentSource};
pub use crate::constants::{
    BLANK_TEXT, CALLOUT_COLOR, CALLOUT_ICON_EMOJI, LOG_FILE_NAME, ROW_COLOR_KEY,
};

// --- Content Units ---
pub use crate::model::{
    Block, Column, ColumnList, ContentUnit, Divider, Image, KeyedTable, LinkPreview, Mention,
    NumericTable, RichText, TableRow, TextKind, UnitCommon,
};

// --- Domain Types ---
pub use crate::types::{Annotations, Color, ParentId, UnitId};

// --- Emission ---
pub use crate::batch::{
    children_body, emit_blocks, emit_blocks_parallel, ChildrenBatch, Document,
};
pub use crate::payload::{EmitPayload, Payload};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};
