//! Content units and the block aggregator.
//!
//! Leaves (`Divider`, `Image`, `Mention`, `LinkPreview`, `RichText`) emit a
//! fixed-shape payload from their own fields. Composites (`KeyedTable`,
//! `NumericTable`, `Column`, `ColumnList`) build nested children. Every unit is
//! a variant of the closed `ContentUnit` enum, and a `Block` merges the
//! payloads of several units that share a parent.

mod block;
mod columns;
mod common;
mod leaves;
mod rich_text;
mod tables;
mod unit;

pub use block::Block;
pub use columns::ColumnList;
pub use common::UnitCommon;
pub use leaves::{Column, Divider, Image, LinkPreview, Mention};
pub use rich_text::{RichText, TextKind};
pub use tables::{KeyedTable, NumericTable, TableRow};
pub use unit::ContentUnit;
