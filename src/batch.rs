// src/batch.rs
//! Documents and per-parent request bodies.
//!
//! A `Document` is the serialized form of an ordered list of blocks, as read
//! by the command-line tool. `ChildrenBatch` groups blocks under their parent
//! and renders one "append block children" body per parent, ready for an
//! HTTP client to send unmodified.

use crate::error::{AppError, EmitError};
use crate::model::Block;
use crate::payload::{EmitPayload, Payload};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;

/// An ordered list of blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        log::debug!("Reading document from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw).map_err(|source| AppError::JsonParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Emits blocks one after another, stopping at the first failure.
pub fn emit_blocks(blocks: &[Block]) -> Result<Vec<Payload>, EmitError> {
    blocks.iter().map(EmitPayload::emit).collect()
}

/// Emits blocks on the rayon pool.
///
/// Output order matches input order, and the reported error is the one from
/// the earliest failing block, same as `emit_blocks`.
pub fn emit_blocks_parallel(blocks: &[Block]) -> Result<Vec<Payload>, EmitError> {
    let results: Vec<Result<Payload, EmitError>> =
        blocks.par_iter().map(EmitPayload::emit).collect();
    results.into_iter().collect()
}

/// Body of an "append block children" request: `{"children": [...]}`.
pub fn children_body(payloads: Vec<Payload>) -> Value {
    json!({ "children": payloads.into_iter().map(Value::Object).collect::<Vec<_>>() })
}

/// Blocks grouped by parent identifier, parents in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ChildrenBatch {
    groups: IndexMap<String, Vec<Block>>,
}

impl ChildrenBatch {
    /// Groups blocks under their parent. Empty blocks carry no content and are dropped.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut groups: IndexMap<String, Vec<Block>> = IndexMap::new();
        for block in blocks {
            if block.is_empty() {
                log::debug!("Skipping empty block");
                continue;
            }
            groups
                .entry(block.parent_id().to_string())
                .or_default()
                .push(block);
        }
        Self { groups }
    }

    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn blocks_for(&self, parent_id: &str) -> Option<&[Block]> {
        self.groups.get(parent_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Renders one children body per parent.
    pub fn request_bodies(&self, parallel: bool) -> Result<IndexMap<String, Value>, EmitError> {
        let mut bodies = IndexMap::with_capacity(self.groups.len());
        for (parent_id, blocks) in &self.groups {
            let payloads = if parallel {
                emit_blocks_parallel(blocks)?
            } else {
                emit_blocks(blocks)?
            };
            log::debug!("Parent '{}': {} block(s)", parent_id, payloads.len());
            bodies.insert(parent_id.clone(), children_body(payloads));
        }
        log::info!("Rendered request bodies for {} parent(s)", bodies.len());
        Ok(bodies)
    }
}

impl From<Document> for ChildrenBatch {
    fn from(document: Document) -> Self {
        Self::from_blocks(document.blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentUnit, Divider, Image, KeyedTable};
    use pretty_assertions::assert_eq;

    fn divider(id: &str, parent: &str) -> Block {
        Block::from(ContentUnit::from(Divider::new(id, parent)))
    }

    #[test]
    fn groups_keep_first_seen_parent_order() {
        let batch = ChildrenBatch::from_blocks(vec![
            divider("a", "page-2"),
            divider("b", "page-1"),
            divider("c", "page-2"),
            Block::default(),
        ]);
        assert_eq!(batch.parents().collect::<Vec<_>>(), vec!["page-2", "page-1"]);
        assert_eq!(batch.blocks_for("page-2").unwrap().len(), 2);
        assert!(batch.blocks_for("").is_none());
    }

    #[test]
    fn bodies_wrap_children() {
        let batch = ChildrenBatch::from_blocks(vec![
            divider("a", "page"),
            Block::from(ContentUnit::from(Image::new("i", "page", "https://x/y.png"))),
        ]);
        let bodies = batch.request_bodies(false).unwrap();
        assert_eq!(
            bodies["page"],
            json!({"children": [
                {"type": "divider", "divider": {}},
                {"image": {"type": "external", "external": {"url": "https://x/y.png"}}}
            ]})
        );
    }

    #[test]
    fn parallel_matches_sequential() {
        let blocks: Vec<Block> = (0..64)
            .map(|i| divider(&format!("d{i}"), "p"))
            .chain(std::iter::once(Block::from(ContentUnit::from(Image::new(
                "i", "p", "u",
            )))))
            .collect();
        assert_eq!(
            emit_blocks_parallel(&blocks).unwrap(),
            emit_blocks(&blocks).unwrap()
        );
    }

    #[test]
    fn parallel_reports_earliest_failure() {
        let blocks = vec![
            divider("a", "p"),
            Block::from(ContentUnit::from(KeyedTable::new("first", "p", vec![]))),
            Block::from(ContentUnit::from(KeyedTable::new("second", "p", vec![]))),
        ];
        assert_eq!(
            emit_blocks_parallel(&blocks).unwrap_err(),
            EmitError::EmptyTable {
                table_id: "first".to_string()
            }
        );
    }

    #[test]
    fn document_parses_blocks_of_units() {
        let document = Document::from_json_str(
            r#"{"blocks": [{"units": [{"unit": "divider", "id": "d", "parent_id": "p"}]}]}"#,
        )
        .unwrap();
        assert_eq!(document.blocks.len(), 1);
        assert_eq!(document.blocks[0].parent_id(), "p");
    }
}
