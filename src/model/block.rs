use super::unit::ContentUnit;
use crate::error::EmitError;
use crate::payload::{merge_into, EmitPayload, Payload};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Units that share a parent, emitted as one merged block object.
///
/// Merging keeps each unit's top-level keys; when two units emit the same key
/// the later unit's value wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    units: Vec<ContentUnit>,
}

impl Block {
    pub fn new(units: Vec<ContentUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[ContentUnit] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Parent of the first unit, or `""` for an empty block.
    pub fn parent_id(&self) -> &str {
        self.units
            .first()
            .map(|unit| unit.parent_id().as_str())
            .unwrap_or("")
    }
}

impl EmitPayload for Block {
    fn emit(&self) -> Result<Payload, EmitError> {
        let mut merged = Payload::new();
        for unit in &self.units {
            merge_into(&mut merged, unit.emit()?);
        }
        Ok(merged)
    }
}

impl From<ContentUnit> for Block {
    fn from(unit: ContentUnit) -> Self {
        Self::new(vec![unit])
    }
}

impl FromIterator<ContentUnit> for Block {
    fn from_iter<I: IntoIterator<Item = ContentUnit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}
