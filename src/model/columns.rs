use super::common::UnitCommon;
use super::unit::ContentUnit;
use crate::error::EmitError;
use crate::payload::{typed, EmitPayload, Payload};
use crate::types::{ParentId, UnitId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Side-by-side layout: each child becomes one column holding only that child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnList {
    #[serde(flatten)]
    common: UnitCommon,
    children: Vec<ContentUnit>,
}

impl ColumnList {
    pub fn new(
        id: impl Into<UnitId>,
        parent_id: impl Into<ParentId>,
        children: Vec<ContentUnit>,
    ) -> Self {
        Self {
            common: UnitCommon::new(id, parent_id),
            children,
        }
    }

    pub fn common(&self) -> &UnitCommon {
        &self.common
    }

    pub fn children(&self) -> &[ContentUnit] {
        &self.children
    }

    fn column(&self, child: &ContentUnit) -> Result<Value, EmitError> {
        let payload = child.emit().map_err(|source| EmitError::MalformedChild {
            container_id: self.common.id.to_string(),
            child_id: child.id().to_string(),
            source: Box::new(source),
        })?;
        Ok(Value::Object(typed(
            "column",
            json!({ "children": [Value::Object(payload)] }),
        )))
    }
}

impl EmitPayload for ColumnList {
    fn emit(&self) -> Result<Payload, EmitError> {
        let columns = self
            .children
            .iter()
            .map(|child| self.column(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(typed("column_list", json!({ "children": columns })))
    }
}

impl fmt::Display for ColumnList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column_list:{}", self.common.id)
    }
}
