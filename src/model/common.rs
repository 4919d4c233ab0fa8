use crate::types::{ParentId, UnitId};
use serde::{Deserialize, Serialize};

/// Identity fields shared by every content unit.
///
/// Neither field is reflected in emitted payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCommon {
    #[serde(default = "UnitId::new_v4")]
    pub id: UnitId,
    #[serde(default)]
    pub parent_id: ParentId,
}

impl UnitCommon {
    pub fn new(id: impl Into<UnitId>, parent_id: impl Into<ParentId>) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
        }
    }
}

impl Default for UnitCommon {
    fn default() -> Self {
        Self {
            id: UnitId::new_v4(),
            parent_id: ParentId::empty(),
        }
    }
}
