//! Leaf units with a fixed payload shape: markers and URL wrappers.

use super::common::UnitCommon;
use crate::error::EmitError;
use crate::payload::{keyed, typed, EmitPayload, Payload};
use crate::types::{ParentId, UnitId};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Horizontal rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divider {
    #[serde(flatten)]
    common: UnitCommon,
}

impl Divider {
    pub fn new(id: impl Into<UnitId>, parent_id: impl Into<ParentId>) -> Self {
        Self {
            common: UnitCommon::new(id, parent_id),
        }
    }

    pub fn common(&self) -> &UnitCommon {
        &self.common
    }
}

impl EmitPayload for Divider {
    fn emit(&self) -> Result<Payload, EmitError> {
        Ok(typed("divider", json!({})))
    }
}

impl fmt::Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "divider:{}", self.common.id)
    }
}

/// Empty column marker. Columns with content are produced by `ColumnList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(flatten)]
    common: UnitCommon,
}

impl Column {
    pub fn new(id: impl Into<UnitId>, parent_id: impl Into<ParentId>) -> Self {
        Self {
            common: UnitCommon::new(id, parent_id),
        }
    }

    pub fn common(&self) -> &UnitCommon {
        &self.common
    }
}

impl EmitPayload for Column {
    fn emit(&self) -> Result<Payload, EmitError> {
        Ok(typed("column", json!({})))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column:{}", self.common.id)
    }
}

/// Image hosted at an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(flatten)]
    common: UnitCommon,
    url: String,
}

impl Image {
    pub fn new(
        id: impl Into<UnitId>,
        parent_id: impl Into<ParentId>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            common: UnitCommon::new(id, parent_id),
            url: url.into(),
        }
    }

    /// An image with a generated identifier.
    pub fn external(parent_id: impl Into<ParentId>, url: impl Into<String>) -> Self {
        Self::new(UnitId::new_v4(), parent_id, url)
    }

    pub fn common(&self) -> &UnitCommon {
        &self.common
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl EmitPayload for Image {
    fn emit(&self) -> Result<Payload, EmitError> {
        Ok(keyed(
            "image",
            json!({
                "type": "external",
                "external": { "url": self.url },
            }),
        ))
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image:{}", self.url)
    }
}

/// Bulleted list item holding a single link-preview mention.
///
/// The mention's visible text is always empty: Notion renders a preview card
/// for the URL instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    #[serde(flatten)]
    common: UnitCommon,
    url: String,
}

impl Mention {
    pub fn new(
        id: impl Into<UnitId>,
        parent_id: impl Into<ParentId>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            common: UnitCommon::new(id, parent_id),
            url: url.into(),
        }
    }

    pub fn common(&self) -> &UnitCommon {
        &self.common
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl EmitPayload for Mention {
    fn emit(&self) -> Result<Payload, EmitError> {
        Ok(keyed(
            "bulleted_list_item",
            json!({
                "rich_text": [{
                    "type": "mention",
                    "mention": {
                        "type": "link_preview",
                        "link_preview": { "url": self.url },
                    },
                    "annotations": {},
                    "plain_text": self.url,
                    "text": { "content": "" },
                }]
            }),
        ))
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mention:{}", self.url)
    }
}

/// Standalone link preview, without a surrounding list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreview {
    #[serde(flatten)]
    common: UnitCommon,
    url: String,
}

impl LinkPreview {
    pub fn new(
        id: impl Into<UnitId>,
        parent_id: impl Into<ParentId>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            common: UnitCommon::new(id, parent_id),
            url: url.into(),
        }
    }

    pub fn common(&self) -> &UnitCommon {
        &self.common
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl EmitPayload for LinkPreview {
    fn emit(&self) -> Result<Payload, EmitError> {
        Ok(keyed("link_preview", json!({ "url": self.url })))
    }
}

impl fmt::Display for LinkPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "link_preview:{}", self.url)
    }
}
