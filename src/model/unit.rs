use super::columns::ColumnList;
use super::common::UnitCommon;
use super::leaves::{Column, Divider, Image, LinkPreview, Mention};
use super::rich_text::RichText;
use super::tables::{KeyedTable, NumericTable};
use crate::error::EmitError;
use crate::payload::{EmitPayload, Payload};
use crate::types::{ParentId, UnitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to reduce boilerplate in ContentUnit methods
macro_rules! match_all_units {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            ContentUnit::Divider($pattern) => $result,
            ContentUnit::Image($pattern) => $result,
            ContentUnit::Mention($pattern) => $result,
            ContentUnit::LinkPreview($pattern) => $result,
            ContentUnit::RichText($pattern) => $result,
            ContentUnit::KeyedTable($pattern) => $result,
            ContentUnit::NumericTable($pattern) => $result,
            ContentUnit::Column($pattern) => $result,
            ContentUnit::ColumnList($pattern) => $result,
        }
    };
}

/// Every kind of content a document can be assembled from.
///
/// In JSON the variant is named by a `"unit"` field, e.g.
/// `{"unit": "image", "parent_id": "intro", "url": "https://..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum ContentUnit {
    Divider(Divider),
    Image(Image),
    Mention(Mention),
    LinkPreview(LinkPreview),
    RichText(RichText),
    KeyedTable(KeyedTable),
    NumericTable(NumericTable),
    Column(Column),
    ColumnList(ColumnList),
}

impl ContentUnit {
    pub fn common(&self) -> &UnitCommon {
        match_all_units!(self, u => u.common())
    }

    pub fn id(&self) -> &UnitId {
        &self.common().id
    }

    pub fn parent_id(&self) -> &ParentId {
        &self.common().parent_id
    }

    /// The Notion block type this unit is emitted as.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentUnit::Divider(_) => "divider",
            ContentUnit::Image(_) => "image",
            ContentUnit::Mention(_) => "bulleted_list_item",
            ContentUnit::LinkPreview(_) => "link_preview",
            ContentUnit::RichText(u) => u.kind().as_str(),
            ContentUnit::KeyedTable(_) | ContentUnit::NumericTable(_) => "table",
            ContentUnit::Column(_) => "column",
            ContentUnit::ColumnList(_) => "column_list",
        }
    }
}

impl EmitPayload for ContentUnit {
    fn emit(&self) -> Result<Payload, EmitError> {
        match_all_units!(self, u => u.emit())
    }
}

impl fmt::Display for ContentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match_all_units!(self, u => fmt::Display::fmt(u, f))
    }
}

macro_rules! impl_from_unit {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for ContentUnit {
                fn from(unit: $variant) -> Self {
                    ContentUnit::$variant(unit)
                }
            }
        )*
    };
}

impl_from_unit!(
    Divider,
    Image,
    Mention,
    LinkPreview,
    RichText,
    KeyedTable,
    NumericTable,
    Column,
    ColumnList,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextKind;
    use serde_json::json;

    #[test]
    fn kind_follows_variant() {
        let units: Vec<ContentUnit> = vec![
            Divider::new("d", "p").into(),
            Mention::new("m", "p", "u").into(),
            RichText::new(TextKind::Heading3, "r", "p", "x").into(),
            KeyedTable::new("t", "p", vec![]).into(),
        ];
        let kinds: Vec<_> = units.iter().map(ContentUnit::kind).collect();
        assert_eq!(kinds, ["divider", "bulleted_list_item", "heading_3", "table"]);
    }

    #[test]
    fn accessors_reach_common_fields() {
        let unit: ContentUnit = LinkPreview::new("l1", "page", "u").into();
        assert_eq!(unit.id().as_str(), "l1");
        assert_eq!(unit.parent_id().as_str(), "page");
    }

    #[test]
    fn deserializes_from_tagged_json() {
        let unit: ContentUnit = serde_json::from_value(json!({
            "unit": "rich_text",
            "id": "r1",
            "parent_id": "page",
            "kind": "callout",
            "plain_text": ""
        }))
        .unwrap();
        match &unit {
            ContentUnit::RichText(text) => {
                assert_eq!(text.kind(), TextKind::Callout);
                assert_eq!(text.plain_text(), " ");
                assert!(text.annotations().bold);
            }
            other => panic!("unexpected unit: {other:?}"),
        }
    }

    #[test]
    fn missing_id_is_generated() {
        let unit: ContentUnit =
            serde_json::from_value(json!({"unit": "image", "url": "https://x/y.png"})).unwrap();
        assert_eq!(unit.id().as_str().len(), 32);
        assert!(unit.parent_id().is_empty());
    }

    #[test]
    fn emission_is_repeatable() {
        let unit: ContentUnit = RichText::new(TextKind::Paragraph, "r", "p", "same").into();
        assert_eq!(unit.emit().unwrap(), unit.emit().unwrap());
    }
}
