//! Text-bearing blocks: paragraphs, headings, list items, callouts.

use super::common::UnitCommon;
use crate::constants::{BLANK_TEXT, CALLOUT_COLOR, CALLOUT_ICON_EMOJI};
use crate::error::EmitError;
use crate::payload::{annotations_value, keyed, EmitPayload, Payload};
use crate::types::{Annotations, ParentId, UnitId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// The block type a rich-text unit is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    Paragraph,
    #[serde(rename = "heading_1")]
    Heading1,
    #[serde(rename = "heading_2")]
    Heading2,
    #[serde(rename = "heading_3")]
    Heading3,
    BulletedListItem,
    NumberedListItem,
    ToDo,
    Toggle,
    Quote,
    Callout,
}

impl TextKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextKind::Paragraph => "paragraph",
            TextKind::Heading1 => "heading_1",
            TextKind::Heading2 => "heading_2",
            TextKind::Heading3 => "heading_3",
            TextKind::BulletedListItem => "bulleted_list_item",
            TextKind::NumberedListItem => "numbered_list_item",
            TextKind::ToDo => "to_do",
            TextKind::Toggle => "toggle",
            TextKind::Quote => "quote",
            TextKind::Callout => "callout",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single styled text run emitted under its kind's key.
///
/// Empty text is stored as a single space. Annotations default to bold red
/// and are owned by the unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(flatten)]
    common: UnitCommon,
    kind: TextKind,
    #[serde(default = "Annotations::highlight", deserialize_with = "annotations_or_highlight")]
    annotations: Annotations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default = "blank_text", deserialize_with = "non_empty_text")]
    plain_text: String,
}

fn blank_text() -> String {
    BLANK_TEXT.to_string()
}

fn or_blank(text: String) -> String {
    if text.is_empty() {
        blank_text()
    } else {
        text
    }
}

fn non_empty_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(or_blank)
}

/// An empty annotations object counts as unset.
fn annotations_or_highlight<'de, D>(deserializer: D) -> Result<Annotations, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Map::<String, Value>::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(Annotations::highlight());
    }
    Annotations::deserialize(Value::Object(raw)).map_err(serde::de::Error::custom)
}

impl RichText {
    pub fn new(
        kind: TextKind,
        id: impl Into<UnitId>,
        parent_id: impl Into<ParentId>,
        plain_text: impl Into<String>,
    ) -> Self {
        Self {
            common: UnitCommon::new(id, parent_id),
            kind,
            annotations: Annotations::highlight(),
            href: None,
            plain_text: or_blank(plain_text.into()),
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Links the text; an empty target leaves it unlinked.
    pub fn with_link(mut self, href: impl Into<String>) -> Self {
        let href = href.into();
        self.href = (!href.is_empty()).then_some(href);
        self
    }

    pub fn common(&self) -> &UnitCommon {
        &self.common
    }

    pub fn kind(&self) -> TextKind {
        self.kind
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref().filter(|h| !h.is_empty())
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    fn fragment(&self) -> Value {
        let mut text = json!({ "content": self.plain_text });
        let mut fragment = json!({
            "plain_text": self.plain_text,
            "annotations": annotations_value(&self.annotations),
        });
        if let Some(href) = self.href() {
            text["link"] = json!({ "url": href });
            fragment["href"] = json!(href);
        }
        fragment["text"] = text;
        fragment
    }
}

impl EmitPayload for RichText {
    fn emit(&self) -> Result<Payload, EmitError> {
        let mut body = json!({ "rich_text": [self.fragment()] });
        if self.kind == TextKind::Callout {
            body["icon"] = json!({ "emoji": CALLOUT_ICON_EMOJI });
            body["color"] = json!(CALLOUT_COLOR.as_str());
        }
        Ok(keyed(self.kind.as_str(), body))
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plain_text == BLANK_TEXT {
            write!(f, "{}", self.kind)?;
        } else {
            write!(f, "{}", self.plain_text)?;
        }
        if let Some(href) = self.href() {
            write!(f, "{}", href)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn emitted(unit: &RichText) -> Value {
        Value::Object(unit.emit().unwrap())
    }

    #[test]
    fn empty_text_is_stored_as_space() {
        let unit = RichText::new(TextKind::Paragraph, "r", "p", "");
        assert_eq!(unit.plain_text(), " ");
        let payload = emitted(&unit);
        assert_eq!(payload["paragraph"]["rich_text"][0]["text"]["content"], " ");
        assert_eq!(payload["paragraph"]["rich_text"][0]["plain_text"], " ");
    }

    #[test]
    fn default_annotations_are_bold_red() {
        let payload = emitted(&RichText::new(TextKind::Heading2, "r", "p", "Title"));
        let annotations = &payload["heading_2"]["rich_text"][0]["annotations"];
        assert_eq!(annotations["bold"], true);
        assert_eq!(annotations["italic"], false);
        assert_eq!(annotations["color"], "red");
    }

    #[test]
    fn custom_annotations_are_kept() {
        let unit = RichText::new(TextKind::Quote, "r", "p", "q")
            .with_annotations(Annotations::colored(Color::Green));
        let payload = emitted(&unit);
        assert_eq!(payload["quote"]["rich_text"][0]["annotations"]["color"], "green");
        assert_eq!(payload["quote"]["rich_text"][0]["annotations"]["bold"], false);
    }

    #[test]
    fn hyperlink_fills_both_fields() {
        let unit = RichText::new(TextKind::Paragraph, "r", "p", "docs")
            .with_link("https://developers.notion.com");
        let payload = emitted(&unit);
        let fragment = &payload["paragraph"]["rich_text"][0];
        assert_eq!(fragment["href"], "https://developers.notion.com");
        assert_eq!(fragment["text"]["link"]["url"], "https://developers.notion.com");
    }

    #[test]
    fn empty_hyperlink_is_ignored() {
        let unit = RichText::new(TextKind::Paragraph, "r", "p", "docs").with_link("");
        let payload = emitted(&unit);
        let fragment = &payload["paragraph"]["rich_text"][0];
        assert!(fragment.get("href").is_none());
        assert!(fragment["text"].get("link").is_none());
    }

    #[test]
    fn callout_gets_icon_and_background() {
        let payload = emitted(&RichText::new(TextKind::Callout, "r", "p", "note"));
        assert_eq!(payload["callout"]["icon"]["emoji"], "⭐");
        assert_eq!(payload["callout"]["color"], "gray_background");
        assert!(payload["callout"]["rich_text"][0].get("icon").is_none());
    }

    #[test]
    fn other_kinds_have_no_icon_or_color() {
        for kind in [TextKind::Paragraph, TextKind::Heading1, TextKind::Toggle] {
            let payload = emitted(&RichText::new(kind, "r", "p", "x"));
            let body = &payload[kind.as_str()];
            assert!(body.get("icon").is_none());
            assert!(body.get("color").is_none());
        }
    }

    #[test]
    fn label_falls_back_to_kind() {
        assert_eq!(RichText::new(TextKind::Callout, "r", "", "").to_string(), "callout");
        let linked = RichText::new(TextKind::Paragraph, "r", "", "see ").with_link("https://x");
        assert_eq!(linked.to_string(), "see https://x");
    }
}
