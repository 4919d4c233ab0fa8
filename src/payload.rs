// src/payload.rs
//! The payload emission protocol shared by every content unit.
//!
//! A payload is a JSON object shaped like a Notion block. Emission is pure:
//! the same unit always yields the same payload, and composites emit their
//! children before assembling their own object.

use crate::error::EmitError;
use crate::types::Annotations;
use serde_json::{json, Map, Value};

/// A Notion block object, ready to be sent as part of a request body.
pub type Payload = Map<String, Value>;

/// The single capability every content unit has.
pub trait EmitPayload {
    fn emit(&self) -> Result<Payload, EmitError>;
}

/// `{"type": kind, kind: body}`
pub(crate) fn typed(kind: &str, body: Value) -> Payload {
    let mut payload = Payload::new();
    payload.insert("type".to_string(), Value::String(kind.to_string()));
    payload.insert(kind.to_string(), body);
    payload
}

/// `{kind: body}`, for blocks Notion accepts without a `type` discriminator.
pub(crate) fn keyed(kind: &str, body: Value) -> Payload {
    let mut payload = Payload::new();
    payload.insert(kind.to_string(), body);
    payload
}

pub(crate) fn annotations_value(annotations: &Annotations) -> Value {
    json!({
        "bold": annotations.bold,
        "italic": annotations.italic,
        "strikethrough": annotations.strikethrough,
        "underline": annotations.underline,
        "code": annotations.code,
        "color": annotations.color.as_str(),
    })
}

/// One table cell: a single text run carrying `content` as both text and plain text.
pub(crate) fn text_cell(content: Value, annotations: &Annotations) -> Value {
    json!([{
        "type": "text",
        "text": { "content": content.clone() },
        "annotations": annotations_value(annotations),
        "plain_text": content,
    }])
}

pub(crate) fn table_row(cells: Vec<Value>) -> Value {
    Value::Object(typed("table_row", json!({ "cells": cells })))
}

pub(crate) fn table(width: usize, rows: Vec<Value>) -> Payload {
    typed(
        "table",
        json!({
            "table_width": width,
            "has_column_header": false,
            "has_row_header": false,
            "children": rows,
        }),
    )
}

/// Merges `payload`'s top-level keys into `acc`; later keys win.
pub(crate) fn merge_into(acc: &mut Payload, payload: Payload) {
    for (key, value) in payload {
        if acc.insert(key.clone(), value).is_some() {
            log::debug!("Block merge overwrote key '{}'", key);
        }
    }
}
