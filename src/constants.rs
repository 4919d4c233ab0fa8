// src/constants.rs
//! Fixed values of the Notion block schema that the emitters rely on.

use crate::types::Color;

/// Text a rich-text unit stores when the caller gives none.
///
/// Notion rejects fully empty rich-text arrays for some block kinds.
pub const BLANK_TEXT: &str = " ";

/// Emoji attached to every callout.
pub const CALLOUT_ICON_EMOJI: &str = "⭐";

/// Background color attached to every callout.
pub const CALLOUT_COLOR: Color = Color::GrayBackground;

/// Reserved key of a row mapping that colors the row instead of becoming a column.
pub const ROW_COLOR_KEY: &str = "Color";

/// Log file written by the command-line tool, relative to the temp dir.
pub const LOG_FILE_NAME: &str = "notion_blocks.log";
