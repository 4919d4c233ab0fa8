use super::Color;
use serde::{Deserialize, Serialize};

/// Style flags carried by every rich-text run.
///
/// Flags missing from JSON read as `false` and a missing color as `default`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

impl Annotations {
    /// Bold red text, the style rich-text units get when none is given.
    ///
    /// Returns a fresh value on every call; units never share annotations.
    pub fn highlight() -> Self {
        Self {
            bold: true,
            color: Color::Red,
            ..Self::default()
        }
    }

    /// Unstyled text in the given color, as used by table cells.
    pub fn colored(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn highlight_is_bold_red() {
        let a = Annotations::highlight();
        assert!(a.bold);
        assert!(!a.italic && !a.strikethrough && !a.underline && !a.code);
        assert_eq!(a.color, Color::Red);
    }

    #[test]
    fn partial_json_fills_in_unset_flags() {
        let parsed: Annotations = serde_json::from_value(json!({"italic": true})).unwrap();
        assert_eq!(
            parsed,
            Annotations {
                italic: true,
                ..Annotations::default()
            }
        );
    }

    #[test]
    fn serializes_all_flags() {
        assert_eq!(
            serde_json::to_value(Annotations::colored(Color::Blue)).unwrap(),
            json!({
                "bold": false,
                "italic": false,
                "strikethrough": false,
                "underline": false,
                "code": false,
                "color": "blue"
            })
        );
    }
}
