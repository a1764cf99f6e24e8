//! Theme colors supplied by the host application.

use crate::color::{Color, ColorError};
use serde::{Deserialize, Serialize};

/// The host's current theme colors.
///
/// Values are CSS color strings and are emitted as-is; only
/// `highlight_color` is ever parsed, for shading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Base accent color.
    pub highlight_color: String,
    /// Color of a control while pressed. Derived from the highlight color if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse_down_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_pressed_background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_pressed_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_pressed_border_color: Option<String>,
    /// Sent by the host but not used by the generated rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_color: Option<String>,
}

impl Palette {
    /// Create a palette with only the highlight color set.
    pub fn new(highlight_color: impl Into<String>) -> Self {
        Self {
            highlight_color: highlight_color.into(),
            mouse_down_color: None,
            button_pressed_background_color: None,
            button_pressed_text_color: None,
            button_pressed_border_color: None,
            disabled_color: None,
        }
    }

    pub fn with_mouse_down_color(mut self, color: impl Into<String>) -> Self {
        self.mouse_down_color = Some(color.into());
        self
    }

    pub fn with_button_pressed_colors(
        mut self,
        background: impl Into<String>,
        text: impl Into<String>,
        border: impl Into<String>,
    ) -> Self {
        self.button_pressed_background_color = Some(background.into());
        self.button_pressed_text_color = Some(text.into());
        self.button_pressed_border_color = Some(border.into());
        self
    }

    /// Parse a palette from the JSON object the host sends.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The highlight color as RGB, ignoring any alpha suffix.
    pub fn highlight(&self) -> Result<Color, ColorError> {
        Color::from_hex(&self.highlight_color)
    }

    /// The supplied mouse-down color, or the highlight color shaded by `amount`.
    pub fn mouse_down_or_shaded(&self, amount: i32) -> Result<String, ColorError> {
        match &self.mouse_down_color {
            Some(color) => Ok(color.clone()),
            None => Ok(self.highlight()?.shade(amount).to_string()),
        }
    }

    /// Overlay every color set in `other` onto this palette.
    pub fn merge(&mut self, other: PaletteOverrides) {
        let PaletteOverrides {
            highlight_color,
            mouse_down_color,
            button_pressed_background_color,
            button_pressed_text_color,
            button_pressed_border_color,
        } = other;
        if let Some(color) = highlight_color {
            self.highlight_color = color;
        }
        if mouse_down_color.is_some() {
            self.mouse_down_color = mouse_down_color;
        }
        if button_pressed_background_color.is_some() {
            self.button_pressed_background_color = button_pressed_background_color;
        }
        if button_pressed_text_color.is_some() {
            self.button_pressed_text_color = button_pressed_text_color;
        }
        if button_pressed_border_color.is_some() {
            self.button_pressed_border_color = button_pressed_border_color;
        }
    }
}

/// Individual palette colors set from outside a loaded palette, e.g. command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteOverrides {
    pub highlight_color: Option<String>,
    pub mouse_down_color: Option<String>,
    pub button_pressed_background_color: Option<String>,
    pub button_pressed_text_color: Option<String>,
    pub button_pressed_border_color: Option<String>,
}

impl PaletteOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_colors() {
        let json = r##"{
            "buttonPressedBackgroundColor": "#303030FF",
            "buttonPressedBorderColor": "#646464FF",
            "buttonPressedTextColor": "#969696FF",
            "disabledColor": "#007AFF59",
            "highlightColor": "#007AFFFF",
            "mouseDownColor": "#2EA8FFFF"
        }"##;

        let palette = Palette::from_json(json).unwrap();
        assert_eq!(palette.highlight_color, "#007AFFFF");
        assert_eq!(palette.mouse_down_color.as_deref(), Some("#2EA8FFFF"));
        assert_eq!(
            palette.button_pressed_background_color.as_deref(),
            Some("#303030FF")
        );
        assert_eq!(palette.disabled_color.as_deref(), Some("#007AFF59"));
        assert_eq!(palette.highlight().unwrap(), Color::from_rgb(0, 0x7a, 0xff));
    }

    #[test]
    fn test_highlight_is_required() {
        assert!(Palette::from_json(r##"{"mouseDownColor": "#000000"}"##).is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let palette = Palette::from_json(r##"{"highlightColor": "#3366CC", "accent": 1}"##).unwrap();
        assert_eq!(palette, Palette::new("#3366CC"));
    }

    #[test]
    fn test_mouse_down_derived_when_absent() {
        let palette = Palette::new("#3366CC");
        assert_eq!(palette.mouse_down_or_shaded(-100).unwrap(), "#000268");
    }

    #[test]
    fn test_mouse_down_supplied_is_unmodified() {
        let palette = Palette::new("not-a-color").with_mouse_down_color("#ABCDEF");
        assert_eq!(palette.mouse_down_or_shaded(-100).unwrap(), "#ABCDEF");
    }

    #[test]
    fn test_serialize_skips_absent_colors() {
        let json = serde_json::to_string(&Palette::new("#112233")).unwrap();
        assert_eq!(json, r##"{"highlightColor":"#112233"}"##);
    }

    #[test]
    fn test_merge_overrides() {
        let mut palette = Palette::new("#112233").with_mouse_down_color("#000000");
        palette.merge(PaletteOverrides {
            highlight_color: Some("#445566".to_string()),
            button_pressed_text_color: Some("white".to_string()),
            ..Default::default()
        });

        assert_eq!(palette.highlight_color, "#445566");
        assert_eq!(palette.mouse_down_color.as_deref(), Some("#000000"));
        assert_eq!(palette.button_pressed_text_color.as_deref(), Some("white"));
        assert!(PaletteOverrides::default().is_empty());
    }
}
