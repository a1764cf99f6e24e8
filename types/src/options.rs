//! Tunables for stylesheet synthesis.

use crate::DEFAULT_STYLE_ELEMENT_ID;
use serde::{Deserialize, Deserializer, Serialize};

/// Element id and shading amounts used when building the theme stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    /// Id of the style container element.
    #[serde(deserialize_with = "scalar_as_string")]
    pub element_id: String,
    /// Applied to the highlight color when the palette has no mouse-down color.
    pub mouse_down_shade: i32,
    /// Lightest stop of the meter/progress gradient.
    pub gradient_light_shade: i32,
    /// Outer stops of the meter/progress gradient.
    pub gradient_mid_shade: i32,
    /// Center stops of the gradient while the meter is active.
    pub meter_active_shade: i32,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_STYLE_ELEMENT_ID.to_string(),
            mouse_down_shade: -100,
            gradient_light_shade: 100,
            gradient_mid_shade: 60,
            meter_active_shade: -60,
        }
    }
}

/// Accept any scalar for a string field. Environment layers type
/// `123` as a number, but `123` is still a valid element id.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_options_fill_defaults() {
        let options: ThemeOptions = serde_json::from_str(r#"{"mouse_down_shade": -40}"#).unwrap();
        assert_eq!(options.mouse_down_shade, -40);
        assert_eq!(options.element_id, "sdpi-dynamic-styles");
        assert_eq!(options.gradient_light_shade, 100);
        assert_eq!(options.gradient_mid_shade, 60);
        assert_eq!(options.meter_active_shade, -60);
    }

    #[test]
    fn test_numeric_element_id_is_accepted() {
        let options: ThemeOptions = serde_json::from_str(r#"{"element_id": 123}"#).unwrap();
        assert_eq!(options.element_id, "123");
        assert_eq!(options.mouse_down_shade, -100);

        let options: ThemeOptions = serde_json::from_str(r#"{"element_id": "theme"}"#).unwrap();
        assert_eq!(options.element_id, "theme");

        assert!(serde_json::from_str::<ThemeOptions>(r#"{"element_id": [1]}"#).is_err());
    }
}
