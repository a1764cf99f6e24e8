//! Stylesheet synthesis from the host palette.
//!
//! The generated rules re-skin the standard property inspector controls
//! (radio/checkbox indicators, selected rows, pressed buttons and
//! meter/progress bars) with the host's accent color.

use sdpi_theme_types::{Color, ColorError, Palette, ThemeOptions};

/// Palette colors resolved against the shading options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    /// Highlight color exactly as supplied by the host.
    pub highlight: String,
    pub mouse_down: String,
    pub pressed_background: Option<String>,
    pub pressed_text: Option<String>,
    pub pressed_border: Option<String>,
    /// Highlight color without alpha, center of the meter gradient.
    pub base: Color,
    pub gradient_light: Color,
    pub gradient_mid: Color,
    pub meter_active: Color,
}

impl ThemeColors {
    /// Resolve defaults and derive the shaded variants.
    pub fn resolve(palette: &Palette, options: &ThemeOptions) -> Result<Self, ColorError> {
        let base = palette.highlight()?;
        let mouse_down = palette.mouse_down_or_shaded(options.mouse_down_shade)?;

        let colors = Self {
            highlight: palette.highlight_color.clone(),
            mouse_down,
            pressed_background: palette.button_pressed_background_color.clone(),
            pressed_text: palette.button_pressed_text_color.clone(),
            pressed_border: palette.button_pressed_border_color.clone(),
            base,
            gradient_light: base.shade(options.gradient_light_shade),
            gradient_mid: base.shade(options.gradient_mid_shade),
            meter_active: base.shade(options.meter_active_shade),
        };

        tracing::debug!(
            "Resolved theme colors: base={} light={} mid={} active={} mouse_down={}",
            colors.base,
            colors.gradient_light,
            colors.gradient_mid,
            colors.meter_active,
            colors.mouse_down
        );

        Ok(colors)
    }

    /// Render the full rule set.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let highlight = Some(self.highlight.as_str());

        push_rule(
            &mut css,
            &[
                r#"input[type="radio"]:checked + label span"#,
                r#"input[type="checkbox"]:checked + label span"#,
            ],
            &[("background-color", highlight)],
        );
        push_rule(
            &mut css,
            &[
                r#"input[type="radio"]:active:checked + label span"#,
                r#"input[type="radio"]:active + label span"#,
                r#"input[type="checkbox"]:active:checked + label span"#,
                r#"input[type="checkbox"]:active + label span"#,
            ],
            &[("background-color", Some(self.mouse_down.as_str()))],
        );
        push_rule(
            &mut css,
            &[
                r#"input[type="radio"]:active + label span"#,
                r#"input[type="checkbox"]:active + label span"#,
            ],
            &[("background-color", self.pressed_border.as_deref())],
        );
        push_rule(
            &mut css,
            &[
                "td.selected",
                "td.selected:hover",
                "li.selected:hover",
                "li.selected",
            ],
            &[("color", Some("white")), ("background-color", highlight)],
        );
        push_rule(
            &mut css,
            &[
                ".sdpi-file-label > label:active",
                ".sdpi-file-label.file:active",
                "label.sdpi-file-label:active",
                "label.sdpi-file-info:active",
                r#"input[type="file"]::-webkit-file-upload-button:active"#,
                "button:active",
            ],
            &[
                ("background-color", self.pressed_background.as_deref()),
                ("color", self.pressed_text.as_deref()),
                ("border-color", self.pressed_border.as_deref()),
            ],
        );

        let resting = format!(
            "linear-gradient({mid}, {light} 20%, {base} 45%, {base} 55%, {mid})",
            mid = self.gradient_mid,
            light = self.gradient_light,
            base = self.base,
        );
        push_rule(
            &mut css,
            &[
                "::-webkit-progress-value",
                "meter::-webkit-meter-optimum-value",
            ],
            &[("background", Some(resting.as_str()))],
        );

        let active = format!(
            "linear-gradient({base}, {mid} 20%, {active} 45%, {active} 55%, {base})",
            base = self.base,
            mid = self.gradient_mid,
            active = self.meter_active,
        );
        push_rule(
            &mut css,
            &[
                "::-webkit-progress-value:active",
                "meter::-webkit-meter-optimum-value:active",
            ],
            &[("background", Some(active.as_str()))],
        );

        css
    }
}

/// Build the theme stylesheet for `palette`.
pub fn build_stylesheet(palette: &Palette, options: &ThemeOptions) -> Result<String, ColorError> {
    Ok(ThemeColors::resolve(palette, options)?.to_css())
}

/// Append one rule. Declarations without a value are dropped, and a rule
/// left with no declarations is skipped entirely.
fn push_rule(css: &mut String, selectors: &[&str], declarations: &[(&str, Option<&str>)]) {
    let present: Vec<(&str, &str)> = declarations
        .iter()
        .filter_map(|(property, value)| value.map(|v| (*property, v)))
        .collect();
    if present.is_empty() {
        return;
    }

    css.push_str(&selectors.join(",\n"));
    css.push_str(" {\n");
    for (property, value) in present {
        css.push_str(&format!("    {}: {};\n", property, value));
    }
    css.push_str("}\n");
}
