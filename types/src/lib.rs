//! Shared types for sdpi-theme.
//!
//! Colors, palettes and host registration data used by both the browser
//! binding and the native stylesheet tool.

/// Id of the style element that holds the generated theme rules.
pub const DEFAULT_STYLE_ELEMENT_ID: &str = "sdpi-dynamic-styles";

pub mod color;
pub mod options;
pub mod palette;
pub mod registration;

// Re-export commonly used types
pub use color::{shade_hex, Color, ColorError};
pub use options::ThemeOptions;
pub use palette::{Palette, PaletteOverrides};
pub use registration::{
    ApplicationInfo, DeviceInfo, DeviceSize, DeviceType, Language, Platform, PluginInfo,
    RegistrationInfo,
};
