//! sdpi-theme native library.
//!
//! This module exposes config loading and rendering for use in tests.

pub mod config;
pub mod render;

pub use config::Config;
pub use render::{load_palette, render, write_stylesheet, OutputFormat, PaletteSource};
