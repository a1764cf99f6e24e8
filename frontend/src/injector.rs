//! Owned handle for the theme style container.

use crate::document::{DocumentError, StyleDocument, StyleUpdate};
use crate::stylesheet::build_stylesheet;
use sdpi_theme_types::{ColorError, Palette, RegistrationInfo, ThemeOptions};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while applying a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid highlight color: {0}")]
    Color(#[from] ColorError),
    #[error("Invalid theme payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Owns the document and keeps exactly one theme style element in it.
///
/// Every application regenerates the full rule set and overwrites the
/// element's text, so repeated calls never accumulate rules or elements.
#[derive(Debug)]
pub struct ThemeInjector<D> {
    document: D,
    options: ThemeOptions,
}

impl<D: StyleDocument> ThemeInjector<D> {
    pub fn new(document: D) -> Self {
        Self::with_options(document, ThemeOptions::default())
    }

    pub fn with_options(document: D, options: ThemeOptions) -> Self {
        Self { document, options }
    }

    /// Regenerate the stylesheet for `palette` and write it to the document.
    pub fn apply_theme(&mut self, palette: &Palette) -> Result<StyleUpdate, ThemeError> {
        let css = build_stylesheet(palette, &self.options)?;
        let id = self.options.element_id.as_str();

        if self.document.style_text(id).as_deref() == Some(css.as_str()) {
            debug!("Theme for {} unchanged, skipping update", palette.highlight_color);
            return Ok(StyleUpdate::Unchanged);
        }

        let update = self.document.upsert_style(id, &css)?;
        info!(
            "Applied theme for highlight {} ({:?})",
            palette.highlight_color, update
        );
        Ok(update)
    }

    /// Apply a palette given as the host's JSON color object.
    pub fn apply_json(&mut self, colors_json: &str) -> Result<StyleUpdate, ThemeError> {
        let palette = Palette::from_json(colors_json)?;
        self.apply_theme(&palette)
    }

    /// Apply the colors carried by the registration info.
    pub fn apply_registration_info(
        &mut self,
        info: &RegistrationInfo,
    ) -> Result<StyleUpdate, ThemeError> {
        debug!(
            "Host {} on {:?}, {} device(s)",
            info.application.version,
            info.application.platform,
            info.devices.len()
        );
        self.apply_theme(&info.colors)
    }

    /// Text currently held by the style element.
    pub fn current_css(&self) -> Option<String> {
        self.document.style_text(&self.options.element_id)
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }
}
