//! Palette loading and stylesheet rendering.

use anyhow::Context;
use sdpi_theme_frontend::{MemoryDocument, ThemeInjector};
use sdpi_theme_types::{Palette, PaletteOverrides, RegistrationInfo, ThemeOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the palette comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSource {
    /// Registration info JSON; the palette is its `colors` object.
    Info(PathBuf),
    /// A bare palette JSON object.
    Palette(PathBuf),
    /// Build the palette from overrides alone.
    Overrides,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Css,
    /// CSS wrapped in a `<style>` element carrying the container id.
    Html,
}

/// Load the palette from `source` and apply `overrides` on top.
pub fn load_palette(
    source: &PaletteSource,
    overrides: PaletteOverrides,
) -> anyhow::Result<Palette> {
    let mut palette = match source {
        PaletteSource::Info(path) => {
            let text = read_input(path)?;
            let info = RegistrationInfo::from_json(&text)
                .with_context(|| format!("Invalid registration info in {}", path.display()))?;
            info!(
                "Loaded registration info (host {}, {} device(s))",
                info.application.version,
                info.devices.len()
            );
            info.colors
        }
        PaletteSource::Palette(path) => {
            let text = read_input(path)?;
            Palette::from_json(&text)
                .with_context(|| format!("Invalid palette in {}", path.display()))?
        }
        PaletteSource::Overrides => match overrides.highlight_color.clone() {
            Some(highlight) => Palette::new(highlight),
            None => anyhow::bail!("No palette given: use --palette, --info or --highlight"),
        },
    };

    if !overrides.is_empty() {
        debug!("Applying palette overrides: {:?}", overrides);
        palette.merge(overrides);
    }

    Ok(palette)
}

/// Render the theme stylesheet for `palette`.
pub fn render(
    palette: &Palette,
    options: &ThemeOptions,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut injector = ThemeInjector::with_options(MemoryDocument::new(), options.clone());
    injector
        .apply_theme(palette)
        .with_context(|| format!("Cannot build theme for {}", palette.highlight_color))?;

    let output = match format {
        OutputFormat::Css => injector.current_css().unwrap_or_default(),
        OutputFormat::Html => injector.document().to_html(),
    };
    Ok(output)
}

/// Write the rendered stylesheet to `out` and flush it.
pub fn write_stylesheet(mut out: impl Write, text: &str) -> anyhow::Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("Failed to write stylesheet")
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
