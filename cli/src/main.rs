//! sdpi-theme command-line tool.

use anyhow::Context;
use clap::Parser;
use sdpi_theme::{load_palette, render, write_stylesheet, Config, OutputFormat, PaletteSource};
use sdpi_theme_types::PaletteOverrides;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Render the accent-colored stylesheet for a Stream Deck property inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Palette JSON file (`-` reads stdin)
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Registration info JSON file (`-` reads stdin); its `colors` are used.
    /// Takes priority over --palette
    #[arg(long)]
    info: Option<PathBuf>,

    /// Highlight color, overrides the loaded palette
    #[arg(long)]
    highlight: Option<String>,

    /// Mouse-down color, overrides the loaded palette
    #[arg(long)]
    mouse_down: Option<String>,

    /// Pressed button background color
    #[arg(long)]
    pressed_background: Option<String>,

    /// Pressed button text color
    #[arg(long)]
    pressed_text: Option<String>,

    /// Pressed button border color
    #[arg(long)]
    pressed_border: Option<String>,

    /// Id of the style element
    #[arg(long)]
    element_id: Option<String>,

    /// Wrap the CSS in a <style> element
    #[arg(long)]
    html: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Extra config file, merged over the user and local config files
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn source(&self) -> PaletteSource {
        match (&self.info, &self.palette) {
            (Some(path), _) => PaletteSource::Info(path.clone()),
            (None, Some(path)) => PaletteSource::Palette(path.clone()),
            (None, None) => PaletteSource::Overrides,
        }
    }

    fn overrides(&self) -> PaletteOverrides {
        PaletteOverrides {
            highlight_color: self.highlight.clone(),
            mouse_down_color: self.mouse_down.clone(),
            button_pressed_background_color: self.pressed_background.clone(),
            button_pressed_text_color: self.pressed_text.clone(),
            button_pressed_border_color: self.pressed_border.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::from_figment(args.config.clone(), args.element_id.clone())?;

    // Initialize logging - RUST_LOG wins, then the configured level, then info.
    // Logs go to stderr so stdout carries only the stylesheet.
    let default_level = config.log_level.as_deref().unwrap_or("info");
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let palette = load_palette(&args.source(), args.overrides())?;
    let format = if args.html {
        OutputFormat::Html
    } else {
        OutputFormat::Css
    };
    let output = render(&palette, &config.theme, format)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote theme stylesheet to {}", path.display());
        }
        None => write_stylesheet(std::io::stdout().lock(), &output)
            .context("Failed to write stylesheet to stdout")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_takes_priority_over_palette() {
        let args = Args::try_parse_from([
            "sdpi-theme",
            "--info",
            "info.json",
            "--palette",
            "palette.json",
        ])
        .unwrap();

        assert_eq!(args.source(), PaletteSource::Info(PathBuf::from("info.json")));
    }

    #[test]
    fn test_palette_and_overrides_sources() {
        let args = Args::try_parse_from(["sdpi-theme", "--palette", "-"]).unwrap();
        assert_eq!(args.source(), PaletteSource::Palette(PathBuf::from("-")));

        let args = Args::try_parse_from(["sdpi-theme", "--highlight", "#3366CC"]).unwrap();
        assert_eq!(args.source(), PaletteSource::Overrides);
        assert_eq!(args.overrides().highlight_color.as_deref(), Some("#3366CC"));
    }
}
