pub mod compose;
pub mod court;
pub mod export;

use std::{fmt::Display, path::Path, sync::OnceLock};

use plotters::{
    prelude::{BLUE, RGBColor},
    style::FontStyle,
};

use crate::errors::AppError;

pub use compose::{ChartOptions, ShotChart, ShotPartition};
pub use court::{CourtShape, court_shapes};
pub use export::{export_png_base64, render_png};

pub const TITLE_FONT_FAMILY: &str = "sans-serif";

// DejaVu Sans, see DejaVuSans-LICENSE next to the font.
static BUNDLED_TITLE_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

static TITLE_FONT: OnceLock<()> = OnceLock::new();

pub(crate) fn render_err<E: Display>(e: E) -> AppError {
    AppError::RenderError(e.to_string())
}

/// Registers the chart title font once per process: the TrueType file at `custom`
/// when given, otherwise the bundled DejaVu Sans. Later calls are no-ops.
///
/// A `custom` font that cannot be loaded is reported, and titles fall back to the
/// bundled font.
pub fn init_title_font(custom: Option<&Path>) -> Result<(), AppError> {
    let mut outcome = Ok(());
    TITLE_FONT.get_or_init(|| {
        if let Some(path) = custom {
            match load_font_file(path) {
                Ok(()) => return,
                Err(e) => outcome = Err(e),
            }
        }
        if let Err(e) = register(BUNDLED_TITLE_FONT, "bundled DejaVu Sans") {
            tracing::error!("Chart titles unavailable: {}", e);
        }
    });
    outcome
}

fn load_font_file(path: &Path) -> Result<(), AppError> {
    let bytes = std::fs::read(path).map_err(|e| {
        AppError::EnvError(format!("Failed to read font {}: {}", path.display(), e))
    })?;
    // The plotters font registry only holds 'static data; this runs once per process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    register(bytes, &path.display().to_string())?;
    tracing::info!("Registered chart title font {}", path.display());
    Ok(())
}

fn register(bytes: &'static [u8], source: &str) -> Result<(), AppError> {
    plotters::style::register_font(TITLE_FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| AppError::EnvError(format!("{source} is not a valid TrueType font")))
}

/// Accepts a handful of colour names or `#rrggbb`.
pub fn parse_color(value: &str) -> Option<RGBColor> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(RGBColor(channel(0)?, channel(2)?, channel(4)?));
    }

    match value.to_lowercase().as_str() {
        "blue" | "b" => Some(BLUE),
        "red" | "r" => Some(RGBColor(255, 0, 0)),
        "green" | "g" => Some(RGBColor(0, 128, 0)),
        "black" | "k" => Some(RGBColor(0, 0, 0)),
        "white" | "w" => Some(RGBColor(255, 255, 255)),
        "gray" | "grey" => Some(RGBColor(128, 128, 128)),
        "orange" => Some(RGBColor(255, 165, 0)),
        _ => None,
    }
}
