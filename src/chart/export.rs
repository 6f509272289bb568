use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use plotters::prelude::{BitMapBackend, IntoDrawingArea};

use crate::{
    chart::{ShotChart, render_err},
    errors::AppError,
};

/// Draws the chart into a fresh RGB buffer and encodes it as PNG.
pub fn render_png(chart: &ShotChart) -> Result<Vec<u8>, AppError> {
    let (width, height) = chart.canvas_size();
    let mut pixels = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        chart.draw(&root)?;
        root.present().map_err(render_err)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(render_err)?;

    Ok(png)
}

/// PNG bytes as standard base64, for a `data:image/png;base64,` URI.
pub fn export_png_base64(chart: &ShotChart) -> Result<String, AppError> {
    let png = render_png(chart)?;
    tracing::debug!("Encoded {} byte chart \"{}\"", png.len(), chart.title);
    Ok(STANDARD.encode(png))
}
