use std::io::Cursor;

use crate::{
    assets::loader::AssetLoader,
    compose::{layer::LayerItem, naming::ExportFormat},
    foundation::{
        core::Canvas,
        error::{LayerstackError, LayerstackResult},
    },
    render::{output::RenderedOutput, raster::rasterize_layers, surface::Surface},
};

/// Composite `layers` (bottom first) onto a transparent canvas and encode it as PNG.
///
/// Identical layers, canvas and asset bytes always produce identical PNG bytes.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(layers = layers.len(), width = canvas.width, height = canvas.height)
)]
pub fn render_flat(
    layers: &[LayerItem],
    canvas: Canvas,
    loader: &mut AssetLoader,
) -> LayerstackResult<RenderedOutput> {
    let rasters = rasterize_layers(layers, canvas, loader)?;
    let surface = Surface::flatten(canvas, &rasters);
    Ok(RenderedOutput {
        format: ExportFormat::Png,
        bytes: encode_png(&surface)?,
    })
}

/// Encode a surface as an RGBA8 PNG.
pub fn encode_png(surface: &Surface) -> LayerstackResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(
        surface.width(),
        surface.height(),
        surface.to_straight_rgba8(),
    )
    .ok_or_else(|| LayerstackError::render("surface size does not match its pixel buffer"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| LayerstackError::render(format!("encode png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/render/flat.rs"]
mod tests;
