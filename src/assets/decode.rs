use std::sync::Arc;

use crate::foundation::{
    error::{LayerstackError, LayerstackResult},
    math::premultiply_rgba8_in_place,
};

/// Largest edge an SVG decoration may rasterize to.
pub const MAX_SVG_DIM: u32 = 16_384;

#[derive(Clone, Debug)]
/// Decoded bitmap in premultiplied RGBA8 form.
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode encoded raster bytes (PNG, JPEG, WebP, ...) to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> LayerstackResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| LayerstackError::render(format!("decode image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(DecodedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parse SVG bytes and rasterize them at their intrinsic size.
pub fn rasterize_svg(bytes: &[u8]) -> LayerstackResult<DecodedImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| LayerstackError::render(format!("parse svg: {e}")))?;

    let size = tree.size();
    let width = svg_dim(size.width())?;
    let height = svg_dim(size.height())?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| LayerstackError::render("failed to allocate svg pixmap"))?;
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    Ok(DecodedImage {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.take()),
    })
}

fn svg_dim(v: f32) -> LayerstackResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(LayerstackError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_SVG_DIM {
        return Err(LayerstackError::render(format!(
            "svg raster size {px} exceeds {MAX_SVG_DIM}"
        )));
    }
    Ok(px)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
