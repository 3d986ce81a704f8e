use std::sync::Arc;

use crate::foundation::{
    core::Canvas,
    math::{premul_over_px, unpremultiply_rgba8_in_place},
};

#[derive(Clone, Debug)]
/// Pixels of one layer placed on the canvas grid.
///
/// Bounds may extend past the canvas; only the overlap is ever composited.
pub struct LayerRaster {
    /// Id of the layer this raster was produced from.
    pub id: String,
    /// Left edge in canvas pixels.
    pub left: i64,
    /// Top edge in canvas pixels.
    pub top: i64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Canvas-sized premultiplied RGBA8 buffer.
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Fully transparent surface.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.rgba_len()],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Composite `rasters` in order (first is bottom) onto a transparent canvas.
    pub fn flatten(canvas: Canvas, rasters: &[LayerRaster]) -> Self {
        let mut out = Self::transparent(canvas);
        for r in rasters {
            out.draw(r);
        }
        out
    }

    /// Source-over `raster` at its offset, clipped to the surface.
    pub fn draw(&mut self, raster: &LayerRaster) {
        let sw = i64::from(self.width);
        let sh = i64::from(self.height);
        let rw = i64::from(raster.width);

        let x0 = raster.left.max(0);
        let x1 = (raster.left + rw).min(sw);
        if x0 >= x1 {
            return;
        }

        for row in 0..i64::from(raster.height) {
            let y = raster.top + row;
            if y < 0 || y >= sh {
                continue;
            }
            for x in x0..x1 {
                let si = ((row * rw + (x - raster.left)) * 4) as usize;
                let di = ((y * sw + x) * 4) as usize;
                let src = [
                    raster.rgba8_premul[si],
                    raster.rgba8_premul[si + 1],
                    raster.rgba8_premul[si + 2],
                    raster.rgba8_premul[si + 3],
                ];
                let dst = [
                    self.data[di],
                    self.data[di + 1],
                    self.data[di + 2],
                    self.data[di + 3],
                ];
                self.data[di..di + 4].copy_from_slice(&premul_over_px(dst, src));
            }
        }
    }

    /// Straight-alpha copy of the pixels, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
