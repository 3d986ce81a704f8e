//! Minimal Photoshop (PSD, version 1) writer.
//!
//! Writes 8-bit RGB documents with transparent layers, raw (uncompressed) channel data and a
//! flattened merged image. Layer names go in both the legacy Pascal field (non-ASCII replaced
//! by `?`) and the `luni` Unicode block.

use crate::foundation::error::{LayerstackError, LayerstackResult};

const SIGNATURE: &[u8; 4] = b"8BPS";
const BLOCK_SIGNATURE: &[u8; 4] = b"8BIM";
const BLEND_NORMAL: &[u8; 4] = b"norm";
const COLOR_MODE_RGB: u16 = 3;
const COMPRESSION_RAW: u16 = 0;
const FLAG_HIDDEN: u8 = 0x02;
/// Channel ids in record order: red, green, blue, transparency.
const CHANNEL_IDS: [i16; 4] = [0, 1, 2, -1];

#[derive(Clone, Debug, PartialEq, Eq)]
/// One pixel layer.
pub struct PsdLayer {
    /// Display name.
    pub name: String,
    /// Left edge in document pixels; may be negative.
    pub left: i32,
    /// Top edge in document pixels; may be negative.
    pub top: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major straight-alpha RGBA8, `width * height * 4` bytes.
    pub rgba8: Vec<u8>,
    /// Whether the layer is shown.
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A layered document. Layers are stored bottom first.
pub struct PsdDocument {
    /// Document width in pixels.
    pub width: u32,
    /// Document height in pixels.
    pub height: u32,
    /// Layers, bottom first.
    pub layers: Vec<PsdLayer>,
    /// Flattened straight-alpha RGBA8 image shown by readers that ignore layers.
    pub merged_rgba8: Vec<u8>,
}

impl PsdDocument {
    /// Serialize to PSD bytes.
    pub fn encode(&self) -> LayerstackResult<Vec<u8>> {
        let pixels = (self.width as usize) * (self.height as usize);
        if self.merged_rgba8.len() != pixels * 4 {
            return Err(LayerstackError::render(
                "psd merged image does not match document size",
            ));
        }
        for layer in &self.layers {
            if layer.rgba8.len() != (layer.width as usize) * (layer.height as usize) * 4 {
                return Err(LayerstackError::render(format!(
                    "psd layer '{}' pixel buffer does not match its bounds",
                    layer.name
                )));
            }
        }

        let mut out = Vec::with_capacity(64 + pixels * 4 * 2);

        // File header.
        out.extend_from_slice(SIGNATURE);
        put_u16(&mut out, 1);
        out.extend_from_slice(&[0; 6]);
        put_u16(&mut out, 4);
        put_u32(&mut out, self.height);
        put_u32(&mut out, self.width);
        put_u16(&mut out, 8);
        put_u16(&mut out, COLOR_MODE_RGB);

        // Color mode data and image resources.
        put_u32(&mut out, 0);
        put_u32(&mut out, 0);

        let layer_info = self.layer_info()?;
        let mut section = Vec::with_capacity(layer_info.len() + 8);
        put_len(&mut section, layer_info.len())?;
        section.extend_from_slice(&layer_info);
        // Global layer mask info.
        put_u32(&mut section, 0);
        put_len(&mut out, section.len())?;
        out.extend_from_slice(&section);

        // Merged image data, planar.
        put_u16(&mut out, COMPRESSION_RAW);
        for c in 0..4 {
            out.extend(self.merged_rgba8.iter().skip(c).step_by(4));
        }
        Ok(out)
    }

    fn layer_info(&self) -> LayerstackResult<Vec<u8>> {
        let mut info = Vec::new();
        if self.layers.is_empty() {
            return Ok(info);
        }

        let count = i16::try_from(self.layers.len())
            .map_err(|_| LayerstackError::render("too many psd layers"))?;
        // Negative: the first alpha channel holds the merged transparency.
        put_i16(&mut info, -count);

        for layer in &self.layers {
            write_record(&mut info, layer)?;
        }
        for layer in &self.layers {
            for c in 0..4 {
                put_u16(&mut info, COMPRESSION_RAW);
                info.extend(layer.rgba8.iter().skip(c).step_by(4));
            }
        }

        if info.len() % 2 != 0 {
            info.push(0);
        }
        Ok(info)
    }
}

fn write_record(out: &mut Vec<u8>, layer: &PsdLayer) -> LayerstackResult<()> {
    let bottom = edge(layer.top, layer.height)?;
    let right = edge(layer.left, layer.width)?;
    put_i32(out, layer.top);
    put_i32(out, layer.left);
    put_i32(out, bottom);
    put_i32(out, right);

    let plane = (layer.width as usize) * (layer.height as usize);
    put_u16(out, CHANNEL_IDS.len() as u16);
    for id in CHANNEL_IDS {
        put_i16(out, id);
        put_len(out, 2 + plane)?;
    }

    out.extend_from_slice(BLOCK_SIGNATURE);
    out.extend_from_slice(BLEND_NORMAL);
    out.push(255);
    out.push(0);
    out.push(if layer.visible { 0 } else { FLAG_HIDDEN });
    out.push(0);

    let mut extra = Vec::new();
    put_u32(&mut extra, 0);
    put_u32(&mut extra, 0);
    write_pascal_name(&mut extra, &layer.name);
    write_unicode_name(&mut extra, &layer.name)?;

    put_len(out, extra.len())?;
    out.extend_from_slice(&extra);
    Ok(())
}

/// Pascal string padded so the whole field is a multiple of 4 bytes.
fn write_pascal_name(out: &mut Vec<u8>, name: &str) {
    let bytes: Vec<u8> = name
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c as u8 } else { b'?' })
        .take(255)
        .collect();
    out.push(bytes.len() as u8);
    out.extend_from_slice(&bytes);
    let written = 1 + bytes.len();
    out.resize(out.len() + (4 - written % 4) % 4, 0);
}

fn write_unicode_name(out: &mut Vec<u8>, name: &str) -> LayerstackResult<()> {
    let units: Vec<u16> = name.encode_utf16().collect();
    let mut data = Vec::with_capacity(4 + units.len() * 2);
    put_len(&mut data, units.len())?;
    for u in units {
        put_u16(&mut data, u);
    }
    data.resize(data.len() + (4 - data.len() % 4) % 4, 0);

    out.extend_from_slice(BLOCK_SIGNATURE);
    out.extend_from_slice(b"luni");
    put_len(out, data.len())?;
    out.extend_from_slice(&data);
    Ok(())
}

fn edge(start: i32, extent: u32) -> LayerstackResult<i32> {
    i32::try_from(i64::from(start) + i64::from(extent))
        .map_err(|_| LayerstackError::render("psd layer bounds overflow"))
}

fn put_len(out: &mut Vec<u8>, len: usize) -> LayerstackResult<()> {
    let len = u32::try_from(len).map_err(|_| LayerstackError::render("psd section too large"))?;
    put_u32(out, len);
    Ok(())
}

fn put_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_i16(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_i32(out: &mut Vec<u8>, v: i32) {
    out.extend_from_slice(&v.to_be_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/render/psd.rs"]
mod tests;
