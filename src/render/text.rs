use std::{borrow::Cow, collections::HashSet};

use crate::{
    assets::fonts::FontFace,
    foundation::{
        core::{Canvas, Position, Rgba8},
        error::{LayerstackError, LayerstackResult},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layouts.
pub struct TextBrush {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrush {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Stateful helper for shaping single-line text with Parley.
///
/// Faces are registered once per engine, by family name and weight.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    registered: HashSet<(String, u16)>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Engine with fresh Parley contexts and no system fonts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashSet::new(),
        }
    }

    /// Shape `text` in `face` without line breaking.
    ///
    /// The face's own weight is requested, so glyphs come from the same font file that
    /// [`rasterize_layout`] draws with.
    pub fn layout(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
        brush: TextBrush,
    ) -> LayerstackResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(LayerstackError::invalid_metadata(
                "text font size must be finite and > 0",
            ));
        }

        if self.registered.insert((face.family.clone(), face.weight)) {
            self.font_ctx.collection.register_fonts(
                parley::fontique::Blob::from(face.bytes.as_ref().clone()),
                None,
            );
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(face.weight)),
        ));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Draw a shaped layout onto a transparent canvas-sized buffer.
///
/// The layout's top-left lands at `position`, so the first baseline sits at `y + ascent`.
/// Returns premultiplied RGBA8.
pub fn rasterize_layout(
    layout: &parley::Layout<TextBrush>,
    face: &FontFace,
    position: Position,
    canvas: Canvas,
) -> LayerstackResult<Vec<u8>> {
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| LayerstackError::render("canvas width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| LayerstackError::render("canvas height exceeds u16"))?;

    let font = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()),
        0,
    );

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::new(
        position.to_affine().as_coeffs(),
    ));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };

            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap.data_as_u8_slice().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
