use std::sync::Arc;

use crate::{
    assets::loader::AssetLoader,
    compose::layer::{LayerContent, LayerItem},
    foundation::{
        core::{Canvas, Rgba8},
        error::LayerstackResult,
    },
    model::project::PriceLayerConfig,
    render::{
        surface::LayerRaster,
        text::{TextLayoutEngine, rasterize_layout},
    },
};

/// Produce the pixels of every layer, keeping the input (bottom-first) order.
///
/// Image layers keep their native resolution at their rounded position. Text layers cover the
/// whole canvas.
pub fn rasterize_layers(
    layers: &[LayerItem],
    canvas: Canvas,
    loader: &mut AssetLoader,
) -> LayerstackResult<Vec<LayerRaster>> {
    let mut text_engine = TextLayoutEngine::new();
    let mut out = Vec::with_capacity(layers.len());

    for layer in layers {
        let raster = match &layer.content {
            LayerContent::Image { file_path, .. } => {
                let img = loader.image(file_path)?;
                let (left, top) = layer.position.to_pixel();
                LayerRaster {
                    id: layer.id.clone(),
                    left,
                    top,
                    width: img.width,
                    height: img.height,
                    rgba8_premul: Arc::clone(&img.rgba8_premul),
                }
            }
            LayerContent::Text {
                text_content,
                text_style,
            } => {
                let pixels = rasterize_text(
                    &mut text_engine,
                    loader,
                    text_content,
                    text_style,
                    layer,
                    canvas,
                )?;
                LayerRaster {
                    id: layer.id.clone(),
                    left: 0,
                    top: 0,
                    width: canvas.width,
                    height: canvas.height,
                    rgba8_premul: Arc::new(pixels),
                }
            }
        };
        out.push(raster);
    }
    Ok(out)
}

fn rasterize_text(
    engine: &mut TextLayoutEngine,
    loader: &AssetLoader,
    text: &str,
    style: &PriceLayerConfig,
    layer: &LayerItem,
    canvas: Canvas,
) -> LayerstackResult<Vec<u8>> {
    let color = Rgba8::parse_hex(&style.color)?;
    let face = loader.fonts().resolve(&style.font_family, style.bold)?;
    let layout = engine.layout(text, face, style.font_size, color.into())?;
    rasterize_layout(&layout, face, layer.position, canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
