use crate::{
    assets::loader::AssetLoader,
    compose::{layer::LayerItem, naming::ExportFormat},
    foundation::{
        core::Canvas,
        error::{LayerstackError, LayerstackResult},
        math::unpremultiply_rgba8_in_place,
    },
    render::{
        output::RenderedOutput,
        psd::{PsdDocument, PsdLayer},
        raster::rasterize_layers,
        surface::{LayerRaster, Surface},
    },
};

/// Render `layers` (bottom first) as a layered PSD document.
///
/// Every layer becomes a named pixel layer: images at their own size and offset, text on a
/// full-canvas transparent layer. A hidden 1x1 placeholder named `name` goes on top, and the
/// merged image is the same flattened composite [`render_flat`](crate::render_flat) encodes.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(name = %name, layers = layers.len(), width = canvas.width, height = canvas.height)
)]
pub fn render_layered(
    layers: &[LayerItem],
    canvas: Canvas,
    name: &str,
    loader: &mut AssetLoader,
) -> LayerstackResult<RenderedOutput> {
    let rasters = rasterize_layers(layers, canvas, loader)?;
    let merged = Surface::flatten(canvas, &rasters);

    let mut psd_layers = rasters
        .iter()
        .map(psd_layer)
        .collect::<LayerstackResult<Vec<_>>>()?;
    psd_layers.push(PsdLayer {
        name: name.to_string(),
        left: 0,
        top: 0,
        width: 1,
        height: 1,
        rgba8: vec![0; 4],
        visible: false,
    });

    let doc = PsdDocument {
        width: canvas.width,
        height: canvas.height,
        layers: psd_layers,
        merged_rgba8: merged.to_straight_rgba8(),
    };
    Ok(RenderedOutput {
        format: ExportFormat::Psd,
        bytes: doc.encode()?,
    })
}

fn psd_layer(raster: &LayerRaster) -> LayerstackResult<PsdLayer> {
    let offset = |v: i64| {
        i32::try_from(v).map_err(|_| {
            LayerstackError::render(format!("layer '{}' offset {v} out of range", raster.id))
        })
    };
    let mut rgba8 = raster.rgba8_premul.as_ref().clone();
    unpremultiply_rgba8_in_place(&mut rgba8);
    Ok(PsdLayer {
        name: raster.id.clone(),
        left: offset(raster.left)?,
        top: offset(raster.top)?,
        width: raster.width,
        height: raster.height,
        rgba8,
        visible: true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/layered.rs"]
mod tests;
