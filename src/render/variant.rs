use crate::{
    assets::loader::AssetLoader,
    catalog::source::Catalog,
    compose::{
        builder::compute_layers,
        layer::LayerItem,
        naming::{ExportFormat, output_file_name, variant_stem},
    },
    foundation::{
        core::Canvas,
        error::{LayerstackError, LayerstackResult},
    },
    model::{asset::ProductAsset, input::CompositionInput},
    render::{flat::render_flat, layered::render_layered, output::RenderedOutput},
};

#[derive(Clone, Debug, PartialEq)]
/// Layer list of one variant together with what is needed to render and name it.
pub struct ComposedVariant {
    /// Product the variant shows.
    pub product: ProductAsset,
    /// Resolved layers, bottom first.
    pub layers: Vec<LayerItem>,
    /// Project canvas.
    pub canvas: Canvas,
    /// Descriptive file name without extension.
    pub stem: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Encoded variant and its output file name.
pub struct RenderedVariant {
    /// File name including extension.
    pub file_name: String,
    /// Encoded document.
    pub output: RenderedOutput,
}

/// Resolve `input` against `catalog` and compute its layers.
///
/// The project is looked up by name and the instance override by (product, energy level,
/// capacity code) within that project. The product record is validated here, so an air
/// conditioner without a form factor fails only its own variants.
pub fn compose_variant(
    catalog: &dyn Catalog,
    input: &CompositionInput,
) -> LayerstackResult<ComposedVariant> {
    input.validate()?;

    let project = catalog.project_by_name(&input.project_name).ok_or_else(|| {
        LayerstackError::not_found(format!("project '{}'", input.project_name))
    })?;
    let product = catalog
        .product(&input.product_id)
        .ok_or_else(|| LayerstackError::not_found(format!("product '{}'", input.product_id)))?;
    product.validate()?;
    let canvas = project.canvas()?;

    let decorations = catalog.decorations_by_project(&project.project_name);
    let instance = catalog
        .instances_by_project(&project.id)
        .into_iter()
        .find(|i| {
            i.matches_variant(
                &input.product_id,
                input.energy_level.as_deref(),
                input.capacity_code.as_deref(),
            )
        });

    let layers = compute_layers(
        product,
        &decorations,
        input,
        project.template.as_ref(),
        instance,
    );
    Ok(ComposedVariant {
        product: product.clone(),
        layers,
        canvas,
        stem: variant_stem(product, input),
    })
}

/// Compose and encode one variant.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(project = %input.project_name, product = %input.product_id, ?format)
)]
pub fn render_variant(
    catalog: &dyn Catalog,
    input: &CompositionInput,
    format: ExportFormat,
    loader: &mut AssetLoader,
) -> LayerstackResult<RenderedVariant> {
    let composed = compose_variant(catalog, input)?;
    let output = match format {
        ExportFormat::Png => render_flat(&composed.layers, composed.canvas, loader)?,
        ExportFormat::Psd => {
            render_layered(&composed.layers, composed.canvas, &composed.stem, loader)?
        }
    };
    Ok(RenderedVariant {
        file_name: output_file_name(&composed.product, input, format),
        output,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/variant.rs"]
mod tests;
