use crate::{
    compose::{
        layer::LayerItem,
        matcher::match_decorations,
        overrides::{apply_overrides, price_layers},
        zorder::{ZQuery, resolve_z},
    },
    foundation::core::Position,
    model::{
        asset::{DecorationAsset, ProductAsset},
        input::CompositionInput,
        instance::InstanceConfig,
        project::{LayerType, ProjectTemplate},
    },
};

/// Compute the ordered layer list of one variant.
///
/// Emits the product layer, then every eligible decoration in catalog order, then the price
/// layers, and stably sorts the result by z-index so equal indices keep that order. Pure: the
/// same inputs always produce the same list, which is what preview and final rendering share.
#[tracing::instrument(level = "debug", skip_all, fields(product = %product.id))]
pub fn compute_layers(
    product: &ProductAsset,
    decorations: &[DecorationAsset],
    input: &CompositionInput,
    template: Option<&ProjectTemplate>,
    instance: Option<&InstanceConfig>,
) -> Vec<LayerItem> {
    let mut layers = Vec::new();

    layers.push(LayerItem::product(
        &product.id,
        &product.file_path,
        resolve_z(&ZQuery::of_type(LayerType::Product), template),
    ));

    for deco in match_decorations(product, decorations, input) {
        let query = ZQuery::decoration(deco.meta.category, &deco.id);
        layers.push(LayerItem::decoration(
            query.layer_type,
            &deco.id,
            &deco.file_path,
            resolve_z(&query, template),
            Position::ZERO,
        ));
    }

    let mut layers = apply_overrides(layers, instance);
    layers.extend(price_layers(input, template, instance));

    // `sort_by_key` is stable.
    layers.sort_by_key(|l| l.z_index);
    tracing::debug!(layers = layers.len(), "computed layer list");
    layers
}

#[cfg(test)]
#[path = "../../tests/unit/compose/builder.rs"]
mod tests;
