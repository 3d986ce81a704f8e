use crate::{
    compose::layer::{LayerItem, PriceSlot},
    compose::zorder::{ZQuery, resolve_z},
    foundation::core::Position,
    model::{
        input::CompositionInput,
        instance::InstanceConfig,
        project::{LayerType, PriceLayerConfig, ProjectTemplate},
    },
};

/// Apply per-variant decoration positions.
///
/// Decoration-derived layers with a matching adjustment take its offsets as their absolute
/// position. Product and price layers are untouched.
pub fn apply_overrides(
    mut layers: Vec<LayerItem>,
    instance: Option<&InstanceConfig>,
) -> Vec<LayerItem> {
    let Some(instance) = instance else {
        return layers;
    };
    for layer in &mut layers {
        let Some(id) = layer.decoration_id() else {
            continue;
        };
        if let Some(adj) = instance.adjustment_for(id) {
            layer.position = adj.position();
        }
    }
    layers
}

/// Build the price text layers of a variant, in slot order.
///
/// A slot is triggered when the input carries non-empty literal text for it or the template
/// defines default price styling. A triggered slot draws the override text if non-empty,
/// else the literal text, and emits nothing when both are empty. An override never triggers a
/// slot on its own. Position is the override position, else the style position.
pub fn price_layers(
    input: &CompositionInput,
    template: Option<&ProjectTemplate>,
    instance: Option<&InstanceConfig>,
) -> Vec<LayerItem> {
    let defaults = template.and_then(|t| t.default_price_config.as_ref());
    let price_override = instance.and_then(|i| i.price_override.as_ref());
    let z = resolve_z(&ZQuery::of_type(LayerType::Price), template);

    let mut out = Vec::with_capacity(2);
    for slot in PriceSlot::ALL {
        let literal = non_empty(match slot {
            PriceSlot::Original => input.price_original_text.as_deref(),
            PriceSlot::Promo => input.price_promo_text.as_deref(),
        });
        let style = defaults.map(|d| match slot {
            PriceSlot::Original => &d.original_price,
            PriceSlot::Promo => &d.promo_price,
        });
        if literal.is_none() && style.is_none() {
            continue;
        }

        let (override_text, override_pos) = match price_override {
            Some(o) => match slot {
                PriceSlot::Original => (non_empty(Some(o.original.as_str())), o.original_position),
                PriceSlot::Promo => (non_empty(Some(o.promo.as_str())), o.promo_position),
            },
            None => (None, None),
        };
        let Some(text) = override_text.or(literal) else {
            continue;
        };

        let style = style.cloned().unwrap_or_else(PriceLayerConfig::fallback);
        let position: Position = override_pos.unwrap_or_else(|| style.position());
        out.push(LayerItem::price(slot, text.to_string(), style, z, position));
    }
    out
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/overrides.rs"]
mod tests;
