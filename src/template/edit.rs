//! Editing helpers for a project's base stacking order.
//!
//! Editors present the order top-first (highest z-index first). These helpers are pure list
//! operations; they never touch the composition engine.

use crate::model::{
    asset::{DecorationAsset, DecorationCategory},
    project::{LayerOrderConfig, LayerType},
};

/// Spacing between consecutive z-indices after [`assign_descending_z`].
pub const Z_STEP: i32 = 10;

/// Starter order for a project without a saved template, listed top-first.
///
/// Price at 200, one entry per distinct non-background decoration category at `100 + i` where
/// `i` is the category's first-seen position among all categories, product at 50 and background
/// at 0.
pub fn default_layer_order(decorations: &[DecorationAsset]) -> Vec<LayerOrderConfig> {
    let mut categories: Vec<DecorationCategory> = Vec::new();
    for d in decorations {
        if !categories.contains(&d.meta.category) {
            categories.push(d.meta.category);
        }
    }

    let mut out = vec![LayerOrderConfig::for_type(
        LayerType::Price,
        LayerType::Price.default_z(),
    )];
    for (i, category) in categories.into_iter().enumerate() {
        if category == DecorationCategory::Background {
            continue;
        }
        out.push(LayerOrderConfig::for_category(category, 100 + i as i32));
    }
    out.push(LayerOrderConfig::for_type(
        LayerType::Product,
        LayerType::Product.default_z(),
    ));
    out.push(LayerOrderConfig::for_type(
        LayerType::Background,
        LayerType::Background.default_z(),
    ));
    out
}

/// Saved order sorted for display, highest z-index first. Ties keep their stored order.
pub fn top_first(order: &[LayerOrderConfig]) -> Vec<LayerOrderConfig> {
    let mut out = order.to_vec();
    out.sort_by_key(|e| std::cmp::Reverse(e.z_index));
    out
}

/// Move the entry at `from` so that it ends up at `to`.
///
/// Out-of-range indices leave the list unchanged.
pub fn reorder(order: &[LayerOrderConfig], from: usize, to: usize) -> Vec<LayerOrderConfig> {
    let mut out = order.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Renumber a top-first list so position `i` gets `(len - i) * 10`.
pub fn assign_descending_z(order: &[LayerOrderConfig]) -> Vec<LayerOrderConfig> {
    let len = order.len() as i32;
    order
        .iter()
        .enumerate()
        .map(|(i, e)| LayerOrderConfig {
            z_index: (len - i as i32) * Z_STEP,
            ..e.clone()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/template/edit.rs"]
mod tests;
