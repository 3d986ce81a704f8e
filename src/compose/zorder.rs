//! Three-tier z-index resolution.
//!
//! A layer's stacking index comes from the first tier that answers:
//!
//! 1. a template entry pinned to the layer's decoration id;
//! 2. a template entry for the layer's type (and, for decorations, its category) that is not
//!    pinned to any decoration;
//! 3. the type default ([`LayerType::default_z`]).
//!
//! Tiers are independent lookups tried in order, so most decorations can share one index per
//! category while any single asset can be pinned on its own.

use crate::model::{
    asset::DecorationCategory,
    project::{LayerOrderConfig, LayerType, ProjectTemplate},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a z-index is being resolved for.
pub struct ZQuery<'a> {
    /// Stacking type of the layer.
    pub layer_type: LayerType,
    /// Category of the decoration, for decoration-derived layers.
    pub category: Option<DecorationCategory>,
    /// Catalog id of the decoration, for decoration-derived layers.
    pub decoration_id: Option<&'a str>,
}

impl<'a> ZQuery<'a> {
    /// Query for a layer type without decoration details.
    pub fn of_type(layer_type: LayerType) -> Self {
        Self {
            layer_type,
            category: None,
            decoration_id: None,
        }
    }

    /// Query for a decoration asset; background decorations stack as `background`.
    pub fn decoration(category: DecorationCategory, decoration_id: &'a str) -> Self {
        Self {
            layer_type: LayerType::for_decoration(category),
            category: Some(category),
            decoration_id: Some(decoration_id),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Tier that produced a resolved z-index.
pub enum ZSource {
    /// Template entry pinned to the decoration id.
    DecorationId,
    /// Template entry for the type/category.
    Category,
    /// Built-in type default.
    Default,
}

type TemplateTier = fn(&ZQuery<'_>, &[LayerOrderConfig]) -> Option<i32>;

const TEMPLATE_TIERS: [(ZSource, TemplateTier); 2] = [
    (ZSource::DecorationId, by_decoration_id),
    (ZSource::Category, by_category),
];

/// Resolve the stacking index for `query`. Without a template the type default applies.
pub fn resolve_z(query: &ZQuery<'_>, template: Option<&ProjectTemplate>) -> i32 {
    resolve_z_with_source(query, template).0
}

/// Like [`resolve_z`], also reporting which tier answered.
pub fn resolve_z_with_source(
    query: &ZQuery<'_>,
    template: Option<&ProjectTemplate>,
) -> (i32, ZSource) {
    if let Some(template) = template {
        for (source, tier) in TEMPLATE_TIERS {
            if let Some(z) = tier(query, &template.layer_order) {
                return (z, source);
            }
        }
    }
    (query.layer_type.default_z(), ZSource::Default)
}

/// Decoration id an entry is pinned to. An empty id counts as unpinned.
fn pinned_id(entry: &LayerOrderConfig) -> Option<&str> {
    entry.decoration_id.as_deref().filter(|id| !id.is_empty())
}

/// Tier 1: an entry bound to exactly this decoration.
pub fn by_decoration_id(query: &ZQuery<'_>, entries: &[LayerOrderConfig]) -> Option<i32> {
    let id = query.decoration_id.filter(|id| !id.is_empty())?;
    entries
        .iter()
        .find(|e| pinned_id(e) == Some(id))
        .map(|e| e.z_index)
}

/// Tier 2: the first unpinned entry of the same type (and category, for decorations).
pub fn by_category(query: &ZQuery<'_>, entries: &[LayerOrderConfig]) -> Option<i32> {
    entries
        .iter()
        .find(|e| {
            if e.layer_type != query.layer_type || pinned_id(e).is_some() {
                return false;
            }
            match query.layer_type {
                LayerType::Decoration => e.decoration_category == query.category,
                LayerType::Background | LayerType::Product | LayerType::Price => true,
            }
        })
        .map(|e| e.z_index)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/zorder.rs"]
mod tests;
