use crate::{
    foundation::core::{Canvas, Position},
    foundation::error::LayerstackResult,
    model::asset::DecorationCategory,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Closed set of stackable layer types.
pub enum LayerType {
    /// Background decorations.
    Background,
    /// The product photo.
    Product,
    /// Non-background decorations.
    Decoration,
    /// Price text.
    Price,
}

impl LayerType {
    /// All layer types, bottom-most default first.
    pub const ALL: [Self; 4] = [Self::Background, Self::Product, Self::Decoration, Self::Price];

    /// Z-index used when no template entry applies.
    pub fn default_z(self) -> i32 {
        match self {
            Self::Background => 0,
            Self::Product => 50,
            Self::Decoration => 100,
            Self::Price => 200,
        }
    }

    /// Stacking type of a decoration with the given category.
    pub fn for_decoration(category: DecorationCategory) -> Self {
        match category {
            DecorationCategory::Background => Self::Background,
            _ => Self::Decoration,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One entry of a project's base stacking order.
pub struct LayerOrderConfig {
    /// Layer type this entry applies to.
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    /// Category filter for `decoration` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_category: Option<DecorationCategory>,
    /// Pins this entry to one decoration asset; such entries never match by category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_id: Option<String>,
    /// Stacking index, lower paints first.
    pub z_index: i32,
}

impl LayerOrderConfig {
    /// Entry applying to a whole layer type.
    pub fn for_type(layer_type: LayerType, z_index: i32) -> Self {
        Self {
            layer_type,
            decoration_category: None,
            decoration_id: None,
            z_index,
        }
    }

    /// Entry applying to every decoration of `category` without a pinned entry.
    pub fn for_category(category: DecorationCategory, z_index: i32) -> Self {
        Self {
            layer_type: LayerType::for_decoration(category),
            decoration_category: Some(category),
            decoration_id: None,
            z_index,
        }
    }

    /// Entry pinned to a single decoration asset.
    pub fn for_decoration_id(
        category: DecorationCategory,
        decoration_id: impl Into<String>,
        z_index: i32,
    ) -> Self {
        Self {
            layer_type: LayerType::for_decoration(category),
            decoration_category: Some(category),
            decoration_id: Some(decoration_id.into()),
            z_index,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Placement and styling of one price text.
pub struct PriceLayerConfig {
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Requested font family name.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Fill color as hex (`#rrggbb` or `#rrggbbaa`).
    pub color: String,
    /// Owning project id (informational).
    #[serde(default)]
    pub project_id: String,
    /// Bold weight.
    #[serde(default)]
    pub bold: bool,
}

impl PriceLayerConfig {
    /// Style used for a triggered price slot when the template defines none.
    pub fn fallback() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            font_family: "sans-serif".to_string(),
            font_size: 48.0,
            color: "#000000".to_string(),
            project_id: String::new(),
            bold: false,
        }
    }

    /// Top-left position of the text.
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Project-level default styles of both price texts.
pub struct DefaultPriceConfig {
    /// Style of the original (list) price.
    pub original_price: PriceLayerConfig,
    /// Style of the promotional price.
    pub promo_price: PriceLayerConfig,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Base stacking order and price styling shared by all variants of a project.
pub struct ProjectTemplate {
    /// Ordered stacking entries; lookups take the first match.
    #[serde(default)]
    pub layer_order: Vec<LayerOrderConfig>,
    /// Default price styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_price_config: Option<DefaultPriceConfig>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A marketing campaign: canvas size plus its template.
pub struct Project {
    /// Record identifier.
    pub id: String,
    /// Unique machine name; decorations bind to this.
    pub project_name: String,
    /// Human readable name.
    #[serde(default)]
    pub display_name: String,
    /// Output width in pixels.
    pub canvas_width: u32,
    /// Output height in pixels.
    pub canvas_height: u32,
    /// Creation timestamp as stored.
    #[serde(default)]
    pub created_at: String,
    /// Stacking template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<ProjectTemplate>,
}

impl Project {
    /// Validated output canvas.
    pub fn canvas(&self) -> LayerstackResult<Canvas> {
        Canvas::new(self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/project.rs"]
mod tests;
