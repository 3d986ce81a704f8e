use crate::{
    foundation::core::Position,
    model::project::{LayerType, PriceLayerConfig},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// The two price texts a variant can carry.
pub enum PriceSlot {
    /// List price.
    Original,
    /// Promotional price.
    Promo,
}

impl PriceSlot {
    /// Both slots in emission order.
    pub const ALL: [Self; 2] = [Self::Original, Self::Promo];

    /// Layer id of this slot.
    pub fn layer_id(self) -> &'static str {
        match self {
            Self::Original => "price-original",
            Self::Promo => "price-promo",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// What a layer paints.
pub enum LayerContent {
    /// A bitmap asset drawn at its own resolution.
    #[serde(rename_all = "camelCase")]
    Image {
        /// Catalog id of the product or decoration.
        asset_id: String,
        /// Path relative to the storage root.
        file_path: String,
    },
    /// Rasterized text.
    #[serde(rename_all = "camelCase")]
    Text {
        /// Text to draw.
        text_content: String,
        /// Font and color.
        text_style: PriceLayerConfig,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One resolved layer of a composed variant. Computed per request, never persisted.
pub struct LayerItem {
    /// Deterministic layer id (`product-<id>`, `deco-<id>`, `price-original`, `price-promo`).
    pub id: String,
    /// Stacking type the z-index was resolved for.
    pub layer_type: LayerType,
    /// Painted content.
    #[serde(flatten)]
    pub content: LayerContent,
    /// Resolved stacking index.
    pub z_index: i32,
    /// Resolved top-left position.
    #[serde(flatten)]
    pub position: Position,
}

impl LayerItem {
    /// Layer drawing the product photo.
    pub fn product(asset_id: &str, file_path: &str, z_index: i32) -> Self {
        Self {
            id: format!("product-{asset_id}"),
            layer_type: LayerType::Product,
            content: LayerContent::Image {
                asset_id: asset_id.to_string(),
                file_path: file_path.to_string(),
            },
            z_index,
            position: Position::ZERO,
        }
    }

    /// Layer drawing a decoration overlay.
    pub fn decoration(
        layer_type: LayerType,
        asset_id: &str,
        file_path: &str,
        z_index: i32,
        position: Position,
    ) -> Self {
        Self {
            id: format!("deco-{asset_id}"),
            layer_type,
            content: LayerContent::Image {
                asset_id: asset_id.to_string(),
                file_path: file_path.to_string(),
            },
            z_index,
            position,
        }
    }

    /// Layer drawing one price text.
    pub fn price(
        slot: PriceSlot,
        text: String,
        style: PriceLayerConfig,
        z_index: i32,
        position: Position,
    ) -> Self {
        Self {
            id: slot.layer_id().to_string(),
            layer_type: LayerType::Price,
            content: LayerContent::Text {
                text_content: text,
                text_style: style,
            },
            z_index,
            position,
        }
    }

    /// Catalog id of the decoration this layer was built from, if any.
    pub fn decoration_id(&self) -> Option<&str> {
        match (&self.layer_type, &self.content) {
            (LayerType::Background | LayerType::Decoration, LayerContent::Image { asset_id, .. }) => {
                Some(asset_id)
            }
            _ => None,
        }
    }

    /// Whether this layer is text.
    pub fn is_text(&self) -> bool {
        matches!(self.content, LayerContent::Text { .. })
    }
}
