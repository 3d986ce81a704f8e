use crate::foundation::core::Position;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-variant price text replacement.
pub struct PriceOverride {
    /// Replacement original price text.
    #[serde(default)]
    pub original: String,
    /// Replacement promotional price text.
    #[serde(default)]
    pub promo: String,
    /// Replacement position of the original price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_position: Option<Position>,
    /// Replacement position of the promotional price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_position: Option<Position>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Final position of one decoration in one variant.
///
/// Offsets are absolute positions relative to the template origin, not deltas.
pub struct DecorationAdjustment {
    /// Adjusted decoration.
    pub decoration_id: String,
    /// Horizontal position.
    pub offset_x: f64,
    /// Vertical position.
    pub offset_y: f64,
}

impl DecorationAdjustment {
    /// Adjusted position.
    pub fn position(&self) -> Position {
        Position::new(self.offset_x, self.offset_y)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-variant deviations from the project template.
pub struct InstanceConfig {
    /// Record identifier.
    #[serde(default)]
    pub id: String,
    /// Owning project id.
    pub project_id: String,
    /// Product of the variant.
    pub product_id: String,
    /// Energy level of the variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<String>,
    /// Capacity code of the variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_code: Option<String>,
    /// Price text replacement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_override: Option<PriceOverride>,
    /// Decoration position replacements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decoration_adjustments: Option<Vec<DecorationAdjustment>>,
    /// Creation timestamp as stored.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as stored.
    #[serde(default)]
    pub updated_at: String,
}

impl InstanceConfig {
    /// Empty override record for a variant.
    pub fn new(
        project_id: impl Into<String>,
        product_id: impl Into<String>,
        energy_level: Option<String>,
        capacity_code: Option<String>,
    ) -> Self {
        Self {
            id: String::new(),
            project_id: project_id.into(),
            product_id: product_id.into(),
            energy_level,
            capacity_code,
            price_override: None,
            decoration_adjustments: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    /// Whether this record overrides the variant `(product, energy, capacity)`.
    ///
    /// Absent values only match absent values.
    pub fn matches_variant(
        &self,
        product_id: &str,
        energy_level: Option<&str>,
        capacity_code: Option<&str>,
    ) -> bool {
        self.product_id == product_id
            && self.energy_level.as_deref() == energy_level
            && self.capacity_code.as_deref() == capacity_code
    }

    /// Whether this record has the same identity as `other`.
    pub fn same_key(&self, other: &InstanceConfig) -> bool {
        self.project_id == other.project_id
            && self.matches_variant(
                &other.product_id,
                other.energy_level.as_deref(),
                other.capacity_code.as_deref(),
            )
    }

    /// Adjustment for `decoration_id`, if any.
    pub fn adjustment_for(&self, decoration_id: &str) -> Option<&DecorationAdjustment> {
        self.decoration_adjustments
            .as_deref()?
            .iter()
            .find(|a| a.decoration_id == decoration_id)
    }
}
