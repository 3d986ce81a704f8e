use crate::foundation::error::{LayerstackError, LayerstackResult};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request to render one variant.
pub struct CompositionInput {
    /// Name of the project the variant belongs to.
    pub project_name: String,
    /// Product to render.
    pub product_id: String,
    /// Energy level of the variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<String>,
    /// Capacity code of the variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_code: Option<String>,
    /// Literal original price text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_original_text: Option<String>,
    /// Literal promotional price text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_promo_text: Option<String>,
}

impl CompositionInput {
    /// Input for a variant without price text.
    pub fn new(project_name: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            product_id: product_id.into(),
            ..Self::default()
        }
    }

    /// Set the energy level.
    pub fn with_energy_level(mut self, level: impl Into<String>) -> Self {
        self.energy_level = Some(level.into());
        self
    }

    /// Set the capacity code.
    pub fn with_capacity_code(mut self, code: impl Into<String>) -> Self {
        self.capacity_code = Some(code.into());
        self
    }

    /// Set literal price texts.
    pub fn with_prices(mut self, original: Option<String>, promo: Option<String>) -> Self {
        self.price_original_text = original;
        self.price_promo_text = promo;
        self
    }

    /// Reject inputs missing the identifiers the engine needs.
    pub fn validate(&self) -> LayerstackResult<()> {
        if self.project_name.trim().is_empty() {
            return Err(LayerstackError::invalid_metadata(
                "composition input is missing projectName",
            ));
        }
        if self.product_id.trim().is_empty() {
            return Err(LayerstackError::invalid_metadata(
                "composition input is missing productId",
            ));
        }
        for (field, v) in [
            ("energyLevel", &self.energy_level),
            ("capacityCode", &self.capacity_code),
        ] {
            if v.as_deref().is_some_and(|s| s.trim().is_empty()) {
                return Err(LayerstackError::invalid_metadata(format!(
                    "composition input has an empty {field}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/input.rs"]
mod tests;
