use crate::foundation::error::{LayerstackError, LayerstackResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Product line a photo belongs to.
pub enum ProductCategory {
    /// Air conditioner. Carries a form factor and usually energy/capacity restrictions.
    Ac,
    /// Any other home appliance. Never restricted by energy level or capacity.
    LifeAppliance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Physical form of an air conditioner.
pub enum AcFormFactor {
    /// Wall-mounted unit.
    Wall,
    /// Floor-standing cabinet unit.
    Cabinet,
}

impl AcFormFactor {
    /// Localized label used in output file names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Wall => "挂机",
            Self::Cabinet => "柜机",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Role of a decoration overlay within a project.
pub enum DecorationCategory {
    /// Full-canvas backdrop; stacks as the `background` layer type.
    Background,
    /// Energy efficiency badge.
    EnergyBadge,
    /// Capacity (horsepower) badge.
    CapacityBadge,
    /// Brand logo.
    BrandLogo,
    /// Anything else; members often need individual stacking.
    Other,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Energy-level and capacity-code applicability of an asset.
///
/// An absent or empty set places no restriction.
pub struct Applicability {
    /// Energy levels the asset applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_levels: Option<Vec<String>>,
    /// Capacity codes the asset applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_codes: Option<Vec<String>>,
}

impl Applicability {
    /// Non-empty energy restriction, if any.
    pub fn energy_restriction(&self) -> Option<&[String]> {
        non_empty(self.energy_levels.as_deref())
    }

    /// Non-empty capacity restriction, if any.
    pub fn capacity_restriction(&self) -> Option<&[String]> {
        non_empty(self.capacity_codes.as_deref())
    }

    /// Whether either set carries a restriction.
    pub fn is_restricted(&self) -> bool {
        self.energy_restriction().is_some() || self.capacity_restriction().is_some()
    }
}

fn non_empty(set: Option<&[String]>) -> Option<&[String]> {
    set.filter(|s| !s.is_empty())
}

/// Inclusive-by-absence membership test.
///
/// An absent or empty `set` admits every value (including an absent one); a non-empty set
/// requires `value` to be present and a member.
pub fn admits(set: Option<&[String]>, value: Option<&str>) -> bool {
    match non_empty(set) {
        None => true,
        Some(set) => value.is_some_and(|v| set.iter().any(|s| s == v)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Catalog metadata of a product photo.
pub struct ProductMeta {
    /// Product line.
    pub category: ProductCategory,
    /// Required iff `category` is [`ProductCategory::Ac`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac_form_factor: Option<AcFormFactor>,
    /// Series name, e.g. a marketing line.
    pub series: String,
    /// Color name.
    pub color: String,
    /// Variants this photo can be rendered for.
    #[serde(flatten)]
    pub applicability: Applicability,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One product photo, shared across projects.
pub struct ProductAsset {
    /// Catalog identifier.
    pub id: String,
    /// Path of the image relative to the storage root.
    pub file_path: String,
    /// Catalog metadata.
    pub meta: ProductMeta,
}

impl ProductAsset {
    /// Check record-level invariants.
    pub fn validate(&self) -> LayerstackResult<()> {
        if self.id.trim().is_empty() {
            return Err(LayerstackError::invalid_metadata("product id must be non-empty"));
        }
        match (self.meta.category, self.meta.ac_form_factor) {
            (ProductCategory::Ac, None) => Err(LayerstackError::invalid_metadata(format!(
                "product '{}' is AC but has no acFormFactor",
                self.id
            ))),
            (ProductCategory::LifeAppliance, Some(_)) => {
                Err(LayerstackError::invalid_metadata(format!(
                    "product '{}' is a life appliance but declares acFormFactor",
                    self.id
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Catalog metadata of a decoration overlay.
pub struct DecorationMeta {
    /// Name of the owning project (not its id).
    pub project_name: String,
    /// Decoration role.
    pub category: DecorationCategory,
    /// Variants this overlay applies to.
    #[serde(flatten)]
    pub applicability: Applicability,
    /// Legacy per-asset stacking hint; stacking is resolved from the project template only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One project-scoped overlay image.
pub struct DecorationAsset {
    /// Catalog identifier.
    pub id: String,
    /// Path of the image relative to the storage root.
    pub file_path: String,
    /// Catalog metadata.
    pub meta: DecorationMeta,
}

#[cfg(test)]
#[path = "../../tests/unit/model/asset.rs"]
mod tests;
