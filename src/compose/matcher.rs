use crate::model::{
    asset::{DecorationAsset, ProductAsset, ProductCategory, admits},
    input::CompositionInput,
};

/// Select the decorations eligible for one variant, preserving catalog order.
///
/// Rules per candidate:
/// 1. the decoration's project name must equal `input.project_name`;
/// 2. for life appliances, any energy or capacity restriction rejects the decoration;
/// 3. for air conditioners, each non-empty restriction set must contain the variant's value
///    (an absent value fails a non-empty set).
///
/// Decoration category never gates eligibility. An empty result is a valid outcome.
pub fn match_decorations<'a>(
    product: &ProductAsset,
    decorations: &'a [DecorationAsset],
    input: &CompositionInput,
) -> Vec<&'a DecorationAsset> {
    decorations
        .iter()
        .filter(|d| is_eligible(product, d, input))
        .collect()
}

/// Eligibility of a single decoration; see [`match_decorations`].
pub fn is_eligible(
    product: &ProductAsset,
    decoration: &DecorationAsset,
    input: &CompositionInput,
) -> bool {
    if decoration.meta.project_name != input.project_name {
        return false;
    }

    let applicability = &decoration.meta.applicability;
    match product.meta.category {
        ProductCategory::LifeAppliance => !applicability.is_restricted(),
        ProductCategory::Ac => {
            admits(
                applicability.energy_restriction(),
                input.energy_level.as_deref(),
            ) && admits(
                applicability.capacity_restriction(),
                input.capacity_code.as_deref(),
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/matcher.rs"]
mod tests;
