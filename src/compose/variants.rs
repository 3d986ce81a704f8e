use crate::model::{asset::ProductAsset, input::CompositionInput};

/// Expand a selection into the variants worth rendering.
///
/// Produces products x energy levels x capacity codes in that nesting order. An empty selection
/// stands for "unspecified" and contributes a single absent value. A selected value is skipped
/// for a product whose declared set is non-empty and does not contain it.
pub fn generate_variants(
    project_name: &str,
    products: &[ProductAsset],
    energy_levels: &[String],
    capacity_codes: &[String],
) -> Vec<CompositionInput> {
    let energy = selection(energy_levels);
    let capacity = selection(capacity_codes);
    let mut out = Vec::new();

    for product in products {
        let applicability = &product.meta.applicability;
        for &e in &energy {
            if !declared(applicability.energy_restriction(), e) {
                continue;
            }
            for &c in &capacity {
                if !declared(applicability.capacity_restriction(), c) {
                    continue;
                }
                out.push(CompositionInput {
                    project_name: project_name.to_string(),
                    product_id: product.id.clone(),
                    energy_level: e.map(str::to_string),
                    capacity_code: c.map(str::to_string),
                    ..CompositionInput::default()
                });
            }
        }
    }
    out
}

fn selection(values: &[String]) -> Vec<Option<&str>> {
    if values.is_empty() {
        vec![None]
    } else {
        values.iter().map(|v| Some(v.as_str())).collect()
    }
}

// Unlike `admits`, an unspecified value passes even a restricted product.
fn declared(restriction: Option<&[String]>, value: Option<&str>) -> bool {
    match (restriction, value) {
        (Some(set), Some(v)) => set.iter().any(|s| s == v),
        _ => true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/variants.rs"]
mod tests;
