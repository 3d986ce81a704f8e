use crate::{foundation::math::Fnv1a64, model::asset::DecorationAsset};

/// Copy every decoration of `source_project` into `target_project`.
///
/// Copies keep file path, category and applicability; each gets an id derived from the
/// original id and the target project, so repeating the copy yields the same ids.
pub fn duplicate_decorations(
    decorations: &[DecorationAsset],
    source_project: &str,
    target_project: &str,
) -> Vec<DecorationAsset> {
    decorations
        .iter()
        .filter(|d| d.meta.project_name == source_project)
        .map(|d| {
            let mut copy = d.clone();
            copy.id = derived_id(&d.id, target_project);
            copy.meta.project_name = target_project.to_string();
            copy
        })
        .collect()
}

fn derived_id(id: &str, target_project: &str) -> String {
    let mut h = Fnv1a64::new_default();
    h.write_field(id);
    h.write_field(target_project);
    format!("{:016x}", h.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/duplicate.rs"]
mod tests;
