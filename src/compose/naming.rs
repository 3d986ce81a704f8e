use crate::model::{asset::ProductAsset, input::CompositionInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Output document format.
pub enum ExportFormat {
    /// Flattened PNG raster.
    Png,
    /// Layered Photoshop document.
    Psd,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Psd => "psd",
        }
    }
}

/// Descriptive name of a variant without extension.
///
/// `<series>-<formFactorLabel>-<energyLevel>-<color>-<capacityCode>` with empty components
/// dropped; a blank series becomes `Unknown`.
pub fn variant_stem(product: &ProductAsset, input: &CompositionInput) -> String {
    let series = match product.meta.series.trim() {
        "" => "Unknown",
        s => s,
    };
    let form_factor = product.meta.ac_form_factor.map(|f| f.label()).unwrap_or("");
    let parts = [
        series,
        form_factor,
        input.energy_level.as_deref().unwrap_or(""),
        product.meta.color.as_str(),
        input.capacity_code.as_deref().unwrap_or(""),
    ];
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("-")
}

/// Output file name of a variant, e.g. `天丽-挂机-B3-皓雪白-26.png`.
pub fn output_file_name(
    product: &ProductAsset,
    input: &CompositionInput,
    format: ExportFormat,
) -> String {
    format!("{}.{}", variant_stem(product, input), format.extension())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/naming.rs"]
mod tests;
