use super::*;
use crate::model::asset::{AcFormFactor, Applicability, ProductCategory, ProductMeta};

fn product(
    series: &str,
    color: &str,
    category: ProductCategory,
    form: Option<AcFormFactor>,
) -> ProductAsset {
    ProductAsset {
        id: "p".to_string(),
        file_path: "p.png".to_string(),
        meta: ProductMeta {
            category,
            ac_form_factor: form,
            series: series.to_string(),
            color: color.to_string(),
            applicability: Applicability::default(),
        },
    }
}

#[test]
fn full_ac_name() {
    let p = product("天丽", "皓雪白", ProductCategory::Ac, Some(AcFormFactor::Wall));
    let input = CompositionInput::new("proj", "p")
        .with_energy_level("B3")
        .with_capacity_code("26");
    assert_eq!(
        output_file_name(&p, &input, ExportFormat::Png),
        "天丽-挂机-B3-皓雪白-26.png"
    );
    assert_eq!(
        output_file_name(&p, &input, ExportFormat::Psd),
        "天丽-挂机-B3-皓雪白-26.psd"
    );
}

#[test]
fn empty_components_are_dropped() {
    let p = product("净化器", "灰", ProductCategory::LifeAppliance, None);
    let input = CompositionInput::new("proj", "p");
    assert_eq!(variant_stem(&p, &input), "净化器-灰");

    let cabinet = product("云颜", "", ProductCategory::Ac, Some(AcFormFactor::Cabinet));
    let input = CompositionInput::new("proj", "p").with_capacity_code("72");
    assert_eq!(variant_stem(&cabinet, &input), "云颜-柜机-72");
}

#[test]
fn blank_series_becomes_unknown() {
    let p = product("", "白", ProductCategory::LifeAppliance, None);
    assert_eq!(
        variant_stem(&p, &CompositionInput::new("proj", "p")),
        "Unknown-白"
    );
}
