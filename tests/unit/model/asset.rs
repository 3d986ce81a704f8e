use super::*;

#[test]
fn product_record_parses_from_camel_case_json() {
    let p: ProductAsset = serde_json::from_str(
        r#"{
            "id": "p1",
            "filePath": "products/tianli_white.png",
            "meta": {
                "category": "AC",
                "acFormFactor": "WALL",
                "series": "天丽",
                "color": "皓雪白",
                "energyLevels": ["B1"],
                "capacityCodes": ["26", "35"]
            }
        }"#,
    )
    .unwrap();
    assert_eq!(p.meta.category, ProductCategory::Ac);
    assert_eq!(p.meta.ac_form_factor, Some(AcFormFactor::Wall));
    assert_eq!(
        p.meta.applicability.capacity_restriction(),
        Some(&["26".to_string(), "35".to_string()][..])
    );
    p.validate().unwrap();

    let back = serde_json::to_value(&p).unwrap();
    assert_eq!(back["meta"]["acFormFactor"], "WALL");
    assert_eq!(back["meta"]["energyLevels"][0], "B1");
}

#[test]
fn decoration_record_parses_without_restrictions() {
    let d: DecorationAsset = serde_json::from_str(
        r#"{"id":"d1","filePath":"decorations/bg.png",
            "meta":{"projectName":"gree_2025_q1","category":"BACKGROUND"}}"#,
    )
    .unwrap();
    assert_eq!(d.meta.category, DecorationCategory::Background);
    assert!(!d.meta.applicability.is_restricted());
    assert_eq!(d.meta.z_index, None);
}

#[test]
fn ac_products_require_form_factor() {
    let mut p = ProductAsset {
        id: "p".to_string(),
        file_path: "p.png".to_string(),
        meta: ProductMeta {
            category: ProductCategory::Ac,
            ac_form_factor: None,
            series: "S".to_string(),
            color: "C".to_string(),
            applicability: Applicability::default(),
        },
    };
    assert!(p.validate().is_err());
    p.meta.category = ProductCategory::LifeAppliance;
    p.validate().unwrap();
    p.meta.ac_form_factor = Some(AcFormFactor::Cabinet);
    assert!(p.validate().is_err());
}

#[test]
fn admits_is_inclusive_by_absence() {
    let set = vec!["B1".to_string()];
    let empty: Vec<String> = Vec::new();
    assert!(admits(None, None));
    assert!(admits(Some(empty.as_slice()), None));
    assert!(admits(Some(empty.as_slice()), Some("B3")));
    assert!(admits(Some(set.as_slice()), Some("B1")));
    assert!(!admits(Some(set.as_slice()), Some("B3")));
    assert!(!admits(Some(set.as_slice()), None));
}

#[test]
fn form_factor_labels() {
    assert_eq!(AcFormFactor::Wall.label(), "挂机");
    assert_eq!(AcFormFactor::Cabinet.label(), "柜机");
}
