use super::*;

#[test]
fn layer_order_entries_use_type_key() {
    let entry: LayerOrderConfig = serde_json::from_str(
        r#"{"type":"decoration","decorationCategory":"OTHER","decorationId":"d7","zIndex":130}"#,
    )
    .unwrap();
    assert_eq!(
        entry,
        LayerOrderConfig::for_decoration_id(DecorationCategory::Other, "d7", 130)
    );

    let v = serde_json::to_value(LayerOrderConfig::for_type(LayerType::Product, 50)).unwrap();
    assert_eq!(v, serde_json::json!({"type": "product", "zIndex": 50}));
}

#[test]
fn project_parses_with_template_and_price_defaults() {
    let p: Project = serde_json::from_str(
        r##"{
            "id": "1700000000000",
            "projectName": "gree_2025_q1",
            "displayName": "Gree Q1",
            "canvasWidth": 800,
            "canvasHeight": 800,
            "createdAt": "2025-01-01T00:00:00.000Z",
            "template": {
                "layerOrder": [{"type": "background", "zIndex": 0}],
                "defaultPriceConfig": {
                    "originalPrice": {"x": 10, "y": 700, "fontFamily": "Noto Sans", "fontSize": 32,
                                      "color": "#999999", "projectId": "1700000000000"},
                    "promoPrice": {"x": 400, "y": 680, "fontFamily": "Noto Sans", "fontSize": 56,
                                   "color": "#e60012", "projectId": "1700000000000", "bold": true}
                }
            }
        }"##,
    )
    .unwrap();
    let template = p.template.as_ref().unwrap();
    let prices = template.default_price_config.as_ref().unwrap();
    assert!(!prices.original_price.bold);
    assert!(prices.promo_price.bold);
    assert_eq!(prices.promo_price.position(), Position::new(400.0, 680.0));
    assert_eq!(p.canvas().unwrap(), Canvas::new(800, 800).unwrap());
}

#[test]
fn default_z_per_type() {
    let zs: Vec<i32> = LayerType::ALL.iter().map(|t| t.default_z()).collect();
    assert_eq!(zs, vec![0, 50, 100, 200]);
    assert_eq!(
        LayerType::for_decoration(DecorationCategory::Background),
        LayerType::Background
    );
    assert_eq!(
        LayerType::for_decoration(DecorationCategory::BrandLogo),
        LayerType::Decoration
    );
}

#[test]
fn zero_sized_project_canvas_is_rejected() {
    let p = Project {
        id: "x".to_string(),
        project_name: "x".to_string(),
        display_name: String::new(),
        canvas_width: 0,
        canvas_height: 100,
        created_at: String::new(),
        template: None,
    };
    assert!(p.canvas().is_err());
}
