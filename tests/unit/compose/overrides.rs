use super::*;
use crate::{
    compose::layer::LayerContent,
    model::{
        instance::{DecorationAdjustment, PriceOverride},
        project::{DefaultPriceConfig, LayerOrderConfig},
    },
};

fn instance_with(
    adjustments: Vec<DecorationAdjustment>,
    price: Option<PriceOverride>,
) -> InstanceConfig {
    let mut i = InstanceConfig::new("proj-id", "p", Some("B1".to_string()), None);
    i.decoration_adjustments = Some(adjustments);
    i.price_override = price;
    i
}

fn style(x: f64, y: f64) -> PriceLayerConfig {
    PriceLayerConfig {
        x,
        y,
        font_family: "Noto Sans".to_string(),
        font_size: 40.0,
        color: "#e60012".to_string(),
        project_id: "proj-id".to_string(),
        bold: true,
    }
}

fn template_with_prices() -> ProjectTemplate {
    ProjectTemplate {
        layer_order: vec![LayerOrderConfig::for_type(LayerType::Price, 250)],
        default_price_config: Some(DefaultPriceConfig {
            original_price: style(10.0, 700.0),
            promo_price: style(400.0, 680.0),
        }),
    }
}

fn text_of(layer: &LayerItem) -> &str {
    match &layer.content {
        LayerContent::Text { text_content, .. } => text_content,
        LayerContent::Image { .. } => panic!("expected text layer"),
    }
}

#[test]
fn adjustments_replace_decoration_positions() {
    let layers = vec![
        LayerItem::product("p", "p.png", 50),
        LayerItem::decoration(LayerType::Decoration, "d1", "d1.png", 100, Position::ZERO),
        LayerItem::decoration(LayerType::Background, "bg", "bg.png", 0, Position::ZERO),
    ];
    let instance = instance_with(
        vec![
            DecorationAdjustment {
                decoration_id: "d1".to_string(),
                offset_x: 10.0,
                offset_y: -5.0,
            },
            DecorationAdjustment {
                decoration_id: "p".to_string(),
                offset_x: 99.0,
                offset_y: 99.0,
            },
        ],
        None,
    );

    let out = apply_overrides(layers, Some(&instance));
    assert_eq!(out[0].position, Position::ZERO, "product is never adjustable");
    assert_eq!(out[1].position, Position::new(10.0, -5.0));
    assert_eq!(out[2].position, Position::ZERO);
}

#[test]
fn adjustments_are_absolute_not_additive() {
    let layers = vec![LayerItem::decoration(
        LayerType::Decoration,
        "d1",
        "d1.png",
        100,
        Position::new(3.0, 3.0),
    )];
    let instance = instance_with(
        vec![DecorationAdjustment {
            decoration_id: "d1".to_string(),
            offset_x: 10.0,
            offset_y: -5.0,
        }],
        None,
    );
    let out = apply_overrides(layers, Some(&instance));
    assert_eq!(out[0].position, Position::new(10.0, -5.0));
}

#[test]
fn no_literal_and_no_template_suppresses_prices() {
    let input = CompositionInput::new("proj", "p");
    assert!(price_layers(&input, None, None).is_empty());
}

#[test]
fn override_alone_does_not_trigger_a_price_layer() {
    let input = CompositionInput::new("proj", "p");
    let instance = instance_with(
        vec![],
        Some(PriceOverride {
            promo: "¥999".to_string(),
            ..PriceOverride::default()
        }),
    );
    assert!(price_layers(&input, None, Some(&instance)).is_empty());
}

#[test]
fn override_replaces_text_of_a_template_backed_slot() {
    let input = CompositionInput::new("proj", "p");
    let template = template_with_prices();
    let instance = instance_with(
        vec![],
        Some(PriceOverride {
            promo: "¥999".to_string(),
            promo_position: Some(Position::new(420.0, 690.0)),
            ..PriceOverride::default()
        }),
    );

    let out = price_layers(&input, Some(&template), Some(&instance));
    assert_eq!(out.len(), 1, "original slot has no text to draw");
    assert_eq!(out[0].id, "price-promo");
    assert_eq!(text_of(&out[0]), "¥999");
    assert_eq!(out[0].position, Position::new(420.0, 690.0));
    assert_eq!(out[0].z_index, 250);
}

#[test]
fn literal_text_without_template_uses_fallback_style() {
    let input = CompositionInput::new("proj", "p").with_prices(Some("¥3999".to_string()), None);
    let out = price_layers(&input, None, None);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "price-original");
    assert_eq!(out[0].z_index, 200);
    assert_eq!(out[0].position, Position::ZERO);
    match &out[0].content {
        LayerContent::Text { text_style, .. } => {
            assert_eq!(text_style, &PriceLayerConfig::fallback())
        }
        LayerContent::Image { .. } => panic!("expected text layer"),
    }
}

#[test]
fn literal_text_uses_template_style_and_position() {
    let input = CompositionInput::new("proj", "p")
        .with_prices(Some("¥3999".to_string()), Some("¥2999".to_string()));
    let out = price_layers(&input, Some(&template_with_prices()), None);
    let ids: Vec<&str> = out.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["price-original", "price-promo"]);
    assert_eq!(out[0].position, Position::new(10.0, 700.0));
    assert_eq!(text_of(&out[1]), "¥2999");
}

#[test]
fn empty_override_text_falls_back_to_literal() {
    let input = CompositionInput::new("proj", "p").with_prices(None, Some("¥2999".to_string()));
    let instance = instance_with(vec![], Some(PriceOverride::default()));
    let out = price_layers(&input, None, Some(&instance));
    assert_eq!(out.len(), 1);
    assert_eq!(text_of(&out[0]), "¥2999");
}
