use std::{io::Cursor, sync::Arc};

use super::*;
use crate::{
    assets::{fonts::FontBook, source::MemoryAssetSource},
    compose::layer::PriceSlot,
    foundation::core::Position,
    model::project::{LayerType, PriceLayerConfig},
};

fn png(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn loader() -> AssetLoader {
    let mut src = MemoryAssetSource::new();
    src.insert("p.png", png(2, 2, [255, 0, 0, 255])).unwrap();
    src.insert("d.png", png(1, 1, [0, 0, 255, 255])).unwrap();
    AssetLoader::new(Arc::new(src), Arc::new(FontBook::empty()))
}

fn layers() -> Vec<LayerItem> {
    vec![
        LayerItem::product("p", "p.png", 50),
        LayerItem::decoration(
            LayerType::Decoration,
            "d",
            "d.png",
            100,
            Position::new(1.5, 0.5),
        ),
    ]
}

#[test]
fn composites_at_rounded_offsets() {
    let canvas = Canvas::new(4, 4).unwrap();
    let out = render_flat(&layers(), canvas, &mut loader()).unwrap();
    assert_eq!(out.format, ExportFormat::Png);

    let img = image::load_from_memory(&out.bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 4));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(2, 1).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0, 0]);
}

#[test]
fn output_is_byte_identical_across_runs() {
    let canvas = Canvas::new(4, 4).unwrap();
    let a = render_flat(&layers(), canvas, &mut loader()).unwrap();
    let b = render_flat(&layers(), canvas, &mut loader()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_layer_list_is_transparent() {
    let canvas = Canvas::new(2, 3).unwrap();
    let out = render_flat(&[], canvas, &mut loader()).unwrap();
    let img = image::load_from_memory(&out.bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 3));
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn missing_asset_fails_the_render() {
    let canvas = Canvas::new(2, 2).unwrap();
    let layers = vec![LayerItem::product("x", "missing.png", 50)];
    assert!(matches!(
        render_flat(&layers, canvas, &mut loader()).unwrap_err(),
        LayerstackError::NotFound(_)
    ));
}

#[test]
fn text_without_fonts_is_a_render_failure() {
    let canvas = Canvas::new(2, 2).unwrap();
    let layers = vec![LayerItem::price(
        PriceSlot::Promo,
        "¥1".to_string(),
        PriceLayerConfig::fallback(),
        200,
        Position::ZERO,
    )];
    assert!(matches!(
        render_flat(&layers, canvas, &mut loader()).unwrap_err(),
        LayerstackError::Render(_)
    ));
}
