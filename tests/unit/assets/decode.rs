use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!((decoded.width, decoded.height), (1, 1));
    assert_eq!(
        decoded.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_garbage_is_render_error() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, LayerstackError::Render(_)));
}

#[test]
fn svg_rasterizes_at_intrinsic_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3">
        <rect width="4" height="3" fill="#ff0000"/>
    </svg>"##;
    let img = rasterize_svg(svg).unwrap();
    assert_eq!((img.width, img.height), (4, 3));
    assert_eq!(img.rgba8_premul.len(), 4 * 3 * 4);
    assert_eq!(&img.rgba8_premul[0..4], &[255, 0, 0, 255]);
}

#[test]
fn malformed_svg_is_render_error() {
    assert!(matches!(
        rasterize_svg(b"<svg").unwrap_err(),
        LayerstackError::Render(_)
    ));
}
