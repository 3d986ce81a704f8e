use super::*;

#[test]
fn fnv_fields_do_not_alias() {
    let mut a = Fnv1a64::new_default();
    a.write_field("ab");
    a.write_field("c");
    let mut b = Fnv1a64::new_default();
    b.write_field("a");
    b.write_field("bc");
    assert_ne!(a.finish(), b.finish());

    let mut c = Fnv1a64::new_default();
    c.write_bytes(b"layerstack");
    let mut d = Fnv1a64::new_default();
    d.write_u8(b'l');
    d.write_bytes(b"ayerstack");
    assert_eq!(c.finish(), d.finish());
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let mut px = vec![100u8, 50, 200, 128, 9, 9, 9, 0, 1, 2, 3, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[1, 2, 3, 255]);
    unpremultiply_rgba8_in_place(&mut px);
    for (got, want) in px[..3].iter().zip([100u8, 50, 200]) {
        assert!((i16::from(*got) - i16::from(want)).abs() <= 1);
    }
}

#[test]
fn over_handles_transparent_and_opaque_sources() {
    let dst = [10, 20, 30, 255];
    assert_eq!(premul_over_px(dst, [0, 0, 0, 0]), dst);
    assert_eq!(premul_over_px(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);
    let half = premul_over_px([0, 0, 0, 0], [64, 0, 0, 128]);
    assert_eq!(half, [64, 0, 0, 128]);
}
