use super::*;

#[test]
fn rgb_mapper_ignores_alpha() {
    let m = DeviceRgbColorMapper;
    let a = m.map_color(Rgba8::new(255, 0, 51, 10));
    let b = m.map_color(Rgba8::opaque(255, 0, 51));
    assert_eq!(a, b);
    assert_eq!(a.space(), Some(ColorSpace::DeviceRgb));
    assert_eq!(a.components(), &[1.0, 0.0, 0.2]);
}

#[test]
fn cmyk_mapper_extracts_black() {
    let m = DeviceCmykColorMapper;
    assert_eq!(m.map_color(Rgba8::BLACK).components(), &[0.0, 0.0, 0.0, 1.0]);
    assert_eq!(m.map_color(Rgba8::WHITE).components(), &[0.0, 0.0, 0.0, 0.0]);
    assert_eq!(
        m.map_color(Rgba8::opaque(255, 0, 0)).components(),
        &[0.0, 1.0, 1.0, 0.0]
    );
}
