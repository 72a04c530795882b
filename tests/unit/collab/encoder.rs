use super::*;

#[test]
fn opaque_bitmap_has_no_soft_mask() {
    let img = RgbaImage::from_raw(2, 1, vec![10, 20, 30, 255, 40, 50, 60, 255]).unwrap();
    let encoded = RawImageEncoder.encode_image(&img).unwrap();
    assert_eq!(encoded.width, 2);
    assert_eq!(encoded.height, 1);
    assert_eq!(encoded.color_space, ColorSpace::DeviceRgb);
    assert_eq!(encoded.samples, vec![10, 20, 30, 40, 50, 60]);
    assert!(encoded.soft_mask.is_none());
}

#[test]
fn translucent_bitmap_carries_alpha_mask() {
    let img = RgbaImage::from_raw(1, 2, vec![0, 0, 0, 128, 255, 255, 255, 255]).unwrap();
    let encoded = RawImageEncoder.encode_image(&img).unwrap();
    let mask = encoded.soft_mask.as_ref().unwrap();
    assert_eq!(mask.color_space, ColorSpace::DeviceGray);
    assert_eq!(mask.samples, vec![128, 255]);
}

#[test]
fn empty_bitmap_is_rejected() {
    let img = RgbaImage::new(0, 4);
    assert!(matches!(
        RawImageEncoder.encode_image(&img),
        Err(PaintError::Encode(_))
    ));
}
