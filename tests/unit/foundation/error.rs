use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PaintError::missing_capability("x")
            .to_string()
            .contains("missing capability:")
    );
    assert!(
        PaintError::malformed("x")
            .to_string()
            .contains("malformed paint:")
    );
    assert!(
        PaintError::delegated_render("x")
            .to_string()
            .contains("delegated render failed:")
    );
    assert!(
        PaintError::encode("x")
            .to_string()
            .contains("image encoding error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PaintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
