use super::*;
use crate::apply::fixture::Harness;

#[test]
fn untouched_state_writes_only_type() {
    let d = PendingGraphicsState::default().to_dict();
    assert_eq!(d.len(), 1);
    assert_eq!(d.get("Type"), Some(&Object::name("ExtGState")));
}

#[test]
fn touched_entries_are_written() {
    let pending = PendingGraphicsState {
        stroke_alpha: Some(0.5),
        fill_alpha: Some(0.25),
        blend_mode: Some(BlendMode::Exclusion),
    };
    let d = pending.to_dict();
    assert_eq!(d.get("CA"), Some(&Object::real(0.5)));
    assert_eq!(d.get("ca"), Some(&Object::real(0.25)));
    assert_eq!(d.get("BM"), Some(&Object::name("Exclusion")));
}

#[test]
fn pending_state_is_created_lazily() {
    let mut h = Harness::default();
    h.with_state(Affine::IDENTITY, |state| {
        assert!(state.pending().is_none());
        state.pending_mut().fill_alpha = Some(0.5);
        assert_eq!(state.pending().and_then(|p| p.fill_alpha), Some(0.5));
        assert!(state.take_pending().is_some());
        assert!(state.pending().is_none());
    });
}
