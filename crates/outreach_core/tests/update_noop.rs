use outreach_core::{update, Msg, PanelState};

#[test]
fn tick_leaves_state_untouched() {
    let state = PanelState::new();
    let (mut next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
