use fss_core::{update, AppState, MenuState, Msg};

#[test]
fn idle_messages_leave_state_clean() {
    let state = AppState::new();

    let (next, effects) = update(state.clone(), Msg::NoOp);
    assert_eq!(state, next);
    assert!(effects.is_empty());

    let (mut next, effects) = update(next, Msg::MenuLeft);
    assert_eq!(next.menu(), MenuState::Hidden);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
