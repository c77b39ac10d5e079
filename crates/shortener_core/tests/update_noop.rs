use shortener_core::{update, AppState, Msg};

#[test]
fn mounted_on_shell_is_noop() {
    let state = AppState::for_path("/");
    let (mut next, effects) = update(state.clone(), Msg::Mounted);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn navigation_failure_on_shell_is_noop() {
    let state = AppState::for_path("/");
    let (mut next, effects) = update(state.clone(), Msg::NavigationFailed);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
