use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotifyState::default();
    let first = state.push(Level::Error, "a".to_owned());
    let second = state.push(Level::Success, "b".to_owned());
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = NotifyState::default();
    let first = state.push(Level::Error, "a".to_owned());
    let second = state.push(Level::Error, "b".to_owned());
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = NotifyState::default();
    state.push(Level::Success, "a".to_owned());
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NotifyState::default();
    let first = state.push(Level::Error, "a".to_owned());
    state.dismiss(first);
    let second = state.push(Level::Error, "b".to_owned());
    assert_ne!(first, second);
}
