//! Opening and closing the modal.

use crate::common::TestHost;
use docsift::{Effect, IndexStatus, KeyInput, ModalState};

#[test]
fn test_ctrl_k_opens() {
    let mut host = TestHost::new();
    host.shortcut();

    assert!(host.visible);
    assert_eq!(host.controller.modal_state(), ModalState::Open);
    assert_eq!(host.scroll_lock_depth(), 1);
    assert_eq!(host.prevented, 1);
    assert_eq!(host.fetches, 1);
    assert_eq!(host.controller.index_status(), IndexStatus::Ready);
}

#[test]
fn test_cmd_k_and_uppercase_open() {
    let mut host = TestHost::new();
    host.key(KeyInput::new("k").with_meta());
    assert!(host.visible);

    let mut host = TestHost::new();
    host.key(KeyInput::new("K").with_ctrl());
    assert!(host.visible);
}

#[test]
fn test_plain_k_does_not_open() {
    let mut host = TestHost::new();
    host.press("k");
    assert!(!host.visible);
    assert_eq!(host.prevented, 0);
    assert_eq!(host.fetches, 0);
}

#[test]
fn test_open_effect_order() {
    let mut host = TestHost::new();
    let effects = host.controller.open();
    assert_eq!(
        effects,
        vec![
            Effect::ShowModal,
            Effect::LockScroll,
            Effect::FocusInput,
            Effect::FetchIndex {
                url: "/index.json".to_string()
            },
        ]
    );
}

#[test]
fn test_open_while_open_only_refocuses() {
    let mut host = TestHost::new();
    host.open();
    let effects = host.controller.open();
    assert_eq!(effects, vec![Effect::FocusInput]);
}

#[test]
fn test_reopen_does_not_refetch() {
    let mut host = TestHost::new();
    host.open();
    host.close();
    host.open();
    host.close();
    host.shortcut();
    assert_eq!(host.fetches, 1);
}

#[test]
fn test_escape_closes_and_clears() {
    let mut host = TestHost::new();
    host.shortcut();
    host.type_query("requests");
    assert!(!host.html.is_empty());

    host.press("Escape");
    assert!(!host.visible);
    assert_eq!(host.input, "");
    assert_eq!(host.html, "");
    assert_eq!(host.scroll_lock_depth(), 0);
    assert_eq!(host.controller.selected_index(), -1);
}

#[test]
fn test_escape_while_closed_is_ignored() {
    let mut host = TestHost::new();
    let before = host.log.len();
    host.press("Escape");
    assert_eq!(host.log.len(), before);
}

#[test]
fn test_backdrop_click_closes() {
    let mut host = TestHost::new();
    host.open();
    host.click_inside();
    assert!(host.visible);

    host.click_backdrop();
    assert!(!host.visible);
    assert_eq!(host.scroll_lock_depth(), 0);
}

#[test]
fn test_reopen_starts_idle() {
    let mut host = TestHost::new();
    host.open();
    host.type_query("requests");
    host.press("ArrowDown");
    host.close();

    host.open();
    assert_eq!(host.html, "");
    assert_eq!(host.controller.results().query(), "");
    assert_eq!(host.controller.selected_index(), -1);
}

#[test]
fn test_typing_while_closed_is_ignored() {
    let mut host = TestHost::new();
    host.type_query("routing");
    assert_eq!(host.html, "");
    assert!(host.controller.results().is_empty());
}
