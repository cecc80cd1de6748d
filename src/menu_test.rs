use super::*;

#[test]
fn starts_closed() {
    let menu = MenuState::default();
    assert!(!menu.is_open());
    assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn toggle_opens_and_closes() {
    let mut menu = MenuState::default();
    assert!(menu.toggle());
    assert_eq!(menu.aria_expanded(), "true");
    assert!(!menu.toggle());
}

#[test]
fn close_reports_change_only_when_open() {
    let mut menu = MenuState::default();
    assert!(!menu.close());
    menu.toggle();
    assert!(menu.close());
    assert!(!menu.is_open());
}
