//! End-to-end registry behavior: register, press keys, observe actions.

use shortkey_core::{
    KeyPress, Modifiers, Platform, Shortcut, ShortcutGroup, ShortcutManager, handle_key_event,
};
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let hits = Rc::new(Cell::new(0));
    let handle = Rc::clone(&hits);
    (hits, move || handle.set(handle.get() + 1))
}

#[test]
fn test_first_registration_wins() {
    let mut manager = ShortcutManager::new(Platform::Other);
    let (first_hits, first) = counter();
    let (second_hits, second) = counter();

    manager
        .add_independent_shortcut(Shortcut::new("TestShortcut1", "KeyA", Modifiers::CTRL, first))
        .unwrap();
    let _ = manager
        .add_independent_shortcut(Shortcut::new("TestShortcut2", "KeyA", Modifiers::CTRL, second));

    let mut press = KeyPress::new("KeyA").ctrl(true);
    handle_key_event(&mut manager, &mut press);

    assert_eq!(first_hits.get(), 1);
    assert_eq!(second_hits.get(), 0);
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_ctrl_shortcut_with_prevent_default_on_other_platform() {
    let mut manager = ShortcutManager::new(Platform::Other);
    let (hits, action) = counter();
    manager
        .add_independent_shortcut(
            Shortcut::new("Select All", "KeyA", Modifiers::CTRL, action).with_prevent_default(true),
        )
        .unwrap();

    let mut press = KeyPress::new("KeyA").ctrl(true);
    let fired = handle_key_event(&mut manager, &mut press);

    assert!(fired.is_some());
    assert_eq!(hits.get(), 1);
    assert!(press.default_prevented());
}

#[test]
fn test_meta_press_does_not_fire_ctrl_shortcut_off_mac() {
    let mut manager = ShortcutManager::new(Platform::Other);
    let (hits, action) = counter();
    manager
        .add_independent_shortcut(
            Shortcut::new("Select All", "KeyA", Modifiers::CTRL, action).with_prevent_default(true),
        )
        .unwrap();

    let mut press = KeyPress::new("KeyA").meta(true);
    assert!(handle_key_event(&mut manager, &mut press).is_none());
    assert_eq!(hits.get(), 0);
    assert!(!press.default_prevented());
}

#[test]
fn test_ctrl_shortcut_fires_on_command_press_on_mac() {
    let mut manager = ShortcutManager::new(Platform::MacOs);
    let (hits, action) = counter();
    manager
        .add_independent_shortcut(Shortcut::new("Bold", "KeyB", Modifiers::CTRL, action))
        .unwrap();

    let mut ctrl_press = KeyPress::new("KeyB").ctrl(true);
    handle_key_event(&mut manager, &mut ctrl_press);
    assert_eq!(hits.get(), 0);

    let mut cmd_press = KeyPress::new("KeyB").meta(true);
    handle_key_event(&mut manager, &mut cmd_press);
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_meta_shortcut_fires_on_ctrl_press_off_mac() {
    let mut manager = ShortcutManager::new(Platform::Other);
    let (hits, action) = counter();
    manager
        .add_independent_shortcut(Shortcut::new("Bold", "KeyB", Modifiers::META, action))
        .unwrap();

    let mut press = KeyPress::new("KeyB").ctrl(true);
    handle_key_event(&mut manager, &mut press);
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_without_prevent_default_event_is_untouched() {
    let mut manager = ShortcutManager::new(Platform::Other);
    let (hits, action) = counter();
    manager
        .add_independent_shortcut(Shortcut::new("Find", "KeyF", Modifiers::CTRL, action))
        .unwrap();

    let mut press = KeyPress::new("KeyF").ctrl(true);
    handle_key_event(&mut manager, &mut press);
    assert_eq!(hits.get(), 1);
    assert!(!press.default_prevented());
}

#[test]
fn test_removed_shortcut_no_longer_fires() {
    let mut manager = ShortcutManager::new(Platform::Other);
    let (hits, action) = counter();
    manager
        .add_independent_shortcut(Shortcut::new("TestShortcut", "KeyA", Modifiers::CTRL, action))
        .unwrap();

    assert_eq!(manager.remove_independent_shortcut("TestShortcut"), 1);
    assert_eq!(manager.remove_independent_shortcut("TestShortcut"), 0);

    let mut press = KeyPress::new("KeyA").ctrl(true);
    assert!(handle_key_event(&mut manager, &mut press).is_none());
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_group_shortcut_fires_and_can_be_removed() {
    let mut manager = ShortcutManager::new(Platform::Other);
    let (hits, action) = counter();
    let rejected = manager.add_group(ShortcutGroup::new(
        "TestGroup",
        vec![Shortcut::new("TestGroupShortcut", "KeyA", Modifiers::CTRL, action)],
    ));
    assert!(rejected.is_empty());

    let mut press = KeyPress::new("KeyA").ctrl(true);
    handle_key_event(&mut manager, &mut press);
    assert_eq!(hits.get(), 1);

    manager.remove_shortcut_from_group("TestGroup", "TestGroupShortcut");
    let mut press = KeyPress::new("KeyA").ctrl(true);
    handle_key_event(&mut manager, &mut press);
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_wildcard_shortcut_fires_with_any_modifiers() {
    let mut manager = ShortcutManager::new(Platform::Other);
    let (hits, action) = counter();
    manager
        .add_independent_shortcut(Shortcut::new("Help", "F1", Modifiers::empty(), action))
        .unwrap();

    for press in [
        KeyPress::new("F1"),
        KeyPress::new("F1").shift(true),
        KeyPress::new("F1").ctrl(true).alt(true),
    ] {
        let mut press = press;
        handle_key_event(&mut manager, &mut press);
    }
    assert_eq!(hits.get(), 3);
}

#[test]
fn test_fresh_manager_has_no_state() {
    let mut manager = ShortcutManager::new(Platform::Other);
    manager
        .add_independent_shortcut(Shortcut::new("Old", "KeyO", Modifiers::CTRL, || {}))
        .unwrap();

    manager = ShortcutManager::new(Platform::Other);
    assert!(manager.is_empty());
    assert!(manager.groups().is_empty());
}
