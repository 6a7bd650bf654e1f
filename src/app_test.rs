use super::*;
use crate::language::resolve_language;

#[test]
fn tab_and_escape_map_without_modifiers() {
    assert_eq!(key_action("Tab", false), Some(KeyAction::KeyboardNavigation));
    assert_eq!(key_action("Escape", false), Some(KeyAction::CloseMenu));
    assert_eq!(key_action("Escape", true), Some(KeyAction::CloseMenu));
}

#[test]
fn slash_needs_ctrl() {
    assert_eq!(key_action("/", true), Some(KeyAction::ShowShortcuts));
    assert_eq!(key_action("/", false), None);
    assert_eq!(key_action("a", true), None);
}

#[test]
fn viewport_unit_is_one_percent_of_height() {
    assert_eq!(viewport_unit(800.0), "8px");
    assert_eq!(viewport_unit(0.0), "0px");
}

#[test]
fn page_copy_is_in_the_fallback_language() {
    assert_eq!(resolve_language(None, None), "zh");
    assert_eq!(SKIP_LINK_TEXT, "跳過導航");
    assert!(SHORTCUTS_MESSAGE.contains("Escape") && SHORTCUTS_MESSAGE.contains("Ctrl+/"));
    assert!(STARTUP_FAILED_MESSAGE.contains("重新整理"));
}
