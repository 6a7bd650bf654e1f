use super::*;
use crate::error::FolioError;
use crate::storage::MemoryStore;

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        Some("light".to_owned())
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), FolioError> {
        Err(FolioError::Storage { key: key.to_owned() })
    }
}

#[test]
fn defaults_to_dark_without_stored_value() {
    let store = MemoryStore::new();
    assert_eq!(ThemeController::init(&store).theme(), Theme::Dark);
}

#[test]
fn unknown_stored_value_falls_back_to_dark() {
    assert_eq!(Theme::parse(Some("sepia")), Theme::Dark);
    assert_eq!(Theme::parse(Some("light")), Theme::Light);
    assert_eq!(Theme::parse(Some(" light ")), Theme::Light);
}

#[test]
fn init_reads_persisted_light() {
    let mut store = MemoryStore::new();
    store.set("theme", "light").expect("memory store accepts writes");
    assert_eq!(ThemeController::init(&store).theme(), Theme::Light);
}

#[test]
fn toggle_persists_new_value() {
    let mut store = MemoryStore::new();
    let mut theme = ThemeController::init(&store);
    assert_eq!(theme.toggle(&mut store), Theme::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn double_toggle_returns_to_start_and_store_tracks_each_step() {
    let mut store = MemoryStore::new();
    let mut theme = ThemeController::init(&store);
    let start = theme.theme();
    for _ in 0..2 {
        let now = theme.toggle(&mut store);
        assert_eq!(store.get("theme").as_deref(), Some(now.as_str()));
    }
    assert_eq!(theme.theme(), start);
}

#[test]
fn rejected_write_still_flips_session_theme() {
    let mut store = ReadOnlyStore;
    let mut theme = ThemeController::init(&store);
    assert_eq!(theme.theme(), Theme::Light);
    assert_eq!(theme.toggle(&mut store), Theme::Dark);
}

#[test]
fn light_view_shows_moon_icon_and_body_class() {
    let view = Theme::Light.view();
    assert_eq!(view.data_theme, "light");
    assert!(view.light_class);
    assert_eq!((view.icon_add, view.icon_remove), ("fa-moon", "fa-sun"));
}

#[test]
fn dark_view_shows_sun_icon() {
    let view = Theme::Dark.view();
    assert_eq!(view.data_theme, "dark");
    assert!(!view.light_class);
    assert_eq!((view.icon_add, view.icon_remove), ("fa-sun", "fa-moon"));
}
