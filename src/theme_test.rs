use super::*;
use crate::host::MemoryStore;

#[test]
fn missing_preference_loads_light() {
    let store = MemoryStore::new();
    assert_eq!(load(&store, "theme"), Theme::Light);
}

#[test]
fn unknown_preference_loads_light() {
    let store = MemoryStore::new();
    store.set("theme", "solarized");
    assert_eq!(load(&store, "theme"), Theme::Light);
}

#[test]
fn save_then_load() {
    let store = MemoryStore::new();
    save(&store, "theme", Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(load(&store, "theme"), Theme::Dark);
}

#[test]
fn toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn label_names_the_other_theme() {
    assert_eq!(Theme::Dark.toggle_label(), "☀️ Light Mode");
    assert_eq!(Theme::Light.toggle_label(), "🌙 Dark Mode");
}
