use folio::constants::{FONT_SCALE_MAX, FONT_SCALE_MIN};
use folio::settings::{clamp_font_scale, Settings, SettingsStore, Theme};

#[test]
fn test_defaults_are_not_accessibility_mode() {
    let settings = Settings::default();
    assert_eq!(settings.theme, Theme::Dark);
    assert!(!settings.reduced_motion);
    assert!(!settings.is_accessibility_mode());
}

#[test]
fn test_any_deviation_is_accessibility_mode() {
    let light = Settings {
        theme: Theme::Light,
        ..Settings::default()
    };
    assert!(light.is_accessibility_mode());

    let larger = Settings {
        font_scale: 1.2,
        ..Settings::default()
    };
    assert!(larger.is_accessibility_mode());
}

#[test]
fn test_font_scale_is_clamped() {
    assert_eq!(clamp_font_scale(3.0), FONT_SCALE_MAX);
    assert_eq!(clamp_font_scale(0.1), FONT_SCALE_MIN);
    assert_eq!(clamp_font_scale(f32::NAN), 1.0);

    let store = SettingsStore::in_memory(Settings::default());
    for _ in 0..20 {
        store.increase_font_scale();
    }
    assert_eq!(store.current().font_scale, FONT_SCALE_MAX);
    for _ in 0..20 {
        store.decrease_font_scale();
    }
    assert_eq!(store.current().font_scale, FONT_SCALE_MIN);
}

#[tokio::test]
async fn test_subscribers_see_changes() {
    let store = SettingsStore::in_memory(Settings::default());
    let mut rx = store.subscribe();
    assert!(!rx.has_changed().unwrap());

    store.toggle_theme();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().theme, Theme::Light);

    store.toggle_reduced_motion();
    rx.changed().await.unwrap();
    assert!(rx.borrow().reduced_motion);
}

#[test]
fn test_settings_persist_across_stores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio").join("settings.json");

    let store = SettingsStore::load_from(&path);
    assert_eq!(store.current(), Settings::default());
    store.toggle_theme();
    store.set_font_scale(1.2);

    let reloaded = SettingsStore::load_from(&path);
    assert_eq!(reloaded.current().theme, Theme::Light);
    assert!((reloaded.current().font_scale - 1.2).abs() < 1e-6);
    assert_eq!(reloaded.path(), Some(path.as_path()));
}

#[test]
fn test_unreadable_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = SettingsStore::load_from(&path);
    assert_eq!(store.current(), Settings::default());
}

#[test]
fn test_in_memory_store_never_writes() {
    let store = SettingsStore::in_memory(Settings::default());
    store.toggle_theme();
    assert!(store.path().is_none());
    assert_eq!(store.current().theme, Theme::Light);
}
