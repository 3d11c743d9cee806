use super::*;
use tempfile::tempdir;

#[test]
fn ensure_settings_file_creates_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.mode, BoardMode::Staged);
    assert_eq!(settings.board.columns, DEFAULT_COLUMNS);
    assert_eq!(settings.board.new_item_name, "New Item");
    assert_eq!(settings.seed(), default_seed());

    std::fs::write(&path, r#"{"mode":"identity"}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap().mode, BoardMode::Identity);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let settings: Settings = serde_json::from_str(
        r##"{
            "board": { "columns": 0 },
            "seed": [ { "name": "Kale", "selected": true } ],
            "theme": { "clicked_bg": "#000000" }
        }"##,
    )
    .unwrap();

    assert_eq!(settings.mode, BoardMode::Staged);
    assert_eq!(settings.board.columns(), 1);
    assert_eq!(settings.board.new_item_name, DEFAULT_NEW_ITEM_NAME);
    assert_eq!(settings.seed(), vec![SeedEntry::new("Kale", false, true)]);
    assert_eq!(settings.theme.clicked_bg.as_deref(), Some("#000000"));
    assert_eq!(settings.theme.clicked_fg, None);
}

#[test]
fn parse_errors_name_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("settings.json"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}

#[test]
fn load_settings_falls_back_on_bad_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "42").unwrap();

    let settings = load_settings(Some(&path));
    assert_eq!(settings.mode, BoardMode::Staged);
    assert!(settings.seed.is_none());
}

#[test]
fn load_settings_reads_explicit_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"mode":"identity","board":{"new_item_name":"Leek"}}"#).unwrap();

    let settings = load_settings(Some(&path));
    assert_eq!(settings.mode, BoardMode::Identity);
    assert_eq!(settings.board.new_item_name, "Leek");
    assert_eq!(settings.board.columns(), DEFAULT_COLUMNS);
}
