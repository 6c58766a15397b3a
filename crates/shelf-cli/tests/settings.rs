//! Settings file handling.

use shelf_cli::settings::Settings;
use tempfile::tempdir;

#[test]
fn test_missing_file_is_default() {
    let dir = tempdir().expect("tempdir");
    let settings = Settings::load_from(&dir.path().join("absent.toml")).expect("load");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_saved_settings_load_back() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.controller.debounce_ms = 150;
    settings.catalog.base_url = "http://catalog.test:9000".to_string();
    settings.catalog.token_env = Some("SHELF_TOKEN".to_string());
    settings.save_to(&path).expect("save");

    assert_eq!(Settings::load_from(&path).expect("load"), settings);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[controller]\ndebounce_ms = \"soon\"\n").expect("write");

    let err = Settings::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse"));
}

#[test]
fn test_default_settings_shape() {
    insta::assert_json_snapshot!(Settings::default(), @r#"
    {
      "controller": {
        "debounce_ms": 300,
        "page_size": 10
      },
      "catalog": {
        "base_url": "http://localhost:1271",
        "search_path": "/search",
        "timeout_secs": 10
      }
    }
    "#);
}
