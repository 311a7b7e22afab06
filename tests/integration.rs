// SPDX-License-Identifier: MPL-2.0
use chat_lens::app::config::{self, Config, MAX_COLUMNS, MIN_THUMBNAIL_SIZE};
use chat_lens::i18n::fluent::I18n;
use chat_lens::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("password-title"), "Change Password");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-title"), "Tous les médias");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.tr("gallery-title"), "All Media");
}

#[test]
fn settings_file_round_trips_every_section() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.gallery.columns = 3;
    config.storage.media_dir = Some(dir.path().join("media-root"));
    config.auth.base_url = Some("https://accounts.example.test".to_string());
    config.auth.timeout_secs = 30;
    config::save_to_path(&config, &path).unwrap();

    assert_eq!(config::load_from_path(&path).unwrap(), config);
}

#[test]
fn out_of_range_gallery_values_are_clamped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[gallery]\ncolumns = 40\nthumbnail_size = 1\n").unwrap();

    let config = config::load_from_path(&path).unwrap();
    assert_eq!(config.gallery.columns(), MAX_COLUMNS);
    assert_eq!(config.gallery.thumbnail_size(), MIN_THUMBNAIL_SIZE);
}

#[test]
fn malformed_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("settings.toml"), "[gallery\ncolumns = ").unwrap();

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_ERROR_KEY));
}

#[test]
fn every_locale_translates_the_warning_key() {
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        assert!(!i18n.tr(config::LOAD_ERROR_KEY).starts_with("MISSING"));
    }
}
