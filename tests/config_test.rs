use std::sync::Mutex;

use garaged::config::{AppConfig, LogFormat};
use garaged::storage::StorageConfig;

/// Serializes tests that touch process environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn defaults_match_the_documented_surface() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.storage.data_dir, "./data");
    assert_eq!(config.storage.state_file, "database.txt");
    assert_eq!(config.auth.secret, "secret");
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn blank_logging_level_falls_back_to_info() {
    let _guard = ENV_LOCK.lock().unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"\"\n").unwrap();

    std::env::set_var("GARAGED_CONFIG", &path);
    let config = AppConfig::load().expect("blank level should load");
    std::env::remove_var("GARAGED_CONFIG");

    assert_eq!(config.logging.level, "info");
}

#[test]
fn env_overrides_reach_underscored_keys() {
    let _guard = ENV_LOCK.lock().unwrap();

    std::env::set_var("GARAGED_STORAGE__STATE_FILE", "door.txt");
    std::env::set_var("GARAGED_AUTH__SECRET", "hunter2");
    let config = AppConfig::load().expect("env overrides should load");
    std::env::remove_var("GARAGED_STORAGE__STATE_FILE");
    std::env::remove_var("GARAGED_AUTH__SECRET");

    assert_eq!(config.storage.state_file, "door.txt");
    assert_eq!(config.auth.secret, "hunter2");
}

#[test]
fn storage_config_points_at_the_data_dir() {
    let mut config = AppConfig::default();
    config.storage.data_dir = "/var/lib/garaged".to_string();

    let StorageConfig::Local { root_path } = config.storage_config();
    assert_eq!(root_path, "/var/lib/garaged");
}
