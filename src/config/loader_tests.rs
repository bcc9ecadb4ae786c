//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// Write `contents` to a uniquely named file in the temp dir.
fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("chatpane_{}_{}", std::process::id(), name));
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_contains_chatpane_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("chatpane") && path_str.ends_with("config.toml"),
        "Path should contain 'chatpane' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_chatpane_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("chatpane.log"),
        "Default log path should end with 'chatpane.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "valid.toml",
        r#"
fixture_path = "/data/chats.json"
seed = 7
user_count = 5
show_search_panel = false
log_file_path = "/tmp/chatpane-test.log"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should parse valid TOML")
        .expect("File exists");

    assert_eq!(config.fixture_path, Some(PathBuf::from("/data/chats.json")));
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.user_count, Some(5));
    assert_eq!(config.show_search_panel, Some(false));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/chatpane-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = write_temp_config("partial.toml", "seed = 9\n");

    let config = load_config_file(&config_path)
        .expect("Should parse partial config")
        .expect("File exists");

    assert_eq!(config.seed, Some(9));
    assert_eq!(config.fixture_path, None);
    assert_eq!(config.show_search_panel, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, reason: _ }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let config_path = write_temp_config("unknown.toml", "theme = \"dark\"\n");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

// ===== Precedence =====

#[test]
#[serial]
fn explicit_path_beats_env_var() {
    let explicit = write_temp_config("explicit.toml", "seed = 1\n");
    let from_env = write_temp_config("from_env.toml", "seed = 2\n");
    env::set_var("CHATPANE_CONFIG", &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("Should load")
        .expect("File exists");
    assert_eq!(config.seed, Some(1));

    env::remove_var("CHATPANE_CONFIG");
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial]
fn env_var_path_is_used_without_explicit_path() {
    let from_env = write_temp_config("env_only.toml", "user_count = 3\n");
    env::set_var("CHATPANE_CONFIG", &from_env);

    let config = load_config_with_precedence(None)
        .expect("Should load")
        .expect("File exists");
    assert_eq!(config.user_count, Some(3));

    env::remove_var("CHATPANE_CONFIG");
    fs::remove_file(from_env).ok();
}

// ===== Merging =====

#[test]
fn merge_without_file_yields_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn defaults_generate_with_fixed_seed() {
    let config = ResolvedConfig::default();
    assert_eq!(config.fixture_path, None);
    assert_eq!(config.seed, DEFAULT_SEED);
    assert_eq!(config.user_count, DEFAULT_USER_COUNT);
    assert!(config.show_search_panel);
}

#[test]
fn merge_overrides_only_present_fields() {
    let file = ConfigFile {
        seed: Some(5),
        show_search_panel: Some(false),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.seed, 5);
    assert!(!resolved.show_search_panel);
    assert_eq!(resolved.user_count, DEFAULT_USER_COUNT);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
#[serial]
fn env_overrides_seed_and_fixtures() {
    env::set_var("CHATPANE_SEED", "99");
    env::set_var("CHATPANE_FIXTURES", "/data/env.json");

    let config = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(config.seed, 99);
    assert_eq!(config.fixture_path, Some(PathBuf::from("/data/env.json")));

    env::remove_var("CHATPANE_SEED");
    env::remove_var("CHATPANE_FIXTURES");
}

#[test]
#[serial]
fn invalid_env_seed_is_ignored() {
    env::set_var("CHATPANE_SEED", "not-a-number");

    let config = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(config.seed, DEFAULT_SEED);

    env::remove_var("CHATPANE_SEED");
}

#[test]
fn cli_overrides_win() {
    let base = ResolvedConfig {
        seed: 5,
        ..ResolvedConfig::default()
    };

    let config = apply_cli_overrides(base, Some(PathBuf::from("cli.json")), Some(6), Some(2));

    assert_eq!(config.fixture_path, Some(PathBuf::from("cli.json")));
    assert_eq!(config.seed, 6);
    assert_eq!(config.user_count, 2);
}

#[test]
fn absent_cli_flags_keep_previous_values() {
    let base = ResolvedConfig {
        seed: 5,
        ..ResolvedConfig::default()
    };

    let config = apply_cli_overrides(base.clone(), None, None, None);
    assert_eq!(config, base);
}
