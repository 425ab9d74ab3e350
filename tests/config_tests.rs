use bet365_rs::config::{Bet365Config, Config, DEFAULT_BASE_URL};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_new_with_valid_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let config_content = r#"
[bet365]
api_host = "bet365-sports-odds.p.rapidapi.com"
api_key = "test_key"
"#;

    fs::write(&config_path, config_content).unwrap();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = Config::new();

    std::env::set_current_dir(original_dir).unwrap();

    assert!(result.is_ok());
    let config = result.unwrap();
    assert_eq!(config.bet365.api_host, "bet365-sports-odds.p.rapidapi.com");
    assert_eq!(config.bet365.api_key, "test_key");
    assert_eq!(config.bet365.base_url, None);
    assert_eq!(config.bet365.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_config_from_file_with_base_url() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bet365.toml");

    let config_content = r#"
[bet365]
api_host = "localhost"
api_key = "test_key"
base_url = "http://127.0.0.1:8080/"
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.bet365.base_url(), "http://127.0.0.1:8080");
}

#[test]
fn test_config_from_file_with_missing_file() {
    let dir = tempdir().unwrap();

    let result = Config::from_file(dir.path().join("config.toml"));

    assert!(result.is_err());
}

#[test]
fn test_config_from_file_with_invalid_toml() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let invalid_content = r#"
[bet365
api_host = "host"
"#;

    fs::write(&config_path, invalid_content).unwrap();

    assert!(Config::from_file(&config_path).is_err());
}

#[test]
fn test_config_from_file_with_missing_fields() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let incomplete_content = r#"
[bet365]
api_host = "host"
"#;

    fs::write(&config_path, incomplete_content).unwrap();

    assert!(Config::from_file(&config_path).is_err());
}

#[test]
fn test_config_from_env() {
    std::env::set_var("BET365_API_HOST", "env-host");
    std::env::set_var("BET365_API_KEY", "env-key");
    std::env::remove_var("BET365_BASE_URL");

    let config = Config::from_env().unwrap();
    assert_eq!(config.bet365.api_host, "env-host");
    assert_eq!(config.bet365.api_key, "env-key");
    assert_eq!(config.bet365.base_url(), DEFAULT_BASE_URL);

    std::env::remove_var("BET365_API_KEY");
    assert!(Config::from_env().is_err());

    std::env::remove_var("BET365_API_HOST");
}

#[test]
fn test_debug_output_redacts_api_key() {
    let config = Config {
        bet365: Bet365Config::new("host", "super-secret"),
    };

    let debug = format!("{:?}", config);
    assert!(debug.contains("host"));
    assert!(!debug.contains("super-secret"));
}

#[test]
fn test_config_clone() {
    let config = Config {
        bet365: Bet365Config::new("host", "key"),
    };

    let cloned = config.clone();
    assert_eq!(config.bet365.api_host, cloned.bet365.api_host);
    assert_eq!(config.bet365.api_key, cloned.bet365.api_key);
}
