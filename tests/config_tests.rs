// Config loading and validation tests

use statusboard::config::{AppConfig, SourceKind};
use statusboard::formatter::ArgumentOrder;
use statusboard::session::DEFAULT_MAX_SESSIONS;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[source]
kind = "http"
base_url = "http://localhost:8983/solr"
timeout_ms = 3000

[session]
default_order = "Sorted"
"#;

const LOCAL_CONFIG: &str = r#"
[server]
port = 8081
host = "127.0.0.1"

[source]
kind = "local"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.source.kind, SourceKind::Http);
    assert_eq!(
        config.source.base_url.as_deref(),
        Some("http://localhost:8983/solr")
    );
    assert_eq!(config.source.timeout_ms, 3000);
    assert_eq!(config.session.default_order, ArgumentOrder::Sorted);
}

#[test]
fn test_config_defaults_when_omitted() {
    let config = AppConfig::load_from_str(LOCAL_CONFIG).expect("valid");
    assert_eq!(config.source.kind, SourceKind::Local);
    assert_eq!(config.source.base_url, None);
    assert_eq!(config.source.timeout_ms, 5000);
    assert_eq!(config.session.default_order, ArgumentOrder::Unsorted);
    assert_eq!(config.session.max_sessions, DEFAULT_MAX_SESSIONS);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_timeout_zero() {
    let bad = VALID_CONFIG.replace("timeout_ms = 3000", "timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("timeout_ms"));
}

#[test]
fn test_config_validation_requires_base_url_for_http() {
    let bad = VALID_CONFIG.replace("base_url = \"http://localhost:8983/solr\"\n", "");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("source.base_url"));

    let bad = VALID_CONFIG.replace("http://localhost:8983/solr", "localhost:8983");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("source.base_url"));
}

#[test]
fn test_config_rejects_unknown_source_kind() {
    let bad = VALID_CONFIG.replace("kind = \"http\"", "kind = \"ftp\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_rejects_unknown_default_order() {
    let bad = VALID_CONFIG.replace("default_order = \"Sorted\"", "default_order = \"sideways\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_zero_max_sessions() {
    let bad = VALID_CONFIG.replace(
        "default_order = \"Sorted\"",
        "default_order = \"Sorted\"\nmax_sessions = 0",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("session.max_sessions"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.source.kind, SourceKind::Http);
}
