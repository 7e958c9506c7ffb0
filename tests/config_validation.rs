//! Integration tests for configuration validation

#![allow(clippy::expect_used)]

use ipref_wire::config::{CodecConfig, LoggingConfig, WireConfig};
use ipref_wire::error::ProtocolError;
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = WireConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert!(config.codec.verify_packet_length);
    assert!(config.codec.allow_mixed_gateway_family);
}

#[test]
fn test_max_packet_len_too_small() {
    let config = WireConfig::default_with_overrides(|c| c.codec.max_packet_len = 4);
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("too small")));
}

#[test]
fn test_max_packet_len_too_large() {
    let config = WireConfig::default_with_overrides(|c| c.codec.max_packet_len = 70_000);
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("too large")));
    assert!(config.validate_strict().is_err());
}

#[test]
fn test_empty_app_name() {
    let mut config = WireConfig::default();
    config.logging.app_name = String::new();
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_long_app_name() {
    let logging = LoggingConfig {
        app_name: "x".repeat(65),
        ..LoggingConfig::default()
    };
    assert_eq!(logging.validate().len(), 1);
}

#[test]
fn test_toml_roundtrip() {
    let config = WireConfig::default_with_overrides(|c| {
        c.codec.verify_packet_length = false;
        c.logging.log_level = Level::DEBUG;
    });
    let text = toml::to_string_pretty(&config).expect("serialize");
    assert!(text.contains("log_level = \"debug\""));

    let back = WireConfig::from_toml(&text).expect("parse");
    assert!(!back.codec.verify_packet_length);
    assert_eq!(back.logging.log_level, Level::DEBUG);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let text = r#"
[codec]
verify_packet_length = true
allow_mixed_gateway_family = false
max_packet_len = 1500
"#;
    let config = WireConfig::from_toml(text).expect("parse");
    assert!(!config.codec.allow_mixed_gateway_family);
    assert_eq!(config.codec.max_packet_len, 1500);
    assert_eq!(config.logging.app_name, "ipref-wire");
}

#[test]
fn test_invalid_log_level() {
    let text = r#"
[logging]
app_name = "x"
log_level = "loud"
json_format = false
"#;
    assert!(WireConfig::from_toml(text).is_err());
}

#[test]
fn test_example_config_parses() {
    let example = WireConfig::example_config();
    let parsed = WireConfig::from_toml(&example).expect("example config parses");
    assert_eq!(
        parsed.codec.max_packet_len,
        CodecConfig::default().max_packet_len
    );
}

#[test]
fn test_save_and_load_file() {
    let path = std::env::temp_dir().join(format!("ipref-wire-{}.toml", std::process::id()));
    let config = WireConfig::default_with_overrides(|c| c.codec.max_packet_len = 9000);
    config.save_to_file(&path).expect("save");
    let loaded = WireConfig::from_file(&path).expect("load");
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded.codec.max_packet_len, 9000);
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        WireConfig::from_file("/nonexistent/ipref-wire.toml"),
        Err(ProtocolError::Io(_))
    ));
}

#[test]
fn test_save_to_missing_dir() {
    let err = WireConfig::default()
        .save_to_file("/nonexistent/dir/ipref-wire.toml")
        .expect_err("write into a missing directory");
    assert!(matches!(err, ProtocolError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}
