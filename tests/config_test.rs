//! Integration tests for shell configuration
//!
//! Verifies the shipped defaults and YAML deserialization of the
//! booking shell's configuration record.

use bookform::{Config, RemoteImagePattern};

#[test]
fn test_default_config_carries_shipped_allowlist() {
    let config = Config::default();

    assert!(config.strict_mode);
    assert_eq!(
        config.remote_images,
        vec![RemoteImagePattern {
            protocol: "https".to_string(),
            hostname: "images.unsplash.com".to_string(),
            port: None,
            path_prefix: None,
        }]
    );
}

#[test]
fn test_config_deserializes_from_yaml() {
    let yaml = r#"
remote_images:
  - protocol: https
    hostname: cdn.example.com
    path_prefix: /booking
strict_mode: false
"#;

    let config: Config = serde_yaml::from_str(yaml).unwrap();

    assert!(!config.strict_mode);
    assert_eq!(config.remote_images.len(), 1);
    assert_eq!(config.remote_images[0].hostname, "cdn.example.com");
    assert_eq!(
        config.remote_images[0].path_prefix.as_deref(),
        Some("/booking")
    );
    assert_eq!(config.remote_images[0].port, None);
}

#[test]
fn test_config_missing_fields_fall_back_to_defaults() {
    let config: Config = serde_yaml::from_str("{}").unwrap();

    assert!(config.strict_mode);
    assert!(config.remote_images.is_empty());
}

#[test]
fn test_config_path_points_at_yaml_file() {
    let path = Config::config_path().unwrap();
    assert!(path.ends_with("config.yaml"));
}
