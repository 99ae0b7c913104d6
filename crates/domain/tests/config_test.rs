use ferrous_numaddr_domain::config::{CliOverrides, Config, ConfigError, OutputFormat};
use std::io::Write;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.output.canonical);
    assert!(!config.output.strict);
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let config: Config = toml::from_str(
        r#"
        [output]
        format = "json"
    "#,
    )
    .unwrap();

    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.canonical);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_deserialization_ignores_unknown_fields() {
    let config: Config = toml::from_str(
        r#"
        [logging]
        level = "debug"
        colour = true

        [resolver]
        nameserver = "192.0.2.53"
    "#,
    )
    .unwrap();

    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_rejects_unknown_format() {
    let result: Result<Config, _> = toml::from_str(
        r#"
        [output]
        format = "yaml"
    "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_config_load_from_file_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[logging]\nlevel = \"warn\"\n\n[output]\nformat = \"json\"\nstrict = true"
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let config = Config::load(
        Some(path),
        CliOverrides {
            log_level: Some("trace".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.strict);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load(Some("/nonexistent/numaddr.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_config_load_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output\nformat = ").unwrap();

    let result = Config::load(file.path().to_str(), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numaddr.toml");
    let path = path.to_str().unwrap();

    let mut config = Config::default();
    config.output.format = OutputFormat::Json;
    config.output.canonical = false;
    config.save(path).unwrap();

    let reloaded = Config::load(Some(path), CliOverrides::default()).unwrap();
    assert_eq!(reloaded.output.format, OutputFormat::Json);
    assert!(!reloaded.output.canonical);
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert!("xml".parse::<OutputFormat>().is_err());
}
