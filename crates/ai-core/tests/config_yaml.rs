use std::io::Write;

use ai_core::{ConfigError, EngineConfig};

#[test]
fn missing_fields_take_defaults() {
    let config = EngineConfig::from_yaml_str("tick_interval_hours: 0.5\n").unwrap();
    assert_eq!(config.tick_interval_hours, 0.5);
    assert_eq!(
        config.telemetry_window_hours,
        EngineConfig::default().telemetry_window_hours
    );
}

#[test]
fn invalid_values_fail_validation() {
    let err = EngineConfig::from_yaml_str("telemetry_window_hours: -1.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = EngineConfig::from_yaml_str("tick_interval_hours: [1, 2").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_file_and_reports_missing_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tick_interval_hours: 2.0").unwrap();
    writeln!(file, "telemetry_window_hours: 48.0").unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.tick_interval_hours, 2.0);
    assert_eq!(config.telemetry_window_hours, 48.0);

    let missing = file.path().with_extension("missing");
    assert!(matches!(
        EngineConfig::load(&missing),
        Err(ConfigError::Io { .. })
    ));
}
