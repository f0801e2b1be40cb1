use ai_core::{ConfigError, EngineConfig};

#[test]
fn defaults_are_valid() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.telemetry().tick_interval, config.tick_interval_hours);
    assert_eq!(config.brain_config().tick_interval, config.tick_interval_hours);
}

#[test]
fn non_positive_or_non_finite_values_are_rejected() {
    let zero = EngineConfig {
        tick_interval_hours: 0.0,
        ..EngineConfig::default()
    };
    assert!(matches!(zero.validate(), Err(ConfigError::Invalid(_))));

    let nan = EngineConfig {
        telemetry_window_hours: f64::NAN,
        ..EngineConfig::default()
    };
    assert!(matches!(nan.validate(), Err(ConfigError::Invalid(_))));
}
