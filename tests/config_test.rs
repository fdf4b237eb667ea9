//! Интеграционные тесты конфигурации (crate::config).

use std::path::PathBuf;

use poker_odds::config::*;

#[test]
fn defaults() {
    let cfg = OddsConfig::default();
    assert_eq!(cfg.simulation.trials, DEFAULT_TRIALS);
    assert_eq!(cfg.simulation.batch_size, DEFAULT_BATCH_SIZE);
    assert!(cfg.simulation.parallel);
    assert_eq!(cfg.simulation.seed, None);
    assert_eq!(cfg.preflop, PreflopConfig::default());
}

/// Частичный JSON: недостающие поля берутся по умолчанию.
#[test]
fn partial_json_fills_defaults() {
    let cfg = OddsConfig::from_json_str(
        r#"{
            "simulation": { "trials": 500, "seed": 9 },
            "preflop": { "legacy_table_path": "tables/legacy.json" }
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.simulation.trials, 500);
    assert_eq!(cfg.simulation.seed, Some(9));
    assert_eq!(cfg.simulation.batch_size, DEFAULT_BATCH_SIZE);
    assert!(cfg.simulation.parallel);
    assert_eq!(cfg.preflop.modern_table_path, None);
    assert_eq!(
        cfg.preflop.legacy_table_path,
        Some(PathBuf::from("tables/legacy.json"))
    );

    assert_eq!(OddsConfig::from_json_str("{}").unwrap(), OddsConfig::default());
}

#[test]
fn builders() {
    let sim = SimulationConfig::default()
        .with_trials(123)
        .with_seed(5)
        .sequential();
    assert_eq!(sim.trials, 123);
    assert_eq!(sim.seed, Some(5));
    assert!(!sim.parallel);
}

#[test]
fn broken_config_is_an_error() {
    assert!(matches!(
        OddsConfig::from_json_str("{ not json"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        OddsConfig::from_json_file("/definitely/not/here.json"),
        Err(ConfigError::Io(_))
    ));
}
