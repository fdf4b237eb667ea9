//! Конфигурация движков: число симуляций, пути к таблицам префлопа.
//!
//! Все поля имеют значения по умолчанию, поэтому JSON-файл может быть
//! частичным или вовсе отсутствовать.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Число симуляций по умолчанию: компромисс между разбросом и задержкой.
pub const DEFAULT_TRIALS: u64 = 20_000;
pub const DEFAULT_BATCH_SIZE: u64 = 1_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Некорректный JSON конфига: {0}")]
    Json(#[from] serde_json::Error),
}

/// Параметры Монте-Карло.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Номинальное число симуляций (знаменатель win rate).
    pub trials: u64,
    /// Сколько симуляций делает один воркер между проверками отмены.
    pub batch_size: u64,
    /// Раскладывать батчи по пулу потоков.
    pub parallel: bool,
    /// Seed для воспроизводимых прогонов; `None` - системный RNG.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            batch_size: DEFAULT_BATCH_SIZE,
            parallel: true,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Откуда брать таблицу префлоп-стратегии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PreflopConfig {
    /// Файл новой схемы (`open_raise` / `metadata`). Пробуется первым.
    pub modern_table_path: Option<PathBuf>,
    /// Файл старой плоской схемы.
    pub legacy_table_path: Option<PathBuf>,
}

/// Общий конфиг приложения.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OddsConfig {
    pub simulation: SimulationConfig,
    pub preflop: PreflopConfig,
}

impl OddsConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
