use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::PreflopConfig;

use super::errors::PreflopError;
use super::position::{LegacyPosition, PlayerBand, Position};

/// Ключи верхнего уровня, по которым узнаём новую схему.
const MODERN_MARKERS: [&str; 2] = ["open_raise", "metadata"];

/// Корзины одной позиции: действие -> руки.
pub type HandBuckets = Map<String, Value>;

/// Есть ли рука в корзине.
///
/// В файлах встречается и массив, и объект `рука -> частота`;
/// для поиска важны только сами руки. Всё остальное - промах.
pub fn bucket_contains(bucket: &Value, hand: &str) -> bool {
    match bucket {
        Value::Array(hands) => hands.iter().any(|h| h.as_str() == Some(hand)),
        Value::Object(hands) => hands.contains_key(hand),
        _ => false,
    }
}

/// Новая схема: ситуации (open raise, защита от 3-бета, 4-бет)
/// с чартами по позициям.
///
/// Разделы хранятся как есть: записи неожиданной формы (описания, версии)
/// не мешают загрузке, при поиске это просто промах.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ModernTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// `IP` / `OOP` -> ситуация -> позиция -> корзины.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub open_raise: Value,

    /// `3bet_defend` -> ситуация -> позиция -> корзины.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub vs_open_raise: Value,

    /// Прочие разделы файла: при поиске не используются, при сохранении пишутся обратно.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ModernTable {
    /// Корзины для `group[side][situation][position]`, если такой путь есть
    /// и в его конце объект.
    pub fn chart<'a>(
        group: &'a Value,
        side: &str,
        situation: &str,
        position: Position,
    ) -> Option<&'a HandBuckets> {
        group.get(side)?.get(situation)?.get(position.label())?.as_object()
    }
}

/// Старая плоская схема: рука -> early/middle/late -> "2-3"/"4-6"/"7-10" -> действие.
///
/// Верхний уровень - любые ключи: служебные (`version` и т.п.) просто не
/// совпадут ни с одной рукой.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct LegacyTable {
    pub hands: BTreeMap<String, Value>,
}

impl LegacyTable {
    /// Базовое действие из таблицы; `None`, если чего-то нет или там не строка.
    pub fn base_action(
        &self,
        hand: &str,
        position: LegacyPosition,
        band: PlayerBand,
    ) -> Option<&str> {
        self.hands
            .get(hand)?
            .get(position.label())?
            .get(band.label())?
            .as_str()
    }

    fn set(&mut self, hand: &str, rows: [(LegacyPosition, [&str; 3]); 3]) {
        let by_position: Map<String, Value> = rows
            .into_iter()
            .map(|(position, actions)| {
                let bands = [PlayerBand::Short, PlayerBand::Medium, PlayerBand::Full];
                let by_band: Map<String, Value> = bands
                    .into_iter()
                    .zip(actions)
                    .map(|(band, action)| (band.label().to_string(), Value::from(action)))
                    .collect();
                (position.label().to_string(), Value::Object(by_band))
            })
            .collect();
        self.hands.insert(hand.to_string(), Value::Object(by_position));
    }

    /// Встроенная консервативная стратегия, когда внешних таблиц нет.
    ///
    /// Колонки в каждой строке: 2-3, 4-6, 7-10 игроков.
    pub fn default_strategy() -> Self {
        use LegacyPosition::{Early, Late, Middle};

        let mut table = LegacyTable::default();

        // AA и KK: очень агрессивно
        table.set(
            "AA",
            [
                (Early, ["all-in", "3bet", "3bet"]),
                (Middle, ["all-in", "3bet", "3bet"]),
                (Late, ["all-in", "all-in", "3bet"]),
            ],
        );
        table.set(
            "KK",
            [
                (Early, ["all-in", "3bet", "3bet"]),
                (Middle, ["all-in", "3bet", "3bet"]),
                (Late, ["all-in", "3bet", "3bet"]),
            ],
        );

        // QQ и AK: агрессивно, но не настолько
        table.set(
            "QQ",
            [
                (Early, ["3bet", "3bet", "raise"]),
                (Middle, ["3bet", "3bet", "raise"]),
                (Late, ["3bet", "3bet", "3bet"]),
            ],
        );
        table.set(
            "AKs",
            [
                (Early, ["3bet", "raise", "raise"]),
                (Middle, ["3bet", "3bet", "raise"]),
                (Late, ["3bet", "3bet", "3bet"]),
            ],
        );
        table.set(
            "AKo",
            [
                (Early, ["3bet", "raise", "raise"]),
                (Middle, ["3bet", "raise", "raise"]),
                (Late, ["3bet", "3bet", "raise"]),
            ],
        );

        for hand in ["JJ", "TT", "AQs", "AQo", "AJs", "KQs"] {
            table.set(
                hand,
                [
                    (Early, ["raise", "call", "fold"]),
                    (Middle, ["raise", "raise", "call"]),
                    (Late, ["raise", "raise", "raise"]),
                ],
            );
        }

        for hand in ["99", "88", "ATs", "KJs", "QJs", "JTs"] {
            table.set(
                hand,
                [
                    (Early, ["call", "fold", "fold"]),
                    (Middle, ["call", "call", "fold"]),
                    (Late, ["raise", "call", "call"]),
                ],
            );
        }

        // спекулятивные: только из поздних позиций
        for hand in ["77", "66", "A9s", "KTs", "QTs", "J9s", "T9s", "98s"] {
            table.set(
                hand,
                [
                    (Early, ["fold", "fold", "fold"]),
                    (Middle, ["call", "fold", "fold"]),
                    (Late, ["call", "call", "call"]),
                ],
            );
        }

        table
    }
}

/// Какая схема у загруженной таблицы.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableSchema {
    Modern,
    Legacy,
}

/// Таблица префлоп-стратегии. Схема определяется один раз при загрузке.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StrategyTable {
    Modern(ModernTable),
    Legacy(LegacyTable),
}

impl Default for StrategyTable {
    fn default() -> Self {
        StrategyTable::Legacy(LegacyTable::default_strategy())
    }
}

impl StrategyTable {
    pub fn schema(&self) -> TableSchema {
        match self {
            StrategyTable::Modern(_) => TableSchema::Modern,
            StrategyTable::Legacy(_) => TableSchema::Legacy,
        }
    }

    /// Разобрать уже прочитанный JSON, определив схему по маркерам.
    pub fn from_value(value: Value) -> Result<Self, PreflopError> {
        let object = value.as_object().ok_or(PreflopError::NotAnObject)?;
        if MODERN_MARKERS.iter().any(|key| object.contains_key(*key)) {
            Ok(StrategyTable::Modern(serde_json::from_value(value)?))
        } else {
            Ok(StrategyTable::Legacy(serde_json::from_value(value)?))
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, PreflopError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PreflopError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Загрузить таблицу по конфигу, никогда не падая.
    ///
    /// Порядок: файл новой схемы (принимается только если он действительно
    /// новой схемы), затем файл старой схемы (любая схема), затем встроенная таблица.
    pub fn load(config: &PreflopConfig) -> Self {
        if let Some(path) = &config.modern_table_path {
            match Self::from_file(path) {
                Ok(table) if table.schema() == TableSchema::Modern => {
                    log::info!("loaded modern preflop table from {}", path.display());
                    return table;
                }
                Ok(_) => log::warn!("{} is not a modern preflop table, skipping", path.display()),
                Err(err) => log::warn!("failed to load preflop table {}: {err}", path.display()),
            }
        }

        if let Some(path) = &config.legacy_table_path {
            match Self::from_file(path) {
                Ok(table) => {
                    log::info!(
                        "loaded {:?} preflop table from {}",
                        table.schema(),
                        path.display()
                    );
                    return table;
                }
                Err(err) => log::warn!("failed to load preflop table {}: {err}", path.display()),
            }
        }

        log::info!("using built-in preflop table");
        Self::default()
    }

    /// Сохранить таблицу обратно в JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), PreflopError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
