use crate::domain::card::CardError;

use thiserror::Error;

/// Ошибки префлоп-модуля.
///
/// До `recommend` они не доходят: там любой промах - это `fold`.
#[derive(Debug, Error)]
pub enum PreflopError {
    #[error("Некорректная карта: {0}")]
    Card(#[from] CardError),

    #[error("За столом нет ни одного игрока")]
    NoPlayers,

    #[error("Неизвестное действие: {0}")]
    UnknownAction(String),

    #[error("Неизвестная позиция: {0}")]
    UnknownPosition(String),

    #[error("Таблица стратегии должна быть JSON-объектом")]
    NotAnObject,

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Некорректный JSON таблицы: {0}")]
    Json(#[from] serde_json::Error),
}
