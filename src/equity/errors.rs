use thiserror::Error;

use crate::domain::card::{Card, CardError};
use crate::eval::EvalError;

/// Ошибки движка вероятностей.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EquityError {
    #[error("Некорректная карта: {0}")]
    Card(#[from] CardError),

    #[error("Ошибка оценки руки: {0}")]
    Eval(#[from] EvalError),

    #[error("У игрока не может быть больше 2 карт, передано {got}")]
    TooManyHoleCards { got: usize },

    #[error("На борде может быть 0, 3, 4 или 5 карт, передано {got}")]
    InvalidBoard { got: usize },

    #[error("За столом нет ни одного игрока")]
    NoPlayers,

    #[error("Карта {0} указана дважды")]
    DuplicateCard(Card),

    #[error("Расчёт отменён более новым запросом")]
    Cancelled,
}
