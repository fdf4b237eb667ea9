use thiserror::Error;

/// Ошибки оценщика рук.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Для оценки нужно минимум 5 карт, передано {got}")]
    NotEnoughCards { got: usize },

    #[error("Оценщик принимает не больше 7 карт, передано {got}")]
    TooManyCards { got: usize },
}
