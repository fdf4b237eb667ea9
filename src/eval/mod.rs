//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate(cards) -> Result<EvaluatedHand, EvalError>` для 5–7 карт;
//!   `evaluate_best_hand(hole, board)` - то же для пары hole + board.
//!
//! Это самый горячий путь симуляции, поэтому оценщик не аллоцирует.

pub mod errors;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use errors::EvalError;
pub use evaluator::{compare, evaluate, evaluate_best_hand, MAX_CARDS, MIN_CARDS};
pub use hand_rank::{EvaluatedHand, HandCategory};
