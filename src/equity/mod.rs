//! Монте-Карло движок вероятности выигрыша.
//!
//! Высокоуровневые операции:
//!   - `estimate` – вероятность выигрыша и топ-3 рук, которые нас бьют;
//!   - `estimate_from_strs` – то же для строковых карт;
//!   - `estimate_with_token` – с возможностью отмены более новым запросом.
//!
//! Симуляции независимы: батчи раздаются в пул rayon, у каждого батча
//! свои счётчики, в конце они суммируются.

pub mod errors;
pub mod outcome;
pub mod simulation;

pub use errors::EquityError;
pub use outcome::{EquityEstimate, LosingHand, SimulationOutcome};
pub use simulation::{estimate, estimate_from_strs, estimate_with_token};

/// RNG интерфейс для симуляции.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
