//! Калькулятор покерных вероятностей.
//!
//! Три движка:
//!   - `eval` – классификация и сравнение рук из 5–7 карт;
//!   - `equity` – Монте-Карло оценка вероятности выигрыша;
//!   - `preflop` – рекомендация действия на префлопе по таблице стратегии.
//!
//! Ядро не хранит состояния между вызовами: всё нужное передаётся параметрами.

pub mod config;
pub mod domain;
pub mod equity;
pub mod eval;
pub mod infra;
pub mod preflop;

pub use config::{OddsConfig, PreflopConfig, SimulationConfig};
pub use domain::{Card, CardError, Rank, Suit};
pub use equity::{estimate, estimate_from_strs, EquityError, EquityEstimate};
pub use eval::{evaluate, EvaluatedHand, HandCategory};
pub use preflop::{Action, BettingContext, Position, PreflopResolver};
