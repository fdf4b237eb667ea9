//! Инфраструктурный слой вокруг движков:
//! - RNG-реализации для симуляции;
//! - надзор за расчётами (поколения, отмена устаревших);
//! - инициализация логгера для CLI.

#[cfg(feature = "cli")]
pub mod logging;
pub mod rng;
pub mod supervisor;

#[cfg(feature = "cli")]
pub use logging::init_logging;
pub use rng::*;
pub use supervisor::{CancelToken, EstimateKey, EstimateSupervisor, EstimateTicket};
