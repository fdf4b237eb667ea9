//! Доменная модель: карты и колода.

pub mod card;
pub mod deck;

/// Индекс места за столом (0..num_players-1).
pub type SeatIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
