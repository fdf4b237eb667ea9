//! Префлоп-резолвер: рука + позиция + история ставок -> рекомендация.
//!
//! Основные операции:
//!   - `normalize_hand` – каноническая нотация руки (`AKs`, `QQ`);
//!   - `seat_position` – позиция относительно дилера;
//!   - `PreflopResolver::recommend` – действие по таблице стратегии;
//!   - `describe` – человеческое описание действия.
//!
//! Таблица бывает двух схем (новая и старая плоская); схема определяется
//! один раз при загрузке, дальше резолвер ветвится по варианту enum.

pub mod action;
pub mod betting;
pub mod errors;
pub mod hand_label;
pub mod position;
pub mod resolver;
pub mod table;

pub use action::{describe, Action};
pub use betting::{active_player_count, BettingContext};
pub use errors::PreflopError;
pub use hand_label::{normalize_hand, normalize_hand_strs};
pub use position::{seat_position, LegacyPosition, PlayerBand, Position};
pub use resolver::{PreflopResolver, Recommendation};
pub use table::{bucket_contains, HandBuckets, LegacyTable, ModernTable, StrategyTable, TableSchema};
