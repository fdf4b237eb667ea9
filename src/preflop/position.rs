use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;

use super::errors::PreflopError;

/// Позиция за столом в новой схеме таблиц.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[serde(rename = "EP")]
    Early,
    #[serde(rename = "MP")]
    Middle,
    #[serde(rename = "CO")]
    Cutoff,
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Early,
        Position::Middle,
        Position::Cutoff,
        Position::Button,
        Position::SmallBlind,
        Position::BigBlind,
    ];

    /// Ключ позиции в таблицах новой схемы.
    pub const fn label(self) -> &'static str {
        match self {
            Position::Early => "EP",
            Position::Middle => "MP",
            Position::Cutoff => "CO",
            Position::Button => "BTN",
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
        }
    }

    /// Свернуть позицию в тройку старой схемы.
    pub const fn legacy(self) -> LegacyPosition {
        match self {
            Position::Early => LegacyPosition::Early,
            Position::Middle => LegacyPosition::Middle,
            Position::Cutoff | Position::Button | Position::SmallBlind | Position::BigBlind => {
                LegacyPosition::Late
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = PreflopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| PreflopError::UnknownPosition(s.to_string()))
    }
}

/// Позиция в старой плоской схеме.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LegacyPosition {
    Early,
    Middle,
    Late,
}

impl LegacyPosition {
    pub const fn label(self) -> &'static str {
        match self {
            LegacyPosition::Early => "early",
            LegacyPosition::Middle => "middle",
            LegacyPosition::Late => "late",
        }
    }
}

impl From<Position> for LegacyPosition {
    fn from(p: Position) -> Self {
        p.legacy()
    }
}

/// Диапазон числа игроков, по которому ветвится старая схема.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerBand {
    /// 2–3 игрока
    Short,
    /// 4–6 игроков
    Medium,
    /// 7–10 игроков
    Full,
}

impl PlayerBand {
    pub const fn for_players(num_players: usize) -> Self {
        match num_players {
            0..=3 => PlayerBand::Short,
            4..=6 => PlayerBand::Medium,
            _ => PlayerBand::Full,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PlayerBand::Short => "2-3",
            PlayerBand::Medium => "4-6",
            PlayerBand::Full => "7-10",
        }
    }
}

/// Позиция игрока относительно дилера.
///
/// Считаем по часовой стрелке от кнопки: BTN, SB, BB, затем ранние места,
/// и с конца - CO и окно MP (одно место до 6 игроков, два места с 7).
pub fn seat_position(
    player_index: SeatIndex,
    num_players: usize,
    dealer_index: SeatIndex,
) -> Result<Position, PreflopError> {
    if num_players == 0 {
        return Err(PreflopError::NoPlayers);
    }
    let n = num_players;
    let relative = (player_index % n + n - dealer_index % n) % n;

    let position = match (n, relative) {
        (_, 0) => Position::Button,
        (_, 1) => Position::SmallBlind,
        (0..=3, _) => Position::BigBlind,
        (_, 2) => Position::BigBlind,
        (_, r) if r == n - 1 => Position::Cutoff,
        (4..=6, r) if r == n - 2 => Position::Middle,
        (7.., r) if r >= n - 3 => Position::Middle,
        _ => Position::Early,
    };
    Ok(position)
}
