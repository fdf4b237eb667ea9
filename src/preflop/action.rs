use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::PreflopError;

/// Рекомендуемое действие на префлопе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    #[serde(rename = "fold")]
    Fold,
    #[serde(rename = "call")]
    Call,
    #[serde(rename = "raise")]
    Raise,
    #[serde(rename = "3bet")]
    ThreeBet,
    #[serde(rename = "4bet")]
    FourBet,
    #[serde(rename = "all-in")]
    AllIn,
    #[serde(rename = "defend")]
    Defend,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Fold,
        Action::Call,
        Action::Raise,
        Action::ThreeBet,
        Action::FourBet,
        Action::AllIn,
        Action::Defend,
    ];

    /// Метка действия в том виде, в каком она лежит в таблицах.
    pub const fn label(self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Call => "call",
            Action::Raise => "raise",
            Action::ThreeBet => "3bet",
            Action::FourBet => "4bet",
            Action::AllIn => "all-in",
            Action::Defend => "defend",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Action::Fold => "Give up the hand (Fold)",
            Action::Call => "Match the bet (Call)",
            Action::Raise => "Raise the bet (Raise)",
            Action::ThreeBet => "Re-raise (3-Bet)",
            Action::FourBet => "Re-raise (4-Bet)",
            Action::AllIn => "Put the whole stack in (All-in)",
            Action::Defend => "Defend (Call/3-Bet)",
        }
    }
}

/// Человеческое описание метки. Неизвестные метки возвращаются как есть.
pub fn describe(label: &str) -> String {
    match label.parse::<Action>() {
        Ok(action) => action.description().to_string(),
        Err(_) => label.to_string(),
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = PreflopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| PreflopError::UnknownAction(s.to_string()))
    }
}
