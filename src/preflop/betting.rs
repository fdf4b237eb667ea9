use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;

use super::action::Action;

/// Что произошло до нашего хода на префлопе.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingContext {
    pub has_prior_raise: bool,
    pub num_prior_raises: u32,
    pub has_prior_call: bool,
}

impl BettingContext {
    /// Банк ещё никто не открывал.
    pub fn unopened() -> Self {
        Self::default()
    }

    pub fn new(has_prior_raise: bool, num_prior_raises: u32) -> Self {
        Self {
            has_prior_raise,
            num_prior_raises,
            has_prior_call: false,
        }
    }

    /// Перед нами кто-то повышал.
    pub fn faces_raise(&self) -> bool {
        self.has_prior_raise || self.num_prior_raises >= 1
    }

    /// Собрать контекст из действий игроков, сидящих до нас.
    ///
    /// Обходим места по часовой стрелке от следующего за дилером до нашего
    /// (не включая). `raise` - один рейз, `3bet` - два, `4bet` и `all-in` - три.
    pub fn from_seat_actions(
        actions: &HashMap<SeatIndex, Action>,
        dealer: SeatIndex,
        my_seat: SeatIndex,
        num_players: usize,
    ) -> Self {
        let mut ctx = Self::default();
        if num_players == 0 {
            return ctx;
        }

        for step in 0..num_players {
            let seat = (dealer + 1 + step) % num_players;
            if seat == my_seat {
                break;
            }
            let raises = match actions.get(&seat) {
                Some(Action::Raise) => 1,
                Some(Action::ThreeBet) => 2,
                Some(Action::FourBet) | Some(Action::AllIn) => 3,
                Some(Action::Call) => {
                    ctx.has_prior_call = true;
                    0
                }
                _ => 0,
            };
            if raises > 0 {
                ctx.has_prior_raise = true;
                ctx.num_prior_raises += raises;
            }
        }
        ctx
    }
}

/// Сколько игроков ещё в раздаче: все, кроме сфолдивших.
///
/// Мы сами никогда не считаемся сфолдившими; результат не меньше 1.
pub fn active_player_count(
    num_players: usize,
    folded: &HashSet<SeatIndex>,
    my_seat: SeatIndex,
) -> usize {
    let folded = folded
        .iter()
        .filter(|&&seat| seat != my_seat && seat < num_players)
        .count();
    num_players.saturating_sub(folded).max(1)
}
