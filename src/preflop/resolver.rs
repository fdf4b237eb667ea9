use serde::{Deserialize, Serialize};

use crate::config::PreflopConfig;
use crate::domain::card::Card;
use crate::domain::SeatIndex;

use super::action::Action;
use super::betting::BettingContext;
use super::errors::PreflopError;
use super::hand_label::normalize_hand;
use super::position::{seat_position, PlayerBand, Position};
use super::table::{bucket_contains, HandBuckets, LegacyTable, ModernTable, StrategyTable};

// Ключи новой схемы.
const IN_POSITION: &str = "IP";
const OUT_OF_POSITION: &str = "OOP";
const OPEN_RAISE_IP: &str = "OR_2.5bb_vs_3B_4x";
const OPEN_RAISE_OOP: &str = "OR_2.5bb_vs_3B_3x";
const FOUR_BET_SITUATIONS: [&str; 2] = ["4B_to_24bb", "4B_to_25bb"];
const THREE_BET_DEFEND: &str = "3bet_defend";
const DEFEND_SITUATION: &str = "BT_CO_MP_3x_vs_OR_2.5bb_vs_4B_to_24bb";

/// Руки, с которыми в старой схеме продолжаем колл против рейза.
const CALL_VS_RAISE: [&str; 7] = ["AA", "KK", "QQ", "AKs", "AKo", "JJ", "AQs"];
/// Руки, с которыми в старой схеме идём all-in против 2+ рейзов.
const SHOVE_VS_RERAISE: [&str; 2] = ["AA", "KK"];

/// Полная рекомендация для пары карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub hand: String,
    pub position: Position,
    pub action: Action,
    pub description: String,
}

/// Префлоп-резолвер: неизменяемая таблица + правила обхода для её схемы.
#[derive(Clone, Debug, Default)]
pub struct PreflopResolver {
    table: StrategyTable,
}

impl PreflopResolver {
    pub fn new(table: StrategyTable) -> Self {
        Self { table }
    }

    /// Загрузить таблицу по конфигу (с откатом на встроенную).
    pub fn from_config(config: &PreflopConfig) -> Self {
        Self::new(StrategyTable::load(config))
    }

    pub fn table(&self) -> &StrategyTable {
        &self.table
    }

    /// Рекомендация для руки в канонической нотации (`AKs`, `QQ`, ...).
    /// Если в таблице чего-то нет - `fold`.
    pub fn recommend(
        &self,
        hand: &str,
        position: Position,
        num_players: usize,
        ctx: BettingContext,
    ) -> Action {
        match &self.table {
            StrategyTable::Modern(table) => resolve_modern(table, hand, position, ctx),
            StrategyTable::Legacy(table) => resolve_legacy(table, hand, position, num_players, ctx),
        }
    }

    /// Нормализация руки + позиция + рекомендация одним вызовом.
    pub fn recommend_for_cards(
        &self,
        a: &Card,
        b: &Card,
        my_seat: SeatIndex,
        dealer: SeatIndex,
        num_players: usize,
        ctx: BettingContext,
    ) -> Result<Recommendation, PreflopError> {
        let hand = normalize_hand(a, b);
        let position = seat_position(my_seat, num_players, dealer)?;
        let action = self.recommend(&hand, position, num_players, ctx);

        log::debug!("{hand} at {position} ({num_players} players, {ctx:?}) -> {action}");

        Ok(Recommendation {
            hand,
            position,
            action,
            description: action.description().to_string(),
        })
    }
}

/// Первая корзина из `order`, в которой есть рука.
fn first_bucket(buckets: &HandBuckets, order: &[(&str, Action)], hand: &str) -> Option<Action> {
    order
        .iter()
        .find(|(bucket, _)| buckets.get(*bucket).is_some_and(|hands| bucket_contains(hands, hand)))
        .map(|(_, action)| *action)
}

fn resolve_modern(table: &ModernTable, hand: &str, position: Position, ctx: BettingContext) -> Action {
    let action = if ctx.num_prior_raises >= 2 {
        facing_four_bet(table, hand, position)
    } else if ctx.faces_raise() {
        defend_vs_three_bet(table, hand, position)
    } else {
        open_raise(table, hand, position)
    };
    action.unwrap_or(Action::Fold)
}

/// Открытие: сначала чарт IP, если там руки нет - OOP.
fn open_raise(table: &ModernTable, hand: &str, position: Position) -> Option<Action> {
    const ORDER: [(&str, Action); 2] = [("raise", Action::Raise), ("fold", Action::Fold)];

    [(IN_POSITION, OPEN_RAISE_IP), (OUT_OF_POSITION, OPEN_RAISE_OOP)]
        .into_iter()
        .filter_map(|(side, situation)| ModernTable::chart(&table.open_raise, side, situation, position))
        .find_map(|buckets| first_bucket(buckets, &ORDER, hand))
}

fn defend_vs_three_bet(table: &ModernTable, hand: &str, position: Position) -> Option<Action> {
    const ORDER: [(&str, Action); 3] = [
        ("3bet", Action::ThreeBet),
        ("fold", Action::Fold),
        ("call", Action::Call),
    ];

    let buckets = ModernTable::chart(&table.vs_open_raise, THREE_BET_DEFEND, DEFEND_SITUATION, position)?;
    first_bucket(buckets, &ORDER, hand)
}

/// Против 4-бета. `4bet` наружу отдаётся как `3bet`: в интерфейсе одна кнопка ре-рейза.
fn facing_four_bet(table: &ModernTable, hand: &str, position: Position) -> Option<Action> {
    const ORDER: [(&str, Action); 2] = [("4bet", Action::ThreeBet), ("fold", Action::Fold)];

    [IN_POSITION, OUT_OF_POSITION]
        .into_iter()
        .flat_map(|side| FOUR_BET_SITUATIONS.into_iter().map(move |situation| (side, situation)))
        .filter_map(|(side, situation)| ModernTable::chart(&table.open_raise, side, situation, position))
        .find_map(|buckets| first_bucket(buckets, &ORDER, hand))
}

fn resolve_legacy(
    table: &LegacyTable,
    hand: &str,
    position: Position,
    num_players: usize,
    ctx: BettingContext,
) -> Action {
    let base = table
        .base_action(hand, position.legacy(), PlayerBand::for_players(num_players))
        .map(|label| {
            label.parse::<Action>().unwrap_or_else(|_| {
                log::debug!("unknown action {label:?} for {hand} in legacy table, folding");
                Action::Fold
            })
        })
        .unwrap_or(Action::Fold);

    if !ctx.faces_raise() {
        return base;
    }

    match base {
        Action::Raise if ctx.num_prior_raises >= 2 && SHOVE_VS_RERAISE.contains(&hand) => Action::AllIn,
        Action::Raise => Action::ThreeBet,
        Action::Call if CALL_VS_RAISE.contains(&hand) => Action::Call,
        Action::Call => Action::Fold,
        other => other,
    }
}
