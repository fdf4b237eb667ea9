use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::domain::card::{parse_cards, Card, Rank, Suit};
use crate::domain::deck::Deck;
use crate::eval::{evaluate_best_hand, EvalError, EvaluatedHand};
use crate::infra::rng::{DeterministicRng, SystemRng};
use crate::infra::supervisor::CancelToken;

use super::errors::EquityError;
use super::outcome::{EquityEstimate, SimulationOutcome};
use super::RandomSource;

const BOARD_SIZE: usize = 5;

/// Что известно о раздаче: наши карты, открытый борд и число оппонентов.
#[derive(Clone, Copy, Debug)]
struct Deal<'a> {
    hole: &'a [Card],
    community: &'a [Card],
    opponents: usize,
}

impl Deal<'_> {
    /// Сколько карт нужно из колоды на одну симуляцию.
    /// При переполнении - `usize::MAX`: такую раздачу не сдать никогда.
    fn cards_needed(&self) -> usize {
        self.opponents
            .checked_mul(2)
            .and_then(|n| n.checked_add(BOARD_SIZE - self.community.len()))
            .unwrap_or(usize::MAX)
    }
}

/// Оценить вероятность выигрыша методом Монте-Карло.
///
/// Меньше двух карт на руках - не ошибка, а пустой результат.
pub fn estimate(
    hole: &[Card],
    community: &[Card],
    num_players: usize,
    config: &SimulationConfig,
) -> Result<EquityEstimate, EquityError> {
    estimate_with_token(hole, community, num_players, config, &CancelToken::never())
}

/// То же, что `estimate`, но карты заданы строками (`"Ah"`, `"10d"`, ...).
pub fn estimate_from_strs<S: AsRef<str>>(
    hole: &[S],
    community: &[S],
    num_players: usize,
    config: &SimulationConfig,
) -> Result<EquityEstimate, EquityError> {
    let hole = parse_cards(hole)?;
    let community = parse_cards(community)?;
    estimate(&hole, &community, num_players, config)
}

/// Расчёт с токеном отмены: токен проверяется перед каждым батчем.
pub fn estimate_with_token(
    hole: &[Card],
    community: &[Card],
    num_players: usize,
    config: &SimulationConfig,
    token: &CancelToken,
) -> Result<EquityEstimate, EquityError> {
    let trials = config.trials;
    if hole.len() < 2 {
        return Ok(EquityEstimate::empty(trials));
    }
    validate(hole, community, num_players)?;

    let deal = Deal {
        hole,
        community,
        opponents: num_players - 1,
    };
    let known: Vec<Card> = hole.iter().chain(community).copied().collect();
    let pool = Deck::remaining_after(&known);

    log::debug!(
        "estimating {} | board {} | {} players | {} trials",
        fmt_cards(hole),
        fmt_cards(community),
        num_players,
        trials
    );
    if pool.len() < deal.cards_needed() {
        log::warn!(
            "deck has {} cards but a deal needs {}: every trial will be skipped",
            pool.len(),
            deal.cards_needed()
        );
    }

    let outcome = run_batches(deal, &pool.cards, config, token)?;
    let estimate = EquityEstimate::from_outcome(&outcome, trials);

    log::debug!(
        "win rate {:.4} ({} simulated, {} skipped)",
        estimate.win_rate,
        estimate.simulated,
        estimate.skipped
    );
    Ok(estimate)
}

fn validate(hole: &[Card], community: &[Card], num_players: usize) -> Result<(), EquityError> {
    if hole.len() > 2 {
        return Err(EquityError::TooManyHoleCards { got: hole.len() });
    }
    if !matches!(community.len(), 0 | 3 | 4 | 5) {
        return Err(EquityError::InvalidBoard {
            got: community.len(),
        });
    }
    if num_players == 0 {
        return Err(EquityError::NoPlayers);
    }

    let mut seen = [false; 52];
    for card in hole.iter().chain(community) {
        if std::mem::replace(&mut seen[card.index()], true) {
            return Err(EquityError::DuplicateCard(*card));
        }
    }
    Ok(())
}

/// Разбить симуляции на батчи и собрать счётчики.
fn run_batches(
    deal: Deal<'_>,
    pool: &[Card],
    config: &SimulationConfig,
    token: &CancelToken,
) -> Result<SimulationOutcome, EquityError> {
    let batch_size = config.batch_size.max(1);
    let batches = config.trials.div_ceil(batch_size);

    let run_one = |batch: u64| -> Result<SimulationOutcome, EquityError> {
        if token.is_cancelled() {
            return Err(EquityError::Cancelled);
        }
        let start = batch * batch_size;
        let trials = batch_size.min(config.trials - start);
        let outcome = match config.seed {
            Some(seed) => run_batch(deal, pool, trials, &mut DeterministicRng::for_batch(seed, batch)),
            None => run_batch(deal, pool, trials, &mut SystemRng),
        }?;
        Ok(outcome)
    };

    if config.parallel {
        (0..batches)
            .into_par_iter()
            .map(run_one)
            .try_reduce(SimulationOutcome::default, |a, b| Ok(a.merge(b)))
    } else {
        (0..batches).try_fold(SimulationOutcome::default(), |acc, batch| {
            Ok(acc.merge(run_one(batch)?))
        })
    }
}

/// Сыграть `trials` раздач на собственной копии колоды.
fn run_batch<R: RandomSource>(
    deal: Deal<'_>,
    pool: &[Card],
    trials: u64,
    rng: &mut R,
) -> Result<SimulationOutcome, EvalError> {
    let mut deck = pool.to_vec();
    let mut outcome = SimulationOutcome::default();
    let needed = deal.cards_needed();
    let dealt_to_opponents = deal.opponents.saturating_mul(2);

    let mut board = [Card::new(Rank::Two, Suit::Clubs); BOARD_SIZE];
    board[..deal.community.len()].copy_from_slice(deal.community);

    for _ in 0..trials {
        if deck.len() < needed {
            outcome.record_skip();
            continue;
        }
        rng.shuffle(&mut deck);

        // Сначала по две карты каждому оппоненту по порядку мест, потом добор борда.
        let (opponent_cards, rest) = deck.split_at(dealt_to_opponents);
        board[deal.community.len()..].copy_from_slice(&rest[..BOARD_SIZE - deal.community.len()]);

        let mine = evaluate_best_hand(deal.hole, &board)?;
        let best_opponent = best_opponent_hand(opponent_cards, &board)?;

        match best_opponent {
            Some(theirs) if theirs > mine => outcome.record_loss(theirs.category()),
            // ничья засчитывается как выигрыш
            _ => outcome.record_win(),
        }
    }

    Ok(outcome)
}

/// Лучшая рука среди всех оппонентов (только одна, не по каждому).
fn best_opponent_hand(
    opponent_cards: &[Card],
    board: &[Card],
) -> Result<Option<EvaluatedHand>, EvalError> {
    let mut best: Option<EvaluatedHand> = None;
    for hole in opponent_cards.chunks_exact(2) {
        let hand = evaluate_best_hand(hole, board)?;
        if best.map_or(true, |b| hand > b) {
            best = Some(hand);
        }
    }
    Ok(best)
}

fn fmt_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
