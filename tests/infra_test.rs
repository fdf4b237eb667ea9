//! Интеграционные тесты инфраструктуры (crate::infra).

use poker_odds::domain::card::parse_cards;
use poker_odds::equity::{EquityEstimate, RandomSource};
use poker_odds::infra::*;

fn key(players: usize) -> EstimateKey {
    EstimateKey {
        hole: parse_cards(&["Ah", "Kh"]).unwrap(),
        community: Vec::new(),
        num_players: players,
    }
}

/// Одинаковый seed → одинаковая перестановка.
#[test]
fn deterministic_rng_is_reproducible() {
    let mut a: Vec<u32> = (0..52).collect();
    let mut b = a.clone();

    DeterministicRng::from_seed(7).shuffle(&mut a);
    DeterministicRng::from_seed(7).shuffle(&mut b);
    assert_eq!(a, b);

    let mut c: Vec<u32> = (0..52).collect();
    DeterministicRng::from_seed(8).shuffle(&mut c);
    assert_ne!(a, c);
}

#[test]
fn batch_rngs_differ_between_batches() {
    let mut first: Vec<u32> = (0..52).collect();
    let mut second = first.clone();
    let mut again = first.clone();

    DeterministicRng::for_batch(1, 0).shuffle(&mut first);
    DeterministicRng::for_batch(1, 1).shuffle(&mut second);
    DeterministicRng::for_batch(1, 0).shuffle(&mut again);

    assert_ne!(first, second);
    assert_eq!(first, again);
}

#[test]
fn system_rng_keeps_all_elements() {
    let mut v: Vec<u32> = (0..52).collect();
    SystemRng.shuffle(&mut v);
    v.sort_unstable();
    assert_eq!(v, (0..52).collect::<Vec<_>>());
}

/// Результат устаревшего расчёта не перезаписывает свежий.
#[test]
fn supervisor_drops_stale_results() {
    let supervisor = EstimateSupervisor::new();

    let old = supervisor.begin(key(2));
    let new = supervisor.begin(key(3));
    assert!(old.token.is_cancelled());
    assert!(!new.token.is_cancelled());

    assert!(!supervisor.publish(&old, EquityEstimate::empty(10)));
    assert!(supervisor.latest().is_none());

    let mut fresh = EquityEstimate::empty(10);
    fresh.win_rate = 0.5;
    assert!(supervisor.publish(&new, fresh.clone()));

    let (latest_key, latest) = supervisor.latest().unwrap();
    assert_eq!(latest_key.num_players, 3);
    assert_eq!(latest, fresh);
}

#[test]
fn begin_and_cancel_all_clear_previous_result() {
    let supervisor = EstimateSupervisor::new();

    let ticket = supervisor.begin(key(2));
    assert!(supervisor.publish(&ticket, EquityEstimate::empty(1)));
    assert!(supervisor.latest().is_some());

    supervisor.cancel_all();
    assert!(ticket.token.is_cancelled());
    assert!(supervisor.latest().is_none());

    let next = supervisor.begin(key(4));
    assert!(next.token.generation() > ticket.token.generation());
}

#[test]
fn never_token_is_never_cancelled() {
    assert!(!CancelToken::never().is_cancelled());
}
