use core::cmp::Ordering;

use crate::domain::card::{Card, Rank, Suit};

use super::errors::EvalError;
use super::hand_rank::{EvaluatedHand, HandCategory};
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

pub const MIN_CARDS: usize = 5;
pub const MAX_CARDS: usize = 7;

/// Главная функция: лучшая 5-карточная комбинация из 5–7 карт.
///
/// Подмножество не перебирается: комбинация выводится из счётчиков рангов и мастей.
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    match cards.len() {
        n if n < MIN_CARDS => Err(EvalError::NotEnoughCards { got: n }),
        n if n > MAX_CARDS => Err(EvalError::TooManyCards { got: n }),
        _ => Ok(classify(cards)),
    }
}

/// Оценить hole + board без аллокаций.
///
/// Ожидается:
///   - `hole.len() == 2`
///   - `board.len()` от 3 до 5
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let total = hole.len() + board.len();
    if !(MIN_CARDS..=MAX_CARDS).contains(&total) {
        return evaluate(&[hole, board].concat());
    }

    let mut buf = [Card::new(Rank::Two, Suit::Clubs); MAX_CARDS];
    buf[..hole.len()].copy_from_slice(hole);
    buf[hole.len()..total].copy_from_slice(board);
    Ok(classify(&buf[..total]))
}

/// Сравнить две оценённые руки: 1 / 0 / -1 в терминах `Ordering`.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.compare(b)
}

/// Счётчики рангов и мастей для одного набора карт.
struct Tally {
    /// индексы 0..14, используем 2..14
    ranks: [u8; 15],
    suits: [u8; 4],
    mask: RankMask,
}

impl Tally {
    fn of(cards: &[Card]) -> Self {
        let mut tally = Tally {
            ranks: [0; 15],
            suits: [0; 4],
            mask: 0,
        };
        for card in cards {
            tally.ranks[card.rank.value() as usize] += 1;
            tally.suits[card.suit.index()] += 1;
            tally.mask |= rank_to_bit(card.rank);
        }
        tally
    }

    /// Различные ранги по убыванию, кроме `exclude`, не больше `out.len()` штук.
    fn top_ranks(&self, exclude: &[u8], out: &mut [u8]) -> usize {
        let mut n = 0;
        for v in (2..=14u8).rev() {
            if n == out.len() {
                break;
            }
            if self.ranks[v as usize] > 0 && !exclude.contains(&v) {
                out[n] = v;
                n += 1;
            }
        }
        n
    }
}

fn classify(cards: &[Card]) -> EvaluatedHand {
    let tally = Tally::of(cards);

    // Первая масть (в порядке карт), набравшая 5+.
    let flush_suit = cards
        .iter()
        .map(|c| c.suit)
        .find(|s| tally.suits[s.index()] >= 5);
    let straight_high = detect_straight(tally.mask);

    // Стрит и флеш проверяются независимо по всем картам, а не внутри флеш-масти.
    if let (Some(_), Some(high)) = (flush_suit, straight_high) {
        return if high == Rank::Ace {
            EvaluatedHand::new(HandCategory::RoyalFlush, &[Rank::Ace.value()])
        } else {
            EvaluatedHand::new(HandCategory::StraightFlush, &[high.value()])
        };
    }

    // Группы (count, rank), отсортированные по количеству, затем по рангу (desc).
    let mut groups = [(0u8, 0u8); MAX_CARDS];
    let mut n_groups = 0;
    for v in (2..=14u8).rev() {
        let count = tally.ranks[v as usize];
        if count > 0 {
            groups[n_groups] = (count, v);
            n_groups += 1;
        }
    }
    let groups = &mut groups[..n_groups];
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let (top_count, top_rank) = groups[0];
    let second = groups.get(1).copied();

    // Four of a kind: кикер - старший из оставшихся рангов.
    if top_count == 4 {
        let mut kicker = [0u8; 1];
        tally.top_ranks(&[top_rank], &mut kicker);
        return EvaluatedHand::new(HandCategory::FourOfAKind, &[top_rank, kicker[0]]);
    }

    // Full house: 3 + (2 или второй сет).
    if let Some((count, rank)) = second {
        if top_count == 3 && count >= 2 {
            return EvaluatedHand::new(HandCategory::FullHouse, &[top_rank, rank]);
        }
    }

    if let Some(suit) = flush_suit {
        let mut values = [0u8; MAX_CARDS];
        let mut n = 0;
        for card in cards.iter().filter(|c| c.suit == suit) {
            values[n] = card.rank.value();
            n += 1;
        }
        let values = &mut values[..n];
        values.sort_unstable_by(|a, b| b.cmp(a));
        return EvaluatedHand::new(HandCategory::Flush, &values[..5]);
    }

    if let Some(high) = straight_high {
        return EvaluatedHand::new(HandCategory::Straight, &[high.value()]);
    }

    // Three of a kind: сет + 2 кикера.
    if top_count == 3 {
        let mut out = [top_rank, 0, 0];
        tally.top_ranks(&[top_rank], &mut out[1..]);
        return EvaluatedHand::new(HandCategory::ThreeOfAKind, &out);
    }

    // Two pair: две старшие пары + кикер (им может быть и ранг третьей пары).
    if let Some((count, low_pair)) = second {
        if top_count == 2 && count == 2 {
            let mut out = [top_rank, low_pair, 0];
            tally.top_ranks(&[top_rank, low_pair], &mut out[2..]);
            return EvaluatedHand::new(HandCategory::TwoPair, &out);
        }
    }

    if top_count == 2 {
        let mut out = [top_rank, 0, 0, 0];
        tally.top_ranks(&[top_rank], &mut out[1..]);
        return EvaluatedHand::new(HandCategory::Pair, &out);
    }

    let mut out = [0u8; 5];
    tally.top_ranks(&[], &mut out);
    EvaluatedHand::new(HandCategory::HighCard, &out)
}
