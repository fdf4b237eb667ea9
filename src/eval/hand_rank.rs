use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Категория покерной руки по силе.
///
/// Числовые значения нужны только для сравнения и наружу не отдаются.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 1,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandCategory {
    /// Все категории от слабой к сильной.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    /// Индекс 0..10 для счётчиков в симуляции.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self as usize - 1
    }

    /// Человеческое название категории.
    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        }
    }

    /// Сколько значений для разрешения ничьих несёт категория.
    ///
    /// HighCard/Flush - 5 карт, Pair - пара + 3 кикера, TwoPair - 2 пары + кикер,
    /// ThreeOfAKind - сет + 2 кикера, FullHouse/FourOfAKind - по 2 значения,
    /// стриты - только старшая карта.
    pub const fn tie_break_len(self) -> usize {
        match self {
            HandCategory::HighCard | HandCategory::Flush => 5,
            HandCategory::Pair => 4,
            HandCategory::TwoPair | HandCategory::ThreeOfAKind => 3,
            HandCategory::FullHouse | HandCategory::FourOfAKind => 2,
            HandCategory::Straight | HandCategory::StraightFlush | HandCategory::RoyalFlush => 1,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Результат оценки 5–7 карт: категория + значения для разрешения ничьих.
///
/// Живёт на стеке: значения лежат в фиксированном массиве, хвост заполнен нулями.
#[derive(Clone, Copy, Debug)]
pub struct EvaluatedHand {
    category: HandCategory,
    tie_breaks: [u8; 5],
    len: u8,
}

impl EvaluatedHand {
    /// Собрать руку из категории и значений (от старшего к младшему).
    /// Лишние значения сверх пяти отбрасываются.
    pub fn new(category: HandCategory, values: &[u8]) -> Self {
        let len = values.len().min(5);
        let mut tie_breaks = [0u8; 5];
        tie_breaks[..len].copy_from_slice(&values[..len]);
        Self {
            category,
            tie_breaks,
            len: len as u8,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Значения для разрешения ничьих (ранги 2..=14).
    pub fn tie_breaks(&self) -> &[u8] {
        &self.tie_breaks[..self.len as usize]
    }

    /// Сначала категория, потом поэлементно значения.
    /// Если одна последовательность - префикс другой, это ничья.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            self.tie_breaks()
                .iter()
                .zip(other.tie_breaks())
                .map(|(a, b)| a.cmp(b))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Удобная функция – описание руки по категории.
    pub fn describe(&self) -> &'static str {
        self.category.name()
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
