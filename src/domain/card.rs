use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки разбора текстового обозначения карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Пустая строка вместо карты")]
    Empty,

    #[error("Неизвестный ранг: {0}")]
    InvalidRank(String),

    #[error("Неизвестная масть: {0}")]
    InvalidSuit(String),
}

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Индекс масти 0..4 - для счётчиков в оценщике.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Принимает `s h d c` в любом регистре и символы `♠ ♥ ♦ ♣`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'c' | 'C' | '♣' => Some(Suit::Clubs),
            'd' | 'D' | '♦' => Some(Suit::Diamonds),
            'h' | 'H' | '♥' => Some(Suit::Hearts),
            's' | 'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Ранг карты. Числовое значение совпадает с покерным: 2..=14, туз = 14.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Значение ранга 2..=14.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Self> {
        match v {
            2..=14 => Some(Self::ALL[(v - 2) as usize]),
            _ => None,
        }
    }

    /// Обозначение ранга в нотации рук: `2`..`9`, `T`, `J`, `Q`, `K`, `A`.
    pub const fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// `10` и `T` дают один и тот же ранг.
    fn parse_token(token: &str) -> Option<Self> {
        if token == "10" {
            return Some(Rank::Ten);
        }
        let mut chars = token.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match ch.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Числовой ранг карты 2..=14.
    #[inline]
    pub const fn rank_of(&self) -> u8 {
        self.rank.value()
    }

    #[inline]
    pub const fn suit_of(&self) -> Suit {
        self.suit
    }

    /// Уникальный индекс карты в колоде 0..52.
    #[inline]
    pub const fn index(&self) -> usize {
        self.suit.index() * 13 + (self.rank.value() as usize - 2)
    }

    /// Разбор строки вида `Ah`, `td`, `10c`, `K♠`.
    pub fn parse(text: &str) -> Result<Self, CardError> {
        let text = text.trim();
        let suit_ch = text.chars().last().ok_or(CardError::Empty)?;
        let rank_part = &text[..text.len() - suit_ch.len_utf8()];

        let rank =
            Rank::parse_token(rank_part).ok_or_else(|| CardError::InvalidRank(rank_part.to_string()))?;
        let suit = Suit::from_char(suit_ch).ok_or_else(|| CardError::InvalidSuit(suit_ch.to_string()))?;

        Ok(Card { rank, suit })
    }
}

/// Разобрать список строк в карты, остановившись на первой ошибке.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, CardError> {
    tokens.iter().map(|t| Card::parse(t.as_ref())).collect()
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}
