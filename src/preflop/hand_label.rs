use crate::domain::card::Card;

use super::errors::PreflopError;

/// Каноническая нотация стартовой руки: `AA`, `AKs`, `T9o`.
///
/// Старшая карта идёт первой; у пары суффикса нет,
/// `s` - одномастные, `o` - разномастные.
pub fn normalize_hand(a: &Card, b: &Card) -> String {
    let (high, low) = if a.rank >= b.rank { (a, b) } else { (b, a) };

    let mut label = String::with_capacity(3);
    label.push(high.rank.symbol());
    label.push(low.rank.symbol());
    if high.rank != low.rank {
        label.push(if high.suit == low.suit { 's' } else { 'o' });
    }
    label
}

/// То же для строковых карт (`"Ah"`, `"10d"`).
pub fn normalize_hand_strs(a: &str, b: &str) -> Result<String, PreflopError> {
    let a = Card::parse(a)?;
    let b = Card::parse(b)?;
    Ok(normalize_hand(&a, &b))
}
