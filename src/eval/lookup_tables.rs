use crate::domain::card::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маски всех стритов вместе со старшей картой,
/// от самого сильного (TJQKA) к самому слабому (A2345).
pub const STRAIGHTS: [(RankMask, Rank); 10] = [
    (run_mask(Rank::Ace), Rank::Ace),
    (run_mask(Rank::King), Rank::King),
    (run_mask(Rank::Queen), Rank::Queen),
    (run_mask(Rank::Jack), Rank::Jack),
    (run_mask(Rank::Ten), Rank::Ten),
    (run_mask(Rank::Nine), Rank::Nine),
    (run_mask(Rank::Eight), Rank::Eight),
    (run_mask(Rank::Seven), Rank::Seven),
    (run_mask(Rank::Six), Rank::Six),
    // wheel: туз играет как единица
    (run_mask(Rank::Five) | rank_to_bit(Rank::Ace), Rank::Five),
];

/// Получить битовую маску для одного ранга.
#[inline]
pub const fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank as u8 - 2)
}

/// Маска из пяти подряд идущих рангов, заканчивающихся на `high`.
/// Для пятёрки возвращает только 2345 - туз добавляется отдельно.
const fn run_mask(high: Rank) -> RankMask {
    let top = high as u8 - 2;
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < 5 {
        if top >= i {
            mask |= 1 << (top - i);
        }
        i += 1;
    }
    mask
}

/// Построить маску из списка рангов.
pub fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    ranks.iter().fold(0, |mask, r| mask | rank_to_bit(*r))
}

/// Найти лучший стрит в битовой маске рангов.
/// Возвращает старшую карту стрита, если он есть.
///
/// Особый случай: wheel (A2345) → Rank::Five, самый слабый стрит.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    STRAIGHTS
        .iter()
        .find(|(mask, _)| rank_mask & mask == *mask)
        .map(|(_, high)| *high)
}
