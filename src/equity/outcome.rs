use serde::{Deserialize, Serialize};

use crate::eval::HandCategory;

/// Сырые счётчики по набору симуляций.
///
/// Каждый воркер копит свой экземпляр, потом они просто складываются.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationOutcome {
    pub wins: u64,
    /// Реально сыгранные раздачи.
    pub simulated: u64,
    /// Пропущенные: в колоде не хватило карт.
    pub skipped: u64,
    /// Проигрыши по категории лучшей руки оппонента.
    pub losses: [u64; 10],
}

impl SimulationOutcome {
    #[inline]
    pub fn record_win(&mut self) {
        self.wins += 1;
        self.simulated += 1;
    }

    #[inline]
    pub fn record_loss(&mut self, beaten_by: HandCategory) {
        self.losses[beaten_by.slot()] += 1;
        self.simulated += 1;
    }

    #[inline]
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub fn merge(mut self, other: Self) -> Self {
        self.wins += other.wins;
        self.simulated += other.simulated;
        self.skipped += other.skipped;
        for (a, b) in self.losses.iter_mut().zip(other.losses) {
            *a += b;
        }
        self
    }

    pub fn losses_by(&self, category: HandCategory) -> u64 {
        self.losses[category.slot()]
    }

    /// До `n` самых частых категорий, которые нас обыгрывали.
    /// При равенстве счётчиков первой идёт более сильная категория.
    pub fn top_losing(&self, n: usize) -> Vec<LosingHand> {
        let mut ranked: Vec<LosingHand> = HandCategory::ALL
            .iter()
            .rev()
            .map(|&category| LosingHand {
                category,
                count: self.losses_by(category),
            })
            .filter(|l| l.count > 0)
            .collect();
        // sort_by стабилен: порядок «сильнее раньше» сохраняется внутри равных
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

/// Категория, обыгравшая игрока, и сколько раз это случилось.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LosingHand {
    pub category: HandCategory,
    pub count: u64,
}

impl LosingHand {
    pub fn name(&self) -> &'static str {
        self.category.name()
    }

    /// Доля от номинального числа симуляций.
    pub fn frequency(&self, trials: u64) -> f64 {
        if trials == 0 {
            0.0
        } else {
            self.count as f64 / trials as f64
        }
    }
}

/// Итог расчёта вероятности выигрыша.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityEstimate {
    /// wins / trials, где trials - номинальное число симуляций.
    pub win_rate: f64,
    /// До трёх самых частых категорий, обыгравших игрока.
    pub top_losing: Vec<LosingHand>,
    pub trials: u64,
    pub simulated: u64,
    pub skipped: u64,
}

impl EquityEstimate {
    /// Нулевой результат: данных для расчёта недостаточно.
    pub fn empty(trials: u64) -> Self {
        Self {
            win_rate: 0.0,
            top_losing: Vec::new(),
            trials,
            simulated: 0,
            skipped: 0,
        }
    }

    pub fn from_outcome(outcome: &SimulationOutcome, trials: u64) -> Self {
        // Пропущенные раздачи остаются в знаменателе.
        let win_rate = if trials == 0 {
            0.0
        } else {
            outcome.wins as f64 / trials as f64
        };
        Self {
            win_rate,
            top_losing: outcome.top_losing(3),
            trials,
            simulated: outcome.simulated,
            skipped: outcome.skipped,
        }
    }
}
