use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::card::Card;
use crate::equity::EquityEstimate;

/// Токен отмены для одного расчёта.
///
/// Расчёт считается отменённым, как только супервизор начал более новый.
/// Воркеры проверяют токен между батчами.
#[derive(Clone, Debug)]
pub struct CancelToken {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl CancelToken {
    /// Токен, который никогда не отменяется (одиночные вызовы, тесты).
    pub fn never() -> Self {
        Self {
            generation: 0,
            current: Arc::new(AtomicU64::new(0)),
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::Acquire) != self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Входные данные расчёта, к которым привязан результат.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstimateKey {
    pub hole: Vec<Card>,
    pub community: Vec<Card>,
    pub num_players: usize,
}

/// Выданный супервизором «билет» на расчёт.
#[derive(Clone, Debug)]
pub struct EstimateTicket {
    pub key: EstimateKey,
    pub token: CancelToken,
}

/// Следит, чтобы устаревший результат не перезаписал свежий.
///
/// Каждый `begin` открывает новое поколение и тем самым отменяет все
/// предыдущие токены. `publish` принимает результат только текущего поколения.
#[derive(Debug, Default)]
pub struct EstimateSupervisor {
    current: Arc<AtomicU64>,
    latest: Mutex<Option<(EstimateKey, EquityEstimate)>>,
}

impl EstimateSupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начать новый расчёт. Предыдущий результат сбрасывается.
    pub fn begin(&self, key: EstimateKey) -> EstimateTicket {
        let mut latest = self.lock_latest();
        let generation = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        *latest = None;
        log::debug!("estimate generation {generation} started");

        EstimateTicket {
            key,
            token: CancelToken {
                generation,
                current: Arc::clone(&self.current),
            },
        }
    }

    /// Отменить всё, что сейчас считается.
    pub fn cancel_all(&self) {
        let mut latest = self.lock_latest();
        self.current.fetch_add(1, Ordering::AcqRel);
        *latest = None;
    }

    /// Сохранить результат. Возвращает `false`, если билет уже устарел.
    pub fn publish(&self, ticket: &EstimateTicket, estimate: EquityEstimate) -> bool {
        let mut latest = self.lock_latest();
        if ticket.token.is_cancelled() {
            log::debug!(
                "dropping stale estimate of generation {}",
                ticket.token.generation()
            );
            return false;
        }
        *latest = Some((ticket.key.clone(), estimate));
        true
    }

    /// Последний принятый результат вместе с входными данными.
    pub fn latest(&self) -> Option<(EstimateKey, EquityEstimate)> {
        self.lock_latest().clone()
    }

    fn lock_latest(&self) -> std::sync::MutexGuard<'_, Option<(EstimateKey, EquityEstimate)>> {
        // Паника в другом потоке не портит Option: берём значение как есть.
        self.latest.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
