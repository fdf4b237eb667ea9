use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::equity::RandomSource;

/// Системный RNG: свой генератор на каждый поток (`thread_rng`).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и воспроизводимых прогонов.
/// Одинаковый seed → одинаковые раздачи.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// RNG для отдельного батча симуляции.
    ///
    /// Батчи выполняются параллельно и в любом порядке, поэтому поток
    /// случайных чисел зависит только от (seed, номер батча).
    pub fn for_batch(seed: u64, batch: u64) -> Self {
        Self::from_seed(mix_seed(seed, batch))
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// splitmix64-перемешивание, чтобы соседние батчи не получали похожие seed.
fn mix_seed(seed: u64, batch: u64) -> u64 {
    let mut z = seed ^ batch.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
