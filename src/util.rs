use std::time::{Duration, Instant};

use rand_core::{impls, Error, RngCore, SeedableRng};

pub trait ChangeMinMax {
    fn change_max(&mut self, v: Self) -> bool;
}

impl<T: PartialOrd> ChangeMinMax for T {
    fn change_max(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// 一定時間の経過を判定するタイマー
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    since: Instant,
    limit: Duration,
}

impl Timer {
    pub fn start(limit: Duration) -> Self {
        Self {
            since: Instant::now(),
            limit,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.since.elapsed() >= self.limit
    }

    pub fn elapsed(&self) -> Duration {
        self.since.elapsed()
    }
}

/// 32bit xorshift
#[derive(Debug, Clone)]
pub struct XorShift32 {
    x: u32,
}

impl XorShift32 {
    pub const DEFAULT_SEED: u32 = 2463534242;

    pub fn new(seed: u32) -> Self {
        // 0は不動点になるので避ける
        let x = if seed == 0 { Self::DEFAULT_SEED } else { seed };
        Self { x }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RngCore for XorShift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.x ^= self.x << 13;
        self.x ^= self.x >> 17;
        self.x ^= self.x << 5;
        self.x
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
