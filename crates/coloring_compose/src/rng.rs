//! Seeded random sources used by every layout pass.
//!
//! [`RandomSource`] is the seam planners draw from. [`ParkMiller`] is the default
//! reproducible generator; [`RngSource`] adapts any [`rand::RngCore`] so alternate
//! generators can be swapped in without touching the planners. The derived helpers
//! (`between`, `int_between`, `pick`, `shuffle`, `weighted_pick`) live on [`RandomExt`].
use rand::RngCore;

/// Modulus of the Park–Miller generator (2^31 - 1).
pub const MODULUS: u32 = 2_147_483_647;

const MULTIPLIER: u64 = 16_807;

/// A source of uniform values in `[0, 1)` that can report a resumable 31-bit state.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Current state, a positive 31-bit integer.
    ///
    /// For [`ParkMiller`], seeding a fresh generator with it continues the sequence
    /// where this one stopped. Adapters such as [`RngSource`] only report a value
    /// derived from their last draw, which identifies the position but cannot
    /// resume it.
    fn state(&self) -> u32;
}

/// Reduce an arbitrary integer to a valid seed in `1..MODULUS`.
///
/// Zero is a fixed point of the generator and is remapped to `MODULUS - 1`.
pub fn normalize_seed(seed: u64) -> u32 {
    let reduced = (seed % MODULUS as u64) as u32;
    if reduced == 0 {
        MODULUS - 1
    } else {
        reduced
    }
}

/// Seed of a stream derived from `seed` by `offset` steps, kept in `1..MODULUS`.
///
/// Wraps cyclically over the valid seeds, so a non-zero offset below
/// `MODULUS - 1` never lands back on `seed`.
pub fn offset_seed(seed: u32, offset: u64) -> u32 {
    let base = normalize_seed(seed as u64) as u64 - 1;
    ((base + offset) % (MODULUS as u64 - 1) + 1) as u32
}

/// Park–Miller minimal standard linear-congruential generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkMiller {
    state: u32,
}

impl ParkMiller {
    /// Create a generator from any integer seed. See [`normalize_seed`].
    pub fn new(seed: u64) -> Self {
        Self {
            state: normalize_seed(seed),
        }
    }

    #[inline]
    fn step(&mut self) -> u32 {
        self.state = ((self.state as u64 * MULTIPLIER) % MODULUS as u64) as u32;
        self.state
    }
}

impl RandomSource for ParkMiller {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.step() - 1) as f64 / (MODULUS - 1) as f64
    }

    #[inline]
    fn state(&self) -> u32 {
        self.state
    }
}

impl RngCore for ParkMiller {
    fn next_u32(&mut self) -> u32 {
        (self.next_f64() * (u32::MAX as f64 + 1.0)) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Adapter exposing any [`RngCore`] generator as a [`RandomSource`].
///
/// [`RandomSource::state`] reports the last raw draw reduced to a seed; it does not
/// capture the wrapped generator's internal state.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
    last: u32,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, last: 1 }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        let raw = self.rng.next_u32();
        self.last = normalize_seed(raw as u64);
        (raw as f64) / (u32::MAX as f64 + 1.0)
    }

    fn state(&self) -> u32 {
        self.last
    }
}

/// Derived sampling helpers available on every [`RandomSource`].
pub trait RandomExt: RandomSource {
    /// Uniform value in `[min, max)`.
    #[inline]
    fn between(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform integer in `[min, max]`. Returns `min` when the range is inverted.
    fn int_between(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as f64;
        min + ((self.next_f64() * span).floor() as usize).min(max - min)
    }

    /// `true` with probability `p`.
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform element of `items`, or `None` if empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = ((self.next_f64() * items.len() as f64).floor() as usize).min(items.len() - 1);
        items.get(idx)
    }

    /// In-place Fisher–Yates shuffle.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = ((self.next_f64() * (i + 1) as f64).floor() as usize).min(i);
            items.swap(i, j);
        }
    }

    /// Pick an element with probability proportional to `weight(item)`.
    ///
    /// Non-positive and non-finite weights count as zero. Returns `None` when no
    /// element carries positive weight; no value is drawn in that case.
    fn weighted_pick<'a, T, F>(&mut self, items: &'a [T], weight: F) -> Option<&'a T>
    where
        F: Fn(&T) -> f64,
    {
        let effective = |item: &T| {
            let w = weight(item);
            if w.is_finite() && w > 0.0 {
                w
            } else {
                0.0
            }
        };

        let total: f64 = items.iter().map(effective).sum();
        if total <= 0.0 {
            return None;
        }

        let roll = self.next_f64() * total;
        let mut cumulative = 0.0;
        for item in items {
            cumulative += effective(item);
            if roll < cumulative {
                return Some(item);
            }
        }

        items.iter().rev().find(|item| effective(item) > 0.0)
    }
}

impl<R: RandomSource + ?Sized> RandomExt for R {}
