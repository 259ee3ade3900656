// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Adapter from `SeedableRng` engines to `Generator`

use rand::rngs::StdRng;
use rand_core::{RngCore, SeedableRng};

use super::{entropy_seed, Generator};

/// A [`Generator`] backed by any [`SeedableRng`] engine.
///
/// The engine is (re)built with [`SeedableRng::seed_from_u64`] from the
/// 32-bit seed, so resetting always restores the output sequence.
///
/// # Example
///
/// ```
/// use randist::generator::{Generator, Seeded};
/// use rand::rngs::StdRng;
///
/// let mut gen: Seeded<StdRng> = Seeded::with_seed(12);
/// let x = gen.next_double();
/// gen.reset();
/// assert_eq!(x, gen.next_double());
/// ```
#[derive(Clone, Debug)]
pub struct Seeded<R> {
    rng: R,
    seed: u32,
}

/// The standard generator: [`StdRng`] behind a [`Seeded`] adapter.
pub type StdGenerator = Seeded<StdRng>;

impl<R: SeedableRng> Seeded<R> {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Seeded<R> {
        Seeded::with_seed(entropy_seed())
    }

    /// Create a generator with the given seed.
    pub fn with_seed(seed: u32) -> Seeded<R> {
        Seeded {
            rng: R::seed_from_u64(u64::from(seed)),
            seed,
        }
    }

    /// Consume the adapter, returning the wrapped engine.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: SeedableRng> Default for Seeded<R> {
    fn default() -> Seeded<R> {
        Seeded::new()
    }
}

impl<R: RngCore> RngCore for Seeded<R> {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }
}

impl<R: RngCore + SeedableRng> Generator for Seeded<R> {
    #[inline]
    fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    fn can_reset(&self) -> bool {
        true
    }

    fn reset_with(&mut self, seed: u32) -> bool {
        debug!("Seeded: reset with seed {}", seed);
        self.rng = R::seed_from_u64(u64::from(seed));
        self.seed = seed;
        true
    }
}
