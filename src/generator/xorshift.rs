// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Xorshift generator

use core::fmt;
use core::num::Wrapping as w;

use rand_core::{impls, RngCore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{entropy_seed, Generator};

// Fixed initial values of the y, z and w state words.
const SEED_Y: u32 = 362_436_069;
const SEED_Z: u32 = 521_288_629;
const SEED_W: u32 = 88_675_123;

/// An Xorshift[^1] random number generator with 128 bits of state.
///
/// The seed initialises the first state word; the remaining three use fixed
/// constants, so every 32-bit seed (including 0) yields a valid state.
///
/// The Xorshift algorithm is not suitable for cryptographic purposes
/// but is very fast.
///
/// [^1]: Marsaglia, George (July 2003). ["Xorshift
///       RNGs"](https://www.jstatsoft.org/v08/i14/paper). *Journal of
///       Statistical Software*. Vol. 8 (Issue 14).
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XorShift128 {
    seed: u32,
    x: w<u32>,
    y: w<u32>,
    z: w<u32>,
    w: w<u32>,
}

// Custom Debug implementation that does not expose the internal state
impl fmt::Debug for XorShift128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XorShift128 {{ seed: {} }}", self.seed)
    }
}

impl XorShift128 {
    /// Create a generator seeded from system entropy.
    pub fn new() -> XorShift128 {
        XorShift128::with_seed(entropy_seed())
    }

    /// Create a generator with the given seed.
    pub fn with_seed(seed: u32) -> XorShift128 {
        XorShift128 {
            seed,
            x: w(seed),
            y: w(SEED_Y),
            z: w(SEED_Z),
            w: w(SEED_W),
        }
    }
}

impl Default for XorShift128 {
    fn default() -> XorShift128 {
        XorShift128::new()
    }
}

impl RngCore for XorShift128 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let x = self.x;
        let t = x ^ (x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        let w_ = self.w;
        self.w = w_ ^ (w_ >> 19) ^ (t ^ (t >> 8));
        self.w.0
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl Generator for XorShift128 {
    #[inline]
    fn seed(&self) -> u32 {
        self.seed
    }

    #[inline]
    fn can_reset(&self) -> bool {
        true
    }

    fn reset_with(&mut self, seed: u32) -> bool {
        debug!("XorShift128: reset with seed {}", seed);
        *self = XorShift128::with_seed(seed);
        true
    }
}
