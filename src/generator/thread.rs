// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Thread-local generator

use rand::rngs::ThreadRng;
use rand_core::RngCore;

use super::Generator;

/// A [`Generator`] drawing from the lazily-initialised thread-local
/// generator of `rand`, which is periodically reseeded from the operating
/// system.
///
/// Its output cannot be replayed: [`can_reset`](Generator::can_reset) is
/// `false`, resets are refused, and [`seed`](Generator::seed) is always `0`.
#[derive(Clone, Debug, Default)]
pub struct ThreadGenerator {
    rng: ThreadRng,
}

impl ThreadGenerator {
    /// Retrieve a handle to the thread-local generator.
    pub fn new() -> ThreadGenerator {
        ThreadGenerator { rng: rand::rng() }
    }
}

impl RngCore for ThreadGenerator {
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

impl Generator for ThreadGenerator {
    #[inline]
    fn seed(&self) -> u32 {
        0
    }

    #[inline]
    fn can_reset(&self) -> bool {
        false
    }

    fn reset_with(&mut self, _seed: u32) -> bool {
        warn!("ThreadGenerator: reset requested but the thread-local generator cannot be reset");
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cannot_reset() {
        let mut gen = ThreadGenerator::new();
        assert!(!gen.can_reset());
        assert!(!gen.reset());
        assert!(!gen.reset_with(3));
        let x = gen.next_double();
        assert!((0.0..1.0).contains(&x));
    }
}
