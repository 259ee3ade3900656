// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mock generator

use rand_core::{impls, RngCore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Generator;

/// A mock generator yielding very predictable output
///
/// This generates an arithmetic sequence (i.e. adds a constant each step)
/// over a `u64` number, using wrapping arithmetic. If the increment is 0
/// the generator yields a constant.
///
/// `next_u32` yields the low half of the current value, while
/// [`next_double`](Generator::next_double) uses the high 53 bits, so
/// `StepGenerator::new(1 << 63, 0)` always samples `0.5`.
///
/// The seed is the low 32 bits of `initial`; resetting restarts the
/// sequence from `initial`, and `reset_with(seed)` restarts it from `seed`.
///
/// # Example
///
/// ```
/// use randist::generator::Generator;
/// use randist::generator::mock::StepGenerator;
///
/// let mut gen = StepGenerator::new(1 << 63, 0);
/// assert_eq!(gen.next_double(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepGenerator {
    initial: u64,
    v: u64,
    a: u64,
}

impl StepGenerator {
    /// Create a `StepGenerator`, yielding an arithmetic sequence starting with
    /// `initial` and incremented by `increment` each time.
    pub fn new(initial: u64, increment: u64) -> Self {
        StepGenerator {
            initial,
            v: initial,
            a: increment,
        }
    }
}

impl RngCore for StepGenerator {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let res = self.v;
        self.v = self.v.wrapping_add(self.a);
        res
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl Generator for StepGenerator {
    fn seed(&self) -> u32 {
        self.initial as u32
    }

    fn can_reset(&self) -> bool {
        true
    }

    fn reset(&mut self) -> bool {
        self.v = self.initial;
        true
    }

    fn reset_with(&mut self, seed: u32) -> bool {
        self.initial = u64::from(seed);
        self.v = self.initial;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::StepGenerator;
    use crate::Generator;
    use rand_core::RngCore;

    #[test]
    fn arithmetic_sequence() {
        let mut gen = StepGenerator::new(2, 1);
        let sample: Vec<u64> = (0..3).map(|_| gen.next_u64()).collect();
        assert_eq!(sample, [2, 3, 4]);
        assert!(gen.reset());
        assert_eq!(gen.next_u64(), 2);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serialization_step_generator() {
        let some_gen = StepGenerator::new(42, 7);
        let de_some_gen: StepGenerator =
            bincode::deserialize(&bincode::serialize(&some_gen).unwrap()).unwrap();
        assert_eq!(some_gen, de_some_gen);
    }
}
