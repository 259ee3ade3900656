// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sources of uniform randomness.
//!
//! A [`Generator`] is a [`RngCore`] which additionally remembers the 32-bit
//! seed it was created with and can (usually) be reset to replay its output
//! sequence from the start. All sampling algorithms in this crate are
//! written purely in terms of the methods on [`Generator`], so any engine
//! can be swapped in.
//!
//! Engines provided here:
//!
//! - [`XorShift128`]: Marsaglia's 128-bit xorshift, fast and resettable
//! - [`Seeded`]: adapts any [`rand_core::SeedableRng`] (e.g. `StdRng`,
//!   `Pcg32`) into a resettable generator; [`StdGenerator`] is the
//!   default choice
//! - [`ThreadGenerator`]: the thread-local generator of `rand`; cannot be
//!   reset
//! - [`Shared`]: a cloneable handle letting several distributions draw from
//!   one generator
//! - [`mock::StepGenerator`]: predictable output, for testing

use crate::Error;
use rand_core::RngCore;

pub use self::seeded::{Seeded, StdGenerator};
pub use self::shared::Shared;
pub use self::thread::ThreadGenerator;
pub use self::xorshift::XorShift128;

pub mod mock;
mod seeded;
mod shared;
mod thread;
mod xorshift;

/// A resettable source of uniformly distributed values.
///
/// Implementors supply the [`RngCore`] methods plus seed bookkeeping; every
/// other method has a default implementation built on `next_u32` and
/// `next_u64`.
///
/// This trait is object safe: samplers accept `&mut dyn Generator`.
///
/// # Example
///
/// ```
/// use randist::generator::{Generator, XorShift128};
///
/// let mut gen = XorShift128::with_seed(7);
/// let a = gen.next_double();
/// assert!(gen.reset());
/// assert_eq!(a, gen.next_double());
/// ```
pub trait Generator: RngCore {
    /// The seed the generator was last initialised or reset with.
    fn seed(&self) -> u32;

    /// Whether [`reset`](Generator::reset) and
    /// [`reset_with`](Generator::reset_with) can restore a known state.
    fn can_reset(&self) -> bool;

    /// Reinitialise the generator with `seed`.
    ///
    /// Returns `false`, leaving the generator untouched, if it cannot be
    /// reset.
    fn reset_with(&mut self, seed: u32) -> bool;

    /// Reinitialise the generator with its current seed, so that it replays
    /// the exact output sequence it produced after construction.
    fn reset(&mut self) -> bool {
        let seed = self.seed();
        self.reset_with(seed)
    }

    /// Return a non-negative integer in `[0, i32::MAX)`.
    fn next_i32(&mut self) -> i32 {
        loop {
            let x = (self.next_u32() >> 1) as i32;
            if x != i32::MAX {
                return x;
            }
        }
    }

    /// Return a non-negative integer in `[0, i32::MAX]`.
    #[inline]
    fn next_inclusive_max(&mut self) -> i32 {
        (self.next_u32() >> 1) as i32
    }

    /// Return an integer in `[0, max)`, or `0` if `max == 0`.
    ///
    /// Fails if `max < 0`.
    fn next_i32_below(&mut self, max: i32) -> Result<i32, Error> {
        if max < 0 {
            return Err(Error::InvalidArgument("max"));
        }
        Ok(bounded_u32(self, max as u32) as i32)
    }

    /// Return an integer in `[min, max)`, or `min` if `min == max`.
    ///
    /// Fails if `min > max`.
    fn next_i32_range(&mut self, min: i32, max: i32) -> Result<i32, Error> {
        if min > max {
            return Err(Error::InvalidArgument("min"));
        }
        // max - min < 2^32 always fits the unsigned range
        let range = max.wrapping_sub(min) as u32;
        Ok(min.wrapping_add(bounded_u32(self, range) as i32))
    }

    /// Return an unsigned integer in `[0, max)`, or `0` if `max == 0`.
    #[inline]
    fn next_u32_below(&mut self, max: u32) -> u32 {
        bounded_u32(self, max)
    }

    /// Return an unsigned integer in `[min, max)`, or `min` if `min == max`.
    ///
    /// Fails if `min > max`.
    fn next_u32_range(&mut self, min: u32, max: u32) -> Result<u32, Error> {
        if min > max {
            return Err(Error::InvalidArgument("min"));
        }
        Ok(min + bounded_u32(self, max - min))
    }

    /// Return a floating-point number in `[0, 1)`.
    ///
    /// Uses the 53 most significant bits of a `u64`, so all values are of
    /// the form `n * 2^-53`.
    #[inline]
    fn next_double(&mut self) -> f64 {
        // Multiply-based method; 53 random bits; [0, 1) interval.
        // We use the most significant bits because for simple RNGs
        // those are usually more random.
        const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
        (self.next_u64() >> 11) as f64 * SCALE
    }

    /// Return a floating-point number in `[0, max)`.
    ///
    /// Fails if `max` is negative, infinite or NaN.
    fn next_double_below(&mut self, max: f64) -> Result<f64, Error> {
        if !(max >= 0.0 && max.is_finite()) {
            return Err(Error::InvalidArgument("max"));
        }
        Ok(self.next_double() * max)
    }

    /// Return a floating-point number in `[min, max)`.
    ///
    /// Fails if `min > max`, either bound is NaN, or `max - min` is not
    /// finite.
    fn next_double_range(&mut self, min: f64, max: f64) -> Result<f64, Error> {
        if !(min <= max) {
            return Err(Error::InvalidArgument("min"));
        }
        let range = max - min;
        if !range.is_finite() {
            return Err(Error::InvalidArgument("max"));
        }
        Ok(min + self.next_double() * range)
    }

    /// Return a fair coin flip.
    #[inline]
    fn next_boolean(&mut self) -> bool {
        // We can compare against an arbitrary bit of an u32 to get a bool.
        // Because the least significant bits of a lower quality RNG can have
        // simple patterns, we compare against the most significant bit.
        (self.next_u32() as i32) < 0
    }

    /// Fill `buf` with random bytes.
    #[inline]
    fn next_bytes(&mut self, buf: &mut [u8]) {
        self.fill_bytes(buf)
    }
}

impl<'a, G: Generator + ?Sized> Generator for &'a mut G {
    #[inline(always)]
    fn seed(&self) -> u32 {
        G::seed(self)
    }

    #[inline(always)]
    fn can_reset(&self) -> bool {
        G::can_reset(self)
    }

    #[inline(always)]
    fn reset_with(&mut self, seed: u32) -> bool {
        G::reset_with(self, seed)
    }

    #[inline(always)]
    fn reset(&mut self) -> bool {
        G::reset(self)
    }

    #[inline(always)]
    fn next_double(&mut self) -> f64 {
        G::next_double(self)
    }

    #[inline(always)]
    fn next_boolean(&mut self) -> bool {
        G::next_boolean(self)
    }
}

/// Sample uniformly from `[0, range)` with Lemire's widening-multiply
/// method, unbiased. A zero `range` yields `0`.
fn bounded_u32<G: Generator + ?Sized>(gen: &mut G, range: u32) -> u32 {
    if range == 0 {
        return 0;
    }
    let thresh = range.wrapping_neg() % range;
    loop {
        let m = u64::from(gen.next_u32()) * u64::from(range);
        if m as u32 >= thresh {
            return (m >> 32) as u32;
        }
    }
}

/// Seed used by generators constructed without an explicit seed.
pub(crate) fn entropy_seed() -> u32 {
    let seed: u32 = rand::random();
    trace!("Generator: seeded from entropy with {}", seed);
    seed
}

#[cfg(test)]
mod test {
    use super::mock::StepGenerator;
    use super::*;

    #[test]
    fn next_double_fixed_points() {
        let mut half = StepGenerator::new(0x8000_0000_0000_0000, 0);
        assert_eq!(half.next_double(), 0.5);
        let mut zero = StepGenerator::new(0, 0);
        assert_eq!(zero.next_double(), 0.0);
        let mut max = StepGenerator::new(u64::MAX, 0);
        assert!(max.next_double() < 1.0);
    }

    #[test]
    fn integer_ranges() {
        let mut gen = XorShift128::with_seed(11);
        for _ in 0..1000 {
            let x = gen.next_i32_range(-5, 5).unwrap();
            assert!((-5..5).contains(&x));
            let y = gen.next_i32_below(3).unwrap();
            assert!((0..3).contains(&y));
            let z = gen.next_u32_range(10, 12).unwrap();
            assert!((10..12).contains(&z));
            assert!(gen.next_i32() >= 0);
        }
        assert_eq!(gen.next_i32_range(4, 4), Ok(4));
        assert_eq!(gen.next_i32_below(0), Ok(0));
        let full = gen.next_i32_range(i32::MIN, i32::MAX).unwrap();
        assert!(full < i32::MAX);
    }

    #[test]
    fn invalid_arguments() {
        let mut gen = XorShift128::with_seed(1);
        assert_eq!(gen.next_i32_below(-1), Err(Error::InvalidArgument("max")));
        assert_eq!(gen.next_i32_range(2, 1), Err(Error::InvalidArgument("min")));
        assert_eq!(gen.next_u32_range(2, 1), Err(Error::InvalidArgument("min")));
        assert!(gen.next_double_below(-1.0).is_err());
        assert!(gen.next_double_below(f64::INFINITY).is_err());
        assert!(gen.next_double_range(1.0, 0.0).is_err());
        assert!(gen.next_double_range(f64::NAN, 0.0).is_err());
        assert!(gen.next_double_range(-f64::MAX, f64::MAX).is_err());
    }

    #[test]
    fn double_ranges() {
        let mut gen = XorShift128::with_seed(3);
        for _ in 0..1000 {
            let x = gen.next_double_range(-2.0, 3.0).unwrap();
            assert!((-2.0..3.0).contains(&x));
            let y = gen.next_double_below(0.25).unwrap();
            assert!((0.0..0.25).contains(&y));
        }
        assert_eq!(gen.next_double_range(1.5, 1.5), Ok(1.5));
    }

    #[test]
    fn boolean_uses_high_bit() {
        let mut gen = StepGenerator::new(0, 1 << 31);
        let flips: Vec<bool> = (0..4).map(|_| gen.next_boolean()).collect();
        assert_eq!(flips, [false, true, false, true]);
    }

    #[test]
    fn mut_ref_and_trait_object() {
        fn draw(gen: &mut dyn Generator) -> f64 {
            gen.next_double()
        }
        let mut a = XorShift128::with_seed(5);
        let mut b = XorShift128::with_seed(5);
        let mut r = &mut b;
        assert_eq!(draw(&mut a), draw(&mut r));
        assert_eq!(r.seed(), 5);
        assert!(r.reset());
    }
}
