// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The discrete uniform distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{
    ContinuousDistribution, DiscreteDistribution, Distribution, HasAlpha, HasBeta, Strategy,
};
use crate::{Error, Generator};

/// Whether `alpha <= beta` and `beta < i32::MAX`.
#[inline]
pub fn are_valid_params(alpha: i32, beta: i32) -> bool {
    alpha <= beta && beta < i32::MAX
}

/// Draw an integer uniformly from `[alpha, beta]`, both ends included.
#[inline]
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: i32, beta: i32) -> i32 {
    // at most 2^32 - 1 values since beta < i32::MAX
    let range = (beta.wrapping_sub(alpha) as u32).wrapping_add(1);
    alpha.wrapping_add(gen.next_u32_below(range) as i32)
}

/// Parameters of the discrete uniform distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscreteUniformParams {
    /// Lowest value.
    pub alpha: i32,
    /// Highest value.
    pub beta: i32,
}

impl Default for Strategy<DiscreteUniformParams, i32> {
    fn default() -> Self {
        Strategy::new(
            |p: &DiscreteUniformParams| are_valid_params(p.alpha, p.beta),
            |gen: &mut dyn Generator, p: &DiscreteUniformParams| sample(gen, p.alpha, p.beta),
        )
    }
}

/// The discrete uniform distribution over the integers `alpha..=beta`.
///
/// # Example
///
/// ```
/// use randist::discrete::DiscreteUniform;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut die = DiscreteUniform::new(XorShift128::new(), 1, 6).unwrap();
/// let throw = die.next();
/// assert!((1..=6).contains(&throw));
/// ```
#[derive(Clone, Debug)]
pub struct DiscreteUniform<G> {
    gen: G,
    params: DiscreteUniformParams,
    strategy: Strategy<DiscreteUniformParams, i32>,
}

impl<G: Generator> DiscreteUniform<G> {
    /// Construct a new `DiscreteUniform` over `alpha..=beta`.
    pub fn new(gen: G, alpha: i32, beta: i32) -> Result<DiscreteUniform<G>, Error> {
        DiscreteUniform::with_strategy(gen, alpha, beta, Strategy::default())
    }

    /// Construct a new `DiscreteUniform` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: i32, beta: i32, strategy: Strategy<DiscreteUniformParams, i32>,
    ) -> Result<DiscreteUniform<G>, Error> {
        let params = DiscreteUniformParams { alpha, beta };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, beta"));
        }
        Ok(DiscreteUniform { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> DiscreteUniformParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(DiscreteUniform, HasAlpha<i32>, alpha, is_valid_alpha, set_alpha);
parameter!(DiscreteUniform, HasBeta<i32>, beta, is_valid_beta, set_beta);

impl<G: Generator> Distribution for DiscreteUniform<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(f64::from(self.params.alpha))
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::from(self.params.beta))
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok((f64::from(self.params.alpha) + f64::from(self.params.beta)) / 2.0)
    }

    fn median(&self) -> Result<f64, Error> {
        self.mean()
    }

    fn variance(&self) -> Result<f64, Error> {
        let n = f64::from(self.params.beta) - f64::from(self.params.alpha) + 1.0;
        Ok((n * n - 1.0) / 12.0)
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Err(Error::UndefinedStatistic("mode"))
    }
}

impl<G: Generator> DiscreteDistribution for DiscreteUniform<G> {
    #[inline]
    fn next(&mut self) -> i32 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

impl<G: Generator> ContinuousDistribution for DiscreteUniform<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        f64::from(self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::mock::StepGenerator;
    use crate::test::gen;

    #[test]
    fn test_bounds() {
        let mut die = DiscreteUniform::new(gen(1), -3, 3).unwrap();
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let v = die.next();
            assert!((-3..=3).contains(&v));
            seen[(v + 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_single_value() {
        let mut d = DiscreteUniform::new(gen(2), 42, 42).unwrap();
        assert!(d.integers().take(20).all(|v| v == 42));
        assert_eq!(d.variance(), Ok(0.0));
    }

    #[test]
    fn test_full_width() {
        // low bits 0xFFFF_FFFF with range 2^32 - 1 map to the top value
        let mut gen = StepGenerator::new(0xFFFF_FFFF, 0);
        assert_eq!(sample(&mut gen, i32::MIN, i32::MAX - 1), i32::MAX - 1);
        let mut gen = StepGenerator::new(1, 0);
        assert_eq!(sample(&mut gen, i32::MIN, i32::MAX - 1), i32::MIN);
    }

    #[test]
    fn test_invalid() {
        assert!(DiscreteUniform::new(gen(1), 5, 4).is_err());
        assert!(DiscreteUniform::new(gen(1), 0, i32::MAX).is_err());
        let mut d = DiscreteUniform::new(gen(1), 0, 10).unwrap();
        assert!(!d.is_valid_alpha(11));
        assert!(d.set_beta(-1).is_err());
        assert_eq!(d.mode(), Err(Error::UndefinedStatistic("mode")));
        assert_eq!(d.mean(), Ok(5.0));
    }
}
