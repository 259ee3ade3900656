// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The exponential distribution.

use core::f64::consts::LN_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasLambda, Strategy};
use crate::{Error, Generator};

/// Whether `lambda > 0`.
#[inline]
pub fn are_valid_params(lambda: f64) -> bool {
    lambda > 0.0
}

/// Draw a sample from `Exp(lambda)` by inversion: `-ln(1 - u) / lambda`.
///
/// `1 - u` lies in `(0, 1]`, so a single uniform draw is consumed per
/// sample and the logarithm is always finite.
#[inline]
pub fn sample<G: Generator + ?Sized>(gen: &mut G, lambda: f64) -> f64 {
    -(1.0 - gen.next_double()).ln() / lambda
}

/// Parameters of the exponential distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExponentialParams {
    /// Rate.
    pub lambda: f64,
}

impl Default for Strategy<ExponentialParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &ExponentialParams| are_valid_params(p.lambda),
            |gen: &mut dyn Generator, p: &ExponentialParams| sample(gen, p.lambda),
        )
    }
}

/// The exponential distribution `Exp(lambda)`.
///
/// This distribution describes the time between events in a Poisson
/// process, i.e. a process in which events occur continuously and
/// independently at a constant average rate.
///
/// # Example
///
/// ```
/// use randist::continuous::Exponential;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut exp = Exponential::new(XorShift128::with_seed(1), 2.0).unwrap();
/// assert!(exp.next_double() >= 0.0);
/// assert_eq!(exp.mean(), Ok(0.5));
/// ```
#[derive(Clone, Debug)]
pub struct Exponential<G> {
    gen: G,
    params: ExponentialParams,
    strategy: Strategy<ExponentialParams>,
}

impl<G: Generator> Exponential<G> {
    /// Construct a new `Exponential` with the given rate.
    pub fn new(gen: G, lambda: f64) -> Result<Exponential<G>, Error> {
        Exponential::with_strategy(gen, lambda, Strategy::default())
    }

    /// Construct a new `Exponential` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, lambda: f64, strategy: Strategy<ExponentialParams>,
    ) -> Result<Exponential<G>, Error> {
        let params = ExponentialParams { lambda };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("lambda"));
        }
        Ok(Exponential { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> ExponentialParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Exponential, HasLambda<f64>, lambda, is_valid_lambda, set_lambda);

impl<G: Generator> Distribution for Exponential<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(1.0 / self.params.lambda)
    }

    fn median(&self) -> Result<f64, Error> {
        Ok(LN_2 / self.params.lambda)
    }

    fn variance(&self) -> Result<f64, Error> {
        Ok(1.0 / (self.params.lambda * self.params.lambda))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![0.0])
    }
}

impl<G: Generator> ContinuousDistribution for Exponential<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::mock::StepGenerator;
    use crate::test::{gen, moments};

    #[test]
    fn test_exp() {
        let mut exp = Exponential::new(gen(210), 10.0).unwrap();
        for _ in 0..1000 {
            assert!(exp.next_double() >= 0.0);
        }
    }

    #[test]
    fn test_zero() {
        let mut gen = StepGenerator::new(0, 0);
        assert_eq!(sample(&mut gen, 2.0), 0.0);
        let mut gen = StepGenerator::new(1 << 63, 0);
        assert!((sample(&mut gen, 1.0) - LN_2).abs() < 1e-15);
    }

    #[test]
    fn test_infinite_rate() {
        let mut gen = StepGenerator::new(1 << 63, 0);
        assert_eq!(sample(&mut gen, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_exp_invalid_lambda() {
        assert_eq!(Exponential::new(gen(1), 0.0).unwrap_err(), Error::InvalidParameter("lambda"));
        assert!(Exponential::new(gen(1), -10.0).is_err());
        assert!(Exponential::new(gen(1), f64::NAN).is_err());
    }

    #[test]
    fn test_moments() {
        let mut exp = Exponential::new(gen(4), 2.0).unwrap();
        let (mean, var) = moments(20_000, || exp.next_double());
        assert!((mean - 0.5).abs() < 0.02, "mean {}", mean);
        assert!((var - 0.25).abs() < 0.03, "variance {}", var);
        assert_eq!(exp.variance(), Ok(0.25));
    }

    #[test]
    fn test_set_lambda() {
        let mut exp = Exponential::new(gen(1), 1.0).unwrap();
        assert!(exp.set_lambda(0.0).is_err());
        assert_eq!(exp.lambda(), 1.0);
        exp.set_lambda(4.0).unwrap();
        assert_eq!(exp.mean(), Ok(0.25));
    }
}
