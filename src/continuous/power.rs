// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The power distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasBeta, Strategy};
use crate::{Error, Generator};

/// Whether `alpha > 0` and `beta > 0`.
#[inline]
pub fn are_valid_params(alpha: f64, beta: f64) -> bool {
    alpha > 0.0 && beta > 0.0
}

/// Draw a sample from `Power(alpha, beta)` by inversion of
/// `F(x) = (beta * x)^alpha`.
#[inline]
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, beta: f64) -> f64 {
    gen.next_double().powf(1.0 / alpha) / beta
}

/// Parameters of the power distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerParams {
    /// Shape.
    pub alpha: f64,
    /// Inverse of the upper bound of the support.
    pub beta: f64,
}

impl Default for Strategy<PowerParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &PowerParams| are_valid_params(p.alpha, p.beta),
            |gen: &mut dyn Generator, p: &PowerParams| sample(gen, p.alpha, p.beta),
        )
    }
}

/// The power distribution on `[0, 1 / beta]` with density
/// `f(x) = alpha * beta^alpha * x^(alpha - 1)`.
#[derive(Clone, Debug)]
pub struct Power<G> {
    gen: G,
    params: PowerParams,
    strategy: Strategy<PowerParams>,
}

impl<G: Generator> Power<G> {
    /// Construct a new `Power` distribution.
    pub fn new(gen: G, alpha: f64, beta: f64) -> Result<Power<G>, Error> {
        Power::with_strategy(gen, alpha, beta, Strategy::default())
    }

    /// Construct a new `Power` distribution sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, beta: f64, strategy: Strategy<PowerParams>,
    ) -> Result<Power<G>, Error> {
        let params = PowerParams { alpha, beta };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, beta"));
        }
        Ok(Power { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> PowerParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Power, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(Power, HasBeta<f64>, beta, is_valid_beta, set_beta);

impl<G: Generator> Distribution for Power<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(1.0 / self.params.beta)
    }

    fn mean(&self) -> Result<f64, Error> {
        let PowerParams { alpha, beta } = self.params;
        Ok(alpha / (beta * (alpha + 1.0)))
    }

    fn median(&self) -> Result<f64, Error> {
        let PowerParams { alpha, beta } = self.params;
        Ok(0.5f64.powf(1.0 / alpha) / beta)
    }

    fn variance(&self) -> Result<f64, Error> {
        let PowerParams { alpha, beta } = self.params;
        let a1 = alpha + 1.0;
        Ok(alpha / ((alpha + 2.0) * a1 * a1 * beta * beta))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        let PowerParams { alpha, beta } = self.params;
        if alpha > 1.0 {
            Ok(vec![1.0 / beta])
        } else if alpha < 1.0 {
            Ok(vec![0.0])
        } else {
            Err(Error::UndefinedStatistic("mode"))
        }
    }
}

impl<G: Generator> ContinuousDistribution for Power<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{gen, moments};

    #[test]
    fn support() {
        let mut power = Power::new(gen(4), 3.0, 2.0).unwrap();
        for _ in 0..1000 {
            let x = power.next_double();
            assert!((0.0..=0.5).contains(&x), "{}", x);
        }
        assert_eq!(power.maximum(), Ok(0.5));
    }

    #[test]
    fn invalid() {
        assert!(Power::new(gen(1), 0.0, 1.0).is_err());
        assert!(Power::new(gen(1), 1.0, 0.0).is_err());
    }

    #[test]
    fn modes() {
        let mut power = Power::new(gen(1), 2.0, 4.0).unwrap();
        assert_eq!(power.mode(), Ok(vec![0.25]));
        power.set_alpha(0.5).unwrap();
        assert_eq!(power.mode(), Ok(vec![0.0]));
        power.set_alpha(1.0).unwrap();
        assert!(power.mode().is_err());
    }

    #[test]
    fn moments_match() {
        let mut power = Power::new(gen(8), 3.0, 2.0).unwrap();
        let (mean, var) = moments(20_000, || power.next_double());
        assert!((mean - 0.375).abs() < 0.005, "mean {}", mean);
        assert!((var - power.variance().unwrap()).abs() < 0.002, "variance {}", var);
    }
}
