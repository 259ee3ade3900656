// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Poisson distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::continuous::cauchy;
use crate::distribution::{
    ContinuousDistribution, DiscreteDistribution, Distribution, HasLambda, Strategy,
};
use crate::utils::log_gamma;
use crate::{Error, Generator};

/// Below this rate the multiplication method is used.
const KNUTH_LIMIT: f64 = 12.0;

/// Whether the rate `lambda` is positive and finite.
#[inline]
pub fn are_valid_params(lambda: f64) -> bool {
    lambda > 0.0 && lambda.is_finite()
}

/// Draw a sample from `Poisson(lambda)`.
///
/// Small rates multiply uniforms until the product falls below
/// `exp(-lambda)`; large rates use rejection against a Cauchy comparison
/// distribution. Samples beyond `i32::MAX` saturate.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, lambda: f64) -> i32 {
    // using the algorithm from Numerical Recipes in C
    if lambda < KNUTH_LIMIT {
        let exp_lambda = (-lambda).exp();
        let mut result = 0;
        let mut p = 1.0;
        while p > exp_lambda {
            p *= gen.next_double();
            result += 1;
        }
        return result - 1;
    }

    let log_lambda = lambda.ln();
    let sqrt_2lambda = (2.0 * lambda).sqrt();
    let magic_val = lambda * log_lambda - log_gamma(1.0 + lambda);
    loop {
        let mut comp_dev;
        let mut result;
        loop {
            comp_dev = cauchy::sample(gen, 0.0, 1.0);
            // shift the peak of the comparison distribution
            result = sqrt_2lambda * comp_dev + lambda;
            if result >= 0.0 {
                break;
            }
        }
        result = result.floor();

        // the ratio of the Poisson density to the comparison density, scaled
        // by 0.9 so that it stays below 1
        let check = 0.9
            * (1.0 + comp_dev * comp_dev)
            * (result * log_lambda - log_gamma(1.0 + result) - magic_val).exp();

        if gen.next_double() <= check {
            // `as` saturates
            return result as i32;
        }
    }
}

/// Parameters of the Poisson distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoissonParams {
    /// Expected number of events.
    pub lambda: f64,
}

impl Default for Strategy<PoissonParams, i32> {
    fn default() -> Self {
        Strategy::new(
            |p: &PoissonParams| are_valid_params(p.lambda),
            |gen: &mut dyn Generator, p: &PoissonParams| sample(gen, p.lambda),
        )
    }
}

/// The Poisson distribution `Poisson(lambda)`.
///
/// This distribution has a density function:
/// `f(k) = lambda^k * exp(-lambda) / k!` for `k >= 0`.
///
/// # Example
///
/// ```
/// use randist::discrete::Poisson;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut poi = Poisson::new(XorShift128::new(), 2.0).unwrap();
/// let v = poi.next();
/// println!("{} is from a Poisson(2) distribution", v);
/// ```
#[derive(Clone, Debug)]
pub struct Poisson<G> {
    gen: G,
    params: PoissonParams,
    strategy: Strategy<PoissonParams, i32>,
}

impl<G: Generator> Poisson<G> {
    /// Construct a new `Poisson` with the given rate `lambda`.
    pub fn new(gen: G, lambda: f64) -> Result<Poisson<G>, Error> {
        Poisson::with_strategy(gen, lambda, Strategy::default())
    }

    /// Construct a new `Poisson` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, lambda: f64, strategy: Strategy<PoissonParams, i32>,
    ) -> Result<Poisson<G>, Error> {
        let params = PoissonParams { lambda };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("lambda"));
        }
        Ok(Poisson { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> PoissonParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Poisson, HasLambda<f64>, lambda, is_valid_lambda, set_lambda);

impl<G: Generator> Distribution for Poisson<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::from(i32::MAX))
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(self.params.lambda)
    }

    fn median(&self) -> Result<f64, Error> {
        let lambda = self.params.lambda;
        Ok((lambda + 1.0 / 3.0 - 0.02 / lambda).floor())
    }

    fn variance(&self) -> Result<f64, Error> {
        Ok(self.params.lambda)
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        let lambda = self.params.lambda;
        if lambda.fract() == 0.0 {
            Ok(vec![lambda - 1.0, lambda])
        } else {
            Ok(vec![lambda.floor()])
        }
    }
}

impl<G: Generator> DiscreteDistribution for Poisson<G> {
    #[inline]
    fn next(&mut self) -> i32 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

impl<G: Generator> ContinuousDistribution for Poisson<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        f64::from(self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{gen, moments};

    fn test_poisson_avg(lambda: f64, seed: u32) {
        let mut poisson = Poisson::new(gen(seed), lambda).unwrap();
        let mut sum = 0;
        for _ in 0..1000 {
            sum += poisson.next();
        }
        let avg = f64::from(sum) / 1000.0;
        // not 100% certain, but probable enough
        assert!((avg - lambda).abs() < 0.5, "average {}", avg);
    }

    #[test]
    fn test_poisson_10() {
        test_poisson_avg(10.0, 123);
    }

    #[test]
    fn test_poisson_15() {
        // Take the 'high expected values' path
        test_poisson_avg(15.0, 123);
    }

    #[test]
    fn test_poisson_large_variance() {
        let mut poisson = Poisson::new(gen(7), 200.0).unwrap();
        let (mean, var) = moments(20_000, || poisson.next_double());
        assert!((mean - 200.0).abs() < 0.5, "mean {}", mean);
        assert!((var - 200.0).abs() < 15.0, "variance {}", var);
    }

    #[test]
    fn test_poisson_invalid_lambda() {
        assert!(Poisson::new(gen(1), 0.0).is_err());
        assert!(Poisson::new(gen(1), -10.0).is_err());
        assert!(Poisson::new(gen(1), f64::NAN).is_err());
        assert!(Poisson::new(gen(1), f64::INFINITY).is_err());
    }

    #[test]
    fn test_poisson_statistics() {
        let mut poisson = Poisson::new(gen(1), 3.0).unwrap();
        assert_eq!(poisson.mode(), Ok(vec![2.0, 3.0]));
        assert_eq!(poisson.median(), Ok(3.0));
        poisson.set_lambda(2.5).unwrap();
        assert_eq!(poisson.mode(), Ok(vec![2.0]));
        assert_eq!(poisson.variance(), Ok(2.5));
    }
}
