// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The log-normal distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::normal;
use crate::distribution::{ContinuousDistribution, Distribution, HasMu, HasSigma, Strategy};
use crate::{Error, Generator};

/// Whether `sigma >= 0` and `mu` is not NaN.
#[inline]
pub fn are_valid_params(mu: f64, sigma: f64) -> bool {
    !mu.is_nan() && sigma >= 0.0
}

/// Draw a sample from `ln N(mu, sigma²)` as `exp(Z * sigma + mu)`.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, mu: f64, sigma: f64) -> f64 {
    (normal::sample(gen, 0.0, 1.0) * sigma + mu).exp()
}

/// Parameters of the log-normal distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LognormalParams {
    /// Mean of the underlying normal distribution.
    pub mu: f64,
    /// Standard deviation of the underlying normal distribution.
    pub sigma: f64,
}

impl Default for Strategy<LognormalParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &LognormalParams| are_valid_params(p.mu, p.sigma),
            |gen: &mut dyn Generator, p: &LognormalParams| sample(gen, p.mu, p.sigma),
        )
    }
}

/// The log-normal distribution `ln N(mu, sigma²)`.
///
/// If `X` is log-normal distributed, then `ln(X)` is `N(mu, sigma²)`
/// distributed. A zero `sigma` degenerates to the constant `exp(mu)`.
///
/// # Example
///
/// ```
/// use randist::continuous::Lognormal;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// // mean 2, standard deviation 3
/// let mut log_normal = Lognormal::new(XorShift128::new(), 2.0, 3.0).unwrap();
/// let v = log_normal.next_double();
/// println!("{} is from an ln N(2, 9) distribution", v)
/// ```
#[derive(Clone, Debug)]
pub struct Lognormal<G> {
    gen: G,
    params: LognormalParams,
    strategy: Strategy<LognormalParams>,
}

impl<G: Generator> Lognormal<G> {
    /// Construct a new `Lognormal` from the parameters of the underlying
    /// normal distribution.
    pub fn new(gen: G, mu: f64, sigma: f64) -> Result<Lognormal<G>, Error> {
        Lognormal::with_strategy(gen, mu, sigma, Strategy::default())
    }

    /// Construct a new `Lognormal` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, mu: f64, sigma: f64, strategy: Strategy<LognormalParams>,
    ) -> Result<Lognormal<G>, Error> {
        let params = LognormalParams { mu, sigma };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("mu, sigma"));
        }
        Ok(Lognormal { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> LognormalParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Lognormal, HasMu<f64>, mu, is_valid_mu, set_mu);
parameter!(Lognormal, HasSigma<f64>, sigma, is_valid_sigma, set_sigma);

impl<G: Generator> Distribution for Lognormal<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        let LognormalParams { mu, sigma } = self.params;
        Ok((mu + sigma * sigma / 2.0).exp())
    }

    fn median(&self) -> Result<f64, Error> {
        Ok(self.params.mu.exp())
    }

    fn variance(&self) -> Result<f64, Error> {
        let LognormalParams { mu, sigma } = self.params;
        let sigma2 = sigma * sigma;
        Ok(sigma2.exp_m1() * (2.0 * mu + sigma2).exp())
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        let LognormalParams { mu, sigma } = self.params;
        Ok(vec![(mu - sigma * sigma).exp()])
    }
}

impl<G: Generator> ContinuousDistribution for Lognormal<G> {
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
    fn test_log_normal() {
        let mut lnorm = Lognormal::new(gen(3), 10.0, 10.0).unwrap();
        for _ in 0..1000 {
            assert!(lnorm.next_double() >= 0.0);
        }
    }

    #[test]
    fn test_log_normal_invalid_params() {
        assert!(Lognormal::new(gen(1), 10.0, -1.0).is_err());
        assert!(Lognormal::new(gen(1), f64::NAN, 1.0).is_err());
        assert!(Lognormal::new(gen(1), 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_degenerate() {
        let mut lnorm = Lognormal::new(gen(1), 1.0, 0.0).unwrap();
        for _ in 0..10 {
            assert_eq!(lnorm.next_double(), 1f64.exp());
        }
        assert_eq!(lnorm.variance(), Ok(0.0));
    }

    #[test]
    fn test_median() {
        let mut lnorm = Lognormal::new(gen(13), 0.5, 0.25).unwrap();
        let mut samples: Vec<f64> = (0..20_001).map(|_| lnorm.next_double()).collect();
        samples.sort_by(|a, b| a.total_cmp(b));
        let median = samples[10_000];
        assert!((median - 0.5f64.exp()).abs() < 0.02, "median {}", median);
        let (mean, _) = moments(20_000, || lnorm.next_double());
        assert!((mean - lnorm.mean().unwrap()).abs() < 0.02, "mean {}", mean);
    }
}
