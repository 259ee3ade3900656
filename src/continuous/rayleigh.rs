// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Rayleigh distribution.

use core::f64::consts::{LN_2, PI};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::normal;
use crate::distribution::{ContinuousDistribution, Distribution, HasSigma, Strategy};
use crate::{Error, Generator};

/// Whether the scale `sigma` is positive.
#[inline]
pub fn are_valid_params(sigma: f64) -> bool {
    sigma > 0.0
}

/// Draw a sample from `Rayleigh(sigma)`: the length of a vector whose two
/// components are independent `N(0, sigma²)` variates.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, sigma: f64) -> f64 {
    let n1 = normal::sample(gen, 0.0, sigma);
    let n2 = normal::sample(gen, 0.0, sigma);
    (n1 * n1 + n2 * n2).sqrt()
}

/// Parameters of the Rayleigh distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayleighParams {
    /// Scale.
    pub sigma: f64,
}

impl Default for Strategy<RayleighParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &RayleighParams| are_valid_params(p.sigma),
            |gen: &mut dyn Generator, p: &RayleighParams| sample(gen, p.sigma),
        )
    }
}

/// The Rayleigh distribution with scale `sigma`.
#[derive(Clone, Debug)]
pub struct Rayleigh<G> {
    gen: G,
    params: RayleighParams,
    strategy: Strategy<RayleighParams>,
}

impl<G: Generator> Rayleigh<G> {
    /// Construct a new `Rayleigh` with scale `sigma`.
    pub fn new(gen: G, sigma: f64) -> Result<Rayleigh<G>, Error> {
        Rayleigh::with_strategy(gen, sigma, Strategy::default())
    }

    /// Construct a new `Rayleigh` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, sigma: f64, strategy: Strategy<RayleighParams>,
    ) -> Result<Rayleigh<G>, Error> {
        let params = RayleighParams { sigma };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("sigma"));
        }
        Ok(Rayleigh { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> RayleighParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Rayleigh, HasSigma<f64>, sigma, is_valid_sigma, set_sigma);

impl<G: Generator> Distribution for Rayleigh<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(self.params.sigma * (PI / 2.0).sqrt())
    }

    fn median(&self) -> Result<f64, Error> {
        Ok(self.params.sigma * (2.0 * LN_2).sqrt())
    }

    fn variance(&self) -> Result<f64, Error> {
        let sigma = self.params.sigma;
        Ok(sigma * sigma * (4.0 - PI) / 2.0)
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![self.params.sigma])
    }
}

impl<G: Generator> ContinuousDistribution for Rayleigh<G> {
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
    fn test_rayleigh() {
        let mut r = Rayleigh::new(gen(5), 2.0).unwrap();
        for _ in 0..1000 {
            assert!(r.next_double() >= 0.0);
        }
        assert!(Rayleigh::new(gen(5), 0.0).is_err());
        assert!(Rayleigh::new(gen(5), f64::NAN).is_err());
    }

    #[test]
    fn test_moments() {
        let mut r = Rayleigh::new(gen(6), 2.0).unwrap();
        let (mean, var) = moments(20_000, || r.next_double());
        assert!((mean - r.mean().unwrap()).abs() < 0.04, "mean {}", mean);
        assert!((var - r.variance().unwrap()).abs() < 0.1, "variance {}", var);
        assert_eq!(r.mode(), Ok(vec![2.0]));
    }
}
