// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Laplace distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasMu, Strategy};
use crate::utils::open_closed01;
use crate::{Error, Generator};

/// Whether the scale `alpha` is positive and the location `mu` is not NaN.
#[inline]
pub fn are_valid_params(alpha: f64, mu: f64) -> bool {
    alpha > 0.0 && !mu.is_nan()
}

/// Draw a sample from `Laplace(alpha, mu)`: an exponential variate with
/// mean `alpha`, reflected around `mu` by a fair coin flip.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, mu: f64) -> f64 {
    let e = -alpha * open_closed01(gen).ln();
    if gen.next_boolean() {
        mu + e
    } else {
        mu - e
    }
}

/// Parameters of the Laplace distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaplaceParams {
    /// Scale.
    pub alpha: f64,
    /// Location.
    pub mu: f64,
}

impl Default for Strategy<LaplaceParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &LaplaceParams| are_valid_params(p.alpha, p.mu),
            |gen: &mut dyn Generator, p: &LaplaceParams| sample(gen, p.alpha, p.mu),
        )
    }
}

/// The Laplace (double exponential) distribution with scale `alpha` and
/// location `mu`.
#[derive(Clone, Debug)]
pub struct Laplace<G> {
    gen: G,
    params: LaplaceParams,
    strategy: Strategy<LaplaceParams>,
}

impl<G: Generator> Laplace<G> {
    /// Construct a new `Laplace` with scale `alpha` and location `mu`.
    pub fn new(gen: G, alpha: f64, mu: f64) -> Result<Laplace<G>, Error> {
        Laplace::with_strategy(gen, alpha, mu, Strategy::default())
    }

    /// Construct a new `Laplace` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, mu: f64, strategy: Strategy<LaplaceParams>,
    ) -> Result<Laplace<G>, Error> {
        let params = LaplaceParams { alpha, mu };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, mu"));
        }
        Ok(Laplace { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> LaplaceParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Laplace, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(Laplace, HasMu<f64>, mu, is_valid_mu, set_mu);

impl<G: Generator> Distribution for Laplace<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(f64::NEG_INFINITY)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(self.params.mu)
    }

    fn median(&self) -> Result<f64, Error> {
        Ok(self.params.mu)
    }

    fn variance(&self) -> Result<f64, Error> {
        Ok(2.0 * self.params.alpha * self.params.alpha)
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![self.params.mu])
    }
}

impl<G: Generator> ContinuousDistribution for Laplace<G> {
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
    fn invalid() {
        assert!(Laplace::new(gen(1), 0.0, 0.0).is_err());
        assert!(Laplace::new(gen(1), 1.0, f64::NAN).is_err());
        let mut laplace = Laplace::new(gen(1), 1.0, 0.0).unwrap();
        assert!(laplace.set_mu(f64::NAN).is_err());
        assert_eq!(laplace.mu(), 0.0);
    }

    #[test]
    fn moments_match() {
        let mut laplace = Laplace::new(gen(15), 1.5, -2.0).unwrap();
        let (mean, var) = moments(20_000, || laplace.next_double());
        assert!((mean + 2.0).abs() < 0.07, "mean {}", mean);
        assert!((var - 4.5).abs() < 0.35, "variance {}", var);
    }

    #[test]
    fn both_sides() {
        let mut laplace = Laplace::new(gen(3), 1.0, 10.0).unwrap();
        let above = (0..1000).filter(|_| laplace.next_double() > 10.0).count();
        assert!(above > 400 && above < 600, "{}", above);
    }
}
