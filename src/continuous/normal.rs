// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The normal distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasMu, HasSigma, Strategy};
use crate::{Error, Generator};

/// Whether `mu` and `sigma` describe a valid normal distribution:
/// `sigma > 0` and `mu` is not NaN.
#[inline]
pub fn are_valid_params(mu: f64, sigma: f64) -> bool {
    !mu.is_nan() && sigma > 0.0
}

/// Draw a sample from `N(mu, sigma²)`.
///
/// Uses the polar method of Marsaglia: a point is drawn uniformly from the
/// square `[-1, 1)²` until it falls inside the unit circle (and is not the
/// origin), which yields two independent normal deviates. A fair coin flip
/// picks one of them; the other is discarded, so every call consumes the
/// accepted pair plus one boolean.
///
/// Parameters are not checked; see [`are_valid_params`].
pub fn sample<G: Generator + ?Sized>(gen: &mut G, mu: f64, sigma: f64) -> f64 {
    let (v1, v2, w) = loop {
        let v1 = 2.0 * gen.next_double() - 1.0;
        let v2 = 2.0 * gen.next_double() - 1.0;
        let w = v1 * v1 + v2 * v2;
        // w == 0 would take the log of zero
        if w <= 1.0 && w != 0.0 {
            break (v1, v2, w);
        }
    };
    let y = (-2.0 * w.ln() / w).sqrt() * sigma;
    if gen.next_boolean() {
        v1 * y + mu
    } else {
        v2 * y + mu
    }
}

/// Parameters of the normal distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalParams {
    /// Mean (location).
    pub mu: f64,
    /// Standard deviation (scale).
    pub sigma: f64,
}

impl Default for Strategy<NormalParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &NormalParams| are_valid_params(p.mu, p.sigma),
            |gen: &mut dyn Generator, p: &NormalParams| sample(gen, p.mu, p.sigma),
        )
    }
}

/// The normal distribution `N(mu, sigma²)`.
///
/// # Example
///
/// ```
/// use randist::continuous::Normal;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// // mean 2, standard deviation 3
/// let mut normal = Normal::new(XorShift128::new(), 2.0, 3.0).unwrap();
/// let v = normal.next_double();
/// println!("{} is from a N(2, 9) distribution", v)
/// ```
#[derive(Clone, Debug)]
pub struct Normal<G> {
    gen: G,
    params: NormalParams,
    strategy: Strategy<NormalParams>,
}

impl<G: Generator> Normal<G> {
    /// Construct a new `Normal` distribution with the given mean and
    /// standard deviation.
    pub fn new(gen: G, mu: f64, sigma: f64) -> Result<Normal<G>, Error> {
        Normal::with_strategy(gen, mu, sigma, Strategy::default())
    }

    /// Construct a new `Normal` distribution sampled through `strategy`.
    pub fn with_strategy(
        gen: G, mu: f64, sigma: f64, strategy: Strategy<NormalParams>,
    ) -> Result<Normal<G>, Error> {
        let params = NormalParams { mu, sigma };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("mu, sigma"));
        }
        Ok(Normal { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> NormalParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Normal, HasMu<f64>, mu, is_valid_mu, set_mu);
parameter!(Normal, HasSigma<f64>, sigma, is_valid_sigma, set_sigma);

impl<G: Generator> Distribution for Normal<G> {
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
        Ok(self.params.sigma * self.params.sigma)
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![self.params.mu])
    }
}

impl<G: Generator> ContinuousDistribution for Normal<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}
