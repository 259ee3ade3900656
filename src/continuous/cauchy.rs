// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Cauchy distribution.

use core::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasGamma, Strategy};
use crate::{Error, Generator};

/// Whether the location `alpha` is not NaN and the scale `gamma` is
/// positive.
#[inline]
pub fn are_valid_params(alpha: f64, gamma: f64) -> bool {
    !alpha.is_nan() && gamma > 0.0
}

/// Draw a sample from `Cauchy(alpha, gamma)` by inversion.
#[inline]
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, gamma: f64) -> f64 {
    let x = gen.next_double();
    // π/2 is not exactly representable, so even x = 0 gives a finite value
    alpha + gamma * (PI * (x - 0.5)).tan()
}

/// Parameters of the Cauchy distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CauchyParams {
    /// Location (median).
    pub alpha: f64,
    /// Scale (half width at half maximum).
    pub gamma: f64,
}

impl Default for Strategy<CauchyParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &CauchyParams| are_valid_params(p.alpha, p.gamma),
            |gen: &mut dyn Generator, p: &CauchyParams| sample(gen, p.alpha, p.gamma),
        )
    }
}

/// The Cauchy distribution with location `alpha` and scale `gamma`.
///
/// Its mean and variance do not exist, so querying them always fails with
/// [`Error::UndefinedStatistic`].
///
/// # Example
///
/// ```
/// use randist::continuous::Cauchy;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut cau = Cauchy::new(XorShift128::new(), 2.0, 5.0).unwrap();
/// let v = cau.next_double();
/// println!("{} is from a Cauchy(2, 5) distribution", v);
/// assert!(cau.mean().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Cauchy<G> {
    gen: G,
    params: CauchyParams,
    strategy: Strategy<CauchyParams>,
}

impl<G: Generator> Cauchy<G> {
    /// Construct a new `Cauchy` with location `alpha` and scale `gamma`.
    pub fn new(gen: G, alpha: f64, gamma: f64) -> Result<Cauchy<G>, Error> {
        Cauchy::with_strategy(gen, alpha, gamma, Strategy::default())
    }

    /// Construct a new `Cauchy` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, gamma: f64, strategy: Strategy<CauchyParams>,
    ) -> Result<Cauchy<G>, Error> {
        let params = CauchyParams { alpha, gamma };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, gamma"));
        }
        Ok(Cauchy { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> CauchyParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Cauchy, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(Cauchy, HasGamma<f64>, gamma, is_valid_gamma, set_gamma);

impl<G: Generator> Distribution for Cauchy<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(f64::NEG_INFINITY)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        Err(Error::UndefinedStatistic("mean"))
    }

    fn median(&self) -> Result<f64, Error> {
        Ok(self.params.alpha)
    }

    fn variance(&self) -> Result<f64, Error> {
        Err(Error::UndefinedStatistic("variance"))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![self.params.alpha])
    }
}

impl<G: Generator> ContinuousDistribution for Cauchy<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}
