// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The geometric distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::continuous::exponential;
use crate::distribution::{
    ContinuousDistribution, DiscreteDistribution, Distribution, HasAlpha, Strategy,
};
use crate::{Error, Generator};

/// Whether the success probability `alpha` lies in `(0, 1]`.
#[inline]
pub fn are_valid_params(alpha: f64) -> bool {
    alpha > 0.0 && alpha <= 1.0
}

/// Draw the number of trials up to and including the first success.
///
/// This is `1 + floor(E)` with `E ~ Exp(-ln(1 - alpha))`. Results beyond
/// `i32::MAX` saturate.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64) -> i32 {
    if alpha == 1.0 {
        return 1;
    }
    let lambda = -(-alpha).ln_1p();
    let failures = exponential::sample(gen, lambda).floor();
    // `as` saturates
    (failures as i32).saturating_add(1)
}

/// Parameters of the geometric distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometricParams {
    /// Probability of success of each trial.
    pub alpha: f64,
}

impl Default for Strategy<GeometricParams, i32> {
    fn default() -> Self {
        Strategy::new(
            |p: &GeometricParams| are_valid_params(p.alpha),
            |gen: &mut dyn Generator, p: &GeometricParams| sample(gen, p.alpha),
        )
    }
}

/// The geometric distribution: the number of Bernoulli trials of success
/// probability `alpha` needed to get one success, supported on `1, 2, …`.
///
/// # Example
///
/// ```
/// use randist::discrete::Geometric;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut geo = Geometric::new(XorShift128::new(), 0.25).unwrap();
/// assert!(geo.next() >= 1);
/// ```
#[derive(Clone, Debug)]
pub struct Geometric<G> {
    gen: G,
    params: GeometricParams,
    strategy: Strategy<GeometricParams, i32>,
}

impl<G: Generator> Geometric<G> {
    /// Construct a new `Geometric` with success probability `alpha`.
    pub fn new(gen: G, alpha: f64) -> Result<Geometric<G>, Error> {
        Geometric::with_strategy(gen, alpha, Strategy::default())
    }

    /// Construct a new `Geometric` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, strategy: Strategy<GeometricParams, i32>,
    ) -> Result<Geometric<G>, Error> {
        let params = GeometricParams { alpha };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha"));
        }
        Ok(Geometric { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> GeometricParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Geometric, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);

impl<G: Generator> Distribution for Geometric<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(1.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::from(i32::MAX))
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(1.0 / self.params.alpha)
    }

    fn median(&self) -> Result<f64, Error> {
        let alpha = self.params.alpha;
        if alpha == 1.0 {
            return Ok(1.0);
        }
        Ok((-1.0 / (1.0 - alpha).log2()).ceil())
    }

    fn variance(&self) -> Result<f64, Error> {
        let alpha = self.params.alpha;
        Ok((1.0 - alpha) / (alpha * alpha))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![1.0])
    }
}

impl<G: Generator> DiscreteDistribution for Geometric<G> {
    #[inline]
    fn next(&mut self) -> i32 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

impl<G: Generator> ContinuousDistribution for Geometric<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        f64::from(self.next())
    }
}
