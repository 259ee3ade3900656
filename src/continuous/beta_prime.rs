// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The beta prime distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::beta;
use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasBeta, Strategy};
use crate::{Error, Generator};

/// Whether `alpha > 1` and `beta > 1`.
#[inline]
pub fn are_valid_params(alpha: f64, beta: f64) -> bool {
    alpha > 1.0 && beta > 1.0
}

/// Draw a sample from `β'(alpha, beta)` as `B / (1 - B)` with
/// `B ~ Beta(alpha, beta)`; `+∞` when `B == 1`.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, beta: f64) -> f64 {
    let b = beta::sample(gen, alpha, beta);
    let tmp = 1.0 - b;
    if tmp == 0.0 {
        return f64::INFINITY;
    }
    b / tmp
}

/// Parameters of the beta prime distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BetaPrimeParams {
    /// First shape parameter.
    pub alpha: f64,
    /// Second shape parameter.
    pub beta: f64,
}

impl Default for Strategy<BetaPrimeParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &BetaPrimeParams| are_valid_params(p.alpha, p.beta),
            |gen: &mut dyn Generator, p: &BetaPrimeParams| sample(gen, p.alpha, p.beta),
        )
    }
}

/// The beta prime distribution `β'(alpha, beta)`, also known as the beta
/// distribution of the second kind.
#[derive(Clone, Debug)]
pub struct BetaPrime<G> {
    gen: G,
    params: BetaPrimeParams,
    strategy: Strategy<BetaPrimeParams>,
}

impl<G: Generator> BetaPrime<G> {
    /// Construct a new `BetaPrime` with the given shape parameters.
    pub fn new(gen: G, alpha: f64, beta: f64) -> Result<BetaPrime<G>, Error> {
        BetaPrime::with_strategy(gen, alpha, beta, Strategy::default())
    }

    /// Construct a new `BetaPrime` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, beta: f64, strategy: Strategy<BetaPrimeParams>,
    ) -> Result<BetaPrime<G>, Error> {
        let params = BetaPrimeParams { alpha, beta };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, beta"));
        }
        Ok(BetaPrime { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> BetaPrimeParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(BetaPrime, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(BetaPrime, HasBeta<f64>, beta, is_valid_beta, set_beta);

impl<G: Generator> Distribution for BetaPrime<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        let BetaPrimeParams { alpha, beta } = self.params;
        Ok(alpha / (beta - 1.0))
    }

    fn median(&self) -> Result<f64, Error> {
        Err(Error::UndefinedStatistic("median"))
    }

    fn variance(&self) -> Result<f64, Error> {
        let BetaPrimeParams { alpha, beta } = self.params;
        if beta <= 2.0 {
            return Err(Error::UndefinedStatistic("variance"));
        }
        Ok(alpha * (alpha + beta - 1.0) / ((beta - 2.0) * (beta - 1.0) * (beta - 1.0)))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        let BetaPrimeParams { alpha, beta } = self.params;
        Ok(vec![(alpha - 1.0) / (beta + 1.0)])
    }
}

impl<G: Generator> ContinuousDistribution for BetaPrime<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}
