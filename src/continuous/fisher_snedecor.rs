// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Fisher-Snedecor (F) distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::chi_square;
use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasBeta, Strategy};
use crate::{Error, Generator};

/// Whether both degrees of freedom are positive.
#[inline]
pub fn are_valid_params(alpha: i32, beta: i32) -> bool {
    alpha > 0 && beta > 0
}

/// Draw a sample from `F(alpha, beta)` as the ratio of two scaled
/// chi-square variates, `(χ²(alpha) / alpha) / (χ²(beta) / beta)`.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: i32, beta: i32) -> f64 {
    let numerator = chi_square::sample(gen, alpha);
    let denominator = chi_square::sample(gen, beta);
    (numerator / denominator) * (f64::from(beta) / f64::from(alpha))
}

/// Parameters of the Fisher-Snedecor distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FisherSnedecorParams {
    /// Numerator degrees of freedom.
    pub alpha: i32,
    /// Denominator degrees of freedom.
    pub beta: i32,
}

impl Default for Strategy<FisherSnedecorParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &FisherSnedecorParams| are_valid_params(p.alpha, p.beta),
            |gen: &mut dyn Generator, p: &FisherSnedecorParams| sample(gen, p.alpha, p.beta),
        )
    }
}

/// The Fisher-Snedecor distribution `F(alpha, beta)`, commonly called the
/// F-distribution.
///
/// # Example
///
/// ```
/// use randist::continuous::FisherSnedecor;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut f = FisherSnedecor::new(XorShift128::new(), 2, 32).unwrap();
/// let v = f.next_double();
/// println!("{} is from an F(2, 32) distribution", v)
/// ```
#[derive(Clone, Debug)]
pub struct FisherSnedecor<G> {
    gen: G,
    params: FisherSnedecorParams,
    strategy: Strategy<FisherSnedecorParams>,
}

impl<G: Generator> FisherSnedecor<G> {
    /// Construct a new `FisherSnedecor` with the given degrees of freedom.
    pub fn new(gen: G, alpha: i32, beta: i32) -> Result<FisherSnedecor<G>, Error> {
        FisherSnedecor::with_strategy(gen, alpha, beta, Strategy::default())
    }

    /// Construct a new `FisherSnedecor` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: i32, beta: i32, strategy: Strategy<FisherSnedecorParams>,
    ) -> Result<FisherSnedecor<G>, Error> {
        let params = FisherSnedecorParams { alpha, beta };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, beta"));
        }
        Ok(FisherSnedecor { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> FisherSnedecorParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(FisherSnedecor, HasAlpha<i32>, alpha, is_valid_alpha, set_alpha);
parameter!(FisherSnedecor, HasBeta<i32>, beta, is_valid_beta, set_beta);

impl<G: Generator> Distribution for FisherSnedecor<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        if self.params.beta <= 2 {
            return Err(Error::UndefinedStatistic("mean"));
        }
        let b = f64::from(self.params.beta);
        Ok(b / (b - 2.0))
    }

    fn median(&self) -> Result<f64, Error> {
        Err(Error::UndefinedStatistic("median"))
    }

    fn variance(&self) -> Result<f64, Error> {
        if self.params.beta <= 4 {
            return Err(Error::UndefinedStatistic("variance"));
        }
        let a = f64::from(self.params.alpha);
        let b = f64::from(self.params.beta);
        Ok(2.0 * b * b * (a + b - 2.0) / (a * (b - 2.0) * (b - 2.0) * (b - 4.0)))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        if self.params.alpha <= 2 {
            return Err(Error::UndefinedStatistic("mode"));
        }
        let a = f64::from(self.params.alpha);
        let b = f64::from(self.params.beta);
        Ok(vec![(a - 2.0) / a * (b / (b + 2.0))])
    }
}

impl<G: Generator> ContinuousDistribution for FisherSnedecor<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}
