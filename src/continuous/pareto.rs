// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Pareto distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasBeta, Strategy};
use crate::utils::open_closed01;
use crate::{Error, Generator};

/// Whether the scale `alpha` and the shape `beta` are positive.
#[inline]
pub fn are_valid_params(alpha: f64, beta: f64) -> bool {
    alpha > 0.0 && beta > 0.0
}

/// Draw a sample from `Pareto(alpha, beta)` by inversion:
/// `alpha / U^(1 / beta)` with `U` in `(0, 1]`.
#[inline]
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, beta: f64) -> f64 {
    alpha / open_closed01(gen).powf(1.0 / beta)
}

/// Parameters of the Pareto distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParetoParams {
    /// Scale, the minimum of the support.
    pub alpha: f64,
    /// Shape.
    pub beta: f64,
}

impl Default for Strategy<ParetoParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &ParetoParams| are_valid_params(p.alpha, p.beta),
            |gen: &mut dyn Generator, p: &ParetoParams| sample(gen, p.alpha, p.beta),
        )
    }
}

/// The Pareto distribution with scale `alpha` and shape `beta`.
///
/// # Example
///
/// ```
/// use randist::continuous::Pareto;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut pareto = Pareto::new(XorShift128::new(), 1.0, 2.0).unwrap();
/// assert!(pareto.next_double() >= 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Pareto<G> {
    gen: G,
    params: ParetoParams,
    strategy: Strategy<ParetoParams>,
}

impl<G: Generator> Pareto<G> {
    /// Construct a new `Pareto` with scale `alpha` and shape `beta`.
    pub fn new(gen: G, alpha: f64, beta: f64) -> Result<Pareto<G>, Error> {
        Pareto::with_strategy(gen, alpha, beta, Strategy::default())
    }

    /// Construct a new `Pareto` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, beta: f64, strategy: Strategy<ParetoParams>,
    ) -> Result<Pareto<G>, Error> {
        let params = ParetoParams { alpha, beta };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, beta"));
        }
        Ok(Pareto { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> ParetoParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Pareto, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(Pareto, HasBeta<f64>, beta, is_valid_beta, set_beta);

impl<G: Generator> Distribution for Pareto<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(self.params.alpha)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        let ParetoParams { alpha, beta } = self.params;
        if beta <= 1.0 {
            return Err(Error::UndefinedStatistic("mean"));
        }
        Ok(alpha * beta / (beta - 1.0))
    }

    fn median(&self) -> Result<f64, Error> {
        let ParetoParams { alpha, beta } = self.params;
        Ok(alpha * 2f64.powf(1.0 / beta))
    }

    fn variance(&self) -> Result<f64, Error> {
        let ParetoParams { alpha, beta } = self.params;
        if beta <= 2.0 {
            return Err(Error::UndefinedStatistic("variance"));
        }
        Ok(alpha * alpha * beta / ((beta - 1.0) * (beta - 1.0) * (beta - 2.0)))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![self.params.alpha])
    }
}

impl<G: Generator> ContinuousDistribution for Pareto<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::mock::StepGenerator;
    use crate::test::{gen, moments};

    #[test]
    fn invalid() {
        assert!(Pareto::new(gen(1), 0.0, 1.0).is_err());
        assert!(Pareto::new(gen(1), 1.0, 0.0).is_err());
        assert!(Pareto::new(gen(1), -1.0, 1.0).is_err());
    }

    #[test]
    fn sample_support() {
        let mut pareto = Pareto::new(gen(2), 1.5, 0.5).unwrap();
        for _ in 0..1000 {
            assert!(pareto.next_double() >= 1.5);
        }
    }

    #[test]
    fn value_stability() {
        // u = 0 maps to the scale itself
        let mut gen = StepGenerator::new(0, 0);
        assert_eq!(sample(&mut gen, 2.0, 3.0), 2.0);
        // u = 0.75 gives alpha * 4^(1 / beta)
        let mut gen = StepGenerator::new(0xC000_0000_0000_0000, 0);
        assert_eq!(sample(&mut gen, 1.0, 2.0), 2.0);
    }

    #[test]
    fn statistics() {
        let mut pareto = Pareto::new(gen(1), 1.0, 1.0).unwrap();
        assert!(pareto.mean().unwrap_err().is_undefined_statistic());
        assert!(pareto.variance().is_err());
        assert_eq!(pareto.median(), Ok(2.0));
        pareto.set_beta(3.0).unwrap();
        assert_eq!(pareto.mean(), Ok(1.5));
        assert_eq!(pareto.variance(), Ok(0.75));
    }

    #[test]
    fn mean_matches() {
        let mut pareto = Pareto::new(gen(29), 2.0, 5.0).unwrap();
        let (mean, _) = moments(20_000, || pareto.next_double());
        assert!((mean - 2.5).abs() < 0.03, "mean {}", mean);
    }
}
