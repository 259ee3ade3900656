// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Weibull distribution.

use core::f64::consts::LN_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasLambda, Strategy};
use crate::utils::{gamma, open_closed01};
use crate::{Error, Generator};

/// Whether the shape `alpha` and the scale `lambda` are positive.
#[inline]
pub fn are_valid_params(alpha: f64, lambda: f64) -> bool {
    alpha > 0.0 && lambda > 0.0
}

/// Draw a sample from `Weibull(alpha, lambda)` by inversion.
#[inline]
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, lambda: f64) -> f64 {
    lambda * (-open_closed01(gen).ln()).powf(1.0 / alpha)
}

/// Parameters of the Weibull distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeibullParams {
    /// Shape.
    pub alpha: f64,
    /// Scale.
    pub lambda: f64,
}

impl Default for Strategy<WeibullParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &WeibullParams| are_valid_params(p.alpha, p.lambda),
            |gen: &mut dyn Generator, p: &WeibullParams| sample(gen, p.alpha, p.lambda),
        )
    }
}

/// The Weibull distribution with shape `alpha` and scale `lambda`.
///
/// # Example
///
/// ```
/// use randist::continuous::Weibull;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut weibull = Weibull::new(XorShift128::new(), 10.0, 1.0).unwrap();
/// let val = weibull.next_double();
/// println!("{}", val);
/// ```
#[derive(Clone, Debug)]
pub struct Weibull<G> {
    gen: G,
    params: WeibullParams,
    strategy: Strategy<WeibullParams>,
}

impl<G: Generator> Weibull<G> {
    /// Construct a new `Weibull` with shape `alpha` and scale `lambda`.
    pub fn new(gen: G, alpha: f64, lambda: f64) -> Result<Weibull<G>, Error> {
        Weibull::with_strategy(gen, alpha, lambda, Strategy::default())
    }

    /// Construct a new `Weibull` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, lambda: f64, strategy: Strategy<WeibullParams>,
    ) -> Result<Weibull<G>, Error> {
        let params = WeibullParams { alpha, lambda };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, lambda"));
        }
        Ok(Weibull { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> WeibullParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Weibull, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(Weibull, HasLambda<f64>, lambda, is_valid_lambda, set_lambda);

impl<G: Generator> Distribution for Weibull<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        let WeibullParams { alpha, lambda } = self.params;
        Ok(lambda * gamma(1.0 + 1.0 / alpha))
    }

    fn median(&self) -> Result<f64, Error> {
        let WeibullParams { alpha, lambda } = self.params;
        Ok(lambda * LN_2.powf(1.0 / alpha))
    }

    fn variance(&self) -> Result<f64, Error> {
        let WeibullParams { alpha, lambda } = self.params;
        let g1 = gamma(1.0 + 1.0 / alpha);
        Ok(lambda * lambda * (gamma(1.0 + 2.0 / alpha) - g1 * g1))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        let WeibullParams { alpha, lambda } = self.params;
        if alpha < 1.0 {
            // the density is unbounded at 0
            return Err(Error::UndefinedStatistic("mode"));
        }
        Ok(vec![lambda * ((alpha - 1.0) / alpha).powf(1.0 / alpha)])
    }
}

impl<G: Generator> ContinuousDistribution for Weibull<G> {
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
    use average::assert_almost_eq;

    #[test]
    fn invalid() {
        assert!(Weibull::new(gen(1), 0.0, 1.0).is_err());
        assert!(Weibull::new(gen(1), 1.0, 0.0).is_err());
        assert!(Weibull::new(gen(1), 1.0, f64::NAN).is_err());
    }

    #[test]
    fn sample_fixed_point() {
        // u = 0.5 gives the median
        let mut gen = StepGenerator::new(1 << 63, 0);
        let x = sample(&mut gen, 2.0, 3.0);
        assert_almost_eq!(x, 3.0 * LN_2.sqrt(), 1e-14);
    }

    #[test]
    fn statistics() {
        let mut w = Weibull::new(gen(1), 1.0, 2.0).unwrap();
        // exponential with mean 2
        assert_almost_eq!(w.mean().unwrap(), 2.0, 1e-12);
        assert_almost_eq!(w.variance().unwrap(), 4.0, 1e-12);
        assert_eq!(w.mode(), Ok(vec![0.0]));
        w.set_alpha(0.5).unwrap();
        assert!(w.mode().is_err());
    }

    #[test]
    fn moments_match() {
        let mut w = Weibull::new(gen(21), 1.5, 2.0).unwrap();
        let (mean, var) = moments(20_000, || w.next_double());
        assert!((mean - w.mean().unwrap()).abs() < 0.04, "mean {}", mean);
        assert!((var - w.variance().unwrap()).abs() < 0.12, "variance {}", var);
    }
}
