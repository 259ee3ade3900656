// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The continuous uniform distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasBeta, Strategy};
use crate::{Error, Generator};

/// Whether `alpha <= beta` (false if either is NaN).
#[inline]
pub fn are_valid_params(alpha: f64, beta: f64) -> bool {
    alpha <= beta
}

/// Draw a sample uniformly from `[alpha, beta)`, or exactly `alpha` when
/// `alpha == beta`.
///
/// One uniform draw is consumed in both cases. Finite bounds always give
/// finite samples, even when `beta - alpha` overflows; an infinite bound
/// gives non-finite samples.
#[inline]
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, beta: f64) -> f64 {
    let u = gen.next_double();
    if alpha == beta {
        return alpha;
    }
    let width = beta - alpha;
    if width.is_finite() {
        alpha + u * width
    } else {
        // interpolate without forming the overflowing width
        (1.0 - u) * alpha + u * beta
    }
}

/// Parameters of the continuous uniform distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContinuousUniformParams {
    /// Lower bound (inclusive).
    pub alpha: f64,
    /// Upper bound.
    pub beta: f64,
}

impl Default for Strategy<ContinuousUniformParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &ContinuousUniformParams| are_valid_params(p.alpha, p.beta),
            |gen: &mut dyn Generator, p: &ContinuousUniformParams| sample(gen, p.alpha, p.beta),
        )
    }
}

/// The uniform distribution over `[alpha, beta)`.
///
/// # Example
///
/// ```
/// use randist::continuous::ContinuousUniform;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut uniform = ContinuousUniform::new(XorShift128::new(), -1.0, 1.0).unwrap();
/// let x = uniform.next_double();
/// assert!((-1.0..1.0).contains(&x));
/// ```
#[derive(Clone, Debug)]
pub struct ContinuousUniform<G> {
    gen: G,
    params: ContinuousUniformParams,
    strategy: Strategy<ContinuousUniformParams>,
}

impl<G: Generator> ContinuousUniform<G> {
    /// Construct a new `ContinuousUniform` over `[alpha, beta)`.
    pub fn new(gen: G, alpha: f64, beta: f64) -> Result<ContinuousUniform<G>, Error> {
        ContinuousUniform::with_strategy(gen, alpha, beta, Strategy::default())
    }

    /// Construct a new `ContinuousUniform` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, beta: f64, strategy: Strategy<ContinuousUniformParams>,
    ) -> Result<ContinuousUniform<G>, Error> {
        let params = ContinuousUniformParams { alpha, beta };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, beta"));
        }
        Ok(ContinuousUniform { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> ContinuousUniformParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(ContinuousUniform, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(ContinuousUniform, HasBeta<f64>, beta, is_valid_beta, set_beta);

impl<G: Generator> Distribution for ContinuousUniform<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(self.params.alpha)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(self.params.beta)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok((self.params.alpha + self.params.beta) / 2.0)
    }

    fn median(&self) -> Result<f64, Error> {
        Ok((self.params.alpha + self.params.beta) / 2.0)
    }

    fn variance(&self) -> Result<f64, Error> {
        let width = self.params.beta - self.params.alpha;
        Ok(width * width / 12.0)
    }

    /// Every point of the support is a mode.
    fn mode(&self) -> Result<Vec<f64>, Error> {
        Err(Error::UndefinedStatistic("mode"))
    }
}

impl<G: Generator> ContinuousDistribution for ContinuousUniform<G> {
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
    fn test_range() {
        let mut uniform = ContinuousUniform::new(gen(5), -3.0, 7.5).unwrap();
        for _ in 0..1000 {
            let x = uniform.next_double();
            assert!((-3.0..7.5).contains(&x), "{}", x);
        }
    }

    #[test]
    fn test_degenerate() {
        let mut uniform = ContinuousUniform::new(gen(9), 2.0, 2.0).unwrap();
        for _ in 0..100 {
            assert_eq!(uniform.next_double(), 2.0);
        }
        assert_eq!(uniform.variance(), Ok(0.0));
    }

    #[test]
    fn test_fixed_point() {
        let mut gen = StepGenerator::new(1 << 63, 0);
        assert_eq!(sample(&mut gen, 1.0, 3.0), 2.0);
    }

    #[test]
    fn test_overflowing_width() {
        let mut gen = StepGenerator::new(1 << 63, 0);
        assert_eq!(sample(&mut gen, -f64::MAX, f64::MAX), 0.0);

        let mut uniform = ContinuousUniform::new(crate::test::gen(8), -f64::MAX, f64::MAX).unwrap();
        for _ in 0..1000 {
            let x = uniform.next_double();
            assert!(x.is_finite() && x < f64::MAX, "{}", x);
        }
    }

    #[test]
    fn test_validity() {
        assert!(are_valid_params(1.0, 1.0));
        assert!(are_valid_params(-1.0, 1.0));
        assert!(!are_valid_params(1.0, 0.0));
        assert!(!are_valid_params(f64::NAN, 0.0));
        assert_eq!(
            ContinuousUniform::new(gen(1), 3.0, 2.0).unwrap_err(),
            Error::InvalidParameter("alpha, beta")
        );
    }

    #[test]
    fn test_joint_setters() {
        let mut uniform = ContinuousUniform::new(gen(1), 0.0, 1.0).unwrap();
        assert!(!uniform.is_valid_alpha(2.0));
        assert_eq!(uniform.set_alpha(2.0), Err(Error::InvalidParameter("alpha")));
        assert_eq!(uniform.alpha(), 0.0);
        uniform.set_beta(4.0).unwrap();
        uniform.set_alpha(2.0).unwrap();
        assert_eq!(uniform.mean(), Ok(3.0));
        assert!(uniform.mode().unwrap_err().is_undefined_statistic());
    }

    #[test]
    fn test_moments() {
        let mut uniform = ContinuousUniform::new(gen(12), 0.0, 6.0).unwrap();
        let (mean, var) = moments(20_000, || uniform.next_double());
        assert!((mean - 3.0).abs() < 0.08, "mean {}", mean);
        assert!((var - 3.0).abs() < 0.1, "variance {}", var);
    }
}
