// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The beta distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::gamma;
use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasBeta, Strategy};
use crate::{Error, Generator};

/// Whether `alpha > 0` and `beta > 0`.
#[inline]
pub fn are_valid_params(alpha: f64, beta: f64) -> bool {
    alpha > 0.0 && beta > 0.0
}

/// Draw a sample from `Beta(alpha, beta)` as `X / (X + Y)` with
/// `X ~ Γ(alpha, 1)` and `Y ~ Γ(beta, 1)`.
///
/// When `X + Y` overflows, or when both gamma variates underflow to zero
/// (which happens for very small shapes), the result is `1`.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, beta: f64) -> f64 {
    let x = gamma::sample(gen, alpha, 1.0);
    let y = gamma::sample(gen, beta, 1.0);
    let sum = x + y;
    if sum == 0.0 || sum.is_infinite() {
        return 1.0;
    }
    // x * (1 / sum) is NaN for x == 0 and a subnormal sum
    x / sum
}

/// Parameters of the beta distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BetaParams {
    /// First shape parameter.
    pub alpha: f64,
    /// Second shape parameter.
    pub beta: f64,
}

impl Default for Strategy<BetaParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &BetaParams| are_valid_params(p.alpha, p.beta),
            |gen: &mut dyn Generator, p: &BetaParams| sample(gen, p.alpha, p.beta),
        )
    }
}

/// The beta distribution `Beta(alpha, beta)` on `[0, 1]`.
///
/// # Example
///
/// ```
/// use randist::continuous::Beta;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut beta = Beta::new(XorShift128::new(), 2.0, 5.0).unwrap();
/// let v = beta.next_double();
/// assert!((0.0..=1.0).contains(&v));
/// ```
#[derive(Clone, Debug)]
pub struct Beta<G> {
    gen: G,
    params: BetaParams,
    strategy: Strategy<BetaParams>,
}

impl<G: Generator> Beta<G> {
    /// Construct a new `Beta` with the given shape parameters.
    pub fn new(gen: G, alpha: f64, beta: f64) -> Result<Beta<G>, Error> {
        Beta::with_strategy(gen, alpha, beta, Strategy::default())
    }

    /// Construct a new `Beta` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, beta: f64, strategy: Strategy<BetaParams>,
    ) -> Result<Beta<G>, Error> {
        let params = BetaParams { alpha, beta };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, beta"));
        }
        Ok(Beta { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> BetaParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Beta, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(Beta, HasBeta<f64>, beta, is_valid_beta, set_beta);

impl<G: Generator> Distribution for Beta<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(1.0)
    }

    fn mean(&self) -> Result<f64, Error> {
        let BetaParams { alpha, beta } = self.params;
        Ok(alpha / (alpha + beta))
    }

    /// Only the symmetric case has a closed form.
    fn median(&self) -> Result<f64, Error> {
        if self.params.alpha == self.params.beta {
            Ok(0.5)
        } else {
            Err(Error::UndefinedStatistic("median"))
        }
    }

    fn variance(&self) -> Result<f64, Error> {
        let BetaParams { alpha, beta } = self.params;
        let sum = alpha + beta;
        Ok(alpha * beta / (sum * sum * (sum + 1.0)))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        let BetaParams { alpha, beta } = self.params;
        if alpha == 1.0 && beta == 1.0 {
            // uniform
            Err(Error::UndefinedStatistic("mode"))
        } else if alpha < 1.0 && beta < 1.0 {
            Ok(vec![0.0, 1.0])
        } else if alpha <= 1.0 && beta >= 1.0 {
            Ok(vec![0.0])
        } else if alpha >= 1.0 && beta <= 1.0 {
            Ok(vec![1.0])
        } else {
            Ok(vec![(alpha - 1.0) / (alpha + beta - 2.0)])
        }
    }
}

impl<G: Generator> ContinuousDistribution for Beta<G> {
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
    fn test_beta() {
        let mut beta = Beta::new(gen(31), 1.0, 2.0).unwrap();
        for _ in 0..1000 {
            let x = beta.next_double();
            assert!((0.0..=1.0).contains(&x), "{}", x);
        }
    }

    #[test]
    fn test_beta_small_param() {
        let mut beta = Beta::new(gen(206), 1e-3, 1e-3).unwrap();
        for _ in 0..1000 {
            let x = beta.next_double();
            assert!((0.0..=1.0).contains(&x), "{}", x);
        }
    }

    #[test]
    fn test_beta_degenerate_denominator() {
        // every uniform is 0, so both Γ(2, 1) variates are exactly 0
        let mut zeros = StepGenerator::new(0, 0);
        assert_eq!(sample(&mut zeros, 2.0, 2.0), 1.0);
        assert_eq!(sample(&mut zeros, 1.0, 3.0), 1.0);

        let mut g = gen(3);
        assert_eq!(sample(&mut g, f64::INFINITY, 2.0), 1.0);
    }

    #[test]
    fn test_beta_invalid_dof() {
        assert!(Beta::new(gen(1), 0.0, 0.0).is_err());
        assert!(Beta::new(gen(1), 1.0, -1.0).is_err());
        assert!(Beta::new(gen(1), f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_mode_cases() {
        let mut beta = Beta::new(gen(1), 1.0, 1.0).unwrap();
        assert!(beta.mode().is_err());
        beta.set_alpha(0.5).unwrap();
        beta.set_beta(0.5).unwrap();
        assert_eq!(beta.mode(), Ok(vec![0.0, 1.0]));
        beta.set_beta(2.0).unwrap();
        assert_eq!(beta.mode(), Ok(vec![0.0]));
        beta.set_alpha(3.0).unwrap();
        beta.set_beta(0.5).unwrap();
        assert_eq!(beta.mode(), Ok(vec![1.0]));
        beta.set_beta(3.0).unwrap();
        assert_eq!(beta.mode(), Ok(vec![0.5]));
        assert_eq!(beta.median(), Ok(0.5));
        beta.set_beta(2.0).unwrap();
        assert!(beta.median().is_err());
    }

    #[test]
    fn test_moments() {
        let mut beta = Beta::new(gen(77), 2.0, 5.0).unwrap();
        let (mean, var) = moments(20_000, || beta.next_double());
        assert!((mean - 2.0 / 7.0).abs() < 0.01, "mean {}", mean);
        assert!((var - beta.variance().unwrap()).abs() < 0.003, "variance {}", var);
    }
}
