// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The chi distribution.

use core::f64::consts::SQRT_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::normal;
use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, Strategy};
use crate::utils::log_gamma;
use crate::{Error, Generator};

/// Whether the degrees of freedom `alpha` are positive.
#[inline]
pub fn are_valid_params(alpha: i32) -> bool {
    alpha > 0
}

/// Draw a sample from `χ(alpha)`: the Euclidean norm of `alpha` standard
/// normal variates.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: i32) -> f64 {
    let mut sum = 0.0;
    for _ in 0..alpha {
        let n = normal::sample(gen, 0.0, 1.0);
        sum += n * n;
    }
    sum.sqrt()
}

/// Parameters of the chi distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChiParams {
    /// Degrees of freedom.
    pub alpha: i32,
}

impl Default for Strategy<ChiParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &ChiParams| are_valid_params(p.alpha),
            |gen: &mut dyn Generator, p: &ChiParams| sample(gen, p.alpha),
        )
    }
}

/// The chi distribution `χ(alpha)` with `alpha` degrees of freedom.
#[derive(Clone, Debug)]
pub struct Chi<G> {
    gen: G,
    params: ChiParams,
    strategy: Strategy<ChiParams>,
}

impl<G: Generator> Chi<G> {
    /// Construct a new `Chi` with `alpha` degrees of freedom.
    pub fn new(gen: G, alpha: i32) -> Result<Chi<G>, Error> {
        Chi::with_strategy(gen, alpha, Strategy::default())
    }

    /// Construct a new `Chi` sampled through `strategy`.
    pub fn with_strategy(gen: G, alpha: i32, strategy: Strategy<ChiParams>) -> Result<Chi<G>, Error> {
        let params = ChiParams { alpha };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha"));
        }
        Ok(Chi { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> ChiParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Chi, HasAlpha<i32>, alpha, is_valid_alpha, set_alpha);

impl<G: Generator> Distribution for Chi<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    /// `√2 Γ((k + 1) / 2) / Γ(k / 2)`, evaluated in log space.
    fn mean(&self) -> Result<f64, Error> {
        let k = f64::from(self.params.alpha);
        Ok(SQRT_2 * (log_gamma((k + 1.0) / 2.0) - log_gamma(k / 2.0)).exp())
    }

    /// Approximated through the Wilson-Hilferty median of `χ²`.
    fn median(&self) -> Result<f64, Error> {
        let k = f64::from(self.params.alpha);
        Ok((k * (1.0 - 2.0 / (9.0 * k)).powi(3)).sqrt())
    }

    fn variance(&self) -> Result<f64, Error> {
        let mean = self.mean()?;
        Ok(f64::from(self.params.alpha) - mean * mean)
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![f64::from(self.params.alpha - 1).sqrt()])
    }
}

impl<G: Generator> ContinuousDistribution for Chi<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{gen, moments};
    use core::f64::consts::PI;

    #[test]
    fn test_chi() {
        let mut chi = Chi::new(gen(3), 3).unwrap();
        for _ in 0..1000 {
            assert!(chi.next_double() >= 0.0);
        }
        assert!(Chi::new(gen(3), 0).is_err());
    }

    #[test]
    fn test_statistics() {
        let chi = Chi::new(gen(3), 3).unwrap();
        let expected = 2.0 * SQRT_2 / PI.sqrt();
        assert!((chi.mean().unwrap() - expected).abs() < 1e-8);
        assert!((chi.variance().unwrap() - (3.0 - expected * expected)).abs() < 1e-8);
        assert_eq!(chi.mode(), Ok(vec![SQRT_2]));
    }

    #[test]
    fn test_moments() {
        let mut chi = Chi::new(gen(8), 3).unwrap();
        let (mean, var) = moments(20_000, || chi.next_double());
        let expected_mean = chi.mean().unwrap();
        let expected_var = chi.variance().unwrap();
        assert!((mean - expected_mean).abs() < 0.03, "mean {}", mean);
        assert!((var - expected_var).abs() < 0.03, "variance {}", var);
    }
}
