// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The chi-square distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::normal;
use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, Strategy};
use crate::{Error, Generator};

/// Whether the degrees of freedom `alpha` are positive.
#[inline]
pub fn are_valid_params(alpha: i32) -> bool {
    alpha > 0
}

/// Draw a sample from `χ²(alpha)`: the sum of the squares of `alpha`
/// standard normal variates.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: i32) -> f64 {
    let mut sum = 0.0;
    for _ in 0..alpha {
        let n = normal::sample(gen, 0.0, 1.0);
        sum += n * n;
    }
    sum
}

/// Parameters of the chi-square distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChiSquareParams {
    /// Degrees of freedom.
    pub alpha: i32,
}

impl Default for Strategy<ChiSquareParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &ChiSquareParams| are_valid_params(p.alpha),
            |gen: &mut dyn Generator, p: &ChiSquareParams| sample(gen, p.alpha),
        )
    }
}

/// The chi-square distribution `χ²(alpha)` with `alpha` degrees of freedom.
///
/// # Example
///
/// ```
/// use randist::continuous::ChiSquare;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut chi = ChiSquare::new(XorShift128::new(), 11).unwrap();
/// let v = chi.next_double();
/// println!("{} is from a χ²(11) distribution", v)
/// ```
#[derive(Clone, Debug)]
pub struct ChiSquare<G> {
    gen: G,
    params: ChiSquareParams,
    strategy: Strategy<ChiSquareParams>,
}

impl<G: Generator> ChiSquare<G> {
    /// Construct a new `ChiSquare` with `alpha` degrees of freedom.
    pub fn new(gen: G, alpha: i32) -> Result<ChiSquare<G>, Error> {
        ChiSquare::with_strategy(gen, alpha, Strategy::default())
    }

    /// Construct a new `ChiSquare` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: i32, strategy: Strategy<ChiSquareParams>,
    ) -> Result<ChiSquare<G>, Error> {
        let params = ChiSquareParams { alpha };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha"));
        }
        Ok(ChiSquare { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> ChiSquareParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(ChiSquare, HasAlpha<i32>, alpha, is_valid_alpha, set_alpha);

impl<G: Generator> Distribution for ChiSquare<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(f64::from(self.params.alpha))
    }

    /// Approximation of Wilson and Hilferty.
    fn median(&self) -> Result<f64, Error> {
        let k = f64::from(self.params.alpha);
        Ok(k * (1.0 - 2.0 / (9.0 * k)).powi(3))
    }

    fn variance(&self) -> Result<f64, Error> {
        Ok(2.0 * f64::from(self.params.alpha))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        if self.params.alpha < 2 {
            return Err(Error::UndefinedStatistic("mode"));
        }
        Ok(vec![f64::from(self.params.alpha - 2)])
    }
}

impl<G: Generator> ContinuousDistribution for ChiSquare<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{gen, moments};

    #[test]
    fn test_chi_squared_one() {
        let mut chi = ChiSquare::new(gen(223), 1).unwrap();
        for _ in 0..1000 {
            assert!(chi.next_double() >= 0.0);
        }
    }

    #[test]
    fn test_chi_squared_invalid_dof() {
        assert_eq!(ChiSquare::new(gen(1), 0).unwrap_err(), Error::InvalidParameter("alpha"));
        assert!(ChiSquare::new(gen(1), -1).is_err());
        let mut chi = ChiSquare::new(gen(1), 2).unwrap();
        assert!(chi.set_alpha(0).is_err());
        assert_eq!(chi.alpha(), 2);
    }

    #[test]
    fn test_mode() {
        let mut chi = ChiSquare::new(gen(1), 1).unwrap();
        assert_eq!(chi.mode(), Err(Error::UndefinedStatistic("mode")));
        chi.set_alpha(2).unwrap();
        assert_eq!(chi.mode(), Ok(vec![0.0]));
        chi.set_alpha(7).unwrap();
        assert_eq!(chi.mode(), Ok(vec![5.0]));
    }

    #[test]
    fn test_moments() {
        let mut chi = ChiSquare::new(gen(17), 4).unwrap();
        let (mean, var) = moments(20_000, || chi.next_double());
        assert!((mean - 4.0).abs() < 0.12, "mean {}", mean);
        assert!((var - 8.0).abs() < 0.7, "variance {}", var);
        assert_eq!(chi.variance(), Ok(8.0));
    }
}
