// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The binomial distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{
    ContinuousDistribution, DiscreteDistribution, Distribution, HasAlpha, HasBeta, Strategy,
};
use crate::{Error, Generator};

/// Whether the success probability `alpha` lies in `[0, 1]` and the number
/// of trials `beta` is non-negative.
#[inline]
pub fn are_valid_params(alpha: f64, beta: i32) -> bool {
    (0.0..=1.0).contains(&alpha) && beta >= 0
}

/// Count the successes in `beta` independent Bernoulli trials with success
/// probability `alpha`.
///
/// The cost is linear in `beta`.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, beta: i32) -> i32 {
    let mut successes = 0;
    for _ in 0..beta {
        if gen.next_double() < alpha {
            successes += 1;
        }
    }
    successes
}

/// Parameters of the binomial distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinomialParams {
    /// Probability of success of each trial.
    pub alpha: f64,
    /// Number of trials.
    pub beta: i32,
}

impl Default for Strategy<BinomialParams, i32> {
    fn default() -> Self {
        Strategy::new(
            |p: &BinomialParams| are_valid_params(p.alpha, p.beta),
            |gen: &mut dyn Generator, p: &BinomialParams| sample(gen, p.alpha, p.beta),
        )
    }
}

/// The binomial distribution: the number of successes in `beta` trials of
/// probability `alpha` each.
///
/// # Example
///
/// ```
/// use randist::discrete::Binomial;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut bin = Binomial::new(XorShift128::new(), 0.3, 20).unwrap();
/// let v = bin.next();
/// assert!((0..=20).contains(&v));
/// ```
#[derive(Clone, Debug)]
pub struct Binomial<G> {
    gen: G,
    params: BinomialParams,
    strategy: Strategy<BinomialParams, i32>,
}

impl<G: Generator> Binomial<G> {
    /// Construct a new `Binomial` with `beta` trials of success probability
    /// `alpha`.
    pub fn new(gen: G, alpha: f64, beta: i32) -> Result<Binomial<G>, Error> {
        Binomial::with_strategy(gen, alpha, beta, Strategy::default())
    }

    /// Construct a new `Binomial` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, beta: i32, strategy: Strategy<BinomialParams, i32>,
    ) -> Result<Binomial<G>, Error> {
        let params = BinomialParams { alpha, beta };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, beta"));
        }
        Ok(Binomial { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> BinomialParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Binomial, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(Binomial, HasBeta<i32>, beta, is_valid_beta, set_beta);

impl<G: Generator> Distribution for Binomial<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::from(self.params.beta))
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(self.params.alpha * f64::from(self.params.beta))
    }

    fn median(&self) -> Result<f64, Error> {
        Ok((self.params.alpha * f64::from(self.params.beta)).floor())
    }

    fn variance(&self) -> Result<f64, Error> {
        let BinomialParams { alpha, beta } = self.params;
        Ok(alpha * (1.0 - alpha) * f64::from(beta))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        let BinomialParams { alpha, beta } = self.params;
        let n = f64::from(beta);
        if alpha == 1.0 {
            return Ok(vec![n]);
        }
        if alpha == 0.0 {
            return Ok(vec![0.0]);
        }
        let m = (n + 1.0) * alpha;
        if m.fract() == 0.0 {
            Ok(vec![m - 1.0, m])
        } else {
            Ok(vec![m.floor()])
        }
    }
}

impl<G: Generator> DiscreteDistribution for Binomial<G> {
    #[inline]
    fn next(&mut self) -> i32 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

impl<G: Generator> ContinuousDistribution for Binomial<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        f64::from(self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{gen, moments};

    fn test_binomial_mean_and_variance(n: i32, p: f64, seed: u32) {
        let mut binomial = Binomial::new(gen(seed), p, n).unwrap();
        let (mean, var) = moments(20_000, || binomial.next_double());
        let expected_mean = f64::from(n) * p;
        let expected_variance = f64::from(n) * p * (1.0 - p);
        assert!(
            (mean - expected_mean).abs() < expected_variance.sqrt() * 0.05 + 1e-9,
            "mean {} expected {}",
            mean,
            expected_mean
        );
        assert!(
            (var - expected_variance).abs() < expected_variance * 0.1 + 1e-9,
            "variance {} expected {}",
            var,
            expected_variance
        );
    }

    #[test]
    fn test_binomial() {
        test_binomial_mean_and_variance(150, 0.1, 1);
        test_binomial_mean_and_variance(70, 0.6, 2);
        test_binomial_mean_and_variance(40, 0.5, 3);
        test_binomial_mean_and_variance(20, 0.7, 4);
    }

    #[test]
    fn test_binomial_end_points() {
        let mut gen = gen(5);
        for _ in 0..100 {
            assert_eq!(sample(&mut gen, 0.0, 20), 0);
            assert_eq!(sample(&mut gen, 1.0, 20), 20);
            assert_eq!(sample(&mut gen, 0.4, 0), 0);
        }
    }

    #[test]
    fn test_binomial_invalid() {
        assert!(Binomial::new(gen(1), -0.01, 20).is_err());
        assert!(Binomial::new(gen(1), 1.01, 20).is_err());
        assert!(Binomial::new(gen(1), 0.5, -1).is_err());
        let mut bin = Binomial::new(gen(1), 0.5, 10).unwrap();
        assert_eq!(bin.set_beta(-3), Err(Error::InvalidParameter("beta")));
        assert_eq!(bin.beta(), 10);
    }

    #[test]
    fn test_binomial_mode() {
        let bin = Binomial::new(gen(1), 0.5, 9).unwrap();
        assert_eq!(bin.mode(), Ok(vec![4.0, 5.0]));
        let bin = Binomial::new(gen(1), 0.3, 10).unwrap();
        assert_eq!(bin.mode(), Ok(vec![3.0]));
        let bin = Binomial::new(gen(1), 1.0, 7).unwrap();
        assert_eq!(bin.mode(), Ok(vec![7.0]));
        assert_eq!(bin.median(), Ok(7.0));
    }
}
