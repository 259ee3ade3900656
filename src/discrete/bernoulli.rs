// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Bernoulli distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{
    ContinuousDistribution, DiscreteDistribution, Distribution, HasAlpha, Strategy,
};
use crate::{Error, Generator};

/// Whether the success probability `alpha` lies in `[0, 1]`.
#[inline]
pub fn are_valid_params(alpha: f64) -> bool {
    (0.0..=1.0).contains(&alpha)
}

/// Draw `1` with probability `alpha`, `0` otherwise.
///
/// `alpha = 1` always yields `1` and `alpha = 0` always yields `0`.
#[inline]
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64) -> i32 {
    if gen.next_double() < alpha {
        1
    } else {
        0
    }
}

/// Parameters of the Bernoulli distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BernoulliParams {
    /// Probability of success.
    pub alpha: f64,
}

impl Default for Strategy<BernoulliParams, i32> {
    fn default() -> Self {
        Strategy::new(
            |p: &BernoulliParams| are_valid_params(p.alpha),
            |gen: &mut dyn Generator, p: &BernoulliParams| sample(gen, p.alpha),
        )
    }
}

/// The Bernoulli distribution: `1` with probability `alpha`, else `0`.
///
/// # Example
///
/// ```
/// use randist::discrete::Bernoulli;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut d = Bernoulli::new(XorShift128::new(), 0.3).unwrap();
/// let v = d.next();
/// println!("{} is from a Bernoulli distribution", v);
/// ```
#[derive(Clone, Debug)]
pub struct Bernoulli<G> {
    gen: G,
    params: BernoulliParams,
    strategy: Strategy<BernoulliParams, i32>,
}

impl<G: Generator> Bernoulli<G> {
    /// Construct a new `Bernoulli` with success probability `alpha`.
    pub fn new(gen: G, alpha: f64) -> Result<Bernoulli<G>, Error> {
        Bernoulli::with_strategy(gen, alpha, Strategy::default())
    }

    /// Construct a new `Bernoulli` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, strategy: Strategy<BernoulliParams, i32>,
    ) -> Result<Bernoulli<G>, Error> {
        let params = BernoulliParams { alpha };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha"));
        }
        Ok(Bernoulli { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> BernoulliParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Bernoulli, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);

impl<G: Generator> Distribution for Bernoulli<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(1.0)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(self.params.alpha)
    }

    fn median(&self) -> Result<f64, Error> {
        let p = self.params.alpha;
        Ok(if p < 0.5 {
            0.0
        } else if p > 0.5 {
            1.0
        } else {
            0.5
        })
    }

    fn variance(&self) -> Result<f64, Error> {
        let p = self.params.alpha;
        Ok(p * (1.0 - p))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        let p = self.params.alpha;
        Ok(if p < 0.5 {
            vec![0.0]
        } else if p > 0.5 {
            vec![1.0]
        } else {
            vec![0.0, 1.0]
        })
    }
}

impl<G: Generator> DiscreteDistribution for Bernoulli<G> {
    #[inline]
    fn next(&mut self) -> i32 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

impl<G: Generator> ContinuousDistribution for Bernoulli<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        f64::from(self.next())
    }
}
