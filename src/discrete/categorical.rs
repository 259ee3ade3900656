// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The categorical distribution over weighted indices.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{
    ContinuousDistribution, DiscreteDistribution, Distribution, HasWeights, Strategy,
};
use crate::{Error, Generator};

/// Whether `weights` is non-empty, has at most `i32::MAX` entries, every
/// weight is finite and non-negative, and the total is positive and finite.
pub fn are_valid_params(weights: &[f64]) -> bool {
    if weights.is_empty() || weights.len() > i32::MAX as usize {
        return false;
    }
    if weights.iter().any(|&w| !(w >= 0.0 && w.is_finite())) {
        return false;
    }
    let total: f64 = weights.iter().sum();
    total > 0.0 && total.is_finite()
}

/// Draw an index in `0..weights.len()`, with probability proportional to its
/// weight. Indices of zero weight are never picked.
///
/// This scans the weights linearly; a [`Categorical`] object keeps the
/// cumulative weights and searches them in `O(log N)`.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, weights: &[f64]) -> i32 {
    let total: f64 = weights.iter().sum();
    let chosen = gen.next_double() * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if chosen < cumulative {
            return i as i32;
        }
    }
    last_positive(weights)
}

/// Index of the last positive weight, the target when rounding pushes the
/// chosen weight onto the total.
fn last_positive(weights: &[f64]) -> i32 {
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(0) as i32
}

/// Parameters of the categorical distribution: the weights together with
/// their running sums.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategoricalParams {
    weights: Vec<f64>,
    cumulative_weights: Vec<f64>,
}

impl CategoricalParams {
    /// Wrap `weights`, precomputing their running sums.
    ///
    /// No validation happens here; see [`are_valid_params`].
    pub fn new(weights: Vec<f64>) -> CategoricalParams {
        let mut total = 0.0;
        let cumulative_weights = weights
            .iter()
            .map(|&w| {
                total += w;
                total
            })
            .collect();
        CategoricalParams { weights, cumulative_weights }
    }

    /// The weights.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The sum of all weights.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.cumulative_weights.last().copied().unwrap_or(0.0)
    }

    /// The index whose cumulative weight interval contains `chosen`.
    fn index_of(&self, chosen: f64) -> i32 {
        // Find the first item which has a cumulative weight *higher* than the
        // chosen weight.
        let i = self.cumulative_weights.partition_point(|&c| c <= chosen);
        if i < self.weights.len() {
            i as i32
        } else {
            last_positive(&self.weights)
        }
    }
}

/// An object always needs at least one index, whatever `strategy` allows.
fn accepts(strategy: &Strategy<CategoricalParams, i32>, params: &CategoricalParams) -> bool {
    !params.weights.is_empty() && strategy.is_valid(params)
}

impl Default for Strategy<CategoricalParams, i32> {
    fn default() -> Self {
        Strategy::new(
            |p: &CategoricalParams| are_valid_params(p.weights()),
            |gen: &mut dyn Generator, p: &CategoricalParams| {
                p.index_of(gen.next_double() * p.total_weight())
            },
        )
    }
}

/// A distribution using weighted sampling of indices.
///
/// Sampling returns an index into the weights used to construct it; the
/// chance of a given index being picked is proportional to its weight.
/// Sampling takes `O(log N)` time; replacing the weights takes `O(N)`.
///
/// # Example
///
/// ```
/// use randist::discrete::Categorical;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let choices = ['a', 'b', 'c'];
/// let mut dist = Categorical::new(XorShift128::new(), vec![2.0, 1.0, 1.0]).unwrap();
/// for _ in 0..10 {
///     // 50% chance to print 'a', 25% chance to print 'b', 25% chance to print 'c'
///     println!("{}", choices[dist.next() as usize]);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Categorical<G> {
    gen: G,
    params: CategoricalParams,
    strategy: Strategy<CategoricalParams, i32>,
}

impl<G: Generator> Categorical<G> {
    /// Construct a new `Categorical` picking indices of `weights`.
    pub fn new(gen: G, weights: Vec<f64>) -> Result<Categorical<G>, Error> {
        Categorical::with_strategy(gen, weights, Strategy::default())
    }

    /// Construct a new `Categorical` over `count` equally likely indices.
    pub fn uniform(gen: G, count: usize) -> Result<Categorical<G>, Error> {
        Categorical::new(gen, vec![1.0; count])
    }

    /// Construct a new `Categorical` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, weights: Vec<f64>, strategy: Strategy<CategoricalParams, i32>,
    ) -> Result<Categorical<G>, Error> {
        let params = CategoricalParams::new(weights);
        if !accepts(&strategy, &params) {
            return Err(Error::InvalidParameter("weights"));
        }
        Ok(Categorical { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> &CategoricalParams {
        &self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }

    /// Probability of each index.
    fn probabilities(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let total = self.params.total_weight();
        self.params.weights.iter().enumerate().map(move |(i, &w)| (i as f64, w / total))
    }
}

impl<G: Generator> HasWeights for Categorical<G> {
    #[inline]
    fn weights(&self) -> &[f64] {
        self.params.weights()
    }

    fn are_valid_weights(&self, weights: &[f64]) -> bool {
        accepts(&self.strategy, &CategoricalParams::new(weights.to_vec()))
    }

    fn set_weights(&mut self, weights: Vec<f64>) -> Result<(), Error> {
        let params = CategoricalParams::new(weights);
        if !accepts(&self.strategy, &params) {
            debug!("Categorical: rejected {} weights", params.weights.len());
            return Err(Error::InvalidParameter("weights"));
        }
        self.params = params;
        Ok(())
    }
}

impl<G: Generator> Distribution for Categorical<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok((self.params.weights.len() - 1) as f64)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(self.probabilities().map(|(i, p)| i * p).sum())
    }

    fn median(&self) -> Result<f64, Error> {
        let half = self.params.total_weight() / 2.0;
        let i = self.params.cumulative_weights.partition_point(|&c| c < half);
        Ok(i.min(self.params.weights.len() - 1) as f64)
    }

    fn variance(&self) -> Result<f64, Error> {
        let mean = self.mean()?;
        Ok(self.probabilities().map(|(i, p)| (i - mean) * (i - mean) * p).sum())
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        let max = self.params.weights.iter().copied().fold(0.0, f64::max);
        Ok(self
            .params
            .weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w == max)
            .map(|(i, _)| i as f64)
            .collect())
    }
}

impl<G: Generator> DiscreteDistribution for Categorical<G> {
    #[inline]
    fn next(&mut self) -> i32 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}

impl<G: Generator> ContinuousDistribution for Categorical<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        f64::from(self.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::mock::StepGenerator;
    use crate::test::gen;

    #[test]
    fn test_empty_weights_need_an_index() {
        let permissive = Strategy::new(
            |_: &CategoricalParams| true,
            |_: &mut dyn Generator, _: &CategoricalParams| 0,
        );
        assert_eq!(
            Categorical::with_strategy(gen(1), vec![], permissive).unwrap_err(),
            Error::InvalidParameter("weights")
        );

        let mut dist = Categorical::with_strategy(gen(1), vec![0.0, 1.0], permissive).unwrap();
        assert!(!dist.are_valid_weights(&[]));
        assert!(dist.set_weights(vec![]).is_err());
        assert_eq!(dist.maximum(), Ok(1.0));
        assert_eq!(dist.median(), Ok(1.0));
    }

    #[test]
    fn test_weighted_index() {
        const N_REPS: u32 = 50_000;
        let weights = vec![1.0, 2.0, 3.0, 0.0, 5.0, 6.0, 7.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let total_weight: f64 = weights.iter().sum();
        assert_eq!(weights.len(), 14);

        let mut chosen = [0i32; 14];
        let mut distr = Categorical::new(gen(1), weights.clone()).unwrap();
        for _ in 0..N_REPS {
            chosen[distr.next() as usize] += 1;
        }
        for (i, count) in chosen.iter().enumerate() {
            let exp = (f64::from(N_REPS) * weights[i] / total_weight) as i32;
            // Required precision: 25%
            assert!(*count >= exp * 3 / 4 && *count <= exp * 5 / 4, "{} {}", i, count);
        }
        assert_eq!(chosen[3], 0);
    }

    #[test]
    fn zero_weights_are_never_picked() {
        for (seed, weights) in [vec![0.0, 1.0], vec![1.0, 0.0], vec![0.0, 0.0, 1.0, 0.0]]
            .iter()
            .enumerate()
        {
            let mut distr = Categorical::new(gen(seed as u32), weights.clone()).unwrap();
            let mut g = gen(seed as u32);
            for _ in 0..100 {
                assert!(weights[distr.next() as usize] > 0.0);
                assert!(weights[sample(&mut g, weights) as usize] > 0.0);
            }
        }
    }

    #[test]
    fn object_and_free_sampler_agree() {
        let weights = vec![0.5, 1.5, 0.0, 2.0, 1.0];
        let mut distr = Categorical::new(gen(7), weights.clone()).unwrap();
        let mut g = gen(7);
        for _ in 0..1000 {
            assert_eq!(distr.next(), sample(&mut g, &weights));
        }
    }

    #[test]
    fn top_of_range_clamps_to_last_positive() {
        let p = CategoricalParams::new(vec![1.0, 2.0, 0.0]);
        assert_eq!(p.index_of(p.total_weight()), 1);
        // largest possible u = 1 - 2^-53
        let mut g = StepGenerator::new(u64::MAX, 0);
        assert_eq!(sample(&mut g, &[1.0, 2.0, 0.0]), 1);
    }

    #[test]
    fn invalid_weights() {
        assert!(Categorical::new(gen(1), vec![]).is_err());
        assert!(Categorical::new(gen(1), vec![0.0, 0.0]).is_err());
        assert!(Categorical::new(gen(1), vec![1.0, -1.0]).is_err());
        assert!(Categorical::new(gen(1), vec![1.0, f64::NAN]).is_err());
        assert!(Categorical::new(gen(1), vec![1.0, f64::INFINITY]).is_err());
        assert!(Categorical::new(gen(1), vec![f64::MAX, f64::MAX]).is_err());
        assert!(Categorical::uniform(gen(1), 0).is_err());

        let mut distr = Categorical::new(gen(1), vec![1.0, 2.0]).unwrap();
        assert!(!distr.are_valid_weights(&[0.0]));
        assert_eq!(distr.set_weights(vec![-1.0]), Err(Error::InvalidParameter("weights")));
        assert_eq!(distr.weights(), &[1.0, 2.0]);
        distr.set_weights(vec![3.0, 0.0, 1.0]).unwrap();
        assert_eq!(distr.maximum(), Ok(2.0));
    }

    #[test]
    fn statistics() {
        let distr = Categorical::new(gen(1), vec![1.0, 2.0, 1.0]).unwrap();
        assert_eq!(distr.mean(), Ok(1.0));
        assert_eq!(distr.variance(), Ok(0.5));
        assert_eq!(distr.median(), Ok(1.0));
        assert_eq!(distr.mode(), Ok(vec![1.0]));

        let distr = Categorical::uniform(gen(1), 4).unwrap();
        assert_eq!(distr.mode(), Ok(vec![0.0, 1.0, 2.0, 3.0]));
        assert_eq!(distr.median(), Ok(1.0));
        assert_eq!(distr.mean(), Ok(1.5));
    }
}
