// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The triangular distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{
    ContinuousDistribution, Distribution, HasAlpha, HasBeta, HasGamma, Strategy,
};
use crate::{Error, Generator};

/// Whether `alpha < beta` and the mode `gamma` lies in `[alpha, beta]`.
#[inline]
pub fn are_valid_params(alpha: f64, beta: f64, gamma: f64) -> bool {
    alpha < beta && alpha <= gamma && gamma <= beta
}

/// Draw a sample from `Triangular(alpha, beta, gamma)` by inversion.
#[inline]
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, beta: f64, gamma: f64) -> f64 {
    let f = gen.next_double();
    let diff_mode_min = gamma - alpha;
    let range = beta - alpha;
    let f_range = f * range;
    if f_range < diff_mode_min {
        alpha + (f_range * diff_mode_min).sqrt()
    } else {
        beta - ((range - f_range) * (beta - gamma)).sqrt()
    }
}

/// Parameters of the triangular distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangularParams {
    /// Lower bound.
    pub alpha: f64,
    /// Upper bound.
    pub beta: f64,
    /// Mode.
    pub gamma: f64,
}

impl Default for Strategy<TriangularParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &TriangularParams| are_valid_params(p.alpha, p.beta, p.gamma),
            |gen: &mut dyn Generator, p: &TriangularParams| sample(gen, p.alpha, p.beta, p.gamma),
        )
    }
}

/// The triangular distribution on `[alpha, beta]` with mode `gamma`.
///
/// # Example
///
/// ```
/// use randist::continuous::Triangular;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut d = Triangular::new(XorShift128::new(), 0.0, 5.0, 2.5).unwrap();
/// let v = d.next_double();
/// println!("{} is from a triangular distribution", v);
/// ```
#[derive(Clone, Debug)]
pub struct Triangular<G> {
    gen: G,
    params: TriangularParams,
    strategy: Strategy<TriangularParams>,
}

impl<G: Generator> Triangular<G> {
    /// Construct a new `Triangular` with bounds `alpha`, `beta` and mode
    /// `gamma`.
    pub fn new(gen: G, alpha: f64, beta: f64, gamma: f64) -> Result<Triangular<G>, Error> {
        Triangular::with_strategy(gen, alpha, beta, gamma, Strategy::default())
    }

    /// Construct a new `Triangular` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, beta: f64, gamma: f64, strategy: Strategy<TriangularParams>,
    ) -> Result<Triangular<G>, Error> {
        let params = TriangularParams { alpha, beta, gamma };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, beta, gamma"));
        }
        Ok(Triangular { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> TriangularParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Triangular, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(Triangular, HasBeta<f64>, beta, is_valid_beta, set_beta);
parameter!(Triangular, HasGamma<f64>, gamma, is_valid_gamma, set_gamma);

impl<G: Generator> Distribution for Triangular<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(self.params.alpha)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(self.params.beta)
    }

    fn mean(&self) -> Result<f64, Error> {
        let TriangularParams { alpha, beta, gamma } = self.params;
        Ok((alpha + beta + gamma) / 3.0)
    }

    fn median(&self) -> Result<f64, Error> {
        let TriangularParams { alpha, beta, gamma } = self.params;
        let range = beta - alpha;
        if gamma - alpha > range / 2.0 {
            Ok(alpha + (range * (gamma - alpha) / 2.0).sqrt())
        } else {
            Ok(beta - (range * (beta - gamma) / 2.0).sqrt())
        }
    }

    fn variance(&self) -> Result<f64, Error> {
        let TriangularParams { alpha: a, beta: b, gamma: c } = self.params;
        Ok((a * a + b * b + c * c - a * b - a * c - b * c) / 18.0)
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![self.params.gamma])
    }
}

impl<G: Generator> ContinuousDistribution for Triangular<G> {
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
    fn test_triangular() {
        let mut half_gen = StepGenerator::new(0x8000_0000_0000_0000, 0);
        assert_eq!(half_gen.next_double(), 0.5);
        for &(min, max, mode, median) in &[
            (-1., 1., 0., 0.),
            (1., 2., 1., 2. - 0.5f64.sqrt()),
            (5., 25., 25., 5. + 200f64.sqrt()),
            (1e-5, 1e5, 1e-3, 1e5 - 4999999949.5f64.sqrt()),
            (0., 1., 0.9, 0.45f64.sqrt()),
            (-4., -0.5, -2., -4.0 + 3.5f64.sqrt()),
        ] {
            // correct value at the median
            assert_eq!(sample(&mut half_gen, min, max, mode), median);
            let distr = Triangular::new(gen(1), min, max, mode).unwrap();
            assert_almost_eq!(distr.median().unwrap(), median, 1e-9);
        }

        for &(min, max, mode) in &[(-1., 1., 2.), (-1., 1., -2.), (2., 1., 1.), (1., 1., 1.)] {
            assert!(Triangular::new(gen(1), min, max, mode).is_err());
        }
    }

    #[test]
    fn joint_setters() {
        let mut tri = Triangular::new(gen(1), 0.0, 4.0, 1.0).unwrap();
        assert!(tri.set_gamma(5.0).is_err());
        assert!(tri.set_beta(0.5).is_err());
        assert_eq!(tri.params(), TriangularParams { alpha: 0.0, beta: 4.0, gamma: 1.0 });
        tri.set_gamma(4.0).unwrap();
        assert_eq!(tri.mode(), Ok(vec![4.0]));
    }

    #[test]
    fn moments_match() {
        let mut tri = Triangular::new(gen(18), 2.0, 10.0, 3.0).unwrap();
        let (mean, var) = moments(20_000, || tri.next_double());
        assert!((mean - 5.0).abs() < 0.05, "mean {}", mean);
        assert!((var - tri.variance().unwrap()).abs() < 0.15, "variance {}", var);
    }
}
