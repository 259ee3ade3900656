// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Erlang distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::normal;
use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasLambda, Strategy};
use crate::utils::open_closed01;
use crate::{Error, Generator};

/// Whether the shape `alpha` and the rate `lambda` are positive.
#[inline]
pub fn are_valid_params(alpha: i32, lambda: f64) -> bool {
    alpha > 0 && lambda > 0.0
}

/// Draw a sample from `Erlang(alpha, lambda)` (integral shape `alpha`,
/// rate `lambda`).
///
/// An infinite `lambda` is passed through as `+∞` without consuming the
/// generator.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: i32, lambda: f64) -> f64 {
    if lambda == f64::INFINITY {
        return f64::INFINITY;
    }
    marsaglia_tsang(gen, f64::from(alpha)) / lambda
}

/// Unit-scale gamma variate of the given shape, by the squeeze method of
/// Marsaglia and Tsang[^1].
///
/// Shapes below 1 are sampled as `Γ(shape + 1) * U^(1 / shape)`. Erlang
/// shapes are integers of at least 1, so [`sample`] never takes that path;
/// it keeps this a sampler for any positive real shape.
///
/// [^1]: George Marsaglia and Wai Wan Tsang. 2000. "A Simple Method for
///       Generating Gamma Variables" *ACM Trans. Math. Softw.* 26, 3
///       (September 2000), 363-372.
///       DOI:[10.1145/358407.358414](https://doi.acm.org/10.1145/358407.358414)
fn marsaglia_tsang<G: Generator + ?Sized>(gen: &mut G, shape: f64) -> f64 {
    let (shape, boost) = if shape < 1.0 { (shape + 1.0, Some(1.0 / shape)) } else { (shape, None) };
    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    let x = loop {
        let x = normal::sample(gen, 0.0, 1.0);
        let v_cbrt = 1.0 + c * x;
        if v_cbrt <= 0.0 {
            // a^3 <= 0 iff a <= 0
            continue;
        }

        let v = v_cbrt * v_cbrt * v_cbrt;
        let u = open_closed01(gen);

        let x_sqr = x * x;
        if u < 1.0 - 0.0331 * x_sqr * x_sqr
            || u.ln() < 0.5 * x_sqr + d * (1.0 - v + v.ln())
        {
            break d * v;
        }
    };

    match boost {
        Some(power) => x * open_closed01(gen).powf(power),
        None => x,
    }
}

/// Parameters of the Erlang distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErlangParams {
    /// Shape, the number of exponential stages.
    pub alpha: i32,
    /// Rate of each stage.
    pub lambda: f64,
}

impl Default for Strategy<ErlangParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &ErlangParams| are_valid_params(p.alpha, p.lambda),
            |gen: &mut dyn Generator, p: &ErlangParams| sample(gen, p.alpha, p.lambda),
        )
    }
}

/// The Erlang distribution: the sum of `alpha` independent exponential
/// variates with rate `lambda`.
#[derive(Clone, Debug)]
pub struct Erlang<G> {
    gen: G,
    params: ErlangParams,
    strategy: Strategy<ErlangParams>,
}

impl<G: Generator> Erlang<G> {
    /// Construct a new `Erlang` with shape `alpha` and rate `lambda`.
    pub fn new(gen: G, alpha: i32, lambda: f64) -> Result<Erlang<G>, Error> {
        Erlang::with_strategy(gen, alpha, lambda, Strategy::default())
    }

    /// Construct a new `Erlang` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: i32, lambda: f64, strategy: Strategy<ErlangParams>,
    ) -> Result<Erlang<G>, Error> {
        let params = ErlangParams { alpha, lambda };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, lambda"));
        }
        Ok(Erlang { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> ErlangParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Erlang, HasAlpha<i32>, alpha, is_valid_alpha, set_alpha);
parameter!(Erlang, HasLambda<f64>, lambda, is_valid_lambda, set_lambda);

impl<G: Generator> Distribution for Erlang<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(f64::from(self.params.alpha) / self.params.lambda)
    }

    fn median(&self) -> Result<f64, Error> {
        Err(Error::UndefinedStatistic("median"))
    }

    fn variance(&self) -> Result<f64, Error> {
        let lambda = self.params.lambda;
        Ok(f64::from(self.params.alpha) / (lambda * lambda))
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![f64::from(self.params.alpha - 1) / self.params.lambda])
    }
}

impl<G: Generator> ContinuousDistribution for Erlang<G> {
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
    fn test_erlang() {
        let mut erlang = Erlang::new(gen(10), 4, 0.5).unwrap();
        for _ in 0..1000 {
            let x = erlang.next_double();
            assert!(x.is_finite() && x > 0.0, "{}", x);
        }
    }

    #[test]
    fn test_invalid_params() {
        assert!(Erlang::new(gen(1), 0, 1.0).is_err());
        assert!(Erlang::new(gen(1), 1, 0.0).is_err());
        assert!(Erlang::new(gen(1), 1, f64::NAN).is_err());
        let mut erlang = Erlang::new(gen(1), 2, 1.0).unwrap();
        assert_eq!(erlang.set_alpha(-2), Err(Error::InvalidParameter("alpha")));
        assert_eq!(erlang.alpha(), 2);
    }

    #[test]
    fn test_infinite_rate() {
        let mut gen = StepGenerator::new(0, 1);
        assert_eq!(sample(&mut gen, 3, f64::INFINITY), f64::INFINITY);
        assert_eq!(gen.next_double(), 0.0);
    }

    #[test]
    fn test_moments() {
        let mut erlang = Erlang::new(gen(41), 3, 2.0).unwrap();
        let (mean, var) = moments(20_000, || erlang.next_double());
        assert!((mean - 1.5).abs() < 0.04, "mean {}", mean);
        assert!((var - 0.75).abs() < 0.06, "variance {}", var);
        assert_eq!(erlang.mode(), Ok(vec![1.0]));
    }

    #[test]
    fn test_small_shape_boost() {
        let mut gen = gen(43);
        let (mean, var) = moments(20_000, || marsaglia_tsang(&mut gen, 0.5));
        assert!((mean - 0.5).abs() < 0.04, "mean {}", mean);
        assert!((var - 0.5).abs() < 0.08, "variance {}", var);
    }
}
