// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Fisher-Tippett (Gumbel) distribution.

use core::f64::consts::{LN_2, PI};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasMu, Strategy};
use crate::utils::EULER_MASCHERONI;
use crate::{Error, Generator};

/// Whether the scale `alpha` is positive and the location `mu` is not NaN.
#[inline]
pub fn are_valid_params(alpha: f64, mu: f64) -> bool {
    alpha > 0.0 && !mu.is_nan()
}

/// Draw a sample from `FisherTippett(alpha, mu)` by inversion:
/// `mu - alpha * ln(-ln(u))`, redrawing `u` while it is zero.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, mu: f64) -> f64 {
    let u = loop {
        let u = gen.next_double();
        if u != 0.0 {
            break u;
        }
    };
    mu - alpha * (-u.ln()).ln()
}

/// Parameters of the Fisher-Tippett distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FisherTippettParams {
    /// Scale.
    pub alpha: f64,
    /// Location.
    pub mu: f64,
}

impl Default for Strategy<FisherTippettParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &FisherTippettParams| are_valid_params(p.alpha, p.mu),
            |gen: &mut dyn Generator, p: &FisherTippettParams| sample(gen, p.alpha, p.mu),
        )
    }
}

/// The Fisher-Tippett distribution, the type I extreme value (Gumbel)
/// distribution of maxima, with scale `alpha` and location `mu`.
///
/// # Example
///
/// ```
/// use randist::continuous::FisherTippett;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut gumbel = FisherTippett::new(XorShift128::new(), 2.0, 0.0).unwrap();
/// let val = gumbel.next_double();
/// println!("{}", val);
/// ```
#[derive(Clone, Debug)]
pub struct FisherTippett<G> {
    gen: G,
    params: FisherTippettParams,
    strategy: Strategy<FisherTippettParams>,
}

impl<G: Generator> FisherTippett<G> {
    /// Construct a new `FisherTippett` with scale `alpha` and location
    /// `mu`.
    pub fn new(gen: G, alpha: f64, mu: f64) -> Result<FisherTippett<G>, Error> {
        FisherTippett::with_strategy(gen, alpha, mu, Strategy::default())
    }

    /// Construct a new `FisherTippett` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, mu: f64, strategy: Strategy<FisherTippettParams>,
    ) -> Result<FisherTippett<G>, Error> {
        let params = FisherTippettParams { alpha, mu };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, mu"));
        }
        Ok(FisherTippett { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> FisherTippettParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(FisherTippett, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(FisherTippett, HasMu<f64>, mu, is_valid_mu, set_mu);

impl<G: Generator> Distribution for FisherTippett<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(f64::NEG_INFINITY)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(self.params.mu + self.params.alpha * EULER_MASCHERONI)
    }

    fn median(&self) -> Result<f64, Error> {
        Ok(self.params.mu - self.params.alpha * LN_2.ln())
    }

    fn variance(&self) -> Result<f64, Error> {
        let alpha = self.params.alpha;
        Ok(PI * PI * alpha * alpha / 6.0)
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![self.params.mu])
    }
}

impl<G: Generator> ContinuousDistribution for FisherTippett<G> {
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
    fn invalid() {
        assert!(FisherTippett::new(gen(1), 0.0, 0.0).is_err());
        assert!(FisherTippett::new(gen(1), 1.0, f64::NAN).is_err());
        assert!(FisherTippett::new(gen(1), f64::INFINITY, 0.0).is_ok());
    }

    #[test]
    fn zero_is_redrawn() {
        // 0, then 1 << 63 (u = 0.5)
        let mut gen = StepGenerator::new(0, 1 << 63);
        let x = sample(&mut gen, 1.0, 0.0);
        assert!((x + LN_2.ln()).abs() < 1e-14, "{}", x);
    }

    #[test]
    fn moments_match() {
        let mut gumbel = FisherTippett::new(gen(27), 2.0, 1.0).unwrap();
        let (mean, var) = moments(20_000, || gumbel.next_double());
        assert!((mean - gumbel.mean().unwrap()).abs() < 0.07, "mean {}", mean);
        assert!((var - gumbel.variance().unwrap()).abs() < 0.5, "variance {}", var);
    }
}
