// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The gamma distribution.

use core::f64::consts::E;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::{ContinuousDistribution, Distribution, HasAlpha, HasTheta, Strategy};
use crate::utils::open_closed01;
use crate::{Error, Generator};

/// Whether `alpha > 0` and `theta > 0`.
#[inline]
pub fn are_valid_params(alpha: f64, theta: f64) -> bool {
    alpha > 0.0 && theta > 0.0
}

/// Draw a sample from `Γ(alpha, theta)` (shape `alpha`, scale `theta`).
///
/// The fractional part `δ = alpha - ⌊alpha⌋` is sampled from `Γ(δ, 1)` by
/// the acceptance-rejection method of Ahrens and Dieter[^1], then
/// `⌊alpha⌋` unit exponential variates are added and the sum is scaled by
/// `theta`. An integral `alpha` skips the rejection step entirely.
///
/// The rejection loop terminates with probability 1, but its iteration
/// count is not bounded. If either parameter is infinite, `+∞` is
/// returned without consuming the generator.
///
/// [^1]: J. H. Ahrens and U. Dieter (1974). "Computer methods for sampling
///       from gamma, beta, Poisson and binomial distributions". *Computing*
///       12, pp. 223–246.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, alpha: f64, theta: f64) -> f64 {
    if alpha.is_infinite() || theta.is_infinite() {
        return f64::INFINITY;
    }

    let whole = alpha.floor();
    let delta = alpha - whole;
    let mut xi = 0.0;
    if delta > 0.0 {
        let threshold = E / (E + delta);
        loop {
            let u = open_closed01(gen);
            let v = open_closed01(gen);
            let eta;
            if u <= threshold {
                xi = (u / threshold).powf(1.0 / delta);
                eta = v * xi.powf(delta - 1.0);
            } else {
                xi = 1.0 - ((u - threshold) / (1.0 - threshold)).ln();
                eta = v * (-xi).exp();
            }
            if eta <= xi.powf(delta - 1.0) * (-xi).exp() {
                break;
            }
        }
    }

    for _ in 0..whole as u64 {
        xi -= open_closed01(gen).ln();
    }
    xi * theta
}

/// Parameters of the gamma distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GammaParams {
    /// Shape.
    pub alpha: f64,
    /// Scale.
    pub theta: f64,
}

impl Default for Strategy<GammaParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &GammaParams| are_valid_params(p.alpha, p.theta),
            |gen: &mut dyn Generator, p: &GammaParams| sample(gen, p.alpha, p.theta),
        )
    }
}

/// The gamma distribution `Γ(alpha, theta)` with shape `alpha` and scale
/// `theta`.
///
/// The density function of this distribution is
///
/// ```text
/// f(x) = x^(alpha - 1) * exp(-x / theta) / (Γ(alpha) * theta^alpha)
/// ```
///
/// where `Γ` is the gamma function, `alpha > 0` and `theta > 0`.
///
/// # Example
///
/// ```
/// use randist::continuous::Gamma;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut gamma = Gamma::new(XorShift128::new(), 2.0, 5.0).unwrap();
/// let v = gamma.next_double();
/// println!("{} is from a Gamma(2, 5) distribution", v);
/// ```
#[derive(Clone, Debug)]
pub struct Gamma<G> {
    gen: G,
    params: GammaParams,
    strategy: Strategy<GammaParams>,
}

impl<G: Generator> Gamma<G> {
    /// Construct a new `Gamma` with shape `alpha` and scale `theta`.
    pub fn new(gen: G, alpha: f64, theta: f64) -> Result<Gamma<G>, Error> {
        Gamma::with_strategy(gen, alpha, theta, Strategy::default())
    }

    /// Construct a new `Gamma` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, alpha: f64, theta: f64, strategy: Strategy<GammaParams>,
    ) -> Result<Gamma<G>, Error> {
        let params = GammaParams { alpha, theta };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("alpha, theta"));
        }
        Ok(Gamma { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> GammaParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(Gamma, HasAlpha<f64>, alpha, is_valid_alpha, set_alpha);
parameter!(Gamma, HasTheta<f64>, theta, is_valid_theta, set_theta);

impl<G: Generator> Distribution for Gamma<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        Ok(self.params.alpha * self.params.theta)
    }

    /// The median has no closed form.
    fn median(&self) -> Result<f64, Error> {
        Err(Error::UndefinedStatistic("median"))
    }

    fn variance(&self) -> Result<f64, Error> {
        Ok(self.params.alpha * self.params.theta * self.params.theta)
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        if self.params.alpha < 1.0 {
            // the density is unbounded at 0
            return Err(Error::UndefinedStatistic("mode"));
        }
        Ok(vec![(self.params.alpha - 1.0) * self.params.theta])
    }
}

impl<G: Generator> ContinuousDistribution for Gamma<G> {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.strategy.sample(&mut self.gen, &self.params)
    }
}
