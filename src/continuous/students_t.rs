// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Student's t distribution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{chi_square, normal};
use crate::distribution::{ContinuousDistribution, Distribution, HasNu, Strategy};
use crate::{Error, Generator};

/// Whether the degrees of freedom `nu` are positive.
#[inline]
pub fn are_valid_params(nu: i32) -> bool {
    nu > 0
}

/// Draw a sample from `t(nu)` as `Z / sqrt(χ²(nu) / nu)`.
pub fn sample<G: Generator + ?Sized>(gen: &mut G, nu: i32) -> f64 {
    let n = normal::sample(gen, 0.0, 1.0);
    let chi = chi_square::sample(gen, nu);
    n / (chi / f64::from(nu)).sqrt()
}

/// Parameters of Student's t distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StudentsTParams {
    /// Degrees of freedom.
    pub nu: i32,
}

impl Default for Strategy<StudentsTParams> {
    fn default() -> Self {
        Strategy::new(
            |p: &StudentsTParams| are_valid_params(p.nu),
            |gen: &mut dyn Generator, p: &StudentsTParams| sample(gen, p.nu),
        )
    }
}

/// Student's t distribution with `nu` degrees of freedom.
///
/// # Example
///
/// ```
/// use randist::continuous::StudentsT;
/// use randist::generator::XorShift128;
/// use randist::prelude::*;
///
/// let mut t = StudentsT::new(XorShift128::new(), 11).unwrap();
/// let v = t.next_double();
/// println!("{} is from a t(11) distribution", v)
/// ```
#[derive(Clone, Debug)]
pub struct StudentsT<G> {
    gen: G,
    params: StudentsTParams,
    strategy: Strategy<StudentsTParams>,
}

impl<G: Generator> StudentsT<G> {
    /// Construct a new `StudentsT` with `nu` degrees of freedom.
    pub fn new(gen: G, nu: i32) -> Result<StudentsT<G>, Error> {
        StudentsT::with_strategy(gen, nu, Strategy::default())
    }

    /// Construct a new `StudentsT` sampled through `strategy`.
    pub fn with_strategy(
        gen: G, nu: i32, strategy: Strategy<StudentsTParams>,
    ) -> Result<StudentsT<G>, Error> {
        let params = StudentsTParams { nu };
        if !strategy.is_valid(&params) {
            return Err(Error::InvalidParameter("nu"));
        }
        Ok(StudentsT { gen, params, strategy })
    }

    /// The current parameters.
    pub fn params(&self) -> StudentsTParams {
        self.params
    }

    /// Consume the distribution, returning its generator.
    pub fn into_generator(self) -> G {
        self.gen
    }
}

parameter!(StudentsT, HasNu<i32>, nu, is_valid_nu, set_nu);

impl<G: Generator> Distribution for StudentsT<G> {
    generator_access!();

    fn minimum(&self) -> Result<f64, Error> {
        Ok(f64::NEG_INFINITY)
    }

    fn maximum(&self) -> Result<f64, Error> {
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64, Error> {
        if self.params.nu > 1 {
            Ok(0.0)
        } else {
            Err(Error::UndefinedStatistic("mean"))
        }
    }

    fn median(&self) -> Result<f64, Error> {
        Ok(0.0)
    }

    fn variance(&self) -> Result<f64, Error> {
        let nu = self.params.nu;
        if nu > 2 {
            Ok(f64::from(nu) / f64::from(nu - 2))
        } else if nu == 2 {
            Ok(f64::INFINITY)
        } else {
            Err(Error::UndefinedStatistic("variance"))
        }
    }

    fn mode(&self) -> Result<Vec<f64>, Error> {
        Ok(vec![0.0])
    }
}

impl<G: Generator> ContinuousDistribution for StudentsT<G> {
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
    fn test_t() {
        let mut t = StudentsT::new(gen(11), 1).unwrap();
        for _ in 0..1000 {
            assert!(!t.next_double().is_nan());
        }
    }

    #[test]
    fn test_validity_boundary() {
        assert!(are_valid_params(1));
        assert!(!are_valid_params(0));
        assert!(!are_valid_params(-3));
        assert_eq!(StudentsT::new(gen(1), 0).unwrap_err(), Error::InvalidParameter("nu"));
    }

    #[test]
    fn test_statistics() {
        let mut t = StudentsT::new(gen(1), 1).unwrap();
        assert!(t.mean().unwrap_err().is_undefined_statistic());
        assert!(t.variance().unwrap_err().is_undefined_statistic());
        t.set_nu(2).unwrap();
        assert_eq!(t.mean(), Ok(0.0));
        assert_eq!(t.variance(), Ok(f64::INFINITY));
        t.set_nu(6).unwrap();
        assert_eq!(t.variance(), Ok(1.5));
    }

    #[test]
    fn test_moments() {
        let mut t = StudentsT::new(gen(12), 10).unwrap();
        let (mean, var) = moments(20_000, || t.next_double());
        assert!(mean.abs() < 0.04, "mean {}", mean);
        assert!((var - 1.25).abs() < 0.12, "variance {}", var);
    }
}
