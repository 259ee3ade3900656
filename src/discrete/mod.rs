// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Discrete distributions.
//!
//! Samples are `i32`, returned by
//! [`DiscreteDistribution::next`](crate::distribution::DiscreteDistribution::next);
//! `next_double` yields the same kind of sample widened to `f64`.

pub use self::bernoulli::{Bernoulli, BernoulliParams};
pub use self::binomial::{Binomial, BinomialParams};
pub use self::categorical::{Categorical, CategoricalParams};
pub use self::discrete_uniform::{DiscreteUniform, DiscreteUniformParams};
pub use self::geometric::{Geometric, GeometricParams};
pub use self::poisson::{Poisson, PoissonParams};

pub mod bernoulli;
pub mod binomial;
pub mod categorical;
pub mod discrete_uniform;
pub mod geometric;
pub mod poisson;
