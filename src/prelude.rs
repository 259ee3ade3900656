// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convenience re-export of common members
//!
//! Like the standard library's prelude, this module simplifies importing of
//! common items. Unlike the standard prelude, the contents of this module must
//! be imported manually:
//!
//! ```
//! use randist::prelude::*;
//! # use randist::continuous::Normal;
//! # use randist::generator::XorShift128;
//! # let mut n = Normal::new(XorShift128::with_seed(1), 0.0, 1.0).unwrap();
//! # let _: f64 = n.next_double();
//! # let _ = n.sigma();
//! ```

#[doc(no_inline)]
pub use crate::distribution::{
    ContinuousDistribution, DiscreteDistribution, Distribution, HasAlpha, HasBeta, HasGamma,
    HasLambda, HasMu, HasNu, HasSigma, HasTheta, HasWeights,
};
#[doc(no_inline)]
pub use crate::{Error, Generator};
