// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Continuous distributions.
//!
//! Every module provides a free `sample` function, usable with any
//! [`Generator`](crate::Generator) (including `&mut dyn Generator`), the
//! matching `are_valid_params` predicate, a parameter type and a
//! distribution object.

pub use self::beta::{Beta, BetaParams};
pub use self::beta_prime::{BetaPrime, BetaPrimeParams};
pub use self::cauchy::{Cauchy, CauchyParams};
pub use self::chi::{Chi, ChiParams};
pub use self::chi_square::{ChiSquare, ChiSquareParams};
pub use self::continuous_uniform::{ContinuousUniform, ContinuousUniformParams};
pub use self::erlang::{Erlang, ErlangParams};
pub use self::exponential::{Exponential, ExponentialParams};
pub use self::fisher_snedecor::{FisherSnedecor, FisherSnedecorParams};
pub use self::fisher_tippett::{FisherTippett, FisherTippettParams};
pub use self::gamma::{Gamma, GammaParams};
pub use self::laplace::{Laplace, LaplaceParams};
pub use self::lognormal::{Lognormal, LognormalParams};
pub use self::normal::{Normal, NormalParams};
pub use self::pareto::{Pareto, ParetoParams};
pub use self::power::{Power, PowerParams};
pub use self::rayleigh::{Rayleigh, RayleighParams};
pub use self::students_t::{StudentsT, StudentsTParams};
pub use self::triangular::{Triangular, TriangularParams};
pub use self::weibull::{Weibull, WeibullParams};

pub mod beta;
pub mod beta_prime;
pub mod cauchy;
pub mod chi;
pub mod chi_square;
pub mod continuous_uniform;
pub mod erlang;
pub mod exponential;
pub mod fisher_snedecor;
pub mod fisher_tippett;
pub mod gamma;
pub mod laplace;
pub mod lognormal;
pub mod normal;
pub mod pareto;
pub mod power;
pub mod rayleigh;
pub mod students_t;
pub mod triangular;
pub mod weibull;
