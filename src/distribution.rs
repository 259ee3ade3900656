// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traits shared by all distribution objects.
//!
//! A distribution object owns a [`Generator`] and a validated parameter set.
//! [`Distribution`] exposes its descriptive statistics and reset semantics,
//! [`ContinuousDistribution`] and [`DiscreteDistribution`] the sampling
//! surface. Which parameters an object has is expressed through the
//! capability traits [`HasAlpha`], [`HasBeta`], … so generic code can ask
//! for "anything with a `sigma`".
//!
//! The validity predicate and sampling routine used by an object are
//! captured in a [`Strategy`] when it is constructed. Each distribution
//! provides `Strategy::default()`; a custom strategy replaces the algorithm
//! of that one object only.

use core::fmt;

use crate::{Error, Generator};

/// Descriptive statistics and generator access of a distribution object.
pub trait Distribution {
    /// The generator type owned by this distribution.
    type Generator: Generator;

    /// Borrow the underlying generator.
    fn generator(&self) -> &Self::Generator;

    /// Mutably borrow the underlying generator.
    fn generator_mut(&mut self) -> &mut Self::Generator;

    /// Whether the underlying generator can be reset.
    fn can_reset(&self) -> bool {
        self.generator().can_reset()
    }

    /// Reset the underlying generator to its seed state, so that the
    /// distribution replays its sample sequence (provided parameters are
    /// unchanged). Returns `false` if the generator cannot be reset.
    fn reset(&mut self) -> bool {
        self.generator_mut().reset()
    }

    /// The smallest value the distribution can produce.
    fn minimum(&self) -> Result<f64, Error>;

    /// The largest value the distribution can produce.
    fn maximum(&self) -> Result<f64, Error>;

    /// The mean, or [`Error::UndefinedStatistic`].
    fn mean(&self) -> Result<f64, Error>;

    /// The median, or [`Error::UndefinedStatistic`].
    fn median(&self) -> Result<f64, Error>;

    /// The variance, or [`Error::UndefinedStatistic`].
    fn variance(&self) -> Result<f64, Error>;

    /// All modes in increasing order, or [`Error::UndefinedStatistic`] if
    /// there is none or a continuum of them.
    fn mode(&self) -> Result<Vec<f64>, Error>;
}

/// A distribution producing floating-point samples.
pub trait ContinuousDistribution: Distribution {
    /// Draw the next sample.
    fn next_double(&mut self) -> f64;

    /// An endless iterator of samples.
    ///
    /// ```
    /// use randist::continuous::Exponential;
    /// use randist::generator::XorShift128;
    /// use randist::prelude::*;
    ///
    /// let mut exp = Exponential::new(XorShift128::with_seed(2), 1.5).unwrap();
    /// let total: f64 = exp.doubles().take(10).sum();
    /// assert!(total >= 0.0);
    /// ```
    fn doubles(&mut self) -> Doubles<'_, Self>
    where Self: Sized {
        Doubles { dist: self }
    }

    /// Fill `buf` with samples.
    fn fill_doubles(&mut self, buf: &mut [f64]) {
        for x in buf.iter_mut() {
            *x = self.next_double();
        }
    }
}

/// A distribution producing integer samples.
///
/// [`next_double`](ContinuousDistribution::next_double) of a discrete
/// distribution returns the same kind of sample, widened to `f64`.
pub trait DiscreteDistribution: ContinuousDistribution {
    /// Draw the next sample.
    fn next(&mut self) -> i32;

    /// An endless iterator of samples.
    fn integers(&mut self) -> Integers<'_, Self>
    where Self: Sized {
        Integers { dist: self }
    }

    /// Fill `buf` with samples.
    fn fill_integers(&mut self, buf: &mut [i32]) {
        for x in buf.iter_mut() {
            *x = self.next();
        }
    }
}

/// An iterator that generates samples of a [`ContinuousDistribution`].
///
/// This `struct` is created by [`ContinuousDistribution::doubles`].
#[derive(Debug)]
pub struct Doubles<'a, D> {
    dist: &'a mut D,
}

impl<'a, D: ContinuousDistribution> Iterator for Doubles<'a, D> {
    type Item = f64;

    #[inline(always)]
    fn next(&mut self) -> Option<f64> {
        Some(self.dist.next_double())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// An iterator that generates samples of a [`DiscreteDistribution`].
///
/// This `struct` is created by [`DiscreteDistribution::integers`].
#[derive(Debug)]
pub struct Integers<'a, D> {
    dist: &'a mut D,
}

impl<'a, D: DiscreteDistribution> Iterator for Integers<'a, D> {
    type Item = i32;

    #[inline(always)]
    fn next(&mut self) -> Option<i32> {
        Some(self.dist.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// The validity predicate and sampling routine of a distribution kind,
/// bound to an object when it is constructed.
///
/// `P` is the parameter type of the distribution (e.g.
/// [`GammaParams`](crate::continuous::GammaParams)) and `T` the sample type.
///
/// # Example
///
/// Sampling a Gamma distribution through its Erlang representation:
///
/// ```
/// use randist::continuous::{erlang, gamma, Gamma, GammaParams};
/// use randist::distribution::Strategy;
/// use randist::generator::{Generator, XorShift128};
/// use randist::prelude::*;
///
/// let strategy = Strategy::new(
///     |p: &GammaParams| gamma::are_valid_params(p.alpha, p.theta) && p.alpha.fract() == 0.0,
///     |gen: &mut dyn Generator, p: &GammaParams| erlang::sample(gen, p.alpha as i32, 1.0 / p.theta),
/// );
/// let mut g = Gamma::with_strategy(XorShift128::with_seed(3), 2.0, 1.0, strategy).unwrap();
/// assert!(g.next_double() >= 0.0);
/// assert!(g.set_alpha(2.5).is_err());
/// ```
pub struct Strategy<P, T = f64> {
    is_valid: fn(&P) -> bool,
    sample: fn(&mut dyn Generator, &P) -> T,
}

impl<P, T> Strategy<P, T> {
    /// Combine a validity predicate and a sampling routine.
    pub fn new(
        is_valid: fn(&P) -> bool, sample: fn(&mut dyn Generator, &P) -> T,
    ) -> Strategy<P, T> {
        Strategy { is_valid, sample }
    }

    /// Evaluate the validity predicate.
    #[inline]
    pub fn is_valid(&self, params: &P) -> bool {
        (self.is_valid)(params)
    }

    /// Draw one sample with the given parameters.
    #[inline]
    pub fn sample(&self, gen: &mut dyn Generator, params: &P) -> T {
        (self.sample)(gen, params)
    }
}

impl<P, T> Clone for Strategy<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, T> Copy for Strategy<P, T> {}

impl<P, T> fmt::Debug for Strategy<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy").finish_non_exhaustive()
    }
}

macro_rules! capability {
    ($(#[$doc:meta])* $name:ident, $get:ident, $is_valid:ident, $set:ident) => {
        $(#[$doc])*
        pub trait $name<T> {
            #[doc = concat!("The current `", stringify!($get), "` parameter.")]
            fn $get(&self) -> T;

            #[doc = concat!(
                "Whether `", stringify!($get), "` may be set to `value` given the other ",
                "current parameters.")]
            fn $is_valid(&self, value: T) -> bool;

            #[doc = concat!(
                "Set `", stringify!($get), "`, failing with [`Error::InvalidParameter`] and ",
                "leaving the distribution unchanged if the value is invalid.")]
            fn $set(&mut self, value: T) -> Result<(), Error>;
        }
    };
}

capability!(
    /// Distributions with an `alpha` parameter.
    HasAlpha, alpha, is_valid_alpha, set_alpha
);
capability!(
    /// Distributions with a `beta` parameter.
    HasBeta, beta, is_valid_beta, set_beta
);
capability!(
    /// Distributions with a `gamma` parameter.
    HasGamma, gamma, is_valid_gamma, set_gamma
);
capability!(
    /// Distributions with a `lambda` parameter.
    HasLambda, lambda, is_valid_lambda, set_lambda
);
capability!(
    /// Distributions with a `mu` parameter.
    HasMu, mu, is_valid_mu, set_mu
);
capability!(
    /// Distributions with a `nu` parameter.
    HasNu, nu, is_valid_nu, set_nu
);
capability!(
    /// Distributions with a `sigma` parameter.
    HasSigma, sigma, is_valid_sigma, set_sigma
);
capability!(
    /// Distributions with a `theta` parameter.
    HasTheta, theta, is_valid_theta, set_theta
);

/// Distributions parameterised by a list of weights.
pub trait HasWeights {
    /// The current weights.
    fn weights(&self) -> &[f64];

    /// Whether `weights` form a valid parameter set.
    fn are_valid_weights(&self, weights: &[f64]) -> bool;

    /// Replace the weights, failing with [`Error::InvalidParameter`] and
    /// leaving the distribution unchanged if they are invalid.
    fn set_weights(&mut self, weights: Vec<f64>) -> Result<(), Error>;
}

/// Implement a capability trait for a distribution object with fields
/// `gen`, `params` and `strategy`, where `params.$field` holds the value.
macro_rules! parameter {
    ($dist:ident, $cap:ident<$ty:ty>, $field:ident, $is_valid:ident, $set:ident) => {
        impl<G: $crate::Generator> $crate::distribution::$cap<$ty> for $dist<G> {
            #[inline]
            fn $field(&self) -> $ty {
                self.params.$field
            }

            fn $is_valid(&self, value: $ty) -> bool {
                let mut params = self.params;
                params.$field = value;
                self.strategy.is_valid(&params)
            }

            fn $set(&mut self, value: $ty) -> Result<(), $crate::Error> {
                let mut params = self.params;
                params.$field = value;
                if !self.strategy.is_valid(&params) {
                    debug!(
                        concat!(stringify!($dist), ": rejected ", stringify!($field), " = {}"),
                        value
                    );
                    return Err($crate::Error::InvalidParameter(stringify!($field)));
                }
                self.params = params;
                Ok(())
            }
        }
    };
}

/// Implement the generator accessors of [`Distribution`] for an object
/// whose generator lives in field `gen`.
macro_rules! generator_access {
    () => {
        type Generator = G;

        #[inline]
        fn generator(&self) -> &G {
            &self.gen
        }

        #[inline]
        fn generator_mut(&mut self) -> &mut G {
            &mut self.gen
        }
    };
}
