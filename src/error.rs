// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types

use core::fmt;

/// Error type returned by generators and distributions.
///
/// Every variant carries the name of the offending argument, parameter or
/// statistic. Errors are detected before any state is mutated, so an object
/// which returned an error is still in its previous, valid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// An argument passed to a generator method is outside its domain,
    /// e.g. `next_double_range(2.0, 1.0)`.
    InvalidArgument(&'static str),
    /// A distribution parameter, or a combination of parameters, does not
    /// satisfy the distribution's validity predicate.
    InvalidParameter(&'static str),
    /// The requested statistic has no defined value for the current
    /// parameters, e.g. the mean of a Cauchy distribution.
    UndefinedStatistic(&'static str),
}

impl Error {
    /// The name of the argument, parameter or statistic this error refers to.
    pub fn name(&self) -> &'static str {
        match *self {
            Error::InvalidArgument(name)
            | Error::InvalidParameter(name)
            | Error::UndefinedStatistic(name) => name,
        }
    }

    /// True if this error signals an undefined statistic.
    #[inline]
    pub fn is_undefined_statistic(&self) -> bool {
        matches!(self, Error::UndefinedStatistic(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidArgument(name) => write!(f, "invalid argument `{}`", name),
            Error::InvalidParameter(name) => {
                write!(f, "invalid distribution parameter `{}`", name)
            }
            Error::UndefinedStatistic(name) => {
                write!(f, "{} is undefined for the current parameters", name)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidParameter("alpha").to_string(),
            "invalid distribution parameter `alpha`"
        );
        assert_eq!(
            Error::UndefinedStatistic("mean").to_string(),
            "mean is undefined for the current parameters"
        );
        assert_eq!(Error::InvalidArgument("max").name(), "max");
    }

    #[test]
    fn undefined_statistic_is_distinct() {
        assert!(Error::UndefinedStatistic("mode").is_undefined_statistic());
        assert!(!Error::InvalidParameter("mode").is_undefined_statistic());
    }
}
