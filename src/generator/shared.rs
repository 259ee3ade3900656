// Copyright 2024 Developers of the Randist project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Shared generator handle

use std::cell::RefCell;
use std::rc::Rc;

use rand_core::RngCore;

use super::Generator;

/// A cloneable handle to a single generator.
///
/// Every clone draws from, and resets, the same underlying state. This lets
/// several distribution objects take part in one reproducible experiment;
/// the order of draws is whatever order the caller samples in.
///
/// The handle is neither `Send` nor `Sync`.
///
/// # Example
///
/// ```
/// use randist::continuous::{Exponential, Normal};
/// use randist::generator::{Shared, XorShift128};
/// use randist::prelude::*;
///
/// let gen = Shared::new(XorShift128::with_seed(1));
/// let mut normal = Normal::new(gen.clone(), 0.0, 1.0).unwrap();
/// let mut exp = Exponential::new(gen.clone(), 2.0).unwrap();
/// let a = (normal.next_double(), exp.next_double());
/// assert!(gen.clone().reset());
/// let b = (normal.next_double(), exp.next_double());
/// assert_eq!(a, b);
/// ```
#[derive(Debug)]
pub struct Shared<G> {
    gen: Rc<RefCell<G>>,
}

impl<G> Shared<G> {
    /// Wrap `gen` in a shareable handle.
    pub fn new(gen: G) -> Shared<G> {
        Shared {
            gen: Rc::new(RefCell::new(gen)),
        }
    }
}

impl<G> Clone for Shared<G> {
    fn clone(&self) -> Shared<G> {
        Shared {
            gen: Rc::clone(&self.gen),
        }
    }
}

impl<G: RngCore> RngCore for Shared<G> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.gen.borrow_mut().next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.gen.borrow_mut().next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.gen.borrow_mut().fill_bytes(dest)
    }
}

impl<G: Generator> Generator for Shared<G> {
    #[inline]
    fn seed(&self) -> u32 {
        self.gen.borrow().seed()
    }

    #[inline]
    fn can_reset(&self) -> bool {
        self.gen.borrow().can_reset()
    }

    #[inline]
    fn reset_with(&mut self, seed: u32) -> bool {
        self.gen.borrow_mut().reset_with(seed)
    }

    #[inline]
    fn next_double(&mut self) -> f64 {
        self.gen.borrow_mut().next_double()
    }

    #[inline]
    fn next_boolean(&mut self) -> bool {
        self.gen.borrow_mut().next_boolean()
    }
}
