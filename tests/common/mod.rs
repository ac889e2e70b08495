//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::cell::RefCell;

use catch_this::{Failure, Narrow};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("invalid cast #{0}")]
pub struct InvalidCast(pub u32);

#[derive(Error, Debug, PartialEq)]
#[error("out of range #{0}")]
pub struct OutOfRange(pub u32);

#[derive(Error, Debug, PartialEq)]
#[error("divide by zero")]
pub struct DivideByZero {
    pub numerator: i64,
}

#[derive(Error, Debug, PartialEq)]
#[error("overflow")]
pub struct Overflow {
    pub bits: u8,
}

#[derive(Error, Debug)]
#[error("cleanup failed")]
pub struct CleanupFailed {
    pub resource: &'static str,
}

/// Catches both arithmetic kinds: the "supertype" of DivideByZero and Overflow.
#[derive(Debug, PartialEq)]
pub enum Arithmetic {
    DivideByZero(DivideByZero),
    Overflow(Overflow),
}

impl Narrow for Arithmetic {
    fn narrow(failure: Failure) -> Result<Self, Failure> {
        failure
            .downcast::<DivideByZero>()
            .map(Arithmetic::DivideByZero)
            .or_else(|f| f.downcast::<Overflow>().map(Arithmetic::Overflow))
    }
}

/// Records callback names in call order.
#[derive(Default)]
pub struct Calls(RefCell<Vec<&'static str>>);

impl Calls {
    pub fn hit(&self, name: &'static str) {
        self.0.borrow_mut().push(name);
    }

    pub fn log(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.0.borrow().iter().filter(|n| **n == name).count()
    }
}
