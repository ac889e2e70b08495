//! Typed filters and callback outcomes.

use std::error::Error as StdError;

use crate::Failure;

// ============================================================
// Narrow - typed filters for catch and ignore
// ============================================================

/// A failure kind a combinator can filter on.
///
/// Narrowing either produces the caught value or hands the untouched
/// [`Failure`] back, which the combinator then propagates as-is.
///
/// - [`Failure`] narrows unconditionally: the any-failure filter.
/// - Every `E: Error + Send + Sync + 'static` narrows by downcasting.
///
/// A family of kinds that should be caught together is modeled by an enum
/// over its members:
///
/// ```
/// use catch_this::{catch_kind, Failure, Narrow};
/// use std::{io, num::ParseIntError};
///
/// enum Input {
///     Io(io::Error),
///     Parse(ParseIntError),
/// }
///
/// impl Narrow for Input {
///     fn narrow(failure: Failure) -> Result<Self, Failure> {
///         failure
///             .downcast::<io::Error>()
///             .map(Input::Io)
///             .or_else(|f| f.downcast::<ParseIntError>().map(Input::Parse))
///     }
/// }
///
/// let mut seen = false;
/// let value = catch_kind(|| "x".parse::<i32>(), |_: Input| seen = true).unwrap();
/// assert_eq!(value, 0);
/// assert!(seen);
/// ```
pub trait Narrow: Sized {
    /// Take `failure` as `Self`, or hand it back untouched when it isn't one.
    fn narrow(failure: Failure) -> Result<Self, Failure>;
}

impl Narrow for Failure {
    #[inline]
    fn narrow(failure: Failure) -> Result<Self, Failure> {
        Ok(failure)
    }
}

// Doesn't overlap with the Failure impl because Failure doesn't implement Error.
impl<E: StdError + Send + Sync + 'static> Narrow for E {
    #[inline]
    fn narrow(failure: Failure) -> Result<Self, Failure> {
        failure.downcast::<E>()
    }
}

// ============================================================
// Completion - what a handler or cleanup finishes with
// ============================================================

/// Value a handler or cleanup callback finishes with.
///
/// `()` for callbacks that cannot fail, `Result<(), E>` for callbacks that
/// can. An `Err` escapes the combinator; a failing cleanup replaces whatever
/// the operation and handler produced.
pub trait Completion {
    /// `Ok(())` for success, or the failure the callback reported.
    fn into_result(self) -> Result<(), Failure>;
}

impl Completion for () {
    #[inline]
    fn into_result(self) -> Result<(), Failure> {
        Ok(())
    }
}

impl<E: Into<Failure>> Completion for Result<(), E> {
    #[inline]
    fn into_result(self) -> Result<(), Failure> {
        self.map_err(Into::into)
    }
}
