//! Result container: exactly one of a success value `T` or an error value `E`.
//!
//! Combinators taking `self` move the live payload into their result. The same combinators are available on
//! `&Outcome<T, E>` through [`CopyingOutcome`], where they clone instead and leave the source intact. Wrong-alternative
//! access ([`unwrap`](Outcome::unwrap) on `Err`, [`get`](Outcome::get) of the dead alternative, ...) goes to the
//! [abort primitive](crate::abort::fail).

use std::hint::unreachable_unchecked;

use crate::abort::fail;
use crate::diagnose::{compose, Diagnose};
use crate::optional::Optional;

pub use alternative::Alternative;
pub use copying::CopyingOutcome;

mod alternative;
mod copying;
mod unit;

/// Success (`Ok`) or failure (`Err`).
///
/// `T` and `E` may be the same type; the alternatives are told apart by position (`0` is ok, `1` is err), see
/// [`get`](Self::get).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
  Ok(T),
  Err(E),
}

/// Creates a successful [`Outcome`].
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> { Outcome::Ok(value) }

/// Creates a failed [`Outcome`].
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> { Outcome::Err(error) }

/// Default is `Ok(T::default())`.
impl<T: Default, E> Default for Outcome<T, E> {
  #[inline]
  fn default() -> Self { Outcome::Ok(T::default()) }
}

/// Message used when the requested alternative is not live.
pub(crate) const INVALID_ACCESS: &str = "Invalid access to Result";

// Tag queries

impl<T, E> Outcome<T, E> {
  #[inline]
  pub const fn is_ok(&self) -> bool { matches!(self, Outcome::Ok(_)) }

  #[inline]
  pub const fn is_err(&self) -> bool { matches!(self, Outcome::Err(_)) }

  /// `true` if ok and `predicate` holds for the success value. `predicate` is not called on `Err`.
  #[inline]
  pub fn is_ok_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Outcome::Ok(value) => predicate(value),
      Outcome::Err(_) => false,
    }
  }

  /// `true` if err and `predicate` holds for the error value. `predicate` is not called on `Ok`.
  #[inline]
  pub fn is_err_and(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
    match self {
      Outcome::Ok(_) => false,
      Outcome::Err(error) => predicate(error),
    }
  }
}

// Alternative access

impl<T, E> Outcome<T, E> {
  /// Borrows alternative `I` (`0` for ok, `1` for err), aborting with `Invalid access to Result` when it is not live.
  ///
  /// ```
  /// # use tagsum_core::{ok, Outcome};
  /// let x: Outcome<u32, u32> = ok(3);
  /// assert_eq!(*x.get::<0>(), 3);
  /// ```
  #[inline]
  #[track_caller]
  pub fn get<const I: usize>(&self) -> &<Self as Alternative<I>>::Payload where Self: Alternative<I> {
    match <Self as Alternative<I>>::alternative(self) {
      Optional::Present(payload) => payload,
      Optional::Absent => fail(INVALID_ACCESS),
    }
  }

  /// Mutable counterpart of [`get`](Self::get).
  #[inline]
  #[track_caller]
  pub fn get_mut<const I: usize>(&mut self) -> &mut <Self as Alternative<I>>::Payload where Self: Alternative<I> {
    match <Self as Alternative<I>>::alternative_mut(self) {
      Optional::Present(payload) => payload,
      Optional::Absent => fail(INVALID_ACCESS),
    }
  }

  #[inline]
  #[track_caller]
  pub fn get_ok(&self) -> &T { self.get::<0>() }
  #[inline]
  #[track_caller]
  pub fn get_ok_mut(&mut self) -> &mut T { self.get_mut::<0>() }
  #[inline]
  #[track_caller]
  pub fn get_err(&self) -> &E { self.get::<1>() }
  #[inline]
  #[track_caller]
  pub fn get_err_mut(&mut self) -> &mut E { self.get_mut::<1>() }

  /// Converts into the success value, discarding any error.
  #[inline]
  pub fn ok(self) -> Optional<T> {
    match self {
      Outcome::Ok(value) => Optional::Present(value),
      Outcome::Err(_) => Optional::Absent,
    }
  }

  /// Converts into the error value, discarding any success value.
  #[inline]
  pub fn err(self) -> Optional<E> {
    match self {
      Outcome::Ok(_) => Optional::Absent,
      Outcome::Err(error) => Optional::Present(error),
    }
  }
}

// Transformation

impl<T, E> Outcome<T, E> {
  /// Transforms the success value; an error is propagated unchanged.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self {
      Outcome::Ok(value) => Outcome::Ok(f(value)),
      Outcome::Err(error) => Outcome::Err(error),
    }
  }

  /// Applies `f` to the success value, or returns `default` on error. The result is not wrapped.
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Outcome::Ok(value) => f(value),
      Outcome::Err(_) => default,
    }
  }

  /// Reduces to a plain value: `fallback` receives the error, `f` the success value.
  #[inline]
  pub fn map_or_else<U>(self, fallback: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Outcome::Ok(value) => f(value),
      Outcome::Err(error) => fallback(error),
    }
  }

  /// Transforms the error value; a success value is propagated unchanged.
  #[inline]
  pub fn map_err<F>(self, op: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self {
      Outcome::Ok(value) => Outcome::Ok(value),
      Outcome::Err(error) => Outcome::Err(op(error)),
    }
  }

  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Outcome::Ok(value) = &self {
      f(value);
    }
    self
  }

  #[inline]
  pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
    if let Outcome::Err(error) = &self {
      f(error);
    }
    self
  }
}

// Extraction

impl<T, E> Outcome<T, E> {
  /// Returns the success value, aborting with `"{message}: {error}"` on error (`"{message}"` if the error is not
  /// [diagnosable](Diagnose)).
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T where E: Diagnose {
    self.expect_with(message, E::diagnose)
  }

  /// Returns the success value, aborting with the error's text (or an empty message) on error.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T where E: Diagnose {
    self.unwrap_with(E::diagnose)
  }

  /// Like [`expect`](Self::expect), with the error text produced by `describe` instead of [`Diagnose`]. Works for any
  /// error type.
  ///
  /// ```
  /// # use tagsum_core::{ok, Outcome};
  /// let x: Outcome<u8, std::time::Duration> = ok(1);
  /// assert_eq!(x.expect_with("timed out", |d| Some(format!("{:?}", d))), 1);
  /// ```
  #[inline]
  #[track_caller]
  pub fn expect_with(self, message: &str, describe: impl FnOnce(&E) -> Option<String>) -> T {
    match self {
      Outcome::Ok(value) => value,
      Outcome::Err(error) => fail(compose(message, ": ", describe(&error))),
    }
  }

  #[inline]
  #[track_caller]
  pub fn unwrap_with(self, describe: impl FnOnce(&E) -> Option<String>) -> T {
    match self {
      Outcome::Ok(value) => value,
      Outcome::Err(error) => fail(compose("", "", describe(&error))),
    }
  }

  /// Returns the success value, aborting with `message` alone on error. The error is never formatted.
  #[inline]
  #[track_caller]
  pub fn expect_opaque(self, message: &str) -> T {
    self.expect_with(message, |_| None)
  }

  /// Returns the success value, aborting with an empty message on error.
  #[inline]
  #[track_caller]
  pub fn unwrap_opaque(self) -> T {
    self.unwrap_with(|_| None)
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    match self {
      Outcome::Ok(value) => value,
      Outcome::Err(_) => T::default(),
    }
  }

  /// Returns the error value, aborting with `"{message}: {value}"` on success.
  #[inline]
  #[track_caller]
  pub fn expect_err(self, message: &str) -> E where T: Diagnose {
    self.expect_err_with(message, T::diagnose)
  }

  /// Returns the error value, aborting with the success value's text (or an empty message) on success.
  #[inline]
  #[track_caller]
  pub fn unwrap_err(self) -> E where T: Diagnose {
    self.unwrap_err_with(T::diagnose)
  }

  #[inline]
  #[track_caller]
  pub fn expect_err_with(self, message: &str, describe: impl FnOnce(&T) -> Option<String>) -> E {
    match self {
      Outcome::Ok(value) => fail(compose(message, ": ", describe(&value))),
      Outcome::Err(error) => error,
    }
  }

  #[inline]
  #[track_caller]
  pub fn unwrap_err_with(self, describe: impl FnOnce(&T) -> Option<String>) -> E {
    match self {
      Outcome::Ok(value) => fail(compose("", "", describe(&value))),
      Outcome::Err(error) => error,
    }
  }

  /// Returns the error value, aborting with an empty message on success.
  #[inline]
  #[track_caller]
  pub fn unwrap_err_opaque(self) -> E {
    self.unwrap_err_with(|_| None)
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Outcome::Ok(value) => value,
      Outcome::Err(_) => default,
    }
  }

  /// Returns the success value, or computes one from the error.
  #[inline]
  pub fn unwrap_or_else(self, op: impl FnOnce(E) -> T) -> T {
    match self {
      Outcome::Ok(value) => value,
      Outcome::Err(error) => op(error),
    }
  }

  /// # Safety
  ///
  /// `self` must be ok.
  #[inline]
  pub unsafe fn unwrap_unchecked(self) -> T {
    match self {
      Outcome::Ok(value) => value,
      // SAFETY: the caller guarantees the ok alternative is live.
      Outcome::Err(_) => unsafe { unreachable_unchecked() },
    }
  }

  /// # Safety
  ///
  /// `self` must be err.
  #[inline]
  pub unsafe fn unwrap_err_unchecked(self) -> E {
    match self {
      // SAFETY: the caller guarantees the err alternative is live.
      Outcome::Ok(_) => unsafe { unreachable_unchecked() },
      Outcome::Err(error) => error,
    }
  }
}

// Chaining and fallback

impl<T, E> Outcome<T, E> {
  /// `res` if `self` is ok, otherwise the error of `self`.
  #[inline]
  pub fn and<U>(self, res: Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Outcome::Ok(_) => res,
      Outcome::Err(error) => Outcome::Err(error),
    }
  }

  /// Calls `op` with the success value, otherwise propagates the error into the new outcome type.
  #[inline]
  pub fn and_then<U>(self, op: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Outcome::Ok(value) => op(value),
      Outcome::Err(error) => Outcome::Err(error),
    }
  }

  /// `res` if `self` is err, otherwise the success value of `self`.
  #[inline]
  pub fn or<F>(self, res: Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Outcome::Ok(value) => Outcome::Ok(value),
      Outcome::Err(_) => res,
    }
  }

  /// Calls `op` with the error value, otherwise propagates the success value into the new outcome type.
  #[inline]
  pub fn or_else<F>(self, op: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Outcome::Ok(value) => Outcome::Ok(value),
      Outcome::Err(error) => op(error),
    }
  }
}

// Views

impl<T, E> Outcome<T, E> {
  /// Outcome of shared references to the live alternative.
  ///
  /// The view borrows `self` and cannot outlive it:
  ///
  /// ```compile_fail
  /// # use tagsum_core::{ok, Outcome};
  /// let view = {
  ///   let source: Outcome<String, ()> = ok(String::from("dropped"));
  ///   source.as_ref()
  /// };
  /// assert!(view.is_ok());
  /// ```
  #[inline]
  pub const fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Outcome::Ok(value) => Outcome::Ok(value),
      Outcome::Err(error) => Outcome::Err(error),
    }
  }

  /// Same as [`as_ref`](Self::as_ref).
  #[inline]
  pub const fn as_cref(&self) -> Outcome<&T, &E> { self.as_ref() }

  #[inline]
  pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
    match self {
      Outcome::Ok(value) => Outcome::Ok(value),
      Outcome::Err(error) => Outcome::Err(error),
    }
  }

  /// `self` as a shared reference, selecting the cloning combinators of [`CopyingOutcome`].
  #[inline]
  pub const fn as_const(&self) -> &Self { self }
}

impl<T: Clone, E> Outcome<&T, E> {
  #[inline]
  pub fn cloned(self) -> Outcome<T, E> { self.map(T::clone) }
}
impl<T: Copy, E> Outcome<&T, E> {
  /// Outcome holding a copy of the referenced success value.
  #[inline]
  pub fn copied(self) -> Outcome<T, E> { self.map(|value| *value) }
}
impl<T: Clone, E> Outcome<&mut T, E> {
  #[inline]
  pub fn cloned(self) -> Outcome<T, E> { self.map(|value| value.clone()) }
}
impl<T: Copy, E> Outcome<&mut T, E> {
  #[inline]
  pub fn copied(self) -> Outcome<T, E> { self.map(|value| *value) }
}

// Conversion

impl<T, E> Outcome<T, E> {
  /// Converts both alternatives through `From`.
  #[inline]
  pub fn convert<U: From<T>, F: From<E>>(self) -> Outcome<U, F> {
    match self {
      Outcome::Ok(value) => Outcome::Ok(U::from(value)),
      Outcome::Err(error) => Outcome::Err(F::from(error)),
    }
  }

  /// Replaces `self` with `other`, converting its live alternative. The previous alternative is dropped first.
  #[inline]
  pub fn assign<U, F>(&mut self, other: Outcome<U, F>) -> &mut Self where
    T: From<U>,
    E: From<F>,
  {
    *self = other.convert();
    self
  }

  #[inline]
  pub fn into_result(self) -> Result<T, E> {
    match self {
      Outcome::Ok(value) => Ok(value),
      Outcome::Err(error) => Err(error),
    }
  }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Outcome::Ok(value),
      Err(error) => Outcome::Err(error),
    }
  }
}
impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self { outcome.into_result() }
}

impl<T: Diagnose, E: Diagnose> Diagnose for Outcome<T, E> {
  fn diagnose(&self) -> Option<String> {
    match self {
      Outcome::Ok(value) => value.diagnose(),
      Outcome::Err(error) => error.diagnose(),
    }
  }
}
