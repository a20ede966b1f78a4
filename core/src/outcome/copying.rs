use crate::abort::fail;
use crate::diagnose::{compose, Diagnose};
use crate::optional::Optional;

use super::Outcome;

/// Combinators on a borrowed [`Outcome`]: each clones the live payload into its result, leaving the source untouched.
///
/// Method names and semantics match the owned combinators on [`Outcome`]. Reached through
/// [`as_const`](Outcome::as_const) or any shared reference:
///
/// ```
/// use tagsum_core::prelude::*;
///
/// let x: Outcome<String, u8> = ok(String::from("kept"));
/// assert_eq!(x.as_const().map(|s| s.len()), ok(4));
/// assert_eq!(x.as_const().unwrap(), "kept");
/// assert!(x.is_ok_and(|s| s == "kept"));
/// ```
pub trait CopyingOutcome {
  type Success;
  type Failure;

  fn ok(self) -> Optional<Self::Success>;
  fn err(self) -> Optional<Self::Failure>;

  fn map<U>(self, f: impl FnOnce(Self::Success) -> U) -> Outcome<U, Self::Failure>;
  fn map_or<U>(self, default: U, f: impl FnOnce(Self::Success) -> U) -> U;
  fn map_or_else<U>(self, fallback: impl FnOnce(Self::Failure) -> U, f: impl FnOnce(Self::Success) -> U) -> U;
  fn map_err<F>(self, op: impl FnOnce(Self::Failure) -> F) -> Outcome<Self::Success, F>;

  fn expect(self, message: &str) -> Self::Success where Self::Failure: Diagnose;
  fn unwrap(self) -> Self::Success where Self::Failure: Diagnose;
  fn expect_with(self, message: &str, describe: impl FnOnce(&Self::Failure) -> Option<String>) -> Self::Success;
  fn unwrap_with(self, describe: impl FnOnce(&Self::Failure) -> Option<String>) -> Self::Success;
  fn expect_opaque(self, message: &str) -> Self::Success;
  fn unwrap_opaque(self) -> Self::Success;
  fn unwrap_or_default(self) -> Self::Success where Self::Success: Default;
  fn expect_err(self, message: &str) -> Self::Failure where Self::Success: Diagnose;
  fn unwrap_err(self) -> Self::Failure where Self::Success: Diagnose;
  fn unwrap_err_with(self, describe: impl FnOnce(&Self::Success) -> Option<String>) -> Self::Failure;
  fn unwrap_or(self, default: Self::Success) -> Self::Success;
  fn unwrap_or_else(self, op: impl FnOnce(Self::Failure) -> Self::Success) -> Self::Success;

  fn and<U>(self, res: Outcome<U, Self::Failure>) -> Outcome<U, Self::Failure>;
  fn and_then<U>(self, op: impl FnOnce(Self::Success) -> Outcome<U, Self::Failure>) -> Outcome<U, Self::Failure>;
  fn or<F>(self, res: Outcome<Self::Success, F>) -> Outcome<Self::Success, F>;
  fn or_else<F>(self, op: impl FnOnce(Self::Failure) -> Outcome<Self::Success, F>) -> Outcome<Self::Success, F>;

  fn convert<U: From<Self::Success>, F: From<Self::Failure>>(self) -> Outcome<U, F>;
}

impl<T: Clone, E: Clone> CopyingOutcome for &Outcome<T, E> {
  type Success = T;
  type Failure = E;

  #[inline]
  fn ok(self) -> Optional<T> { self.as_ref().ok().cloned() }
  #[inline]
  fn err(self) -> Optional<E> { self.as_ref().err().cloned() }

  #[inline]
  fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> { self.clone().map(f) }
  #[inline]
  fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U { self.as_ref().ok().cloned().map_or(default, f) }
  #[inline]
  fn map_or_else<U>(self, fallback: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
    self.clone().map_or_else(fallback, f)
  }
  #[inline]
  fn map_err<F>(self, op: impl FnOnce(E) -> F) -> Outcome<T, F> { self.clone().map_err(op) }

  #[inline]
  #[track_caller]
  fn expect(self, message: &str) -> T where E: Diagnose { self.clone().expect(message) }
  #[inline]
  #[track_caller]
  fn unwrap(self) -> T where E: Diagnose { self.clone().unwrap() }
  #[inline]
  #[track_caller]
  fn expect_with(self, message: &str, describe: impl FnOnce(&E) -> Option<String>) -> T {
    match self {
      Outcome::Ok(value) => value.clone(),
      Outcome::Err(error) => fail(compose(message, ": ", describe(error))),
    }
  }
  #[inline]
  #[track_caller]
  fn unwrap_with(self, describe: impl FnOnce(&E) -> Option<String>) -> T {
    match self {
      Outcome::Ok(value) => value.clone(),
      Outcome::Err(error) => fail(compose("", "", describe(error))),
    }
  }
  #[inline]
  #[track_caller]
  fn expect_opaque(self, message: &str) -> T { self.expect_with(message, |_| None) }
  #[inline]
  #[track_caller]
  fn unwrap_opaque(self) -> T { self.unwrap_with(|_| None) }
  #[inline]
  fn unwrap_or_default(self) -> T where T: Default { self.as_ref().ok().cloned().unwrap_or_default() }
  #[inline]
  #[track_caller]
  fn expect_err(self, message: &str) -> E where T: Diagnose { self.clone().expect_err(message) }
  #[inline]
  #[track_caller]
  fn unwrap_err(self) -> E where T: Diagnose { self.clone().unwrap_err() }
  #[inline]
  #[track_caller]
  fn unwrap_err_with(self, describe: impl FnOnce(&T) -> Option<String>) -> E {
    match self {
      Outcome::Ok(value) => fail(compose("", "", describe(value))),
      Outcome::Err(error) => error.clone(),
    }
  }
  #[inline]
  fn unwrap_or(self, default: T) -> T { self.as_ref().ok().cloned().unwrap_or(default) }
  #[inline]
  fn unwrap_or_else(self, op: impl FnOnce(E) -> T) -> T { self.clone().unwrap_or_else(op) }

  #[inline]
  fn and<U>(self, res: Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Outcome::Ok(_) => res,
      Outcome::Err(error) => Outcome::Err(error.clone()),
    }
  }
  #[inline]
  fn and_then<U>(self, op: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> { self.clone().and_then(op) }
  #[inline]
  fn or<F>(self, res: Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Outcome::Ok(value) => Outcome::Ok(value.clone()),
      Outcome::Err(_) => res,
    }
  }
  #[inline]
  fn or_else<F>(self, op: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> { self.clone().or_else(op) }

  #[inline]
  fn convert<U: From<T>, F: From<E>>(self) -> Outcome<U, F> { self.clone().convert() }
}
