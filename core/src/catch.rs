//! Invocation helper turning a declared error type of a fallible call into an [`Outcome`] error.

use std::error::Error;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};

use crate::abort::{fail, panic_message};
use crate::outcome::Outcome;

/// Boxed error that was not of the declared type.
pub type Undeclared = Box<dyn Error + Send + Sync>;

/// Catches errors of type `E` raised by a wrapped call.
///
/// ```
/// use tagsum_core::catch::Catch;
/// use tagsum_core::ok;
/// use std::num::ParseIntError;
///
/// let parsed = Catch::<ParseIntError>::invoke(|| "123456".parse::<i32>());
/// assert_eq!(parsed.ok(), Some(ok(123456)));
/// ```
pub struct Catch<E>(PhantomData<fn() -> E>);

impl<E: Error + Send + Sync + 'static> Catch<E> {
  /// Calls `f`. A success becomes `Ok(Outcome::Ok(..))`, an error of type `E` becomes `Ok(Outcome::Err(..))`, and any
  /// other error is returned unchanged in the outer `Err`.
  pub fn invoke<R, X>(f: impl FnOnce() -> Result<R, X>) -> Result<Outcome<R, E>, Undeclared> where
    X: Into<Undeclared>,
  {
    match f() {
      Ok(value) => Ok(Outcome::Ok(value)),
      Err(error) => match error.into().downcast::<E>() {
        Ok(declared) => Ok(Outcome::Err(*declared)),
        Err(undeclared) => Err(undeclared),
      },
    }
  }

  /// Like [`invoke`](Self::invoke), but any undeclared failure goes to the abort primitive instead of propagating:
  /// an error of another type, or a panic unwinding out of `f`.
  #[track_caller]
  pub fn invoke_or_abort<R, X>(f: impl FnOnce() -> Result<R, X>) -> Outcome<R, E> where
    X: Into<Undeclared>,
  {
    let undeclared = match panic::catch_unwind(AssertUnwindSafe(|| Self::invoke(f))) {
      Ok(Ok(outcome)) => return outcome,
      Ok(Err(undeclared)) => undeclared.to_string(),
      Err(payload) => panic_message(payload.as_ref()),
    };
    fail(format!("panics after call `invoke_or_abort`: {}", undeclared))
  }
}


#[cfg(test)]
mod tests {
  use std::fmt;
  use std::num::ParseIntError;

  use super::*;

  #[derive(Debug)]
  struct Unrelated;
  impl fmt::Display for Unrelated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("unrelated failure") }
  }
  impl Error for Unrelated {}

  #[test]
  fn declared_error_becomes_err() {
    let parsed = Catch::<ParseIntError>::invoke(|| "123456".parse::<i32>()).unwrap();
    assert_eq!(parsed, Outcome::Ok(123456));
    let failed = Catch::<ParseIntError>::invoke(|| "foo".parse::<i32>()).unwrap();
    assert!(failed.is_err());
    assert_eq!(failed.unwrap_or_default(), 0);
  }

  #[test]
  fn undeclared_error_propagates() {
    let result = Catch::<ParseIntError>::invoke(|| Err::<i32, _>(Unrelated));
    let undeclared = result.unwrap_err();
    assert_eq!(undeclared.to_string(), "unrelated failure");
  }

  #[test]
  fn boxed_declared_error_is_recovered() {
    let outcome = Catch::<Unrelated>::invoke(|| -> Result<(), Undeclared> { Err(Box::new(Unrelated)) }).unwrap();
    assert!(outcome.is_err());
  }

  #[test]
  fn permissive_variant_lets_panics_unwind() {
    let unwound = panic::catch_unwind(|| Catch::<ParseIntError>::invoke(|| -> Result<u8, ParseIntError> { panic!("boom") }));
    assert!(unwound.is_err());
  }

  #[test]
  fn strict_variant_passes_declared_errors() {
    let input = String::from("42");
    let parsed = Catch::<ParseIntError>::invoke_or_abort(|| input.parse::<u8>());
    assert_eq!(parsed, Outcome::Ok(42));
    let failed = Catch::<ParseIntError>::invoke_or_abort(|| "-1".parse::<u8>());
    assert!(failed.is_err());
  }
}
