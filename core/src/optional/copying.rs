use crate::abort::fail;
use crate::outcome::Outcome;

use super::{absent_message, Optional};
use super::Optional::{Absent, Present};

/// Combinators on a borrowed [`Optional`]: each clones the payload into its result, leaving the source untouched.
///
/// Method names and semantics match the owned combinators on [`Optional`]. Call them through
/// [`as_const`](Optional::as_const) or any shared reference:
///
/// ```
/// use tagsum_core::prelude::*;
///
/// let x = some(vec![1, 2, 3]);
/// let len = x.as_const().map(|v| v.len());
/// assert_eq!(len, some(3));
/// assert_eq!(x.as_const().unwrap(), vec![1, 2, 3]); // `x` still holds its payload
/// ```
pub trait CopyingOptional {
  type Payload;

  fn expect(self, message: &str) -> Self::Payload;
  fn unwrap(self) -> Self::Payload;
  fn unwrap_or(self, default: Self::Payload) -> Self::Payload;
  fn unwrap_or_else(self, fallback: impl FnOnce() -> Self::Payload) -> Self::Payload;
  fn unwrap_or_default(self) -> Self::Payload where Self::Payload: Default;

  fn map<U>(self, f: impl FnOnce(Self::Payload) -> U) -> Optional<U>;
  fn map_or<U>(self, default: U, f: impl FnOnce(Self::Payload) -> U) -> U;
  fn map_or_else<U>(self, fallback: impl FnOnce() -> U, f: impl FnOnce(Self::Payload) -> U) -> U;
  fn filter(self, predicate: impl FnOnce(&Self::Payload) -> bool) -> Optional<Self::Payload>;
  fn zip<U>(self, other: Optional<U>) -> Optional<(Self::Payload, U)>;

  fn and<U>(self, other: Optional<U>) -> Optional<U>;
  fn and_then<U>(self, f: impl FnOnce(Self::Payload) -> Optional<U>) -> Optional<U>;
  fn or(self, other: Optional<Self::Payload>) -> Optional<Self::Payload>;
  fn or_else(self, f: impl FnOnce() -> Optional<Self::Payload>) -> Optional<Self::Payload>;
  fn xor_else(self, other: Optional<Self::Payload>) -> Optional<Self::Payload>;

  fn ok_or<E>(self, err: E) -> Outcome<Self::Payload, E>;
  fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Outcome<Self::Payload, E>;

  fn convert<U: From<Self::Payload>>(self) -> Optional<U>;
}

impl<T: Clone> CopyingOptional for &Optional<T> {
  type Payload = T;

  #[inline]
  #[track_caller]
  fn expect(self, message: &str) -> T {
    match self {
      Present(value) => value.clone(),
      Absent => fail(absent_message(message, ": ")),
    }
  }
  #[inline]
  #[track_caller]
  fn unwrap(self) -> T {
    match self {
      Present(value) => value.clone(),
      Absent => fail(absent_message("", "")),
    }
  }
  #[inline]
  fn unwrap_or(self, default: T) -> T {
    self.as_ref().cloned().unwrap_or(default)
  }
  #[inline]
  fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
    self.as_ref().cloned().unwrap_or_else(fallback)
  }
  #[inline]
  fn unwrap_or_default(self) -> T where T: Default {
    self.as_ref().cloned().unwrap_or_default()
  }

  #[inline]
  fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
    self.as_ref().cloned().map(f)
  }
  #[inline]
  fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    self.as_ref().cloned().map_or(default, f)
  }
  #[inline]
  fn map_or_else<U>(self, fallback: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    self.as_ref().cloned().map_or_else(fallback, f)
  }
  #[inline]
  fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Optional<T> {
    match self {
      Present(value) => if predicate(value) { Present(value.clone()) } else { Absent },
      Absent => Absent,
    }
  }
  #[inline]
  fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
    self.as_ref().cloned().zip(other)
  }

  #[inline]
  fn and<U>(self, other: Optional<U>) -> Optional<U> {
    self.as_ref().and(other)
  }
  #[inline]
  fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    self.as_ref().cloned().and_then(f)
  }
  #[inline]
  fn or(self, other: Optional<T>) -> Optional<T> {
    self.as_ref().cloned().or(other)
  }
  #[inline]
  fn or_else(self, f: impl FnOnce() -> Optional<T>) -> Optional<T> {
    self.as_ref().cloned().or_else(f)
  }
  #[inline]
  fn xor_else(self, other: Optional<T>) -> Optional<T> {
    self.as_ref().cloned().xor_else(other)
  }

  #[inline]
  fn ok_or<E>(self, err: E) -> Outcome<T, E> {
    self.as_ref().cloned().ok_or(err)
  }
  #[inline]
  fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Outcome<T, E> {
    self.as_ref().cloned().ok_or_else(err)
  }

  #[inline]
  fn convert<U: From<T>>(self) -> Optional<U> {
    self.as_ref().cloned().convert()
  }
}


#[cfg(test)]
mod tests {
  use crate::optional::{none, some, CopyingOptional, Optional};
  use crate::outcome::Outcome;

  #[test]
  fn borrowed_combinators_leave_source_intact() {
    let x = some(vec![1, 2, 3, 4]);
    assert_eq!(x.as_const().map(|v| v.len()), some(4));
    assert_eq!(x.as_const().unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(x.as_const().expect("present"), vec![1, 2, 3, 4]);
    assert_eq!(x.as_const().ok_or(()), Outcome::Ok(vec![1, 2, 3, 4]));
    assert_eq!(x.as_const().and_then(|v| some(v.len())), some(4));
    assert_eq!(x.get().len(), 4);
  }

  #[test]
  fn borrowed_fallbacks() {
    let absent: Optional<String> = none();
    assert_eq!(absent.as_const().unwrap_or("d".to_string()), "d");
    assert_eq!(absent.as_const().unwrap_or_else(|| "e".to_string()), "e");
    assert_eq!(absent.as_const().unwrap_or_default(), "");
    assert_eq!(absent.as_const().map_or(0, |s| s.len()), 0);
    assert_eq!(absent.as_const().map_or_else(|| 1, |s| s.len()), 1);
    assert_eq!(absent.as_const().or(some("o".to_string())), some("o".to_string()));
    assert_eq!(absent.as_const().or_else(|| some("p".to_string())), some("p".to_string()));
    assert_eq!(absent.as_const().ok_or_else(|| 5), Outcome::Err(5));
  }

  #[test]
  fn borrowed_filter_xor_zip() {
    let x = some(String::from("abc"));
    assert_eq!(x.as_const().filter(|s| s.len() == 3), some(String::from("abc")));
    assert_eq!(x.as_const().filter(|s| s.is_empty()), none());
    assert_eq!(x.as_const().xor_else(none()), some(String::from("abc")));
    assert_eq!(x.as_const().xor_else(some(String::new())), none());
    assert_eq!(x.as_const().zip(some(1)), some((String::from("abc"), 1)));
    assert_eq!(x.as_const().and(some(2)), some(2));
    assert_eq!(x.as_const().convert::<Box<str>>(), some(Box::from("abc")));
    assert!(x.is_present_and(|s| s == "abc"));
  }

  #[test]
  fn shared_reference_receiver() {
    let x = some(5);
    let r = &x;
    assert_eq!(r.map(|v| v + 1), some(6));
    assert_eq!(x, some(5));
  }
}
