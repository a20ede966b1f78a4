//! Optional container: zero or one value of type `T`.
//!
//! Combinators taking `self` move the payload out; the same combinators are available on `&Optional<T>` through
//! [`CopyingOptional`], where they clone the payload and leave the source intact.

use std::hint::unreachable_unchecked;

use crate::abort::fail;
use crate::diagnose::{compose, Diagnose};
use crate::outcome::Outcome;

pub use copying::CopyingOptional;

mod copying;
mod unit;

/// Presence or absence of a value of type `T`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "if unused, the payload is dropped; use `take` or a combinator"]
pub enum Optional<T> {
  Absent,
  Present(T),
}

use self::Optional::{Absent, Present};

/// Creates a present [`Optional`] holding `value`.
#[inline]
pub const fn some<T>(value: T) -> Optional<T> { Present(value) }

/// Creates an absent [`Optional`].
#[inline]
pub const fn none<T>() -> Optional<T> { Absent }

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Absent }
}

/// Message used when [`Optional::get`] is called on an absent optional.
pub(crate) const NO_VALUE: &str = "Option has no value";

/// Composed abort message for unwrapping an absent optional.
#[inline]
pub(crate) fn absent_message(message: &str, separator: &str) -> String {
  compose(message, separator, Some("None".to_string()))
}

// Tag queries

impl<T> Optional<T> {
  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Present(_)) }

  #[inline]
  pub const fn is_absent(&self) -> bool { matches!(self, Absent) }

  /// `true` if present and `predicate` holds for the payload. `predicate` is not called when absent.
  #[inline]
  pub fn is_present_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Present(value) => predicate(value),
      Absent => false,
    }
  }

  /// `true` if absent, or present and `predicate` holds for the payload.
  #[inline]
  pub fn is_absent_or(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Present(value) => predicate(value),
      Absent => true,
    }
  }
}

// Extraction

impl<T> Optional<T> {
  /// Returns the payload, aborting with `"{message}: None"` when absent.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Present(value) => value,
      Absent => fail(absent_message(message, ": ")),
    }
  }

  /// Returns the payload, aborting with `"None"` when absent.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Present(value) => value,
      Absent => fail(absent_message("", "")),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Present(value) => value,
      Absent => default,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
    match self {
      Present(value) => value,
      Absent => fallback(),
    }
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    match self {
      Present(value) => value,
      Absent => T::default(),
    }
  }

  /// Returns the payload without checking the tag.
  ///
  /// # Safety
  ///
  /// `self` must be present. Calling this on an absent optional is undefined behaviour.
  #[inline]
  pub unsafe fn unwrap_unchecked(self) -> T {
    match self {
      Present(value) => value,
      // SAFETY: the caller guarantees presence.
      Absent => unsafe { unreachable_unchecked() },
    }
  }

  /// Borrows the payload, aborting with `Option has no value` when absent.
  #[inline]
  #[track_caller]
  pub fn get(&self) -> &T {
    match self {
      Present(value) => value,
      Absent => fail(NO_VALUE),
    }
  }

  /// Mutably borrows the payload, aborting with `Option has no value` when absent.
  #[inline]
  #[track_caller]
  pub fn get_mut(&mut self) -> &mut T {
    match self {
      Present(value) => value,
      Absent => fail(NO_VALUE),
    }
  }

  /// # Safety
  ///
  /// `self` must be present.
  #[inline]
  pub unsafe fn get_unchecked(&self) -> &T {
    match self {
      Present(value) => value,
      // SAFETY: the caller guarantees presence.
      Absent => unsafe { unreachable_unchecked() },
    }
  }

  /// # Safety
  ///
  /// `self` must be present.
  #[inline]
  pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
    match self {
      Present(value) => value,
      // SAFETY: the caller guarantees presence.
      Absent => unsafe { unreachable_unchecked() },
    }
  }
}

// Transformation

impl<T> Optional<T> {
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
    match self {
      Present(value) => Present(f(value)),
      Absent => Absent,
    }
  }

  /// Applies `f` to the payload, or returns `default` when absent. The result is not wrapped.
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Present(value) => f(value),
      Absent => default,
    }
  }

  /// Applies `f` to the payload, or calls `fallback` when absent.
  #[inline]
  pub fn map_or_else<U>(self, fallback: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Present(value) => f(value),
      Absent => fallback(),
    }
  }

  /// Calls `f` with a reference to the payload if present, then returns `self` unchanged.
  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Present(value) = &self {
      f(value);
    }
    self
  }

  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    if let Present(value) = self {
      if predicate(&value) {
        return Present(value);
      }
    }
    Absent
  }

  #[inline]
  pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
    match (self, other) {
      (Present(a), Present(b)) => Present((a, b)),
      _ => Absent,
    }
  }
}

impl<T, U> Optional<(T, U)> {
  #[inline]
  pub fn unzip(self) -> (Optional<T>, Optional<U>) {
    match self {
      Present((a, b)) => (Present(a), Present(b)),
      Absent => (Absent, Absent),
    }
  }
}

// Chaining and fallback

impl<T> Optional<T> {
  /// `other` if `self` is present, otherwise absent.
  #[inline]
  pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
    match self {
      Present(_) => other,
      Absent => Absent,
    }
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self {
      Present(value) => f(value),
      Absent => Absent,
    }
  }

  /// `self` if present, otherwise `other`.
  #[inline]
  pub fn or(self, other: Self) -> Self {
    match self {
      present @ Present(_) => present,
      Absent => other,
    }
  }

  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      present @ Present(_) => present,
      Absent => f(),
    }
  }

  /// Present only if exactly one of `self` and `other` is present.
  #[inline]
  pub fn xor_else(self, other: Self) -> Self {
    match (self, other) {
      (present @ Present(_), Absent) | (Absent, present @ Present(_)) => present,
      _ => Absent,
    }
  }

  #[inline]
  pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
    match self {
      Present(value) => Outcome::Ok(value),
      Absent => Outcome::Err(err),
    }
  }

  #[inline]
  pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Outcome<T, E> {
    match self {
      Present(value) => Outcome::Ok(value),
      Absent => Outcome::Err(err()),
    }
  }
}

// In-place mutation

impl<T> Optional<T> {
  /// Stores `value`, dropping any previous payload, and returns a reference to it.
  #[inline]
  pub fn insert(&mut self, value: T) -> &mut T {
    *self = Present(value);
    // SAFETY: a `Present` variant was just assigned.
    unsafe { self.get_unchecked_mut() }
  }

  /// Stores `value` if absent, then returns a reference to the payload.
  #[inline]
  pub fn get_or_insert(&mut self, value: T) -> &mut T {
    self.get_or_insert_with(|| value)
  }

  #[inline]
  pub fn get_or_insert_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
    if let Absent = self {
      *self = Present(f());
    }
    // SAFETY: a `Present` variant was assigned above if there was none.
    unsafe { self.get_unchecked_mut() }
  }

  #[inline]
  pub fn get_or_insert_default(&mut self) -> &mut T where T: Default {
    self.get_or_insert_with(T::default)
  }

  /// Moves the current state out, leaving `self` absent.
  #[inline]
  pub fn take(&mut self) -> Self {
    std::mem::replace(self, Absent)
  }

  /// Like [`take`](Self::take), but only when `predicate` holds for the payload; otherwise `self` is left untouched
  /// and absent is returned.
  #[inline]
  pub fn take_if(&mut self, predicate: impl FnOnce(&mut T) -> bool) -> Self {
    if self.as_mut().map_or(false, predicate) {
      self.take()
    } else {
      Absent
    }
  }

  /// Stores `value` and returns the previous state.
  #[inline]
  pub fn replace(&mut self, value: T) -> Self {
    std::mem::replace(self, Present(value))
  }

  /// Replaces the state of `self` with `other`, converting its payload.
  #[inline]
  pub fn assign<U>(&mut self, other: Optional<U>) -> &mut Self where T: From<U> {
    *self = other.convert();
    self
  }
}

// Views

impl<T> Optional<T> {
  /// Optional of a shared reference to the payload.
  ///
  /// The view borrows `self`; it cannot outlive or coexist with a reassignment of the source:
  ///
  /// ```compile_fail
  /// # use tagsum_core::some;
  /// let view = {
  ///   let source = some(String::from("dropped"));
  ///   source.as_ref()
  /// };
  /// assert!(view.is_present());
  /// ```
  ///
  /// ```compile_fail
  /// # use tagsum_core::some;
  /// let mut source = some(1);
  /// let view = source.as_ref();
  /// source = some(2);
  /// assert!(view.is_present());
  /// ```
  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Present(value) => Present(value),
      Absent => Absent,
    }
  }

  /// Same as [`as_ref`](Self::as_ref).
  #[inline]
  pub const fn as_cref(&self) -> Optional<&T> { self.as_ref() }

  /// Optional of a mutable reference to the payload.
  #[inline]
  pub fn as_mut(&mut self) -> Optional<&mut T> {
    match self {
      Present(value) => Present(value),
      Absent => Absent,
    }
  }

  /// `self` as a shared reference, selecting the cloning combinators of [`CopyingOptional`].
  #[inline]
  pub const fn as_const(&self) -> &Self { self }
}

impl<T: Clone> Optional<&T> {
  #[inline]
  pub fn cloned(self) -> Optional<T> { self.map(T::clone) }
}
impl<T: Copy> Optional<&T> {
  #[inline]
  pub fn copied(self) -> Optional<T> { self.map(|value| *value) }
}
impl<T: Clone> Optional<&mut T> {
  #[inline]
  pub fn cloned(self) -> Optional<T> { self.map(|value| value.clone()) }
}
impl<T: Copy> Optional<&mut T> {
  #[inline]
  pub fn copied(self) -> Optional<T> { self.map(|value| *value) }
}

// Conversion

impl<T> Optional<T> {
  /// Converts the payload into `U`; available when the conversion is lossless (`U: From<T>`).
  #[inline]
  pub fn convert<U: From<T>>(self) -> Optional<U> {
    self.map(U::from)
  }

  /// Converts the payload into `U` where that conversion can fail. Absent converts to `Ok(Absent)`.
  #[inline]
  pub fn try_convert<U: TryFrom<T>>(self) -> Outcome<Optional<U>, U::Error> {
    match self {
      Present(value) => match U::try_from(value) {
        Ok(converted) => Outcome::Ok(Present(converted)),
        Err(e) => Outcome::Err(e),
      },
      Absent => Outcome::Ok(Absent),
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Present(value) => Some(value),
      Absent => None,
    }
  }
}

impl<T> From<T> for Optional<T> {
  #[inline]
  fn from(value: T) -> Self { Present(value) }
}
impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Present(value),
      None => Absent,
    }
  }
}
impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.into_option() }
}

impl<T: Diagnose> Diagnose for Optional<T> {
  fn diagnose(&self) -> Option<String> {
    match self {
      Present(value) => value.diagnose(),
      Absent => Some("None".to_string()),
    }
  }
}
