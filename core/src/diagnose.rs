//! Opt-in payload formatting for abort diagnostics.
//!
//! When an `unwrap`-style operation hits the wrong alternative, the report contains the offending payload only if its
//! type can describe itself. [`Diagnose`] is that capability: implement it returning `Some(text)` to have the payload
//! shown, or leave the default (`None`) to report the message alone.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::util::sequence::{Delimiters, Sequence};

/// Formatter hook consulted by abort diagnostics.
pub trait Diagnose {
  /// Text describing `self`, or `None` when this type is not displayable.
  #[inline]
  fn diagnose(&self) -> Option<String> { None }
}

/// Composes an abort message: `message`, `separator`, and the payload text when there is one; only `message`
/// otherwise.
pub fn compose(message: &str, separator: &str, payload: Option<String>) -> String {
  match payload {
    Some(payload) => {
      let mut composed = String::with_capacity(message.len() + separator.len() + payload.len());
      composed.push_str(message);
      composed.push_str(separator);
      composed.push_str(&payload);
      composed
    }
    None => message.to_string(),
  }
}

/// Implements [`Diagnose`] through [`Display`](std::fmt::Display) for the given types.
///
/// ```
/// use std::fmt;
/// use tagsum_core::diagnose::Diagnose;
///
/// struct Code(u16);
/// impl fmt::Display for Code {
///   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "E{:04}", self.0) }
/// }
/// tagsum_core::impl_diagnose_display!(Code);
///
/// assert_eq!(Code(7).diagnose().as_deref(), Some("E0007"));
/// ```
#[macro_export]
macro_rules! impl_diagnose_display {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl $crate::diagnose::Diagnose for $ty {
        #[inline]
        fn diagnose(&self) -> ::std::option::Option<::std::string::String> {
          ::std::option::Option::Some(::std::string::ToString::to_string(self))
        }
      }
    )+
  };
}

impl_diagnose_display!(
  i8, i16, i32, i64, i128, isize,
  u8, u16, u32, u64, u128, usize,
  f32, f64, bool, char, str, String,
  std::num::ParseIntError,
  std::num::ParseFloatError,
  std::num::TryFromIntError,
  std::str::ParseBoolError,
  std::char::ParseCharError,
  std::string::FromUtf8Error,
  std::io::Error,
  std::fmt::Error,
);

impl Diagnose for () {}

impl Diagnose for dyn std::error::Error {
  #[inline]
  fn diagnose(&self) -> Option<String> { Some(self.to_string()) }
}
impl Diagnose for dyn std::error::Error + Send + Sync {
  #[inline]
  fn diagnose(&self) -> Option<String> { Some(self.to_string()) }
}

impl<T: Diagnose + ?Sized> Diagnose for &T {
  #[inline]
  fn diagnose(&self) -> Option<String> { (**self).diagnose() }
}
impl<T: Diagnose + ?Sized> Diagnose for &mut T {
  #[inline]
  fn diagnose(&self) -> Option<String> { (**self).diagnose() }
}
impl<T: Diagnose + ?Sized> Diagnose for Box<T> {
  #[inline]
  fn diagnose(&self) -> Option<String> { (**self).diagnose() }
}
impl<T: Diagnose + ?Sized> Diagnose for Rc<T> {
  #[inline]
  fn diagnose(&self) -> Option<String> { (**self).diagnose() }
}
impl<T: Diagnose + ?Sized> Diagnose for Arc<T> {
  #[inline]
  fn diagnose(&self) -> Option<String> { (**self).diagnose() }
}
impl<T: Diagnose + ToOwned + ?Sized> Diagnose for Cow<'_, T> {
  #[inline]
  fn diagnose(&self) -> Option<String> { (**self).diagnose() }
}

/// Sequences are displayable when every element is; rendered as `[a, b, c]`.
impl<T: Diagnose> Diagnose for [T] {
  fn diagnose(&self) -> Option<String> {
    let elements = self.iter().map(Diagnose::diagnose).collect::<Option<Vec<_>>>()?;
    Some(Sequence::new(&elements).to_string())
  }
}
impl<T: Diagnose, const N: usize> Diagnose for [T; N] {
  #[inline]
  fn diagnose(&self) -> Option<String> { self.as_slice().diagnose() }
}
impl<T: Diagnose> Diagnose for Vec<T> {
  #[inline]
  fn diagnose(&self) -> Option<String> { self.as_slice().diagnose() }
}

/// Same rendering as an absent [`Optional`](crate::Optional): `None`.
impl<T: Diagnose> Diagnose for Option<T> {
  fn diagnose(&self) -> Option<String> {
    match self {
      Some(value) => value.diagnose(),
      None => Some("None".to_string()),
    }
  }
}

/// Tuples are displayable when every element is; rendered as `(a, b, c)`.
macro_rules! impl_diagnose_tuple {
  ($($name:ident),+) => {
    impl<$($name: Diagnose),+> Diagnose for ($($name,)+) {
      #[allow(non_snake_case)]
      fn diagnose(&self) -> Option<String> {
        let ($($name,)+) = self;
        let elements = [$($name.diagnose()?),+];
        Some(Sequence::new(&elements).with_delimiters(Delimiters::new("(", ", ", ")")).to_string())
      }
    }
  };
}
impl_diagnose_tuple!(A);
impl_diagnose_tuple!(A, B);
impl_diagnose_tuple!(A, B, C);
impl_diagnose_tuple!(A, B, C, D);
impl_diagnose_tuple!(A, B, C, D, E);
impl_diagnose_tuple!(A, B, C, D, E, F);


#[cfg(test)]
mod tests {
  use super::*;

  struct Opaque;
  impl Diagnose for Opaque {}

  #[test]
  fn compose_with_payload() {
    assert_eq!(compose("Error", ": ", Some("code".to_string())), "Error: code");
    assert_eq!(compose("", "", Some("42".to_string())), "42");
  }

  #[test]
  fn compose_without_payload() {
    assert_eq!(compose("Error", ": ", None), "Error");
    assert_eq!(compose("", "", None), "");
  }

  #[test]
  fn displayable_payloads() {
    assert_eq!(42u32.diagnose().as_deref(), Some("42"));
    assert_eq!("emergency failure".diagnose().as_deref(), Some("emergency failure"));
    assert_eq!(String::from("x").diagnose().as_deref(), Some("x"));
    assert_eq!(Box::new(7i64).diagnose().as_deref(), Some("7"));
    assert_eq!(Cow::Borrowed("cow").diagnose().as_deref(), Some("cow"));
    let parse_error = "foo".parse::<i32>().unwrap_err();
    assert_eq!(parse_error.diagnose(), Some(parse_error.to_string()));
  }

  #[test]
  fn opaque_payloads() {
    assert_eq!(Opaque.diagnose(), None);
    assert_eq!(().diagnose(), None);
    assert_eq!((&Opaque).diagnose(), None);
  }

  #[test]
  fn sequence_payloads() {
    assert_eq!(vec![1, 2, 3].diagnose().as_deref(), Some("[1, 2, 3]"));
    assert_eq!(["a", "b"].diagnose().as_deref(), Some("[a, b]"));
    assert_eq!(Vec::<u8>::new().diagnose().as_deref(), Some("[]"));
    assert_eq!(vec![Opaque, Opaque].diagnose(), None);
  }

  #[test]
  fn tuple_payloads() {
    assert_eq!((1u8, "a").diagnose().as_deref(), Some("(1, a)"));
    assert_eq!((7i32,).diagnose().as_deref(), Some("(7)"));
    assert_eq!((1u8, 'c', String::from("s"), true).diagnose().as_deref(), Some("(1, c, s, true)"));
    assert_eq!((1u8, Opaque).diagnose(), None);
  }

  #[test]
  fn std_option_payloads() {
    assert_eq!(Some(3u8).diagnose().as_deref(), Some("3"));
    assert_eq!(None::<u8>.diagnose().as_deref(), Some("None"));
    assert_eq!(Some(Opaque).diagnose(), None);
  }
}
