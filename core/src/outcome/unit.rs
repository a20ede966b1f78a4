use super::Outcome;

/// Outcome with no success payload: ok only signals success.
impl<E> Outcome<(), E> {
  #[inline]
  pub const fn success() -> Self { Outcome::Ok(()) }

  /// Computes a success value from nothing when ok; the error is propagated.
  #[inline]
  pub fn map_unit<U>(self, f: impl FnOnce() -> U) -> Outcome<U, E> { self.map(|()| f()) }

  #[inline]
  pub fn and_then_unit<U>(self, op: impl FnOnce() -> Outcome<U, E>) -> Outcome<U, E> { self.and_then(|()| op()) }

  #[inline]
  pub fn map_or_else_unit<U>(self, fallback: impl FnOnce(E) -> U, f: impl FnOnce() -> U) -> U {
    self.map_or_else(fallback, |()| f())
  }
}


#[cfg(test)]
mod tests {
  use crate::outcome::{err, ok};

  use super::*;

  #[test]
  fn unit_success() {
    let x: Outcome<(), &str> = Outcome::success();
    assert!(x.is_ok());
    assert_eq!(x.map_unit(|| 5), ok(5));
    assert_eq!(x.and_then_unit(|| err::<u8, &str>("then")), err("then"));
    assert_eq!(x.map_or_else_unit(str::len, || 0), 0);
  }

  #[test]
  fn unit_failure() {
    let x: Outcome<(), &str> = err("four");
    assert_eq!(x.map_unit(|| 5), err("four"));
    assert_eq!(x.and_then_unit(|| ok::<u8, &str>(1)), err("four"));
    assert_eq!(x.map_or_else_unit(str::len, || 0), 4);
  }
}
