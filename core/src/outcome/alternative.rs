use crate::optional::Optional;

use super::Outcome;

/// Positional access to alternative `I` of a sum type: `0` is the success value, `1` the error value.
///
/// Positions stay unambiguous when both alternatives share a type, e.g. `Outcome<u32, u32>`.
pub trait Alternative<const I: usize> {
  type Payload;

  /// Present if alternative `I` is live.
  fn alternative(&self) -> Optional<&Self::Payload>;
  fn alternative_mut(&mut self) -> Optional<&mut Self::Payload>;
}

impl<T, E> Alternative<0> for Outcome<T, E> {
  type Payload = T;

  #[inline]
  fn alternative(&self) -> Optional<&T> { self.as_ref().ok() }
  #[inline]
  fn alternative_mut(&mut self) -> Optional<&mut T> { self.as_mut().ok() }
}

impl<T, E> Alternative<1> for Outcome<T, E> {
  type Payload = E;

  #[inline]
  fn alternative(&self) -> Optional<&E> { self.as_ref().err() }
  #[inline]
  fn alternative_mut(&mut self) -> Optional<&mut E> { self.as_mut().err() }
}


#[cfg(test)]
mod tests {
  use crate::optional::some;
  use crate::outcome::{err, ok};

  use super::*;

  #[test]
  fn same_typed_alternatives_are_positional() {
    let x: Outcome<u32, u32> = ok(1);
    assert_eq!(<Outcome<u32, u32> as Alternative<0>>::alternative(&x), some(&1));
    assert!(<Outcome<u32, u32> as Alternative<1>>::alternative(&x).is_absent());

    let mut y: Outcome<u32, u32> = err(2);
    if let Optional::Present(e) = <Outcome<u32, u32> as Alternative<1>>::alternative_mut(&mut y) {
      *e = 3;
    }
    assert_eq!(y, err(3));
  }
}
