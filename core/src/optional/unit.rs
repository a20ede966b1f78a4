use super::Optional::{self, Absent, Present};

/// Marker-only optional: present carries no payload.
impl Optional<()> {
  /// A present marker.
  #[inline]
  pub const fn marker() -> Self { Present(()) }

  /// Present if `flag` holds, absent otherwise.
  #[inline]
  pub const fn from_flag(flag: bool) -> Self {
    if flag { Present(()) } else { Absent }
  }

  /// Marks `self` present, returning the previous state.
  #[inline]
  pub fn set(&mut self) -> Self {
    self.replace(())
  }

  /// Computes a payload from nothing when present.
  #[inline]
  pub fn map_unit<U>(self, f: impl FnOnce() -> U) -> Optional<U> { self.map(|()| f()) }

  #[inline]
  pub fn and_then_unit<U>(self, f: impl FnOnce() -> Optional<U>) -> Optional<U> { self.and_then(|()| f()) }
}
