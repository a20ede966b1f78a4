use proptest::prelude::*;

use tagsum_core::prelude::*;

fn optional() -> impl Strategy<Value=Optional<i32>> {
  proptest::option::of(any::<i32>()).prop_map(Optional::<i32>::from)
}

fn outcome() -> impl Strategy<Value=Outcome<i32, u8>> {
  proptest::result::maybe_ok(any::<i32>(), any::<u8>()).prop_map(Outcome::<i32, u8>::from)
}

fn halve(value: i32) -> Optional<i32> {
  if value % 2 == 0 { some(value / 2) } else { none() }
}

fn checked_inc(value: i32) -> Outcome<i32, u8> {
  match value.checked_add(1) {
    Some(incremented) => ok(incremented),
    None => err(0),
  }
}

proptest! {
  #[test]
  fn optional_map_identity(x in optional()) {
    prop_assert_eq!(x.map(|v| v), x);
  }

  #[test]
  fn optional_and_then_associates(x in optional()) {
    prop_assert_eq!(x.and_then(halve).and_then(halve), x.and_then(|v| halve(v).and_then(halve)));
  }

  #[test]
  fn optional_matches_std_option(x in optional(), fallback in any::<i32>()) {
    let plain: Option<i32> = x.into();
    prop_assert_eq!(x.unwrap_or(fallback), plain.unwrap_or(fallback));
    prop_assert_eq!(x.is_present(), plain.is_some());
    prop_assert_eq!(x.filter(|v| *v > 0).into_option(), plain.filter(|v| *v > 0));
    prop_assert_eq!(Optional::<i32>::from(plain), x);
  }

  #[test]
  fn optional_xor_has_at_most_one_side(x in optional(), y in optional()) {
    let xor = x.xor_else(y);
    prop_assert_eq!(xor.is_present(), x.is_present() != y.is_present());
  }

  #[test]
  fn zip_then_unzip_restores_both(x in any::<i32>(), y in any::<u8>()) {
    prop_assert_eq!(some(x).zip(some(y)).unzip(), (some(x), some(y)));
  }

  #[test]
  fn zip_with_absent_is_absent(x in optional()) {
    prop_assert!(x.zip(none::<u8>()).is_absent());
  }

  #[test]
  fn borrowed_combinators_agree_with_owned(x in optional()) {
    prop_assert_eq!(x.as_const().map(|v| v.wrapping_mul(3)), x.map(|v| v.wrapping_mul(3)));
    prop_assert_eq!(x.as_const().unwrap_or_default(), x.unwrap_or_default());
  }

  #[test]
  fn outcome_map_identity(x in outcome()) {
    prop_assert_eq!(x.map(|v| v).map_err(|e| e), x);
  }

  #[test]
  fn outcome_and_then_associates(x in outcome()) {
    prop_assert_eq!(
      x.and_then(checked_inc).and_then(checked_inc),
      x.and_then(|v| checked_inc(v).and_then(checked_inc))
    );
  }

  #[test]
  fn outcome_matches_std_result(x in outcome()) {
    let plain: Result<i32, u8> = x.into();
    prop_assert_eq!(x.is_ok(), plain.is_ok());
    prop_assert_eq!(x.ok().into_option(), plain.ok());
    prop_assert_eq!(x.err().into_option(), plain.err());
    prop_assert_eq!(x.unwrap_or_else(i32::from), plain.unwrap_or_else(i32::from));
  }

  #[test]
  fn outcome_exactly_one_alternative(x in outcome()) {
    prop_assert!(x.is_ok() != x.is_err());
    prop_assert_eq!(x.ok().is_present(), x.is_ok());
  }

  #[test]
  fn ok_or_round_trips_through_ok(x in optional()) {
    prop_assert_eq!(x.ok_or(7u8).ok(), x);
  }
}
