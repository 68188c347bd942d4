extern crate std;

use proptest::prelude::*;

use super::*;

proptest! {
  #[test]
  fn gcd_commutative(a in any::<i32>(), b in any::<i32>()) {
    prop_assert_eq!(gcd(a, b), gcd(b, a));
  }

  #[test]
  fn gcd_sign_invariant(a in any::<i32>(), b in any::<i32>()) {
    let g = gcd(a, b);
    prop_assert_eq!(gcd(a.wrapping_neg(), b), g);
    prop_assert_eq!(gcd(a, b.wrapping_neg()), g);
  }

  #[test]
  fn gcd_divides_both(a in any::<i32>(), b in any::<i32>()) {
    let g = i64::from(gcd(a, b));
    if g != 0 {
      prop_assert_eq!(i64::from(a) % g, 0);
      prop_assert_eq!(i64::from(b) % g, 0);
    }
  }

  #[test]
  fn gcd_matches_euclid(a in any::<u32>(), b in any::<u32>()) {
    let (mut x, mut y) = (a, b);
    while y != 0 {
      (x, y) = (y, x % y);
    }
    prop_assert_eq!(gcd_u32(a, b), x);
  }

  #[test]
  fn gcd_zero_identity(a in any::<i32>()) {
    prop_assert_eq!(gcd(a, 0), a.unsigned_abs());
    prop_assert_eq!(gcd(0, a), a.unsigned_abs());
  }

  #[test]
  fn lcm_is_common_multiple(a in 1u32..=0xFFFF, b in 1u32..=0xFFFF) {
    // Both below 2^16, so the product always fits.
    let l = lcm(a, b);
    prop_assert_eq!(l, Some(a / gcd_u32(a, b) * b));
    if let Some(l) = l {
      prop_assert_eq!(l % a, 0);
      prop_assert_eq!(l % b, 0);
    }
  }

  #[test]
  fn frame_align_satisfies_both_constraints(
    byte_align in 1u32..=4096,
    frame_align_req in 1u32..=64,
    frame_size in 1u32..=64,
  ) {
    let n = frame_align(byte_align, frame_align_req, frame_size);
    prop_assert!(n.is_ok());
    if let Ok(n) = n {
      prop_assert!(n > 0);
      prop_assert_eq!(u64::from(n) * u64::from(frame_size) % u64::from(byte_align), 0);
      prop_assert_eq!(n % frame_align_req, 0);
    }
  }

  #[test]
  fn fls_matches_leading_zeros(x in any::<u32>()) {
    prop_assert_eq!(fls(x), 32 - x.leading_zeros());
  }

  #[cfg(feature = "norm")]
  #[test]
  fn norm_matches_leading_sign_bits(x in any::<i32>()) {
    let redundant = if x < 0 { (!x).leading_zeros() } else { x.leading_zeros() };
    prop_assert_eq!(norm_i32(x), redundant - 1);
  }

  #[cfg(feature = "vector-find")]
  #[test]
  fn find_equal_reports_every_match(vec in prop::collection::vec(-4i16..=4, 0..256), target in -4i16..=4) {
    let mut out = std::vec![0usize; vec.len()];
    let n = find_equal_i16(&mut out, &vec, target, 0);
    let expected: std::vec::Vec<usize> = (0..vec.len()).filter(|&i| vec[i] == target).collect();
    prop_assert_eq!(&out[..n], expected.as_slice());
  }

  #[cfg(feature = "vector-find")]
  #[test]
  fn find_equal_respects_limit(vec in prop::collection::vec(-2i16..=2, 0..128), limit in 1usize..8) {
    let mut out = std::vec![0usize; vec.len()];
    let all = find_equal_i16(&mut out, &vec, 0, 0);
    let mut limited = std::vec![0usize; vec.len()];
    let n = find_equal_i16(&mut limited, &vec, 0, limit);
    prop_assert_eq!(n, all.min(limit));
    prop_assert_eq!(&limited[..n], &out[..n]);
  }

  #[cfg(feature = "vector-find")]
  #[test]
  fn find_max_abs_matches_wide_reference(vec in prop::collection::vec(any::<i32>(), 1..128)) {
    let reference = vec.iter().map(|&v| i64::from(v).abs()).max().unwrap_or(0).min(i64::from(i32::MAX));
    prop_assert_eq!(find_max_abs_i32(&vec), Some(reference as i32));
  }
}
