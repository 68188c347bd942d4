//! Saturating narrowing for fixed-point samples.
//!
//! Values outside the target range clamp to its nearest bound instead of
//! wrapping.

/// Saturate an `i64` into the `i32` range.
///
/// ```
/// use numbers::sat::sat_i32;
///
/// assert_eq!(sat_i32(1 << 31), i32::MAX);
/// assert_eq!(sat_i32(-5), -5);
/// ```
#[inline]
#[must_use]
pub const fn sat_i32(x: i64) -> i32 {
  if x > i32::MAX as i64 {
    i32::MAX
  } else if x < i32::MIN as i64 {
    i32::MIN
  } else {
    x as i32
  }
}
