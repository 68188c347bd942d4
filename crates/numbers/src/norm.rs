//! Fixed-point normalization.

/// Left-shift headroom of a signed 32-bit value.
///
/// Returns how many positions `val` can be shifted left before its sign bit
/// would change: `31 - c`, where `c` is the number of arithmetic right shifts
/// that reduce `val` to `0` (non-negative) or `-1` (negative).
///
/// # Example
///
/// ```
/// use numbers::norm_i32;
///
/// assert_eq!(norm_i32(0), 31);
/// assert_eq!(norm_i32(-1), 31);
/// assert_eq!(norm_i32(1), 30);
/// assert_eq!(norm_i32(i32::MIN), 0);
///
/// // Q1.31 scaling: shift by the headroom without overflowing.
/// let x = 0x0000_1234;
/// assert_eq!(x << norm_i32(x), 0x48D0_0000);
/// ```
#[must_use]
pub const fn norm_i32(mut val: i32) -> u32 {
  let mut c = 0;
  // `>>` on i32 is arithmetic.
  while val != 0 && val != -1 {
    val >>= 1;
    c += 1;
  }
  31 - c
}
