//! Binary GCD (Stein's algorithm) and LCM.
//!
//! Uses only shifts, comparisons and subtraction, so it stays cheap on DSP
//! cores without a fast integer divider.

/// Greatest common divisor of two signed integers.
///
/// The result is sign-invariant and never negative: `gcd(a, 0) == |a|`,
/// `gcd(0, b) == |b|`, `gcd(0, 0) == 0`. It is returned as `u32` so that
/// `gcd(i32::MIN, 0) == 2^31` is representable.
///
/// # Example
///
/// ```
/// use numbers::gcd;
///
/// assert_eq!(gcd(12, -18), 6);
/// assert_eq!(gcd(0, -7), 7);
/// assert_eq!(gcd(0, 0), 0);
/// ```
#[inline]
#[must_use]
pub const fn gcd(a: i32, b: i32) -> u32 {
  gcd_u32(a.unsigned_abs(), b.unsigned_abs())
}

/// Greatest common divisor of two unsigned integers.
#[must_use]
pub const fn gcd_u32(mut a: u32, mut b: u32) -> u32 {
  if a == 0 {
    return b;
  }
  if b == 0 {
    return a;
  }

  // Largest power of two dividing both.
  let mut k = 0;
  while (a | b) & 1 == 0 {
    a >>= 1;
    b >>= 1;
    k += 1;
  }

  while a & 1 == 0 {
    a >>= 1;
  }

  // Invariant: a is odd and non-zero.
  loop {
    while b & 1 == 0 {
      b >>= 1;
    }
    if a > b {
      (a, b) = (b, a);
    }
    b -= a;
    if b == 0 {
      break;
    }
  }

  a << k
}

/// Least common multiple of two unsigned integers.
///
/// `lcm(0, x) == lcm(x, 0) == 0`. Returns `None` when the result does not fit
/// in `u32`.
///
/// # Example
///
/// ```
/// use numbers::lcm;
///
/// assert_eq!(lcm(4, 6), Some(12));
/// assert_eq!(lcm(0, 6), Some(0));
/// assert_eq!(lcm(u32::MAX, 2), None);
/// ```
#[must_use]
pub const fn lcm(a: u32, b: u32) -> Option<u32> {
  if a == 0 || b == 0 {
    return Some(0);
  }
  (a / gcd_u32(a, b)).checked_mul(b)
}
