//! CRC-32 combine by multiplication modulo the CRC polynomial.
//!
//! Appending `n` bytes multiplies the register by `x^(8n)` modulo `P(x)`, and
//! the initial and final inversions cancel out, so:
//!
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod P(x) XOR crc(B)
//! ```
//!
//! Values are kept in reflected form: bit 31 is `x^0`, bit 0 is `x^31`.
//! `x^(8n)` is built by square-and-multiply starting from `x^8`.

use crate::constants::crc32::POLYNOMIAL;

/// `x^0` in reflected form.
const ONE: u32 = 1 << 31;

/// `x^8 mod P(x)`: the effect of one zero byte on the register.
const X8: u32 = 1 << (31 - 8);

/// `a * b mod P(x)`. `a` must be non-zero.
const fn mul_mod(a: u32, mut b: u32) -> u32 {
  let mut m = ONE;
  let mut p = 0;
  loop {
    if a & m != 0 {
      p ^= b;
      if a & (m - 1) == 0 {
        break;
      }
    }
    m >>= 1;
    // b *= x
    b = if b & 1 != 0 { (b >> 1) ^ POLYNOMIAL } else { b >> 1 };
  }
  p
}

/// `x^(8n) mod P(x)`.
const fn x8_pow_mod(mut n: u64) -> u32 {
  let mut p = ONE;
  let mut sq = X8;
  while n != 0 {
    if n & 1 != 0 {
      p = mul_mod(sq, p);
    }
    sq = mul_mod(sq, sq);
    n >>= 1;
  }
  p
}

/// Combine finalized CRC-32 values of adjacent buffers `A` and `B`.
#[must_use]
pub(super) const fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
  mul_mod(x8_pow_mod(len_b as u64), crc_a) ^ crc_b
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{bitwise::crc32::compute_byte, crc32};

  #[test]
  fn one_is_neutral() {
    for v in [0u32, 1, 0xDEAD_BEEF, u32::MAX] {
      assert_eq!(mul_mod(ONE, v), v);
    }
    assert_eq!(x8_pow_mod(0), ONE);
  }

  #[test]
  fn x8_matches_zero_byte_step() {
    let x8 = x8_pow_mod(1);
    assert_eq!(x8, X8);
    for reg in [0u32, 1, 0x8000_0000, 0xFFFF_FFFF, 0x1234_5678] {
      assert_eq!(mul_mod(x8, reg), compute_byte(reg, 0), "register {reg:#010x}");
    }
  }

  #[test]
  fn powers_add_exponents() {
    for (a, b) in [(1u64, 1u64), (3, 5), (100, 28), (1 << 20, 1 << 21)] {
      assert_eq!(mul_mod(x8_pow_mod(a), x8_pow_mod(b)), x8_pow_mod(a + b), "{a} + {b}");
    }
  }

  #[test]
  fn zero_tail_matches_padding() {
    let head = crc32(0, b"frame header");
    for n in [1usize, 7, 64, 1000] {
      let zeros = [0u8; 1000];
      let tail = &zeros[..n];
      assert_eq!(combine(head, crc32(0, tail), n), crc32(head, tail), "zero tail of {n} bytes");
    }
  }

  #[test]
  fn empty_tail_keeps_head() {
    assert_eq!(combine(0xCAFE_F00D, 0, 0), 0xCAFE_F00D);
  }
}
