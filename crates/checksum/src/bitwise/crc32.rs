//! Table-less CRC-32 (ISO-HDLC) kernel.
//!
//! ```text
//! cur = (crc ^ byte) & 0xFF
//! repeat 8:
//!   mask = 0 - (cur & 1)    // 0x00000000 or 0xFFFFFFFF
//!   cur  = (cur >> 1) ^ (POLYNOMIAL & mask)
//! crc = cur ^ (crc >> 8)
//! ```

use crate::constants::crc32::POLYNOMIAL;

/// Run the CRC-32 register over a byte slice.
///
/// `crc` is the raw register (already inverted); the return value is too.
///
/// # Example
///
/// ```
/// use checksum::bitwise::crc32::compute;
///
/// let crc = compute(0xFFFF_FFFF, b"123456789") ^ 0xFFFF_FFFF;
/// assert_eq!(crc, 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn compute(crc: u32, data: &[u8]) -> u32 {
  data.iter().fold(crc, |crc, &byte| compute_byte(crc, byte))
}

/// Run the CRC-32 register over a single byte.
///
/// This is a `const fn` to allow compile-time CRC computation.
#[inline]
#[must_use]
pub const fn compute_byte(crc: u32, byte: u8) -> u32 {
  let mut cur = (crc ^ byte as u32) & 0xFF;

  let mut bit = 0;
  while bit < 8 {
    let mask = 0u32.wrapping_sub(cur & 1);
    cur = (cur >> 1) ^ (POLYNOMIAL & mask);
    bit += 1;
  }

  cur ^ (crc >> 8)
}
