//! CRC-32 (ISO-HDLC) entry points.
//!
//! - [`crc32()`] - one call over a buffer, chainable through `base`
//! - [`Crc32`] - streaming hasher with resume and combine

mod combine;
#[cfg(test)]
mod proptests;

use core::fmt;

use traits::{Checksum, ChecksumCombine};

use crate::bitwise::crc32::compute;

/// Compute CRC-32 over `data`, continuing from `base`.
///
/// Pass `0` to start a new checksum, or a previous result to extend it:
/// `crc32(crc32(0, a), b) == crc32(0, a ++ b)`. An empty `data` returns
/// `base` unchanged.
///
/// # Example
///
/// ```
/// use checksum::crc32;
///
/// assert_eq!(crc32(0, b""), 0);
/// assert_eq!(crc32(0, b"123456789"), 0xCBF4_3926);
///
/// let head = crc32(0, b"12345");
/// assert_eq!(crc32(head, b"6789"), 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn crc32(base: u32, data: &[u8]) -> u32 {
  !compute(!base, data)
}

/// CRC-32 (ISO-HDLC) streaming hasher.
///
/// Table-free: the whole state is one `u32` register.
///
/// # Example
///
/// ```
/// use checksum::{Checksum, Crc32};
///
/// let mut hasher = Crc32::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), 0xCBF4_3926);
/// ```
#[derive(Clone)]
pub struct Crc32 {
  state: u32,
}

impl Crc32 {
  /// Create a hasher to resume from a previous CRC value.
  ///
  /// Equivalent to passing `crc` as the `base` of [`crc32()`].
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { state: crc ^ !0 }
  }
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    Self { state: !0 }
  }
}

impl fmt::Debug for Crc32 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc32").field("crc", &format_args!("{:#010x}", self.finalize())).finish()
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = compute(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.state ^ !0
  }

  #[inline]
  fn reset(&mut self) {
    self.state = !0;
  }
}

impl ChecksumCombine for Crc32 {
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    combine::combine(crc_a, crc_b, len_b)
  }
}
