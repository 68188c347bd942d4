//! Bit scanning.

/// Find last set: 1-based position of the most significant set bit.
///
/// `fls(0) == 0`, `fls(1) == 1`, `fls(0x8000_0000) == 32`.
///
/// Narrows the position by halves (16, 8, 4, 2, 1 bits), so the cost does not
/// depend on the magnitude of `x`.
#[must_use]
pub const fn fls(mut x: u32) -> u32 {
  if x == 0 {
    return 0;
  }

  let mut r = 32;
  if x & 0xFFFF_0000 == 0 {
    x <<= 16;
    r -= 16;
  }
  if x & 0xFF00_0000 == 0 {
    x <<= 8;
    r -= 8;
  }
  if x & 0xF000_0000 == 0 {
    x <<= 4;
    r -= 4;
  }
  if x & 0xC000_0000 == 0 {
    x <<= 2;
    r -= 2;
  }
  if x & 0x8000_0000 == 0 {
    r -= 1;
  }
  r
}
