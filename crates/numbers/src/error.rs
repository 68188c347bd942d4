//! Error types for alignment computations.

use core::fmt;

/// Frame alignment could not be computed.
///
/// # Examples
///
/// ```
/// use numbers::{AlignError, frame_align};
///
/// assert_eq!(frame_align(0, 1, 4), Err(AlignError::ZeroByteAlign));
/// assert_eq!(frame_align(u32::MAX, u32::MAX - 1, 1), Err(AlignError::Overflow));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AlignError {
  /// `byte_align` was zero.
  ZeroByteAlign,
  /// `frame_align_req` was zero.
  ZeroFrameAlign,
  /// `frame_size` was zero.
  ZeroFrameSize,
  /// The aligned frame count does not fit in `u32`.
  Overflow,
}

impl fmt::Display for AlignError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::ZeroByteAlign => "byte alignment must be non-zero",
      Self::ZeroFrameAlign => "frame alignment must be non-zero",
      Self::ZeroFrameSize => "frame size must be non-zero",
      Self::Overflow => "aligned frame count overflows u32",
    })
  }
}

impl core::error::Error for AlignError {}
