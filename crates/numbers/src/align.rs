//! Buffer alignment in units of frames.

use crate::{AlignError, gcd_u32, lcm};

/// Smallest frame count that satisfies both alignment requirements.
///
/// Returns the least `n` such that `n * frame_size` is a multiple of
/// `byte_align` and `n` is a multiple of `frame_align_req`.
///
/// # Errors
///
/// - A zero input yields the matching `AlignError::Zero*` variant.
/// - [`AlignError::Overflow`] if the frame count does not fit in `u32`.
///
/// # Example
///
/// ```
/// use numbers::frame_align;
///
/// // Stereo s24_4le frames (8 bytes) in 64-byte aligned periods.
/// assert_eq!(frame_align(64, 1, 8), Ok(8));
/// // Same, but the consumer also wants multiples of 3 frames.
/// assert_eq!(frame_align(64, 3, 8), Ok(24));
/// ```
pub fn frame_align(byte_align: u32, frame_align_req: u32, frame_size: u32) -> Result<u32, AlignError> {
  if byte_align == 0 {
    return Err(AlignError::ZeroByteAlign);
  }
  if frame_align_req == 0 {
    return Err(AlignError::ZeroFrameAlign);
  }
  if frame_size == 0 {
    return Err(AlignError::ZeroFrameSize);
  }

  // Fewest frames whose byte length is a multiple of byte_align.
  let frame_num = byte_align / gcd_u32(byte_align, frame_size);

  lcm(frame_num, frame_align_req).ok_or(AlignError::Overflow)
}
