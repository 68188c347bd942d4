//! Reference values for the public numeric API.

use numbers::{AlignError, fls, frame_align, gcd, gcd_u32, lcm};

#[test]
fn gcd_reference_values() {
  assert_eq!(gcd(0, 0), 0);
  assert_eq!(gcd(0, 15), 15);
  assert_eq!(gcd(-15, 0), 15);
  assert_eq!(gcd(270, 192), 6);
  assert_eq!(gcd(-270, 192), 6);
  assert_eq!(gcd(270, -192), 6);
  assert_eq!(gcd_u32(3_000_000_000, 1_500_000_000), 1_500_000_000);
}

#[test]
fn frame_align_reference_values() {
  assert_eq!(frame_align(4, 1, 6), Ok(2));
  // 48 kHz stereo s16 in 64-byte cache lines.
  assert_eq!(frame_align(64, 1, 4), Ok(16));
  // s24 packed mono (3 bytes) in 4-byte words.
  assert_eq!(frame_align(4, 1, 3), Ok(4));
  assert_eq!(frame_align(4, 0, 3), Err(AlignError::ZeroFrameAlign));
}

#[test]
fn frame_align_is_lcm_of_requirements() {
  for frame_align_req in 1..=16u32 {
    let byte_frames = 8 / gcd_u32(8, 6);
    assert_eq!(frame_align(8, frame_align_req, 6).ok(), lcm(byte_frames, frame_align_req));
  }
}

#[test]
fn fls_reference_values() {
  assert_eq!(fls(0), 0);
  assert_eq!(fls(1), 1);
  assert_eq!(fls(0x8000_0000), 32);
  assert_eq!(fls(0xFFFF), 16);
}

#[cfg(feature = "norm")]
#[test]
fn norm_reference_values() {
  use numbers::norm_i32;

  assert_eq!(norm_i32(0), 31);
  assert_eq!(norm_i32(-1), 31);
  assert_eq!(norm_i32(1), 30);
}

#[cfg(feature = "vector-find")]
#[test]
fn scan_reference_values() {
  use numbers::{find_equal_i16, find_max_abs_i32, find_min_i16};

  let vec = [3i16, 5, 3, 7, 3];
  let mut idx = [0usize; 5];

  let n = find_equal_i16(&mut idx, &vec, 3, 0);
  assert_eq!(&idx[..n], &[0, 2, 4]);
  let n = find_equal_i16(&mut idx, &vec, 3, 1);
  assert_eq!(&idx[..n], &[0]);

  assert_eq!(find_min_i16(&[5, -2, 9, -2, 0]), Some(-2));
  assert_eq!(find_max_abs_i32(&[-5, 3, -9]), Some(9));
  assert_eq!(find_max_abs_i32(&[i32::MIN]), Some(i32::MAX));
}
