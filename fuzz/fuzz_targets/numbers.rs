//! Fuzz target for the numeric primitives.
//!
//! Checks each function against a straightforward wide-integer reference.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use numbers::{find_equal_i16, find_max_abs_i32, find_min_i16, fls, frame_align, gcd, norm_i32};

#[derive(Arbitrary, Debug)]
struct Input {
  a: i32,
  b: i32,
  align: (u16, u8, u8),
  samples: Vec<i16>,
  wide: Vec<i32>,
  target: i16,
  max_results: u8,
}

fuzz_target!(|input: Input| {
  let g = gcd(input.a, input.b);
  assert_eq!(g, gcd(input.b, input.a));
  if g != 0 {
    assert_eq!(i64::from(input.a) % i64::from(g), 0);
    assert_eq!(i64::from(input.b) % i64::from(g), 0);
  } else {
    assert_eq!((input.a, input.b), (0, 0));
  }

  let (byte_align, frame_align_req, frame_size) =
    (u32::from(input.align.0), u32::from(input.align.1), u32::from(input.align.2));
  if let Ok(n) = frame_align(byte_align, frame_align_req, frame_size) {
    assert_eq!(u64::from(n) * u64::from(frame_size) % u64::from(byte_align), 0);
    assert_eq!(n % frame_align_req, 0);
  } else {
    assert!(byte_align == 0 || frame_align_req == 0 || frame_size == 0);
  }

  let x = input.a as u32;
  assert_eq!(fls(x), 32 - x.leading_zeros());

  let redundant = if input.a < 0 { (!input.a).leading_zeros() } else { input.a.leading_zeros() };
  assert_eq!(norm_i32(input.a), redundant - 1);

  let mut idx = vec![0usize; input.samples.len()];
  let n = find_equal_i16(&mut idx, &input.samples, input.target, usize::from(input.max_results));
  let expected: Vec<usize> = input
    .samples
    .iter()
    .enumerate()
    .filter(|&(_, &v)| v == input.target)
    .map(|(i, _)| i)
    .take(if input.max_results == 0 { usize::MAX } else { usize::from(input.max_results) })
    .collect();
  assert_eq!(&idx[..n], expected.as_slice());

  assert_eq!(find_min_i16(&input.samples), input.samples.iter().copied().min());

  let reference = input.wide.iter().map(|&v| i64::from(v).abs()).max().map(|m| m.min(i64::from(i32::MAX)) as i32);
  assert_eq!(find_max_abs_i32(&input.wide), reference);
});
