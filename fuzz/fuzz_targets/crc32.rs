//! Fuzz target for CRC-32.
//!
//! Tests that:
//! - Chaining through `base` matches one-shot
//! - Streaming updates and resume match one-shot
//! - Combine matches one-shot

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, ChecksumCombine, Crc32, crc32};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = crc32(0, data);
  let (a, b) = data.split_at(split);

  let crc_a = crc32(0, a);
  assert_eq!(crc32(crc_a, b), oneshot, "crc32 chaining mismatch");

  let mut hasher = Crc32::new();
  hasher.update(a);
  hasher.update(b);
  assert_eq!(hasher.finalize(), oneshot, "crc32 incremental mismatch");

  let mut resumed = Crc32::resume(crc_a);
  resumed.update(b);
  assert_eq!(resumed.finalize(), oneshot, "crc32 resume mismatch");

  let combined = Crc32::combine(crc_a, crc32(0, b), b.len());
  assert_eq!(combined, oneshot, "crc32 combine mismatch");
});
