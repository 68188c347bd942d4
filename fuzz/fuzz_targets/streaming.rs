//! Fuzz target for streaming CRC-32.
//!
//! Tests that arbitrary sequences of update calls produce correct results.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Checksum, Crc32, crc32};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = input.data.as_slice();
  let expected = crc32(0, data);

  let mut hasher = Crc32::new();
  let mut chained = 0;
  let mut offset = 0;

  for &size in &input.chunk_sizes {
    if offset >= data.len() {
      break;
    }
    let end = offset + size.min(data.len() - offset);
    hasher.update(&data[offset..end]);
    chained = crc32(chained, &data[offset..end]);
    offset = end;
  }

  if offset < data.len() {
    hasher.update(&data[offset..]);
    chained = crc32(chained, &data[offset..]);
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch");
  assert_eq!(chained, expected, "chaining mismatch");
});
