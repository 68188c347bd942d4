//! CRC-32 usage: one-shot, chaining, streaming and combine.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{Checksum, ChecksumCombine, Crc32, crc32};

fn main() {
  println!("=== CRC-32 Examples ===\n");

  let data = b"123456789";

  let oneshot = crc32(0, data);
  println!("one-shot:  0x{oneshot:08X}");
  assert_eq!(oneshot, 0xCBF4_3926);

  // Firmware images often arrive in blocks; seed each call with the last result.
  let mut crc = 0;
  for block in data.chunks(4) {
    crc = crc32(crc, block);
  }
  println!("chained:   0x{crc:08X}");
  assert_eq!(crc, oneshot);

  let mut hasher = Crc32::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  println!("streaming: 0x{:08X}", hasher.finalize());
  assert_eq!(hasher.finalize(), oneshot);

  let (a, b) = data.split_at(4);
  let combined = Crc32::combine(crc32(0, a), crc32(0, b), b.len());
  println!("combined:  0x{combined:08X}");
  assert_eq!(combined, oneshot);
}
