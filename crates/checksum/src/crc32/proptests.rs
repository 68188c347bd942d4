extern crate std;

use crc::{CRC_32_ISO_HDLC, Crc};
use proptest::prelude::*;

use super::*;

const REFERENCE: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

proptest! {
  #[test]
  fn crc32_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(crc32(0, &data), REFERENCE.checksum(&data));
  }

  #[test]
  fn crc32_streaming_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let mut ours = Crc32::new();
    let mut reference = REFERENCE.digest();

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize());
  }

  #[test]
  fn crc32_chaining(data in proptest::collection::vec(any::<u8>(), 0..=2048), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    prop_assert_eq!(crc32(crc32(0, a), b), crc32(0, &data));
  }

  #[test]
  fn crc32_combine(data in proptest::collection::vec(any::<u8>(), 0..=2048), split in any::<usize>()) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let combined = Crc32::combine(crc32(0, a), crc32(0, b), b.len());
    prop_assert_eq!(combined, REFERENCE.checksum(&data));
  }
}
