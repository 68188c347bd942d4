//! Table-free CRC-32 checksums.
//!
//! This crate implements CRC-32 (ISO-HDLC: Ethernet, gzip, zip, PNG) with a
//! bit-serial kernel that needs no lookup tables, for firmware images where
//! 1-8 KB of tables is too much.
//!
//! | Item | Use |
//! |------|-----|
//! | [`crc32()`] | One call, chainable through its `base` argument |
//! | [`Crc32`] | Streaming hasher implementing [`Checksum`] and [`ChecksumCombine`] |
//! | [`bitwise::crc32`] | Raw register kernel (`const fn` per byte) |
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, ChecksumCombine, Crc32, crc32};
//!
//! // One-shot computation
//! let data = b"123456789";
//! assert_eq!(crc32(0, data), 0xCBF4_3926);
//!
//! // Chaining: the previous result seeds the next call
//! let head = crc32(0, b"1234");
//! assert_eq!(crc32(head, b"56789"), 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF4_3926);
//!
//! // Combine checksums of adjacent buffers
//! let (a, b) = data.split_at(4);
//! let combined = Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len());
//! assert_eq!(combined, 0xCBF4_3926);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible and never allocates. Disable the `std`
//! feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod bitwise;
mod constants;
mod crc32;

pub use constants::crc32::POLYNOMIAL;
pub use crc32::{Crc32, crc32};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine};
