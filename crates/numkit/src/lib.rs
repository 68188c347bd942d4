//! Fixed-point integer primitives and table-free CRC-32.
//!
//! `numkit` bundles the leaf-level helpers a signal-processing pipeline uses to
//! size buffers, normalize samples and check data integrity. `no_std`,
//! allocation-free, and without runtime dependencies.
//!
//! # Quick Start
//!
//! ```
//! use numkit::{Checksum, Crc32, crc32, frame_align, norm_i32};
//!
//! // Period size: 64-byte aligned, 6-byte frames, multiples of 4 frames.
//! assert_eq!(frame_align(64, 4, 6), Ok(32));
//!
//! // Headroom before scaling a Q1.31 sample.
//! assert_eq!(norm_i32(0x0100_0000), 6);
//!
//! // Checksum a blob in pieces.
//! let head = crc32(0, b"1234");
//! assert_eq!(crc32(head, b"56789"), Crc32::checksum(b"123456789"));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io::IoSlice` helpers on [`Checksum`] |
//! | `numbers` | Yes | GCD/LCM, frame alignment, vector scans, `norm`, `fls`, saturation |
//! | `checksums` | Yes | CRC-32 |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! numkit = { version = "0.1", default-features = false, features = ["checksums"] }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Numbers
// =============================================================================

#[cfg(feature = "numbers")]
pub use numbers::{
  AlignError, find_equal_i16, find_max_abs_i32, find_min_i16, fls, frame_align, gcd, gcd_u32, lcm, norm_i32, sat,
};

// =============================================================================
// Checksums
// =============================================================================

#[cfg(feature = "checksums")]
pub use checksum::{Crc32, bitwise, crc32};
pub use traits::{Checksum, ChecksumCombine};
