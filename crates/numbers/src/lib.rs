//! Integer primitives for fixed-point signal processing.
//!
//! Leaf-level helpers used when sizing and normalizing audio buffers:
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`gcd`], [`gcd_u32`] | Binary (Stein) greatest common divisor |
//! | [`lcm`] | Least common multiple, overflow-checked |
//! | [`frame_align`] | Smallest frame count meeting byte and frame alignment |
//! | [`find_equal_i16`] | Indices of matching samples |
//! | [`find_min_i16`] | Smallest sample |
//! | [`find_max_abs_i32`] | Largest magnitude, saturated to `i32` |
//! | [`norm_i32`] | Left-shift headroom of a Q-format value |
//! | [`fls`] | Position of the most significant set bit |
//! | [`sat::sat_i32`] | Saturating `i64` to `i32` narrowing |
//!
//! # Example
//!
//! ```
//! use numbers::{fls, frame_align, gcd};
//!
//! assert_eq!(gcd(-12, 18), 6);
//! // 4-byte aligned blocks of 6-byte frames need 2 frames.
//! assert_eq!(frame_align(4, 1, 6), Ok(2));
//! assert_eq!(fls(0x8000_0000), 32);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `vector-find` | Yes | Vector scans |
//! | `norm` | Yes | [`norm_i32`] |
//!
//! Nothing here allocates; every function is pure and may run concurrently on
//! shared data.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod align;
mod bits;
pub mod error;
mod gcd;
#[cfg(feature = "norm")]
mod norm;
pub mod sat;
#[cfg(feature = "vector-find")]
mod scan;

#[cfg(test)]
mod proptests;

pub use align::frame_align;
pub use bits::fls;
pub use error::AlignError;
pub use gcd::{gcd, gcd_u32, lcm};
#[cfg(feature = "norm")]
pub use norm::norm_i32;
#[cfg(feature = "vector-find")]
pub use scan::{find_equal_i16, find_max_abs_i32, find_min_i16};
