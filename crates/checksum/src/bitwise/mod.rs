//! Table-less CRC kernels.
//!
//! "Zero table" computation for environments where embedding lookup tables is
//! undesirable:
//!
//! - **DSP firmware**: every KB of tables competes with audio buffers
//! - **Bootloaders**: minimal code size requirements
//! - **WebAssembly**: reducing binary size
//!
//! # Algorithm
//!
//! Per byte, the low 8 bits of the register are reduced bit by bit:
//!
//! 1. Create a conditional mask using `wrapping_sub`:
//!    - `0u32.wrapping_sub(0)` = `0x00000000`
//!    - `0u32.wrapping_sub(1)` = `0xFFFFFFFF`
//! 2. Conditionally XOR with the polynomial using `polynomial & mask`
//! 3. Shift right by one
//!
//! The reduced byte is then folded into the upper 24 bits of the register.
//!
//! These functions operate on the raw register: callers apply the initial and
//! final inversion. [`crate::crc32()`] and [`crate::Crc32`] do this for you.

pub mod crc32;
