//! Polynomial constants.

pub mod crc32;
