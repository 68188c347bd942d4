//! CRC-32 (ISO-HDLC) constants.
//!
//! Polynomial: 0x04C11DB7 (reflected: 0xEDB88320)
//! Used by: Ethernet, gzip, PNG, zip, SATA, zlib

/// CRC-32 (ISO-HDLC) polynomial in reflected (bit-reversed) form.
///
/// The normal form is 0x04C11DB7; the reflected form processes bytes LSB-first.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;
