//! Leaf utilities shared by the iccembed container editors.
//!
//! - [`be`]: big-endian length and offset fields.
//! - [`crc`]: table-driven CRC-32 used by PNG chunk footers.
//! - [`zlib`]: zlib stream wrapping (and unwrapping) of DEFLATE data, with Adler-32.

pub mod be;
pub mod crc;
pub mod zlib;

pub use crc::{Crc32, CrcTable, PNG_CRC_TABLE, crc32};
pub use zlib::{Adler32, unwrap_zlib, wrap_zlib};
