//! zlib framing around raw DEFLATE data.
//!
//! PNG stores compressed payloads (the ICC profile of an `iCCP` chunk among them) as zlib streams:
//! a two-byte header, DEFLATE-compressed data, and an Adler-32 checksum of the uncompressed input.

use miniz_oxide::deflate::{CompressionLevel, compress_to_vec};
pub use miniz_oxide::inflate::TINFLStatus;
use miniz_oxide::inflate::decompress_to_vec_zlib_with_limit;

/// CMF = deflate with 32 KiB window, FLG = default level, FCHECK so that the header is a multiple
/// of 31.
pub const ZLIB_HEADER: [u8; 2] = [0x78, 0x9c];

const ADLER_MODULUS: u32 = 65521;
// Largest n such that 255 n (n + 1) / 2 + (n + 1) (MOD - 1) fits in u32.
const ADLER_NMAX: usize = 5552;

/// Running Adler-32 checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adler32 {
    a: u32,
    b: u32,
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Adler32 {
    pub fn new() -> Self {
        Self { a: 1, b: 0 }
    }

    pub fn update(&mut self, data: &[u8]) {
        for block in data.chunks(ADLER_NMAX) {
            for &byte in block {
                self.a += byte as u32;
                self.b += self.a;
            }
            self.a %= ADLER_MODULUS;
            self.b %= ADLER_MODULUS;
        }
    }

    pub fn finalize(&self) -> u32 {
        (self.b << 16) | self.a
    }

    /// Computes the checksum of `data` in one shot.
    pub fn checksum(data: &[u8]) -> u32 {
        let mut adler = Self::new();
        adler.update(data);
        adler.finalize()
    }
}

/// Wraps `raw` into a zlib stream, compressing it at the best compression level.
pub fn wrap_zlib(raw: &[u8]) -> Vec<u8> {
    let deflated = compress_to_vec(raw, CompressionLevel::BestCompression as u8);
    let checksum = Adler32::checksum(raw);

    let mut out = Vec::with_capacity(ZLIB_HEADER.len() + deflated.len() + 4);
    out.extend_from_slice(&ZLIB_HEADER);
    out.extend_from_slice(&deflated);
    out.extend_from_slice(&crate::be::encode_be32(checksum));
    tracing::trace!(
        raw_len = raw.len(),
        stream_len = out.len(),
        adler32 = format_args!("0x{checksum:08x}"),
        "Wrapped zlib stream"
    );
    out
}

/// Inflates a zlib stream, verifying its header and Adler-32 trailer.
///
/// Decompression stops with [`TINFLStatus::HasMoreOutput`] if the output would exceed `limit`
/// bytes.
pub fn unwrap_zlib(stream: &[u8], limit: usize) -> Result<Vec<u8>, TINFLStatus> {
    decompress_to_vec_zlib_with_limit(stream, limit).map_err(|e| e.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adler32_known_values() {
        assert_eq!(Adler32::checksum(&[]), 1);
        assert_eq!(Adler32::checksum(b"a"), 0x0062_0062);
        assert_eq!(Adler32::checksum(b"Wikipedia"), 0x11e6_0398);
    }

    #[test]
    fn adler32_long_input_reduces() {
        let data = vec![0xffu8; 100_000];
        let mut incremental = Adler32::new();
        for part in data.chunks(777) {
            incremental.update(part);
        }
        assert_eq!(incremental.finalize(), Adler32::checksum(&data));

        // reference: modular sums computed without blocking
        let (mut a, mut b) = (1u64, 0u64);
        for &x in &data {
            a = (a + x as u64) % 65521;
            b = (b + a) % 65521;
        }
        assert_eq!(Adler32::checksum(&data), ((b << 16) | a) as u32);
    }

    #[test]
    fn header_is_valid() {
        let cmf_flg = u16::from_be_bytes(ZLIB_HEADER);
        assert_eq!(cmf_flg % 31, 0);
        assert_eq!(ZLIB_HEADER[0] & 0x0f, 8);
    }

    fn roundtrip(raw: &[u8]) {
        let stream = wrap_zlib(raw);
        assert_eq!(stream[..2], ZLIB_HEADER);
        let trailer = &stream[stream.len() - 4..];
        assert_eq!(trailer, Adler32::checksum(raw).to_be_bytes());

        let inflated = miniz_oxide::inflate::decompress_to_vec_zlib(&stream).unwrap();
        assert_eq!(inflated, raw);
        assert_eq!(unwrap_zlib(&stream, raw.len() + 1024).unwrap(), raw);
    }

    #[test]
    fn roundtrip_empty() {
        roundtrip(&[]);
    }

    #[test]
    fn roundtrip_single_byte() {
        roundtrip(&[0x42]);
    }

    #[test]
    fn roundtrip_large() {
        let raw = (0..70_000u32)
            .map(|x| (x.wrapping_mul(2_654_435_761) >> 24) as u8)
            .collect::<Vec<_>>();
        roundtrip(&raw);
    }

    #[test]
    fn corrupted_checksum_is_rejected() {
        let mut stream = wrap_zlib(b"some profile bytes");
        let last = stream.len() - 1;
        stream[last] ^= 0xff;
        assert!(unwrap_zlib(&stream, 1024).is_err());
    }

    #[test]
    fn limit_is_enforced() {
        let stream = wrap_zlib(&[0u8; 4096]);
        assert_eq!(unwrap_zlib(&stream, 100), Err(TINFLStatus::HasMoreOutput));
    }
}
