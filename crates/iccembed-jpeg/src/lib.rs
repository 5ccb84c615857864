//! Embeds an ICC profile into a JFIF stream as an APP2 segment, and finds it again.
//!
//! The segment is always written directly after APP0:
//!
//! ```text
//! FF E2 | length: u16 BE (= 2 + 14 + N) | "ICC_PROFILE\0" | seq = 1 | total = 1 | profile (N bytes)
//! ```
//!
//! Only single-segment profiles are supported; a profile that would need to be split over
//! multiple APP2 segments is rejected with [`Error::ProfileTooLarge`].
//!
//! # Example
//!
//! ```no_run
//! let mut file = std::fs::OpenOptions::new()
//!     .read(true)
//!     .write(true)
//!     .open("photo.jpg")?;
//! let profile = std::fs::read("sRGB.icc")?;
//! iccembed_jpeg::insert(&mut file, &profile)?;
//!
//! let found = iccembed_jpeg::extract(&mut file)?;
//! assert_eq!(found.as_deref(), Some(&*profile));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
use std::io::prelude::*;
use std::io::SeekFrom;

use iccembed_codec::be;

mod error;
mod scan;

pub use error::{Error, Result};

use scan::IccSegmentScanner;

pub const SOI: [u8; 2] = [0xff, 0xd8];
pub const APP0: [u8; 2] = [0xff, 0xe0];
pub const APP2: [u8; 2] = [0xff, 0xe2];

/// `"ICC_PROFILE\0"`, followed by sequence number 1 of 1 segment.
pub const ICC_IDENTIFIER: [u8; 14] = *b"ICC_PROFILE\0\x01\x01";

const LENGTH_FIELD_SIZE: usize = 2;

/// Bytes added to the stream on top of the profile itself.
pub const RECORD_OVERHEAD: usize = APP2.len() + LENGTH_FIELD_SIZE + ICC_IDENTIFIER.len();

/// Largest profile accepted by [`insert`]: the whole record, marker included, stays within
/// `0xFFFF` bytes.
pub const MAX_PROFILE_SIZE: usize = 0xffff - RECORD_OVERHEAD;

/// Returns the offset right after the APP0 segment.
///
/// The APP0 length is read from the stream since an embedded thumbnail makes it variable.
fn app0_end<S: Read + Seek>(stream: &mut S, stream_len: u64) -> Result<u64> {
    stream.seek(SeekFrom::Start(0))?;
    let mut prefix = [0u8; 6];
    stream.read_exact(&mut prefix)?;
    let [s0, s1, m0, m1, l0, l1] = prefix;

    if [s0, s1] != SOI {
        return Err(Error::InvalidSignature { found: [s0, s1] });
    }
    if [m0, m1] != APP0 {
        return Err(Error::MissingApp0 { found: [m0, m1] });
    }

    let length = be::decode_be16([l0, l1]);
    if (length as usize) < LENGTH_FIELD_SIZE {
        return Err(Error::InvalidSegmentLength { offset: 4, length });
    }

    let end = (SOI.len() + APP0.len()) as u64 + length as u64;
    if end > stream_len {
        return Err(Error::TruncatedSegment {
            offset: SOI.len() as u64,
            expected: APP0.len() as u64 + length as u64,
            available: stream_len - SOI.len() as u64,
        });
    }
    Ok(end)
}

/// Serializes the APP2 segment carrying `profile`.
fn build_segment(profile: &[u8]) -> Vec<u8> {
    let length = (LENGTH_FIELD_SIZE + ICC_IDENTIFIER.len() + profile.len()) as u16;

    let mut segment = Vec::with_capacity(RECORD_OVERHEAD + profile.len());
    segment.extend_from_slice(&APP2);
    segment.extend_from_slice(&be::encode_be16(length));
    segment.extend_from_slice(&ICC_IDENTIFIER);
    segment.extend_from_slice(profile);
    segment
}

/// Inserts `profile` as an APP2 segment right after APP0, growing the stream in place.
///
/// SOI and APP0 are left untouched; every byte after APP0 is shifted by
/// [`RECORD_OVERHEAD`]` + profile.len()`. The stream is not modified if an error is returned
/// before writing starts.
pub fn insert<S: Read + Write + Seek>(stream: &mut S, profile: &[u8]) -> Result<()> {
    if profile.len() > MAX_PROFILE_SIZE {
        return Err(Error::ProfileTooLarge {
            size: profile.len(),
            max: MAX_PROFILE_SIZE,
        });
    }

    let original_len = stream.seek(SeekFrom::End(0))?;
    let insert_at = app0_end(stream, original_len)?;

    stream.seek(SeekFrom::Start(insert_at))?;
    let mut tail = Vec::with_capacity((original_len - insert_at) as usize);
    stream.read_to_end(&mut tail)?;

    let segment = build_segment(profile);
    stream.seek(SeekFrom::Start(insert_at))?;
    stream.write_all(&segment)?;
    stream.write_all(&tail)?;
    stream.flush()?;

    tracing::debug!(
        original_len,
        profile_len = profile.len(),
        new_len = original_len + segment.len() as u64,
        offset = insert_at,
        "Embedded ICC profile in APP2 segment"
    );
    Ok(())
}

/// Finds the first ICC profile segment in the stream and returns the profile.
///
/// Returns `Ok(None)` if no segment is found until the end of the stream.
pub fn extract<S: Read + Seek>(stream: &mut S) -> Result<Option<Vec<u8>>> {
    extract_from(stream, 0)
}

/// Same as [`extract`], but starts scanning at byte offset `start`.
pub fn extract_from<S: Read + Seek>(stream: &mut S, start: u64) -> Result<Option<Vec<u8>>> {
    stream.seek(SeekFrom::Start(start))?;
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;

    let mut scanner = IccSegmentScanner::new(&buf);
    let Some(found) = scanner.next_match() else {
        tracing::debug!(start, "ICC profile segment not found");
        return Ok(None);
    };

    let length_offset = start + found.length_offset as u64;
    // Presence of the identifier guarantees the length field is within the buffer.
    let length = be::read_be16(&buf, found.length_offset).unwrap_or_default();
    let header_len = LENGTH_FIELD_SIZE + ICC_IDENTIFIER.len();
    let Some(profile_len) = (length as usize).checked_sub(header_len) else {
        return Err(Error::InvalidSegmentLength {
            offset: length_offset,
            length,
        });
    };

    let available = buf.len() - found.payload_offset;
    if profile_len > available {
        return Err(Error::TruncatedSegment {
            offset: length_offset,
            expected: profile_len as u64,
            available: available as u64,
        });
    }

    tracing::debug!(
        offset = length_offset,
        profile_len,
        "Found ICC profile segment"
    );
    let payload_end = found.payload_offset + profile_len;
    Ok(Some(buf[found.payload_offset..payload_end].to_vec()))
}
