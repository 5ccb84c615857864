//! Places ancillary chunks (`iCCP`, `sRGB`, `pHYs`) right after `IHDR` in a PNG stream, and finds
//! them again.
//!
//! Every chunk is written as
//!
//! ```text
//! length: u32 BE (= N) | type: 4 ASCII bytes | data (N bytes) | crc32(type ++ data): u32 BE
//! ```
//!
//! Placement directly after the 25-byte `IHDR` chunk satisfies the ordering constraint of every
//! chunk that must precede image data.
use std::io::prelude::*;
use std::io::SeekFrom;

use iccembed_codec::be;

mod chunk;
mod error;
pub mod iccp;
pub mod phys;
mod scan;

pub use chunk::{Chunk, ChunkType, ParseChunkTypeError};
pub use error::{Error, Result};
pub use iccp::EmbeddedProfile;
pub use phys::PhysicalDimensions;

use scan::{ChunkScanner, ScanOutcome};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

const LENGTH_SIZE: usize = 4;
const TYPE_SIZE: usize = 4;
const CRC_SIZE: usize = 4;
const IHDR_DATA_SIZE: usize = 13;
const IHDR_CHUNK_SIZE: usize = LENGTH_SIZE + TYPE_SIZE + IHDR_DATA_SIZE + CRC_SIZE;

/// Offset where new chunks are inserted: right after the signature and `IHDR`.
pub const INSERT_OFFSET: u64 = (PNG_SIGNATURE.len() + IHDR_CHUNK_SIZE) as u64;

/// Bytes added to the stream on top of the chunk data.
pub const RECORD_OVERHEAD: usize = LENGTH_SIZE + TYPE_SIZE + CRC_SIZE;

pub const MAX_CHUNK_DATA_SIZE: usize = 0xffff;

/// `sRGB` rendering intent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[repr(u8)]
pub enum RenderingIntent {
    #[default]
    Perceptual = 0,
    RelativeColorimetric = 1,
    Saturation = 2,
    AbsoluteColorimetric = 3,
}

fn check_prefix<S: Read + Seek>(stream: &mut S) -> Result<()> {
    stream.seek(SeekFrom::Start(0))?;
    let mut prefix = [0u8; INSERT_OFFSET as usize];
    stream.read_exact(&mut prefix)?;

    let (signature, ihdr) = prefix.split_at(PNG_SIGNATURE.len());
    if signature != PNG_SIGNATURE {
        return Err(Error::InvalidSignature);
    }
    if be::read_be32(ihdr, 0) != Some(IHDR_DATA_SIZE as u32)
        || ihdr[LENGTH_SIZE..LENGTH_SIZE + TYPE_SIZE] != ChunkType::Ihdr.fourcc()
    {
        return Err(Error::MissingIhdr);
    }
    Ok(())
}

fn build_record(chunk_type: ChunkType, data: &[u8]) -> Vec<u8> {
    let fourcc = chunk_type.fourcc();
    let mut record = Vec::with_capacity(RECORD_OVERHEAD + data.len());
    record.extend_from_slice(&be::encode_be32(data.len() as u32));
    record.extend_from_slice(&fourcc);
    record.extend_from_slice(data);
    record.extend_from_slice(&iccembed_codec::crc32(fourcc, data));
    record
}

/// Inserts a chunk right after `IHDR`, growing the stream in place.
///
/// The CRC is computed over the chunk type and `data`. Nothing is written if the signature or
/// `IHDR` is malformed.
pub fn insert<S: Read + Write + Seek>(
    stream: &mut S,
    chunk_type: ChunkType,
    data: &[u8],
) -> Result<()> {
    if data.len() > MAX_CHUNK_DATA_SIZE {
        return Err(Error::ChunkTooLarge {
            size: data.len(),
            max: MAX_CHUNK_DATA_SIZE,
        });
    }

    check_prefix(stream)?;
    let original_len = stream.seek(SeekFrom::End(0))?;

    stream.seek(SeekFrom::Start(INSERT_OFFSET))?;
    let mut tail = Vec::with_capacity((original_len - INSERT_OFFSET) as usize);
    stream.read_to_end(&mut tail)?;

    let record = build_record(chunk_type, data);
    stream.seek(SeekFrom::Start(INSERT_OFFSET))?;
    stream.write_all(&record)?;
    stream.write_all(&tail)?;
    stream.flush()?;

    tracing::debug!(
        %chunk_type,
        original_len,
        data_len = data.len(),
        new_len = original_len + record.len() as u64,
        "Inserted chunk after IHDR"
    );
    Ok(())
}

/// Finds the first chunk of the given type.
///
/// Returns `Ok(None)` if the end of the stream is reached. Searching for a chunk that must precede
/// image data fails with [`Error::RequiredChunkMissingBeforeImageData`] once `IDAT` is seen.
pub fn extract<S: Read + Seek>(stream: &mut S, chunk_type: ChunkType) -> Result<Option<Chunk>> {
    stream.seek(SeekFrom::Start(0))?;
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;

    let type_offset = match ChunkScanner::new(&buf, chunk_type).run() {
        ScanOutcome::Found { type_offset } => type_offset,
        ScanOutcome::ImageDataReached { type_offset } => {
            return Err(Error::RequiredChunkMissingBeforeImageData {
                chunk_type,
                offset: type_offset as u64,
            });
        }
        ScanOutcome::Eof => {
            tracing::debug!(%chunk_type, "Chunk not found");
            return Ok(None);
        }
    };

    // The scanner only reports tags with room for a length field in front.
    let record_offset = type_offset - LENGTH_SIZE;
    let data_len = be::read_be32(&buf, record_offset).unwrap_or_default() as u64;
    let total_size = RECORD_OVERHEAD as u64 + data_len;
    let available = (buf.len() - record_offset) as u64;
    if total_size > available {
        return Err(Error::TruncatedChunk {
            offset: record_offset as u64,
            expected: total_size,
            available,
        });
    }

    let data_start = type_offset + TYPE_SIZE;
    let data_end = data_start + data_len as usize;
    let data = buf[data_start..data_end].to_vec();
    let mut crc = [0u8; CRC_SIZE];
    crc.copy_from_slice(&buf[data_end..data_end + CRC_SIZE]);

    let chunk = Chunk {
        data,
        chunk_type,
        crc,
        total_size: total_size as usize,
    };
    tracing::debug!(%chunk_type, offset = record_offset, ?chunk, "Found chunk");
    if !chunk.verify_crc() {
        tracing::warn!(%chunk_type, offset = record_offset, "Chunk CRC mismatch");
    }
    Ok(Some(chunk))
}

/// Compresses `profile` into an `iCCP` chunk named `"ICC Profile"` and inserts it after `IHDR`.
pub fn insert_icc_profile<S: Read + Write + Seek>(stream: &mut S, profile: &[u8]) -> Result<()> {
    insert_icc_profile_named(stream, iccp::DEFAULT_PROFILE_NAME, profile)
}

/// Same as [`insert_icc_profile`], with a custom profile name.
pub fn insert_icc_profile_named<S: Read + Write + Seek>(
    stream: &mut S,
    name: &str,
    profile: &[u8],
) -> Result<()> {
    let data = iccp::build_payload(name, profile)?;
    tracing::debug!(
        profile_len = profile.len(),
        chunk_data_len = data.len(),
        "Compressed ICC profile"
    );
    insert(stream, ChunkType::Iccp, &data)
}

/// Reads and inflates the embedded ICC profile, if any.
pub fn extract_icc_profile<S: Read + Seek>(stream: &mut S) -> Result<Option<EmbeddedProfile>> {
    extract_icc_profile_with_limit(stream, iccp::DEFAULT_INFLATE_LIMIT)
}

/// Same as [`extract_icc_profile`], producing at most `limit` bytes of profile data.
pub fn extract_icc_profile_with_limit<S: Read + Seek>(
    stream: &mut S,
    limit: usize,
) -> Result<Option<EmbeddedProfile>> {
    let Some(chunk) = extract(stream, ChunkType::Iccp)? else {
        return Ok(None);
    };
    iccp::parse_payload(&chunk.data, limit).map(Some)
}

pub fn insert_srgb<S: Read + Write + Seek>(stream: &mut S, intent: RenderingIntent) -> Result<()> {
    insert(stream, ChunkType::Srgb, &[intent as u8])
}

pub fn insert_physical_dimensions<S: Read + Write + Seek>(
    stream: &mut S,
    dims: PhysicalDimensions,
) -> Result<()> {
    insert(stream, ChunkType::Phys, &dims.to_bytes())
}

/// Reads `pHYs` and converts it to dots per inch, as `(x, y)`.
///
/// Returns `Ok(None)` if the stream ends without a `pHYs` chunk.
pub fn get_dpi<S: Read + Seek>(stream: &mut S) -> Result<Option<(f32, f32)>> {
    let Some(chunk) = extract(stream, ChunkType::Phys)? else {
        return Ok(None);
    };
    let dims = PhysicalDimensions::parse(&chunk.data)?;
    let (dpi_x, dpi_y) = dims.dpi()?;
    tracing::debug!(?dims, dpi_x, dpi_y, "Read physical dimensions");
    Ok(Some((dpi_x, dpi_y)))
}
