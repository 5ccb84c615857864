use crate::ChunkType;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    Io(std::io::Error),
    ChunkTooLarge {
        size: usize,
        max: usize,
    },
    InvalidSignature,
    MissingIhdr,
    RequiredChunkMissingBeforeImageData {
        chunk_type: ChunkType,
        offset: u64,
    },
    InvalidPhysicalUnit {
        unit: u8,
    },
    InvalidPhysicalData {
        length: usize,
    },
    TruncatedChunk {
        offset: u64,
        expected: u64,
        available: u64,
    },
    InvalidProfileName,
    TruncatedIccpPayload {
        length: usize,
    },
    UnsupportedCompressionMethod {
        method: u8,
    },
    Inflate(iccembed_codec::zlib::TINFLStatus),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ChunkTooLarge { size, max } => {
                write!(f, "chunk data of {size} bytes is too large (max {max} bytes)")
            }
            Self::InvalidSignature => write!(f, "not a PNG stream: signature mismatch"),
            Self::MissingIhdr => write!(f, "IHDR chunk must directly follow the PNG signature"),
            Self::RequiredChunkMissingBeforeImageData { chunk_type, offset } => write!(
                f,
                "{chunk_type} chunk not found before image data (IDAT at offset {offset})"
            ),
            Self::InvalidPhysicalUnit { unit } => {
                write!(f, "unsupported pHYs unit specifier {unit}, expected 1 (meter)")
            }
            Self::InvalidPhysicalData { length } => {
                write!(f, "pHYs chunk data must be 9 bytes, got {length}")
            }
            Self::TruncatedChunk {
                offset,
                expected,
                available,
            } => write!(
                f,
                "chunk at offset {offset} is truncated: expected {expected} byte(s), {available} available"
            ),
            Self::InvalidProfileName => write!(f, "invalid iCCP profile name"),
            Self::TruncatedIccpPayload { length } => write!(
                f,
                "iCCP chunk data ends after {length} byte(s), before the compression method"
            ),
            Self::UnsupportedCompressionMethod { method } => {
                write!(f, "unsupported iCCP compression method {method}")
            }
            Self::Inflate(status) => write!(f, "failed to inflate ICC profile: {status:?}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
