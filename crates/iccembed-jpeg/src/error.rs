#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    Io(std::io::Error),
    ProfileTooLarge {
        size: usize,
        max: usize,
    },
    InvalidSignature {
        found: [u8; 2],
    },
    MissingApp0 {
        found: [u8; 2],
    },
    InvalidSegmentLength {
        offset: u64,
        length: u16,
    },
    TruncatedSegment {
        offset: u64,
        expected: u64,
        available: u64,
    },
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
            Self::ProfileTooLarge { size, max } => write!(
                f,
                "ICC profile of {size} bytes does not fit in a single APP2 segment (max {max} bytes)"
            ),
            Self::InvalidSignature { found } => write!(
                f,
                "not a JPEG stream: expected SOI marker, found {:02x} {:02x}",
                found[0], found[1]
            ),
            Self::MissingApp0 { found } => write!(
                f,
                "APP0 segment must follow SOI, found marker {:02x} {:02x}",
                found[0], found[1]
            ),
            Self::InvalidSegmentLength { offset, length } => {
                write!(f, "invalid segment length {length} at offset {offset}")
            }
            Self::TruncatedSegment {
                offset,
                expected,
                available,
            } => write!(
                f,
                "segment at offset {offset} is truncated: expected {expected} byte(s), {available} available"
            ),
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
