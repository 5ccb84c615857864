/// Chunk types this crate knows how to place and find.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ChunkType {
    Ihdr,
    Idat,
    Srgb,
    Iccp,
    Phys,
}

impl ChunkType {
    pub const ALL: [Self; 5] = [Self::Ihdr, Self::Idat, Self::Srgb, Self::Iccp, Self::Phys];

    #[inline]
    pub fn fourcc(self) -> [u8; 4] {
        match self {
            Self::Ihdr => *b"IHDR",
            Self::Idat => *b"IDAT",
            Self::Srgb => *b"sRGB",
            Self::Iccp => *b"iCCP",
            Self::Phys => *b"pHYs",
        }
    }

    pub fn from_fourcc(fourcc: [u8; 4]) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.fourcc() == fourcc)
    }

    /// Whether the PNG format requires this chunk to appear before the first `IDAT`.
    #[inline]
    pub fn must_precede_image_data(self) -> bool {
        matches!(self, Self::Srgb | Self::Iccp | Self::Phys)
    }
}

impl std::fmt::Display for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fourcc = self.fourcc();
        // fourccs are ASCII letters
        f.write_str(std::str::from_utf8(&fourcc).unwrap_or("????"))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseChunkTypeError(String);

impl std::fmt::Display for ParseChunkTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported chunk type `{}`, expected one of IHDR, IDAT, sRGB, iCCP, pHYs",
            self.0
        )
    }
}

impl std::error::Error for ParseChunkTypeError {}

impl std::str::FromStr for ChunkType {
    type Err = ParseChunkTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <[u8; 4]>::try_from(s.as_bytes())
            .ok()
            .and_then(Self::from_fourcc)
            .ok_or_else(|| ParseChunkTypeError(s.to_owned()))
    }
}

/// A chunk read back from a PNG stream.
#[derive(Clone, Eq, PartialEq)]
pub struct Chunk {
    pub data: Vec<u8>,
    pub chunk_type: ChunkType,
    /// CRC as stored in the stream, big-endian.
    pub crc: [u8; 4],
    /// Size of the whole record: length, type, data and CRC.
    pub total_size: usize,
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("data", &format_args!("{} byte(s)", self.data.len()))
            .field("chunk_type", &self.chunk_type)
            .field("crc", &format_args!("{:02x?}", self.crc))
            .field("total_size", &self.total_size)
            .finish()
    }
}

impl Chunk {
    /// Checks the stored CRC against the chunk type and data.
    pub fn verify_crc(&self) -> bool {
        iccembed_codec::crc32(self.chunk_type.fourcc(), &self.data) == self.crc
    }
}
