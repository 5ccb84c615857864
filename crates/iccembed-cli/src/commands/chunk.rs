use std::path::PathBuf;

use clap::Parser;
use iccembed::ChunkType;

/// Inserts a raw chunk after IHDR. The CRC is computed automatically.
#[derive(Debug, Parser)]
#[non_exhaustive]
pub struct InsertChunkArgs {
    /// PNG image to modify
    pub image: PathBuf,
    /// Chunk type (sRGB, iCCP or pHYs)
    pub chunk_type: ChunkType,
    /// File containing chunk data, without length, type and CRC
    pub data: PathBuf,
}

/// Extracts the data of the first chunk of the given type.
#[derive(Debug, Parser)]
#[non_exhaustive]
pub struct ExtractChunkArgs {
    /// Input PNG image
    pub image: PathBuf,
    /// Chunk type (IHDR, IDAT, sRGB, iCCP or pHYs)
    pub chunk_type: ChunkType,
    /// Output file for chunk data
    pub output: PathBuf,
    /// Fail if the stored CRC does not match
    #[arg(long)]
    pub verify_crc: bool,
}
