use iccembed::Container;

use crate::{Error, Result, commands::chunk::*};

pub fn handle_insert_chunk(args: InsertChunkArgs) -> Result<()> {
    let _guard = tracing::trace_span!("Handle insert-chunk subcommand").entered();

    let chunk_type = args.chunk_type;
    if !chunk_type.must_precede_image_data() {
        return Err(Error::ChunkNotInsertable(chunk_type));
    }

    let data = std::fs::read(&args.data).map_err(Error::ReadData)?;
    let mut image = Container::open(&args.image).map_err(Error::Insert)?;
    image
        .insert_chunk(chunk_type, &data)
        .map_err(Error::Insert)?;
    tracing::info!("Inserted {chunk_type} chunk ({} bytes)", data.len());
    Ok(())
}

pub fn handle_extract_chunk(args: ExtractChunkArgs) -> Result<()> {
    let _guard = tracing::trace_span!("Handle extract-chunk subcommand").entered();

    let chunk_type = args.chunk_type;
    let mut image = Container::open_read_only(&args.image).map_err(Error::Extract)?;
    let chunk = image
        .chunk(chunk_type)
        .map_err(Error::Extract)?
        .ok_or(Error::ChunkNotFound(chunk_type))?;
    if args.verify_crc && !chunk.verify_crc() {
        return Err(Error::CrcMismatch(chunk_type));
    }

    std::fs::write(&args.output, &chunk.data).map_err(Error::WriteData)?;
    tracing::info!(
        "Wrote {chunk_type} chunk data ({} bytes) to {}",
        chunk.data.len(),
        args.output.display()
    );
    Ok(())
}
