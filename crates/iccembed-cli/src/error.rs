use iccembed::ChunkType;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    ReadIcc(std::io::Error),
    WriteIcc(std::io::Error),
    ReadData(std::io::Error),
    WriteData(std::io::Error),
    Embed(iccembed::Error),
    Extract(iccembed::Error),
    Insert(iccembed::Error),
    ProfileNotFound,
    ChunkNotFound(ChunkType),
    DpiNotFound,
    ChunkNotInsertable(ChunkType),
    CrcMismatch(ChunkType),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ReadIcc(e) => write!(f, "failed reading ICC profile: {e}"),
            Error::WriteIcc(e) => write!(f, "failed writing ICC profile: {e}"),
            Error::ReadData(e) => write!(f, "failed reading chunk data: {e}"),
            Error::WriteData(e) => write!(f, "failed writing chunk data: {e}"),
            Error::Embed(e) => write!(f, "failed to embed ICC profile: {e}"),
            Error::Extract(e) => write!(f, "failed reading image: {e}"),
            Error::Insert(e) => write!(f, "failed to insert chunk: {e}"),
            Error::ProfileNotFound => write!(f, "image has no embedded ICC profile"),
            Error::ChunkNotFound(ty) => write!(f, "image has no {ty} chunk"),
            Error::DpiNotFound => write!(f, "image has no pHYs chunk"),
            Error::ChunkNotInsertable(ty) => {
                write!(f, "{ty} chunk cannot be inserted, expected one of sRGB, iCCP, pHYs")
            }
            Error::CrcMismatch(ty) => write!(f, "CRC of {ty} chunk does not match its data"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadIcc(e) => Some(e),
            Error::WriteIcc(e) => Some(e),
            Error::ReadData(e) => Some(e),
            Error::WriteData(e) => Some(e),
            Error::Embed(e) => Some(e),
            Error::Extract(e) => Some(e),
            Error::Insert(e) => Some(e),
            _ => None,
        }
    }
}
