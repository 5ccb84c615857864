use crate::ImageFormat;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    Io(std::io::Error),
    Jpeg(iccembed_jpeg::Error),
    Png(iccembed_png::Error),
    UnknownFormat,
    Unsupported {
        format: ImageFormat,
        operation: &'static str,
    },
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<iccembed_jpeg::Error> for Error {
    fn from(e: iccembed_jpeg::Error) -> Self {
        match e {
            iccembed_jpeg::Error::Io(e) => Self::Io(e),
            e => Self::Jpeg(e),
        }
    }
}

impl From<iccembed_png::Error> for Error {
    fn from(e: iccembed_png::Error) -> Self {
        match e {
            iccembed_png::Error::Io(e) => Self::Io(e),
            e => Self::Png(e),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Jpeg(e) => write!(f, "JPEG: {e}"),
            Self::Png(e) => write!(f, "PNG: {e}"),
            Self::UnknownFormat => write!(f, "unknown image format, expected JPEG or PNG"),
            Self::Unsupported { format, operation } => {
                write!(f, "{operation} is not supported for {format}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Jpeg(e) => Some(e),
            Self::Png(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
