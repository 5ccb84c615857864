//! iccembed embeds ICC color profiles, and reads physical resolution, in JPEG and PNG files by
//! editing the container in place. Image data is never decoded or re-encoded.
//!
//! - JPEG: the profile goes into an APP2 `ICC_PROFILE` segment right after APP0.
//! - PNG: the profile goes into a zlib-compressed `iCCP` chunk right after `IHDR`; `sRGB` and
//!   `pHYs` chunks can be placed the same way.
//!
//! # Example
//!
//! ```no_run
//! use iccembed::Container;
//!
//! let profile = std::fs::read("DisplayP3.icc")?;
//! let mut image = Container::open("photo.png")?;
//! image.embed_icc_profile(&profile)?;
//!
//! let read_back = image.icc_profile()?;
//! assert_eq!(read_back.as_deref(), Some(&*profile));
//! # Ok::<_, iccembed::Error>(())
//! ```
use std::fs::{File, OpenOptions};
use std::io::prelude::*;
use std::io::SeekFrom;
use std::path::Path;

mod error;

pub use error::{Error, Result};
pub use iccembed_codec as codec;
pub use iccembed_jpeg as jpeg;
pub use iccembed_png as png;
pub use iccembed_png::{Chunk, ChunkType, PhysicalDimensions, RenderingIntent};

/// Container format of an image file.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Detects the format from the leading bytes of a file.
    pub fn detect(buf: &[u8]) -> Option<Self> {
        if buf.starts_with(&iccembed_png::PNG_SIGNATURE) {
            Some(Self::Png)
        } else if buf.starts_with(&iccembed_jpeg::SOI) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jpeg => write!(f, "JPEG"),
            Self::Png => write!(f, "PNG"),
        }
    }
}

/// An image file (or any seekable stream) opened for metadata editing.
///
/// The stream is released when the container is dropped, on success and error paths alike.
#[derive(Debug)]
pub struct Container<S = File> {
    stream: S,
    format: ImageFormat,
}

impl Container<File> {
    /// Opens an image file for reading and writing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Opening image read-write");
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Self::from_stream(file)
    }

    /// Opens an image file for reading only. Insert operations will fail with an I/O error.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Opening image read-only");
        let file = File::open(path)?;
        Self::from_stream(file)
    }
}

impl<S: Read + Seek> Container<S> {
    /// Wraps a stream, detecting its format from the signature.
    pub fn from_stream(mut stream: S) -> Result<Self> {
        stream.seek(SeekFrom::Start(0))?;
        let mut signature = Vec::with_capacity(iccembed_png::PNG_SIGNATURE.len());
        (&mut stream)
            .take(iccembed_png::PNG_SIGNATURE.len() as u64)
            .read_to_end(&mut signature)?;

        let format = ImageFormat::detect(&signature).ok_or(Error::UnknownFormat)?;
        tracing::debug!(%format, "Detected image format");
        Ok(Self { stream, format })
    }

    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    fn require_png(&self, operation: &'static str) -> Result<()> {
        match self.format {
            ImageFormat::Png => Ok(()),
            format => Err(Error::Unsupported { format, operation }),
        }
    }

    /// Returns the embedded ICC profile, if any.
    ///
    /// For PNG the profile is inflated from the `iCCP` chunk.
    pub fn icc_profile(&mut self) -> Result<Option<Vec<u8>>> {
        match self.format {
            ImageFormat::Jpeg => Ok(iccembed_jpeg::extract(&mut self.stream)?),
            ImageFormat::Png => Ok(iccembed_png::extract_icc_profile(&mut self.stream)?
                .map(|embedded| embedded.profile)),
        }
    }

    /// Returns the first chunk of the given type. PNG only.
    pub fn chunk(&mut self, chunk_type: ChunkType) -> Result<Option<Chunk>> {
        self.require_png("chunk extraction")?;
        Ok(iccembed_png::extract(&mut self.stream, chunk_type)?)
    }

    /// Returns the resolution in dots per inch, as `(x, y)`, read from `pHYs`. PNG only.
    pub fn dpi(&mut self) -> Result<Option<(f32, f32)>> {
        self.require_png("DPI lookup")?;
        Ok(iccembed_png::get_dpi(&mut self.stream)?)
    }
}

impl<S: Read + Write + Seek> Container<S> {
    /// Embeds an ICC profile: an APP2 segment for JPEG, an `iCCP` chunk for PNG.
    pub fn embed_icc_profile(&mut self, profile: &[u8]) -> Result<()> {
        match self.format {
            ImageFormat::Jpeg => iccembed_jpeg::insert(&mut self.stream, profile)?,
            ImageFormat::Png => iccembed_png::insert_icc_profile(&mut self.stream, profile)?,
        }
        Ok(())
    }

    /// Inserts a raw chunk right after `IHDR`. PNG only.
    pub fn insert_chunk(&mut self, chunk_type: ChunkType, data: &[u8]) -> Result<()> {
        self.require_png("chunk insertion")?;
        Ok(iccembed_png::insert(&mut self.stream, chunk_type, data)?)
    }

    /// Marks the image as sRGB with the given rendering intent. PNG only.
    pub fn insert_srgb(&mut self, intent: RenderingIntent) -> Result<()> {
        self.require_png("sRGB insertion")?;
        Ok(iccembed_png::insert_srgb(&mut self.stream, intent)?)
    }

    /// Records the physical pixel density. PNG only.
    pub fn insert_physical_dimensions(&mut self, dims: PhysicalDimensions) -> Result<()> {
        self.require_png("pHYs insertion")?;
        Ok(iccembed_png::insert_physical_dimensions(
            &mut self.stream,
            dims,
        )?)
    }
}

/// Embeds an ICC profile into the image at `path`, returning the detected format.
pub fn embed_icc_profile(path: impl AsRef<Path>, profile: &[u8]) -> Result<ImageFormat> {
    let mut container = Container::open(path)?;
    container.embed_icc_profile(profile)?;
    Ok(container.format())
}

/// Reads the ICC profile embedded in the image at `path`.
pub fn extract_icc_profile(path: impl AsRef<Path>) -> Result<Option<Vec<u8>>> {
    Container::open_read_only(path)?.icc_profile()
}

/// Reads the resolution of the PNG image at `path`, in dots per inch.
pub fn get_dpi(path: impl AsRef<Path>) -> Result<Option<(f32, f32)>> {
    Container::open_read_only(path)?.dpi()
}
