use std::path::PathBuf;

use clap::Parser;

/// Prints resolution of PNG image.
#[derive(Debug, Parser)]
#[non_exhaustive]
pub struct DpiArgs {
    /// Input PNG image
    pub image: PathBuf,
}
