use std::path::PathBuf;

use clap::Parser;

/// Extracts the embedded ICC profile.
#[derive(Debug, Parser)]
#[non_exhaustive]
pub struct ExtractArgs {
    /// Input image
    pub image: PathBuf,
    /// Output ICC profile
    pub output: PathBuf,
}
