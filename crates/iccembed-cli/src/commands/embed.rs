use std::path::PathBuf;

use clap::Parser;

/// Embeds an ICC profile into JPEG or PNG image, in place.
#[derive(Debug, Parser)]
#[non_exhaustive]
pub struct EmbedArgs {
    /// Image file to modify
    pub image: PathBuf,
    /// ICC profile to embed
    pub profile: PathBuf,
}
