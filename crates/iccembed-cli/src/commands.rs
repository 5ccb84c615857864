pub mod chunk;
pub mod dpi;
pub mod embed;
pub mod extract;

pub use chunk::{ExtractChunkArgs, InsertChunkArgs};
pub use dpi::DpiArgs;
pub use embed::EmbedArgs;
pub use extract::ExtractArgs;

#[derive(Debug, clap::Parser)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommands,
    #[command(flatten)]
    pub globals: GlobalArgs,
}

#[derive(Debug, clap::Args)]
#[non_exhaustive]
pub struct GlobalArgs {
    /// Print debug information; can be repeated.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Do not print logs to console.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommands {
    /// Embed an ICC profile into JPEG or PNG image.
    Embed(EmbedArgs),
    /// Extract the ICC profile embedded in JPEG or PNG image.
    Extract(ExtractArgs),
    /// Print resolution of PNG image in dots per inch.
    Dpi(DpiArgs),
    /// Insert a raw chunk right after IHDR of PNG image.
    InsertChunk(InsertChunkArgs),
    /// Extract the data of a chunk from PNG image.
    ExtractChunk(ExtractChunkArgs),
}
