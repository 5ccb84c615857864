pub mod chunk;
pub mod commands;
pub mod dpi;
pub mod embed;
pub mod error;
pub mod extract;

pub use commands::{Args, Subcommands};
pub use error::Error;

type Result<T> = std::result::Result<T, Error>;
