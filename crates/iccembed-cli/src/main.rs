use clap::Parser;
use iccembed_cli::{Args, Subcommands};

fn main() -> std::process::ExitCode {
    let Args {
        subcommand,
        globals,
    } = Args::parse();

    if !globals.quiet {
        let filter = match globals.verbose {
            0 => tracing::level_filters::LevelFilter::INFO,
            1 => tracing::level_filters::LevelFilter::DEBUG,
            2.. => tracing::level_filters::LevelFilter::TRACE,
        };
        let env_filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(filter.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::ACTIVE)
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match subcommand {
        Subcommands::Embed(args) => iccembed_cli::embed::handle_embed(args),
        Subcommands::Extract(args) => iccembed_cli::extract::handle_extract(args),
        Subcommands::Dpi(args) => iccembed_cli::dpi::handle_dpi(args),
        Subcommands::InsertChunk(args) => iccembed_cli::chunk::handle_insert_chunk(args),
        Subcommands::ExtractChunk(args) => iccembed_cli::chunk::handle_extract_chunk(args),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}
