use crate::{Error, Result, commands::extract::*};

pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let _guard = tracing::trace_span!("Handle extract subcommand").entered();

    let profile = iccembed::extract_icc_profile(&args.image)
        .map_err(Error::Extract)?
        .ok_or(Error::ProfileNotFound)?;
    std::fs::write(&args.output, &profile).map_err(Error::WriteIcc)?;
    tracing::info!(
        "Wrote ICC profile ({} bytes) to {}",
        profile.len(),
        args.output.display()
    );
    Ok(())
}
