use crate::{Error, Result, commands::embed::*};

pub fn handle_embed(args: EmbedArgs) -> Result<()> {
    let _guard = tracing::trace_span!("Handle embed subcommand").entered();

    let profile = std::fs::read(&args.profile).map_err(Error::ReadIcc)?;
    let format = iccembed::embed_icc_profile(&args.image, &profile).map_err(Error::Embed)?;
    tracing::info!(
        "Embedded ICC profile ({} bytes) into {format} image",
        profile.len()
    );
    Ok(())
}
