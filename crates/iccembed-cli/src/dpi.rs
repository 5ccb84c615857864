use crate::{Error, Result, commands::dpi::*};

pub fn handle_dpi(args: DpiArgs) -> Result<()> {
    let _guard = tracing::trace_span!("Handle dpi subcommand").entered();

    let (dpi_x, dpi_y) = iccembed::get_dpi(&args.image)
        .map_err(Error::Extract)?
        .ok_or(Error::DpiNotFound)?;
    println!("{dpi_x} x {dpi_y}");
    Ok(())
}
