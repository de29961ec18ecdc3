use anyhow::Result;

use crate::args::ParamOverrides;
use crate::commands::run::resolve_params;

/// Print the effective parameter record as JSON.
pub fn show_params(overrides: &ParamOverrides) -> Result<()> {
    let params = resolve_params(overrides)?;
    println!("{}", params.to_json_string()?);
    Ok(())
}
