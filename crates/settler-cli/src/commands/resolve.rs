//! Handler for `settler resolve`.

use std::path::Path;

use miette::Result;

use settler_util::errors::SettlerError;

use crate::cli::OutputFormat;

pub fn exec(settings: Option<&Path>, format: OutputFormat) -> Result<()> {
    let loaded = super::load_workspace(settings)?;
    match format {
        OutputFormat::Text => print!("{}", loaded.workspace),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.workspace).map_err(|e| {
                SettlerError::Generic {
                    message: format!("Failed to serialize workspace: {e}"),
                }
            })?;
            println!("{json}");
        }
    }
    Ok(())
}
