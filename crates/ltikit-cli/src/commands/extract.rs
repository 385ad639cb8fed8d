//! Extract command
//!
//! Usage: ltikit extract <LOCATION> [--record <ID>]

use crate::settings::Settings;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Descriptor URL (http/https) or local file path
    pub location: String,

    /// Emit a tool record with this id instead of the raw descriptor
    #[arg(long, value_name = "ID")]
    pub record: Option<String>,
}

/// Execute extract command
pub fn execute(args: ExtractArgs, settings: &Settings) -> Result<()> {
    let source = ltikit_fetch::source_for(&args.location, settings.fetch_timeout())?;

    match args.record {
        Some(id) => {
            let record = ltikit_engine::import_record(source.as_ref(), &args.location, &id)?;
            super::print_json(&record)
        }
        None => {
            let descriptor = ltikit_engine::import_descriptor(source.as_ref(), &args.location)?;
            super::print_json(&descriptor)
        }
    }
}
