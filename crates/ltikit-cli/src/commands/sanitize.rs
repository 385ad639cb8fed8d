//! Sanitize command
//!
//! Usage: ltikit sanitize <FORM_JSON>

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SanitizeArgs {
    /// JSON file holding the submitted form fields
    pub form: PathBuf,
}

/// Execute sanitize command
pub fn execute(args: SanitizeArgs) -> Result<()> {
    let form: Value = super::read_json(&args.form)?;
    let record = ltikit_core::sanitize_record(&form)?;
    super::print_json(&record)
}
