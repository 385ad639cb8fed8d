//! Diff command
//!
//! Usage: ltikit diff <A_JSON> <B_JSON> [--summary]

use anyhow::Result;
use clap::Args;
use ltikit_core::diff::render_human_summary;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// First document
    pub a: PathBuf,

    /// Second document
    pub b: PathBuf,

    /// Print a line per changed path instead of the diff tree
    #[arg(long)]
    pub summary: bool,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<()> {
    let a: Value = super::read_json(&args.a)?;
    let b: Value = super::read_json(&args.b)?;

    let result = ltikit_engine::diff_json(&a, &b);

    if args.summary {
        print!("{}", render_human_summary(result.as_ref()));
        Ok(())
    } else {
        super::print_json(&result)
    }
}
