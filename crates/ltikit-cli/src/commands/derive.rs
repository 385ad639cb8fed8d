//! Derive command
//!
//! Usage: ltikit derive <RECORD_JSON> [--param KEY=VALUE]... [--host URL]

use crate::settings::Settings;
use anyhow::Result;
use clap::Args;
use ltikit_core::ToolRecord;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DeriveArgs {
    /// JSON file holding a sanitized tool record
    pub record: PathBuf,

    /// Runtime parameter for `{{name}}` placeholders (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

/// Execute derive command
pub fn execute(args: DeriveArgs, settings: &Settings) -> Result<()> {
    let record: ToolRecord = super::read_json(&args.record)?;
    let params: BTreeMap<String, String> = args.params.into_iter().collect();

    let config = ltikit_engine::derive_launch_config(&record, &params, &settings.host);
    super::print_json(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("course=42"),
            Ok(("course".to_string(), "42".to_string()))
        );
        assert_eq!(
            parse_param("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_param("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }
}
