//! Launch configuration derivation.
//!
//! [`derive_launch_config`] is a pure, total function of a sanitized
//! [`ToolRecord`], runtime parameters and the host base URL. Malformed
//! records are the sanitizer's concern, so nothing here returns an error.
//!
//! - `open_launch` / `data` app types expand through [`sugar`]
//! - every other app type goes through [`placements`]
//! - all templated text resolves through [`template::TemplateResolver`]

pub mod placements;
pub mod sugar;
pub mod template;

use crate::catalog::AppType;
use crate::model::{LaunchConfiguration, ToolRecord};
use std::collections::BTreeMap;

pub use placements::prepend_host;
pub use template::TemplateResolver;

/// Separator between the summary and the rest of a long description
pub const DESCRIPTION_BREAK: &str = "<br/>";

fn description_template(record: &ToolRecord) -> &str {
    record
        .variable_description
        .as_deref()
        .or(record.short_description.as_deref())
        .or_else(|| {
            record
                .description
                .as_deref()
                .and_then(|d| d.split(DESCRIPTION_BREAK).next())
        })
        .unwrap_or("")
}

/// Derive the launch configuration for a record.
pub fn derive_launch_config(
    record: &ToolRecord,
    params: &BTreeMap<String, String>,
    host: &str,
) -> LaunchConfiguration {
    let resolver = TemplateResolver::new(record, params);

    let name_template = record.variable_name.as_deref().unwrap_or(&record.name);
    let mut config = LaunchConfiguration::new(record.id.clone(), resolver.substitute(name_template));
    config.description = resolver.substitute(description_template(record));
    config.privacy_level = record.privacy_level.unwrap_or_default();

    match &record.app_type {
        Some(AppType::OpenLaunch) => sugar::apply_open_launch(&mut config, record, host),
        Some(AppType::Data) => sugar::apply_data_launch(&mut config, record, host),
        _ => placements::apply_general(&mut config, record, &resolver, host),
    }

    tracing::debug!(
        tool_id = %config.id,
        app_type = record.app_type.as_ref().map(AppType::as_str).unwrap_or("none"),
        placements = config.placements().count(),
        "derived launch configuration"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_prefers_variable_then_short_then_first_segment() {
        let mut record = ToolRecord::new("t", "Tool");
        record.description = Some("Summary<br/>Long body".to_string());
        assert_eq!(description_template(&record), "Summary");

        record.short_description = Some("Short".to_string());
        assert_eq!(description_template(&record), "Short");

        record.variable_description = Some("Var {{x}}".to_string());
        assert_eq!(description_template(&record), "Var {{x}}");
    }

    #[test]
    fn test_missing_description_is_empty() {
        let record = ToolRecord::new("t", "Tool");
        assert_eq!(description_template(&record), "");
    }
}
