//! General (non-sugar) derivation path: templated URLs and gated placements.

use crate::catalog::ExtensionKind;
use crate::derive::sugar::default_icon_url;
use crate::derive::template::TemplateResolver;
use crate::model::{ExtensionSettings, LaunchConfiguration, Placement, ToolRecord};

/// Make a host-relative URL absolute; anything else is left as is.
pub fn prepend_host(url: &str, host: &str) -> String {
    if url.starts_with('/') {
        format!("{}{}", host, url)
    } else {
        url.to_string()
    }
}

/// A declared placement is emitted unless a config option of the same name
/// exists and the caller did not opt in with the literal `"1"`.
pub fn placement_enabled(
    kind: ExtensionKind,
    record: &ToolRecord,
    resolver: &TemplateResolver<'_>,
) -> bool {
    record.declares(kind)
        && (!resolver.has_option(kind.key()) || resolver.param(kind.key()) == Some("1"))
}

fn build_placement(
    kind: ExtensionKind,
    record: &ToolRecord,
    config: &LaunchConfiguration,
    resolver: &TemplateResolver<'_>,
    host: &str,
) -> Placement {
    let empty = ExtensionSettings::default();
    let settings = record.settings(kind).unwrap_or(&empty);
    let key = |suffix: &str| format!("{}_{}", kind.key(), suffix);

    let url_template = settings
        .launch_url
        .as_deref()
        .or(record.launch_url.as_deref())
        .unwrap_or("");
    let link_text = resolver
        .overridable(&key("link_text"), settings.link_text.as_deref())
        .unwrap_or(&config.name);

    let mut placement = Placement {
        launch_url: prepend_host(&resolver.substitute(url_template), host),
        link_text: resolver.substitute(link_text),
        visibility: None,
        default: None,
        icon_url: None,
        width: None,
        height: None,
    };

    if kind == ExtensionKind::CourseNav {
        placement.visibility = resolver
            .overridable(&key("visibility"), settings.visibility.as_deref())
            .map(str::to_string);
        placement.default = resolver
            .overridable(&key("default"), settings.default.as_deref())
            .map(str::to_string);
    }

    if kind.is_dialog() {
        placement.icon_url = settings.icon_url.clone().or_else(|| config.icon_url.clone());
        placement.width = settings.width.or(record.width);
        placement.height = settings.height.or(record.height);
    }

    placement
}

pub fn apply_general(
    config: &mut LaunchConfiguration,
    record: &ToolRecord,
    resolver: &TemplateResolver<'_>,
    host: &str,
) {
    config.icon_url = Some(
        record
            .icon_url
            .clone()
            .unwrap_or_else(|| default_icon_url(host, &config.id)),
    );
    config.launch_url = record
        .launch_url
        .as_deref()
        .map(|url| prepend_host(&resolver.substitute(url), host));
    config.domain = record.domain.as_deref().map(|d| resolver.substitute(d));
    config.custom_fields = record.custom_fields.as_ref().map(|fields| {
        fields
            .iter()
            .map(|(k, v)| (k.clone(), resolver.substitute(v)))
            .collect()
    });

    for kind in ExtensionKind::ALL {
        if placement_enabled(kind, record, resolver) {
            let placement = build_placement(kind, record, config, resolver, host);
            config.set_placement(kind, placement);
        } else if record.declares(kind) {
            tracing::debug!(extension = %kind, "placement gated off by config option");
        }
    }
}
