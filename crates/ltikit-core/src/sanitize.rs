//! Record sanitizer: raw submitted form fields → [`ToolRecord`].
//!
//! Enumerated values are whitelisted against the closed sets in
//! [`crate::catalog`]; list-or-positional-map submissions are normalized into
//! ordered lists; empty, zero and false fields are left out of the record.
//! This is the only producer of records the derivation engine should see.

use crate::catalog::{
    intersect, AppType, ExtensionKind, PrivacyLevel, APP_TYPES, CATEGORIES, LEVELS,
};
use crate::errors::{LtiKitError, Result};
use crate::model::{ConfigOption, ConfigUrl, ExtensionSettings, Preview, ToolRecord};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Description stored when none is submitted
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Upper bound on the number of entries in a data tool's `data_json`
pub const MAX_DATA_ENTRIES: usize = 500;

/// Read-only view over a submitted form object
struct Form<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Form<'a> {
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// Non-empty text; numbers are accepted in their decimal form.
    fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text).filter(|s| !s.is_empty())
    }

    /// `"1"` or `true`
    fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Bool(true)))
            || matches!(self.get(key), Some(Value::String(s)) if s == "1")
    }

    fn positive(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(positive_int)
    }

    fn strings(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(Value::String(s)) => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Leading integer of a string or number; zero, negative and unparsable
/// values are treated as absent.
fn positive_int(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        Value::String(s) => {
            let trimmed = s.trim_start();
            let end = trimmed
                .char_indices()
                .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
                .map(|(i, _)| i)
                .unwrap_or(trimmed.len());
            trimmed[..end].parse::<i64>().ok()?
        }
        _ => return None,
    };
    u32::try_from(n).ok().filter(|n| *n > 0)
}

/// Escape `&` that does not start an entity reference such as `&amp;`.
pub fn escape_bare_ampersands(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c == '&' && !starts_entity(&text[i + 1..]) {
            out.push_str("&amp;");
        } else {
            out.push(c);
        }
    }
    out
}

fn starts_entity(rest: &str) -> bool {
    let name_len = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    name_len > 0 && rest[name_len..].starts_with(';')
}

/// An array, or an object whose keys are all positive integers (form
/// submissions of `{ "1": {...}, "2": {...} }`), as an ordered list.
fn positional_list(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(map) => {
            let mut indexed = map
                .iter()
                .map(|(k, v)| k.parse::<u64>().ok().filter(|i| *i > 0).map(|i| (i, v)))
                .collect::<Option<Vec<_>>>()?;
            indexed.sort_by_key(|(i, _)| *i);
            Some(indexed.into_iter().map(|(_, v)| v).collect())
        }
        _ => None,
    }
}

fn field_text(entry: &Value, key: &str) -> String {
    entry.get(key).and_then(scalar_text).unwrap_or_default()
}

/// Comma-separated string or (possibly nested) list of ids.
fn parse_ids(value: Option<&Value>) -> Vec<String> {
    fn flatten(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Array(items) => items.iter().for_each(|v| flatten(v, out)),
            other => out.extend(scalar_text(other)),
        }
    }

    let mut ids = Vec::new();
    match value {
        Some(Value::String(s)) => ids.extend(
            s.split(',')
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        ),
        Some(list @ Value::Array(_)) => flatten(list, &mut ids),
        _ => {}
    }
    ids
}

fn parse_extensions(form: &Form<'_>) -> Vec<ExtensionKind> {
    let keys: Vec<&str> = ExtensionKind::ALL.iter().map(ExtensionKind::key).collect();
    intersect(&form.strings("extensions"), &keys)
        .iter()
        .filter_map(|k| k.parse().ok())
        .collect()
}

fn parse_app_type(form: &Form<'_>) -> Option<AppType> {
    let submitted = form.text("app_type")?;
    if APP_TYPES.contains(&submitted.as_str()) || submitted == "custom" {
        Some(AppType::from(submitted))
    } else {
        tracing::debug!(app_type = %submitted, "dropping unknown app type");
        None
    }
}

fn parse_preview(form: &Form<'_>) -> Option<Preview> {
    let preview = form.get("preview")?;
    let url = preview.get("url").and_then(scalar_text).filter(|u| !u.is_empty())?;
    let height = preview.get("height").and_then(positive_int)?;
    Some(Preview { url, height })
}

/// Non-empty JSON array (bounded) of objects that each carry `url` and
/// `name`, re-rendered pretty-printed.
fn parse_data_json(form: &Form<'_>) -> Option<String> {
    let raw = form.text("data_json")?;
    let parsed: Value = serde_json::from_str(&raw).ok()?;
    let entries = parsed.as_array()?;
    if entries.is_empty() || entries.len() > MAX_DATA_ENTRIES {
        return None;
    }
    let truthy = |v: Option<&Value>| !matches!(v, None | Some(Value::Null) | Some(Value::Bool(false)));
    let valid = entries
        .iter()
        .all(|e| e.is_object() && truthy(e.get("url")) && truthy(e.get("name")));
    if !valid {
        tracing::debug!("dropping data_json with malformed entries");
        return None;
    }
    serde_json::to_string_pretty(&parsed).ok()
}

fn parse_config_urls(form: &Form<'_>) -> Vec<ConfigUrl> {
    form.get("config_urls")
        .and_then(positional_list)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| ConfigUrl {
            url: field_text(entry, "url"),
            description: field_text(entry, "description"),
        })
        .collect()
}

/// `None` when nothing list-shaped was submitted; an empty list is still
/// "present" and lets the variable name/description through.
fn parse_config_options(form: &Form<'_>) -> Option<Vec<ConfigOption>> {
    let entries = form.get("config_options").and_then(positional_list)?;
    Some(
        entries
            .into_iter()
            .map(|entry| ConfigOption {
                name: field_text(entry, "name"),
                description: field_text(entry, "description"),
                option_type: field_text(entry, "type"),
                value: field_text(entry, "value"),
                required: matches!(entry.get("required"), Some(Value::Bool(true)))
                    || matches!(entry.get("required"), Some(Value::String(s)) if s == "1"),
            })
            .collect(),
    )
}

/// A plain map, or a positional map of `{key, value}` pairs.
fn parse_custom_fields(form: &Form<'_>) -> Option<BTreeMap<String, String>> {
    let submitted = form.get("custom_fields")?;
    let fields: BTreeMap<String, String> = match positional_list(submitted) {
        Some(pairs) if submitted.is_object() => pairs
            .into_iter()
            .map(|pair| (field_text(pair, "key"), field_text(pair, "value")))
            .collect(),
        _ => submitted
            .as_object()?
            .iter()
            .map(|(k, v)| (k.clone(), scalar_text(v).unwrap_or_default()))
            .collect(),
    };
    (!fields.is_empty()).then_some(fields)
}

fn parse_extension_settings(form: &Form<'_>, kind: ExtensionKind) -> ExtensionSettings {
    let key = |suffix: &str| format!("{}_{}", kind.key(), suffix);
    ExtensionSettings {
        launch_url: form.text(&key("launch_url")),
        link_text: form.text(&key("link_text")),
        icon_url: form.text(&key("icon_url")),
        width: form.positive(&key("width")),
        height: form.positive(&key("height")),
        visibility: form.text(&key("visibility")),
        default: form.text(&key("default")),
    }
}

/// Sanitize a submitted form into a [`ToolRecord`].
///
/// # Errors
///
/// - `InvalidRecord`: the form is not an object, or `id`/`name` is missing
///   or empty
pub fn sanitize_record(form: &Value) -> Result<ToolRecord> {
    let fields = form.as_object().ok_or_else(|| LtiKitError::InvalidRecord {
        reason: "form must be a JSON object".to_string(),
    })?;
    let form = Form { fields };

    let id = form.text("id").ok_or_else(|| LtiKitError::InvalidRecord {
        reason: "`id` is required".to_string(),
    })?;
    let name = form.text("name").ok_or_else(|| LtiKitError::InvalidRecord {
        reason: "`name` is required".to_string(),
    })?;

    let mut record = ToolRecord::new(id, name);
    record.categories = intersect(&form.strings("categories"), CATEGORIES);
    record.levels = intersect(&form.strings("levels"), LEVELS);
    record.doesnt_work = parse_ids(form.get("doesnt_work"));
    record.only_works = parse_ids(form.get("only_works"));
    record.description = Some(escape_bare_ampersands(
        form.text("description").as_deref().unwrap_or(DEFAULT_DESCRIPTION),
    ));
    record.app_type = parse_app_type(&form);
    record.short_description = form.text("short_description");
    record.extensions = parse_extensions(&form);
    record.preview = parse_preview(&form);
    record.beta = form.flag("beta");
    record.test_instructions = form.text("test_instructions");
    record.support_link = form.text("support_link");
    record.ims_link = form.text("ims_link");
    record.author_name = form.text("author_name");
    record.submitter_name = form.text("submitter_name");
    record.submitter_url = form.text("submitter_url");
    record.privacy_level = Some(
        form.text("privacy_level")
            .and_then(|p| p.parse::<PrivacyLevel>().ok())
            .unwrap_or_default(),
    );

    let app_type = record.app_type.clone();
    match app_type {
        Some(AppType::OpenLaunch) => record.no_launch = form.flag("no_launch"),
        Some(AppType::Data) => {
            record.data_url = form.text("data_url");
            record.data_json = parse_data_json(&form);
        }
        _ => {}
    }

    if app_type != Some(AppType::OpenLaunch) {
        record.icon_url = form.text("icon_url");
        record.logo_url = form.text("logo_url");
        record.banner_url = form.text("banner_url");
    }

    if app_type.as_ref().is_some_and(AppType::is_sugar) {
        record.exclude_from_public_collections = form.flag("exclude_from_public_collections");
    } else {
        record.config_url = form.text("config_url");
        record.config_urls = parse_config_urls(&form);
        record.any_key = form.flag("any_key");

        if app_type != Some(AppType::Custom) {
            record.launch_url = form.text("launch_url");
            record.domain = form.text("domain");
            record.config_directions = form.text("config_directions");
            record.custom_fields = parse_custom_fields(&form);
            for kind in record.extensions.clone() {
                let settings = parse_extension_settings(&form, kind);
                if !settings.is_empty() {
                    record.extension_settings.insert(kind, settings);
                }
            }
        }
    }

    if let Some(options) = parse_config_options(&form) {
        record.config_options = options;
        record.variable_name = form.text("variable_name");
        record.variable_description = form.text("variable_description");
    }

    let sized = record.declares(ExtensionKind::EditorButton)
        || record.declares(ExtensionKind::ResourceSelection);
    if sized && app_type != Some(AppType::Custom) {
        record.width = form.positive("width");
        record.height = form.positive("height");
    }

    tracing::debug!(
        tool_id = %record.id,
        extensions = record.extensions.len(),
        config_options = record.config_options.len(),
        "sanitized tool record"
    );
    Ok(record)
}
