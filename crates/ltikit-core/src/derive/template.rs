//! `{{name}}` / `{{escape:name}}` substitution.
//!
//! A token resolves to the runtime parameter of that name, else the declared
//! option's default value, else the empty string. The `escape:` form applies
//! URL-component escaping to the resolved value.

use crate::model::{ConfigOption, ToolRecord};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Unreserved characters (RFC 3986) pass through; everything else is escaped.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn escape_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*escape:(\w+)\s*\}\}").expect("static regex"))
}

fn plain_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("static regex"))
}

pub fn escape_component(value: &str) -> String {
    utf8_percent_encode(value, URL_COMPONENT).to_string()
}

/// Resolves template tokens against runtime parameters and declared options
pub struct TemplateResolver<'a> {
    params: &'a BTreeMap<String, String>,
    options: BTreeMap<&'a str, &'a ConfigOption>,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(record: &'a ToolRecord, params: &'a BTreeMap<String, String>) -> Self {
        Self {
            params,
            options: record.options_by_name(),
        }
    }

    pub fn option(&self, name: &str) -> Option<&'a ConfigOption> {
        self.options.get(name).copied()
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name).map(String::as_str)
    }

    /// runtime override → declared default → ""
    pub fn value(&self, name: &str) -> &'a str {
        self.param(name)
            .or_else(|| self.option(name).map(|o| o.value.as_str()))
            .unwrap_or("")
    }

    pub fn substitute(&self, template: &str) -> String {
        let escaped = escape_token().replace_all(template, |caps: &Captures<'_>| {
            escape_component(self.value(&caps[1]))
        });
        plain_token()
            .replace_all(&escaped, |caps: &Captures<'_>| self.value(&caps[1]).to_string())
            .into_owned()
    }

    /// Value for a named record field that a declared option can override.
    ///
    /// A runtime parameter only counts when it is non-empty and an option of
    /// that name is declared; a declared default only counts when non-empty.
    /// An option declared with an empty default therefore does not blank the
    /// field: resolution falls through to `raw` (and link text on to the tool
    /// name) instead of yielding `""`.
    pub fn overridable(&self, key: &str, raw: Option<&'a str>) -> Option<&'a str> {
        let declared = self.option(key);
        let runtime = declared
            .and(self.param(key))
            .filter(|v| !v.is_empty());
        runtime
            .or_else(|| declared.map(|o| o.value.as_str()).filter(|v| !v.is_empty()))
            .or(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(options: &[(&str, &str)]) -> ToolRecord {
        let mut record = ToolRecord::new("t", "Tool");
        record.config_options = options
            .iter()
            .map(|(n, v)| ConfigOption::new(*n, *v))
            .collect();
        record
    }

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_runtime_params_and_escaping() {
        let record = record_with(&[]);
        let p = params(&[("a", "x"), ("b", "y z")]);
        let resolver = TemplateResolver::new(&record, &p);
        assert_eq!(resolver.substitute("{{a}}-{{escape:b}}"), "x-y%20z");
    }

    #[test]
    fn test_option_default_then_empty() {
        let record = record_with(&[("a", "fallback")]);
        let p = params(&[]);
        let resolver = TemplateResolver::new(&record, &p);
        assert_eq!(resolver.substitute("{{a}}-{{escape:b}}"), "fallback-");
    }

    #[test]
    fn test_whitespace_inside_braces_is_allowed() {
        let record = record_with(&[]);
        let p = params(&[("key", "v")]);
        let resolver = TemplateResolver::new(&record, &p);
        assert_eq!(resolver.substitute("{{ key }}/{{ escape:key }}"), "v/v");
    }

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape_component("a&b=c/d"), "a%26b%3Dc%2Fd");
        assert_eq!(escape_component("safe-_.~"), "safe-_.~");
    }

    #[test]
    fn test_text_without_tokens_is_untouched() {
        let record = record_with(&[]);
        let p = params(&[]);
        let resolver = TemplateResolver::new(&record, &p);
        assert_eq!(resolver.substitute("https://tool.example/{x}"), "https://tool.example/{x}");
    }

    #[test]
    fn test_overridable_requires_declared_option_for_runtime_value() {
        let record = record_with(&[("course_nav_link_text", "")]);
        let p = params(&[("course_nav_link_text", "From Param"), ("user_nav_link_text", "Ignored")]);
        let resolver = TemplateResolver::new(&record, &p);

        assert_eq!(
            resolver.overridable("course_nav_link_text", Some("Raw")),
            Some("From Param")
        );
        assert_eq!(resolver.overridable("user_nav_link_text", Some("Raw")), Some("Raw"));
        assert_eq!(resolver.overridable("user_nav_link_text", None), None);
    }

    #[test]
    fn test_overridable_empty_default_falls_through_to_raw() {
        let record = record_with(&[("course_nav_link_text", "")]);
        let p = params(&[("course_nav_link_text", "")]);
        let resolver = TemplateResolver::new(&record, &p);

        assert_eq!(
            resolver.overridable("course_nav_link_text", Some("Raw")),
            Some("Raw")
        );
        assert_eq!(resolver.overridable("course_nav_link_text", None), None);
    }
}
