use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved key under which a `custom` grouping element is stored
pub const NESTED_CUSTOM_KEY: &str = "custom_fields";

/// A custom field is either a scalar value or a named group of fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomFieldValue {
    Text(String),
    Group(CustomFieldMap),
}

impl CustomFieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CustomFieldValue::Text(s) => Some(s),
            CustomFieldValue::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&CustomFieldMap> {
        match self {
            CustomFieldValue::Text(_) => None,
            CustomFieldValue::Group(g) => Some(g),
        }
    }
}

/// Recursive name → value map extracted from `property`/`options`/`custom` elements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomFieldMap {
    entries: BTreeMap<String, CustomFieldValue>,
}

impl CustomFieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: CustomFieldValue) {
        self.entries.insert(name.into(), value);
    }

    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name, CustomFieldValue::Text(value.into()));
    }

    pub fn insert_group(&mut self, name: impl Into<String>, group: CustomFieldMap) {
        self.insert(name, CustomFieldValue::Group(group));
    }

    pub fn get(&self, name: &str) -> Option<&CustomFieldValue> {
        self.entries.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(CustomFieldValue::as_text)
    }

    pub fn group(&self, name: &str) -> Option<&CustomFieldMap> {
        self.get(name).and_then(CustomFieldValue::as_group)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CustomFieldValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split into the entries named in `keys` and everything else.
    ///
    /// Neither side aliases `self`; the original map is left untouched.
    pub fn split_keys(&self, keys: &[&str]) -> (CustomFieldMap, CustomFieldMap) {
        let mut taken = CustomFieldMap::new();
        let mut rest = CustomFieldMap::new();
        for (name, value) in &self.entries {
            if keys.contains(&name.as_str()) {
                taken.insert(name.clone(), value.clone());
            } else {
                rest.insert(name.clone(), value.clone());
            }
        }
        (taken, rest)
    }

    /// Top-level scalar entries only; groups are skipped
    pub fn text_entries(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_text().map(|t| (k.clone(), t.to_string())))
            .collect()
    }
}

impl FromIterator<(String, CustomFieldValue)> for CustomFieldMap {
    fn from_iter<I: IntoIterator<Item = (String, CustomFieldValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
