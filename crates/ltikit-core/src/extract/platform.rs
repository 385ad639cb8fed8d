//! Hoisting of the reserved platform's extension fields onto the descriptor.

use crate::model::CustomFieldMap;
use ltikit_core_types::Sensitive;

/// Keys pulled out of the reserved platform's extension block
pub const PROMOTED_KEYS: &[&str] = &[
    "privacy_level",
    "domain",
    "consumer_key",
    "shared_secret",
    "tool_id",
    "outcome",
];

/// Fields promoted from the reserved platform block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromotedFields {
    pub privacy_level: Option<String>,
    pub domain: Option<String>,
    pub consumer_key: Option<String>,
    pub shared_secret: Option<Sensitive<String>>,
    pub tool_id: Option<String>,
    pub assignment_points_possible: Option<f64>,
}

/// Separate the promoted fields from the remaining platform settings.
///
/// Returns `(promoted, remaining_settings)`; `fields` is not modified.
pub fn promote_platform_fields(fields: &CustomFieldMap) -> (PromotedFields, CustomFieldMap) {
    let (taken, remaining) = fields.split_keys(PROMOTED_KEYS);
    let text = |key: &str| taken.text(key).map(str::to_string);

    let promoted = PromotedFields {
        privacy_level: text("privacy_level"),
        domain: text("domain"),
        consumer_key: text("consumer_key"),
        shared_secret: text("shared_secret").map(Sensitive::new),
        tool_id: text("tool_id"),
        assignment_points_possible: taken.text("outcome").map(lenient_float),
    };
    (promoted, remaining)
}

/// Parse the leading decimal number of `raw`, yielding 0.0 when there is none.
///
/// An exponent (`"1e3"`) is honoured; trailing text such as units
/// (`"10 pts"`) is ignored.
pub fn lenient_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut last_good = 0;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                last_good = end + 1;
            }
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }
    last_good = exponent_end(bytes, last_good).unwrap_or(last_good);
    s[..last_good].parse().unwrap_or(0.0)
}

/// End of an `e[+-]digits` tail starting at `start`, if one is present.
fn exponent_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut end = start;
    if !matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        return None;
    }
    end += 1;
    if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    (digits > 0).then_some(end + digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_splits_without_mutation() {
        let mut fields = CustomFieldMap::new();
        fields.insert_text("privacy_level", "public");
        fields.insert_text("domain", "x.edu");
        fields.insert_text("outcome", "10.5");
        fields.insert_text("shared_secret", "s3cr3t");
        fields.insert_text("selection_width", "500");

        let (promoted, rest) = promote_platform_fields(&fields);

        assert_eq!(promoted.privacy_level.as_deref(), Some("public"));
        assert_eq!(promoted.domain.as_deref(), Some("x.edu"));
        assert_eq!(promoted.assignment_points_possible, Some(10.5));
        assert_eq!(
            promoted.shared_secret.as_ref().map(|s| s.expose().as_str()),
            Some("s3cr3t")
        );
        assert_eq!(promoted.tool_id, None);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest.text("selection_width"), Some("500"));
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn test_lenient_float() {
        assert_eq!(lenient_float("10.5"), 10.5);
        assert_eq!(lenient_float(" 20 pts"), 20.0);
        assert_eq!(lenient_float("-3.25x"), -3.25);
        assert_eq!(lenient_float("7."), 7.0);
        assert_eq!(lenient_float("abc"), 0.0);
        assert_eq!(lenient_float("1e3"), 1000.0);
        assert_eq!(lenient_float("2.5E-1 pts"), 0.25);
        assert_eq!(lenient_float("4e"), 4.0);
        assert_eq!(lenient_float("4e+x"), 4.0);
        assert_eq!(lenient_float(""), 0.0);
    }
}
