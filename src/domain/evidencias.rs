// SPDX-License-Identifier: MPL-2.0
//! Normalization of the defect evidence field.
//!
//! The API stores evidence as free text: a bare URL, a JSON-encoded array
//! of URLs, or anything else a client happened to write. Newer servers may
//! also send a real JSON array. [`Evidencias::classify`] is the only place
//! that decides how each shape maps to a list of URLs.

use serde::Deserialize;
use serde_json::Value;

/// The evidence field exactly as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawEvidencias {
    Text(String),
    List(Vec<Value>),
}

/// Evidence after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidencias {
    /// Nothing attached.
    Empty,
    /// A single bare URL.
    Url(String),
    /// A JSON array, items in their original order.
    Encoded(Vec<String>),
    /// Text that is neither a URL nor a JSON array, kept as one entry.
    Opaque(String),
}

impl Evidencias {
    /// Classifies a raw evidence string.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if raw.is_empty() {
            return Evidencias::Empty;
        }

        let trimmed = raw.trim();
        if trimmed.starts_with("http") && !trimmed.starts_with('[') {
            return Evidencias::Url(raw.to_string());
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => Evidencias::Encoded(items.into_iter().map(item_text).collect()),
            _ => Evidencias::Opaque(raw.to_string()),
        }
    }

    /// Classifies the optional wire value of a defect record.
    #[must_use]
    pub fn from_raw(raw: Option<&RawEvidencias>) -> Self {
        match raw {
            None => Evidencias::Empty,
            Some(RawEvidencias::Text(text)) => Self::classify(text),
            Some(RawEvidencias::List(items)) => {
                Evidencias::Encoded(items.iter().cloned().map(item_text).collect())
            }
        }
    }

    /// Whether there is anything to open in the gallery.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Evidencias::Empty => true,
            Evidencias::Encoded(urls) => urls.is_empty(),
            Evidencias::Url(_) | Evidencias::Opaque(_) => false,
        }
    }

    /// Canonical ordered sequence of URLs.
    #[must_use]
    pub fn into_urls(self) -> Vec<String> {
        match self {
            Evidencias::Empty => Vec::new(),
            Evidencias::Url(url) | Evidencias::Opaque(url) => vec![url],
            Evidencias::Encoded(urls) => urls,
        }
    }
}

/// Parses a raw evidence string into an ordered sequence of URLs.
///
/// Never fails: input that cannot be interpreted becomes a one-element
/// sequence holding the raw text.
#[must_use]
pub fn parse_evidencias(raw: &str) -> Vec<String> {
    Evidencias::classify(raw).into_urls()
}

fn item_text(item: Value) -> String {
    match item {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_url_is_a_single_entry() {
        assert_eq!(parse_evidencias("http://x/a.png"), vec!["http://x/a.png"]);
    }

    #[test]
    fn bare_url_keeps_surrounding_whitespace() {
        assert_eq!(
            Evidencias::classify("  https://x/a.png "),
            Evidencias::Url("  https://x/a.png ".into())
        );
    }

    #[test]
    fn json_array_yields_items_in_order() {
        assert_eq!(
            parse_evidencias(r#"["http://x/a.png","http://x/b.png"]"#),
            vec!["http://x/a.png", "http://x/b.png"]
        );
    }

    #[test]
    fn garbage_falls_back_to_raw_text() {
        assert_eq!(parse_evidencias("not json"), vec!["not json"]);
    }

    #[test]
    fn json_that_is_not_an_array_falls_back_to_raw_text() {
        assert_eq!(
            Evidencias::classify(r#"{"url": "http://x"}"#),
            Evidencias::Opaque(r#"{"url": "http://x"}"#.into())
        );
    }

    #[test]
    fn empty_string_and_empty_array_have_nothing_to_show() {
        assert!(Evidencias::classify("").is_empty());
        assert!(Evidencias::classify("[]").is_empty());
        assert!(parse_evidencias("").is_empty());
    }

    #[test]
    fn native_json_array_on_the_wire_is_accepted() {
        let raw: RawEvidencias = serde_json::from_str(r#"["http://x/a.png", 7]"#).unwrap();
        assert_eq!(
            Evidencias::from_raw(Some(&raw)).into_urls(),
            vec!["http://x/a.png", "7"]
        );
    }
}
