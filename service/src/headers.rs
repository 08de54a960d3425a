//! Request header extraction.

use axum::http::HeaderMap;
use serde::Serialize;

/// A single header as seen on the inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Lists every header on the request in the order the header map yields them.
///
/// A name carrying several values produces one entry per value. Values that
/// are not valid UTF-8 are decoded lossily.
#[must_use]
pub fn extract(headers: &HeaderMap) -> Vec<HeaderEntry> {
    headers
        .iter()
        .map(|(name, value)| HeaderEntry {
            name: name.as_str().to_owned(),
            value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{
        header::{ACCEPT, HOST, USER_AGENT},
        HeaderValue,
    };
    use proptest::prelude::*;

    #[test]
    fn empty_map_yields_no_entries() {
        assert!(extract(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("example.com"));
        headers.insert(USER_AGENT, HeaderValue::from_static("test"));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        assert_eq!(
            extract(&headers),
            vec![
                HeaderEntry::new("host", "example.com"),
                HeaderEntry::new("user-agent", "test"),
                HeaderEntry::new("accept", "*/*"),
            ]
        );
    }

    #[test]
    fn repeated_names_produce_one_entry_per_value() {
        let mut headers = HeaderMap::new();
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
        headers.insert(HOST, HeaderValue::from_static("example.com"));
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.2"));

        assert_eq!(
            extract(&headers),
            vec![
                HeaderEntry::new("x-forwarded-for", "10.0.0.1"),
                HeaderEntry::new("x-forwarded-for", "10.0.0.2"),
                HeaderEntry::new("host", "example.com"),
            ]
        );
    }

    #[test]
    fn non_utf8_values_are_decoded_lossily() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-raw",
            HeaderValue::from_bytes(b"caf\xe9").expect("obs-text is a valid header byte"),
        );

        let entries = extract(&headers);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, "caf\u{fffd}");
    }

    proptest! {
        #[test]
        fn extraction_matches_distinct_headers_in_order(
            pairs in proptest::collection::btree_map("x-[a-z]{1,12}", "[ -~]{0,24}", 0..16)
        ) {
            let mut headers = HeaderMap::new();
            for (name, value) in &pairs {
                headers.insert(
                    axum::http::HeaderName::from_bytes(name.as_bytes()).expect("valid name"),
                    HeaderValue::from_str(value).expect("visible ascii"),
                );
            }

            let entries = extract(&headers);
            prop_assert_eq!(entries.len(), pairs.len());
            for (entry, (name, value)) in entries.iter().zip(pairs.iter()) {
                prop_assert_eq!(&entry.name, name);
                prop_assert_eq!(&entry.value, value);
            }
        }
    }
}
