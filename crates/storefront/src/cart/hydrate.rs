//! Decoding persisted cart state.
//!
//! Persisted data is untrusted: another tab, an older release or a user
//! poking at storage may have left anything under the cart key. Decoding
//! never fails. Whatever cannot be used is dropped and reported as a
//! [`HydrationWarning`].

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use shopverse_core::{CartLine, ProductId};

use super::lines::Cart;

/// Something that was discarded while loading persisted state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HydrationWarning {
    /// The durable store could not be read.
    #[error("stored cart could not be read: {0}")]
    Unreadable(String),

    /// The stored value is not valid JSON.
    #[error("stored cart is not valid JSON: {0}")]
    Corrupt(String),

    /// The stored value is valid JSON but not an array.
    #[error("stored cart is a JSON {0}, expected an array")]
    NotAnArray(&'static str),

    /// An array element is not a valid cart line.
    #[error("dropped malformed line at index {index}: {reason}")]
    MalformedLine { index: usize, reason: String },

    /// An array element repeats the id of an earlier line.
    #[error("dropped duplicate line for product {id} at index {index}")]
    DuplicateLine { index: usize, id: ProductId },
}

/// Result of decoding a persisted cart.
#[derive(Debug, Clone, Default)]
pub struct Hydrated {
    pub cart: Cart,
    pub warnings: Vec<HydrationWarning>,
}

/// Decode the stored value of the cart key.
///
/// - Invalid JSON or a non-array value yields an empty cart.
/// - Array elements that are not valid cart lines are dropped.
/// - Lines repeating an earlier id are dropped; the first occurrence wins.
#[must_use]
pub fn decode_persisted(raw: &str) -> Hydrated {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            return Hydrated {
                cart: Cart::new(),
                warnings: vec![HydrationWarning::Corrupt(e.to_string())],
            };
        }
    };

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Hydrated {
                cart: Cart::new(),
                warnings: vec![HydrationWarning::NotAnArray(json_kind(&other))],
            };
        }
    };

    let mut warnings = Vec::new();
    let mut seen = HashSet::with_capacity(elements.len());
    let mut lines = Vec::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<CartLine>(element) {
            Ok(line) if seen.contains(line.id()) => {
                warnings.push(HydrationWarning::DuplicateLine {
                    index,
                    id: line.id().clone(),
                });
            }
            Ok(line) => {
                seen.insert(line.id().clone());
                lines.push(line);
            }
            Err(e) => warnings.push(HydrationWarning::MalformedLine {
                index,
                reason: e.to_string(),
            }),
        }
    }

    Hydrated {
        cart: Cart::from_unique_lines(lines),
        warnings,
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str =
        r#"{"id":"1","name":"Sample Product","price":29.99,"image":"/sample.jpg","quantity":1}"#;

    #[test]
    fn empty_array_is_empty_cart() {
        let hydrated = decode_persisted("[]");
        assert!(hydrated.cart.is_empty());
        assert!(hydrated.warnings.is_empty());
    }

    #[test]
    fn valid_array_is_taken_verbatim() {
        let raw = format!(
            r#"[{SAMPLE},{{"id":"2","name":"Other","price":5,"image":"/o.jpg","quantity":4}}]"#
        );
        let hydrated = decode_persisted(&raw);

        assert!(hydrated.warnings.is_empty());
        let ids: Vec<&str> = hydrated.cart.iter().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(hydrated.cart.lines()[1].quantity().get(), 4);
    }

    #[test]
    fn invalid_json_is_corrupt() {
        let hydrated = decode_persisted("{not json");
        assert!(hydrated.cart.is_empty());
        assert!(matches!(
            hydrated.warnings.as_slice(),
            [HydrationWarning::Corrupt(_)]
        ));
    }

    #[test]
    fn non_array_values_are_rejected() {
        for (raw, kind) in [
            (r#"{"id":"1"}"#, "object"),
            ("\"cart\"", "string"),
            ("42", "number"),
            ("null", "null"),
            ("true", "boolean"),
        ] {
            let hydrated = decode_persisted(raw);
            assert!(hydrated.cart.is_empty());
            assert_eq!(hydrated.warnings, vec![HydrationWarning::NotAnArray(kind)]);
        }
    }

    #[test]
    fn malformed_lines_are_dropped() {
        let raw = format!(
            r#"[{SAMPLE},{{"id":"2","name":"Bad","price":-1,"image":"","quantity":1}},{{"id":"3"}},7]"#
        );
        let hydrated = decode_persisted(&raw);

        assert_eq!(hydrated.cart.len(), 1);
        let indexes: Vec<usize> = hydrated
            .warnings
            .iter()
            .map(|w| match w {
                HydrationWarning::MalformedLine { index, .. } => *index,
                other => panic!("unexpected warning {other:?}"),
            })
            .collect();
        assert_eq!(indexes, [1, 2, 3]);
    }

    #[test]
    fn zero_quantity_line_is_dropped() {
        let raw = r#"[{"id":"1","name":"A","price":1,"image":"","quantity":0}]"#;
        let hydrated = decode_persisted(raw);
        assert!(hydrated.cart.is_empty());
        assert_eq!(hydrated.warnings.len(), 1);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let raw = format!(
            r#"[{SAMPLE},{{"id":"1","name":"Again","price":1,"image":"","quantity":9}}]"#
        );
        let hydrated = decode_persisted(&raw);

        assert_eq!(hydrated.cart.len(), 1);
        assert_eq!(hydrated.cart.lines()[0].name(), "Sample Product");
        assert!(matches!(
            hydrated.warnings.as_slice(),
            [HydrationWarning::DuplicateLine { index: 1, .. }]
        ));
    }

    #[test]
    fn warnings_display() {
        let warning = HydrationWarning::NotAnArray("object");
        assert_eq!(
            warning.to_string(),
            "stored cart is a JSON object, expected an array"
        );
        assert_eq!(
            HydrationWarning::MalformedLine {
                index: 2,
                reason: "missing field `id`".to_string(),
            }
            .to_string(),
            "dropped malformed line at index 2: missing field `id`"
        );
    }
}
