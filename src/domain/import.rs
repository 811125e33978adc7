//! Import payload validation and cleaning

use crate::domain::quote::Quote;
use crate::error::{QuothError, Result};
use serde_json::Value;

/// Parse raw import text into a cleaned list of quotes.
///
/// The payload must be a JSON array. Each element is kept only when it is
/// an object with string `text` and `category` fields that are non-empty
/// after trimming; everything else is silently skipped. The whole import
/// is rejected when the payload is not an array or when no valid entries
/// survive cleaning, so a failed import never partially applies.
pub fn parse_import(raw: &str) -> Result<Vec<Quote>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| QuothError::InvalidImport(format!("not valid JSON ({})", e)))?;

    let items = value.as_array().ok_or_else(|| {
        QuothError::InvalidImport("expected a JSON array of quote objects".to_string())
    })?;

    let mut cleaned = Vec::new();
    for item in items {
        let text = item.get("text").and_then(Value::as_str);
        let category = item.get("category").and_then(Value::as_str);

        if let (Some(text), Some(category)) = (text, category) {
            if let Some(quote) = Quote::new(text, category) {
                cleaned.push(quote);
            }
        }
    }

    if cleaned.is_empty() {
        return Err(QuothError::InvalidImport(
            "no valid quotes found".to_string(),
        ));
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_array() {
        let raw = r#"[
            {"text": "a", "category": "b"},
            {"text": "c", "category": "d"}
        ]"#;
        let quotes = parse_import(raw).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0], Quote::new("a", "b").unwrap());
        assert_eq!(quotes[1], Quote::new("c", "d").unwrap());
    }

    #[test]
    fn test_trims_fields() {
        let raw = r#"[{"text": "  a  ", "category": " b "}]"#;
        let quotes = parse_import(raw).unwrap();
        assert_eq!(quotes[0], Quote::new("a", "b").unwrap());
    }

    #[test]
    fn test_skips_invalid_entries() {
        let raw = r#"[
            {"text": "a", "category": "b"},
            {"text": 42, "category": "b"},
            {"text": "missing category"},
            {"text": "  ", "category": "blank text"},
            "not an object",
            null
        ]"#;
        let quotes = parse_import(raw).unwrap();
        assert_eq!(quotes.len(), 1);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let raw = r#"[{"text": "a", "category": "b", "author": "anon"}]"#;
        let quotes = parse_import(raw).unwrap();
        assert_eq!(quotes[0], Quote::new("a", "b").unwrap());
    }

    #[test]
    fn test_rejects_non_array() {
        let result = parse_import(r#"{"x": 1}"#);
        assert!(matches!(result, Err(QuothError::InvalidImport(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = parse_import("not json at all");
        assert!(matches!(result, Err(QuothError::InvalidImport(_))));
    }

    #[test]
    fn test_rejects_when_nothing_survives() {
        let result = parse_import(r#"[{"text": "", "category": ""}]"#);
        assert!(matches!(result, Err(QuothError::InvalidImport(_))));

        let result = parse_import("[]");
        assert!(matches!(result, Err(QuothError::InvalidImport(_))));
    }
}
