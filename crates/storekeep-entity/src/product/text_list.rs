//! Codec for string lists stored in serialized TEXT columns.
//!
//! Empty or unparseable storage decodes to an empty vector; encoding
//! never fails (a non-serializable vector falls back to `"[]"`).

/// Decode a stored text column into a list of strings.
pub fn decode_text_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

/// Encode a list of strings for storage in a text column.
pub fn encode_text_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let colors = vec!["red".to_string(), "blue".to_string()];
        let encoded = encode_text_list(&colors);
        assert_eq!(decode_text_list(&encoded), colors);
    }

    #[test]
    fn test_empty_storage_decodes_empty() {
        assert!(decode_text_list("").is_empty());
        assert!(decode_text_list("   ").is_empty());
        assert!(decode_text_list("[]").is_empty());
    }

    #[test]
    fn test_garbage_decodes_empty() {
        assert!(decode_text_list("not json").is_empty());
        assert!(decode_text_list("{\"a\":1}").is_empty());
        assert!(decode_text_list("[1, 2, 3]").is_empty());
    }

    #[test]
    fn test_empty_list_encodes_brackets() {
        assert_eq!(encode_text_list(&[]), "[]");
    }
}
