//! Core record type shared by the handler and the store.

use serde::{Deserialize, Serialize};

/// A stored word/type pair.
///
/// Serialized field order is `spelling` then `type`, which is also the wire
/// order on lookup responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The word form, stored exactly as submitted.
    pub spelling: String,

    /// Grammatical category label (e.g. "noun", "verb"). Free-form.
    #[serde(rename = "type")]
    pub word_type: String,
}

impl Record {
    pub fn new(spelling: impl Into<String>, word_type: impl Into<String>) -> Self {
        Self {
            spelling: spelling.into(),
            word_type: word_type.into(),
        }
    }

    /// A record is well-formed only if both fields are non-empty.
    pub fn is_well_formed(&self) -> bool {
        !self.spelling.is_empty() && !self.word_type.is_empty()
    }

    /// Case-insensitive spelling match. Both sides are lowercased before the
    /// equality check; the stored casing is never altered.
    pub fn matches_spelling(&self, word: &str) -> bool {
        self.spelling.to_lowercase() == word.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_type_key() {
        let record = Record::new("run", "verb");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"spelling":"run","type":"verb"}"#);

        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_well_formedness() {
        assert!(Record::new("cat", "noun").is_well_formed());
        assert!(!Record::new("", "noun").is_well_formed());
        assert!(!Record::new("cat", "").is_well_formed());
    }

    #[test]
    fn test_spelling_match_ignores_case() {
        let record = Record::new("Cat", "noun");
        assert!(record.matches_spelling("cat"));
        assert!(record.matches_spelling("CAT"));
        assert!(!record.matches_spelling("cats"));
    }
}
