//! Padding marks: telephone numbers the user flagged for special handling.
//!
//! The list lives in the general namespace as one JSON-encoded string
//! (`["10086","95555"]`).  Every mutation reads the whole blob, changes the
//! list in memory, and writes the whole blob back; there is no append path.
//!
//! [`PaddingMarks`] keeps the list ordered and duplicate-free.
//! [`JsonStringListCodec`] is the default [`StringListCodec`].

use crate::ports::StringListCodec;

/// Ordered list of padding-mark numbers with no duplicate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaddingMarks {
    numbers: Vec<String>,
}

impl PaddingMarks {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from decoded entries, dropping any repeated number.
    ///
    /// A blob written by another collaborator may contain duplicates; the
    /// first occurrence wins so the order stays stable.
    pub fn from_decoded(numbers: Vec<String>) -> Self {
        let mut marks = Self::new();
        for n in numbers {
            marks.insert(n);
        }
        marks
    }

    /// Appends `number` unless it is already present.
    ///
    /// Returns `true` when the list changed.
    pub fn insert(&mut self, number: impl Into<String>) -> bool {
        let number = number.into();
        if self.contains(&number) {
            return false;
        }
        self.numbers.push(number);
        true
    }

    /// Removes `number` if present.
    ///
    /// Returns `true` when the list changed.
    pub fn remove(&mut self, number: &str) -> bool {
        match self.numbers.iter().position(|n| n == number) {
            Some(idx) => {
                self.numbers.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, number: &str) -> bool {
        self.numbers.iter().any(|n| n == number)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.numbers
    }

    pub fn into_vec(self) -> Vec<String> {
        self.numbers
    }
}

/// `serde_json`-backed codec: a JSON array of strings, order preserving.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStringListCodec;

impl StringListCodec for JsonStringListCodec {
    fn encode(&self, list: &[String]) -> Result<String, serde_json::Error> {
        serde_json::to_string(list)
    }

    fn decode(&self, raw: &str) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_twice_keeps_single_entry() {
        // Arrange
        let mut marks = PaddingMarks::new();

        // Act
        let first = marks.insert("123");
        let second = marks.insert("123");

        // Assert
        assert!(first);
        assert!(!second);
        assert_eq!(marks.as_slice(), ["123".to_string()]);
    }

    #[test]
    fn test_remove_absent_number_is_noop() {
        let mut marks = PaddingMarks::from_decoded(vec!["1".into(), "2".into()]);
        assert!(!marks.remove("3"));
        assert_eq!(marks.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_entries() {
        let mut marks = PaddingMarks::from_decoded(vec!["1".into(), "2".into(), "3".into()]);
        assert!(marks.remove("2"));
        assert_eq!(marks.into_vec(), vec!["1".to_string(), "3".to_string()]);
    }

    #[test]
    fn test_from_decoded_drops_repeated_numbers() {
        let marks = PaddingMarks::from_decoded(vec!["9".into(), "8".into(), "9".into()]);
        assert_eq!(marks.into_vec(), vec!["9".to_string(), "8".to_string()]);
    }

    #[test]
    fn test_codec_round_trip_preserves_order() {
        // Arrange
        let codec = JsonStringListCodec;
        let list = vec!["95555".to_string(), "10086".to_string(), "+8613800000000".to_string()];

        // Act
        let encoded = codec.encode(&list).expect("encode");
        let decoded = codec.decode(&encoded).expect("decode");

        // Assert
        assert_eq!(decoded, list);
    }

    #[test]
    fn test_codec_encodes_empty_list_as_empty_array() {
        assert_eq!(JsonStringListCodec.encode(&[]).expect("encode"), "[]");
    }

    #[test]
    fn test_codec_rejects_foreign_format() {
        let codec = JsonStringListCodec;
        assert!(codec.decode("10086,95555").is_err());
        assert!(codec.decode(r#"{"a":1}"#).is_err());
        assert!(codec.decode("[1,2]").is_err());
    }
}
