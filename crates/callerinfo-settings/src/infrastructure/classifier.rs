//! Category name → type code lookup.
//!
//! Caller-ID lookups return a human-readable tag ("骚扰电话", "快递送餐"...).
//! Marking code stores those as integer type codes; this table does the
//! mapping.  Names not in the table map to the fallback code.

use std::collections::HashMap;

use callerinfo_core::CategoryClassifier;

/// Type code returned for names the table does not know.
pub const UNKNOWN_TYPE: i32 = -1;

/// Type code for harassing calls.
pub const TYPE_HARASSMENT: i32 = 0;
/// Type code for fraud calls.
pub const TYPE_FRAUD: i32 = 1;
/// Type code for advertising and sales calls.
pub const TYPE_ADVERTISING: i32 = 2;
/// Type code for parcel delivery couriers.
pub const TYPE_EXPRESS_DELIVERY: i32 = 3;
/// Type code for food delivery riders.
pub const TYPE_RESTAURANT_DELIVERY: i32 = 4;

/// A fixed name → code table.
#[derive(Debug, Clone)]
pub struct TableClassifier {
    table: HashMap<String, i32>,
    fallback: i32,
}

impl TableClassifier {
    pub fn new<K: Into<String>>(entries: impl IntoIterator<Item = (K, i32)>, fallback: i32) -> Self {
        Self {
            table: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            fallback,
        }
    }
}

impl Default for TableClassifier {
    /// The built-in caller-ID categories.
    fn default() -> Self {
        Self::new(
            [
                ("骚扰电话", TYPE_HARASSMENT),
                ("诈骗电话", TYPE_FRAUD),
                ("广告推销", TYPE_ADVERTISING),
                ("快递送餐", TYPE_EXPRESS_DELIVERY),
                ("外卖送餐", TYPE_RESTAURANT_DELIVERY),
            ],
            UNKNOWN_TYPE,
        )
    }
}

impl CategoryClassifier for TableClassifier {
    fn classify(&self, name: &str) -> i32 {
        self.table.get(name.trim()).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_maps_known_names() {
        let c = TableClassifier::default();
        assert_eq!(c.classify("骚扰电话"), TYPE_HARASSMENT);
        assert_eq!(c.classify(" 广告推销 "), TYPE_ADVERTISING);
    }

    #[test]
    fn test_unknown_name_maps_to_fallback() {
        let c = TableClassifier::new([("a", 7)], 99);
        assert_eq!(c.classify("b"), 99);
        assert_eq!(TableClassifier::default().classify("银行"), UNKNOWN_TYPE);
    }
}
