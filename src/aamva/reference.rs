//! Reference code tables offered by select fields.
use std::{collections::HashMap, io::Cursor};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub code: String,
    pub name: String,
}

/// Static `code → name` table, in display order.
#[derive(Debug)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
    index: HashMap<String, usize>,
}

impl CodeTable {
    fn from_csv(data: &str) -> Result<Self, csv::Error> {
        let mut reader = csv::Reader::from_reader(Cursor::new(data));
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for result in reader.deserialize() {
            let entry: CodeEntry = result?;
            index.insert(entry.code.clone(), entries.len());
            entries.push(entry);
        }

        Ok(Self { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&i| self.entries[i].name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeEntry> {
        self.entries.iter()
    }
}

lazy_static! {
    /// U.S. states, the District of Columbia and Canadian provinces and
    /// territories.
    pub static ref JURISDICTIONS: CodeTable =
        CodeTable::from_csv(include_str!("reference/jurisdictions.csv")).unwrap();

    pub static ref EYE_COLORS: CodeTable =
        CodeTable::from_csv(include_str!("reference/eye_colors.csv")).unwrap();

    pub static ref HAIR_COLORS: CodeTable =
        CodeTable::from_csv(include_str!("reference/hair_colors.csv")).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_load() {
        assert_eq!(JURISDICTIONS.len(), 64);
        assert_eq!(EYE_COLORS.len(), 10);
        assert_eq!(HAIR_COLORS.len(), 9);
    }

    #[test]
    fn lookup() {
        assert_eq!(JURISDICTIONS.name("CA"), Some("California"));
        assert_eq!(JURISDICTIONS.name("NL"), Some("Newfoundland and Labrador"));
        assert_eq!(HAIR_COLORS.name("RED"), Some("Red/Auburn"));
        assert!(EYE_COLORS.contains("DIC"));
        assert!(!EYE_COLORS.contains("BAL"));
        assert!(!JURISDICTIONS.contains("ca"));
    }

    #[test]
    fn display_order_is_kept() {
        let first: Vec<_> = JURISDICTIONS.iter().take(3).map(|e| e.code.as_str()).collect();
        assert_eq!(first, ["AL", "AK", "AZ"]);
    }
}
