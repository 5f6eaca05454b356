//! Human readable summary of a record, shown for review before encoding.
use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{aamva::AamvaRecord, date};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    entries: Vec<(String, String)>,
}

impl Preview {
    fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.entries.push((label.into(), value.into()))
    }

    fn push_non_empty(&mut self, label: &str, value: &str) {
        if !value.is_empty() {
            self.push(label, value)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

impl Serialize for Preview {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.entries.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        for (label, value) in &self.entries {
            writeln!(f, "{label:<width$}  {value}")?;
        }
        Ok(())
    }
}

/// Builds the review list of a record. Dates are shown normalized and empty
/// optional fields are left out.
pub fn to_preview(record: &AamvaRecord) -> Preview {
    let p = &record.personal;
    let d = &record.document;
    let mut preview = Preview::default();

    preview.push(
        "Document Type",
        d.document_type.map(|t| t.code()).unwrap_or_default(),
    );
    preview.push("Issuing Jurisdiction", d.issuing_jurisdiction.as_str());
    preview.push("AAMVA Version", record.version.as_str());
    preview.push("Document Number", p.unique_id.as_str());
    preview.push("Issue Date", date::normalize(&d.issue_date));
    preview.push("Expiration Date", date::normalize(&d.expiration_date));

    let name = format!("{}, {} {}", p.last_name, p.first_name, p.middle_name);
    preview.push("Name", name.trim());
    preview.push("Date of Birth", date::normalize(&p.date_of_birth));
    preview.push("Gender", p.gender.map(|s| s.code()).unwrap_or_default());

    preview.push("Address", p.address_street.as_str());
    preview.push("City", p.address_city.as_str());
    preview.push("State", p.address_state.as_str());
    preview.push("Postal Code", p.address_postal_code.as_str());
    preview.push("Country", d.country.as_str());

    preview.push("Eye Color", p.eye_color.as_str());
    preview.push("Hair Color", p.hair_color.as_str());
    preview.push("Height", p.height.as_str());
    preview.push("Weight", p.weight.as_str());

    preview.push_non_empty("Vehicle Class", &d.vehicle_classifications);
    preview.push_non_empty("Restriction Codes", &d.restriction_codes);
    preview.push_non_empty("Endorsement Codes", &d.endorsement_codes);

    for (key, value) in &record.optional {
        preview.push_non_empty(key, value);
    }

    preview
}
