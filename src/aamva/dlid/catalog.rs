//! Field catalog: length limits and format rules of every driver license
//! data element.
use lazy_static::lazy_static;
use regex::Regex;

use super::DlElement;
use crate::aamva::reference::{CodeTable, EYE_COLORS, HAIR_COLORS};

#[derive(Debug)]
pub enum FieldRule {
    Pattern(Regex),

    /// Value must be a code of the table.
    Member(&'static CodeTable),
}

impl FieldRule {
    fn pattern(pattern: &str) -> Self {
        Self::Pattern(Regex::new(pattern).unwrap())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Pattern(regex) => regex.is_match(value),
            Self::Member(table) => table.contains(value),
        }
    }
}

#[derive(Debug)]
pub struct FieldSpec {
    pub element: DlElement,
    pub label: &'static str,
    pub max_length: usize,
    pub required: bool,
    pub rule: FieldRule,
}

impl FieldSpec {
    fn new(element: DlElement, label: &'static str, max_length: usize, rule: FieldRule) -> Self {
        Self {
            element,
            label,
            max_length,
            required: element.is_mandatory(),
            rule,
        }
    }

    pub fn code(&self) -> &'static str {
        self.element.string_id()
    }

    /// Checks the length limit and the format rule.
    pub fn accepts(&self, value: &str) -> bool {
        value.chars().count() <= self.max_length && self.rule.matches(value)
    }
}

lazy_static! {
    static ref CATALOG: [FieldSpec; DlElement::COUNT] = {
        use DlElement::*;
        use FieldRule as R;

        [
            FieldSpec::new(CustomerIdNumber, "Document Number", 25, R::pattern(r"^[A-Za-z0-9-]+$")),
            FieldSpec::new(CustomerFamilyName, "Last Name", 40, R::pattern(r"^[A-Za-z0-9,'-.]+$")),
            FieldSpec::new(CustomerFirstName, "First Name", 40, R::pattern(r"^[A-Za-z0-9,'-.]+$")),
            FieldSpec::new(CustomerMiddleName, "Middle Name", 40, R::pattern(r"^[A-Za-z0-9,'-.]*$")),
            FieldSpec::new(DateOfBirth, "Date of Birth", 8, R::pattern(r"^[0-9]{8}$")),
            FieldSpec::new(Sex, "Gender", 1, R::pattern(r"^[MFX1-9]$")),
            FieldSpec::new(DocumentIssueDate, "Document Issue Date", 8, R::pattern(r"^[0-9]{8}$")),
            FieldSpec::new(DocumentExpirationDate, "Document Expiration Date", 8, R::pattern(r"^[0-9]{8}$")),
            FieldSpec::new(AddressStreet1, "Street Address", 35, R::pattern(r"^[A-Za-z0-9,.'#\- ]+$")),
            FieldSpec::new(AddressCity, "City", 20, R::pattern(r"^[A-Za-z0-9,.'#\- ]+$")),
            FieldSpec::new(AddressJurisdictionCode, "State", 2, R::pattern(r"^[A-Z]{2}$")),
            FieldSpec::new(AddressPostalCode, "Postal Code", 11, R::pattern(r"^[0-9]{5}(-[0-9]{4})?$")),
            FieldSpec::new(EyeColor, "Eye Color", 3, R::Member(&*EYE_COLORS)),
            FieldSpec::new(HairColor, "Hair Color", 3, R::Member(&*HAIR_COLORS)),
            FieldSpec::new(Height, "Height", 6, R::pattern(r"^[0-9]{3}(cm|in)$")),
            FieldSpec::new(VehicleClass, "Vehicle Class", 4, R::pattern(r"^[A-Z0-9]{1,4}$")),
            FieldSpec::new(RestrictionCodes, "Restrictions", 10, R::pattern(r"^[A-Z0-9]{0,10}$")),
            FieldSpec::new(EndorsementCodes, "Endorsements", 5, R::pattern(r"^[A-Z0-9]{0,5}$")),
        ]
    };
}

/// Catalog entry of an element.
pub fn spec(element: DlElement) -> &'static FieldSpec {
    &CATALOG[element as usize]
}

/// Catalog entry of an element identifier such as `"DCS"`.
pub fn lookup(code: &str) -> Option<&'static FieldSpec> {
    let id: &[u8; 3] = code.as_bytes().try_into().ok()?;
    DlElement::from_id(id).map(spec)
}

/// Every catalog entry, in subfile order.
pub fn iter() -> impl Iterator<Item = &'static FieldSpec> {
    CATALOG.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_follows_element_order() {
        for (spec, element) in iter().zip(DlElement::LIST) {
            assert_eq!(spec.element, element);
        }
        assert_eq!(iter().count(), DlElement::COUNT);
    }

    #[test]
    fn lookup_by_code() {
        let spec = lookup("DCS").unwrap();
        assert_eq!(spec.label, "Last Name");
        assert_eq!(spec.max_length, 40);
        assert!(spec.required);

        let spec = lookup("DCA").unwrap();
        assert!(!spec.required);

        assert!(lookup("ZYZ").is_none());
        assert!(lookup("DC").is_none());
        assert!(lookup("DCSX").is_none());
    }

    #[test]
    fn rules() {
        assert!(spec(DlElement::Height).accepts("065in"));
        assert!(!spec(DlElement::Height).accepts("65in"));
        assert!(spec(DlElement::AddressPostalCode).accepts("90210-1234"));
        assert!(!spec(DlElement::AddressPostalCode).accepts("9021"));
        assert!(spec(DlElement::EyeColor).accepts("BLU"));
        assert!(!spec(DlElement::EyeColor).accepts("BAL"));
        assert!(spec(DlElement::HairColor).accepts("BAL"));
        assert!(spec(DlElement::CustomerFamilyName).accepts("O'Brien-Smith"));
        assert!(!spec(DlElement::CustomerFamilyName).accepts("Van Damme"));
        assert!(spec(DlElement::AddressStreet1).accepts("1 Main St #4"));
    }

    #[test]
    fn name_punctuation_spans_apostrophe_to_period() {
        let name = spec(DlElement::CustomerFirstName);
        for value in ["O'Neil", "Mary-Jo", "St.", "Doe(Jr)", "A*B", "A+B", "Smith,Jr"] {
            assert!(name.accepts(value), "{value}");
        }
        for value in ["A/B", "A&B", "A_B", "A B"] {
            assert!(!name.accepts(value), "{value}");
        }
        assert!(spec(DlElement::CustomerMiddleName).accepts(""));
    }

    #[test]
    fn length_limit_applies_on_top_of_rule() {
        let name = "A".repeat(41);
        assert!(spec(DlElement::CustomerFamilyName).rule.matches(&name));
        assert!(!spec(DlElement::CustomerFamilyName).accepts(&name));
        assert!(spec(DlElement::CustomerFamilyName).accepts(&name[..40]));
    }
}
