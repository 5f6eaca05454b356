//! Record validation.
//!
//! Validation never fails: problems are collected as [`ValidationError`]s,
//! in a fixed order, and returned as data so the caller can decide whether
//! to proceed with [`encode`](crate::aamva::encode).
use chrono::{Datelike, Local};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    aamva::{
        dlid::{catalog, DlElement},
        AamvaRecord, DocumentType, FieldId, Sex,
    },
    date,
};

/// Fields checked by [`Validator::validate_record`], in reporting order.
pub const RECORD_CHECKS: [FieldId; 18] = [
    FieldId::DocumentType,
    FieldId::IssuingJurisdiction,
    FieldId::IssueDate,
    FieldId::ExpirationDate,
    FieldId::FirstName,
    FieldId::LastName,
    FieldId::MiddleName,
    FieldId::DateOfBirth,
    FieldId::Gender,
    FieldId::AddressStreet,
    FieldId::AddressCity,
    FieldId::AddressState,
    FieldId::AddressPostalCode,
    FieldId::EyeColor,
    FieldId::HairColor,
    FieldId::Height,
    FieldId::Weight,
    FieldId::UniqueId,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: FieldId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// First error to surface, if any.
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Record validator.
///
/// Date checks depend on the current year, read from the local clock unless
/// fixed with [`Validator::with_current_year`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    current_year: Option<i32>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_current_year(year: i32) -> Self {
        Self {
            current_year: Some(year),
        }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }

    /// Validates a single field value, returning the error message if it is
    /// invalid.
    ///
    /// This is the rule applied to the field by
    /// [`validate_record`](Self::validate_record). Fields the record check
    /// does not cover are always valid.
    pub fn validate_field(&self, field: FieldId, value: &str) -> Option<String> {
        let len = value.chars().count();
        let limit = |element: DlElement| catalog::spec(element).max_length;

        let message = match field {
            FieldId::DocumentType if value.parse::<DocumentType>().is_err() => {
                "Document type must be DL (Driver License) or ID (Identification Card)".to_owned()
            }
            FieldId::IssuingJurisdiction if len != 2 => {
                "Issuing jurisdiction must be a valid 2-character code".to_owned()
            }
            FieldId::IssueDate | FieldId::ExpirationDate | FieldId::DateOfBirth
                if !date::is_valid_date(value, self.current_year()) =>
            {
                let name = match field {
                    FieldId::IssueDate => "Issue date",
                    FieldId::ExpirationDate => "Expiration date",
                    _ => "Date of birth",
                };
                format!("{name} must be in format MM/DD/YYYY")
            }
            FieldId::FirstName if len == 0 || len > limit(DlElement::CustomerFirstName) => format!(
                "First name is required and must be {} characters or less",
                limit(DlElement::CustomerFirstName)
            ),
            FieldId::LastName if len == 0 || len > limit(DlElement::CustomerFamilyName) => format!(
                "Last name is required and must be {} characters or less",
                limit(DlElement::CustomerFamilyName)
            ),
            FieldId::MiddleName if len > limit(DlElement::CustomerMiddleName) => format!(
                "Middle name must be {} characters or less",
                limit(DlElement::CustomerMiddleName)
            ),
            FieldId::Gender if value.parse::<Sex>().is_err() => {
                "Gender must be M (Male), F (Female), or X (Non-binary)".to_owned()
            }
            FieldId::AddressStreet if len == 0 || len > limit(DlElement::AddressStreet1) => {
                format!(
                    "Street address is required and must be {} characters or less",
                    limit(DlElement::AddressStreet1)
                )
            }
            FieldId::AddressCity if len == 0 || len > limit(DlElement::AddressCity) => format!(
                "City is required and must be {} characters or less",
                limit(DlElement::AddressCity)
            ),
            FieldId::AddressState if len != 2 => {
                "State must be a valid 2-character code".to_owned()
            }
            FieldId::AddressPostalCode
                if !catalog::spec(DlElement::AddressPostalCode)
                    .rule
                    .matches(value) =>
            {
                "Postal code must be in format 12345 or 12345-6789".to_owned()
            }
            FieldId::EyeColor if value.is_empty() => "Eye color is required".to_owned(),
            FieldId::HairColor if value.is_empty() => "Hair color is required".to_owned(),
            FieldId::Height if value.is_empty() => "Height is required".to_owned(),
            FieldId::Weight if value.is_empty() => "Weight is required".to_owned(),
            FieldId::UniqueId if value.is_empty() => {
                "Document number/unique ID is required".to_owned()
            }
            _ => return None,
        };

        Some(message)
    }

    /// Runs every record check and collects the failures.
    pub fn validate_record(&self, record: &AamvaRecord) -> ValidationOutcome {
        let errors: Vec<_> = RECORD_CHECKS
            .into_iter()
            .filter_map(|field| {
                self.validate_field(field, &record.get(field))
                    .map(|message| ValidationError { field, message })
            })
            .collect();

        debug!("record validation: {} error(s)", errors.len());
        ValidationOutcome::from_errors(errors)
    }

    /// Checks every element value that would be encoded against its catalog
    /// length limit and format rule.
    ///
    /// Empty elements are skipped; they are reported by
    /// [`validate_record`](Self::validate_record) when mandatory.
    pub fn check_elements(&self, record: &AamvaRecord) -> ValidationOutcome {
        let mut errors = Vec::new();

        for spec in catalog::iter() {
            let value = spec.element.value_of(record);
            if !value.is_empty() && !spec.accepts(&value) {
                errors.push(ValidationError {
                    field: spec.element.field(),
                    message: format!(
                        "{} `{value}` does not fit data element {} (at most {} characters)",
                        spec.label,
                        spec.code(),
                        spec.max_length
                    ),
                });
            }
        }

        debug!("element conformance: {} error(s)", errors.len());
        ValidationOutcome::from_errors(errors)
    }
}

/// Validates a record against the clock's current year.
pub fn validate_record(record: &AamvaRecord) -> ValidationOutcome {
    Validator::new().validate_record(record)
}

/// Validates a single field value against the clock's current year.
pub fn validate_field(field: FieldId, value: &str) -> Option<String> {
    Validator::new().validate_field(field, value)
}

pub fn check_elements(record: &AamvaRecord) -> ValidationOutcome {
    Validator::new().check_elements(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Validator {
        Validator::with_current_year(2025)
    }

    #[test]
    fn blank_record_reports_every_missing_field_in_order() {
        let outcome = validator().validate_record(&AamvaRecord::new());
        assert!(!outcome.is_valid);

        let fields: Vec<_> = outcome.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                FieldId::IssuingJurisdiction,
                FieldId::IssueDate,
                FieldId::ExpirationDate,
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::DateOfBirth,
                FieldId::AddressStreet,
                FieldId::AddressCity,
                FieldId::AddressState,
                FieldId::AddressPostalCode,
                FieldId::EyeColor,
                FieldId::HairColor,
                FieldId::Height,
                FieldId::Weight,
                FieldId::UniqueId,
            ]
        );
        assert_eq!(outcome.first().unwrap().field, FieldId::IssuingJurisdiction);
    }

    #[test]
    fn unset_enumerations_are_reported() {
        let mut record = AamvaRecord::new();
        record.document.document_type = None;
        record.personal.gender = None;

        let outcome = validator().validate_record(&record);
        assert_eq!(outcome.errors[0].field, FieldId::DocumentType);
        assert!(outcome.error_for(FieldId::Gender).is_some());
    }

    #[test]
    fn field_messages() {
        let v = validator();
        assert_eq!(
            v.validate_field(FieldId::IssueDate, "13/01/2020").as_deref(),
            Some("Issue date must be in format MM/DD/YYYY")
        );
        assert_eq!(
            v.validate_field(FieldId::DateOfBirth, "").as_deref(),
            Some("Date of birth must be in format MM/DD/YYYY")
        );
        assert_eq!(
            v.validate_field(FieldId::AddressStreet, "").as_deref(),
            Some("Street address is required and must be 35 characters or less")
        );
        assert_eq!(v.validate_field(FieldId::Gender, "X"), None);
        assert!(v.validate_field(FieldId::Gender, "m").is_some());
        assert!(v.validate_field(FieldId::DocumentType, "DX").is_some());
        assert_eq!(v.validate_field(FieldId::DocumentType, "ID"), None);
    }

    #[test]
    fn postal_codes() {
        let v = validator();
        assert_eq!(v.validate_field(FieldId::AddressPostalCode, "90210"), None);
        assert_eq!(v.validate_field(FieldId::AddressPostalCode, "90210-1234"), None);
        assert!(v.validate_field(FieldId::AddressPostalCode, "9021").is_some());
        assert!(v.validate_field(FieldId::AddressPostalCode, "90210-12").is_some());
        assert!(v.validate_field(FieldId::AddressPostalCode, "").is_some());
    }

    #[test]
    fn length_limits() {
        let v = validator();
        assert!(v.validate_field(FieldId::AddressCity, &"a".repeat(20)).is_none());
        assert!(v.validate_field(FieldId::AddressCity, &"a".repeat(21)).is_some());
        assert!(v.validate_field(FieldId::MiddleName, "").is_none());
        assert!(v.validate_field(FieldId::MiddleName, &"a".repeat(41)).is_some());
        assert!(v.validate_field(FieldId::IssuingJurisdiction, "CAL").is_some());
    }

    #[test]
    fn unchecked_fields_are_always_valid() {
        let v = validator();
        for field in [
            FieldId::Country,
            FieldId::DocumentCountry,
            FieldId::VehicleClassifications,
            FieldId::RestrictionCodes,
            FieldId::EndorsementCodes,
        ] {
            assert!(!RECORD_CHECKS.contains(&field));
            assert_eq!(v.validate_field(field, ""), None);
        }
    }

    #[test]
    fn record_and_field_checks_agree() {
        let v = validator();
        let mut record = AamvaRecord::new();
        record.set(FieldId::LastName, "x".repeat(41));
        record.set(FieldId::IssueDate, "02/29/1900");
        record.set(FieldId::AddressPostalCode, "ABCDE");

        let outcome = v.validate_record(&record);
        for field in RECORD_CHECKS {
            assert_eq!(
                outcome.error_for(field).map(str::to_owned),
                v.validate_field(field, &record.get(field)),
                "{field}"
            );
        }
    }

    #[test]
    fn element_check_flags_catalog_violations() {
        let mut record = AamvaRecord::new();
        record.set(FieldId::Height, "5ft10");
        record.set(FieldId::EyeColor, "PUR");
        record.set(FieldId::LastName, "Doe");
        record.set(FieldId::VehicleClassifications, "ABCDE");

        let outcome = validator().check_elements(&record);
        let fields: Vec<_> = outcome.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [
                FieldId::EyeColor,
                FieldId::Height,
                FieldId::VehicleClassifications
            ]
        );
    }
}
