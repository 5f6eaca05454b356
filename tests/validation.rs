mod common;
use common::*;
use dlid_barcodes::{preview::to_preview, FieldId, ValidationOutcome, Validator};
use pretty_assertions::assert_eq;

fn validator() -> Validator {
    Validator::with_current_year(2025)
}

fn fields(outcome: &ValidationOutcome) -> Vec<FieldId> {
    outcome.errors.iter().map(|e| e.field).collect()
}

#[test]
fn jane_doe_is_valid() {
    let record = load_record("tests/dlid/jane_doe.json");
    let outcome = validator().validate_record(&record);
    assert_eq!(outcome, ValidationOutcome::from_errors(Vec::new()));
    assert!(validator().check_elements(&record).is_valid);
}

#[test]
fn identification_card_is_valid() {
    let record = load_record("tests/dlid/id_card_v10.json");
    assert!(validator().validate_record(&record).is_valid);
    assert!(validator().check_elements(&record).is_valid);
}

#[test]
fn every_missing_field_is_reported() {
    let mut record = load_record("tests/dlid/jane_doe.json");
    record.set(FieldId::FirstName, "");
    record.set(FieldId::AddressCity, "");

    let outcome = validator().validate_record(&record);
    assert!(!outcome.is_valid);
    assert_eq!(fields(&outcome), [FieldId::FirstName, FieldId::AddressCity]);
    assert_eq!(
        outcome.error_for(FieldId::AddressCity),
        Some("City is required and must be 20 characters or less")
    );
}

#[test]
fn last_name_length_boundary() {
    let mut record = load_record("tests/dlid/jane_doe.json");

    record.set(FieldId::LastName, "D".repeat(40));
    assert!(validator().validate_record(&record).is_valid);

    record.set(FieldId::LastName, "D".repeat(41));
    let outcome = validator().validate_record(&record);
    assert_eq!(fields(&outcome), [FieldId::LastName]);
}

#[test]
fn leap_day_boundaries() {
    let mut record = load_record("tests/dlid/jane_doe.json");

    for (date, valid) in [("02/29/2000", true), ("02/29/1900", false), ("02/29/2024", true)] {
        record.set(FieldId::DateOfBirth, date);
        let outcome = validator().validate_record(&record);
        assert_eq!(outcome.is_valid, valid, "{date}");
        if !valid {
            assert_eq!(
                outcome.error_for(FieldId::DateOfBirth),
                Some("Date of birth must be in format MM/DD/YYYY")
            );
        }
    }
}

#[test]
fn unknown_codes_are_reported_by_field() {
    let record = load_record("tests/dlid/unknown_codes.json");
    assert_eq!(record.personal.gender, None);
    assert_eq!(record.document.document_type, None);

    let outcome = validator().validate_record(&record);
    assert_eq!(fields(&outcome), [FieldId::DocumentType, FieldId::Gender]);
    assert_eq!(
        outcome.error_for(FieldId::Gender),
        Some("Gender must be M (Male), F (Female), or X (Non-binary)")
    );
}

#[test]
fn preview_of_fixture() {
    let preview = to_preview(&load_record("tests/dlid/id_card_v10.json"));
    assert_eq!(preview.get("Name"), Some("Tremblay, Pierre Luc"));
    assert_eq!(preview.get("AAMVA Version"), Some("10"));
    assert_eq!(preview.get("Date of Birth"), Some("11021985"));
    assert_eq!(preview.get("Country"), Some("CAN"));
    assert_eq!(preview.get("Vehicle Class"), Some("G"));
    assert_eq!(preview.get("Organ Donor"), Some("Y"));
}
