//! Hand-off of an encoded record to a PDF417 symbol renderer.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    aamva::{self, AamvaRecord, EncodeError},
    validation::{ValidationOutcome, Validator},
};

/// Symbology requested from the renderer.
pub const FORMAT: &str = "PDF417";

/// PDF417 rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pdf417Options {
    /// Width of the narrowest bar, in pixels.
    pub module_width: u32,

    /// Row height, in module widths.
    pub row_height_ratio: u32,

    /// PDF417 error correction level (0 to 8).
    pub error_correction_level: u8,

    /// Light bars on a dark background.
    pub inverted: bool,

    pub flat: bool,
}

impl Default for Pdf417Options {
    fn default() -> Self {
        Self {
            module_width: 3,
            row_height_ratio: 1,
            error_correction_level: 5,
            inverted: true,
            flat: true,
        }
    }
}

/// PDF417 symbol renderer.
///
/// Implementations take care of the symbol encoding itself, the encoded
/// record is passed as is.
pub trait SymbolRenderer {
    type Image;
    type Error: std::error::Error;

    fn render(&self, text: &str, options: &Pdf417Options) -> Result<Self::Image, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError<E> {
    #[error("record is invalid ({} errors)", .0.errors.len())]
    Invalid(ValidationOutcome),

    #[error(transparent)]
    Encoding(EncodeError),

    #[error("rendering failed: {0}")]
    Rendering(E),
}

/// Encoded record and its symbol.
#[derive(Debug, Clone)]
pub struct Generated<I> {
    pub text: String,
    pub image: I,
}

/// Validates, encodes and renders `record`.
///
/// Nothing is encoded unless the record validates.
pub fn generate<R: SymbolRenderer>(
    record: &AamvaRecord,
    validator: &Validator,
    renderer: &R,
    options: &Pdf417Options,
) -> Result<Generated<R::Image>, GenerateError<R::Error>> {
    let outcome = validator.validate_record(record);
    if !outcome.is_valid {
        return Err(GenerateError::Invalid(outcome));
    }

    let text = aamva::encode(record).map_err(GenerateError::Encoding)?;
    debug!("rendering {} characters as {FORMAT}", text.chars().count());

    let image = renderer
        .render(&text, options)
        .map_err(GenerateError::Rendering)?;

    Ok(Generated { text, image })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::aamva::{FieldId, Sex};

    #[derive(Debug, thiserror::Error)]
    #[error("symbol too large")]
    struct TooLarge;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(String, Pdf417Options)>>,
        fail: bool,
    }

    impl SymbolRenderer for Recorder {
        type Image = usize;
        type Error = TooLarge;

        fn render(&self, text: &str, options: &Pdf417Options) -> Result<usize, TooLarge> {
            self.calls.borrow_mut().push((text.to_owned(), *options));
            if self.fail {
                Err(TooLarge)
            } else {
                Ok(text.len())
            }
        }
    }

    fn jane_doe() -> AamvaRecord {
        let mut record = AamvaRecord::new();
        for (field, value) in [
            (FieldId::FirstName, "Jane"),
            (FieldId::LastName, "Doe"),
            (FieldId::DateOfBirth, "05/20/1990"),
            (FieldId::EyeColor, "BLU"),
            (FieldId::HairColor, "BRO"),
            (FieldId::Height, "5'6\""),
            (FieldId::Weight, "140"),
            (FieldId::AddressStreet, "123 Main St"),
            (FieldId::AddressCity, "Sacramento"),
            (FieldId::AddressState, "CA"),
            (FieldId::AddressPostalCode, "95814"),
            (FieldId::UniqueId, "D1234567"),
            (FieldId::IssuingJurisdiction, "CA"),
            (FieldId::IssueDate, "01/15/2023"),
            (FieldId::ExpirationDate, "01/15/2028"),
        ] {
            record.set(field, value);
        }
        record.personal.gender = Some(Sex::F);
        record
    }

    #[test]
    fn default_options() {
        let options = Pdf417Options::default();
        assert_eq!(options.module_width, 3);
        assert_eq!(options.row_height_ratio, 1);
        assert_eq!(options.error_correction_level, 5);
        assert!(options.flat);
        assert!(options.inverted);
    }

    #[test]
    fn renders_encoded_text() {
        let renderer = Recorder::default();
        let record = jane_doe();
        let options = Pdf417Options::default();
        let generated = generate(
            &record,
            &Validator::with_current_year(2025),
            &renderer,
            &options,
        )
        .unwrap();

        assert_eq!(generated.text, aamva::encode(&record).unwrap());
        assert_eq!(generated.image, generated.text.len());
        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, options);
    }

    #[test]
    fn invalid_record_is_not_rendered() {
        let renderer = Recorder::default();
        let mut record = jane_doe();
        record.set(FieldId::FirstName, "");

        let err = generate(
            &record,
            &Validator::with_current_year(2025),
            &renderer,
            &Pdf417Options::default(),
        )
        .unwrap_err();

        match err {
            GenerateError::Invalid(outcome) => {
                assert!(outcome.error_for(FieldId::FirstName).is_some())
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn renderer_failure_is_reported() {
        let renderer = Recorder {
            fail: true,
            ..Default::default()
        };

        let err = generate(
            &jane_doe(),
            &Validator::with_current_year(2025),
            &renderer,
            &Pdf417Options::default(),
        )
        .unwrap_err();

        assert!(matches!(err, GenerateError::Rendering(TooLarge)));
    }
}
