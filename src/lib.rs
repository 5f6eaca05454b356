//! This library encodes driver license and identification card records in the
//! [AAMVA DL/ID Card Design Standard][aamva] text layout carried by PDF417
//! barcodes, and validates them before encoding.
//!
//! [aamva]: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
//!
//! The `dlid` binary wraps the library for JSON records.
pub mod aamva;
pub mod date;
pub mod preview;
pub mod render;
pub mod validation;

pub use aamva::{encode, AamvaRecord, AamvaVersion, DocumentType, EncodeError, FieldId, Sex};
pub use preview::{to_preview, Preview};
pub use render::{generate, Pdf417Options, SymbolRenderer};
pub use validation::{
    check_elements, validate_field, validate_record, ValidationError, ValidationOutcome, Validator,
};
