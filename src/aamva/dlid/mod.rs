//! AAMVA DL/ID Card Design Standard.
//!
//! See: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
mod macros;
pub(crate) use macros::*;

pub mod catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Mandatory,
    Optional,
}

#[derive(Debug, thiserror::Error)]
#[error("missing data element `{0}`")]
pub struct MissingDataElement<T>(pub T);

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    MissingDataElement(#[from] MissingDataElement<DlElement>),

    #[error("missing {0}")]
    MissingHeaderField(&'static str),

    #[error("missing country identification (`{}`)", pdf_417::COUNTRY_ELEMENT)]
    MissingCountry,

    #[error("invalid date `{value}` for data element `{element}`")]
    InvalidDate { element: DlElement, value: String },
}

mod dl;
pub use dl::*;

pub mod pdf_417;
pub use pdf_417::FileBuilder;
