//! Form fields of an [`AamvaRecord`](super::AamvaRecord).
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    dlid::DlElement,
    reference::{CodeTable, EYE_COLORS, HAIR_COLORS, JURISDICTIONS},
    UnknownCode,
};

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FreeText,
    Date,
    JurisdictionSelect,
    DocumentTypeChoice,
    SexChoice,
    ColorSelect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Document,
    Personal,
    Physical,
    Address,
}

impl FieldGroup {
    pub const LIST: [Self; 4] = [Self::Document, Self::Personal, Self::Physical, Self::Address];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Document => "Document Information",
            Self::Personal => "Personal Information",
            Self::Physical => "Physical Characteristics",
            Self::Address => "Address Information",
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        FieldId::LIST.into_iter().filter(move |f| f.group() == *self)
    }
}

macro_rules! field_ids {
    ($($(#[$meta:meta])* $id:ident : $name:literal),*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum FieldId {
            $($(#[$meta])* #[serde(rename = $name)] $id),*
        }

        impl FieldId {
            pub const LIST: [Self; 23] = [$(Self::$id),*];

            /// Stable identifier, as used by form inputs.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$id => $name),*
                }
            }
        }

        impl FromStr for FieldId {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$id),)*
                    _ => Err(UnknownCode {
                        kind: "field",
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

field_ids! {
    DocumentType: "documentType",
    IssuingJurisdiction: "issuingJurisdiction",

    /// Document number.
    UniqueId: "uniqueId",
    IssueDate: "issueDate",
    ExpirationDate: "expirationDate",
    VehicleClassifications: "vehicleClassifications",
    RestrictionCodes: "restrictionCodes",
    EndorsementCodes: "endorsementCodes",

    /// Country written in the `ZYZ` element.
    DocumentCountry: "documentCountry",
    LastName: "lastName",
    FirstName: "firstName",
    MiddleName: "middleName",
    DateOfBirth: "dateOfBirth",
    Gender: "gender",
    EyeColor: "eyeColor",
    HairColor: "hairColor",
    Height: "height",
    Weight: "weight",
    AddressStreet: "addressStreet",
    AddressCity: "addressCity",
    AddressState: "addressState",
    AddressPostalCode: "addressPostalCode",

    /// Cardholder country.
    Country: "country"
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DocumentType => "Document Type",
            Self::IssuingJurisdiction => "Issuing Jurisdiction",
            Self::UniqueId => "Document Number",
            Self::IssueDate => "Issue Date",
            Self::ExpirationDate => "Expiration Date",
            Self::VehicleClassifications => "Vehicle Class",
            Self::RestrictionCodes => "Restrictions",
            Self::EndorsementCodes => "Endorsements",
            Self::DocumentCountry => "Issuing Country",
            Self::LastName => "Last Name",
            Self::FirstName => "First Name",
            Self::MiddleName => "Middle Name",
            Self::DateOfBirth => "Date of Birth",
            Self::Gender => "Gender",
            Self::EyeColor => "Eye Color",
            Self::HairColor => "Hair Color",
            Self::Height => "Height",
            Self::Weight => "Weight (lbs)",
            Self::AddressStreet => "Street Address",
            Self::AddressCity => "City",
            Self::AddressState => "State",
            Self::AddressPostalCode => "Postal Code",
            Self::Country => "Country",
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            Self::DocumentType
            | Self::IssuingJurisdiction
            | Self::UniqueId
            | Self::IssueDate
            | Self::ExpirationDate
            | Self::VehicleClassifications
            | Self::RestrictionCodes
            | Self::EndorsementCodes
            | Self::DocumentCountry => FieldGroup::Document,
            Self::LastName
            | Self::FirstName
            | Self::MiddleName
            | Self::DateOfBirth
            | Self::Gender => FieldGroup::Personal,
            Self::EyeColor | Self::HairColor | Self::Height | Self::Weight => FieldGroup::Physical,
            Self::AddressStreet
            | Self::AddressCity
            | Self::AddressState
            | Self::AddressPostalCode
            | Self::Country => FieldGroup::Address,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::DocumentType => FieldKind::DocumentTypeChoice,
            Self::IssuingJurisdiction | Self::AddressState => FieldKind::JurisdictionSelect,
            Self::IssueDate | Self::ExpirationDate | Self::DateOfBirth => FieldKind::Date,
            Self::Gender => FieldKind::SexChoice,
            Self::EyeColor | Self::HairColor => FieldKind::ColorSelect,
            _ => FieldKind::FreeText,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            Self::MiddleName
                | Self::VehicleClassifications
                | Self::RestrictionCodes
                | Self::EndorsementCodes
        )
    }

    /// Data element the field is encoded as, if any.
    pub fn element(&self) -> Option<DlElement> {
        DlElement::LIST.into_iter().find(|e| e.field() == *self)
    }

    /// Reference table offering the valid choices of a select field.
    pub fn choices(&self) -> Option<&'static CodeTable> {
        match self {
            Self::IssuingJurisdiction | Self::AddressState => Some(&*JURISDICTIONS),
            Self::EyeColor => Some(&*EYE_COLORS),
            Self::HairColor => Some(&*HAIR_COLORS),
            _ => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
