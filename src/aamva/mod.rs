use std::{borrow::Cow, collections::BTreeMap, fmt, str::FromStr};

use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};

pub mod dlid;
pub mod field;
pub mod reference;

pub use dlid::{EncodeError, MissingDataElement};
pub use field::{FieldGroup, FieldId, FieldKind};

/// AAMVA DL/ID standard versions a record can be encoded for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AamvaVersion {
    #[default]
    V08,
    V09,
    V10,
}

impl AamvaVersion {
    pub const LIST: [Self; 3] = [Self::V08, Self::V09, Self::V10];

    /// Maps a version token (`"08"`, `"09"`, `"10"`) to a version.
    ///
    /// Any other token falls back to version 08.
    pub fn from_token(token: &str) -> Self {
        match token {
            "08" => Self::V08,
            "09" => Self::V09,
            "10" => Self::V10,
            other => {
                warn!("unsupported AAMVA version `{other}`, falling back to 08");
                Self::V08
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V08 => "08",
            Self::V09 => "09",
            Self::V10 => "10",
        }
    }

    /// Five digit version number written in the compliance header.
    pub fn code(&self) -> &'static str {
        match self {
            Self::V08 => "00080",
            Self::V09 => "00090",
            Self::V10 => "00100",
        }
    }
}

impl From<String> for AamvaVersion {
    fn from(value: String) -> Self {
        Self::from_token(&value)
    }
}

impl From<AamvaVersion> for String {
    fn from(value: AamvaVersion) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for AamvaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
pub enum DocumentType {
    /// Driver license (`DL`).
    #[serde(rename = "DL")]
    DriverLicense,

    /// Identification card (`ID`).
    #[serde(rename = "ID")]
    IdentificationCard,
}

impl DocumentType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DriverLicense => "DL",
            Self::IdentificationCard => "ID",
        }
    }
}

impl FromStr for DocumentType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DL" => Ok(Self::DriverLicense),
            "ID" => Ok(Self::IdentificationCard),
            _ => Err(UnknownCode {
                kind: "document type",
                value: s.to_owned(),
            }),
        }
    }
}

/// Physical description, sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
    X,
}

impl Sex {
    pub fn code(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
            Self::X => "X",
        }
    }
}

impl FromStr for Sex {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::M),
            "F" => Ok(Self::F),
            "X" => Ok(Self::X),
            _ => Err(UnknownCode {
                kind: "sex",
                value: s.to_owned(),
            }),
        }
    }
}

/// Reads an enumerated code, leaving it unset when it is not one of the
/// known codes so that validation reports the field.
fn known_code<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownCode>,
{
    let code = Option::<String>::deserialize(deserializer)?;
    Ok(code.and_then(|code| match code.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("{e}");
            None
        }
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalRecord {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub date_of_birth: String,
    #[serde(deserialize_with = "known_code")]
    pub gender: Option<Sex>,
    pub eye_color: String,
    pub hair_color: String,
    pub height: String,
    pub weight: String,
    pub address_street: String,
    pub address_city: String,
    pub address_state: String,
    pub address_postal_code: String,
    pub country: String,

    /// Driver license / ID number.
    pub unique_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentRecord {
    #[serde(deserialize_with = "known_code")]
    pub document_type: Option<DocumentType>,
    pub issue_date: String,
    pub expiration_date: String,
    pub issuing_jurisdiction: String,
    pub country: String,
    pub restriction_codes: String,
    pub endorsement_codes: String,
    pub vehicle_classifications: String,
}

/// Everything needed to produce one AAMVA DL/ID barcode record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AamvaRecord {
    #[serde(default)]
    pub version: AamvaVersion,

    #[serde(default)]
    pub personal: PersonalRecord,

    #[serde(default)]
    pub document: DocumentRecord,

    /// Free-form extension data. Shown in previews, never encoded.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub optional: BTreeMap<String, String>,
}

impl Default for AamvaRecord {
    /// Blank form state.
    fn default() -> Self {
        Self {
            version: AamvaVersion::V08,
            personal: PersonalRecord {
                gender: Some(Sex::M),
                country: "USA".to_owned(),
                ..Default::default()
            },
            document: DocumentRecord {
                document_type: Some(DocumentType::DriverLicense),
                country: "USA".to_owned(),
                ..Default::default()
            },
            optional: BTreeMap::new(),
        }
    }
}

impl AamvaRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts the record back into the blank form state.
    pub fn reset(&mut self) {
        *self = Self::default()
    }

    /// Current input value of the given form field.
    ///
    /// Unset enumerations read as the empty string.
    pub fn get(&self, field: FieldId) -> Cow<'_, str> {
        let p = &self.personal;
        let d = &self.document;
        let value: &str = match field {
            FieldId::DocumentType => d.document_type.map(|t| t.code()).unwrap_or_default(),
            FieldId::IssuingJurisdiction => &d.issuing_jurisdiction,
            FieldId::UniqueId => &p.unique_id,
            FieldId::IssueDate => &d.issue_date,
            FieldId::ExpirationDate => &d.expiration_date,
            FieldId::VehicleClassifications => &d.vehicle_classifications,
            FieldId::RestrictionCodes => &d.restriction_codes,
            FieldId::EndorsementCodes => &d.endorsement_codes,
            FieldId::DocumentCountry => &d.country,
            FieldId::LastName => &p.last_name,
            FieldId::FirstName => &p.first_name,
            FieldId::MiddleName => &p.middle_name,
            FieldId::DateOfBirth => &p.date_of_birth,
            FieldId::Gender => p.gender.map(|s| s.code()).unwrap_or_default(),
            FieldId::EyeColor => &p.eye_color,
            FieldId::HairColor => &p.hair_color,
            FieldId::Height => &p.height,
            FieldId::Weight => &p.weight,
            FieldId::AddressStreet => &p.address_street,
            FieldId::AddressCity => &p.address_city,
            FieldId::AddressState => &p.address_state,
            FieldId::AddressPostalCode => &p.address_postal_code,
            FieldId::Country => &p.country,
        };

        Cow::Borrowed(value)
    }

    /// Updates a single form field with raw input.
    ///
    /// Enumerated fields are cleared when the input is not one of their
    /// codes, so that validation reports them.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        debug!("set {field} = {value:?}");

        let p = &mut self.personal;
        let d = &mut self.document;
        match field {
            FieldId::DocumentType => d.document_type = value.parse().ok(),
            FieldId::Gender => p.gender = value.parse().ok(),
            FieldId::IssuingJurisdiction => d.issuing_jurisdiction = value,
            FieldId::UniqueId => p.unique_id = value,
            FieldId::IssueDate => d.issue_date = value,
            FieldId::ExpirationDate => d.expiration_date = value,
            FieldId::VehicleClassifications => d.vehicle_classifications = value,
            FieldId::RestrictionCodes => d.restriction_codes = value,
            FieldId::EndorsementCodes => d.endorsement_codes = value,
            FieldId::DocumentCountry => d.country = value,
            FieldId::LastName => p.last_name = value,
            FieldId::FirstName => p.first_name = value,
            FieldId::MiddleName => p.middle_name = value,
            FieldId::DateOfBirth => p.date_of_birth = value,
            FieldId::EyeColor => p.eye_color = value,
            FieldId::HairColor => p.hair_color = value,
            FieldId::Height => p.height = value,
            FieldId::Weight => p.weight = value,
            FieldId::AddressStreet => p.address_street = value,
            FieldId::AddressCity => p.address_city = value,
            FieldId::AddressState => p.address_state = value,
            FieldId::AddressPostalCode => p.address_postal_code = value,
            FieldId::Country => p.country = value,
        }
    }
}

/// Encodes the record into the AAMVA text payload carried by the PDF417
/// symbol.
///
/// The record is expected to have passed
/// [`validate_record`](crate::validation::validate_record); this function
/// only refuses records with empty mandatory elements or unusable dates.
pub fn encode(record: &AamvaRecord) -> Result<String, EncodeError> {
    let document_type = record
        .document
        .document_type
        .ok_or(EncodeError::MissingHeaderField("document type"))?;

    let jurisdiction = record.document.issuing_jurisdiction.as_str();
    if jurisdiction.is_empty() {
        return Err(EncodeError::MissingHeaderField("issuing jurisdiction"));
    }

    let header = dlid::pdf_417::Header::new(document_type, record.version, jurisdiction);
    let subfile = dlid::DlSubfile::from_record(record)?;

    let mut file = dlid::pdf_417::FileBuilder::new(header);
    file.push(subfile);
    let encoded = file.into_string();

    debug!(
        "encoded {} record for `{jurisdiction}` ({} chars)",
        document_type.code(),
        encoded.chars().count()
    );

    Ok(encoded)
}
