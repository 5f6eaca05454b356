use std::{borrow::Cow, collections::BTreeMap};

use super::{
    data_elements_enum,
    pdf_417::{write_entry, Subfile, COUNTRY_ELEMENT, DRIVER_LICENSE_SUBFILE},
    EncodeError, MissingDataElement,
};
use crate::{aamva::AamvaRecord, date};

data_elements_enum! {
    /// Data elements of the driver license subfile.
    pub enum DlElement {
        /// Customer ID Number (DAQ).
        CustomerIdNumber: b"DAQ" => UniqueId, Mandatory,

        /// Customer Family Name (DCS).
        CustomerFamilyName: b"DCS" => LastName, Mandatory,

        /// Customer First Name (DCT).
        CustomerFirstName: b"DCT" => FirstName, Mandatory,

        /// Customer Middle Name (DCU).
        CustomerMiddleName: b"DCU" => MiddleName, Optional,

        /// Date of Birth (DDE).
        DateOfBirth: b"DDE" => DateOfBirth, Mandatory,

        /// Physical Description – Sex (DDF).
        Sex: b"DDF" => Gender, Mandatory,

        /// Document Issue Date (DCF).
        DocumentIssueDate: b"DCF" => IssueDate, Mandatory,

        /// Document Expiration Date (DCG).
        DocumentExpirationDate: b"DCG" => ExpirationDate, Mandatory,

        /// Address – Street 1 (DAG).
        AddressStreet1: b"DAG" => AddressStreet, Mandatory,

        /// Address – City (DAI).
        AddressCity: b"DAI" => AddressCity, Mandatory,

        /// Address – Jurisdiction Code (DAJ).
        AddressJurisdictionCode: b"DAJ" => AddressState, Mandatory,

        /// Address – Postal Code (DAK).
        AddressPostalCode: b"DAK" => AddressPostalCode, Mandatory,

        /// Physical Description – Eye Color (DAY).
        EyeColor: b"DAY" => EyeColor, Mandatory,

        /// Physical Description – Hair Color (DAZ).
        HairColor: b"DAZ" => HairColor, Mandatory,

        /// Physical Description – Height (DAU).
        Height: b"DAU" => Height, Mandatory,

        /// Jurisdiction-specific vehicle class (DCA).
        VehicleClass: b"DCA" => VehicleClassifications, Optional,

        /// Jurisdiction-specific restriction codes (DCB).
        RestrictionCodes: b"DCB" => RestrictionCodes, Optional,

        /// Jurisdiction-specific endorsement codes (DCD).
        EndorsementCodes: b"DCD" => EndorsementCodes, Optional
    }
}

impl DlElement {
    pub fn is_date(&self) -> bool {
        matches!(
            self,
            Self::DateOfBirth | Self::DocumentIssueDate | Self::DocumentExpirationDate
        )
    }

    /// Value written for this element, with dates in `MMDDYYYY` form.
    pub fn value_of<'a>(&self, record: &'a AamvaRecord) -> Cow<'a, str> {
        let raw = record.get(self.field());
        if self.is_date() {
            Cow::Owned(date::normalize(&raw))
        } else {
            raw
        }
    }
}

/// Driver license subfile (`L`).
#[derive(Debug, Clone)]
pub struct DlSubfile {
    elements: BTreeMap<DlElement, String>,
    country: String,
}

impl DlSubfile {
    pub fn from_record(record: &AamvaRecord) -> Result<Self, EncodeError> {
        let mut builder = DlSubfileBuilder::new();

        for element in DlElement::LIST {
            let value = element.value_of(record);
            if value.is_empty() && element.is_date() {
                let raw = record.get(element.field());
                if !raw.is_empty() {
                    return Err(EncodeError::InvalidDate {
                        element,
                        value: raw.into_owned(),
                    });
                }
            }

            builder.set(element, value.into_owned());
        }

        builder.set_country(record.document.country.clone());
        builder.build()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.elements.len() + 1
    }

    pub fn get(&self, element: DlElement) -> Option<&str> {
        self.elements.get(&element).map(String::as_str)
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Present elements, in subfile order. The country element is not
    /// included.
    pub fn iter(&self) -> impl Iterator<Item = (DlElement, &str)> {
        self.elements.iter().map(|(e, v)| (*e, v.as_str()))
    }
}

#[derive(Debug, Default)]
pub struct DlSubfileBuilder {
    elements: BTreeMap<DlElement, String>,
    country: String,
}

impl DlSubfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an element value. An empty value removes the element.
    pub fn set(&mut self, element: DlElement, value: String) {
        if value.is_empty() {
            self.elements.remove(&element);
        } else {
            self.elements.insert(element, value);
        }
    }

    pub fn set_country(&mut self, country: String) {
        self.country = country
    }

    pub fn build(self) -> Result<DlSubfile, EncodeError> {
        if let Some(missing) = DlElement::LIST
            .into_iter()
            .find(|e| e.is_mandatory() && !self.elements.contains_key(e))
        {
            return Err(MissingDataElement(missing).into());
        }

        if self.country.is_empty() {
            return Err(EncodeError::MissingCountry);
        }

        Ok(DlSubfile {
            elements: self.elements,
            country: self.country,
        })
    }
}

impl From<DlSubfile> for Subfile {
    fn from(value: DlSubfile) -> Self {
        let mut data = String::new();
        for (e, v) in value.iter() {
            write_entry(&mut data, e.string_id(), v);
        }

        write_entry(&mut data, COUNTRY_ELEMENT, &value.country);
        Self::new(DRIVER_LICENSE_SUBFILE, data)
    }
}
