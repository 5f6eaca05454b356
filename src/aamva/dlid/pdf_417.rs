//! Text layout of the AAMVA payload carried by a PDF417 symbol.
use crate::aamva::{AamvaVersion, DocumentType};

/// Compliance indicator, data element separator, record separator, segment
/// terminator and file type.
pub const PREFIX: &str = "@\n\x1e\rANSI ";

pub const SEGMENT_TERMINATOR: char = '\n';

pub const RECORD_SEPARATOR: char = '\x1e';

pub const DATA_ELEMENT_SEPARATOR: char = '\x1f';

pub const DRIVER_LICENSE_SUBFILE: char = 'L';

/// Jurisdiction-specific element carrying the document country.
pub const COUNTRY_ELEMENT: &str = "ZYZ";

/// Element of the trailer carrying the checksum.
pub const CHECKSUM_ELEMENT: &str = "ZYZ";

pub struct FileBuilder {
    header: Header,
    subfiles: Vec<Subfile>,
}

impl FileBuilder {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            subfiles: Vec::new(),
        }
    }

    pub fn push(&mut self, subfile: impl Into<Subfile>) {
        self.subfiles.push(subfile.into());
    }

    /// Writes the header, the subfiles and the checksum trailer.
    pub fn write(&self, buffer: &mut String) {
        let start = buffer.len();
        self.header.encode(buffer);

        for subfile in &self.subfiles {
            subfile.write(buffer);
        }

        let checksum = checksum(&buffer[start..]);
        buffer.push(RECORD_SEPARATOR);
        buffer.push_str(CHECKSUM_ELEMENT);
        buffer.push(DATA_ELEMENT_SEPARATOR);
        buffer.push_str(&checksum);
    }

    pub fn into_string(self) -> String {
        let mut result = String::new();
        self.write(&mut result);
        result
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub document_type: DocumentType,
    pub version: AamvaVersion,
    pub jurisdiction: String,
}

impl Header {
    pub fn new(
        document_type: DocumentType,
        version: AamvaVersion,
        jurisdiction: impl Into<String>,
    ) -> Self {
        Self {
            document_type,
            version,
            jurisdiction: jurisdiction.into(),
        }
    }

    pub fn encode(&self, buffer: &mut String) {
        buffer.push_str(PREFIX);
        buffer.push_str(self.document_type.code());
        buffer.push_str(self.version.code());
        buffer.push_str(&self.jurisdiction);
        buffer.push(SEGMENT_TERMINATOR);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfile {
    pub subfile_type: char,
    pub data: String,
}

impl Subfile {
    pub fn new(subfile_type: char, data: String) -> Self {
        Self { subfile_type, data }
    }

    pub fn write(&self, buffer: &mut String) {
        buffer.push(RECORD_SEPARATOR);
        buffer.push(self.subfile_type);
        buffer.push(DATA_ELEMENT_SEPARATOR);
        buffer.push_str(&self.data);
    }
}

/// Writes a single `<id><US><value><RS>` data element.
pub fn write_entry(buffer: &mut String, field: &str, value: &str) {
    buffer.push_str(field);
    buffer.push(DATA_ELEMENT_SEPARATOR);
    buffer.push_str(value);
    buffer.push(RECORD_SEPARATOR);
}

/// Sum of the code points of `data`, as upper case hexadecimal padded to at
/// least four digits.
///
/// The sum is not reduced modulo `0x10000`: long or non-Latin payloads yield
/// more than four digits.
pub fn checksum(data: &str) -> String {
    let sum: u64 = data.chars().map(|c| c as u64).sum();
    format!("{sum:04X}")
}
