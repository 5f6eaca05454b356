use std::{fs, path::Path};

use dlid_barcodes::AamvaRecord;

pub fn load_record(path: impl AsRef<Path>) -> AamvaRecord {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Sum of the code points of `text`, as the trailer writes it.
#[allow(dead_code)]
pub fn code_point_sum(text: &str) -> String {
    format!("{:04X}", text.chars().map(|c| c as u64).sum::<u64>())
}
