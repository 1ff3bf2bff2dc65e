use std::path::Path;

use anyhow::{Context, Result};
use log::trace;
use serde::Deserialize;

use heredity::pedigree::MemberRecord;

mod error;
pub use error::ReaderError;

/// One row of a pedigree CSV file, as found on disk. Blank fields denote an
/// absent parent or an unobserved trait.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name  : String,
    mother: String,
    father: String,
    #[serde(rename = "trait")]
    status: String,
}

/// Parse a pedigree CSV file into loader records.
///
/// The file must carry a `name,mother,father,trait` header. `mother` and
/// `father` must both be blank, or both name another row of the file (row
/// order is free); `trait` is `1`, `0`, or blank for unknown.
///
/// # Errors
/// - if the file cannot be opened, or a row does not match the header.
/// - `InvalidTrait` if a trait field holds anything but `1`, `0` or blank.
pub fn read_pedigree(path: &Path) -> Result<Vec<MemberRecord>> {
    let loc_msg = || format!("While reading pedigree file '{}'", path.display());
    let mut reader = csv::Reader::from_path(path)
        .map_err(ReaderError::ParsePedigree)
        .with_context(loc_msg)?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        // CSV rows are 1-based, and the header occupies the first line.
        let line = index + 2;
        let row: RawRecord = row
            .map_err(ReaderError::ParsePedigree)
            .with_context(|| format!("Failed to parse line n°{line} of '{}'", path.display()))?;
        trace!("line {line}: {row:?}");

        records.push(MemberRecord {
            name          : row.name,
            mother        : none_if_empty(row.mother),
            father        : none_if_empty(row.father),
            observed_trait: parse_trait(&row.status)
                .with_context(|| format!("Failed to parse line n°{line} of '{}'", path.display()))?,
        });
    }
    Ok(records)
}

fn none_if_empty(field: String) -> Option<String> {
    match field.is_empty() {
        true  => None,
        false => Some(field),
    }
}

fn parse_trait(field: &str) -> Result<Option<bool>, ReaderError> {
    match field {
        ""    => Ok(None),
        "1"   => Ok(Some(true)),
        "0"   => Ok(Some(false)),
        other => Err(ReaderError::InvalidTrait(other.to_string())),
    }
}
