//! Expected-data loading.
//!
//! The expected-data source is standard zone-format text. It is parsed
//! all-or-nothing: any syntax problem yields a [`ZoneDataError`] and none
//! of the entries are used. Names are taken as written, anchored at the
//! root, so zone entries line up with live query names without an implicit
//! origin.

use std::fs;
use std::path::Path;

use hickory_proto::rr::{Name, RData, RecordType};
use hickory_proto::serialize::txt::Parser;

use crate::error_handling::ZoneDataError;

/// One record set the zone says must be present: the query key, the
/// nominal TTL, and the record values.
#[derive(Debug, Clone)]
pub struct ExpectedRrset {
    /// Owner name of the record set.
    pub name: Name,
    /// Record type of the record set.
    pub rtype: RecordType,
    /// Zone TTL. Nominal only; live TTLs decay, so it takes no part in
    /// the comparison.
    pub ttl: u32,
    /// Record values as parsed. At least one per entry.
    pub records: Vec<RData>,
}

/// Reads and parses the expected-data file.
pub fn load_expected(path: &Path) -> Result<Vec<ExpectedRrset>, ZoneDataError> {
    let text = fs::read_to_string(path).map_err(|source| ZoneDataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_expected(&text, path)
}

/// Parses zone-format text into expected record sets.
///
/// The origin is the root, so relative names in the source are anchored
/// there; in practice every entry is written fully qualified.
pub fn parse_expected(text: &str, path: &Path) -> Result<Vec<ExpectedRrset>, ZoneDataError> {
    let (_origin, rrsets) = Parser::new(text, Some(path.to_path_buf()), Some(Name::root()))
        .parse()
        .map_err(|source| ZoneDataError::Syntax {
            path: path.to_path_buf(),
            source,
        })?;

    let mut entries = Vec::with_capacity(rrsets.len());
    for (_key, rrset) in rrsets {
        let records: Vec<RData> = rrset
            .records_without_rrsigs()
            .filter_map(|record| record.data().cloned())
            .collect();
        entries.push(ExpectedRrset {
            name: rrset.name().clone(),
            rtype: rrset.record_type(),
            ttl: rrset.ttl(),
            records,
        });
    }
    Ok(entries)
}
