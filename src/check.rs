//! The verification engine.
//!
//! Three flows, each returning its own error count: positive checks
//! driven by the expected-data zone source, and negative checks driven by
//! the NODATA and NXDOMAIN absence lists. All comparison logic is pure;
//! resolution goes through the [`Resolve`] capability.

use std::path::Path;

use hickory_proto::rr::RData;
use log::{debug, error, info};

use crate::absence::{parse_absence_list, QueryKey};
use crate::dns::{NegativeKind, Resolve, ResolveOutcome};
use crate::zone;

/// Decides structural record-set equality.
///
/// Record sets are sets: order and duplicate multiplicity are irrelevant,
/// so equality is mutual containment rather than slice equality. Rdata
/// equality follows DNS semantics through the underlying types: domain
/// names inside rdata compare case-insensitively, TXT content stays
/// byte-exact. TTL is never part of the comparison.
pub fn rrsets_match(expected: &[RData], resolved: &[RData]) -> bool {
    expected.iter().all(|rdata| resolved.contains(rdata))
        && resolved.iter().all(|rdata| expected.contains(rdata))
}

/// Sorted presentation form of a record set, for debug log lines.
fn sorted_presentation(records: &[RData]) -> Vec<String> {
    let mut values: Vec<String> = records.iter().map(ToString::to_string).collect();
    values.sort();
    values
}

/// Positive check flow: resolve every entry of the expected-data source
/// and compare the live record set against the zone's.
///
/// Returns the number of failed entries. A parse failure of the source
/// itself aborts the flow with exactly one error; per-entry failures are
/// counted and the flow continues.
pub async fn check_expected_data(resolver: &dyn Resolve, path: &Path) -> usize {
    let entries = match zone::load_expected(path) {
        Ok(entries) => entries,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    let mut errors = 0;
    for entry in entries {
        match resolver.resolve(&entry.name, entry.rtype).await {
            ResolveOutcome::Answered(records) => {
                if rrsets_match(&entry.records, &records) {
                    info!("OK: {}/{}", entry.name, entry.rtype);
                } else {
                    errors += 1;
                    error!("{}/{} returned unexpected data", entry.name, entry.rtype);
                    debug!("expected: {:?}", sorted_presentation(&entry.records));
                    debug!("got: {:?}", sorted_presentation(&records));
                }
            }
            ResolveOutcome::Negative(kind) => {
                errors += 1;
                error!(
                    "{}/{} returned {kind} where data is expected",
                    entry.name, entry.rtype
                );
            }
            ResolveOutcome::Failed(detail) => {
                errors += 1;
                error!("{}/{}: resolution failed: {detail}", entry.name, entry.rtype);
            }
        }
    }
    errors
}

/// Negative check flow: parse one absence list and assert every key
/// produces the expected negative response.
///
/// Returns the number of errors: one per malformed line plus one per key
/// whose resolution did not match the expectation.
pub async fn check_absent_data(
    resolver: &dyn Resolve,
    path: &Path,
    expected: NegativeKind,
) -> usize {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            error!("failed to read {}: {e}", path.display());
            return 1;
        }
    };

    let list = parse_absence_list(&text);
    let mut errors = list.errors.len();
    for line_error in &list.errors {
        error!("{line_error}");
    }

    for key in &list.keys {
        errors += check_negative(resolver, key, expected).await;
    }
    errors
}

/// Checks one key for the expected negative response. Returns 0 on pass,
/// 1 on failure.
///
/// The wrong flavor of negative is a failure of its own kind: total
/// absence where an existing-but-empty name was expected is reported with
/// the NXDOMAIN-specific message. An answer with actual data is reported
/// as an unexpected positive answer, with the returned records logged at
/// debug level. Transport-level failures are surfaced distinctly, never
/// folded into the negative classification.
pub async fn check_negative(
    resolver: &dyn Resolve,
    key: &QueryKey,
    expected: NegativeKind,
) -> usize {
    match resolver.resolve(&key.name, key.rtype).await {
        ResolveOutcome::Negative(kind) if kind == expected => {
            info!("OK: {key}");
            0
        }
        ResolveOutcome::Negative(NegativeKind::NxDomain) => {
            error!("\"{}\" returned NXDOMAIN", key.name);
            1
        }
        ResolveOutcome::Negative(NegativeKind::NoData) => {
            error!("{key} returned NODATA where NXDOMAIN is expected");
            1
        }
        ResolveOutcome::Answered(records) => {
            error!("{key} returned data where {expected} is expected");
            debug!("expected: {expected}, got:");
            for rdata in &records {
                debug!("{rdata}");
            }
            1
        }
        ResolveOutcome::Failed(detail) => {
            error!("{key}: resolution failed: {detail}");
            1
        }
    }
}
