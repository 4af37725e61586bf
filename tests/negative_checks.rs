//! NegativeChecker behavior: NXDOMAIN/NODATA classification against a
//! scripted resolver, including the absence-list flow.

mod helpers;

use std::io::Write;
use std::str::FromStr;

use hickory_proto::rr::{Name, RecordType};
use tempfile::NamedTempFile;

use helpers::{txt, ScriptedResolver};
use zone_verify::absence::QueryKey;
use zone_verify::check::{check_absent_data, check_negative};
use zone_verify::dns::{NegativeKind, ResolveOutcome};

fn key(name: &str, rtype: &str) -> QueryKey {
    QueryKey {
        name: Name::from_utf8(name).expect("valid test name"),
        rtype: RecordType::from_str(rtype).expect("valid test type"),
    }
}

fn list_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp list file");
    file.write_all(content.as_bytes()).expect("write list file");
    file
}

#[tokio::test]
async fn test_expected_negative_kind_passes() {
    let resolver = ScriptedResolver::new()
        .with(
            "empty.example.com.",
            RecordType::TXT,
            ResolveOutcome::Negative(NegativeKind::NoData),
        )
        .with(
            "missing.example.com.",
            RecordType::A,
            ResolveOutcome::Negative(NegativeKind::NxDomain),
        );

    let nodata = key("empty.example.com.", "TXT");
    let nxdomain = key("missing.example.com.", "A");
    assert_eq!(
        check_negative(&resolver, &nodata, NegativeKind::NoData).await,
        0
    );
    assert_eq!(
        check_negative(&resolver, &nxdomain, NegativeKind::NxDomain).await,
        0
    );
}

#[tokio::test]
async fn test_nxdomain_when_nodata_expected_is_one_error() {
    let resolver = ScriptedResolver::new().with(
        "missing.example.com.",
        RecordType::TXT,
        ResolveOutcome::Negative(NegativeKind::NxDomain),
    );

    let tally = check_negative(
        &resolver,
        &key("missing.example.com.", "TXT"),
        NegativeKind::NoData,
    )
    .await;
    assert_eq!(tally, 1);
}

#[tokio::test]
async fn test_nodata_when_nxdomain_expected_is_one_error() {
    let resolver = ScriptedResolver::new().with(
        "empty.example.com.",
        RecordType::A,
        ResolveOutcome::Negative(NegativeKind::NoData),
    );

    let tally = check_negative(
        &resolver,
        &key("empty.example.com.", "A"),
        NegativeKind::NxDomain,
    )
    .await;
    assert_eq!(tally, 1);
}

#[tokio::test]
async fn test_unexpected_positive_answer_is_one_error() {
    let resolver = ScriptedResolver::new().with(
        "present.example.com.",
        RecordType::TXT,
        ResolveOutcome::Answered(vec![txt("surprise")]),
    );

    let tally = check_negative(
        &resolver,
        &key("present.example.com.", "TXT"),
        NegativeKind::NoData,
    )
    .await;
    assert_eq!(tally, 1);
}

#[tokio::test]
async fn test_transport_failure_is_surfaced_as_one_error() {
    let resolver = ScriptedResolver::new().with(
        "flaky.example.com.",
        RecordType::A,
        ResolveOutcome::Failed("query timed out".to_string()),
    );

    let tally = check_negative(
        &resolver,
        &key("flaky.example.com.", "A"),
        NegativeKind::NxDomain,
    )
    .await;
    assert_eq!(tally, 1);
}

#[tokio::test]
async fn test_absence_flow_counts_line_errors_and_check_failures() {
    // line 2 is malformed (three fields); line 3 resolves with data;
    // line 4 behaves as expected
    let list = list_fixture(
        "# absence list\n\
         bad.example.com. A extra\n\
         present.example.com. TXT\n\
         empty.example.com. TXT\n",
    );
    let resolver = ScriptedResolver::new()
        .with(
            "present.example.com.",
            RecordType::TXT,
            ResolveOutcome::Answered(vec![txt("surprise")]),
        )
        .with(
            "empty.example.com.",
            RecordType::TXT,
            ResolveOutcome::Negative(NegativeKind::NoData),
        );

    let errors = check_absent_data(&resolver, list.path(), NegativeKind::NoData).await;
    assert_eq!(errors, 2);
}

#[tokio::test]
async fn test_malformed_lines_produce_no_lookups() {
    // every line is malformed; an unscripted resolver panics on any lookup
    let list = list_fixture("www A\nwww.example.com. BOGUSTYPE\n");
    let resolver = ScriptedResolver::new();

    let errors = check_absent_data(&resolver, list.path(), NegativeKind::NxDomain).await;
    assert_eq!(errors, 2);
}
