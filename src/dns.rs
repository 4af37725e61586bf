//! DNS resolution capability.
//!
//! The checkers do not talk to hickory directly; they consume a
//! [`Resolve`] implementation returning a [`ResolveOutcome`]. Negative
//! responses are classified here into NXDOMAIN vs NODATA, so the checkers
//! can pattern-match instead of poking at resolver error internals.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{Name, RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// The two flavors of a negative DNS response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativeKind {
    /// The queried name does not exist at all.
    NxDomain,
    /// The name exists but carries no records of the queried type.
    NoData,
}

impl fmt::Display for NegativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegativeKind::NxDomain => f.write_str("NXDOMAIN"),
            NegativeKind::NoData => f.write_str("NODATA"),
        }
    }
}

/// Classified result of one resolution attempt.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    /// The query succeeded; rdata of the queried type, answer order.
    /// The live implementation never produces this empty.
    Answered(Vec<RData>),
    /// The server answered with a proper negative response.
    Negative(NegativeKind),
    /// Anything else: transport error, timeout, SERVFAIL, REFUSED.
    Failed(String),
}

/// Resolution capability consumed by the check flows.
///
/// The live implementation is [`LiveResolver`]; tests substitute scripted
/// implementations so no check logic ever needs a network.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolves `name`/`rtype` and classifies the result.
    async fn resolve(&self, name: &Name, rtype: RecordType) -> ResolveOutcome;
}

/// [`Resolve`] implementation backed by a hickory resolver.
pub struct LiveResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl LiveResolver {
    /// Wraps a configured resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Resolve for LiveResolver {
    async fn resolve(&self, name: &Name, rtype: RecordType) -> ResolveOutcome {
        match self.resolver.lookup(name.clone(), rtype).await {
            Ok(lookup) => {
                // A lookup may carry the CNAME chain; only records of the
                // queried type take part in the comparison.
                let rdata: Vec<RData> = lookup
                    .record_iter()
                    .filter(|record| record.record_type() == rtype)
                    .filter_map(|record| record.data().cloned())
                    .collect();
                classify_answer(rdata)
            }
            Err(e) => classify_resolve_error(&e),
        }
    }
}

/// A successful lookup whose answer carries no records of the queried
/// type, typically a CNAME chain ending in another type, is NODATA in
/// all but wire form.
fn classify_answer(rdata: Vec<RData>) -> ResolveOutcome {
    if rdata.is_empty() {
        ResolveOutcome::Negative(NegativeKind::NoData)
    } else {
        ResolveOutcome::Answered(rdata)
    }
}

fn classify_resolve_error(err: &ResolveError) -> ResolveOutcome {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match response_code {
            ResponseCode::NXDomain => ResolveOutcome::Negative(NegativeKind::NxDomain),
            ResponseCode::NoError => ResolveOutcome::Negative(NegativeKind::NoData),
            other => ResolveOutcome::Failed(format!("negative response with rcode {other}")),
        },
        ResolveErrorKind::Timeout => ResolveOutcome::Failed("query timed out".to_string()),
        _ => ResolveOutcome::Failed(err.to_string()),
    }
}
