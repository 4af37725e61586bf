// Shared test helpers: a scripted resolver standing in for live DNS,
// plus rdata constructors for fixtures.

// each test file pulls in its own subset
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::Ipv4Addr;

use async_trait::async_trait;
use hickory_proto::rr::rdata::{A, TXT};
use hickory_proto::rr::{Name, RData, RecordType};

use zone_verify::dns::{Resolve, ResolveOutcome};

/// A resolver answering from a fixed script. Unscripted keys fail loudly
/// so a test never passes by accident.
pub struct ScriptedResolver {
    answers: HashMap<(String, RecordType), ResolveOutcome>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    /// Scripts the outcome for one name/type. The name must be written
    /// fully qualified, as it appears in input files.
    pub fn with(mut self, name: &str, rtype: RecordType, outcome: ResolveOutcome) -> Self {
        self.answers
            .insert((name.to_ascii_lowercase(), rtype), outcome);
        self
    }
}

#[async_trait]
impl Resolve for ScriptedResolver {
    async fn resolve(&self, name: &Name, rtype: RecordType) -> ResolveOutcome {
        let key = (name.to_utf8().to_ascii_lowercase(), rtype);
        match self.answers.get(&key) {
            Some(outcome) => outcome.clone(),
            None => panic!("unscripted lookup: {}/{rtype}", name),
        }
    }
}

pub fn a(addr: &str) -> RData {
    RData::A(A(addr.parse::<Ipv4Addr>().expect("valid IPv4 literal")))
}

pub fn txt(value: &str) -> RData {
    RData::TXT(TXT::new(vec![value.to_string()]))
}
