//! zone_verify library: DNS zone deployment verification
//!
//! Audits a deployed DNS zone against three optional input files: an
//! `expected` zone-format file whose record sets must resolve exactly as
//! written, and `nodata`/`nxdomain` lists of name/type pairs that must
//! produce the corresponding negative response. Every failed check is
//! counted; the total is the program's outcome signal.
//!
//! # Example
//!
//! ```no_run
//! use zone_verify::{run_verification, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let report = run_verification(&config).await?;
//! std::process::exit(i32::try_from(report.total()).unwrap_or(i32::MAX));
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod absence;
pub mod check;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod zone;

// Re-export public API
pub use config::Config;
pub use run::{run_verification, run_with_resolver, VerifyReport};

// Internal run module (contains the flow orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, warn};

    use crate::check::{check_absent_data, check_expected_data};
    use crate::config::Config;
    use crate::dns::{LiveResolver, NegativeKind, Resolve};
    use crate::initialization::init_resolver;

    /// Error counts of one verification run, one field per flow.
    ///
    /// The counts are independent accumulators; nothing is shared between
    /// flows. The aggregate in [`total`](VerifyReport::total) is the
    /// process outcome signal.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct VerifyReport {
        /// Failed positive checks (plus one if the source was malformed).
        pub expected_data_errors: usize,
        /// Failed NODATA checks, including malformed list lines.
        pub nodata_errors: usize,
        /// Failed NXDOMAIN checks, including malformed list lines.
        pub nxdomain_errors: usize,
        /// Flows skipped because their input file was absent. Not an
        /// error, but worth telling apart from a clean pass.
        pub skipped_sources: usize,
    }

    impl VerifyReport {
        /// Total error count across all flows.
        pub fn total(&self) -> usize {
            self.expected_data_errors + self.nodata_errors + self.nxdomain_errors
        }
    }

    /// Runs a verification with the live DNS resolver.
    ///
    /// This is the main entry point for the library: it initializes the
    /// resolver and runs all three check flows in order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the resolver cannot be initialized. Input
    /// data problems never fail the run; they are counted in the report.
    pub async fn run_verification(config: &Config) -> Result<VerifyReport> {
        let resolver = init_resolver().context("Failed to initialize DNS resolver")?;
        let live = LiveResolver::new(resolver);
        Ok(run_with_resolver(&live, config).await)
    }

    /// Runs all three check flows with a caller-provided resolver.
    ///
    /// Flows run in sequence: expected data, then the NODATA list, then
    /// the NXDOMAIN list. A flow whose input file does not exist is
    /// skipped with a warning; that is a deployment convenience, not a
    /// verification failure.
    pub async fn run_with_resolver(resolver: &dyn Resolve, config: &Config) -> VerifyReport {
        let mut report = VerifyReport::default();

        if config.expected_data_file.exists() {
            debug!(
                "checking expected data from {} ...",
                config.expected_data_file.display()
            );
            report.expected_data_errors =
                check_expected_data(resolver, &config.expected_data_file).await;
        } else {
            warn!(
                "file {} not found, skip checking expected data",
                config.expected_data_file.display()
            );
            report.skipped_sources += 1;
        }

        if config.nodata_file.exists() {
            debug!("checking nodata from {} ...", config.nodata_file.display());
            report.nodata_errors =
                check_absent_data(resolver, &config.nodata_file, NegativeKind::NoData).await;
        } else {
            warn!(
                "file {} not found, skip checking nodata",
                config.nodata_file.display()
            );
            report.skipped_sources += 1;
        }

        if config.nxdomain_file.exists() {
            debug!(
                "checking nxdomain from {} ...",
                config.nxdomain_file.display()
            );
            report.nxdomain_errors =
                check_absent_data(resolver, &config.nxdomain_file, NegativeKind::NxDomain).await;
        } else {
            warn!(
                "file {} not found, skip checking nxdomain",
                config.nxdomain_file.display()
            );
            report.skipped_sources += 1;
        }

        debug!("{} problems", report.total());
        report
    }
}
