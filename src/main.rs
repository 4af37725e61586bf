//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `zone_verify` library that handles:
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing summary output
//!
//! There are no command-line flags; configuration is environment-only.
//! The process exit code is the total number of failed checks.

use std::process;

use log::LevelFilter;

use zone_verify::initialization::init_logger;
use zone_verify::{run_verification, Config};

#[tokio::main]
async fn main() {
    // Load environment variables from a .env file if one exists; real
    // environment variables take precedence.
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = init_logger(level) {
        eprintln!("zone_verify: {e}");
        process::exit(1);
    }

    match run_verification(&config).await {
        Ok(report) => {
            let problems = report.total();
            if problems == 0 {
                if report.skipped_sources > 0 {
                    println!(
                        "all DNS checks passed ({} source{} skipped)",
                        report.skipped_sources,
                        if report.skipped_sources == 1 { "" } else { "s" }
                    );
                } else {
                    println!("all DNS checks passed");
                }
            } else {
                println!(
                    "{} DNS check problem{} found",
                    problems,
                    if problems == 1 { "" } else { "s" }
                );
            }
            process::exit(i32::try_from(problems).unwrap_or(i32::MAX));
        }
        Err(e) => {
            eprintln!("zone_verify error: {e:#}");
            process::exit(1);
        }
    }
}
