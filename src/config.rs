//! Configuration.
//!
//! All configuration comes from environment variables (a `.env` file is
//! honored by the binary); there are no command-line flags. Each input file
//! has a default name relative to the working directory and an environment
//! variable that overrides it.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the expected-data zone file path.
pub const EXPECTED_DATA_FILE_ENV: &str = "EXPECTED_DATA_FILE";
/// Environment variable overriding the NODATA list path.
pub const NODATA_FILE_ENV: &str = "NODATA_FILE";
/// Environment variable overriding the NXDOMAIN list path.
pub const NXDOMAIN_FILE_ENV: &str = "NXDOMAIN_FILE";
/// Environment variable raising the log level to debug when set non-empty.
pub const VERBOSE_ENV: &str = "VERBOSE";

/// Default path of the expected-data zone file.
pub const DEFAULT_EXPECTED_DATA_FILE: &str = "expected";
/// Default path of the NODATA list.
pub const DEFAULT_NODATA_FILE: &str = "nodata";
/// Default path of the NXDOMAIN list.
pub const DEFAULT_NXDOMAIN_FILE: &str = "nxdomain";

/// DNS query timeout.
///
/// Generous enough for slow authoritatives while keeping a hung server
/// from stalling the run indefinitely.
pub const DNS_TIMEOUT: Duration = Duration::from_secs(10);

/// Verification run configuration.
///
/// Can be constructed programmatically (all fields are public) or read from
/// the environment with [`Config::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Zone-format file with the record sets that must be present.
    pub expected_data_file: PathBuf,
    /// Two-field list of name/type pairs that must answer NODATA.
    pub nodata_file: PathBuf,
    /// Two-field list of name/type pairs that must answer NXDOMAIN.
    pub nxdomain_file: PathBuf,
    /// Log at debug level instead of info.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expected_data_file: PathBuf::from(DEFAULT_EXPECTED_DATA_FILE),
            nodata_file: PathBuf::from(DEFAULT_NODATA_FILE),
            nxdomain_file: PathBuf::from(DEFAULT_NXDOMAIN_FILE),
            verbose: false,
        }
    }
}

impl Config {
    /// Builds a configuration from the environment, falling back to the
    /// default file names for unset or empty variables.
    pub fn from_env() -> Self {
        Self {
            expected_data_file: path_from_env(EXPECTED_DATA_FILE_ENV, DEFAULT_EXPECTED_DATA_FILE),
            nodata_file: path_from_env(NODATA_FILE_ENV, DEFAULT_NODATA_FILE),
            nxdomain_file: path_from_env(NXDOMAIN_FILE_ENV, DEFAULT_NXDOMAIN_FILE),
            verbose: env::var(VERBOSE_ENV).map_or(false, |v| !v.is_empty()),
        }
    }
}

fn path_from_env(var: &str, default: &str) -> PathBuf {
    match env::var(var) {
        Ok(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_default_file_names() {
        let config = Config::default();
        assert_eq!(config.expected_data_file, PathBuf::from("expected"));
        assert_eq!(config.nodata_file, PathBuf::from("nodata"));
        assert_eq!(config.nxdomain_file, PathBuf::from("nxdomain"));
        assert!(!config.verbose);
    }
}
