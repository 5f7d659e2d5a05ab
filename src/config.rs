use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use crate::crosswalk::DEFAULT_SOURCE_URL;

/// Build the Ohio zip code -> natural gas utility lookup table
#[derive(Debug, Parser)]
#[command(name = "zip-territory", version)]
pub struct Config {
    /// where to write the JSON table
    #[arg(long, env = "ZIP_TERRITORY_OUTPUT", default_value = "result/zip-territory.json")]
    pub output: PathBuf,

    /// CSV with state_fips, state, zipcode and county columns
    #[arg(long, env = "ZIP_TERRITORY_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// request timeout in seconds
    #[arg(long, env = "ZIP_TERRITORY_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// extra attempts after a failed download
    #[arg(long, env = "ZIP_TERRITORY_RETRIES", default_value_t = 3)]
    pub retries: usize,

    /// skip the download and map the whole zip range from overrides only
    #[arg(long, env = "ZIP_TERRITORY_OFFLINE")]
    pub offline: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["zip-territory"]).unwrap();
        assert_eq!(config.output, PathBuf::from("result/zip-territory.json"));
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.retries, 3);
        assert!(!config.offline);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "zip-territory", "--output", "out.json", "--timeout-secs", "5", "--retries", "0", "--offline",
        ]).unwrap();
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.retries, 0);
        assert!(config.offline);
    }
}
