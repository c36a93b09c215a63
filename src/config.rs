//! Configuration handling for enterprise_finder

use std::path::PathBuf;

/// File name the upstream export writes next to the tool.
pub const DEFAULT_INPUT: &str = "client_good_siret.csv";

/// Configuration for a run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the client CSV export
    pub input: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
        }
    }
}

impl Config {
    /// Create a new Config with an input path
    pub fn new(input: PathBuf) -> Self {
        Self { input }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_is_the_export_file() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("client_good_siret.csv"));
    }
}
