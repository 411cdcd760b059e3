//! User configuration for robofleet.
//!
//! A single optional YAML file at `<data-dir>/config.yaml` (default data
//! directory `~/.robofleet`). A missing file is not an error and yields
//! the defaults; a present but unreadable or unparsable file is.
//!
//! Precedence for the storage file location is handled by the CLI layer:
//! `--file` flag / `ROBOFLEET_FILE` env, then [`Config::data_file`], then
//! `~/.robofleet/robots.csv`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the data directory under the user's home.
pub const DATA_DIR_NAME: &str = ".robofleet";

/// Name of the storage file inside the data directory.
pub const DATA_FILE_NAME: &str = "robots.csv";

/// User configuration.
///
/// # Examples
///
/// ```
/// use robofleet::Config;
///
/// let config: Config = serde_yaml::from_str("default_duration_minutes: 30").unwrap();
/// assert_eq!(config.default_duration_minutes, Some(30));
/// assert_eq!(config.data_file, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Location of the storage CSV file.
    pub data_file: Option<PathBuf>,

    /// Reservation length used when a command gives no duration.
    pub default_duration_minutes: Option<i64>,
}

impl Config {
    /// Loads the user configuration from `{data_dir}/config.yaml`, or from
    /// the default data directory when `data_dir` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        let config_path = match data_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match default_data_dir() {
                Some(dir) => dir.join("config.yaml"),
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        // Raw bytes so an undecodable file reports as a configuration
        // error, not an I/O error.
        let bytes = fs::read(&config_path)?;
        Ok(serde_yaml::from_slice(&bytes)?)
    }
}

/// The default data directory, `~/.robofleet`.
///
/// Returns `None` when the home directory cannot be determined.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_parses_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("config.yaml")).unwrap();
        writeln!(file, "data_file: /srv/fleet/robots.csv").unwrap();
        writeln!(file, "default_duration_minutes: 15").unwrap();

        let config = Config::load(Some(dir.path())).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/srv/fleet/robots.csv")));
        assert_eq!(config.default_duration_minutes, Some(15));
    }

    #[test]
    fn test_load_non_utf8_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.yaml"), b"data_file: \xff\xfe\n").unwrap();

        let err = Config::load(Some(dir.path())).unwrap_err();
        assert!(format!("{err}").contains("configuration error"));
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join("config.yaml")).unwrap();
        writeln!(file, "robots: everywhere").unwrap();

        let err = Config::load(Some(dir.path())).unwrap_err();
        assert!(format!("{err}").contains("configuration error"));
    }
}
