use std::env;
use std::fs;
use std::path::PathBuf;

use rolo_core::rules::validate_window_days;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "rolo";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Records per batch when listing contacts.
    pub page_size: usize,
    /// Default window for the upcoming-birthdays query.
    pub upcoming_days: i64,
    /// Overrides the XDG data directory when set.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            data_dir: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid page_size value: {0}")]
    InvalidPageSize(i64),
    #[error("invalid upcoming_days value: {0}")]
    InvalidUpcomingDays(i64),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    page_size: Option<i64>,
    upcoming_days: Option<i64>,
    data_dir: Option<PathBuf>,
}

/// Loads configuration. Without an explicit path, a missing or unresolvable
/// default location falls back to [`AppConfig::default`]; an explicit path
/// must exist.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path));
        }
        return Ok(AppConfig::default());
    }

    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    from_file(file)
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                dirs::home_dir()
                    .ok_or(ConfigError::MissingHomeDir)?
                    .join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn from_file(file: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(page_size) = file.page_size {
        if page_size < 1 {
            return Err(ConfigError::InvalidPageSize(page_size));
        }
        config.page_size = page_size as usize;
    }

    if let Some(upcoming_days) = file.upcoming_days {
        config.upcoming_days = validate_window_days(upcoming_days)
            .map_err(|_| ConfigError::InvalidUpcomingDays(upcoming_days))?;
    }

    config.data_dir = file.data_dir;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load, AppConfig, ConfigError, DEFAULT_PAGE_SIZE, DEFAULT_UPCOMING_DAYS};
    use std::fs;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).expect("write config");
        (temp, path)
    }

    #[test]
    fn defaults_when_no_file() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.upcoming_days, DEFAULT_UPCOMING_DAYS);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn explicit_path_must_exist() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("nope.toml");
        let err = load(Some(missing)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfigFile(_)));
    }

    #[test]
    fn reads_all_fields() {
        let (_temp, path) = write_config(
            "page_size = 10\nupcoming_days = 30\ndata_dir = \"/tmp/rolo-data\"\n",
        );
        let config = load(Some(path)).expect("load");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.upcoming_days, 30);
        assert_eq!(
            config.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/rolo-data"))
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let (_temp, path) = write_config("page_size = 10\ncolor = \"red\"\n");
        let err = load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_non_positive_page_size() {
        let (_temp, path) = write_config("page_size = 0\n");
        assert!(matches!(
            load(Some(path)).unwrap_err(),
            ConfigError::InvalidPageSize(0)
        ));
    }

    #[test]
    fn rejects_out_of_range_upcoming_days() {
        let (_temp, path) = write_config("upcoming_days = 400\n");
        assert!(matches!(
            load(Some(path)).unwrap_err(),
            ConfigError::InvalidUpcomingDays(400)
        ));
    }
}
