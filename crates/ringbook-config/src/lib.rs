use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use ringbook_core::rules::validate_list_name;
use ringbook_core::DEFAULT_LIST_NAME;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "ringbook";
const CONFIG_FILENAME: &str = "config.toml";

/// Matches the per-origin budget browsers give local storage.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_list_name: String,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub quota_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_list_name: DEFAULT_LIST_NAME.to_string(),
            storage: StorageConfig {
                quota_bytes: DEFAULT_QUOTA_BYTES,
            },
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
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("default_list_name cannot be empty")]
    InvalidDefaultListName,
    #[error("invalid storage.quota_bytes value: {0}")]
    InvalidQuotaBytes(usize),
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
    default_list_name: Option<String>,
    storage: Option<StorageFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StorageFile {
    quota_bytes: Option<usize>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
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
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(name) = parsed.default_list_name {
        config.default_list_name =
            validate_list_name(&name).map_err(|_| ConfigError::InvalidDefaultListName)?;
    }

    if let Some(storage) = parsed.storage {
        if let Some(quota) = storage.quota_bytes {
            if quota == 0 {
                return Err(ConfigError::InvalidQuotaBytes(quota));
            }
            config.storage.quota_bytes = quota;
        }
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, ConfigError, ConfigFile, StorageFile, DEFAULT_QUOTA_BYTES,
    };
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            default_list_name: Some("  Clients ".to_string()),
            storage: Some(StorageFile {
                quota_bytes: Some(1024),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.default_list_name, "Clients");
        assert_eq!(merged.storage.quota_bytes, 1024);
    }

    #[test]
    fn merge_config_keeps_defaults() {
        let parsed = ConfigFile {
            default_list_name: None,
            storage: None,
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.default_list_name, "My Contacts");
        assert_eq!(merged.storage.quota_bytes, DEFAULT_QUOTA_BYTES);
    }

    #[test]
    fn merge_config_rejects_blank_list_name_and_zero_quota() {
        let blank = ConfigFile {
            default_list_name: Some("   ".to_string()),
            storage: None,
        };
        assert!(matches!(
            merge_config(blank),
            Err(ConfigError::InvalidDefaultListName)
        ));

        let zero = ConfigFile {
            default_list_name: None,
            storage: Some(StorageFile {
                quota_bytes: Some(0),
            }),
        };
        assert!(matches!(
            merge_config(zero),
            Err(ConfigError::InvalidQuotaBytes(0))
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "default_list_name = \"Family\"\n[storage]\nquota_bytes = 2048\n",
        )
        .expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.default_list_name, "Family");
        assert_eq!(config.storage.quota_bytes, 2048);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "due_soon_days = 3\n").expect("write config");
        restrict_permissions(&path);

        assert!(matches!(
            load_at_path(&path, true),
            Err(ConfigError::Parse { .. })
        ));
    }
}
