//! Agro Rent configuration.
//!
//! Loaded from `~/.agro-rent/config.toml`. Every key is optional and a missing
//! file means defaults.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::credentials::AdminCredentials;
use crate::storage::Storage;

/// Overrides the data directory when `--data-dir` is not given.
pub const DATA_DIR_ENV: &str = "AGRO_RENT_DATA_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHome,

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Agro Rent configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Where bookings and users are stored.
    pub data_dir: Option<PathBuf>,

    /// JSON catalog replacing the built-in one.
    pub catalog_file: Option<PathBuf>,

    pub admin_username: String,
    pub admin_password: String,

    /// Store a demo account on startup when no user exists.
    pub seed_demo_user: bool,

    /// Address contact messages are recorded for.
    pub contact_recipient: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_file: None,
            admin_username: "Admin1".to_string(),
            admin_password: "123".to_string(),
            seed_demo_user: false,
            contact_recipient: "agrorent@gmail.com".to_string(),
        }
    }
}

impl Config {
    /// Load config from `~/.agro-rent/config.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoHome)?;
        Self::load_from(&path)
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `~/.agro-rent/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".agro-rent").join("config.toml"))
    }

    pub fn admin(&self) -> AdminCredentials {
        AdminCredentials {
            username: self.admin_username.clone(),
            password: self.admin_password.clone(),
        }
    }

    /// Resolve the data directory.
    ///
    /// Checks in order: explicit `--data-dir`, `AGRO_RENT_DATA_DIR`, the
    /// `data-dir` key, then `~/.agro-rent/data`.
    pub fn resolve_data_dir(&self, explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        self.resolve_data_dir_with(explicit, env::var(DATA_DIR_ENV).ok())
    }

    fn resolve_data_dir_with(
        &self,
        explicit: Option<&Path>,
        from_env: Option<String>,
    ) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = explicit {
            return Ok(dir.to_path_buf());
        }

        if let Some(dir) = from_env
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir));
        }

        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        Storage::default_root().ok_or(ConfigError::NoHome)
    }
}
