use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

mod inventory;
pub mod logging;

pub use inventory::InventoryLayout;
pub use logging::LoggingConfig;

const CONFIG_ROOT_FOLDER: &str = "config/";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't access configuration at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Couldn't parse config at {path:?}. Reason: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Couldn't serialize default configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything an embedder needs to create player inventories.
///
/// Missing keys fall back to their defaults, so an empty file is a valid configuration.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SatchelConfiguration {
    pub inventory: InventoryLayout,
    pub logging: LoggingConfig,
}

impl SatchelConfiguration {
    /// Reads `config/satchel.toml` below `exec_dir`, writing the defaults first if the file does not exist.
    pub fn load(exec_dir: &Path) -> Result<Self, ConfigError> {
        <Self as LoadConfiguration>::load(exec_dir)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|err| ConfigError::Parse {
            path: Self::get_path().to_path_buf(),
            message: err.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

trait LoadConfiguration {
    fn load(exec_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        if !config_dir.exists() {
            log::debug!("creating new config root folder");
            fs::create_dir_all(&config_dir).map_err(|source| ConfigError::Io {
                path: config_dir.clone(),
                source,
            })?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|err| ConfigError::Parse {
                path: path.clone(),
                message: err.message().to_string(),
            })?
        } else {
            let content = Self::default();

            if let Err(err) = fs::write(&path, toml::to_string(&content)?) {
                warn!(
                    "Couldn't write default config to {:?}. Reason: {}. Continuing with the defaults",
                    &path, err
                );
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadConfiguration for SatchelConfiguration {
    fn get_path() -> &'static Path {
        Path::new("satchel.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // Capacities are `NonZeroUsize`, serde already rejects 0.
        if !self.logging.level_is_known() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level `{}`",
                self.logging.level
            )));
        }
        Ok(())
    }
}
