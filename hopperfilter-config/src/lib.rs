use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub mod logging;
mod recipe;

pub use logging::LoggingConfig;
pub use recipe::RecipeConfig;

pub const CONFIG_FILE: &str = "config.toml";

/// Read access to plugin options by dotted path, e.g. `recipe.enabled`.
pub trait ConfigSource: Send + Sync {
    fn get_bool(&self, path: &str, default: bool) -> bool;
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file at {path:?}. Reason: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't parse config at {path:?}. Reason: {}. This is probably caused by a config update, just delete the old config and restart", .source.message())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Couldn't serialize default config. Reason: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Everything the plugin reads from its `config.toml`, used to write the
/// file when it doesn't exist yet.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PluginConfiguration {
    pub recipe: RecipeConfig,
    pub logging: LoggingConfig,
}

/// The raw option table of a plugin. Typed sections are deserialized on
/// demand so unknown keys written by newer versions are kept around.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginConfig {
    table: toml::Table,
}

impl PluginConfig {
    pub fn from_table(table: toml::Table) -> Self {
        Self { table }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        content.parse().map(Self::from_table)
    }

    /// Loads `config.toml` from `data_folder`, writing the defaults first if
    /// the file doesn't exist.
    pub fn load(data_folder: &Path) -> Result<Self, ConfigError> {
        let path = data_folder.join(CONFIG_FILE);

        let content = if path.exists() {
            fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?
        } else {
            let content = toml::to_string_pretty(&PluginConfiguration::default())?;

            if let Err(err) =
                fs::create_dir_all(data_folder).and_then(|()| fs::write(&path, &content))
            {
                warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
            }

            content
        };

        Self::parse(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    fn lookup(&self, path: &str) -> Option<&toml::Value> {
        let mut parts = path.split('.');
        let first = self.table.get(parts.next()?)?;
        parts.try_fold(first, |value, part| value.get(part))
    }

    /// Deserializes a top level table, falling back to its defaults when it
    /// is missing or malformed.
    pub fn section<T>(&self, name: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Some(value) = self.table.get(name) else {
            return T::default();
        };
        value.clone().try_into().unwrap_or_else(|err| {
            warn!("Invalid [{name}] section in {CONFIG_FILE}, using defaults. Reason: {err}");
            T::default()
        })
    }

    pub fn logging(&self) -> LoggingConfig {
        self.section("logging")
    }
}

impl ConfigSource for PluginConfig {
    fn get_bool(&self, path: &str, default: bool) -> bool {
        match self.lookup(path) {
            Some(toml::Value::Boolean(value)) => *value,
            Some(other) => {
                warn!(
                    "Config option {path} should be a boolean but is a {}, using {default}",
                    other.type_str()
                );
                default
            }
            None => default,
        }
    }
}
