use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;

pub mod domain;
pub mod infrastructure;
pub mod store;

#[derive(Clone, Debug, Deserialize)]
pub struct InnConfig {
    pub storage: Storage,
    pub logger: Logger,
}

impl InnConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name("inn").required(false))
            .add_source(config::Environment::with_prefix("INN").separator("_"))
            .build()?
            .try_deserialize::<InnConfig>()
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize::<InnConfig>()
    }

    fn builder() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("storage.directory", "data")?
            .set_default("storage.customers", "customers.json")?
            .set_default("storage.hotels", "hotels.json")?
            .set_default("storage.reservations", "reservations.json")?
            .set_default("logger.level", "INFO")
    }
}

/// 保存先
#[derive(Clone, Debug, Deserialize)]
pub struct Storage {
    pub directory: PathBuf,
    pub customers: String,
    pub hotels: String,
    pub reservations: String,
}

impl Storage {
    pub fn customers_path(&self) -> PathBuf {
        self.directory.join(&self.customers)
    }

    pub fn hotels_path(&self) -> PathBuf {
        self.directory.join(&self.hotels)
    }

    pub fn reservations_path(&self) -> PathBuf {
        self.directory.join(&self.reservations)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}
