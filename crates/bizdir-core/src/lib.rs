pub mod app_config;
pub mod business;
pub mod catalog;
pub mod category;
pub mod config;

pub use app_config::{AppConfig, Environment};
pub use business::{clamp_rating, Business, BusinessId, DayStatus, MAX_RATING, MIN_RATING};
pub use catalog::{
    load_catalog, Catalog, CatalogFile, CatalogProvider, FileCatalogProvider,
    StaticCatalogProvider,
};
pub use category::Category;
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_PAGE_SIZE};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("duplicate business id {0}")]
    DuplicateId(BusinessId),

    #[error("business {0} has an empty name")]
    EmptyName(BusinessId),
}
