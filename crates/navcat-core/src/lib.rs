pub mod app_config;
pub mod categories;
pub mod config;
pub mod products;
pub mod sections;

use thiserror::Error;

pub use app_config::AppConfig;
pub use categories::{SpecCategory, SpecField, SpecGroups};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{BrandModelKey, CanonicalProduct, ProductImage};
pub use sections::{DescriptionSection, Topic};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
