//! Settings for the translation subsystem.
mod loader;
mod manager;
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use types::{
    BackendSettings,
    ConfigError,
    I18nSettings,
    LNG_PLACEHOLDER,
    NS_PLACEHOLDER,
    ValidationError,
};
