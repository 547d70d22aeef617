//! Settings ownership for the CLI and the localizer session.

use std::path::PathBuf;

use super::{
    ConfigError,
    I18nSettings,
    loader,
};

#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    current_settings: I18nSettings,

    /// Directory the load path is resolved against.
    root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: I18nSettings::default(), root: None }
    }

    /// Load `i18n.json` from `root` (or defaults) and validate it.
    ///
    /// The previous settings are kept when loading or validation fails.
    pub fn load_settings(&mut self, root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for root: {:?}", root);

        let settings = if let Some(root) = &root {
            loader::load_from_root(root)?.map_or_else(I18nSettings::default, |s| {
                tracing::debug!("Loaded settings file: {:?}", s);
                s
            })
        } else {
            I18nSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.root = root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    pub fn update_settings(&mut self, new_settings: I18nSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &I18nSettings {
        &self.current_settings
    }

    #[must_use]
    pub const fn root(&self) -> Option<&PathBuf> {
        self.root.as_ref()
    }
}
