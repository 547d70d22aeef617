//! Config file loader

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
};

/// Name of the settings file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "i18n.json";

/// Load settings from the project root.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: no config file
/// - `Err(ConfigError)`: read or parse failure
pub(super) fn load_from_root(root: &Path) -> Result<Option<I18nSettings>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: I18nSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn test_load_from_root_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"fallbackLng": "fr"}"#).unwrap();

        let settings = load_from_root(temp_dir.path()).unwrap();

        assert_eq!(settings.unwrap().fallback_lng, "fr");
    }

    #[rstest]
    fn test_load_from_root_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_root(temp_dir.path());

        assert!(result.unwrap().is_none());
    }

    #[rstest]
    fn test_load_from_root_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "invalid json").unwrap();

        let result = load_from_root(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
