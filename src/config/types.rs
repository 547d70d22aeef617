use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Placeholder replaced by the locale code in `backend.loadPath`.
pub const LNG_PLACEHOLDER: &str = "{{lng}}";

/// Placeholder replaced by the namespace in `backend.loadPath`.
pub const NS_PLACEHOLDER: &str = "{{ns}}";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "backend.loadPath")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }

    /// `lng` is present but blank.
    #[must_use]
    pub fn empty_language() -> Self {
        Self::new(
            "lng",
            "The language cannot be empty. Please specify a code (e.g., \"fr\"), or remove this field",
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Options handed to the initializer.
///
/// Field names follow the i18next option names so an existing `i18n.json`
/// written for the browser can be reused as is.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Locale used when detection fails or the detected bundle is unavailable.
    pub fallback_lng: String,

    /// Emit diagnostic output (loaded languages, missing keys).
    pub debug: bool,

    pub backend: BackendSettings,

    /// Forced language. Detection is skipped when set.
    pub lng: Option<String>,

    /// Detected languages outside this list are ignored.
    ///
    /// - `None`: every detected language is accepted (default)
    pub supported_lngs: Option<Vec<String>>,

    pub key_separator: String,

    /// Namespace substituted for `{{ns}}` in the load path.
    pub ns: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendSettings {
    /// Path template, e.g. `./locales/{{lng}}/translation.json`.
    pub load_path: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self { load_path: format!("./locales/{LNG_PLACEHOLDER}/translation.json") }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            fallback_lng: "en".to_string(),
            debug: false,
            backend: BackendSettings::default(),
            lng: None,
            supported_lngs: None,
            key_separator: ".".to_string(),
            ns: "translation".to_string(),
        }
    }
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Load path without a locale placeholder
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.fallback_lng.trim().is_empty() {
            errors.push(ValidationError::new(
                "fallbackLng",
                "The fallback language cannot be empty. Example: \"en\"",
            ));
        }

        if self.backend.load_path.is_empty() {
            errors.push(ValidationError::new(
                "backend.loadPath",
                "The load path cannot be empty. Example: \"./locales/{{lng}}/translation.json\"",
            ));
        } else if !self.backend.load_path.contains(LNG_PLACEHOLDER) {
            errors.push(ValidationError::new(
                "backend.loadPath",
                format!(
                    "The load path '{}' must contain the {LNG_PLACEHOLDER} placeholder",
                    self.backend.load_path
                ),
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.backend.load_path.contains(NS_PLACEHOLDER) && self.ns.is_empty() {
            errors.push(ValidationError::new(
                "ns",
                "The namespace cannot be empty when the load path uses {{ns}}",
            ));
        }

        if let Some(lng) = &self.lng
            && lng.trim().is_empty()
        {
            errors.push(ValidationError::empty_language());
        }

        if let Some(supported) = &self.supported_lngs {
            if supported.is_empty() {
                errors.push(ValidationError::new(
                    "supportedLngs",
                    "At least one language is required, or remove this field",
                ));
            }
            for (index, code) in supported.iter().enumerate() {
                if code.trim().is_empty() {
                    errors.push(ValidationError::new(
                        format!("supportedLngs[{index}]"),
                        "The language code cannot be empty",
                    ));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = I18nSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_i18next_style_options() {
        let json = r#"{
            "fallbackLng": "en",
            "debug": true,
            "backend": { "loadPath": "./locales/{{lng}}/translation.json" }
        }"#;

        let settings: I18nSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.fallback_lng, eq("en"));
        assert_that!(settings.debug, eq(true));
        assert_that!(settings.backend.load_path, eq("./locales/{{lng}}/translation.json"));
        assert_that!(settings.lng, none());
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: I18nSettings = serde_json::from_str("{}").unwrap();

        assert_that!(settings, eq(&I18nSettings::default()));
        assert_that!(settings.key_separator, eq("."));
        assert_that!(settings.ns, eq("translation"));
    }

    #[rstest]
    fn validate_empty_fallback() {
        let settings = I18nSettings { fallback_lng: " ".to_string(), ..I18nSettings::default() };

        assert_that!(
            settings.validate(),
            err(elements_are![all![
                field!(ValidationError.field_path, eq("fallbackLng")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    #[case("")]
    #[case("./locales/en/translation.json")]
    #[case("./locales/{lng}/translation.json")]
    fn validate_load_path_without_placeholder(#[case] load_path: &str) {
        let settings = I18nSettings {
            backend: BackendSettings { load_path: load_path.to_string() },
            ..I18nSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("backend.loadPath"))])
        );
    }

    #[rstest]
    fn validate_empty_namespace_with_ns_placeholder() {
        let settings = I18nSettings {
            backend: BackendSettings { load_path: "./locales/{{lng}}/{{ns}}.json".to_string() },
            ns: String::new(),
            ..I18nSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("ns"))])
        );
    }

    #[rstest]
    fn validate_supported_lngs() {
        let settings = I18nSettings {
            supported_lngs: Some(vec!["en".to_string(), String::new()]),
            ..I18nSettings::default()
        };

        assert_that!(
            settings.validate(),
            err(elements_are![field!(ValidationError.field_path, eq("supportedLngs[1]"))])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = I18nSettings {
            key_separator: String::new(),
            fallback_lng: String::new(),
            ..I18nSettings::default()
        };

        let errors = settings.validate().unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. fallbackLng"));
        assert_that!(error_message, contains_substring("2. keySeparator"));
    }
}
