//! The `page-i18n` command: settings from a project root, then one localized page.

use std::path::Path;

use crate::backend::FsBackend;
use crate::config::{
    ConfigError,
    ConfigManager,
    I18nSettings,
};
use crate::detector::{
    ChainDetector,
    EnvDetector,
    LanguageDetector,
    SystemDetector,
};
use crate::initializer::{
    InitError,
    Initializer,
};
use crate::view::MemoryDocument;

/// Load `i18n.json` under `root` and apply the command-line overrides.
///
/// `lang` replaces the configured `lng`; `debug` can only turn debugging on.
///
/// # Errors
/// The config file cannot be read or parsed, or fails validation.
pub fn load_settings(
    root: &Path,
    lang: Option<String>,
    debug: bool,
) -> Result<I18nSettings, ConfigError> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(root.to_path_buf()))?;

    let mut settings = config_manager.get_settings().clone();
    settings.debug |= debug;
    if lang.is_some() {
        settings.lng = lang;
    }
    Ok(settings)
}

/// Detectors consulted when no language is forced.
#[must_use]
pub fn default_detector() -> ChainDetector {
    ChainDetector::new().with(EnvDetector::new()).with(SystemDetector)
}

/// Localize the page skeleton with the bundles found under `root`.
///
/// # Errors
/// See [`Initializer::init`]. The failure is logged once.
pub async fn localize<D>(
    root: &Path,
    settings: I18nSettings,
    detector: &D,
) -> Result<MemoryDocument, InitError>
where
    D: LanguageDetector + ?Sized,
{
    let backend = FsBackend::new(root, settings.backend.load_path.clone());
    let mut document = MemoryDocument::page();

    Initializer::new(settings).init_and_apply(&backend, detector, &mut document).await?;
    Ok(document)
}

/// Whole command: load settings from `root`, then localize the page.
///
/// # Errors
/// Configuration problems come back as [`InitError::Config`].
pub async fn run(
    root: &Path,
    lang: Option<String>,
    debug: bool,
) -> Result<MemoryDocument, InitError> {
    let settings = load_settings(root, lang, debug)?;
    localize(root, settings, &default_detector()).await
}
