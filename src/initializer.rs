//! Initialization sequence: detect, resolve, load, then hand back a [`Translator`].

use futures::future::join_all;
use thiserror::Error;

use crate::backend::{
    Backend,
    BackendError,
};
use crate::config::{
    ConfigError,
    I18nSettings,
};
use crate::detector::LanguageDetector;
use crate::input::translation::{
    Bundle,
    language_only,
    normalize_language_code,
};
use crate::translator::{
    Translator,
    TranslatorOptions,
    resolution_chain,
};
use crate::view::{
    Document,
    UpdateReport,
    update_content,
};

#[derive(Error, Debug)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A bundle could not be fetched for a reason other than absence.
    #[error("Failed to load translations for '{lng}': {source}")]
    Backend {
        lng: String,
        #[source]
        source: BackendError,
    },

    #[error("No translation bundle found for any of: {}", tried.join(", "))]
    NoBundles { tried: Vec<String> },
}

/// Load every language of `chain` concurrently.
///
/// Languages without a bundle are skipped; any other failure aborts.
pub(crate) async fn load_bundles<B: Backend>(
    backend: &B,
    chain: &[String],
    options: &TranslatorOptions,
) -> Result<Vec<Bundle>, InitError> {
    let results = join_all(chain.iter().map(|lng| backend.read(lng, &options.ns))).await;

    let mut bundles = Vec::with_capacity(chain.len());
    for (lng, result) in chain.iter().zip(results) {
        match result {
            Ok(json) => {
                let bundle = Bundle::from_json(lng.clone(), &json, &options.key_separator);
                if options.debug {
                    tracing::debug!(lng = %lng, keys = bundle.len(), "Loaded translation bundle");
                }
                bundles.push(bundle);
            }
            Err(e) if e.is_not_found() => {
                if options.debug {
                    tracing::debug!(lng = %lng, error = %e, "No bundle, falling back");
                }
            }
            Err(source) => return Err(InitError::Backend { lng: lng.clone(), source }),
        }
    }

    if bundles.is_empty() {
        return Err(InitError::NoBundles { tried: chain.to_vec() });
    }
    Ok(bundles)
}

/// Configures and starts the translation subsystem.
#[derive(Debug, Clone)]
pub struct Initializer {
    settings: I18nSettings,
}

impl Initializer {
    #[must_use]
    pub const fn new(settings: I18nSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &I18nSettings {
        &self.settings
    }

    /// Language to load before fallbacks: the forced `lng`, else the first
    /// supported detected candidate, else the fallback language.
    #[must_use]
    pub fn requested_language<D: LanguageDetector + ?Sized>(&self, detector: &D) -> String {
        if let Some(lng) = &self.settings.lng {
            return normalize_language_code(lng);
        }

        let candidates = detector.detect();
        if self.settings.debug {
            tracing::debug!(?candidates, "Detected languages");
        }

        candidates
            .iter()
            .find_map(|code| self.supported_match(code))
            .unwrap_or_else(|| normalize_language_code(&self.settings.fallback_lng))
    }

    fn supported_match(&self, code: &str) -> Option<String> {
        let Some(supported) = &self.settings.supported_lngs else {
            return Some(code.to_string());
        };
        let is_supported =
            |candidate: &str| supported.iter().any(|s| normalize_language_code(s) == candidate);

        if is_supported(code) {
            return Some(code.to_string());
        }
        language_only(code).filter(|&l| is_supported(l)).map(str::to_string)
    }

    /// Run detection and bundle loading.
    ///
    /// Errors are returned, not logged; see [`Initializer::init_and_apply`].
    pub async fn init<B, D>(&self, backend: &B, detector: &D) -> Result<Translator, InitError>
    where
        B: Backend,
        D: LanguageDetector + ?Sized,
    {
        self.settings.validate().map_err(ConfigError::ValidationErrors)?;

        let options = TranslatorOptions::from(&self.settings);
        let requested = self.requested_language(detector);
        let chain = resolution_chain(&requested, &options.fallback_lng);
        tracing::debug!(requested = %requested, ?chain, "Initializing translations");

        let bundles = load_bundles(backend, &chain, &options).await?;
        let tried = chain.clone();
        let translator = Translator::from_bundles(options, bundles)
            .ok_or(InitError::NoBundles { tried })?;

        tracing::debug!(language = translator.language(), "Translations ready");
        Ok(translator)
    }

    /// Initialize, then update `document` once.
    ///
    /// On failure the error is logged once and `document` is left untouched.
    pub async fn init_and_apply<B, D, Doc>(
        &self,
        backend: &B,
        detector: &D,
        document: &mut Doc,
    ) -> Result<(Translator, UpdateReport), InitError>
    where
        B: Backend,
        D: LanguageDetector + ?Sized,
        Doc: Document + ?Sized,
    {
        match self.init(backend, detector).await {
            Ok(translator) => {
                let report = update_content(&translator, document);
                Ok((translator, report))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize translations");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::backend::MemoryBackend;
    use crate::config::BackendSettings;
    use crate::detector::FixedDetector;

    fn settings() -> I18nSettings {
        I18nSettings::default()
    }

    #[rstest]
    #[case(None, &["de-AT", "fr"], "de-AT")]
    #[case(Some(vec!["fr", "de"]), &["de-AT", "fr"], "de")]
    #[case(Some(vec!["fr"]), &["de-AT", "fr"], "fr")]
    #[case(Some(vec!["ja"]), &["de-AT", "fr"], "en")]
    #[case(None, &[], "en")]
    fn test_requested_language(
        #[case] supported: Option<Vec<&str>>,
        #[case] detected: &[&str],
        #[case] expected: &str,
    ) {
        let settings = I18nSettings {
            supported_lngs: supported.map(|s| s.into_iter().map(str::to_string).collect()),
            ..settings()
        };
        let detector = FixedDetector::new(detected.iter().copied());

        assert_eq!(Initializer::new(settings).requested_language(&detector), expected);
    }

    #[rstest]
    fn forced_language_skips_detection() {
        let settings = I18nSettings { lng: Some("pt_br".to_string()), ..settings() };
        let detector = FixedDetector::new(["de"]);

        assert_eq!(Initializer::new(settings).requested_language(&detector), "pt-BR");
    }

    #[tokio::test]
    async fn init_loads_detected_and_fallback() {
        let backend = MemoryBackend::new()
            .with_bundle("fr", json!({"title": "Détecteur de couleur"}))
            .with_bundle("en", json!({"title": "Color Detector", "subtitle": "Subtitle"}));

        let translator = Initializer::new(settings())
            .init(&backend, &FixedDetector::new(["fr-FR"]))
            .await
            .unwrap();

        assert_eq!(translator.language(), "fr");
        assert_eq!(translator.languages(), vec!["fr", "en"]);
        assert_eq!(translator.t("title"), "Détecteur de couleur");
        assert_eq!(translator.t("subtitle"), "Subtitle");
        assert_eq!(backend.reads(), 3);
    }

    #[tokio::test]
    async fn init_falls_back_when_detected_bundle_is_missing() {
        let backend = MemoryBackend::new().with_bundle("en", json!({"title": "Color Detector"}));

        let translator =
            Initializer::new(settings()).init(&backend, &FixedDetector::new(["xx"])).await.unwrap();

        assert_eq!(translator.language(), "en");
        assert_eq!(translator.t("title"), "Color Detector");
    }

    #[tokio::test]
    async fn init_fails_on_backend_error_without_retry() {
        let backend = MemoryBackend::new().with_failure("en", "network unreachable");

        let result = Initializer::new(settings()).init(&backend, &FixedDetector::default()).await;

        assert!(matches!(result, Err(InitError::Backend { ref lng, .. }) if lng == "en"));
        assert_eq!(backend.reads(), 1);
    }

    #[tokio::test]
    async fn init_fails_when_no_bundle_exists() {
        let backend = MemoryBackend::new();

        let result = Initializer::new(settings()).init(&backend, &FixedDetector::new(["xx"])).await;

        let Err(InitError::NoBundles { tried }) = &result else {
            panic!("expected NoBundles, got {result:?}");
        };
        assert_eq!(tried, &vec!["xx", "en"]);
    }

    #[tokio::test]
    async fn init_rejects_invalid_settings() {
        let settings = I18nSettings {
            backend: BackendSettings { load_path: "./locales/en.json".to_string() },
            ..settings()
        };
        let backend = MemoryBackend::new().with_bundle("en", json!({}));

        let result = Initializer::new(settings).init(&backend, &FixedDetector::default()).await;

        assert!(matches!(result, Err(InitError::Config(ConfigError::ValidationErrors(_)))));
        assert_eq!(backend.reads(), 0);
    }

    #[tokio::test]
    async fn nested_bundles_use_key_separator() {
        let settings = I18nSettings { key_separator: ":".to_string(), ..settings() };
        let backend = MemoryBackend::new().with_bundle("en", json!({"menu": {"open": "Open"}}));

        let translator =
            Initializer::new(settings).init(&backend, &FixedDetector::default()).await.unwrap();

        assert_eq!(translator.t("menu:open"), "Open");
    }
}
