//! Owned translation state: the loaded bundles and key lookup.

use crate::backend::Backend;
use crate::config::{
    ConfigError,
    I18nSettings,
    ValidationError,
};
use crate::initializer::{
    InitError,
    load_bundles,
};
use crate::input::translation::{
    Bundle,
    language_only,
    language_with_script,
    normalize_language_code,
};

/// Lookup options copied out of [`I18nSettings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorOptions {
    pub fallback_lng: String,
    pub debug: bool,
    pub key_separator: String,
    pub ns: String,
}

impl From<&I18nSettings> for TranslatorOptions {
    fn from(settings: &I18nSettings) -> Self {
        Self {
            fallback_lng: normalize_language_code(&settings.fallback_lng),
            debug: settings.debug,
            key_separator: settings.key_separator.clone(),
            ns: settings.ns.clone(),
        }
    }
}

/// Languages tried for `requested`, most specific first.
///
/// # Examples
/// ```
/// use page_i18n::translator::resolution_chain;
///
/// assert_eq!(resolution_chain("en-US", "fr"), ["en-US", "en", "fr"]);
/// assert_eq!(resolution_chain("zh-Hant-TW", "en"), ["zh-Hant-TW", "zh-Hant", "zh", "en"]);
/// assert_eq!(resolution_chain("en", "en"), ["en"]);
/// ```
#[must_use]
pub fn resolution_chain(requested: &str, fallback: &str) -> Vec<String> {
    let requested = normalize_language_code(requested);
    let fallback = normalize_language_code(fallback);

    let mut chain = Vec::new();
    for code in [
        Some(requested.as_str()),
        language_with_script(&requested),
        language_only(&requested),
        Some(fallback.as_str()),
    ]
    .into_iter()
    .flatten()
    {
        if !code.is_empty() && !chain.iter().any(|c: &String| c == code) {
            chain.push(code.to_string());
        }
    }
    chain
}

/// Translation state for one page.
///
/// Independent values share nothing, so several translators with different
/// languages can live side by side.
#[derive(Debug, Clone)]
pub struct Translator {
    options: TranslatorOptions,

    /// Loaded bundles in lookup order. Never empty.
    bundles: Vec<Bundle>,
}

impl Translator {
    /// Build a translator from bundles already in lookup order.
    ///
    /// Returns `None` when `bundles` is empty.
    #[must_use]
    pub fn from_bundles(options: TranslatorOptions, bundles: Vec<Bundle>) -> Option<Self> {
        if bundles.is_empty() {
            return None;
        }
        Some(Self { options, bundles })
    }

    /// Active language: the most specific language that had a bundle.
    #[must_use]
    pub fn language(&self) -> &str {
        self.bundles.first().map_or(self.options.fallback_lng.as_str(), Bundle::language)
    }

    /// Loaded languages in lookup order.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.bundles.iter().map(Bundle::language).collect()
    }

    #[must_use]
    pub const fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        self.bundles.iter().any(|bundle| bundle.contains_key(key))
    }

    /// Resolve `key`, returning the key itself when no bundle has it.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        if let Some(value) = self.bundles.iter().find_map(|bundle| bundle.get(key)) {
            return value.to_string();
        }
        if self.options.debug {
            tracing::debug!(key, languages = ?self.languages(), "Missing translation key");
        }
        key.to_string()
    }

    /// Resolve `key` and substitute `{{name}}` placeholders from `args`.
    ///
    /// Placeholders without a matching argument are left untouched.
    #[must_use]
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args)
    }

    /// Switch to `lng`, loading its bundles through `backend`.
    ///
    /// The current bundles stay active if loading fails. A blank `lng` is
    /// rejected the same way a blank `lng` setting is.
    pub async fn change_language<B: Backend>(
        &mut self,
        lng: &str,
        backend: &B,
    ) -> Result<(), InitError> {
        if lng.trim().is_empty() {
            return Err(ConfigError::ValidationErrors(vec![ValidationError::empty_language()]).into());
        }
        let chain = resolution_chain(lng, &self.options.fallback_lng);
        let bundles = load_bundles(backend, &chain, &self.options).await?;
        if self.options.debug {
            tracing::debug!(from = self.language(), to = ?chain.first(), "Language changed");
        }
        self.bundles = bundles;
        Ok(())
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((before, after_open)) = rest.split_once("{{") {
        let Some((inner, after_close)) = after_open.split_once("}}") else {
            break;
        };
        result.push_str(before);
        let name = inner.trim();
        if let Some((_, value)) = args.iter().find(|(arg, _)| *arg == name) {
            result.push_str(value);
        } else {
            result.push_str("{{");
            result.push_str(inner);
            result.push_str("}}");
        }
        rest = after_close;
    }

    result.push_str(rest);
    result
}
