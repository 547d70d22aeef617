//! Language detection.
//!
//! A detector only proposes candidates; choosing between them (forced
//! language, supported list, fallback) is left to the initializer.

use crate::input::translation::normalize_language_code;

/// Supplies candidate locale codes, most preferred first.
pub trait LanguageDetector {
    fn detect(&self) -> Vec<String>;
}

/// Always proposes the same languages.
#[derive(Debug, Clone, Default)]
pub struct FixedDetector(Vec<String>);

impl FixedDetector {
    #[must_use]
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(languages.into_iter().map(Into::into).collect())
    }
}

impl LanguageDetector for FixedDetector {
    fn detect(&self) -> Vec<String> {
        dedup_codes(self.0.iter().map(String::as_str))
    }
}

/// Variables consulted in order. `LANGUAGE` may hold a colon-separated list.
const ENV_VARS: &[&str] = &["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Reads POSIX locale variables through an injectable lookup.
pub struct EnvDetector {
    lookup: Box<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl EnvDetector {
    /// Detector backed by the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    #[must_use]
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self { lookup: Box::new(lookup) }
    }
}

impl Default for EnvDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnvDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvDetector").field("lookup", &"<fn>").finish()
    }
}

impl LanguageDetector for EnvDetector {
    fn detect(&self) -> Vec<String> {
        let values: Vec<String> = ENV_VARS.iter().filter_map(|name| (self.lookup)(name)).collect();
        let codes = values.iter().flat_map(|value| value.split(':')).filter_map(posix_locale_code);
        dedup_codes(codes)
    }
}

/// Strip encoding and modifier from a POSIX locale (`fr_FR.UTF-8@euro` → `fr_FR`).
///
/// `C` and `POSIX` carry no language and yield `None`.
fn posix_locale_code(value: &str) -> Option<&str> {
    let code = value.split(['.', '@']).next()?.trim();
    if code.is_empty() || code.eq_ignore_ascii_case("c") || code.eq_ignore_ascii_case("posix") {
        return None;
    }
    Some(code)
}

/// Operating system preferred locales via `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDetector;

impl LanguageDetector for SystemDetector {
    fn detect(&self) -> Vec<String> {
        let locales: Vec<String> = sys_locale::get_locales().collect();
        dedup_codes(locales.iter().filter_map(|l| posix_locale_code(l)))
    }
}

/// Concatenates the candidates of several detectors.
#[derive(Default)]
pub struct ChainDetector {
    detectors: Vec<Box<dyn LanguageDetector + Send + Sync>>,
}

impl ChainDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, detector: impl LanguageDetector + Send + Sync + 'static) -> Self {
        self.detectors.push(Box::new(detector));
        self
    }
}

impl std::fmt::Debug for ChainDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainDetector").field("detectors", &self.detectors.len()).finish()
    }
}

impl LanguageDetector for ChainDetector {
    fn detect(&self) -> Vec<String> {
        let all: Vec<String> = self.detectors.iter().flat_map(|d| d.detect()).collect();
        dedup_codes(all.iter().map(String::as_str))
    }
}

/// Normalize codes and drop empties and repeats, keeping first occurrence order.
fn dedup_codes<'a>(codes: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for code in codes.map(normalize_language_code) {
        if !code.is_empty() && !result.contains(&code) {
            result.push(code);
        }
    }
    result
}
