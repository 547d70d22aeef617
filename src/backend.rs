//! Resource backends that fetch one locale bundle at a time.

mod fs;
mod memory;

use std::future::Future;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

pub use fs::FsBackend;
pub use memory::MemoryBackend;

use crate::config::{
    LNG_PLACEHOLDER,
    NS_PLACEHOLDER,
};

#[derive(Error, Debug)]
pub enum BackendError {
    /// No bundle exists for the language. Not fatal during initialization.
    #[error("No translation resource at {path}")]
    NotFound { path: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transport failure reported by a non-file backend.
    #[error("Failed to load resource: {0}")]
    Failed(String),
}

impl BackendError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Loads the raw bundle JSON for one `(language, namespace)` pair.
pub trait Backend {
    fn read(&self, lng: &str, ns: &str)
    -> impl Future<Output = Result<Value, BackendError>> + Send;
}

/// Resolve a load path template for one language and namespace.
///
/// # Examples
/// ```
/// use page_i18n::backend::interpolate_load_path;
///
/// assert_eq!(
///     interpolate_load_path("./locales/{{lng}}/{{ns}}.json", "fr", "translation"),
///     "./locales/fr/translation.json"
/// );
/// ```
#[must_use]
pub fn interpolate_load_path(template: &str, lng: &str, ns: &str) -> String {
    template.replace(LNG_PLACEHOLDER, lng).replace(NS_PLACEHOLDER, ns)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("./locales/{{lng}}/translation.json", "en", "./locales/en/translation.json")]
    #[case("/static/locales/{{lng}}.json", "pt-BR", "/static/locales/pt-BR.json")]
    #[case("{{lng}}/{{ns}}/{{lng}}.json", "de", "de/common/de.json")]
    fn test_interpolate_load_path(#[case] template: &str, #[case] lng: &str, #[case] expected: &str) {
        assert_eq!(interpolate_load_path(template, lng, "common"), expected);
    }

    #[rstest]
    fn test_is_not_found() {
        let not_found = BackendError::NotFound { path: "x".to_string() };
        let failed = BackendError::Failed("connection reset".to_string());

        assert!(not_found.is_not_found());
        assert!(!failed.is_not_found());
    }
}
