//! Filesystem backend.

use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use super::{
    Backend,
    BackendError,
    interpolate_load_path,
};

/// Reads bundles from disk, resolving the load path against `root`.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
    load_path: String,
}

impl FsBackend {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, load_path: impl Into<String>) -> Self {
        Self { root: root.into(), load_path: load_path.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the bundle for `lng` would be read from.
    #[must_use]
    pub fn resolve(&self, lng: &str, ns: &str) -> PathBuf {
        self.root.join(interpolate_load_path(&self.load_path, lng, ns))
    }
}

/// Codes come from the environment, so they must not escape the locale directory.
fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.contains(['/', '\\'])
        && segment != "."
        && segment != ".."
}

impl Backend for FsBackend {
    async fn read(&self, lng: &str, ns: &str) -> Result<Value, BackendError> {
        if !is_safe_segment(lng) || !is_safe_segment(ns) {
            tracing::debug!(lng, ns, "Rejected unsafe path segment");
            let path = interpolate_load_path(&self.load_path, lng, ns);
            return Err(BackendError::NotFound { path });
        }

        let path = self.resolve(lng, ns);
        tracing::debug!(path = %path.display(), "Reading translation resource");

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BackendError::NotFound { path: path.display().to_string() });
            }
            Err(source) => return Err(BackendError::Io { path, source }),
        };

        serde_json::from_str(&content)
            .map_err(|source| BackendError::Parse { path: path.display().to_string(), source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn write_bundle(root: &Path, lng: &str, content: &str) {
        let dir = root.join("locales").join(lng);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("translation.json"), content).unwrap();
    }

    #[tokio::test]
    async fn reads_existing_bundle() {
        let temp_dir = TempDir::new().unwrap();
        write_bundle(temp_dir.path(), "en", r#"{"title": "Color Detector"}"#);
        let backend = FsBackend::new(temp_dir.path(), "./locales/{{lng}}/translation.json");

        let value = backend.read("en", "translation").await.unwrap();

        assert_eq!(value, json!({"title": "Color Detector"}));
    }

    #[tokio::test]
    async fn missing_bundle_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FsBackend::new(temp_dir.path(), "./locales/{{lng}}/translation.json");

        let result = backend.read("xx", "translation").await;

        assert!(result.is_err_and(|e| e.is_not_found()));
    }

    #[tokio::test]
    async fn invalid_json_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        write_bundle(temp_dir.path(), "en", "{ not json");
        let backend = FsBackend::new(temp_dir.path(), "./locales/{{lng}}/translation.json");

        let result = backend.read("en", "translation").await;

        assert!(matches!(result, Err(BackendError::Parse { .. })));
    }

    #[tokio::test]
    async fn directory_in_place_of_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("locales/en/translation.json")).unwrap();
        let backend = FsBackend::new(temp_dir.path(), "./locales/{{lng}}/translation.json");

        let result = backend.read("en", "translation").await;

        assert!(matches!(result, Err(BackendError::Io { .. })));
    }

    #[rstest]
    #[case("..")]
    #[case("../secrets")]
    #[case("en\\..")]
    #[case("")]
    #[tokio::test]
    async fn rejects_path_traversal(#[case] lng: &str) {
        let temp_dir = TempDir::new().unwrap();
        let backend = FsBackend::new(temp_dir.path(), "./locales/{{lng}}/translation.json");

        let result = backend.read(lng, "translation").await;

        assert!(matches!(result, Err(BackendError::NotFound { .. })));
    }

    #[rstest]
    fn resolve_joins_root() {
        let backend = FsBackend::new("/srv/app", "static/locales/{{lng}}/{{ns}}.json");

        assert_eq!(
            backend.resolve("fr", "common"),
            PathBuf::from("/srv/app/static/locales/fr/common.json")
        );
    }
}
