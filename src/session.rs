//! Long-lived localizer: owns the document and re-applies on language change.

use tokio::sync::Mutex;

use crate::backend::Backend;
use crate::config::I18nSettings;
use crate::detector::LanguageDetector;
use crate::initializer::{
    InitError,
    Initializer,
};
use crate::translator::Translator;
use crate::view::{
    Document,
    UpdateReport,
    update_content,
};

/// Mutable half of the session, guarded as one unit.
#[derive(Debug)]
struct State<Doc> {
    document: Doc,
    translator: Option<Translator>,
}

/// Ties a backend, a detector and a document together.
///
/// Every operation holds the state lock from load to write, so overlapping
/// calls are applied one after the other and the last one wins.
#[derive(Debug)]
pub struct Localizer<B, D, Doc> {
    initializer: Initializer,
    backend: B,
    detector: D,
    state: Mutex<State<Doc>>,
}

impl<B, D, Doc> Localizer<B, D, Doc>
where
    B: Backend,
    D: LanguageDetector,
    Doc: Document,
{
    pub fn new(settings: I18nSettings, backend: B, detector: D, document: Doc) -> Self {
        Self {
            initializer: Initializer::new(settings),
            backend,
            detector,
            state: Mutex::new(State { document, translator: None }),
        }
    }

    /// Initialize and write the page. Re-running reloads from scratch.
    pub async fn start(&self) -> Result<UpdateReport, InitError> {
        let mut state = self.state.lock().await;
        let (translator, report) = self
            .initializer
            .init_and_apply(&self.backend, &self.detector, &mut state.document)
            .await?;
        state.translator = Some(translator);
        Ok(report)
    }

    /// Switch to `lng` and write the page again.
    ///
    /// Before [`Localizer::start`] this initializes with `lng` forced. On
    /// failure the document and the active language are unchanged.
    pub async fn change_language(&self, lng: &str) -> Result<UpdateReport, InitError> {
        let mut state = self.state.lock().await;
        let State { document, translator } = &mut *state;

        match translator {
            Some(active) => {
                if let Err(e) = active.change_language(lng, &self.backend).await {
                    tracing::error!(lng, error = %e, "Failed to change language");
                    return Err(e);
                }
                Ok(update_content(active, document))
            }
            None => {
                let settings = I18nSettings {
                    lng: Some(lng.to_string()),
                    ..self.initializer.settings().clone()
                };
                let (started, report) = Initializer::new(settings)
                    .init_and_apply(&self.backend, &self.detector, document)
                    .await?;
                *translator = Some(started);
                Ok(report)
            }
        }
    }

    /// Active language, once started.
    pub async fn language(&self) -> Option<String> {
        let state = self.state.lock().await;
        state.translator.as_ref().map(|t| t.language().to_string())
    }

    /// Run `f` against the current document.
    pub async fn with_document<R>(&self, f: impl FnOnce(&Doc) -> R) -> R {
        let state = self.state.lock().await;
        f(&state.document)
    }

    /// Resolve `key` with the active language; `None` before start.
    pub async fn t(&self, key: &str) -> Option<String> {
        let state = self.state.lock().await;
        state.translator.as_ref().map(|t| t.t(key))
    }
}
