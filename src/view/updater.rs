//! Applies translation keys to page targets in one linear pass.

use super::document::{
    Document,
    Target,
};
use crate::translator::Translator;

/// One translation key and every target that shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub key: &'static str,
    pub targets: &'static [Target],
}

/// Bindings of the color detector page.
pub const PAGE_BINDINGS: &[Binding] = &[
    Binding { key: "title", targets: &[Target::Title, Target::Tag("h1")] },
    Binding { key: "subtitle", targets: &[Target::Tag("h2")] },
    Binding { key: "chooseImage", targets: &[Target::LabelFor("image")] },
    Binding { key: "takePicture", targets: &[Target::LabelFor("cameraInput")] },
    Binding { key: "detectColor", targets: &[Target::Id("detectBtn")] },
    Binding { key: "dragDrop", targets: &[Target::Id("drop-area")] },
    Binding { key: "noImage", targets: &[Target::Id("placeholder")] },
];

/// Outcome of one update pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub updated: Vec<Target>,
    /// Targets absent from the document. The pass continued past them.
    pub skipped: Vec<Target>,
}

impl UpdateReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Write every binding of `bindings` into `document`.
///
/// A missing target is skipped and recorded; it never aborts the pass.
pub fn apply_bindings<D: Document + ?Sized>(
    translator: &Translator,
    document: &mut D,
    bindings: &[Binding],
) -> UpdateReport {
    let mut report = UpdateReport::default();

    for binding in bindings {
        let text = translator.t(binding.key);
        for &target in binding.targets {
            if document.set_text(target, &text) {
                report.updated.push(target);
            } else {
                tracing::warn!(key = binding.key, %target, "Target not found, skipping");
                report.skipped.push(target);
            }
        }
    }

    tracing::debug!(
        language = translator.language(),
        updated = report.updated.len(),
        skipped = report.skipped.len(),
        "Content updated"
    );
    report
}

/// Write the page bindings into `document` using the active language.
pub fn update_content<D: Document + ?Sized>(
    translator: &Translator,
    document: &mut D,
) -> UpdateReport {
    apply_bindings(translator, document, PAGE_BINDINGS)
}
