//! Writing resolved strings into page targets.

mod document;
mod updater;

pub use document::{
    Document,
    Element,
    MemoryDocument,
    Target,
};
pub use updater::{
    Binding,
    PAGE_BINDINGS,
    UpdateReport,
    apply_bindings,
    update_content,
};
