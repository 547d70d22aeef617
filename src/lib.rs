//! page-i18n
//!
//! Loads i18next-style `translation.json` bundles with language detection and
//! fallback, then writes the resolved strings into a page.

pub mod app;
pub mod backend;
pub mod config;
pub mod detector;
pub mod initializer;
pub mod input;
pub mod session;
pub mod translator;
pub mod view;

mod test_utils;

pub use initializer::{
    InitError,
    Initializer,
};
pub use session::Localizer;
pub use translator::Translator;
