//! Helpers shared by the unit test modules.
#![cfg(test)]

use std::collections::HashMap;

use crate::input::translation::Bundle;
use crate::translator::TranslatorOptions;

/// Bundle for `language` from literal key/value pairs.
pub(crate) fn bundle(language: &str, pairs: &[(&str, &str)]) -> Bundle {
    let keys: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    Bundle::new(language.to_string(), keys)
}

/// Default lookup options with the given fallback language.
pub(crate) fn options(fallback_lng: &str) -> TranslatorOptions {
    TranslatorOptions {
        fallback_lng: fallback_lng.to_string(),
        debug: false,
        key_separator: ".".to_string(),
        ns: "translation".to_string(),
    }
}

/// English bundle carrying every page key.
pub(crate) fn english_page_bundle() -> Bundle {
    bundle(
        "en",
        &[
            ("title", "Color Detector"),
            ("subtitle", "Find the dominant color of any image"),
            ("chooseImage", "Choose Image"),
            ("takePicture", "Take Picture"),
            ("detectColor", "Detect Color"),
            ("dragDrop", "Drag & Drop an image here"),
            ("noImage", "No image selected yet"),
        ],
    )
}
