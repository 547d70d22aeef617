//! Translation bundle definitions

use std::collections::HashMap;

use serde_json::Value;

/// Normalize a locale code: `_` becomes `-`, the language subtag is
/// lowercased and a two-letter region subtag is uppercased.
///
/// # Examples
/// ```
/// use page_i18n::input::translation::normalize_language_code;
///
/// assert_eq!(normalize_language_code("en_us"), "en-US");
/// assert_eq!(normalize_language_code("ZH-Hant-tw"), "zh-Hant-TW");
/// ```
#[must_use]
pub fn normalize_language_code(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(index, part)| {
            if index == 0 {
                part.to_lowercase()
            } else if part.len() == 2 {
                part.to_uppercase()
            } else if part.len() == 4 {
                let mut chars = part.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                })
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Language-only part of a locale code (`en-US` → `en`).
///
/// Returns `None` when the code has no region or script part.
#[must_use]
pub fn language_only(code: &str) -> Option<&str> {
    code.split_once(['-', '_']).map(|(language, _)| language).filter(|l| !l.is_empty())
}

/// Language and script of a code that also carries a region
/// (`zh-Hant-TW` → `zh-Hant`).
///
/// Returns `None` unless a four-letter script subtag is followed by more
/// subtags.
#[must_use]
pub fn language_with_script(code: &str) -> Option<&str> {
    let mut parts = code.splitn(3, ['-', '_']);
    let language = parts.next().filter(|l| !l.is_empty())?;
    let script =
        parts.next().filter(|s| s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic()))?;
    parts.next().filter(|rest| !rest.is_empty())?;
    code.get(..language.len() + 1 + script.len())
}

/// Key → string map for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    language: String,

    /// Flattened translation key map (e.g., "common.hello" -> "Hello").
    keys: HashMap<String, String>,
}

impl Bundle {
    #[must_use]
    pub const fn new(language: String, keys: HashMap<String, String>) -> Self {
        Self { language, keys }
    }

    /// Build a bundle from a parsed `translation.json`.
    #[must_use]
    pub fn from_json(language: impl Into<String>, json: &Value, separator: &str) -> Self {
        Self::new(language.into(), flatten_json(json, separator, None))
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Flatten nested JSON object into dot-separated key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use page_i18n::input::translation::flatten_json;
///
/// let json = json!({
///     "common": {
///         "hello": "Hello",
///         "goodbye": "Goodbye"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("common.hello"), Some(&"Hello".to_string()));
/// assert_eq!(flattened.get("common.goodbye"), Some(&"Goodbye".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}
