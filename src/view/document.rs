//! Minimal DOM surface the view updater writes to.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Where a translated string goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The document title.
    Title,
    /// First element with this tag name.
    Tag(&'static str),
    /// `label[for="..."]`
    LabelFor(&'static str),
    /// Element with this id.
    Id(&'static str),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Tag(tag) => f.write_str(tag),
            Self::LabelFor(id) => write!(f, "label[for=\"{id}\"]"),
            Self::Id(id) => write!(f, "#{id}"),
        }
    }
}

/// A page whose text content can be overwritten.
pub trait Document {
    /// Replace the text of `target`. Returns `false` when no element matches.
    fn set_text(&mut self, target: Target, text: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `for` attribute of a label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_for: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), id: None, label_for: None, text: String::new() }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn labelling(mut self, id: impl Into<String>) -> Self {
        self.label_for = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    fn matches(&self, target: Target) -> bool {
        match target {
            Target::Title => false,
            Target::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
            Target::LabelFor(id) => {
                self.tag.eq_ignore_ascii_case("label") && self.label_for.as_deref() == Some(id)
            }
            Target::Id(id) => self.id.as_deref() == Some(id),
        }
    }
}

/// In-memory page: a title and a flat list of elements in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDocument {
    pub title: String,
    pub elements: Vec<Element>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), elements: Vec::new() }
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// The color detector page with its markup defaults.
    #[must_use]
    pub fn page() -> Self {
        Self::new("Color Detector")
            .with_element(Element::new("h1").with_text("Color Detector"))
            .with_element(
                Element::new("h2").with_text("Upload an image to find its dominant color"),
            )
            .with_element(Element::new("label").labelling("image").with_text("Choose an image"))
            .with_element(Element::new("input").with_id("image"))
            .with_element(
                Element::new("label").labelling("cameraInput").with_text("Take a picture"),
            )
            .with_element(Element::new("input").with_id("cameraInput"))
            .with_element(
                Element::new("div").with_id("drop-area").with_text("Drag & drop an image here"),
            )
            .with_element(Element::new("p").with_id("placeholder").with_text("No image selected"))
            .with_element(Element::new("button").with_id("detectBtn").with_text("Detect color"))
    }

    /// Current text of `target`, or `None` when nothing matches.
    #[must_use]
    pub fn text(&self, target: Target) -> Option<&str> {
        if target == Target::Title {
            return Some(&self.title);
        }
        self.elements.iter().find(|e| e.matches(target)).map(|e| e.text.as_str())
    }

    /// Remove the first element matching `target`.
    pub fn remove(&mut self, target: Target) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.matches(target))?;
        Some(self.elements.remove(index))
    }
}

impl Document for MemoryDocument {
    fn set_text(&mut self, target: Target, text: &str) -> bool {
        if target == Target::Title {
            text.clone_into(&mut self.title);
            return true;
        }
        match self.elements.iter_mut().find(|e| e.matches(target)) {
            Some(element) => {
                text.clone_into(&mut element.text);
                true
            }
            None => false,
        }
    }
}
