use std::collections::{BTreeMap, HashMap};

/// A node the presentation layer can write to: text content, inline style
/// properties and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub text: String,
    pub style: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.style.insert(property.to_string(), value.into());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Host document addressed by element id.
pub trait Document {
    fn element_mut(&mut self, id: &str) -> Option<&mut Element>;
    fn body_mut(&mut self) -> &mut Element;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    body: Element,
    elements: HashMap<String, Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), Element::default());
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn body(&self) -> &Element {
        &self.body
    }
}

impl Document for MemoryDocument {
    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }
}
