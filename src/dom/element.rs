use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Serializable snapshot of an element subtree.
///
/// This is the interchange format between the in-page extraction script and
/// [`Document`](crate::dom::Document), and the shape the CLI dumps as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementNode {
    /// HTML tag name (e.g., "div", "button", "input")
    pub tag_name: String,

    /// Element attributes, in source order
    #[serde(default)]
    pub attributes: IndexMap<String, String>,

    /// Direct text of the element (text nodes that are its own children)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    /// Child elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Create a new ElementNode
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            text_content: None,
            children: Vec::new(),
        }
    }

    /// Builder method: set attributes
    pub fn with_attributes(mut self, attributes: IndexMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder method: add one attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Builder method: set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<ElementNode>) -> Self {
        self.children = children;
        self
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Add a child element
    pub fn add_child(&mut self, child: ElementNode) {
        self.children.push(child);
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Check if element has a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        if let Some(classes) = self.attributes.get("class") {
            classes.split_whitespace().any(|c| c == class_name)
        } else {
            false
        }
    }

    /// Get element ID
    pub fn id(&self) -> Option<&String> {
        self.attributes.get("id")
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Count this element and all of its descendants
    pub fn count_elements(&self) -> usize {
        1 + self.children.iter().map(ElementNode::count_elements).sum::<usize>()
    }

    /// Convert to a simplified string representation
    pub fn to_simple_string(&self) -> String {
        let mut parts = vec![format!("<{}", self.tag_name)];

        if let Some(id) = self.id() {
            parts.push(format!(" id=\"{}\"", id));
        }

        if let Some(class) = self.attributes.get("class") {
            parts.push(format!(" class=\"{}\"", class));
        }

        for key in ["role", "aria-label"] {
            if let Some(value) = self.attributes.get(key) {
                parts.push(format!(" {}=\"{}\"", key, value));
            }
        }

        parts.push(">".to_string());

        if let Some(text) = &self.text_content {
            if !text.trim().is_empty() {
                parts.push(text.trim().to_string());
            }
        }

        parts.join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node_creation() {
        let mut attrs = IndexMap::new();
        attrs.insert("id".to_string(), "__search".to_string());
        attrs.insert("class".to_string(), "md-toggle".to_string());

        let element = ElementNode::new("input")
            .with_attributes(attrs)
            .with_attribute("data-md-toggle", "search");

        assert_eq!(element.tag_name, "input");
        assert_eq!(element.id(), Some(&"__search".to_string()));
        assert_eq!(element.get_attribute("data-md-toggle"), Some(&"search".to_string()));
        let keys: Vec<_> = element.attributes.keys().cloned().collect();
        assert_eq!(keys, vec!["id", "class", "data-md-toggle"]);
    }

    #[test]
    fn test_has_class() {
        let mut element = ElementNode::new("div");
        element.add_attribute("class", "md-search md-search--active");

        assert!(element.has_class("md-search"));
        assert!(element.has_class("md-search--active"));
        assert!(!element.has_class("md-search__form"));
    }

    #[test]
    fn test_count_elements() {
        let mut body = ElementNode::new("body");
        let mut main = ElementNode::new("main");
        main.add_child(ElementNode::new("h1").with_text("Title"));
        body.add_child(ElementNode::new("header"));
        body.add_child(main);

        assert_eq!(body.count_elements(), 4);
    }

    #[test]
    fn test_serialization() {
        let element = ElementNode::new("a")
            .with_attribute("href", "#main-content")
            .with_text("Skip to main content");

        let json = serde_json::to_string(&element).unwrap();
        let deserialized: ElementNode = serde_json::from_str(&json).unwrap();

        assert_eq!(element, deserialized);
        assert!(!json.contains("children"));
    }

    #[test]
    fn test_to_simple_string() {
        let element = ElementNode::new("form")
            .with_attribute("class", "md-search__form")
            .with_attribute("role", "search")
            .with_attribute("aria-label", "Search documentation");

        let simple = element.to_simple_string();
        assert!(simple.starts_with("<form"));
        assert!(simple.contains("class=\"md-search__form\""));
        assert!(simple.contains("role=\"search\""));
        assert!(simple.contains("aria-label=\"Search documentation\""));
    }
}
