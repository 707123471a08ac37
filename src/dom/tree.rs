use crate::dom::element::ElementNode;
use crate::dom::events::{KeyListener, KeyboardEvent, ListenerTarget, RegisteredListener};
use crate::dom::selector::Selector;
use crate::error::Result;
use ego_tree::NodeRef;
use html5ever::{LocalName, Namespace, QualName};
use scraper::node::{Attributes, Element, Text};
use scraper::{CaseSensitivity, Html, Node, StrTendril};
use std::rc::Rc;

/// Handle to a node inside a [`Document`]
pub use ego_tree::NodeId;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// A mutable page document.
///
/// The tree is a parsed [`scraper::Html`] whose nodes are addressed by
/// [`NodeId`]; doctype and comments stay in it so a page can be written back
/// as it was read. Besides the tree, the document carries the interaction
/// state page scripts rely on: the focused element, registered key listeners
/// and a log of click activations.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
    root: NodeId,
    focused: Option<NodeId>,
    listeners: Vec<RegisteredListener>,
    clicks: Vec<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty `<html><head></head><body></body></html>` document
    pub fn new() -> Self {
        Self::from_html(Html::parse_document(""))
    }

    /// Document without doctype holding a single empty root element
    pub(crate) fn with_root(tag_name: &str) -> Self {
        let mut html = Html::new_document();
        let root = html.tree.root_mut().append(Node::Element(new_element(tag_name))).id();
        Self::from_parts(html, root)
    }

    /// Wrap a parsed page; a missing root element is created
    pub(crate) fn from_html(mut html: Html) -> Self {
        let existing = html
            .tree
            .root()
            .children()
            .find(|child| child.value().is_element())
            .map(|child| child.id());

        let root = match existing {
            Some(root) => root,
            None => html.tree.root_mut().append(Node::Element(new_element("html"))).id(),
        };
        Self::from_parts(html, root)
    }

    fn from_parts(html: Html, root: NodeId) -> Self {
        Self {
            html,
            root,
            focused: None,
            listeners: Vec::new(),
            clicks: Vec::new(),
        }
    }

    /// Build a document from an element snapshot (e.g. one extracted from a live page).
    ///
    /// A snapshot keeps only the direct text of each element, not where it
    /// sat between child elements, so that text becomes a single text node
    /// placed before the element's children. Interleaved text such as
    /// `<p>a<b>b</b>c</p>` comes back as `<p>ac<b>b</b></p>`.
    pub fn from_element(root: &ElementNode) -> Self {
        let mut doc = Self::with_root(&root.tag_name);
        let root_id = doc.root;
        doc.import_element_contents(root_id, root);
        doc
    }

    fn import_element_contents(&mut self, id: NodeId, element: &ElementNode) {
        for (key, value) in &element.attributes {
            self.set_attribute(id, key, value);
        }

        if let Some(text) = &element.text_content {
            let text_node = self.create_text(text);
            self.append_child(id, text_node);
        }

        for child in &element.children {
            let child_id = self.create_element(&child.tag_name);
            self.append_child(id, child_id);
            self.import_element_contents(child_id, child);
        }
    }

    /// Snapshot the document as an [`ElementNode`] tree rooted at the root element
    pub fn to_element(&self) -> ElementNode {
        self.element_snapshot(self.root)
    }

    fn element_snapshot(&self, id: NodeId) -> ElementNode {
        let mut element = ElementNode::new(self.tag_name(id).unwrap_or_default());

        for (name, value) in self.attributes(id) {
            element.add_attribute(name, value);
        }

        let mut text = String::new();
        for child in self.children(id) {
            if self.is_element(child) {
                element.add_child(self.element_snapshot(child));
            } else if let Some(value) = self.text(child) {
                text.push_str(value);
            }
        }

        if !text.trim().is_empty() {
            element.text_content = Some(text.trim().to_string());
        }

        element
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_, Node>> {
        self.html.tree.get(id)
    }

    pub(crate) fn html(&self) -> &Html {
        &self.html
    }

    fn element(&self, id: NodeId) -> Option<&Element> {
        self.node_ref(id)?.value().as_element()
    }

    /// The root element (normally `<html>`)
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The first `<body>` element in document order
    pub fn body(&self) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|&id| self.tag_name(id) == Some("body"))
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(Element::name)
    }

    /// Text of a text node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node_ref(id)?.value().as_text().map(|text| &**text)
    }

    /// Attributes of an element in source order; empty for other nodes
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.element(id).into_iter().flat_map(Element::attrs)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Set an attribute; returns whether the stored value changed.
    /// Non-element nodes are left alone.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        let name = name.to_ascii_lowercase();
        let Some(element) = self.element(id) else {
            return false;
        };
        if element.attr(&name) == Some(value) {
            return false;
        }

        let mut attrs = element.attrs.clone();
        attrs.insert(attribute_name(&name), StrTendril::from_slice(value));
        self.replace_attributes(id, attrs);
        true
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        let mut attrs = self.element(id)?.attrs.clone();
        let removed = attrs.shift_remove(&attribute_name(name))?;
        self.replace_attributes(id, attrs);
        Some(removed.to_string())
    }

    // Elements cache their id and classes for selector matching, so every
    // attribute change builds a fresh element.
    fn replace_attributes(&mut self, id: NodeId, attrs: Attributes) {
        let Some(mut node) = self.html.tree.get_mut(id) else {
            return;
        };
        if let Node::Element(element) = node.value() {
            let mut rebuilt = Element::new(element.name.clone(), Vec::new());
            rebuilt.attrs = attrs;
            *element = rebuilt;
        }
    }

    pub fn has_class(&self, id: NodeId, class_name: &str) -> bool {
        self.element(id)
            .is_some_and(|element| element.has_class(class_name, CaseSensitivity::CaseSensitive))
    }

    /// Short CSS-like label for logs and reports, e.g. `input#q.md-search__input`
    pub fn describe(&self, id: NodeId) -> String {
        let Some(tag_name) = self.tag_name(id) else {
            return match self.node_ref(id).map(|node| node.value()) {
                Some(Node::Comment(_)) => "#comment".to_string(),
                _ => "#text".to_string(),
            };
        };

        let mut label = tag_name.to_string();
        if let Some(element_id) = self.attribute(id, "id") {
            label.push('#');
            label.push_str(element_id);
        }
        for class in self.attribute(id, "class").unwrap_or_default().split_whitespace() {
            label.push('.');
            label.push_str(class);
        }
        label
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_ref(id)?.parent().map(|parent| parent.id())
    }

    /// Parent, if it is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|&parent| self.is_element(parent))
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node_ref(id)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default()
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node_ref(id)?.first_child().map(|child| child.id())
    }

    fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node_ref(id)?.last_child().map(|child| child.id())
    }

    fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node_ref(id)?.prev_sibling().map(|sibling| sibling.id())
    }

    /// Whether `ancestor` is `id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// All nodes below `id` (excluding `id`) in document order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        self.node_ref(id)
            .map(|node| node.descendants().skip(1).map(|descendant| descendant.id()).collect())
            .unwrap_or_default()
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.html.tree.orphan(Node::Element(new_element(tag_name))).id()
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        let text = Text {
            text: StrTendril::from_slice(text),
        };
        self.html.tree.orphan(Node::Text(text)).id()
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(mut node) = self.html.tree.get_mut(id) {
            node.detach();
        }
    }

    /// Insert `child` under `parent` before `reference` (or at the end when
    /// `reference` is `None`), moving it out of its current position.
    ///
    /// Returns `false` without touching the tree when `reference` is not a
    /// child of `parent`, when `parent` is not an element, or when the
    /// insertion would make a node its own ancestor.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) -> bool {
        if !self.is_element(parent) || self.node_ref(child).is_none() || self.is_inclusive_ancestor(child, parent) {
            return false;
        }
        if reference.is_some_and(|r| r == child || self.parent(r) != Some(parent)) {
            return false;
        }

        // Already in place; ego-tree would link the node to itself
        let in_place = match reference {
            Some(reference) => self.previous_sibling(reference) == Some(child),
            None => self.last_child(parent) == Some(child),
        };
        if in_place {
            return true;
        }

        let target = reference.unwrap_or(parent);
        let Some(mut node) = self.html.tree.get_mut(target) else {
            return false;
        };
        if reference.is_some() {
            node.insert_id_before(child);
        } else {
            node.append_id(child);
        }
        true
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` as the first child of `parent`
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        match self.first_child(parent) {
            Some(first) if first == child => self.is_element(parent),
            first => self.insert_before(parent, child, first),
        }
    }

    /// Replace the children of `id` with a single text node
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if !self.is_element(id) {
            if let Some(mut node) = self.html.tree.get_mut(id) {
                if let Node::Text(value) = node.value() {
                    value.text = StrTendril::from_slice(text);
                }
            }
            return;
        }

        for child in self.children(id) {
            self.detach(child);
        }

        let text_node = self.create_text(text);
        self.append_child(id, text_node);
    }

    /// Concatenated text of `id` and its descendants; comments are skipped
    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.node_ref(id) else {
            return String::new();
        };

        node.descendants()
            .filter_map(|descendant| descendant.value().as_text())
            .map(|text| &**text)
            .collect()
    }

    fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(self.root).chain(self.descendants(self.root))
    }

    /// First element in the document matching `selector`
    pub fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        self.elements().find(|&id| selector.matches(self, id))
    }

    /// All elements matching `selector`, in document order
    pub fn select_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.elements().filter(|&id| selector.matches(self, id)).collect()
    }

    /// First descendant of `scope` matching `selector`
    pub fn select_first_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&id| selector.matches(self, id))
    }

    /// Parse `selector` and return the first match
    pub fn query(&self, selector: &str) -> Result<Option<NodeId>> {
        Ok(self.select_first(&Selector::parse(selector)?))
    }

    /// Parse `selector` and return every match
    pub fn query_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        Ok(self.select_all(&Selector::parse(selector)?))
    }

    /// Element whose `id` attribute equals `id`
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements().find(|&node| self.attribute(node, "id") == Some(id))
    }

    /// Move focus to an attached element; returns whether focus moved
    pub fn focus(&mut self, id: NodeId) -> bool {
        if !self.is_element(id) || !self.is_inclusive_ancestor(self.root, id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// The focused element, if any
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    /// Activate an element the way a pointer click would.
    ///
    /// The activation is logged (see [`Document::take_clicks`]) and the
    /// default action runs: checkboxes toggle `checked`, radios become
    /// `checked`, and a `label[for]` forwards the click to its control.
    pub fn click(&mut self, id: NodeId) {
        if !self.is_element(id) {
            return;
        }
        self.clicks.push(id);

        let tag_name = self.tag_name(id).map(str::to_string);
        match tag_name.as_deref() {
            Some("input") => match self.attribute(id, "type").map(str::to_ascii_lowercase).as_deref() {
                Some("checkbox") => {
                    if self.remove_attribute(id, "checked").is_none() {
                        self.set_attribute(id, "checked", "");
                    }
                }
                Some("radio") => {
                    self.set_attribute(id, "checked", "");
                }
                _ => {}
            },
            Some("label") => {
                let control = self
                    .attribute(id, "for")
                    .and_then(|target| self.element_by_id(target))
                    .filter(|&control| control != id && self.tag_name(control) != Some("label"));
                if let Some(control) = control {
                    self.click(control);
                }
            }
            _ => {}
        }
    }

    /// Drain the log of clicked elements, oldest first
    pub fn take_clicks(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.clicks)
    }

    /// Register a key listener; a target holds at most one listener per id.
    /// Returns whether the listener was added.
    pub fn add_key_listener(&mut self, target: ListenerTarget, listener: Rc<dyn KeyListener>) -> bool {
        if self.has_key_listener(target, listener.id()) {
            return false;
        }
        self.listeners.push(RegisteredListener { target, listener });
        true
    }

    pub fn has_key_listener(&self, target: ListenerTarget, id: &str) -> bool {
        self.listeners
            .iter()
            .any(|registered| registered.target == target && registered.listener.id() == id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch a key event at `target`: listeners on the target run first,
    /// then on each ancestor, then document-level listeners.
    pub fn dispatch_key(&mut self, target: Option<NodeId>, key: &str) -> KeyboardEvent {
        let mut event = KeyboardEvent::new(key, target);

        let mut path = Vec::new();
        let mut current = target.filter(|&id| self.is_element(id));
        while let Some(id) = current {
            path.push(ListenerTarget::Node(id));
            current = self.parent_element(id);
        }
        path.push(ListenerTarget::Document);

        for step in path {
            let listeners: Vec<Rc<dyn KeyListener>> = self
                .listeners
                .iter()
                .filter(|registered| registered.target == step)
                .map(|registered| Rc::clone(&registered.listener))
                .collect();

            for listener in listeners {
                listener.handle_key(self, step, &mut event);
            }
        }

        event
    }

    /// Dispatch a key event at the focused element (document listeners only
    /// when nothing has focus)
    pub fn press_key(&mut self, key: &str) -> KeyboardEvent {
        self.dispatch_key(self.focused, key)
    }
}

fn new_element(tag_name: &str) -> Element {
    let name = QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from(tag_name.to_ascii_lowercase()),
    );
    Element::new(name, Vec::new())
}

fn attribute_name(name: &str) -> QualName {
    QualName::new(None, Namespace::from(""), LocalName::from(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn create_test_tree() -> ElementNode {
        let mut root = ElementNode::new("html");
        let mut body = ElementNode::new("body");

        let mut header = ElementNode::new("header");
        header.add_child(
            ElementNode::new("label")
                .with_attribute("for", "__drawer")
                .with_attribute("class", "md-header__button")
                .with_text("Menu"),
        );
        body.add_child(
            ElementNode::new("input")
                .with_attribute("type", "checkbox")
                .with_attribute("id", "__drawer")
                .with_attribute("data-md-toggle", "drawer"),
        );
        body.add_child(header);

        let mut main = ElementNode::new("main");
        main.add_child(ElementNode::new("h1").with_text("Welcome"));
        body.add_child(main);

        root.add_child(body);
        root
    }

    struct Recorder {
        id: &'static str,
        seen: Rc<RefCell<Vec<(ListenerTarget, String)>>>,
    }

    impl KeyListener for Recorder {
        fn id(&self) -> &str {
            self.id
        }

        fn handle_key(&self, _doc: &mut Document, current: ListenerTarget, event: &mut KeyboardEvent) {
            self.seen.borrow_mut().push((current, event.key().to_string()));
        }
    }

    #[test]
    fn test_new_document_has_body() {
        let doc = Document::new();
        assert_eq!(doc.tag_name(doc.root()), Some("html"));
        assert!(doc.body().is_some());
    }

    #[test]
    fn test_from_element_and_back() {
        let doc = Document::from_element(&create_test_tree());
        let body = doc.body().unwrap();
        assert_eq!(doc.children(body).len(), 3);

        let snapshot = doc.to_element();
        assert_eq!(snapshot, create_test_tree());
        assert_eq!(snapshot.count_elements(), 7);
    }

    #[test]
    fn test_snapshot_text_is_placed_before_children() {
        let doc = Document::parse("<p>before <b>bold</b> after</p>");
        let snapshot = doc.query("p").unwrap().map(|p| doc.element_snapshot(p)).unwrap();
        assert_eq!(snapshot.text_content.as_deref(), Some("before  after"));

        let rebuilt = Document::from_element(&snapshot);
        assert_eq!(rebuilt.outer_html(rebuilt.root()), "<p>before  after<b>bold</b></p>");
    }

    #[test]
    fn test_set_attribute_reports_change() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();

        assert!(doc.set_attribute(body, "Role", "main"));
        assert!(!doc.set_attribute(body, "role", "main"));
        assert_eq!(doc.attribute(body, "role"), Some("main"));
        assert!(doc.set_attribute(body, "role", "document"));
        assert_eq!(doc.remove_attribute(body, "role"), Some("document".to_string()));
        assert!(!doc.has_attribute(body, "role"));
    }

    #[test]
    fn test_describe() {
        let doc = Document::parse(r#"<input id="q" class="md-search__input md-input">"#);
        let input = doc.query("input").unwrap().unwrap();
        assert_eq!(doc.describe(input), "input#q.md-search__input.md-input");
    }

    #[test]
    fn test_prepend_and_insert_before() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();
        let first = doc.create_element("p");
        let second = doc.create_element("a");

        assert!(doc.append_child(body, first));
        assert!(doc.prepend_child(body, second));
        assert_eq!(doc.children(body), vec![second, first]);

        // Moving an attached node keeps a single copy
        assert!(doc.append_child(body, second));
        assert_eq!(doc.children(body), vec![first, second]);
    }

    #[test]
    fn test_reinserting_in_place_keeps_order() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();
        let first = doc.create_element("a");
        let second = doc.create_element("p");
        doc.append_child(body, first);
        doc.append_child(body, second);

        assert!(doc.prepend_child(body, first));
        assert!(doc.append_child(body, second));
        assert!(doc.insert_before(body, first, Some(second)));

        assert_eq!(doc.children(body), vec![first, second]);
        assert_eq!(doc.descendants(body), vec![first, second]);
    }

    #[test]
    fn test_insert_rejects_cycles_and_foreign_reference() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        doc.append_child(body, outer);
        doc.append_child(outer, inner);

        assert!(!doc.append_child(inner, outer));
        assert!(!doc.insert_before(body, inner, Some(inner)));

        let stray = doc.create_element("em");
        assert!(!doc.insert_before(outer, stray, Some(body)));
        assert_eq!(doc.parent(stray), None);
    }

    #[test]
    fn test_set_text_and_text_content() {
        let mut doc = Document::new();
        let body = doc.body().unwrap();
        let heading = doc.create_element("h2");
        doc.append_child(body, heading);
        doc.set_text(heading, "Search Documentation");
        assert_eq!(doc.text_content(heading), "Search Documentation");

        doc.set_text(heading, "Other");
        assert_eq!(doc.children(heading).len(), 1);
        assert_eq!(doc.text_content(body), "Other");
    }

    #[test]
    fn test_text_content_skips_comments() {
        let doc = Document::parse("<body><h2>Search<!-- hidden --> docs</h2></body>");
        let heading = doc.query("h2").unwrap().unwrap();
        assert_eq!(doc.text_content(heading), "Search docs");

        let comment = doc.children(heading)[1];
        assert_eq!(doc.describe(comment), "#comment");
        assert_eq!(doc.text(comment), None);
    }

    #[test]
    fn test_click_toggles_checkbox_and_follows_label() {
        let mut doc = Document::from_element(&create_test_tree());
        let toggle = doc.element_by_id("__drawer").unwrap();
        let label = doc.query("label[for]").unwrap().unwrap();

        doc.click(toggle);
        assert!(doc.has_attribute(toggle, "checked"));

        doc.click(label);
        assert!(!doc.has_attribute(toggle, "checked"));

        assert_eq!(doc.take_clicks(), vec![toggle, label, toggle]);
        assert!(doc.take_clicks().is_empty());
    }

    #[test]
    fn test_dispatch_bubbles_then_reaches_document() {
        let mut doc = Document::from_element(&create_test_tree());
        let main = doc.query("main").unwrap().unwrap();
        let heading = doc.query("h1").unwrap().unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));

        doc.add_key_listener(
            ListenerTarget::Document,
            Rc::new(Recorder { id: "doc", seen: Rc::clone(&seen) }),
        );
        doc.add_key_listener(
            ListenerTarget::Node(main),
            Rc::new(Recorder { id: "main", seen: Rc::clone(&seen) }),
        );

        doc.dispatch_key(Some(heading), "Tab");

        assert_eq!(
            *seen.borrow(),
            vec![
                (ListenerTarget::Node(main), "Tab".to_string()),
                (ListenerTarget::Document, "Tab".to_string()),
            ]
        );
    }

    #[test]
    fn test_listener_registration_is_deduplicated() {
        let mut doc = Document::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let listener: Rc<dyn KeyListener> = Rc::new(Recorder { id: "once", seen: Rc::clone(&seen) });

        assert!(doc.add_key_listener(ListenerTarget::Document, Rc::clone(&listener)));
        assert!(!doc.add_key_listener(ListenerTarget::Document, listener));
        assert_eq!(doc.listener_count(), 1);

        doc.press_key("Escape");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_focus_requires_attached_element() {
        let mut doc = Document::new();
        let detached = doc.create_element("input");
        assert!(!doc.focus(detached));

        let body = doc.body().unwrap();
        doc.append_child(body, detached);
        assert!(doc.focus(detached));
        assert_eq!(doc.active_element(), Some(detached));

        doc.blur();
        assert_eq!(doc.active_element(), None);
    }
}
