//! Accessibility enhancements
//!
//! Each enhancement is one guarded, idempotent patch of the theme's DOM. The
//! [`Normalizer`] runs the registered enhancements in order against a
//! document the caller owns and reports what actually changed.

pub mod config;
pub mod headings;
pub mod keyboard;
pub mod landmarks;
pub mod palette;
pub mod search;

pub use config::{CompiledSelectors, NormalizerConfig, ThemeSelectors};
pub use headings::HeadingOrderAudit;
pub use keyboard::{ActivateOnKeys, CloseSearchOnEscape, EscapeClosesSearch, ToggleKeyboardActivation};
pub use landmarks::{MainContent, SkipLink};
pub use palette::{PaletteOptionLabels, PaletteSwitcherLabel};
pub use search::{SearchDialogLabel, SearchFormLabel, SearchInputLabel};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::dom::{Document, KeyListener, ListenerTarget, NodeId};
use crate::error::{A11yError, Result};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// One named DOM patch
pub trait Enhancement {
    /// Stable name, used to disable the enhancement in configuration
    fn name(&self) -> &str;

    /// One-line summary for listings
    fn description(&self) -> &str;

    /// Apply the patch. Missing targets mean there is nothing to do.
    fn apply(&self, ctx: &mut EnhanceContext<'_>);
}

/// A change made to the document during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Change {
    SetAttribute {
        enhancement: String,
        element: String,
        name: String,
        value: String,
    },
    InsertElement {
        enhancement: String,
        element: String,
        parent: String,
    },
    AttachListener {
        enhancement: String,
        target: String,
        listener: String,
    },
}

impl Change {
    pub fn enhancement(&self) -> &str {
        match self {
            Change::SetAttribute { enhancement, .. }
            | Change::InsertElement { enhancement, .. }
            | Change::AttachListener { enhancement, .. } => enhancement,
        }
    }

    /// Whether the change survives serialization to static HTML
    pub fn is_structural(&self) -> bool {
        !matches!(self, Change::AttachListener { .. })
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::SetAttribute {
                enhancement,
                element,
                name,
                value,
            } => write!(f, "[{}] {}: {}=\"{}\"", enhancement, element, name, value),
            Change::InsertElement {
                enhancement,
                element,
                parent,
            } => write!(f, "[{}] inserted {} into {}", enhancement, element, parent),
            Change::AttachListener {
                enhancement,
                target,
                listener,
            } => write!(f, "[{}] {} listens with {}", enhancement, target, listener),
        }
    }
}

/// Outcome of a normalizer run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnhanceReport {
    pub changes: Vec<Change>,
    pub diagnostics: Vec<Diagnostic>,
}

impl EnhanceReport {
    /// True when the run changed nothing
    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }

    /// True when no attribute or node changed (listeners aside)
    pub fn is_structurally_clean(&self) -> bool {
        !self.changes.iter().any(Change::is_structural)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    pub fn changes_by(&self, enhancement: &str) -> impl Iterator<Item = &Change> {
        self.changes.iter().filter(move |c| c.enhancement() == enhancement)
    }
}

/// Context passed to enhancements: the document, compiled selectors and
/// the diagnostic sink. Mutations made through the context are recorded.
pub struct EnhanceContext<'a> {
    doc: &'a mut Document,
    selectors: &'a CompiledSelectors,
    sink: &'a mut dyn DiagnosticSink,
    current: String,
    report: EnhanceReport,
}

impl<'a> EnhanceContext<'a> {
    pub fn new(doc: &'a mut Document, selectors: &'a CompiledSelectors, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            doc,
            selectors,
            sink,
            current: String::new(),
            report: EnhanceReport::default(),
        }
    }

    pub fn doc(&self) -> &Document {
        &*self.doc
    }

    pub fn selectors(&self) -> &'a CompiledSelectors {
        self.selectors
    }

    /// Set an attribute, recording it when the value changed
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> bool {
        let changed = self.doc.set_attribute(node, name, value);
        if changed {
            self.record(Change::SetAttribute {
                enhancement: self.current.clone(),
                element: self.doc.describe(node),
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        changed
    }

    /// Set an attribute only when it is missing
    pub fn set_attribute_if_missing(&mut self, node: NodeId, name: &str, value: &str) -> bool {
        if self.doc.has_attribute(node, name) {
            return false;
        }
        self.set_attribute(node, name, value)
    }

    /// Build a detached element with attributes and optional text
    pub fn create_element(&mut self, tag_name: &str, attributes: &[(&str, &str)], text: Option<&str>) -> NodeId {
        let element = self.doc.create_element(tag_name);
        for (name, value) in attributes {
            self.doc.set_attribute(element, name, value);
        }
        if let Some(text) = text {
            self.doc.set_text(element, text);
        }
        element
    }

    /// Insert `child` as the first child of `parent`, recording the insertion
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let inserted = self.doc.prepend_child(parent, child);
        if inserted {
            self.record(Change::InsertElement {
                enhancement: self.current.clone(),
                element: self.doc.describe(child),
                parent: self.doc.describe(parent),
            });
        }
        inserted
    }

    /// Attach a key listener, recording it when it was not already attached
    pub fn add_key_listener(&mut self, target: ListenerTarget, listener: Rc<dyn KeyListener>) -> bool {
        let listener_id = listener.id().to_string();
        let added = self.doc.add_key_listener(target, listener);
        if added {
            let target = match target {
                ListenerTarget::Document => "document".to_string(),
                ListenerTarget::Node(node) => self.doc.describe(node),
            };
            self.record(Change::AttachListener {
                enhancement: self.current.clone(),
                target,
                listener: listener_id,
            });
        }
        added
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.sink.emit(&diagnostic);
        self.report.diagnostics.push(diagnostic);
    }

    fn record(&mut self, change: Change) {
        log::debug!("{:?}", change);
        self.report.changes.push(change);
    }

    fn finish(self) -> EnhanceReport {
        self.report
    }
}

/// Ordered collection of enhancements
pub struct EnhancementRegistry {
    enhancements: Vec<Box<dyn Enhancement>>,
}

impl Default for EnhancementRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl EnhancementRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { enhancements: Vec::new() }
    }

    /// Registry with every built-in enhancement, in application order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SearchDialogLabel);
        registry.register(SearchFormLabel);
        registry.register(SearchInputLabel);
        registry.register(PaletteSwitcherLabel);
        registry.register(PaletteOptionLabels);
        registry.register(SkipLink);
        registry.register(MainContent);
        registry.register(HeadingOrderAudit);
        registry.register(ToggleKeyboardActivation);
        registry.register(EscapeClosesSearch);
        registry
    }

    /// Register an enhancement; it runs after those already registered
    pub fn register<E: Enhancement + 'static>(&mut self, enhancement: E) {
        self.enhancements.push(Box::new(enhancement));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Enhancement> {
        self.enhancements.iter().find(|e| e.name() == name).map(|e| e.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.enhancements.iter().map(|e| e.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Enhancement> {
        self.enhancements.iter().map(|e| e.as_ref())
    }

    pub fn len(&self) -> usize {
        self.enhancements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enhancements.is_empty()
    }
}

/// Runs the registered enhancements against a document
pub struct Normalizer {
    selectors: CompiledSelectors,
    registry: EnhancementRegistry,
    disabled: Vec<String>,
}

impl Normalizer {
    /// Build a normalizer with the built-in enhancements
    pub fn new(config: &NormalizerConfig) -> Result<Self> {
        Self::with_registry(config, EnhancementRegistry::with_defaults())
    }

    /// Build a normalizer around a custom registry
    pub fn with_registry(config: &NormalizerConfig, registry: EnhancementRegistry) -> Result<Self> {
        if let Some(unknown) = config.disabled.iter().find(|name| !registry.contains(name)) {
            return Err(A11yError::InvalidConfig(format!(
                "unknown enhancement '{}' (known: {})",
                unknown,
                registry.names().join(", ")
            )));
        }

        Ok(Self {
            selectors: config.selectors.compile()?,
            registry,
            disabled: config.disabled.clone(),
        })
    }

    pub fn registry(&self) -> &EnhancementRegistry {
        &self.registry
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.registry.contains(name) && !self.disabled.iter().any(|d| d == name)
    }

    /// Normalize `doc` once. Never fails; missing targets are skipped.
    pub fn run(&self, doc: &mut Document, sink: &mut dyn DiagnosticSink) -> EnhanceReport {
        let mut ctx = EnhanceContext::new(doc, &self.selectors, sink);

        for enhancement in self.registry.iter() {
            if !self.is_enabled(enhancement.name()) {
                continue;
            }
            ctx.current = enhancement.name().to_string();
            enhancement.apply(&mut ctx);
        }

        ctx.emit(Diagnostic::Loaded);
        ctx.finish()
    }
}
