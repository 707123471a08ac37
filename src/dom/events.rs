//! Keyboard events and listeners.

use crate::dom::tree::{Document, NodeId};
use std::fmt;
use std::rc::Rc;

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// The document itself; sees every key event after bubbling
    Document,
    /// A single element
    Node(NodeId),
}

/// A `keydown` event travelling through the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    key: String,
    target: Option<NodeId>,
    default_prevented: bool,
}

impl KeyboardEvent {
    pub fn new(key: impl Into<String>, target: Option<NodeId>) -> Self {
        Self {
            key: key.into(),
            target,
            default_prevented: false,
        }
    }

    /// The key value, e.g. `"Enter"`, `" "` or `"Escape"`
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The element the event was dispatched at, `None` when nothing had focus
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Handler for key events.
///
/// Listeners get the document mutably so they can react the way page scripts
/// do (clicking controls, moving focus). `id` names the behaviour; a target
/// holds at most one listener per id.
pub trait KeyListener {
    fn id(&self) -> &str;

    fn handle_key(&self, doc: &mut Document, current: ListenerTarget, event: &mut KeyboardEvent);
}

#[derive(Clone)]
pub(crate) struct RegisteredListener {
    pub(crate) target: ListenerTarget,
    pub(crate) listener: Rc<dyn KeyListener>,
}

impl fmt::Debug for RegisteredListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredListener")
            .field("target", &self.target)
            .field("id", &self.listener.id())
            .finish()
    }
}
