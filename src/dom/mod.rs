//! Document model
//!
//! This module provides the page document the normalizer works on:
//! - Document: parsed page tree with focus, click activation and key event dispatch
//! - Selector: compiled CSS selectors used to address theme markup
//! - ElementNode: serializable element snapshot exchanged with live pages
//! - HTML parsing and serialization for static pages

pub mod element;
pub mod events;
pub mod html;
pub mod selector;
pub mod tree;

pub use element::ElementNode;
pub use events::{KeyListener, KeyboardEvent, ListenerTarget};
pub use selector::Selector;
pub use tree::{Document, NodeId};
