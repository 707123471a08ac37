//! Keyboard support for the drawer and search toggles.

use crate::dom::{Document, KeyListener, KeyboardEvent, ListenerTarget, Selector};
use crate::enhance::{EnhanceContext, Enhancement};
use std::rc::Rc;

/// Clicks the element it is attached to on Enter or Space
#[derive(Debug, Default, Clone, Copy)]
pub struct ActivateOnKeys;

impl ActivateOnKeys {
    pub const ID: &'static str = "activate-on-enter-or-space";
}

impl KeyListener for ActivateOnKeys {
    fn id(&self) -> &str {
        Self::ID
    }

    fn handle_key(&self, doc: &mut Document, current: ListenerTarget, event: &mut KeyboardEvent) {
        let ListenerTarget::Node(control) = current else {
            return;
        };
        if matches!(event.key(), "Enter" | " ") {
            event.prevent_default();
            doc.click(control);
        }
    }
}

/// Document-level listener: Escape inside the search input clicks the
/// search toggle. Both elements are looked up when the key arrives.
#[derive(Debug, Clone)]
pub struct CloseSearchOnEscape {
    search_input: Selector,
    search_toggle: Selector,
}

impl CloseSearchOnEscape {
    pub const ID: &'static str = "close-search-on-escape";

    pub fn new(search_input: Selector, search_toggle: Selector) -> Self {
        Self {
            search_input,
            search_toggle,
        }
    }
}

impl KeyListener for CloseSearchOnEscape {
    fn id(&self) -> &str {
        Self::ID
    }

    fn handle_key(&self, doc: &mut Document, _current: ListenerTarget, event: &mut KeyboardEvent) {
        if event.key() != "Escape" {
            return;
        }

        let Some(input) = doc.select_first(&self.search_input) else {
            return;
        };
        if doc.active_element() != Some(input) {
            return;
        }

        if let Some(toggle) = doc.select_first(&self.search_toggle) {
            doc.click(toggle);
        }
    }
}

/// Lets keyboard users open the drawer and search with Enter or Space
#[derive(Debug, Default, Clone, Copy)]
pub struct ToggleKeyboardActivation;

impl Enhancement for ToggleKeyboardActivation {
    fn name(&self) -> &str {
        "toggle_keys"
    }

    fn description(&self) -> &str {
        "Activate the drawer and search toggles with Enter or Space"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        let selectors = ctx.selectors();
        for selector in [&selectors.drawer_toggle, &selectors.search_toggle] {
            if let Some(toggle) = ctx.doc().select_first(selector) {
                ctx.add_key_listener(ListenerTarget::Node(toggle), Rc::new(ActivateOnKeys));
            }
        }
    }
}

/// Closes the search overlay when Escape is pressed in the search input
#[derive(Debug, Default, Clone, Copy)]
pub struct EscapeClosesSearch;

impl Enhancement for EscapeClosesSearch {
    fn name(&self) -> &str {
        "escape_closes_search"
    }

    fn description(&self) -> &str {
        "Close search with Escape while the search input has focus"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        let selectors = ctx.selectors();
        let listener = CloseSearchOnEscape::new(selectors.search_input.clone(), selectors.search_toggle.clone());
        ctx.add_key_listener(ListenerTarget::Document, Rc::new(listener));
    }
}
