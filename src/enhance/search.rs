//! Labels for the search dialog, form and input.

use crate::enhance::{EnhanceContext, Enhancement};

/// Id of the hidden heading that names the search dialog
pub const SEARCH_TITLE_ID: &str = "search-title";
pub const SEARCH_TITLE_TEXT: &str = "Search Documentation";
pub const SEARCH_LABEL: &str = "Search documentation";

/// Names the search dialog and points it at a visually hidden heading,
/// creating the heading when the dialog has none
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchDialogLabel;

impl Enhancement for SearchDialogLabel {
    fn name(&self) -> &str {
        "search_dialog"
    }

    fn description(&self) -> &str {
        "Name the search dialog and label it with a hidden heading"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        let Some(dialog) = ctx.doc().select_first(&ctx.selectors().search_dialog) else {
            return;
        };

        ctx.set_attribute(dialog, "aria-label", "Search dialog");
        ctx.set_attribute(dialog, "aria-labelledby", SEARCH_TITLE_ID);

        let has_title = ctx
            .doc()
            .descendants(dialog)
            .into_iter()
            .any(|node| ctx.doc().attribute(node, "id") == Some(SEARCH_TITLE_ID));
        if has_title {
            return;
        }

        let title = ctx.create_element(
            "h2",
            &[("id", SEARCH_TITLE_ID), ("class", "sr-only")],
            Some(SEARCH_TITLE_TEXT),
        );
        ctx.prepend_child(dialog, title);
    }
}

/// Names the search form and gives it the `search` landmark role
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchFormLabel;

impl Enhancement for SearchFormLabel {
    fn name(&self) -> &str {
        "search_form"
    }

    fn description(&self) -> &str {
        "Name the search form and mark it as a search landmark"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        if let Some(form) = ctx.doc().select_first(&ctx.selectors().search_form) {
            ctx.set_attribute(form, "aria-label", SEARCH_LABEL);
            ctx.set_attribute(form, "role", "search");
        }
    }
}

/// Names an unlabelled search input and gives it a placeholder
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchInputLabel;

impl Enhancement for SearchInputLabel {
    fn name(&self) -> &str {
        "search_input"
    }

    fn description(&self) -> &str {
        "Name the search input when it has no accessible name"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        let Some(input) = ctx.doc().select_first(&ctx.selectors().search_input) else {
            return;
        };
        if ctx.doc().has_attribute(input, "aria-label") {
            return;
        }

        ctx.set_attribute(input, "aria-label", SEARCH_LABEL);
        ctx.set_attribute(input, "placeholder", "Search documentation...");
    }
}
