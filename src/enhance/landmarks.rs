//! Skip link and main landmark.

use crate::enhance::{EnhanceContext, Enhancement};

/// Id the skip link targets
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const SKIP_LINK_TEXT: &str = "Skip to main content";

/// Adds a skip link as the first child of `<body>` when the page has none
#[derive(Debug, Default, Clone, Copy)]
pub struct SkipLink;

impl Enhancement for SkipLink {
    fn name(&self) -> &str {
        "skip_link"
    }

    fn description(&self) -> &str {
        "Insert a skip-to-content link at the top of the body"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        if ctx.doc().select_first(&ctx.selectors().skip_link).is_some() {
            return;
        }
        let Some(body) = ctx.doc().body() else {
            return;
        };

        let href = format!("#{}", MAIN_CONTENT_ID);
        let link = ctx.create_element(
            "a",
            &[
                ("href", href.as_str()),
                ("class", "skip-link"),
                ("aria-label", SKIP_LINK_TEXT),
            ],
            Some(SKIP_LINK_TEXT),
        );
        ctx.prepend_child(body, link);
    }
}

/// Gives the main content region the id the skip link targets and the
/// `main` landmark role
#[derive(Debug, Default, Clone, Copy)]
pub struct MainContent;

impl Enhancement for MainContent {
    fn name(&self) -> &str {
        "main_content"
    }

    fn description(&self) -> &str {
        "Give the main content region an id and the main landmark role"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        let selectors = ctx.selectors();
        let main = ctx
            .doc()
            .select_first(&selectors.main_content)
            .or_else(|| ctx.doc().select_first(&selectors.main_content_fallback));
        let Some(main) = main else {
            return;
        };

        ctx.set_attribute_if_missing(main, "id", MAIN_CONTENT_ID);
        ctx.set_attribute_if_missing(main, "role", "main");
    }
}
