//! Heading order lint.

use crate::diagnostics::Diagnostic;
use crate::enhance::{EnhanceContext, Enhancement};

/// Warns about headings that skip levels. Observation only: nothing is
/// rewritten.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadingOrderAudit;

impl Enhancement for HeadingOrderAudit {
    fn name(&self) -> &str {
        "heading_order"
    }

    fn description(&self) -> &str {
        "Warn when a heading skips levels"
    }

    fn apply(&self, ctx: &mut EnhanceContext<'_>) {
        let levels: Vec<u8> = ctx
            .doc()
            .select_all(&ctx.selectors().headings)
            .into_iter()
            .filter_map(|node| ctx.doc().tag_name(node).and_then(heading_level))
            .collect();

        for diagnostic in audit_heading_levels(levels) {
            ctx.emit(diagnostic);
        }
    }
}

/// Level of an `h1`..`h6` tag
pub fn heading_level(tag_name: &str) -> Option<u8> {
    let digits = tag_name.strip_prefix(['h', 'H'])?;
    match digits.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

/// Walk heading levels in document order.
///
/// The expected level starts at 1. A heading is accepted when it is at most
/// one level deeper than the expected level and then becomes the expected
/// level; anything deeper is reported and leaves the expected level as is.
pub fn audit_heading_levels(levels: impl IntoIterator<Item = u8>) -> Vec<Diagnostic> {
    let mut expected = 1u8;
    let mut diagnostics = Vec::new();

    for level in levels {
        if level <= expected + 1 {
            expected = level;
        } else {
            diagnostics.push(Diagnostic::HeadingLevelSkipped {
                level,
                previous: expected,
            });
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::dom::Document;
    use crate::enhance::ThemeSelectors;

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("h6"), Some(6));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("header"), None);
        assert_eq!(heading_level("hr"), None);
    }

    #[test]
    fn test_skipped_level_warns_once() {
        let diagnostics = audit_heading_levels([1, 2, 4]);
        assert_eq!(diagnostics, vec![Diagnostic::HeadingLevelSkipped { level: 4, previous: 2 }]);
    }

    #[test]
    fn test_sequential_levels_are_fine() {
        assert!(audit_heading_levels([1, 2, 3]).is_empty());
        assert!(audit_heading_levels([1, 2, 3, 2, 3, 1, 2]).is_empty());
        assert!(audit_heading_levels(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_rejected_heading_does_not_move_expected_level() {
        // h3 is rejected, so h2 afterwards is still accepted against level 1
        let diagnostics = audit_heading_levels([1, 3, 2, 4]);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::HeadingLevelSkipped { level: 3, previous: 1 },
                Diagnostic::HeadingLevelSkipped { level: 4, previous: 2 },
            ]
        );
    }

    #[test]
    fn test_first_heading_deeper_than_h2() {
        assert_eq!(audit_heading_levels([3]).len(), 1);
        assert!(audit_heading_levels([2]).is_empty());
    }

    #[test]
    fn test_audit_does_not_mutate() {
        let mut doc = Document::parse("<body><h1>A</h1><section><h2>B</h2><h4>C</h4></section></body>");
        let before = doc.to_html();

        let selectors = ThemeSelectors::default().compile().unwrap();
        let mut sink = MemorySink::new();
        let mut ctx = EnhanceContext::new(&mut doc, &selectors, &mut sink);
        HeadingOrderAudit.apply(&mut ctx);
        let report = ctx.finish();

        assert!(report.changes.is_empty());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(sink.warnings().count(), 1);
        assert_eq!(doc.to_html(), before);
    }
}
