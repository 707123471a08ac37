//! Diagnostics emitted while normalizing a page.
//!
//! The normalizer never logs directly; it hands every diagnostic to a
//! [`DiagnosticSink`] supplied by the caller.

use serde::Serialize;
use std::fmt;

/// How loud a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// Something worth telling the page author about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A heading jumped more than one level deeper than the previous accepted heading
    HeadingLevelSkipped { level: u8, previous: u8 },
    /// The normalizer finished its pass
    Loaded,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::HeadingLevelSkipped { .. } => Severity::Warning,
            Diagnostic::Loaded => Severity::Info,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::HeadingLevelSkipped { level, previous } => write!(
                f,
                "Accessibility: Heading level {} follows level {}, which may confuse screen readers.",
                level, previous
            ),
            Diagnostic::Loaded => f.write_str("Documentation accessibility enhancements loaded"),
        }
    }
}

/// Receiver for diagnostics
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: &Diagnostic);
}

/// Sink that forwards to the `log` facade, optionally prefixed with a page name
#[derive(Debug, Default, Clone)]
pub struct LogSink {
    context: Option<String>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every message with `context` (typically the page path)
    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
        }
    }
}

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let prefix = self.context.as_deref().map(|c| format!("{}: ", c)).unwrap_or_default();
        match diagnostic.severity() {
            Severity::Warning => log::warn!("{}{}", prefix, diagnostic),
            Severity::Info => log::info!("{}{}", prefix, diagnostic),
        }
    }
}

/// Sink that keeps everything in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    diagnostics: Vec<Diagnostic>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_message() {
        let diagnostic = Diagnostic::HeadingLevelSkipped { level: 4, previous: 2 };
        assert_eq!(
            diagnostic.to_string(),
            "Accessibility: Heading level 4 follows level 2, which may confuse screen readers."
        );
        assert!(diagnostic.is_warning());
        assert!(!Diagnostic::Loaded.is_warning());
    }

    #[test]
    fn test_memory_sink_filters_warnings() {
        let mut sink = MemorySink::new();
        sink.emit(&Diagnostic::HeadingLevelSkipped { level: 3, previous: 1 });
        sink.emit(&Diagnostic::Loaded);

        assert_eq!(sink.diagnostics().len(), 2);
        assert_eq!(sink.warnings().count(), 1);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(Diagnostic::HeadingLevelSkipped { level: 5, previous: 3 }).unwrap();
        assert_eq!(json["kind"], "heading_level_skipped");
        assert_eq!(json["level"], 5);
    }
}
