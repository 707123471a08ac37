//! # docs-a11y
//!
//! Accessibility normalizer for documentation sites built with MkDocs Material.
//!
//! ## Features
//!
//! - **Normalizer**: Labels the search dialog, form and input, the palette switcher and its
//!   options, adds a skip link and a `#main-content` landmark, and wires keyboard handling
//! - **Heading Audit**: Warns when heading levels jump forward (h2 straight to h4)
//! - **Site Post-Processing**: Rewrites (or checks) every page of a built site
//! - **Live Snapshots**: Loads pages in Chrome and normalizes what the theme rendered
//! - **Audit Config**: The Lighthouse CI configuration the site is audited with
//!
//! ## Command Line
//!
//! ```bash
//! # Patch every page under ./site
//! cargo run -- normalize site
//!
//! # Fail when pages still need patching (CI)
//! cargo run -- normalize site --check
//!
//! # Write lighthouserc.json
//! cargo run -- audit-config --output lighthouserc.json
//! ```
//!
//! ## Library Usage
//!
//! ### Normalizing a Page
//!
//! ```rust
//! use docs_a11y::{Document, LogSink, Normalizer, NormalizerConfig};
//!
//! # fn main() -> docs_a11y::Result<()> {
//! let mut doc = Document::parse(
//!     r#"<html><body><main><h1>Guide</h1></main></body></html>"#,
//! );
//!
//! let normalizer = Normalizer::new(&NormalizerConfig::default())?;
//! let report = normalizer.run(&mut doc, &mut LogSink::new());
//!
//! assert!(doc.query(".skip-link")?.is_some());
//! println!("{} changes", report.changes.len());
//! # Ok(())
//! # }
//! ```
//!
//! ### Keyboard Behavior
//!
//! Listeners live on the [`Document`], so key handling can be driven without a browser:
//!
//! ```rust
//! # use docs_a11y::{Document, MemorySink, Normalizer, NormalizerConfig};
//! # fn main() -> docs_a11y::Result<()> {
//! let mut doc = Document::parse(
//!     r#"<html><body><input type="checkbox" id="__drawer" data-md-toggle="drawer"></body></html>"#,
//! );
//! Normalizer::new(&NormalizerConfig::default())?.run(&mut doc, &mut MemorySink::new());
//!
//! let drawer = doc.element_by_id("__drawer").unwrap();
//! doc.dispatch_key(Some(drawer), " ");
//! assert!(doc.has_attribute(drawer, "checked"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Inspecting a Live Page
//!
//! ```rust,no_run
//! use docs_a11y::{BrowserSession, LaunchOptions, MemorySink, Normalizer, NormalizerConfig};
//!
//! # fn main() -> docs_a11y::Result<()> {
//! let session = BrowserSession::launch(&LaunchOptions::default())?;
//! session.navigate("http://localhost:8000")?;
//!
//! let mut doc = session.extract_document()?;
//! let report = Normalizer::new(&NormalizerConfig::default())?.run(&mut doc, &mut MemorySink::new());
//! println!("{} heading warnings", report.warnings().count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: Document model, selectors, focus and keyboard events
//! - [`enhance`]: The enhancements, their registry and the [`Normalizer`]
//! - [`diagnostics`]: Diagnostics and the sinks they are reported to
//! - [`site`]: Post-processing of a built site
//! - [`browser`]: Chrome sessions for live snapshots
//! - [`audit`]: Lighthouse CI configuration
//! - [`error`]: Error types and result aliases

pub mod audit;
pub mod browser;
pub mod diagnostics;
pub mod dom;
pub mod enhance;
pub mod error;
pub mod site;

pub use audit::AuditConfig;
pub use browser::{BrowserSession, LaunchOptions};
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, MemorySink};
pub use dom::{Document, ElementNode, NodeId, Selector};
pub use enhance::{EnhanceReport, Enhancement, EnhancementRegistry, Normalizer, NormalizerConfig};
pub use error::{A11yError, Result};
pub use site::{SiteMode, SiteSummary, process_site};
