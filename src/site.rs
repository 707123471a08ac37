//! Post-processing of a built documentation site.
//!
//! Walks the static build directory, normalizes every HTML page and either
//! rewrites the page or only reports what it would change.

use crate::diagnostics::LogSink;
use crate::dom::Document;
use crate::enhance::{EnhanceReport, Normalizer};
use crate::error::{A11yError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions treated as pages
const PAGE_EXTENSIONS: &[&str] = &["html", "htm"];

/// Whether pages are rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteMode {
    /// Rewrite pages that needed changes
    Write,
    /// Report only
    Check,
}

/// Result for one page
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub path: PathBuf,
    pub report: EnhanceReport,
}

impl PageReport {
    /// Static HTML cannot carry listeners, so only structural changes count
    pub fn needs_changes(&self) -> bool {
        !self.report.is_structurally_clean()
    }
}

/// Result for a whole site
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteSummary {
    pub pages: Vec<PageReport>,
}

impl SiteSummary {
    pub fn pages_scanned(&self) -> usize {
        self.pages.len()
    }

    pub fn pages_needing_changes(&self) -> usize {
        self.pages.iter().filter(|p| p.needs_changes()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.pages.iter().map(|p| p.report.warnings().count()).sum()
    }
}

/// Normalize every page under `dir`
pub fn process_site(dir: &Path, normalizer: &Normalizer, mode: SiteMode) -> Result<SiteSummary> {
    if !dir.is_dir() {
        return Err(A11yError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "site directory not found"),
        ));
    }

    log::info!("Processing site: {}", dir.display());
    let mut summary = SiteSummary::default();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden directories (but not the root itself)
            e.depth() == 0 || !e.file_name().to_str().unwrap_or("").starts_with('.')
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_page(entry.path()) {
            continue;
        }

        summary.pages.push(process_page(entry.path(), normalizer, mode)?);
    }

    log::info!(
        "Processed {} pages, {} needed changes, {} warnings",
        summary.pages_scanned(),
        summary.pages_needing_changes(),
        summary.warning_count()
    );

    Ok(summary)
}

/// Normalize a single page
pub fn process_page(path: &Path, normalizer: &Normalizer, mode: SiteMode) -> Result<PageReport> {
    let content = std::fs::read_to_string(path).map_err(|e| A11yError::io(path, e))?;

    let mut doc = Document::parse(&content);
    let mut sink = LogSink::with_context(path.display().to_string());
    let report = normalizer.run(&mut doc, &mut sink);

    let page = PageReport {
        path: path.to_path_buf(),
        report,
    };

    if mode == SiteMode::Write && page.needs_changes() {
        log::debug!("Rewriting {}", path.display());
        std::fs::write(path, doc.to_html()).map_err(|e| A11yError::io(path, e))?;
    }

    Ok(page)
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.iter().any(|p| p.eq_ignore_ascii_case(ext)))
}
