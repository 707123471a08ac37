//! CSS selectors for addressing theme markup.
//!
//! A thin layer over [`scraper::Selector`]: the full selector grammar
//! scraper understands (pseudo-classes such as `:not()`, sibling combinators,
//! quoted attribute values) is available, and errors come back as
//! [`A11yError::InvalidSelector`].

use crate::dom::tree::{Document, NodeId};
use crate::error::{A11yError, Result};
use scraper::ElementRef;
use std::fmt;
use std::str::FromStr;

/// A compiled selector list together with the text it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    source: String,
    inner: scraper::Selector,
}

impl Selector {
    /// Compile a selector list
    pub fn parse(source: &str) -> Result<Self> {
        let source = source.trim();
        let inner = scraper::Selector::parse(source)
            .map_err(|e| A11yError::invalid_selector(source, e.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            inner,
        })
    }

    /// The selector text this was compiled from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `node` is an element matching any selector in the list
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        doc.node_ref(node)
            .and_then(ElementRef::wrap)
            .is_some_and(|element| self.inner.matches(&element))
    }
}

impl FromStr for Selector {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
