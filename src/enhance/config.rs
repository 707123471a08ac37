use crate::dom::Selector;
use crate::error::{A11yError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selectors addressing the theme's markup. Defaults target MkDocs Material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSelectors {
    pub search_dialog: String,
    pub search_form: String,
    pub search_input: String,
    pub palette_switcher: String,
    pub palette_options: String,
    /// Marker of an existing skip link
    pub skip_link: String,
    pub main_content: String,
    /// Used when `main_content` matches nothing
    pub main_content_fallback: String,
    pub headings: String,
    pub drawer_toggle: String,
    pub search_toggle: String,
}

impl Default for ThemeSelectors {
    fn default() -> Self {
        Self {
            search_dialog: r#".md-search[role="dialog"]"#.to_string(),
            search_form: ".md-search__form".to_string(),
            search_input: ".md-search__input".to_string(),
            palette_switcher: r#".md-header__option[data-md-component="palette"]"#.to_string(),
            palette_options: r#".md-header__option input[type="radio"]"#.to_string(),
            skip_link: ".skip-link".to_string(),
            main_content: "main".to_string(),
            main_content_fallback: ".md-content".to_string(),
            headings: "h1, h2, h3, h4, h5, h6".to_string(),
            drawer_toggle: r#"[data-md-toggle="drawer"]"#.to_string(),
            search_toggle: r#"[data-md-toggle="search"]"#.to_string(),
        }
    }
}

impl ThemeSelectors {
    /// Parse every selector up front so a run never meets a bad one
    pub fn compile(&self) -> Result<CompiledSelectors> {
        Ok(CompiledSelectors {
            search_dialog: self.search_dialog.parse()?,
            search_form: self.search_form.parse()?,
            search_input: self.search_input.parse()?,
            palette_switcher: self.palette_switcher.parse()?,
            palette_options: self.palette_options.parse()?,
            skip_link: self.skip_link.parse()?,
            main_content: self.main_content.parse()?,
            main_content_fallback: self.main_content_fallback.parse()?,
            headings: self.headings.parse()?,
            drawer_toggle: self.drawer_toggle.parse()?,
            search_toggle: self.search_toggle.parse()?,
        })
    }
}

/// Parsed form of [`ThemeSelectors`]
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSelectors {
    pub search_dialog: Selector,
    pub search_form: Selector,
    pub search_input: Selector,
    pub palette_switcher: Selector,
    pub palette_options: Selector,
    pub skip_link: Selector,
    pub main_content: Selector,
    pub main_content_fallback: Selector,
    pub headings: Selector,
    pub drawer_toggle: Selector,
    pub search_toggle: Selector,
}

/// Normalizer configuration, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub selectors: ThemeSelectors,

    /// Names of enhancements to skip
    pub disabled: Vec<String>,
}

impl NormalizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: skip an enhancement by name
    pub fn disable(mut self, name: impl Into<String>) -> Self {
        self.disabled.push(name.into());
        self
    }

    /// Builder method: replace the theme selectors
    pub fn selectors(mut self, selectors: ThemeSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| A11yError::io(path, e))?;
        Self::from_json(&content)
            .map_err(|e| A11yError::InvalidConfig(format!("{}: {}", path.display(), e)))
    }
}
