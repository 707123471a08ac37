use crate::browser::config::LaunchOptions;
use crate::browser::normalize_url;
use crate::dom::{Document, ElementNode};
use crate::error::{A11yError, Result};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// Chrome instance with the tab pages are loaded into
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// Tab every navigation happens in
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: &LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        launch_opts.headless = options.headless;
        launch_opts.sandbox = options.sandbox;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.path = options.chrome_path.clone();
        launch_opts.user_data_dir = options.user_data_dir.clone();
        launch_opts.args = options.args.iter().map(OsStr::new).collect();

        // A large site can take a while to walk; don't let the browser idle out
        launch_opts.idle_browser_timeout = Duration::from_secs(10 * 60);

        log::debug!("Launching Chrome with {:?}", options);
        let browser = Browser::new(launch_opts).map_err(|e| A11yError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| A11yError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab })
    }

    /// The tab pages are loaded into
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate to a URL and wait for the page to load
    pub fn navigate(&self, url: &str) -> Result<()> {
        let url = normalize_url(url);
        self.tab
            .navigate_to(&url)
            .map_err(|e| A11yError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;
        self.wait_for_navigation()
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab
            .wait_until_navigated()
            .map_err(|e| A11yError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Snapshot the live DOM as an element tree
    pub fn extract_element_tree(&self) -> Result<ElementNode> {
        let js_code = include_str!("extract_dom.js");

        let result = self
            .tab
            .evaluate(js_code, false)
            .map_err(|e| A11yError::EvaluationFailed(format!("Failed to execute DOM extraction script: {}", e)))?;

        let json_value = result
            .value
            .ok_or_else(|| A11yError::DomParseFailed("No value returned from DOM extraction".to_string()))?;

        // The script returns a JSON string, so unwrap the string first
        let json_str: String = serde_json::from_value(json_value)
            .map_err(|e| A11yError::DomParseFailed(format!("Failed to get JSON string: {}", e)))?;

        serde_json::from_str(&json_str)
            .map_err(|e| A11yError::DomParseFailed(format!("Failed to parse DOM JSON: {}", e)))
    }

    /// Snapshot the live DOM as a [`Document`]
    pub fn extract_document(&self) -> Result<Document> {
        Ok(Document::from_element(&self.extract_element_tree()?))
    }

    /// Close the browser's tabs; the process exits when the session is dropped
    pub fn close(&self) -> Result<()> {
        self.tab
            .close(false)
            .map_err(|e| A11yError::NavigationFailed(format!("Failed to close tab: {}", e)))?;
        Ok(())
    }
}
