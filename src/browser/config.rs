use std::path::PathBuf;

/// Options for launching Chrome
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOptions {
    /// Run without a visible window
    pub headless: bool,

    /// Use Chrome's sandbox
    pub sandbox: bool,

    pub window_width: u32,
    pub window_height: u32,

    /// Chrome binary; auto-detected when `None`
    pub chrome_path: Option<PathBuf>,

    /// Profile directory; a temporary one when `None`
    pub user_data_dir: Option<PathBuf>,

    /// Extra command line arguments passed through to Chrome
    pub args: Vec<String>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: true,
            window_width: 1280,
            window_height: 800,
            chrome_path: None,
            user_data_dir: None,
            args: Vec::new(),
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a Chrome flag list such as the audit config's
    /// `chromeFlags`. `--headless` and `--no-sandbox` map onto the matching
    /// options; every other flag is forwarded untouched.
    pub fn from_chrome_flags<S: AsRef<str>>(flags: &[S]) -> Self {
        let mut options = Self {
            headless: false,
            ..Self::default()
        };

        for flag in flags.iter().map(AsRef::as_ref) {
            match flag {
                "--headless" => options.headless = true,
                "--no-sandbox" => options.sandbox = false,
                other if other.starts_with("--headless=") => options.headless = true,
                other => options.args.push(other.to_string()),
            }
        }

        options
    }

    /// Builder method: set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Builder method: set sandbox mode
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Builder method: set window size
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Builder method: set Chrome binary path
    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Builder method: set profile directory
    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    /// Builder method: add a Chrome argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditConfig;

    #[test]
    fn test_launch_options_builder() {
        let opts = LaunchOptions::new()
            .headless(false)
            .window_size(800, 600)
            .arg("--disable-gpu");

        assert!(!opts.headless);
        assert_eq!(opts.window_width, 800);
        assert_eq!(opts.window_height, 600);
        assert_eq!(opts.args, vec!["--disable-gpu"]);
    }

    #[test]
    fn test_from_audit_chrome_flags() {
        let opts = LaunchOptions::from_chrome_flags(&AuditConfig::default().chrome_flags());

        assert!(opts.headless);
        assert!(!opts.sandbox);
        assert_eq!(
            opts.args,
            vec!["--disable-gpu", "--disable-dev-shm-usage", "--disable-web-security"]
        );
    }

    #[test]
    fn test_from_empty_flags_is_headed() {
        let opts = LaunchOptions::from_chrome_flags::<&str>(&[]);
        assert!(!opts.headless);
        assert!(opts.sandbox);
        assert!(opts.args.is_empty());
    }

    #[test]
    fn test_new_style_headless_flag() {
        let opts = LaunchOptions::from_chrome_flags(&["--headless=new"]);
        assert!(opts.headless);
        assert!(opts.args.is_empty());
    }
}
