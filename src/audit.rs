//! Lighthouse CI configuration for the documentation site.
//!
//! [`AuditConfig::default`] is the configuration the site is audited with;
//! it serializes to the `lighthouserc.json` shape Lighthouse CI reads.

use crate::error::{A11yError, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CHROME_FLAGS: &str =
    "--no-sandbox --headless --disable-gpu --disable-dev-shm-usage --disable-web-security";

/// Root object (`{"ci": {...}}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditConfig {
    pub ci: CiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CiConfig {
    pub collect: CollectConfig,
    pub assert: AssertConfig,
    pub upload: UploadConfig,
}

/// How pages are collected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectConfig {
    pub number_of_runs: u32,
    /// Static build served for the audit
    pub static_dist_dir: String,
    pub url: Vec<String>,
    #[serde(default)]
    pub settings: CollectSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectSettings {
    /// Space separated Chrome command line flags
    #[serde(default)]
    pub chrome_flags: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssertConfig {
    pub preset: String,
    /// Assertions keyed by audit or category id, e.g. `categories:seo`
    #[serde(default)]
    pub assertions: IndexMap<String, Assertion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssertionLevel {
    Off,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssertionOptions {
    pub min_score: f64,
}

/// Either a bare level (`"off"`) or `[level, options]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Assertion {
    Level(AssertionLevel),
    WithOptions(AssertionLevel, AssertionOptions),
}

impl Assertion {
    pub fn min_score(level: AssertionLevel, min_score: f64) -> Self {
        Assertion::WithOptions(level, AssertionOptions { min_score })
    }

    pub fn level(&self) -> AssertionLevel {
        match self {
            Assertion::Level(level) | Assertion::WithOptions(level, _) => *level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UploadConfig {
    pub target: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        let mut assertions = IndexMap::new();
        assertions.insert(
            "categories:accessibility".to_string(),
            Assertion::min_score(AssertionLevel::Warn, 0.80),
        );
        assertions.insert(
            "categories:best-practices".to_string(),
            Assertion::min_score(AssertionLevel::Warn, 0.75),
        );
        assertions.insert("categories:seo".to_string(), Assertion::min_score(AssertionLevel::Warn, 0.75));
        assertions.insert(
            "categories:performance".to_string(),
            Assertion::Level(AssertionLevel::Off),
        );

        Self {
            ci: CiConfig {
                collect: CollectConfig {
                    number_of_runs: 1,
                    static_dist_dir: "./site".to_string(),
                    url: vec!["http://localhost:8080".to_string()],
                    settings: CollectSettings {
                        chrome_flags: DEFAULT_CHROME_FLAGS.to_string(),
                    },
                },
                assert: AssertConfig {
                    preset: "lighthouse:recommended".to_string(),
                    assertions,
                },
                upload: UploadConfig {
                    target: "temporary-public-storage".to_string(),
                },
            },
        }
    }
}

impl AuditConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a `lighthouserc.json`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| A11yError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path, json).map_err(|e| A11yError::io(path, e))
    }

    /// Reject configurations Lighthouse CI would choke on
    pub fn validate(&self) -> Result<()> {
        let collect = &self.ci.collect;
        if collect.number_of_runs == 0 {
            return Err(A11yError::InvalidConfig("numberOfRuns must be at least 1".to_string()));
        }
        if collect.url.is_empty() {
            return Err(A11yError::InvalidConfig("at least one url is required".to_string()));
        }

        for (name, assertion) in &self.ci.assert.assertions {
            if let Assertion::WithOptions(_, options) = assertion {
                if !(0.0..=1.0).contains(&options.min_score) {
                    return Err(A11yError::InvalidConfig(format!(
                        "{}: minScore {} is outside 0..=1",
                        name, options.min_score
                    )));
                }
            }
        }

        Ok(())
    }

    /// Chrome flags split into individual arguments
    pub fn chrome_flags(&self) -> Vec<String> {
        self.ci
            .collect
            .settings
            .chrome_flags
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn assertion(&self, name: &str) -> Option<&Assertion> {
        self.ci.assert.assertions.get(name)
    }

    /// JSON schema of the configuration
    pub fn json_schema() -> Result<String> {
        Ok(serde_json::to_string_pretty(&schemars::schema_for!(AuditConfig))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_matches_lighthouserc_shape() {
        let value = serde_json::to_value(AuditConfig::default()).unwrap();

        assert_eq!(
            value,
            json!({
                "ci": {
                    "collect": {
                        "numberOfRuns": 1,
                        "staticDistDir": "./site",
                        "url": ["http://localhost:8080"],
                        "settings": {
                            "chromeFlags": "--no-sandbox --headless --disable-gpu --disable-dev-shm-usage --disable-web-security"
                        }
                    },
                    "assert": {
                        "preset": "lighthouse:recommended",
                        "assertions": {
                            "categories:accessibility": ["warn", {"minScore": 0.80}],
                            "categories:best-practices": ["warn", {"minScore": 0.75}],
                            "categories:seo": ["warn", {"minScore": 0.75}],
                            "categories:performance": "off"
                        }
                    },
                    "upload": {
                        "target": "temporary-public-storage"
                    }
                }
            })
        );
    }

    #[test]
    fn test_assertion_order_is_preserved() {
        let json = AuditConfig::default().to_json().unwrap();
        let accessibility = json.find("categories:accessibility").unwrap();
        let performance = json.find("categories:performance").unwrap();
        assert!(accessibility < performance);
    }

    #[test]
    fn test_parse_round_trip() {
        let config = AuditConfig::default();
        let parsed = AuditConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(
            parsed.assertion("categories:performance"),
            Some(&Assertion::Level(AssertionLevel::Off))
        );
        assert_eq!(
            parsed.assertion("categories:accessibility").map(Assertion::level),
            Some(AssertionLevel::Warn)
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AuditConfig::default();
        config.ci.collect.number_of_runs = 0;
        assert!(config.validate().is_err());

        let mut config = AuditConfig::default();
        config.ci.collect.url.clear();
        assert!(config.validate().is_err());

        let mut config = AuditConfig::default();
        config
            .ci
            .assert
            .assertions
            .insert("categories:seo".to_string(), Assertion::min_score(AssertionLevel::Error, 1.5));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("categories:seo"));
    }

    #[test]
    fn test_chrome_flags() {
        let flags = AuditConfig::default().chrome_flags();
        assert_eq!(flags.len(), 5);
        assert_eq!(flags[0], "--no-sandbox");
        assert!(flags.contains(&"--disable-web-security".to_string()));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lighthouserc.json");

        AuditConfig::default().save(&path).unwrap();
        assert_eq!(AuditConfig::load(&path).unwrap(), AuditConfig::default());
    }

    #[test]
    fn test_json_schema_mentions_fields() {
        let schema = AuditConfig::json_schema().unwrap();
        assert!(schema.contains("numberOfRuns"));
        assert!(schema.contains("staticDistDir"));
    }
}
