//! Configuration system for ChoiceForge.
//!
//! Describe a selection session (its options, sections, rule and any prior
//! selection) in TOML or YAML instead of code.
//!
//! # Examples
//!
//! Load a session from a TOML string:
//!
//! ```
//! use choiceforge_config::SessionConfig;
//! use choiceforge_core::RuleSpec;
//!
//! let config = SessionConfig::from_toml_str(r#"
//!     title = "choose an option"
//!
//!     [rule]
//!     type = "preset"
//!     name = "single_sectioned"
//!
//!     [[sections]]
//!     title = "Options"
//!     options = [
//!         { key = "OA", title = "Option A" },
//!         { key = "OB", title = "Option B", detail = "Extras" },
//!     ]
//!
//!     [[sections]]
//!     title = "Choices"
//!     options = [{ key = "CA", title = "Choice A" }]
//! "#).unwrap();
//!
//! assert_eq!(config.rule.to_rule(), RuleSpec::single_sectioned());
//! assert_eq!(config.sections.len(), 2);
//! assert!(config.requires_selection);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use choiceforge_config::SessionConfig;
//!
//! let config = SessionConfig::load("session.toml").unwrap_or_default();
//! // An empty session under the Single rule
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use choiceforge_core::{ChoiceForgeError, OptionLayout, RuleSpec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ChoiceForgeError {
    fn from(err: ConfigError) -> Self {
        ChoiceForgeError::Config(err.to_string())
    }
}

/// A complete selection session.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionConfig {
    /// Session title, shown capitalized on validation alerts.
    #[serde(default)]
    pub title: Option<String>,

    /// Whether finishing checks the rule. `false` lets every finish through.
    #[serde(default = "default_requires_selection")]
    pub requires_selection: bool,

    /// Cardinality rule.
    #[serde(default)]
    pub rule: RuleConfig,

    /// Ordered sections of options.
    #[serde(default)]
    pub sections: Vec<SectionConfig>,

    /// Keys selected before the session starts, oldest first.
    #[serde(default)]
    pub selected: Vec<String>,
}

fn default_requires_selection() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: None,
            requires_selection: default_requires_selection(),
            rule: RuleConfig::default(),
            sections: Vec::new(),
            selected: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the session title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the rule.
    pub fn with_rule(mut self, rule: RuleConfig) -> Self {
        self.rule = rule;
        self
    }

    /// Sets whether finishing checks the rule.
    pub fn with_requires_selection(mut self, requires_selection: bool) -> Self {
        self.requires_selection = requires_selection;
        self
    }

    /// Adds a section.
    pub fn with_section(mut self, section: SectionConfig) -> Self {
        self.sections.push(section);
        self
    }

    /// Sets the prior selection.
    pub fn with_selected<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Rejects configurations a session cannot run with.
    ///
    /// The engine itself tolerates all of these by ignoring the offending
    /// entries; a configuration file containing them is almost certainly a
    /// mistake, so loading refuses it instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a rule whose bounds can never be
    /// met, a key placed twice, or a prior selection naming an unknown key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rule
            .to_rule()
            .check_bounds()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let mut seen = HashSet::new();
        for option in self.sections.iter().flat_map(|s| &s.options) {
            if !seen.insert(option.key.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "key `{}` appears more than once",
                    option.key
                )));
            }
        }

        if let Some(key) = self.selected.iter().find(|k| !seen.contains(k.as_str())) {
            return Err(ConfigError::Invalid(format!(
                "selected key `{key}` is not an option"
            )));
        }

        Ok(())
    }

    /// Builds the option layout described by `sections`.
    ///
    /// Sections without a title get an empty one, which layouts treat as absent.
    pub fn to_layout(&self) -> OptionLayout<String> {
        let mut titles = HashMap::new();
        let mut details = HashMap::new();
        let mut section_titles = Vec::with_capacity(self.sections.len());
        let mut sections = Vec::with_capacity(self.sections.len());

        for section in &self.sections {
            section_titles.push(section.title.clone().unwrap_or_default());
            let mut keys = Vec::with_capacity(section.options.len());
            for option in &section.options {
                titles.insert(option.key.clone(), option.title.clone());
                if let Some(detail) = &option.detail {
                    details.insert(option.key.clone(), detail.clone());
                }
                keys.push(option.key.clone());
            }
            sections.push(keys);
        }

        OptionLayout::new(titles, details, section_titles, sections)
    }
}

/// Rule configuration.
///
/// The `all` and `sectioned` arms share their layout with [`RuleSpec`]'s own
/// serde form, so a serialized rule can be pasted into a `[rule]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleConfig {
    /// Bounds over the whole list.
    All {
        #[serde(default)]
        min: usize,
        #[serde(default)]
        max: Option<usize>,
    },

    /// Bounds per section and over the whole list.
    Sectioned {
        #[serde(default)]
        section_min: usize,
        #[serde(default)]
        section_max: Option<usize>,
        #[serde(default)]
        total_min: usize,
        #[serde(default)]
        total_max: Option<usize>,
    },

    /// One of the named presets.
    Preset { name: RulePreset },
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig::Preset {
            name: RulePreset::default(),
        }
    }
}

impl RuleConfig {
    /// Returns the rule this configuration describes.
    pub fn to_rule(&self) -> RuleSpec {
        match *self {
            RuleConfig::All { min, max } => RuleSpec::all(min, max),
            RuleConfig::Sectioned {
                section_min,
                section_max,
                total_min,
                total_max,
            } => RuleSpec::sectioned(section_min, section_max, total_min, total_max),
            RuleConfig::Preset { name } => name.to_rule(),
        }
    }
}

impl From<RuleSpec> for RuleConfig {
    fn from(rule: RuleSpec) -> Self {
        match rule {
            RuleSpec::All { min, max } => RuleConfig::All { min, max },
            RuleSpec::Sectioned {
                section_min,
                section_max,
                total_min,
                total_max,
            } => RuleConfig::Sectioned {
                section_min,
                section_max,
                total_min,
                total_max,
            },
        }
    }
}

/// Named rule presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePreset {
    /// Exactly one option over the whole list.
    #[default]
    Single,

    /// At least one option, no upper bound.
    Multiple,

    /// Exactly one option in every section.
    SingleSectioned,

    /// At least one option in every section.
    MultipleSectioned,
}

impl RulePreset {
    /// Returns the rule for this preset.
    pub fn to_rule(self) -> RuleSpec {
        match self {
            RulePreset::Single => RuleSpec::SINGLE,
            RulePreset::Multiple => RuleSpec::MULTIPLE,
            RulePreset::SingleSectioned => RuleSpec::SINGLE_SECTIONED,
            RulePreset::MultipleSectioned => RuleSpec::MULTIPLE_SECTIONED,
        }
    }
}

/// Section configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SectionConfig {
    /// Section header.
    #[serde(default)]
    pub title: Option<String>,

    /// Options in display order.
    #[serde(default)]
    pub options: Vec<OptionConfig>,
}

impl SectionConfig {
    /// Creates an untitled section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a titled section.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            options: Vec::new(),
        }
    }

    /// Adds an option.
    pub fn with_option(mut self, option: OptionConfig) -> Self {
        self.options.push(option);
        self
    }
}

/// A single option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OptionConfig {
    /// Identifier returned to the caller when selected.
    pub key: String,

    /// Display title.
    pub title: String,

    /// Supplementary line shown under the title.
    #[serde(default)]
    pub detail: Option<String>,
}

impl OptionConfig {
    /// Creates an option without detail.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            detail: None,
        }
    }

    /// Sets the detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[cfg(test)]
mod tests;
