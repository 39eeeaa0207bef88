//! Configuration management for Loopwise
//!
//! This module handles loading, parsing, and validating Loopwise
//! configuration from YAML files.

use crate::advisor::patterns::NESTED_FOR_REGEX;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "loopwise.yml";

/// Main configuration structure for Loopwise
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoopwiseConfig {
    /// Advisor configuration
    pub advisor: AdvisorConfig,
}

/// Advisor-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Detection patterns
    pub patterns: Vec<LoopPatternConfig>,

    /// File patterns to exclude from scanning
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// File extensions scanned during directory walks
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            patterns: vec![LoopPatternConfig::default()],
            exclude_patterns: Vec::new(),
            extensions: default_extensions(),
        }
    }
}

/// Default scanned extensions (C-family sources)
fn default_extensions() -> Vec<String> {
    ["c", "cc", "cpp", "cxx", "h", "hpp"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Detection pattern configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopPatternConfig {
    /// Pattern name
    pub name: String,

    /// Regex pattern describing the loop shape
    pub regex: String,

    /// Template strategy key (e.g. "OpenMP")
    #[serde(default = "default_template_key")]
    pub template: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Whether this pattern is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for LoopPatternConfig {
    fn default() -> Self {
        Self {
            name: "nested-for".to_string(),
            regex: NESTED_FOR_REGEX.to_string(),
            template: default_template_key(),
            description: "A for header whose brace block opens onto another for header"
                .to_string(),
            enabled: true,
        }
    }
}

/// Default template strategy for patterns
fn default_template_key() -> String {
    "OpenMP".to_string()
}

/// Default enabled state for patterns
fn default_enabled() -> bool {
    true
}

impl LoopwiseConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            serde_yml::to_string(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
