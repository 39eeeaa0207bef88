//! Detection patterns for nested-loop analysis
//!
//! This module converts configured pattern entries into compiled
//! `LoopPattern` values.

use super::LoopPattern;
use crate::config::LoopPatternConfig;
use anyhow::Result;

/// The reference nested-for heuristic: a `for`-like header, a brace-delimited
/// block of non-brace characters, another `for`-like header. `(?s)` lets the
/// match span lines.
pub const NESTED_FOR_REGEX: &str = r"(?s)for\s*\(.*\)\s*\{[^}]*for\s*\(.*\)";

/// Convert configuration entries to compiled patterns, skipping disabled ones
pub fn patterns_from_config(config_patterns: &[LoopPatternConfig]) -> Result<Vec<LoopPattern>> {
    let mut patterns = Vec::new();

    for config_pattern in config_patterns {
        if !config_pattern.enabled {
            continue;
        }

        let pattern = LoopPattern::new(
            config_pattern.name.clone(),
            &config_pattern.regex,
            config_pattern.template.clone(),
            config_pattern.description.clone(),
        )?;

        patterns.push(pattern);
    }

    Ok(patterns)
}
