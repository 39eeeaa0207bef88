//! Nested-loop detection and parallelization advice
//!
//! This module provides the pure analysis core: a textual heuristic that
//! finds nested `for` loops and pairs them with a parallelization template.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

pub mod detector;
pub mod patterns;
pub mod templates;

#[cfg(test)]
mod tests;

pub use detector::NestedLoopAdvisor;
pub use templates::get_template;

/// Outcome of analyzing one document's text
///
/// Derived purely from the input text with no side effects. Absence of a
/// nested loop is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    /// No nested iteration construct was found
    NoNestedLoopFound,

    /// A nested loop was found; carries the suggested template text
    NestedLoopFound {
        /// Template to present to the caller (may be empty when the
        /// pattern's strategy has no template registered)
        template: String,
    },
}

impl AnalysisResult {
    /// Whether a nested loop was detected
    pub fn is_found(&self) -> bool {
        matches!(self, AnalysisResult::NestedLoopFound { .. })
    }
}

/// A located nested-loop occurrence, used by the reporting layer
///
/// The pure `analyze` contract reports presence only; positions exist
/// solely so the CLI can point at files.
#[derive(Debug, Clone, Serialize)]
pub struct LoopSite {
    /// File path where the loop was found
    pub file_path: String,

    /// Line number (1-based)
    pub line_number: usize,

    /// Column number (1-based)
    pub column: usize,

    /// Pattern name that matched
    pub pattern_name: String,

    /// First line of the matched text, trimmed
    pub snippet: String,
}

/// A compiled detection pattern
#[derive(Debug, Clone)]
pub struct LoopPattern {
    /// Pattern name
    pub name: String,

    /// Regular expression describing the loop shape
    pub regex: Regex,

    /// Template strategy key this pattern suggests (e.g. "OpenMP")
    pub template: String,

    /// Description
    pub description: String,
}

impl LoopPattern {
    /// Compile a new detection pattern
    pub fn new(
        name: String,
        pattern: &str,
        template: String,
        description: String,
    ) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid regex pattern for {}: {}", name, pattern))?;

        Ok(Self {
            name,
            regex,
            template,
            description,
        })
    }
}
