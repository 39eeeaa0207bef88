//! Nested-loop advisor implementation
//!
//! This module provides the core detection logic plus file and directory
//! scanning built on top of it.

use super::patterns::patterns_from_config;
use super::templates::get_template;
use super::{AnalysisResult, LoopPattern, LoopSite};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Match;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Advisor for detecting nested loops and suggesting parallelization
///
/// Stateless across calls: each `analyze` invocation is a pure function of
/// its input text.
pub struct NestedLoopAdvisor {
    patterns: Vec<LoopPattern>,
    exclude_globset: GlobSet,
    extensions: Vec<String>,
}

impl NestedLoopAdvisor {
    /// Create an advisor from configuration
    pub fn from_config(config: &crate::config::LoopwiseConfig) -> Result<Self> {
        let patterns = patterns_from_config(&config.advisor.patterns)?;

        let mut builder = GlobSetBuilder::new();
        for pattern in &config.advisor.exclude_patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
            builder.add(glob);
        }
        let exclude_globset = builder
            .build()
            .with_context(|| "Failed to build exclude pattern globset")?;

        let extensions = config
            .advisor
            .extensions
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect();

        Ok(Self {
            patterns,
            exclude_globset,
            extensions,
        })
    }

    /// Create an advisor with the built-in default pattern
    pub fn new() -> Result<Self> {
        Self::from_config(&crate::config::LoopwiseConfig::default())
    }

    /// Analyze one document's text for a nested loop
    ///
    /// Pure and deterministic: no side effects, identical input yields an
    /// identical result. Only presence is reported; the first occurrence
    /// satisfies the match.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        match self.first_match(text) {
            Some((pattern, mat)) => {
                tracing::debug!(
                    pattern = %pattern.name,
                    offset = mat.start(),
                    "nested loop detected"
                );
                AnalysisResult::NestedLoopFound {
                    template: get_template(&pattern.template).to_string(),
                }
            }
            None => AnalysisResult::NoNestedLoopFound,
        }
    }

    /// Locate every pattern occurrence in the text for reporting
    pub fn find_sites(&self, text: &str, path: &Path) -> Vec<LoopSite> {
        let mut sites = Vec::new();

        for pattern in &self.patterns {
            for mat in pattern.regex.find_iter(text) {
                let (line_number, column) = line_col(text, mat.start());
                let snippet: String = mat
                    .as_str()
                    .lines()
                    .next()
                    .unwrap_or("")
                    .trim()
                    .chars()
                    .take(80)
                    .collect();

                sites.push(LoopSite {
                    file_path: path.display().to_string(),
                    line_number,
                    column,
                    pattern_name: pattern.name.clone(),
                    snippet,
                });
            }
        }

        sites.sort_by_key(|site| (site.line_number, site.column));
        sites
    }

    /// Insert the suggested template above the first detected loop
    ///
    /// Returns the updated text, or `None` when nothing was detected or the
    /// matched pattern's strategy has no template.
    pub fn insert_template(&self, text: &str) -> Option<String> {
        let (pattern, _) = self.first_match(text)?;
        let template = get_template(&pattern.template);
        self.insert_at_first_match(text, template)
    }

    /// Insert a given template above the line of the first detected loop
    pub fn insert_at_first_match(&self, text: &str, template: &str) -> Option<String> {
        if template.is_empty() {
            return None;
        }
        let (_, mat) = self.first_match(text)?;

        let line_start = text[..mat.start()]
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);

        let mut updated = String::with_capacity(text.len() + template.len() + 1);
        updated.push_str(&text[..line_start]);
        updated.push_str(template.trim_start_matches('\n'));
        updated.push('\n');
        updated.push_str(&text[line_start..]);
        Some(updated)
    }

    /// Analyze a single file and report every located occurrence
    pub fn analyze_file<P: AsRef<Path>>(&self, file_path: P) -> Result<Vec<LoopSite>> {
        let path = file_path.as_ref();

        if !self.should_scan_file(path) {
            tracing::debug!(path = %path.display(), "skipping excluded file");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(self.find_sites(&content, path))
    }

    /// Analyze multiple files
    pub fn analyze_files<P: AsRef<Path>>(&self, files: &[P]) -> Result<Vec<LoopSite>> {
        let mut all_sites = Vec::new();

        for file_path in files {
            let sites = self.analyze_file(file_path)?;
            all_sites.extend(sites);
        }

        Ok(all_sites)
    }

    /// Analyze a directory recursively, honouring extension and exclude filters
    pub fn analyze_directory<P: AsRef<Path>>(&self, dir_path: P) -> Result<Vec<LoopSite>> {
        let mut all_sites = Vec::new();

        for entry in WalkDir::new(dir_path).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();

            if path.is_file() && self.has_scanned_extension(path) && self.should_scan_file(path) {
                let sites = self.analyze_file(path)?;
                all_sites.extend(sites);
            }
        }

        Ok(all_sites)
    }

    /// Earliest occurrence across all patterns
    fn first_match<'t>(&self, text: &'t str) -> Option<(&LoopPattern, Match<'t>)> {
        self.patterns
            .iter()
            .filter_map(|pattern| pattern.regex.find(text).map(|mat| (pattern, mat)))
            .min_by_key(|(_, mat)| mat.start())
    }

    /// Whether the file's extension is in the configured scan list
    ///
    /// An empty extension list means every file qualifies.
    fn has_scanned_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e == &ext.to_lowercase()))
            .unwrap_or(false)
    }

    /// Check a path against the configured exclude globs
    fn should_scan_file(&self, path: &Path) -> bool {
        if self.exclude_globset.is_match(path) {
            return false;
        }

        // Patterns like "*.log" should also match on the bare file name
        if let Some(name) = path.file_name() {
            if self.exclude_globset.is_match(name) {
                return false;
            }
        }

        // Relative paths for patterns like "vendor/**/*.c"
        if let Ok(current_dir) = std::env::current_dir() {
            if let Ok(relative_path) = path.strip_prefix(current_dir) {
                if self.exclude_globset.is_match(relative_path) {
                    return false;
                }
            }
        }

        true
    }
}

/// 1-based line and column for a byte offset
fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let prefix = &text[..offset];
    let line = prefix.matches('\n').count() + 1;
    let column = offset - prefix.rfind('\n').map(|pos| pos + 1).unwrap_or(0) + 1;
    (line, column)
}
