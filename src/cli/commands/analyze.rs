//! Analyze command implementation
//!
//! Scans files or directories for nested loops, reports every occurrence,
//! and optionally inserts the suggested template into affected files.

use crate::advisor::{LoopSite, NestedLoopAdvisor};
use crate::cli::Output;
use crate::host::{AdvicePresenter, FileDocument, advise};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the analyze command
pub async fn execute(
    files: Vec<String>,
    directory: Option<String>,
    insert: bool,
    config_flag: Option<&str>,
    format: &str,
    output: &Output,
) -> Result<()> {
    output.header("🔁 Nested Loop Analysis");

    let config = super::load_config(config_flag, output)?;
    let advisor = NestedLoopAdvisor::from_config(&config)?;

    let mut all_sites = Vec::new();
    let mut affected_files: Vec<PathBuf> = Vec::new();

    if !files.is_empty() {
        output.step("Analyzing specified files");
        for file_path in &files {
            let path = Path::new(file_path);
            if path.exists() {
                let sites = advisor.analyze_file(path)?;
                if !sites.is_empty() {
                    affected_files.push(path.to_path_buf());
                }
                all_sites.extend(sites);
                output.verbose(&format!("Analyzed: {}", file_path));
            } else {
                output.warning(&format!("File not found: {}", file_path));
            }
        }
    } else {
        let dir = match directory {
            Some(dir) => {
                let dir_path = PathBuf::from(&dir);
                if !dir_path.is_dir() {
                    output.error(&format!("Directory not found or not a directory: {}", dir));
                    return Ok(());
                }
                output.step(&format!("Analyzing directory: {}", dir));
                dir_path
            }
            None => {
                output.step("Analyzing current directory");
                std::env::current_dir()?
            }
        };

        let sites = advisor.analyze_directory(&dir)?;
        for site in &sites {
            let path = PathBuf::from(&site.file_path);
            if !affected_files.contains(&path) {
                affected_files.push(path);
            }
        }
        all_sites.extend(sites);
    }

    output.blank_line();
    display_results(&all_sites, format, output)?;

    if insert {
        output.blank_line();
        output.step("Inserting templates");
        for path in &affected_files {
            let document = FileDocument::new(path);
            let mut presenter = FilePresenter {
                path,
                advisor: &advisor,
                output,
            };
            advise(&advisor, &document, &mut presenter)
                .with_context(|| format!("Failed to advise on {}", path.display()))?;
        }

        if affected_files.is_empty() {
            output.info("Nothing to insert");
        }
    }

    Ok(())
}

/// Display analysis results in the requested format
fn display_results(sites: &[LoopSite], format: &str, output: &Output) -> Result<()> {
    match format {
        "json" => {
            let json_output = serde_json::to_string_pretty(sites)?;
            println!("{}", json_output);
        }
        _ => {
            if sites.is_empty() {
                output.success("No nested loops found");
            } else {
                output.count("🔁", "Nested loops detected", sites.len());
                output.blank_line();

                for site in sites {
                    output.file_location(&site.file_path, site.line_number);
                    output.indent(&format!("[{}] {}", site.pattern_name, site.snippet));
                }

                output.blank_line();
                output.separator();
                output.info("Run with --insert to add the OpenMP template above each loop");
            }
        }
    }

    Ok(())
}

/// Presenter that writes templates into a file and reports via the console
struct FilePresenter<'a> {
    path: &'a Path,
    advisor: &'a NestedLoopAdvisor,
    output: &'a Output,
}

impl AdvicePresenter for FilePresenter<'_> {
    fn insert_template(&mut self, template: &str) -> Result<()> {
        let text = fs::read_to_string(self.path)
            .with_context(|| format!("Failed to read file: {}", self.path.display()))?;

        let Some(updated) = self.advisor.insert_at_first_match(&text, template) else {
            tracing::debug!(path = %self.path.display(), "no insertion point found");
            return Ok(());
        };

        fs::write(self.path, updated)
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }

    fn show_message(&self, title: &str, body: &str) {
        self.output
            .info(&format!("{}: {} ({})", title, body, self.path.display()));
    }

    fn show_error(&self, title: &str, body: &str) {
        self.output
            .error(&format!("{}: {} ({})", title, body, self.path.display()));
    }
}
