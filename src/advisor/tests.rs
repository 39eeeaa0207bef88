//! Advisor module tests

use super::patterns::{NESTED_FOR_REGEX, patterns_from_config};
use super::templates::{get_template, template_keys};
use super::*;
use crate::config::{LoopPatternConfig, LoopwiseConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn advisor() -> NestedLoopAdvisor {
    NestedLoopAdvisor::new().expect("Failed to create advisor")
}

const NESTED: &str = "for(int i=0;i<n;i++){ for(int j=0;j<n;j++){ x++; } }";

#[test]
fn test_analyze_empty_text() {
    assert_eq!(advisor().analyze(""), AnalysisResult::NoNestedLoopFound);
}

#[test]
fn test_analyze_no_loops() {
    let text = "int main() {\n    return 0;\n}\n";
    assert_eq!(advisor().analyze(text), AnalysisResult::NoNestedLoopFound);
}

#[test]
fn test_analyze_single_loop() {
    let text = "for (int i = 0; i < n; i++) {\n    sum += a[i];\n}\n";
    assert_eq!(advisor().analyze(text), AnalysisResult::NoNestedLoopFound);
}

#[test]
fn test_analyze_nested_loops() {
    let result = advisor().analyze(NESTED);

    match result {
        AnalysisResult::NestedLoopFound { template } => {
            assert!(template.contains("#pragma omp parallel for"));
        }
        AnalysisResult::NoNestedLoopFound => panic!("expected a nested loop"),
    }
}

#[test]
fn test_analyze_nested_loops_across_lines() {
    let text = "for (int i = 0; i < rows; i++) {\n    for (int j = 0; j < cols; j++) {\n        m[i][j] = 0;\n    }\n}\n";
    assert!(advisor().analyze(text).is_found());
}

#[test]
fn test_analyze_is_deterministic() {
    let advisor = advisor();
    assert_eq!(advisor.analyze(NESTED), advisor.analyze(NESTED));
    assert_eq!(advisor.analyze(""), advisor.analyze(""));
}

#[test]
fn test_get_template_openmp() {
    let template = get_template("OpenMP");
    assert!(!template.is_empty());
    assert!(template.contains("#pragma omp parallel for"));
}

#[test]
fn test_get_template_unknown_key() {
    assert_eq!(get_template("unknown"), "");
    assert_eq!(get_template(""), "");
    assert_eq!(get_template("openmp"), ""); // keys are case-sensitive
}

#[test]
fn test_template_keys() {
    assert_eq!(template_keys(), &["OpenMP"]);
}

#[test]
fn test_loop_pattern_creation() {
    let pattern = LoopPattern::new(
        "nested-for".to_string(),
        NESTED_FOR_REGEX,
        "OpenMP".to_string(),
        "builtin".to_string(),
    )
    .expect("Failed to create pattern");

    assert_eq!(pattern.name, "nested-for");
    assert!(pattern.regex.is_match(NESTED));
}

#[test]
fn test_invalid_regex_pattern() {
    let result = LoopPattern::new(
        "broken".to_string(),
        "[unclosed",
        "OpenMP".to_string(),
        String::new(),
    );
    assert!(result.is_err());
}

#[test]
fn test_patterns_from_config_skips_disabled() {
    let configs = vec![
        LoopPatternConfig::default(),
        LoopPatternConfig {
            name: "disabled".to_string(),
            regex: r"while\s*\(".to_string(),
            template: "OpenMP".to_string(),
            description: String::new(),
            enabled: false,
        },
    ];

    let patterns = patterns_from_config(&configs).expect("Failed to build patterns");

    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].name, "nested-for");
}

#[test]
fn test_find_sites_reports_position() {
    let text = "int main() {\nfor (int i = 0; i < n; i++) {\n    for (int j = 0; j < n; j++) {\n    }\n}\n}\n";
    let sites = advisor().find_sites(text, Path::new("matrix.c"));

    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].file_path, "matrix.c");
    assert_eq!(sites[0].line_number, 2);
    assert_eq!(sites[0].column, 1);
    assert_eq!(sites[0].pattern_name, "nested-for");
    assert!(sites[0].snippet.starts_with("for (int i = 0;"));
}

#[test]
fn test_insert_template_above_first_loop() {
    let text = "void fill(void) {\nfor(int i=0;i<n;i++){ for(int j=0;j<n;j++){ x++; } }\n}\n";
    let updated = advisor()
        .insert_template(text)
        .expect("expected an insertion");

    let pragma_line = updated
        .lines()
        .position(|line| line.contains("#pragma omp parallel for"))
        .expect("pragma missing");
    let loop_line = updated
        .lines()
        .position(|line| line.starts_with("for(int i=0"))
        .expect("original loop missing");

    assert!(pragma_line < loop_line);
    // Original text survives unchanged around the insertion
    assert!(updated.contains("void fill(void) {"));
    assert!(updated.ends_with("}\n}\n"));
}

#[test]
fn test_insert_template_without_match() {
    assert!(advisor().insert_template("int x = 0;").is_none());
}

#[test]
fn test_insert_at_first_match_empty_template() {
    assert!(advisor().insert_at_first_match(NESTED, "").is_none());
}

#[test]
fn test_unknown_strategy_yields_empty_template() {
    let mut config = LoopwiseConfig::default();
    config.advisor.patterns[0].template = "CUDA".to_string();

    let advisor = NestedLoopAdvisor::from_config(&config).expect("Failed to create advisor");

    match advisor.analyze(NESTED) {
        AnalysisResult::NestedLoopFound { template } => assert_eq!(template, ""),
        AnalysisResult::NoNestedLoopFound => panic!("expected a nested loop"),
    }
    assert!(advisor.insert_template(NESTED).is_none());
}

#[test]
fn test_analyze_file_reports_sites() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("kernel.c");
    fs::write(&file, NESTED).expect("Failed to write file");

    let sites = advisor().analyze_file(&file).expect("Failed to analyze file");

    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].line_number, 1);
}

#[test]
fn test_analyze_file_honours_excludes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("generated.c");
    fs::write(&file, NESTED).expect("Failed to write file");

    let mut config = LoopwiseConfig::default();
    config.advisor.exclude_patterns = vec!["generated.c".to_string()];

    let advisor = NestedLoopAdvisor::from_config(&config).expect("Failed to create advisor");
    let sites = advisor.analyze_file(&file).expect("Failed to analyze file");

    assert!(sites.is_empty());
}

#[test]
fn test_analyze_directory_filters_extensions() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let src_dir = temp_dir.path().join("src");
    fs::create_dir(&src_dir).expect("Failed to create src dir");

    fs::write(src_dir.join("matrix.c"), NESTED).expect("Failed to write matrix.c");
    fs::write(src_dir.join("notes.txt"), NESTED).expect("Failed to write notes.txt");
    fs::write(src_dir.join("single.c"), "for (;;) { step(); }")
        .expect("Failed to write single.c");

    let sites = advisor()
        .analyze_directory(temp_dir.path())
        .expect("Failed to analyze directory");

    assert_eq!(sites.len(), 1);
    assert!(sites[0].file_path.ends_with("matrix.c"));
}

#[test]
fn test_analyze_directory_honours_exclude_globs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("keep.c"), NESTED).expect("Failed to write keep.c");
    fs::write(temp_dir.path().join("skip.c"), NESTED).expect("Failed to write skip.c");

    let mut config = LoopwiseConfig::default();
    config.advisor.exclude_patterns = vec!["skip.c".to_string()];

    let advisor = NestedLoopAdvisor::from_config(&config).expect("Failed to create advisor");
    let sites = advisor
        .analyze_directory(temp_dir.path())
        .expect("Failed to analyze directory");

    assert_eq!(sites.len(), 1);
    assert!(sites[0].file_path.ends_with("keep.c"));
}
