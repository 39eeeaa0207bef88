//! # Loopwise - Nested-Loop Parallelization Advisor
//!
//! Loopwise scans C-family source text for nested `for` loops and suggests
//! an OpenMP parallelization template for each one it finds. Detection is a
//! deliberately simple textual heuristic - a single regular expression that
//! spans lines - so the advisor is fast, dependency-free at its core, and
//! easy to reason about.
//!
//! ## Features
//!
//! - **Pure analysis core**: one text in, one result out, no side effects
//! - **Editor-agnostic**: host integration sits behind two narrow traits
//! - **Configurable patterns**: add or disable detection patterns via YAML
//! - **Template insertion**: optionally writes the suggestion into the file
//!
//! ## Quick Start
//!
//! ```bash
//! # Analyze a source tree
//! loopwise analyze -d src/
//!
//! # Insert the OpenMP template into files with nested loops
//! loopwise analyze -i hot_path.c --insert
//! ```

pub mod advisor;
pub mod cli;
pub mod config;
pub mod host;

pub use advisor::{AnalysisResult, NestedLoopAdvisor};
pub use cli::{Cli, Output};
pub use config::LoopwiseConfig;

/// Result type alias for Loopwise operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
