//! Console output handling
//!
//! Consistent, styled output for the CLI: status symbols, headers, and
//! quiet/verbose modes.

use console::style;
use std::io::{self, Write};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a step in a process
    pub fn step(&self, step: &str) {
        if !self.quiet {
            println!("{} {}", style("❯").cyan(), step);
        }
    }

    /// Print a table row
    pub fn table_row(&self, key: &str, value: &str) {
        println!("  {:<20} {}", style(key).dim(), value);
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        println!("  • {}", item);
    }

    /// Print an indented message
    pub fn indent(&self, message: &str) {
        println!("    {}", message);
    }

    /// Print a section separator
    pub fn separator(&self) {
        println!("{}", style("─".repeat(50)).dim());
    }

    /// Print blank line
    pub fn blank_line(&self) {
        println!();
    }

    /// Print a count/summary with enhanced styling
    pub fn count(&self, icon: &str, message: &str, count: usize) {
        if !self.quiet {
            println!(
                "{} {} {}",
                style(icon).cyan().bold(),
                style(message).bold(),
                style(format!("({})", count)).dim()
            );
        }
    }

    /// Print a file location with enhanced styling
    pub fn file_location(&self, file: &str, line: usize) {
        println!(
            "    {} {}:{}",
            style("•").cyan(),
            style(file).underlined(),
            style(line.to_string()).yellow()
        );
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str, highlight: bool) {
        if !self.quiet {
            let styled_value = if highlight {
                style(value).green().bold()
            } else {
                style(value).white()
            };
            println!("  {} {}", style(key).dim(), styled_value);
        }
    }

    /// Ask for user confirmation
    pub fn confirm(&self, message: &str) -> bool {
        print!("{} {} (y/N): ", style("❯").cyan(), message);
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }

        matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
