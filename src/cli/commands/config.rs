//! Configuration command implementations
//!
//! Commands for managing Loopwise configuration.

use crate::advisor::LoopPattern;
use crate::cli::{ConfigCommands, Output};
use crate::config::LoopwiseConfig;
use anyhow::Result;

/// Execute config commands
pub async fn execute(cmd: ConfigCommands, config_flag: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(config_flag, output).await,
        ConfigCommands::Validate => validate(config_flag, output).await,
        ConfigCommands::Show => show(config_flag, output).await,
    }
}

async fn init(config_flag: Option<&str>, output: &Output) -> Result<()> {
    output.header("🔧 Initializing Configuration");

    let config_path = super::config_path(config_flag)?;

    if config_path.exists() {
        output.warning("Configuration file already exists");
        if !output.confirm("Do you want to overwrite it?") {
            output.info("Configuration initialization cancelled");
            return Ok(());
        }
    }

    let config = LoopwiseConfig::default();
    config.save_to_file(&config_path)?;

    output.success("Configuration file created successfully");
    output.table_row("Config file", &config_path.display().to_string());
    output.info("Edit loopwise.yml to customize detection patterns");

    Ok(())
}

async fn validate(config_flag: Option<&str>, output: &Output) -> Result<()> {
    output.header("✅ Validating Configuration");

    let config_path = super::config_path(config_flag)?;

    if !config_path.exists() {
        output.error("Configuration file not found");
        output.indent("Run 'loopwise config init' to create a configuration file");
        return Ok(());
    }

    match LoopwiseConfig::load_from_file(&config_path) {
        Ok(config) => {
            output.success("Configuration is valid");
            output.blank_line();

            output.step("Configuration Summary");
            output.table_row(
                "Detection patterns",
                &config.advisor.patterns.len().to_string(),
            );
            output.table_row(
                "Exclude patterns",
                &config.advisor.exclude_patterns.len().to_string(),
            );
            output.table_row("Extensions", &config.advisor.extensions.join(", "));

            output.blank_line();
            output.step("Detection Patterns");
            for pattern in &config.advisor.patterns {
                if !pattern.enabled {
                    output.info(&format!("○ {} (disabled)", pattern.name));
                    continue;
                }

                match LoopPattern::new(
                    pattern.name.clone(),
                    &pattern.regex,
                    pattern.template.clone(),
                    pattern.description.clone(),
                ) {
                    Ok(_) => {
                        output.success(&format!("✓ {} ({})", pattern.name, pattern.template))
                    }
                    Err(err) => {
                        output.error(&format!("✗ {}", pattern.name));
                        output.indent(&format!("Error: {}", err));
                    }
                }
            }
        }
        Err(err) => {
            output.error("Configuration file is invalid");
            output.indent(&format!("Error: {}", err));
        }
    }

    Ok(())
}

async fn show(config_flag: Option<&str>, output: &Output) -> Result<()> {
    output.header("📄 Current Configuration");

    let config_path = super::config_path(config_flag)?;

    let config = if config_path.exists() {
        output.table_row("Source", &config_path.display().to_string());
        LoopwiseConfig::load_from_file(&config_path)?
    } else {
        output.table_row("Source", "built-in defaults");
        LoopwiseConfig::default()
    };

    output.blank_line();
    let yaml = serde_yml::to_string(&config)?;
    println!("{}", yaml);

    Ok(())
}
