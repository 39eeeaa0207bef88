//! Templates command implementation
//!
//! Lists known template strategy keys or prints one template in full.

use crate::advisor::templates::{get_template, template_keys};
use crate::cli::Output;
use anyhow::Result;

/// Execute the templates command
pub async fn execute(key: Option<&str>, output: &Output) -> Result<()> {
    match key {
        Some(key) => {
            let template = get_template(key);
            if template.is_empty() {
                output.warning(&format!("No template available for key '{}'", key));
                output.info("Run 'loopwise templates' to list known keys");
            } else {
                output.header(&format!("📋 {} Template", key));
                println!("{}", template.trim_start_matches('\n'));
            }
        }
        None => {
            output.header("📋 Available Templates");
            for key in template_keys() {
                output.list_item(key);
            }
            output.blank_line();
            output.info("Run 'loopwise templates <KEY>' to print a template");
        }
    }

    Ok(())
}
