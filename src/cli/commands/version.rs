//! Version command implementation
//!
//! Displays version information about Loopwise.

use crate::cli::Output;
use anyhow::Result;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");
    let repository = env!("CARGO_PKG_REPOSITORY");

    output.header("🔁 Loopwise Version Information");

    output.key_value("Version:", &format!("{} v{}", name, version), true);
    output.key_value("Description:", description, false);
    output.key_value("Repository:", repository, false);
    output.blank_line();

    output.key_value("Rust edition:", "2024", false);
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );

    output.blank_line();
    output.success("💡 Run 'loopwise --help' for usage information");

    Ok(())
}
