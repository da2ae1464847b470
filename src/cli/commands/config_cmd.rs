//! Config command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::config::save_config;
use crate::model::Config;

/// Execute the config command
pub fn execute(ctx: &Context, init: bool) -> Result<()> {
    let path = Config::config_path();

    if init {
        if path.exists() {
            ctx.print_warning(&format!("{} already exists", path.display()));
            return Ok(());
        }
        save_config(&Config::default())?;
        ctx.print_success(&format!("Created {}", path.display()));
        return Ok(());
    }

    println!("{}", path.display().to_string().dimmed());
    print!("{}", toml::to_string_pretty(&ctx.config)?);

    Ok(())
}
