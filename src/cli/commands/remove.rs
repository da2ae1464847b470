//! Remove and remove-section command implementations

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::context::section_label;
use crate::cli::Context;

/// Execute the remove command
pub fn execute(ctx: &Context, section: Option<&str>, key: &str) -> Result<()> {
    let (mut file, _) = ctx.open()?;

    let Some(entry) = file.document_mut().remove_key(section, key) else {
        ctx.print_error(&format!("{} {} not found", section_label(section), key));
        return Ok(());
    };

    ctx.save(&file)?;
    ctx.print_success(&format!(
        "Removed {} {} = {}",
        section_label(section),
        key.cyan(),
        entry.value.unwrap_or_default().dimmed()
    ));

    Ok(())
}

/// Execute the remove-section command
pub fn execute_section(ctx: &Context, section: &str, yes: bool) -> Result<()> {
    let (mut file, _) = ctx.open()?;

    let Some(entries) = file.document().get_section(Some(section)) else {
        ctx.print_error(&format!("Section [{}] not found", section));
        return Ok(());
    };

    println!(
        "Found section {} with {} entries",
        format!("[{}]", section).cyan(),
        entries.len()
    );

    if !yes
        && !Confirm::new()
            .with_prompt("Remove this section?")
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    file.document_mut().remove_section(Some(section));
    ctx.save(&file)?;
    ctx.print_success(&format!("Removed section [{}]", section));

    Ok(())
}
