//! Format command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::utils::path::read_file;

/// Execute the format command
pub fn execute(ctx: &Context, dry_run: bool) -> Result<()> {
    let (file, _) = ctx.open()?;
    let formatted = file.render(ctx.padded_equals);

    let current = read_file(&ctx.ini_file)?;

    if formatted == current {
        ctx.print_success("File is already formatted");
        return Ok(());
    }

    if dry_run {
        println!("{}", "Dry run - showing formatted output:".yellow().bold());
        println!();
        println!("{}", "─".repeat(60).dimmed());
        print!("{}", formatted);
        println!("{}", "─".repeat(60).dimmed());
        println!();

        println!(
            "{}",
            format!(
                "Current: {} lines, Formatted: {} lines",
                current.lines().count(),
                formatted.lines().count()
            )
            .dimmed()
        );

        return Ok(());
    }

    ctx.save(&file)?;
    ctx.print_success("File formatted");

    Ok(())
}
