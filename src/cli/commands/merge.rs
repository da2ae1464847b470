//! Merge command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::context::section_label;
use crate::cli::Context;
use crate::ini_file::IniFile;
use crate::utils::http::{fetch_url, is_url};
use crate::utils::path::{expand_tilde, read_file};

/// Execute the merge command
pub fn execute(ctx: &Context, source: &str, yes: bool) -> Result<()> {
    let content = if is_url(source) {
        println!("Fetching from URL: {}", source.cyan());
        fetch_url(source)?
    } else {
        let path = expand_tilde(source);
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        read_file(&path)?
    };

    // Preview the incoming document on its own before touching the target
    let mut incoming = IniFile::new();
    let report = incoming.load_str(source, &content)?;
    let incoming = incoming.into_document();

    if incoming.len_keys() == 0 {
        println!("{}", "No keys found in source.".yellow());
        return Ok(());
    }

    let mut file = ctx.open_or_new()?;
    let current = file.document();

    println!();
    println!(
        "{}",
        format!("Found {} keys:", incoming.len_keys()).green().bold()
    );
    println!();

    let mut overwrites = 0;
    for section in incoming.sections() {
        for entry in section.entries().iter().filter(|e| !e.is_standalone_comment()) {
            let exists = current.contains_key(section.name(), entry.key());
            if exists {
                overwrites += 1;
            }
            println!(
                "  {} {:<12} {} = {}",
                if exists { "~".yellow() } else { "+".green() },
                section_label(section.name()),
                entry.key().white(),
                entry.value.as_deref().unwrap_or_default().dimmed()
            );
        }
    }
    println!();

    for warning in &report.warnings {
        ctx.print_warning(&format!("Line {}: {}", warning.line_number, warning.message));
    }

    if overwrites > 0 {
        ctx.print_warning(&format!("{} existing keys will be overwritten", overwrites));
    }

    if !yes
        && !Confirm::new()
            .with_prompt("Proceed with merge?")
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    file.merge_str(source, &content)?;
    ctx.save(&file)?;

    ctx.print_success(&format!(
        "Merged {} keys into {}",
        incoming.len_keys(),
        ctx.ini_file.display()
    ));

    Ok(())
}
