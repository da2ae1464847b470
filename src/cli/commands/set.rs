//! Set and comment command implementations

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::section_label;
use crate::cli::Context;

/// Execute the set command
pub fn execute(
    ctx: &Context,
    section: Option<&str>,
    key: &str,
    value: &str,
    comment: Option<&str>,
) -> Result<()> {
    let mut file = ctx.open_or_new()?;
    let doc = file.document_mut();

    let previous = match comment {
        Some(comment) => doc.set_string_with_comment(section, key, value, Some(comment))?,
        None => doc.set_string(section, key, value)?,
    };

    ctx.save(&file)?;

    match previous {
        Some(old) if old != value => ctx.print_success(&format!(
            "Updated {} {}: {} → {}",
            section_label(section),
            key.cyan(),
            old.dimmed(),
            value
        )),
        Some(_) => ctx.print_success(&format!(
            "{} {} unchanged",
            section_label(section),
            key.cyan()
        )),
        None => ctx.print_success(&format!(
            "Added {} {} = {}",
            section_label(section),
            key.cyan(),
            value
        )),
    }

    Ok(())
}

/// Execute the comment command: show the comment, or replace it when `text` is given
pub fn execute_comment(
    ctx: &Context,
    section: Option<&str>,
    key: &str,
    text: Option<&str>,
) -> Result<()> {
    let Some(text) = text else {
        let (file, _) = ctx.open()?;
        match file.document().get_comment(section, key) {
            Some(comment) => println!("{}", comment),
            None => println!("{}", "(no comment)".dimmed()),
        }
        return Ok(());
    };

    let mut file = ctx.open_or_new()?;
    // an empty argument clears the comment
    let comment = Some(text).filter(|t| !t.is_empty());
    file.document_mut().set_comment(section, key, comment)?;

    ctx.save(&file)?;
    ctx.print_success(&format!(
        "Comment of {} {} updated",
        section_label(section),
        key.cyan()
    ));

    Ok(())
}
