//! Check command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::error::IniError;
use crate::ini_file::IniFile;
use crate::utils::path::read_file;

/// Execute the check command
pub fn execute(ctx: &Context) -> Result<()> {
    let content = read_file(&ctx.ini_file)?;
    let origin = ctx.ini_file.display().to_string();

    let mut file = IniFile::new();
    let report = match file.load_str(&origin, &content) {
        Ok(report) => report,
        Err(IniError::Format { line, text, .. }) => {
            println!("{}", "Issues found:".red().bold());
            println!(
                "  {} [{}] Line {}: unrecognized line {}",
                "✗".red(),
                "ERROR".red(),
                line,
                text.cyan()
            );
            anyhow::bail!("{} is not a valid INI file", origin);
        }
        Err(e) => return Err(e.into()),
    };

    let doc = file.document();

    if report.warnings.is_empty() {
        ctx.print_success("No issues found");
    } else {
        println!("{}", "Parse warnings:".yellow().bold());
        for warning in &report.warnings {
            println!(
                "  {} [{}] Line {}: {}",
                "⚠".yellow(),
                "WARNING".yellow(),
                warning.line_number,
                warning.message
            );
        }
        println!();
        println!(
            "{}",
            format!("Found {} warning(s)", report.warnings.len()).yellow()
        );
    }

    println!(
        "{}",
        format!(
            "Checked {} lines: {} keys in {} sections",
            report.lines,
            doc.len_keys(),
            doc.get_sections().len() - 1
        )
        .dimmed()
    );

    Ok(())
}
