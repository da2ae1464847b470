//! List and sections command implementations

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::section_label;
use crate::cli::Context;
use crate::model::{Entry, Section};

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Calculate key and value column widths from the terminal width
fn calculate_column_widths(term_width: usize) -> (usize, usize) {
    // "│ " prefix (2) + " │" suffix (2) + space between columns (1)
    let fixed_overhead = 5;
    let available = term_width.saturating_sub(fixed_overhead);

    let key_width = (available * 35 / 100).clamp(8, 30);
    let value_width = available.saturating_sub(key_width + 1).max(10);

    (key_width, value_width)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
fn truncate_value(s: &str, max_width: usize) -> String {
    let s = s.replace('\n', "\\n");

    if s.chars().count() <= max_width {
        s
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

fn print_section(section: &Section, key_w: usize, value_w: usize) {
    let label = section_label(section.name());
    let count = format!("({} keys)", section.key_count());
    println!("┌─ {} {}", label.bold().blue(), count.dimmed());

    if let Some(ref comment) = section.comment {
        println!("│ {}", truncate_value(comment, key_w + value_w + 1).dimmed());
    }

    for entry in section.entries() {
        print_entry(entry, key_w, value_w);
    }

    println!("└{}", "─".repeat(key_w + value_w + 3).dimmed());
}

fn print_entry(entry: &Entry, key_w: usize, value_w: usize) {
    if entry.is_standalone_comment() {
        let comment = entry.comment.as_deref().unwrap_or_default();
        println!(
            "│ {}",
            truncate_value(comment, key_w + value_w + 1).white().dimmed()
        );
        return;
    }

    let value = entry.value.as_deref().unwrap_or_default();
    let marker = if entry.comment.is_some() { "*" } else { " " };
    println!(
        "│ {:<key_w$} {}{}",
        truncate_value(entry.key(), key_w).cyan(),
        truncate_value(value, value_w.saturating_sub(1)),
        marker.yellow(),
        key_w = key_w
    );
}

/// Execute the list command
pub fn execute(ctx: &Context, section: Option<&str>) -> Result<()> {
    let (file, report) = ctx.open()?;
    let doc = file.document();

    for warning in &report.warnings {
        ctx.print_warning(&format!("Line {}: {}", warning.line_number, warning.message));
    }

    let (key_w, value_w) = calculate_column_widths(get_terminal_width());

    let sections: Vec<&Section> = match section {
        Some(name) => {
            let found: Vec<&Section> = doc
                .sections()
                .filter(|s| s.name() == Some(name.trim()))
                .collect();
            if found.is_empty() {
                anyhow::bail!("Section [{}] not found", name);
            }
            found
        }
        // the global section is only shown when it has content
        None => doc
            .sections()
            .filter(|s| !s.is_global() || !s.is_empty() || s.comment.is_some())
            .collect(),
    };

    if sections.is_empty() {
        println!("{}", "No entries found.".dimmed());
        return Ok(());
    }

    for section in sections {
        print_section(section, key_w, value_w);
    }

    println!();
    println!(
        "{}",
        format!(
            "Total: {} keys in {} sections ({} marks a commented key)",
            doc.len_keys(),
            doc.get_sections().len() - 1,
            "*"
        )
        .dimmed()
    );

    Ok(())
}

/// Execute the sections command
pub fn execute_sections(ctx: &Context) -> Result<()> {
    let (file, _) = ctx.open()?;

    for section in file.document().sections() {
        println!(
            "{} {}",
            section_label(section.name()),
            format!("({} keys)", section.key_count()).dimmed()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_value() {
        assert_eq!(truncate_value("short", 10), "short");
        assert_eq!(truncate_value("a long value here", 8), "a lon...");
        assert_eq!(truncate_value("a\nb", 10), "a\\nb");
    }

    #[test]
    fn test_column_widths() {
        let (key_w, value_w) = calculate_column_widths(80);
        assert!(key_w >= 8 && key_w <= 30);
        assert!(key_w + value_w + 5 <= 81);
    }
}
