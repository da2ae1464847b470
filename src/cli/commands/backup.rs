//! Backup command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::backup::BackupManager;
use crate::cli::args::BackupCommands;
use crate::cli::Context;

/// Execute the backup command
pub fn execute(ctx: &Context, backup_cmd: &BackupCommands) -> Result<()> {
    let backup_manager = ctx.backup_manager();

    match backup_cmd {
        BackupCommands::List => list_backups(&backup_manager),
        BackupCommands::Restore { id } => restore_backup(ctx, &backup_manager, id),
        BackupCommands::Clean { keep } => clean_backups(&backup_manager, *keep),
    }
}

fn list_backups(manager: &BackupManager) -> Result<()> {
    let backups = manager.list_backups()?;

    if backups.is_empty() {
        println!("{}", "No backups found.".dimmed());
        return Ok(());
    }

    println!("{}", "Available backups:".bold());
    println!();

    println!(
        "{:<36} {:<20} {}",
        "ID".bold().cyan(),
        "TIMESTAMP".bold().cyan(),
        "SIZE".bold().cyan()
    );
    println!("{}", "─".repeat(66).dimmed());

    for backup in &backups {
        println!(
            "{:<36} {:<20} {}",
            backup.id.white(),
            backup.timestamp.dimmed(),
            format_size(backup.size).dimmed()
        );
    }

    println!();
    println!("{}", format!("Total: {} backup(s)", backups.len()).dimmed());

    Ok(())
}

fn restore_backup(ctx: &Context, manager: &BackupManager, id: &str) -> Result<()> {
    let Some(backup) = manager.get_backup(id)? else {
        anyhow::bail!("Backup not found: {}", id);
    };

    println!(
        "Restoring backup: {} ({})",
        backup.id.cyan(),
        backup.timestamp.dimmed()
    );

    if !Confirm::new()
        .with_prompt("This will overwrite the current file. Continue?")
        .default(false)
        .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    manager.restore_backup(&backup.id, &ctx.ini_file)?;

    ctx.print_success(&format!(
        "Restored backup to {}",
        ctx.ini_file.display().to_string().cyan()
    ));

    Ok(())
}

fn clean_backups(manager: &BackupManager, keep: usize) -> Result<()> {
    let removed = manager.cleanup_keep(keep)?;

    if removed == 0 {
        println!("{}", "No old backups to clean.".dimmed());
    } else {
        println!(
            "{} Removed {} old backup(s), keeping {}",
            "✓".green(),
            removed,
            keep
        );
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
