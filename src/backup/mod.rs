//! Backup management module

use anyhow::{Context, Result};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::debug;

use crate::model::Config;

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub id: String,
    pub path: PathBuf,
    pub timestamp: String,
    pub filename: String,
    pub size: u64,
}

/// Backup manager for a single INI file
pub struct BackupManager {
    backup_dir: PathBuf,
    max_count: usize,
    cleanup_counter: Cell<u32>,
    last_cleanup_time: Cell<Option<OffsetDateTime>>,
}

/// Directory name for a target file's backups, e.g. `app.ini`.
fn backup_dir_name(target: &Path) -> String {
    target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "document.ini".to_string())
}

impl BackupManager {
    pub fn new(target: &Path, config: &Config) -> Self {
        Self::with_dir(
            Config::backups_dir().join(backup_dir_name(target)),
            config.backup.max_count,
        )
    }

    pub fn with_dir(backup_dir: PathBuf, max_count: usize) -> Self {
        Self {
            backup_dir,
            max_count,
            cleanup_counter: Cell::new(0),
            last_cleanup_time: Cell::new(None),
        }
    }

    /// Ensure backup directory exists
    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.backup_dir).with_context(|| {
            format!(
                "Failed to create backup directory {}",
                self.backup_dir.display()
            )
        })
    }

    /// Create a backup of the specified file
    pub fn create_backup(&self, source_file: &Path) -> Result<PathBuf> {
        self.ensure_dir()?;

        let now = OffsetDateTime::now_utc();
        let timestamp = format!(
            "{:04}-{:02}-{:02}_{:02}{:02}{:02}",
            now.year(),
            now.month() as u8,
            now.day(),
            now.hour(),
            now.minute(),
            now.second()
        );

        let backup_name = format!("{}_{:09}.bak", timestamp, now.nanosecond());
        let backup_path = self.backup_dir.join(&backup_name);

        std::fs::copy(source_file, &backup_path)
            .with_context(|| format!("Failed to back up {}", source_file.display()))?;
        debug!("backup {} -> {}", source_file.display(), backup_path.display());

        // Only cleanup every 10 backups or after 1 hour
        let counter = self.cleanup_counter.get();
        let should_cleanup = if counter >= 10 {
            true
        } else if let Some(last_cleanup) = self.last_cleanup_time.get() {
            (OffsetDateTime::now_utc() - last_cleanup).whole_hours() >= 1
        } else {
            true
        };

        if should_cleanup {
            self.cleanup_old_backups()?;
            self.cleanup_counter.set(0);
            self.last_cleanup_time.set(Some(OffsetDateTime::now_utc()));
        } else {
            self.cleanup_counter.set(counter + 1);
        }

        Ok(backup_path)
    }

    /// Create a backup only if the file already exists
    pub fn backup_if_exists(&self, source_file: &Path) -> Result<Option<PathBuf>> {
        if source_file.exists() {
            self.create_backup(source_file).map(Some)
        } else {
            Ok(None)
        }
    }

    /// List all backups, newest first
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for entry in std::fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().map(|e| e == "bak").unwrap_or(false) {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                let size = entry.metadata()?.len();

                // "<date>_<time>_<nanos>.bak"
                let timestamp = filename.split('_').take(2).collect::<Vec<_>>().join("_");
                let id = filename.trim_end_matches(".bak").to_string();

                entries.push(BackupEntry {
                    id,
                    path: path.clone(),
                    timestamp,
                    filename,
                    size,
                });
            }
        }

        entries.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(entries)
    }

    /// Restore a backup by ID
    pub fn restore_backup(&self, id: &str, target_file: &Path) -> Result<()> {
        let backup = self
            .get_backup(id)?
            .ok_or_else(|| anyhow::anyhow!("Backup not found: {}", id))?;

        // Create a backup of current state before restoring
        self.backup_if_exists(target_file)?;

        std::fs::copy(&backup.path, target_file)
            .with_context(|| format!("Failed to restore {}", target_file.display()))?;

        Ok(())
    }

    /// Clean up old backups, keeping the configured number
    pub fn cleanup_old_backups(&self) -> Result<usize> {
        self.cleanup_keep(self.max_count)
    }

    /// Clean up backups, keeping only the specified number
    pub fn cleanup_keep(&self, keep: usize) -> Result<usize> {
        let backups = self.list_backups()?;

        if backups.len() <= keep {
            return Ok(0);
        }

        let mut removed = 0;
        for backup in backups.into_iter().skip(keep) {
            std::fs::remove_file(&backup.path)?;
            removed += 1;
        }

        Ok(removed)
    }

    /// Get a specific backup by ID (or a unique part of it)
    pub fn get_backup(&self, id: &str) -> Result<Option<BackupEntry>> {
        let backups = self.list_backups()?;
        Ok(backups
            .into_iter()
            .find(|b| b.id == id || b.filename.contains(id)))
    }
}
