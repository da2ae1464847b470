//! Command execution context

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::backup::BackupManager;
use crate::cli::args::Cli;
use crate::ini_file::IniFile;
use crate::model::{Config, ParseReport};

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub ini_file: PathBuf,
    pub padded_equals: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli, config: Config) -> Result<Self> {
        let ini_file = match cli.file {
            Some(ref path) => crate::utils::path::expand_tilde(&path.to_string_lossy()),
            None if cli.command.needs_file() => {
                anyhow::bail!("No INI file given. Use --file to specify one.")
            }
            None => PathBuf::new(),
        };

        let padded_equals = cli.padded || config.format.padded_equals;

        Ok(Self {
            config,
            ini_file,
            padded_equals,
        })
    }

    /// Read and parse the target file
    pub fn open(&self) -> Result<(IniFile, ParseReport)> {
        IniFile::open(&self.ini_file)
            .with_context(|| format!("Failed to load {}", self.ini_file.display()))
    }

    /// Open the target file, or start an empty document if it does not exist yet
    pub fn open_or_new(&self) -> Result<IniFile> {
        if self.ini_file.exists() {
            Ok(self.open()?.0)
        } else {
            Ok(IniFile::new())
        }
    }

    /// Back up the current file, then write the document
    pub fn save(&self, file: &IniFile) -> Result<()> {
        self.backup_manager().backup_if_exists(&self.ini_file)?;
        file.save(&self.ini_file, self.padded_equals)
            .with_context(|| format!("Failed to save {}", self.ini_file.display()))?;
        Ok(())
    }

    pub fn backup_manager(&self) -> BackupManager {
        BackupManager::new(&self.ini_file, &self.config)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}

/// Display name for a section, `(global)` for the unnamed one
pub fn section_label(section: Option<&str>) -> String {
    match section {
        Some(name) => format!("[{}]", name),
        None => "(global)".to_string(),
    }
}
