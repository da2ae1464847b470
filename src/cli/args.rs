//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inidoc")]
#[command(about = "INI document manager - query, edit and re-format INI files")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// INI file to operate on
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Write `key = value` instead of `key=value` (overrides config)
    #[arg(long, global = true)]
    pub padded: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value of a key
    Get {
        /// Key name
        key: String,
        /// Section name (global section if omitted)
        #[arg(short, long)]
        section: Option<String>,
        /// Printed when the key is missing
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Set the value of a key, creating section and key as needed
    Set {
        /// Key name
        key: String,
        /// New value
        value: String,
        /// Section name (global section if omitted)
        #[arg(short, long)]
        section: Option<String>,
        /// Comment written above the key, e.g. "# note"
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Show or set the comment of a key
    Comment {
        /// Key name
        key: String,
        /// New comment; shows the current one when omitted
        text: Option<String>,
        /// Section name (global section if omitted)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// List entries
    #[command(visible_alias = "ls")]
    List {
        /// Only list this section
        #[arg(short, long)]
        section: Option<String>,
    },

    /// List section names
    Sections,

    /// Remove a key
    #[command(visible_alias = "rm")]
    Remove {
        /// Key name
        key: String,
        /// Section name (global section if omitted)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Remove a whole section
    #[command(visible_alias = "rm-section")]
    RemoveSection {
        /// Section name
        section: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Merge another INI file or URL into the target file
    Merge {
        /// File path or URL
        source: String,
        /// Skip preview confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Rewrite the file in canonical form
    Format {
        /// Show the result without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse the file and report problems
    Check,

    /// Backup management
    Backup {
        #[command(subcommand)]
        backup_command: BackupCommands,
    },

    /// Show the configuration, or write the defaults with --init
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// List backups
    List,
    /// Restore backup
    Restore {
        /// Backup ID
        id: String,
    },
    /// Clean old backups
    Clean {
        /// Number to keep
        #[arg(long, default_value = "20")]
        keep: usize,
    },
}

impl Commands {
    /// Whether the command needs a target INI file.
    pub fn needs_file(&self) -> bool {
        !matches!(self, Commands::Config { .. })
    }
}
