//! CLI command implementations

pub mod backup;
pub mod check;
pub mod config_cmd;
pub mod format;
pub mod get;
pub mod list;
pub mod merge;
pub mod remove;
pub mod set;

use anyhow::Result;

use crate::cli::args::Commands;
use crate::cli::Context;

/// Dispatch a parsed command
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Get {
            key,
            section,
            default,
        } => get::execute(ctx, section.as_deref(), key, default.as_deref()),
        Commands::Set {
            key,
            value,
            section,
            comment,
        } => set::execute(ctx, section.as_deref(), key, value, comment.as_deref()),
        Commands::Comment { key, text, section } => {
            set::execute_comment(ctx, section.as_deref(), key, text.as_deref())
        }
        Commands::List { section } => list::execute(ctx, section.as_deref()),
        Commands::Sections => list::execute_sections(ctx),
        Commands::Remove { key, section } => remove::execute(ctx, section.as_deref(), key),
        Commands::RemoveSection { section, yes } => {
            remove::execute_section(ctx, section, *yes)
        }
        Commands::Merge { source, yes } => merge::execute(ctx, source, *yes),
        Commands::Format { dry_run } => format::execute(ctx, *dry_run),
        Commands::Check => check::execute(ctx),
        Commands::Backup { backup_command } => backup::execute(ctx, backup_command),
        Commands::Config { init } => config_cmd::execute(ctx, *init),
    }
}
