//! Core data models for inidoc

mod config;
mod document;
mod entry;
mod report;
mod section;

pub use config::{BackupConfig, Config, FormatConfig, LogConfig};
pub use document::{validate_comment, IniDocument, IniValue};
pub use entry::{Entry, COMMENT_MARKERS};
pub use report::{ParseReport, ParseWarning};
pub use section::Section;
