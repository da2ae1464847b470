//! inidoc - INI Document Manager
//!
//! Parses INI files into an ordered, comment-preserving document model and
//! writes them back out.
//!
//! # Features
//!
//! - Sections, a global (header-less) section and `key=value` entries
//! - `#` and `;` comments attached to the section or key that follows them
//! - Typed accessors with default fallback (int, long, double, float, bool)
//! - Merging further sources on top of a loaded document
//! - Stable, re-parseable output with optional `key = value` padding
//! - Automatic backups before the CLI rewrites a file

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod ini_file;
pub mod model;
pub mod parser;
pub mod utils;

pub use error::{IniError, Result};
pub use formatter::IniFormatter;
pub use ini_file::IniFile;
pub use model::{validate_comment, Config, Entry, IniDocument, ParseReport, Section};
pub use parser::IniParser;
