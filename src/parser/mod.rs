//! # Parser Module
//!
//! Turns INI text into an [`IniDocument`].
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs       - This file: IniParser + main loop
//! ├── patterns.rs  - Regex patterns (LINE_RE, COMMENT_RE)
//! ├── line.rs      - Single-line classification
//! └── pending.rs   - Comment blocks waiting for an owner
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inidoc::model::IniDocument;
//! use inidoc::parser::IniParser;
//!
//! let mut doc = IniDocument::new();
//! let report = IniParser::new().parse_into(&mut doc, "app.ini", &content)?;
//! for warning in report.warnings {
//!     println!("line {}: {}", warning.line_number, warning.message);
//! }
//! ```
//!
//! Parsing stops at the first unrecognized line with [`IniError::Format`].
//! Entries inserted before that line stay in the document; callers that
//! need all-or-nothing behavior parse into a scratch document (see
//! [`crate::IniFile`]).

pub mod line;
pub mod patterns;
pub mod pending;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{IniError, Result};
use crate::model::{IniDocument, ParseReport, ParseWarning};

use line::{classify, Line};
use pending::PendingComment;

/// Line-by-line INI parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct IniParser;

impl IniParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `content` on top of whatever `doc` already holds.
    ///
    /// `origin` names the source (file path, URL) in errors and logs.
    pub fn parse_into(
        &self,
        doc: &mut IniDocument,
        origin: &str,
        content: &str,
    ) -> Result<ParseReport> {
        let mut report = ParseReport::new();

        let mut current: Option<String> = None;
        let mut pending: Option<PendingComment> = None;

        let mut seen_sections: HashSet<String> = HashSet::new();
        let mut seen_keys: HashSet<(Option<String>, String)> = HashSet::new();

        for (line_num, raw) in content.lines().enumerate() {
            let line_number = line_num + 1;
            report.lines = line_number;

            match classify(raw) {
                Line::Blank => {
                    if let Some(block) = pending.take() {
                        attach_standalone(doc, current.as_deref(), block, line_number)
                            .map_err(|_| format_error(origin, line_number, raw))?;
                    }
                }
                Line::Comment(text) => {
                    if let Some(block) = pending.as_mut() {
                        block.add_line(text);
                    } else {
                        pending = Some(PendingComment::new(text));
                    }
                }
                Line::Section(name) => {
                    if name.is_empty() {
                        return Err(format_error(origin, line_number, raw));
                    }
                    report.sections += 1;

                    if !seen_sections.insert(name.to_string()) {
                        warn!("{}:{}: section [{}] opened again", origin, line_number, name);
                        report.add_warning(ParseWarning::new(
                            line_number,
                            format!("section [{}] defined more than once", name),
                            raw,
                        ));
                    }

                    let comment = pending.take().map(PendingComment::into_comment);
                    // a re-opened section without a comment keeps its old one
                    if comment.is_some() || !doc.contains_section(Some(name)) {
                        doc.ensure_section(Some(name), comment.as_deref())
                            .map_err(|_| format_error(origin, line_number, raw))?;
                    }
                    current = Some(name.to_string());
                }
                Line::KeyValue { key, value } => {
                    let key = key.trim();
                    if key.is_empty() {
                        return Err(format_error(origin, line_number, raw));
                    }
                    report.keys += 1;

                    if !seen_keys.insert((current.clone(), key.to_string())) {
                        warn!("{}:{}: key '{}' redefined", origin, line_number, key);
                        report.add_warning(ParseWarning::new(
                            line_number,
                            format!(
                                "key '{}' in {} defined more than once; last value wins",
                                key,
                                describe_section(current.as_deref())
                            ),
                            raw,
                        ));
                    }

                    let section = current.as_deref();
                    let value = value.trim();
                    let stored = match pending.take() {
                        Some(block) => {
                            let comment = block.into_comment();
                            doc.set_string_with_comment(section, key, value, Some(&comment))
                        }
                        None => doc.set_string(section, key, value),
                    };
                    stored.map_err(|_| format_error(origin, line_number, raw))?;
                }
                Line::Tail(_) => return Err(format_error(origin, line_number, raw)),
            }
        }

        if let Some(block) = pending.take() {
            let end_line = report.lines + 1;
            attach_standalone(doc, current.as_deref(), block, end_line)
                .map_err(|_| format_error(origin, end_line, ""))?;
        }

        debug!(
            "{}: parsed {} lines, {} sections, {} keys, {} warnings",
            origin,
            report.lines,
            report.sections,
            report.keys,
            report.warnings.len()
        );

        Ok(report)
    }
}

/// Store a comment block that was followed by a blank line or end of input.
///
/// A block at the very top of an otherwise empty global section becomes the
/// global section comment; the formatter writes that back as comment plus
/// blank line, so both forms render identically.
fn attach_standalone(
    doc: &mut IniDocument,
    section: Option<&str>,
    block: PendingComment,
    line_number: usize,
) -> Result<()> {
    let comment = block.into_comment();

    let top_of_file = section.is_none()
        && doc.get_section_comment(None).is_none()
        && doc.get_section(None).is_some_and(<[_]>::is_empty);

    if top_of_file {
        doc.ensure_section(None, Some(&comment))
    } else {
        doc.push_standalone_comment(section, comment, line_number)
    }
}

fn format_error(origin: &str, line: usize, raw: &str) -> IniError {
    IniError::Format {
        origin: origin.to_string(),
        line,
        text: raw.to_string(),
    }
}

fn describe_section(section: Option<&str>) -> String {
    match section {
        Some(name) => format!("[{}]", name),
        None => "the global section".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<(IniDocument, ParseReport)> {
        let mut doc = IniDocument::new();
        let report = IniParser::new().parse_into(&mut doc, "test.ini", content)?;
        Ok((doc, report))
    }

    #[test]
    fn test_parse_sections_and_global() {
        let (doc, report) = parse("Home=Newtown\n\n[Employees]\n001=Fred Smith\n").unwrap();

        assert_eq!(doc.get_sections(), vec![None, Some("Employees")]);
        assert_eq!(doc.get_string_global("Home", ""), "Newtown");
        assert_eq!(doc.get_string(Some("Employees"), "001", ""), "Fred Smith");
        assert_eq!(report.lines, 4);
        assert_eq!(report.sections, 1);
        assert_eq!(report.keys, 2);
    }

    #[test]
    fn test_comment_attaches_to_following_key() {
        let (doc, _) = parse("[s]\n; Good worker\nComments=see above\n").unwrap();
        assert_eq!(doc.get_comment(Some("s"), "Comments"), Some("; Good worker"));
    }

    #[test]
    fn test_comment_attaches_to_following_section() {
        let (doc, _) = parse("a=1\n# about s\n# more\n[s]\nb=2\n").unwrap();
        assert_eq!(doc.get_section_comment(Some("s")), Some("# about s\n# more"));
    }

    #[test]
    fn test_comment_before_blank_is_standalone() {
        let (doc, _) = parse("[s]\na=1\n# loose\n\nb=2\n").unwrap();

        let entries = doc.get_section(Some("s")).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].key(), "#4");
        assert!(entries[1].is_standalone_comment());
        assert_eq!(entries[1].comment.as_deref(), Some("# loose"));
        assert_eq!(doc.get_comment(Some("s"), "b"), None);
    }

    #[test]
    fn test_trailing_comment_at_end_of_input() {
        let (doc, _) = parse("[s]\na=1\n; the end").unwrap();

        let entries = doc.get_section(Some("s")).unwrap();
        assert_eq!(entries[1].key(), ";4");
        assert_eq!(entries[1].comment.as_deref(), Some("; the end"));
    }

    #[test]
    fn test_leading_comment_becomes_global_comment() {
        let (doc, _) = parse("# file header\n\nk=v\n").unwrap();
        assert_eq!(doc.get_section_comment(None), Some("# file header"));
        assert_eq!(doc.get_section(None).unwrap().len(), 1);
    }

    #[test]
    fn test_values_and_keys_are_trimmed() {
        let (doc, _) = parse("  name  =  padded value  \nempty=\n").unwrap();
        assert_eq!(doc.get_string_global("name", ""), "padded value");
        assert!(doc.contains_key(None, "empty"));
        assert_eq!(doc.get_string_global("empty", "dflt"), "");
    }

    #[test]
    fn test_format_error_reports_line() {
        let err = parse("not a valid line!!").unwrap_err();
        match err {
            IniError::Format { origin, line, text } => {
                assert_eq!(origin, "test.ini");
                assert_eq!(line, 1);
                assert_eq!(text, "not a valid line!!");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse("a=1\n[]\n").unwrap_err();
        assert_eq!(err.line_number(), Some(2));

        let err = parse("a=1\n\n   = orphan\n").unwrap_err();
        assert_eq!(err.line_number(), Some(3));
    }

    #[test]
    fn test_duplicate_key_warns_and_last_wins() {
        let (doc, report) = parse("[s]\nk=1\nk=2\n").unwrap();
        assert_eq!(doc.get_string(Some("s"), "k", ""), "2");
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].line_number, 3);
    }

    #[test]
    fn test_reopened_section_keeps_comment() {
        let (doc, report) = parse("# first\n[s]\na=1\n[t]\n[s]\nb=2\n").unwrap();
        assert_eq!(doc.get_sections(), vec![None, Some("s"), Some("t")]);
        assert_eq!(doc.get_section_comment(Some("s")), Some("# first"));
        assert_eq!(doc.get_section(Some("s")).unwrap().len(), 2);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_merge_overwrites_existing_values() {
        let (mut doc, _) = parse("[s]\na=1\nb=2\n").unwrap();
        IniParser::new()
            .parse_into(&mut doc, "extra.ini", "[s]\nb=3\nc=4\n[u]\nx=y\n")
            .unwrap();

        assert_eq!(doc.get_string(Some("s"), "a", ""), "1");
        assert_eq!(doc.get_string(Some("s"), "b", ""), "3");
        assert_eq!(doc.get_string(Some("s"), "c", ""), "4");
        assert_eq!(doc.get_sections(), vec![None, Some("s"), Some("u")]);
    }
}
