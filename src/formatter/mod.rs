//! Formatter module: renders an [`IniDocument`] back to INI text
//!
//! ## Output Layout
//!
//! ```text
//! # global comment          <- section comment, then a blank line
//!
//! top=level                 <- global entries, no header
//! # about db                <- section comment
//! [db]
//!                           <- blank line after every header
//! # key comment
//! host=localhost
//! ; standalone note         <- standalone comment, then a blank line
//!
//! ```
//!
//! Re-parsing the output reproduces the same sections, keys, values and
//! comments. Standalone comments get fresh synthetic keys on re-parse.

use crate::model::{Entry, FormatConfig, IniDocument};

/// INI text formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct IniFormatter {
    /// Write `key = value` instead of `key=value`.
    padded_equals: bool,
}

impl IniFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padded_equals(padded_equals: bool) -> Self {
        Self { padded_equals }
    }

    pub fn from_config(config: &FormatConfig) -> Self {
        Self::with_padded_equals(config.padded_equals)
    }

    /// Render the whole document, sections and keys in document order.
    pub fn format(&self, doc: &IniDocument) -> String {
        let mut out = String::new();

        for section in doc.sections() {
            if let Some(ref comment) = section.comment {
                out.push_str(comment);
                out.push('\n');
            }

            match section.name() {
                Some(name) => {
                    out.push('[');
                    out.push_str(name);
                    out.push_str("]\n\n");
                }
                // keeps a global comment from sticking to the first key
                None if section.comment.is_some() => out.push('\n'),
                None => {}
            }

            for entry in section.entries() {
                out.push_str(&self.format_entry(entry));
            }
        }

        out
    }

    /// Render one entry, including its trailing newline.
    pub fn format_entry(&self, entry: &Entry) -> String {
        if entry.is_standalone_comment() {
            return match entry.comment {
                Some(ref comment) => format!("{}\n\n", comment),
                None => String::new(),
            };
        }

        let mut out = String::new();
        if let Some(ref comment) = entry.comment {
            out.push_str(comment);
            out.push('\n');
        }

        let value = entry.value.as_deref().unwrap_or_default();
        let line = if self.padded_equals {
            format!("{} = {}", entry.key(), value)
        } else {
            format!("{}={}", entry.key(), value)
        };
        out.push_str(line.trim_end());
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IniDocument {
        let mut doc = IniDocument::new();
        doc.set_string_global("Home", "Newtown").unwrap();
        doc.ensure_section(Some("Employees"), Some("# staff list"))
            .unwrap();
        doc.set_string(Some("Employees"), "001", "Fred Smith").unwrap();
        doc.set_string_with_comment(
            Some("Employees"),
            "Comments",
            "see above",
            Some("; Good worker"),
        )
        .unwrap();
        doc
    }

    #[test]
    fn test_format_document() {
        let text = IniFormatter::new().format(&sample());
        assert_eq!(
            text,
            "Home=Newtown\n# staff list\n[Employees]\n\n001=Fred Smith\n; Good worker\nComments=see above\n"
        );
    }

    #[test]
    fn test_format_padded_equals() {
        let text = IniFormatter::with_padded_equals(true).format(&sample());
        assert!(text.starts_with("Home = Newtown\n"));
        assert!(text.contains("001 = Fred Smith\n"));
    }

    #[test]
    fn test_from_config() {
        let config = FormatConfig {
            padded_equals: true,
        };
        let entry = Entry::new("k", Some("v".into()));
        assert_eq!(IniFormatter::from_config(&config).format_entry(&entry), "k = v\n");
    }

    #[test]
    fn test_format_empty_value() {
        let formatter = IniFormatter::with_padded_equals(true);
        let entry = Entry::new("flag", Some(String::new()));
        assert_eq!(formatter.format_entry(&entry), "flag =\n");

        let entry = Entry::new("flag", None);
        assert_eq!(IniFormatter::new().format_entry(&entry), "flag=\n");
    }

    #[test]
    fn test_format_standalone_comment() {
        let entry = Entry::standalone_comment("# loose".into(), 7);
        assert_eq!(IniFormatter::new().format_entry(&entry), "# loose\n\n");
    }

    #[test]
    fn test_format_global_comment() {
        let mut doc = IniDocument::new();
        doc.ensure_section(None, Some("# header")).unwrap();
        doc.set_string_global("k", "v").unwrap();
        assert_eq!(IniFormatter::new().format(&doc), "# header\n\nk=v\n");
    }

    #[test]
    fn test_format_empty_document() {
        assert_eq!(IniFormatter::new().format(&IniDocument::new()), "");
    }
}
