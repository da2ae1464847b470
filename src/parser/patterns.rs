//! # INI Regex Patterns
//!
//! ## Line Grammar
//!
//! [`LINE_RE`] is one anchored alternation. Alternatives are tried in
//! order and the first one that matches the whole line wins:
//!
//! 1. `section` - `[name]`, surrounding whitespace allowed
//! 2. `comment` - `#` or `;` at column 0, then a space or tab
//! 3. `key`/`value` - anything without `#`, `;`, `=` up to the first `=`
//! 4. `tail` - everything else; a non-empty tail is a format error
//!
//! Blank lines are detected before the pattern is applied.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches one INI line.
    ///
    /// Named groups:
    /// - `section`: section name, untrimmed
    /// - `comment`: the whole comment line including its marker
    /// - `key`: key text before the first `=`, untrimmed
    /// - `value`: text after the first `=`, untrimmed
    /// - `tail`: unrecognized content
    pub static ref LINE_RE: Regex = Regex::new(
        r#"^(?:\s*\[(?P<section>[^\]]*)\]\s*|(?P<comment>[#;][ \t].*)|(?P<key>[^#;=]+)=(?P<value>.*)|(?P<tail>.+))$"#
    ).unwrap();

    /// Matches a single comment line: `# text` or `; text`.
    pub static ref COMMENT_RE: Regex = Regex::new(
        r#"^[#;][ \t].*$"#
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_re_section() {
        let caps = LINE_RE.captures("  [ Employees ]  ").unwrap();
        assert_eq!(&caps["section"], " Employees ");
        assert!(caps.name("key").is_none());
    }

    #[test]
    fn test_line_re_comment() {
        let caps = LINE_RE.captures("; Good worker").unwrap();
        assert_eq!(&caps["comment"], "; Good worker");

        let caps = LINE_RE.captures("#\ttabbed").unwrap();
        assert_eq!(&caps["comment"], "#\ttabbed");
    }

    #[test]
    fn test_line_re_key_value() {
        let caps = LINE_RE.captures("001 = Fred Smith").unwrap();
        assert_eq!(&caps["key"], "001 ");
        assert_eq!(&caps["value"], " Fred Smith");

        let caps = LINE_RE.captures("url=http://host/?a=b").unwrap();
        assert_eq!(&caps["key"], "url");
        assert_eq!(&caps["value"], "http://host/?a=b");
    }

    #[test]
    fn test_line_re_tail() {
        let caps = LINE_RE.captures("not a valid line!!").unwrap();
        assert_eq!(&caps["tail"], "not a valid line!!");

        let caps = LINE_RE.captures("#no-space").unwrap();
        assert_eq!(&caps["tail"], "#no-space");
    }

    #[test]
    fn test_line_re_section_wins_over_key() {
        // a bracketed line is a header even if it contains '='
        let caps = LINE_RE.captures("[a=b]").unwrap();
        assert_eq!(&caps["section"], "a=b");
    }

    #[test]
    fn test_comment_re() {
        assert!(COMMENT_RE.is_match("# ok"));
        assert!(COMMENT_RE.is_match("; ok"));
        assert!(!COMMENT_RE.is_match("#ok"));
        assert!(!COMMENT_RE.is_match(" # indented"));
    }
}
