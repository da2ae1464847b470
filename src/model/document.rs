//! In-memory INI document: ordered sections holding ordered entries
//!
//! ## Section addressing
//!
//! Every operation takes `section: Option<&str>`. `None` addresses the
//! global section, which always exists at index 0 and cannot be removed.
//! Named sections are kept in the order they were first introduced.
//!
//! ## Typed access
//!
//! Values are stored as text. Typed accessors convert at the boundary via
//! [`IniValue`]: setters write the canonical string form, getters parse the
//! stored string and report [`IniError::NumberFormat`] when it does not fit.
//!
//! ```rust,ignore
//! let mut doc = IniDocument::new();
//! doc.set_int(Some("server"), "port", 8080)?;
//! assert_eq!(doc.get_int(Some("server"), "port", 80)?, 8080);
//! assert_eq!(doc.get_int(Some("server"), "missing", 80)?, 80);
//! ```

use super::entry::{Entry, COMMENT_MARKERS};
use super::section::Section;
use crate::error::{IniError, Result};
use crate::parser::line::{classify, Line};
use crate::parser::patterns::COMMENT_RE;

/// Conversion between a typed value and its stored string form.
pub trait IniValue: Sized {
    /// Name used in [`IniError::NumberFormat`] messages.
    const TYPE_NAME: &'static str;

    fn to_ini_string(&self) -> String;

    fn from_ini_str(raw: &str) -> Option<Self>;
}

macro_rules! impl_ini_value_from_str {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl IniValue for $ty {
                const TYPE_NAME: &'static str = $name;

                fn to_ini_string(&self) -> String {
                    self.to_string()
                }

                fn from_ini_str(raw: &str) -> Option<Self> {
                    raw.trim().parse().ok()
                }
            }
        )*
    };
}

impl_ini_value_from_str!(i32 => "int", i64 => "long", f64 => "double", f32 => "float");

impl IniValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn to_ini_string(&self) -> String {
        self.to_string()
    }

    fn from_ini_str(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

/// Check a comment against the comment grammar.
///
/// `None` means "no comment" and is valid. Otherwise every line must start
/// with `#` or `;` followed by at least one space or tab.
pub fn validate_comment(comment: Option<&str>) -> bool {
    match comment {
        None => true,
        Some("") => false,
        Some(text) => text.split('\n').all(|line| COMMENT_RE.is_match(line)),
    }
}

fn check_comment(comment: Option<&str>) -> Result<()> {
    if validate_comment(comment) {
        Ok(())
    } else {
        Err(IniError::invalid(format!(
            "comment {:?} must start with '#' or ';' followed by whitespace",
            comment.unwrap_or_default()
        )))
    }
}

fn check_key(key: &str) -> Result<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(IniError::invalid("key must not be empty"));
    }
    if trimmed.contains(COMMENT_MARKERS) || trimmed.contains(['=', '\n', '\r']) {
        return Err(IniError::invalid(format!(
            "key {:?} must not contain '#', ';', '=' or line breaks",
            key
        )));
    }
    Ok(trimmed)
}

fn check_section_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(IniError::invalid("section name must not be empty"));
    }
    if trimmed.contains([']', '\n', '\r']) {
        return Err(IniError::invalid(format!(
            "section name {:?} must not contain ']' or line breaks",
            name
        )));
    }
    Ok(trimmed)
}

/// Values are stored trimmed, the way the parser reads them back.
fn check_value(value: &str) -> Result<&str> {
    if value.contains(['\n', '\r']) {
        return Err(IniError::invalid(format!(
            "value {:?} must not contain line breaks",
            value
        )));
    }
    Ok(value.trim())
}

/// The rendered `key=value` line must read back as that same key.
///
/// Catches pairs such as `[a` + `b]`, which render as the header `[a=b]`.
fn check_entry<'a>(key: &'a str, value: &'a str) -> Result<(&'a str, &'a str)> {
    let key = check_key(key)?;
    let value = check_value(value)?;
    match classify(&format!("{}={}", key, value)) {
        Line::KeyValue { .. } => Ok((key, value)),
        _ => Err(IniError::invalid(format!(
            "key {:?} with value {:?} would not be read back as a key",
            key, value
        ))),
    }
}

/// Ordered collection of sections; the global section is always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<Section>,
}

impl Default for IniDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl IniDocument {
    pub fn new() -> Self {
        Self {
            sections: vec![Section::global()],
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    fn position(&self, section: Option<&str>) -> Option<usize> {
        match section {
            None => Some(0),
            Some(name) => {
                let name = name.trim();
                self.sections
                    .iter()
                    .position(|s| s.name() == Some(name))
            }
        }
    }

    fn section(&self, section: Option<&str>) -> Option<&Section> {
        self.position(section).map(|idx| &self.sections[idx])
    }

    fn entry(&self, section: Option<&str>, key: &str) -> Option<&Entry> {
        self.section(section)?.get(key.trim())
    }

    /// Find a section, creating it at the end of the section order if missing.
    fn section_or_insert(&mut self, section: Option<&str>) -> Result<&mut Section> {
        let idx = match self.position(section) {
            Some(idx) => idx,
            None => {
                let name = check_section_name(section.unwrap_or_default())?;
                self.sections
                    .push(Section::new(Some(name.to_string()), None));
                self.sections.len() - 1
            }
        };
        Ok(&mut self.sections[idx])
    }

    pub fn contains_section(&self, section: Option<&str>) -> bool {
        self.position(section).is_some()
    }

    pub fn contains_key(&self, section: Option<&str>, key: &str) -> bool {
        self.entry(section, key).is_some()
    }

    /// Entries of a section in order; `None` if the section does not exist.
    pub fn get_section(&self, section: Option<&str>) -> Option<&[Entry]> {
        self.section(section).map(Section::entries)
    }

    /// Section names in document order; the global section is `None` at index 0.
    pub fn get_sections(&self) -> Vec<Option<&str>> {
        self.sections.iter().map(Section::name).collect()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of key/value entries across all sections.
    pub fn len_keys(&self) -> usize {
        self.sections.iter().map(Section::key_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.len() == 1
            && self.sections[0].is_empty()
            && self.sections[0].comment.is_none()
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// Create the section if absent, then set its comment.
    pub fn ensure_section(&mut self, section: Option<&str>, comment: Option<&str>) -> Result<()> {
        check_comment(comment)?;
        let target = self.section_or_insert(section)?;
        target.comment = comment.map(str::to_string);
        Ok(())
    }

    pub fn get_section_comment(&self, section: Option<&str>) -> Option<&str> {
        self.section(section)?.comment.as_deref()
    }

    /// Remove a named section. The global section is never removed.
    pub fn remove_section(&mut self, section: Option<&str>) -> Option<Section> {
        match self.position(section) {
            Some(0) | None => None,
            Some(idx) => Some(self.sections.remove(idx)),
        }
    }

    // =========================================================================
    // Strings and comments
    // =========================================================================

    /// Upsert a value, leaving any existing comment untouched.
    ///
    /// Returns the previous value, `None` if the key was newly created.
    pub fn set_string(
        &mut self,
        section: Option<&str>,
        key: &str,
        value: &str,
    ) -> Result<Option<String>> {
        let (key, value) = check_entry(key, value)?;
        let entry = self.section_or_insert(section)?.entry_or_insert(key);
        Ok(entry.value.replace(value.to_string()))
    }

    /// Upsert a value and replace its comment (`None` clears it).
    pub fn set_string_with_comment(
        &mut self,
        section: Option<&str>,
        key: &str,
        value: &str,
        comment: Option<&str>,
    ) -> Result<Option<String>> {
        check_comment(comment)?;
        let (key, value) = check_entry(key, value)?;
        let entry = self.section_or_insert(section)?.entry_or_insert(key);
        entry.comment = comment.map(str::to_string);
        Ok(entry.value.replace(value.to_string()))
    }

    pub fn get_string(&self, section: Option<&str>, key: &str, default: &str) -> String {
        self.entry(section, key)
            .and_then(|e| e.value.clone())
            .unwrap_or_else(|| default.to_string())
    }

    /// Set only the comment of a key, creating it with an empty value if missing.
    ///
    /// Returns the previous comment.
    pub fn set_comment(
        &mut self,
        section: Option<&str>,
        key: &str,
        comment: Option<&str>,
    ) -> Result<Option<String>> {
        check_comment(comment)?;
        let (key, _) = check_entry(key, "")?;
        let entry = self.section_or_insert(section)?.entry_or_insert(key);
        // a new key reads back as `key=`, i.e. an empty value
        entry.value.get_or_insert_with(String::new);
        Ok(std::mem::replace(
            &mut entry.comment,
            comment.map(str::to_string),
        ))
    }

    pub fn get_comment(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.entry(section, key)?.comment.as_deref()
    }

    pub fn remove_key(&mut self, section: Option<&str>, key: &str) -> Option<Entry> {
        let idx = self.position(section)?;
        self.sections[idx].remove(key.trim())
    }

    /// Store a comment block that precedes no key as a synthetic entry.
    pub(crate) fn push_standalone_comment(
        &mut self,
        section: Option<&str>,
        comment: String,
        line_number: usize,
    ) -> Result<()> {
        self.section_or_insert(section)?
            .push(Entry::standalone_comment(comment, line_number));
        Ok(())
    }

    // =========================================================================
    // Typed access
    // =========================================================================

    fn parse_stored<T: IniValue>(
        &self,
        section: Option<&str>,
        key: &str,
        raw: &str,
    ) -> Result<T> {
        T::from_ini_str(raw).ok_or_else(|| IniError::NumberFormat {
            section: section.map(|s| s.trim().to_string()),
            key: key.trim().to_string(),
            value: raw.to_string(),
            target: T::TYPE_NAME,
        })
    }

    /// Read a typed value, falling back to `default` when the key is absent.
    pub fn get_as<T: IniValue>(&self, section: Option<&str>, key: &str, default: T) -> Result<T> {
        match self.entry(section, key).and_then(|e| e.value.as_deref()) {
            Some(raw) => self.parse_stored(section, key, raw),
            None => Ok(default),
        }
    }

    fn previous_as<T: IniValue>(&self, section: Option<&str>, key: &str) -> Result<Option<T>> {
        match self.entry(section, key).and_then(|e| e.value.as_deref()) {
            Some(raw) => self.parse_stored(section, key, raw).map(Some),
            None => Ok(None),
        }
    }

    /// Write a typed value; returns the previous value parsed as `T`.
    ///
    /// The previous value is parsed before anything is written, so a
    /// [`IniError::NumberFormat`] leaves the document unchanged.
    pub fn set_as<T: IniValue>(
        &mut self,
        section: Option<&str>,
        key: &str,
        value: T,
    ) -> Result<Option<T>> {
        check_key(key)?;
        let previous = self.previous_as(section, key)?;
        self.set_string(section, key, &value.to_ini_string())?;
        Ok(previous)
    }

    pub fn set_as_with_comment<T: IniValue>(
        &mut self,
        section: Option<&str>,
        key: &str,
        value: T,
        comment: Option<&str>,
    ) -> Result<Option<T>> {
        check_comment(comment)?;
        check_key(key)?;
        let previous = self.previous_as(section, key)?;
        self.set_string_with_comment(section, key, &value.to_ini_string(), comment)?;
        Ok(previous)
    }

    // =========================================================================
    // Global-section shorthands
    // =========================================================================

    pub fn get_string_global(&self, key: &str, default: &str) -> String {
        self.get_string(None, key, default)
    }

    pub fn set_string_global(&mut self, key: &str, value: &str) -> Result<Option<String>> {
        self.set_string(None, key, value)
    }
}

/// Named typed accessors delegating to [`IniDocument::get_as`] and friends.
macro_rules! typed_accessors {
    ($($ty:ty => $get:ident, $set:ident, $set_c:ident, $get_g:ident, $set_g:ident;)*) => {
        impl IniDocument {
            $(
                pub fn $get(&self, section: Option<&str>, key: &str, default: $ty) -> Result<$ty> {
                    self.get_as(section, key, default)
                }

                pub fn $set(
                    &mut self,
                    section: Option<&str>,
                    key: &str,
                    value: $ty,
                ) -> Result<Option<$ty>> {
                    self.set_as(section, key, value)
                }

                pub fn $set_c(
                    &mut self,
                    section: Option<&str>,
                    key: &str,
                    value: $ty,
                    comment: Option<&str>,
                ) -> Result<Option<$ty>> {
                    self.set_as_with_comment(section, key, value, comment)
                }

                pub fn $get_g(&self, key: &str, default: $ty) -> Result<$ty> {
                    self.get_as(None, key, default)
                }

                pub fn $set_g(&mut self, key: &str, value: $ty) -> Result<Option<$ty>> {
                    self.set_as(None, key, value)
                }
            )*
        }
    };
}

typed_accessors! {
    i32 => get_int, set_int, set_int_with_comment, get_int_global, set_int_global;
    i64 => get_long, set_long, set_long_with_comment, get_long_global, set_long_global;
    f64 => get_double, set_double, set_double_with_comment, get_double_global, set_double_global;
    f32 => get_float, set_float, set_float_with_comment, get_float_global, set_float_global;
    bool => get_bool, set_bool, set_bool_with_comment, get_bool_global, set_bool_global;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_global_section() {
        let doc = IniDocument::new();
        assert_eq!(doc.get_sections(), vec![None]);
        assert!(doc.contains_section(None));
        assert_eq!(doc.get_section(None), Some(&[][..]));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_validate_comment() {
        assert!(validate_comment(None));
        assert!(!validate_comment(Some("")));
        assert!(validate_comment(Some("# ok")));
        assert!(validate_comment(Some("; also ok")));
        assert!(validate_comment(Some("#\ttabbed")));
        assert!(!validate_comment(Some("#no-space")));
        assert!(!validate_comment(Some("plain text")));
        assert!(validate_comment(Some("# one\n; two")));
        assert!(!validate_comment(Some("# one\ntwo")));
    }

    #[test]
    fn test_set_string_returns_previous() {
        let mut doc = IniDocument::new();
        assert_eq!(doc.set_string(Some("s"), "k", "v1").unwrap(), None);
        assert_eq!(
            doc.set_string(Some("s"), "k", "v2").unwrap(),
            Some("v1".to_string())
        );
        assert_eq!(doc.get_section(Some("s")).unwrap().len(), 1);
        assert_eq!(doc.get_string(Some("s"), "k", ""), "v2");
    }

    #[test]
    fn test_set_string_keeps_comment() {
        let mut doc = IniDocument::new();
        doc.set_string_with_comment(None, "k", "v1", Some("# note"))
            .unwrap();
        doc.set_string(None, "k", "v2").unwrap();
        assert_eq!(doc.get_comment(None, "k"), Some("# note"));

        doc.set_string_with_comment(None, "k", "v3", None).unwrap();
        assert_eq!(doc.get_comment(None, "k"), None);
    }

    #[test]
    fn test_invalid_comment_does_not_mutate() {
        let mut doc = IniDocument::new();
        let err = doc
            .set_string_with_comment(Some("s"), "k", "v", Some("#bad"))
            .unwrap_err();
        assert!(matches!(err, IniError::InvalidParameter(_)));
        assert!(!doc.contains_section(Some("s")));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let mut doc = IniDocument::new();
        for key in ["", "   ", "a=b", "#k", "k;x", "a\nb"] {
            assert!(
                matches!(
                    doc.set_string(None, key, "v"),
                    Err(IniError::InvalidParameter(_))
                ),
                "key {:?} should be rejected",
                key
            );
        }
        assert!(doc.set_string(None, "k", "line\nbreak").is_err());
        assert!(doc.ensure_section(Some("a]b"), None).is_err());
    }

    #[test]
    fn test_typed_defaults_and_values() {
        let mut doc = IniDocument::new();
        assert_eq!(doc.get_int(Some("s"), "missing", 42).unwrap(), 42);

        doc.set_int(Some("s"), "int", -7).unwrap();
        doc.set_long(Some("s"), "long", 9_000_000_000).unwrap();
        doc.set_double(Some("s"), "double", 2.5).unwrap();
        doc.set_float(Some("s"), "float", 0.25).unwrap();
        doc.set_bool(Some("s"), "bool", true).unwrap();

        assert_eq!(doc.get_int(Some("s"), "int", 0).unwrap(), -7);
        assert_eq!(doc.get_long(Some("s"), "long", 0).unwrap(), 9_000_000_000);
        assert_eq!(doc.get_double(Some("s"), "double", 0.0).unwrap(), 2.5);
        assert_eq!(doc.get_float(Some("s"), "float", 0.0).unwrap(), 0.25);
        assert!(doc.get_bool(Some("s"), "bool", false).unwrap());
        assert_eq!(doc.get_string(Some("s"), "bool", ""), "true");
    }

    #[test]
    fn test_typed_setter_returns_previous() {
        let mut doc = IniDocument::new();
        assert_eq!(doc.set_int_global("n", 1).unwrap(), None);
        assert_eq!(doc.set_int_global("n", 2).unwrap(), Some(1));
        assert_eq!(doc.get_int_global("n", 0).unwrap(), 2);
    }

    #[test]
    fn test_malformed_number_is_reported() {
        let mut doc = IniDocument::new();
        doc.set_string(Some("s"), "port", "eighty").unwrap();

        let err = doc.get_int(Some("s"), "port", 80).unwrap_err();
        assert!(matches!(err, IniError::NumberFormat { target: "int", .. }));

        // setter refuses before writing
        assert!(doc.set_int(Some("s"), "port", 80).is_err());
        assert_eq!(doc.get_string(Some("s"), "port", ""), "eighty");
    }

    #[test]
    fn test_bool_parsing() {
        let mut doc = IniDocument::new();
        doc.set_string(None, "a", "TRUE").unwrap();
        doc.set_string(None, "b", " false ").unwrap();
        doc.set_string(None, "c", "yes").unwrap();

        assert!(doc.get_bool(None, "a", false).unwrap());
        assert!(!doc.get_bool(None, "b", true).unwrap());
        assert!(doc.get_bool(None, "c", false).is_err());
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut doc = IniDocument::new();
        doc.set_string(None, "k", "  padded  ").unwrap();
        assert_eq!(doc.get_string(None, "k", ""), "padded");
        assert!(doc.set_string(None, "k", "a\nb").is_err());
    }

    #[test]
    fn test_entry_rendered_as_header_is_rejected() {
        let mut doc = IniDocument::new();
        assert!(doc.set_string(None, "[a", "b]").is_err());
        assert!(doc
            .set_string_with_comment(None, "[a", "b]", Some("# c"))
            .is_err());
        assert!(!doc.contains_key(None, "[a"));

        doc.set_string(None, "[a]", "b").unwrap();
        assert_eq!(doc.get_string(None, "[a]", ""), "b");
    }

    #[test]
    fn test_set_comment_creates_empty_key() {
        let mut doc = IniDocument::new();
        assert_eq!(doc.set_comment(Some("s"), "k", Some("; c")).unwrap(), None);
        assert!(doc.contains_key(Some("s"), "k"));
        assert_eq!(doc.get_string(Some("s"), "k", "dflt"), "");
        assert_eq!(doc.get_comment(Some("s"), "k"), Some("; c"));

        doc.set_string(Some("s"), "k", "v").unwrap();
        assert_eq!(
            doc.set_comment(Some("s"), "k", None).unwrap(),
            Some("; c".to_string())
        );
        assert_eq!(doc.get_string(Some("s"), "k", ""), "v");
    }

    #[test]
    fn test_ensure_section_is_idempotent() {
        let mut doc = IniDocument::new();
        doc.ensure_section(Some("a"), Some("# first")).unwrap();
        doc.ensure_section(Some("b"), None).unwrap();
        doc.ensure_section(Some("a"), Some("# second")).unwrap();

        assert_eq!(doc.get_sections(), vec![None, Some("a"), Some("b")]);
        assert_eq!(doc.get_section_comment(Some("a")), Some("# second"));
        assert_eq!(doc.get_section(Some("b")), Some(&[][..]));
        assert_eq!(doc.get_section(Some("c")), None);
    }

    #[test]
    fn test_remove_section_guards_global() {
        let mut doc = IniDocument::new();
        doc.set_string_global("k", "v").unwrap();
        doc.set_string(Some("a"), "k", "v").unwrap();
        doc.set_string(Some("b"), "k", "v").unwrap();

        assert!(doc.remove_section(None).is_none());
        assert!(doc.remove_section(Some("missing")).is_none());
        assert!(doc.remove_section(Some("a")).is_some());

        assert_eq!(doc.get_sections(), vec![None, Some("b")]);
        assert_eq!(doc.get_string_global("k", ""), "v");
    }

    #[test]
    fn test_remove_key() {
        let mut doc = IniDocument::new();
        doc.set_string(Some("s"), "a", "1").unwrap();
        doc.set_string(Some("s"), "b", "2").unwrap();

        assert!(doc.remove_key(Some("s"), "a").is_some());
        assert!(doc.remove_key(Some("s"), "a").is_none());
        assert!(doc.remove_key(Some("missing"), "b").is_none());
        assert_eq!(doc.len_keys(), 1);
    }
}
