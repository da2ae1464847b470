//! File-level façade: load, merge and save an [`IniDocument`]

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{IniError, Result};
use crate::formatter::IniFormatter;
use crate::model::{IniDocument, ParseReport};
use crate::parser::IniParser;
use crate::utils::path::{read_file, write_file};

/// An INI document together with where it was loaded from.
///
/// The primary load (`load_*`/[`IniFile::open`]) may happen once; further
/// sources are layered on with `merge_*`, which overwrites existing keys.
#[derive(Debug, Default)]
pub struct IniFile {
    document: IniDocument,
    origin: Option<String>,
}

impl IniFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a file in one step.
    pub fn open(path: &Path) -> Result<(Self, ParseReport)> {
        let mut file = Self::new();
        let report = file.load_path(path)?;
        Ok((file, report))
    }

    pub fn document(&self) -> &IniDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut IniDocument {
        &mut self.document
    }

    pub fn into_document(self) -> IniDocument {
        self.document
    }

    /// Name of the primary source, `None` until loaded.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.origin.is_some()
    }

    /// Primary load from text.
    ///
    /// Fails with [`IniError::AlreadyLoaded`] on a second call. On a format
    /// error the document is reset to empty and stays unloaded.
    pub fn load_str(&mut self, origin: &str, content: &str) -> Result<ParseReport> {
        if let Some(ref loaded) = self.origin {
            return Err(IniError::AlreadyLoaded {
                origin: loaded.clone(),
            });
        }

        let mut document = IniDocument::new();
        let report = IniParser::new().parse_into(&mut document, origin, content)?;

        info!(
            "loaded {}: {} sections, {} keys",
            origin,
            document.get_sections().len() - 1,
            document.len_keys()
        );
        self.document = document;
        self.origin = Some(origin.to_string());
        Ok(report)
    }

    pub fn load_path(&mut self, path: &Path) -> Result<ParseReport> {
        let content = read_file(path)?;
        self.load_str(&path.display().to_string(), &content)
    }

    /// Parse another source on top of the current document.
    ///
    /// All-or-nothing: the merge runs on a copy, so a format error leaves
    /// the current document untouched.
    pub fn merge_str(&mut self, origin: &str, content: &str) -> Result<ParseReport> {
        let mut merged = self.document.clone();
        let report = IniParser::new().parse_into(&mut merged, origin, content)?;

        info!("merged {}: {} keys read", origin, report.keys);
        self.document = merged;
        Ok(report)
    }

    pub fn merge_path(&mut self, path: &Path) -> Result<ParseReport> {
        let content = read_file(path)?;
        self.merge_str(&path.display().to_string(), &content)
    }

    /// Render the document as INI text.
    pub fn render(&self, padded_equals: bool) -> String {
        IniFormatter::with_padded_equals(padded_equals).format(&self.document)
    }

    /// Render and write the document to `path`.
    pub fn save(&self, path: &Path, padded_equals: bool) -> Result<PathBuf> {
        let content = self.render(padded_equals);
        write_file(path, &content)?;
        debug!("wrote {} bytes to {}", content.len(), path.display());
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_twice_is_rejected() {
        let mut file = IniFile::new();
        file.load_str("a.ini", "k=v\n").unwrap();

        let err = file.load_str("b.ini", "k=w\n").unwrap_err();
        assert!(matches!(err, IniError::AlreadyLoaded { ref origin } if origin == "a.ini"));
        assert_eq!(file.document().get_string_global("k", ""), "v");
    }

    #[test]
    fn test_failed_load_stays_unloaded() {
        let mut file = IniFile::new();
        assert!(file.load_str("bad.ini", "k=v\ngarbage\n").is_err());
        assert!(!file.is_loaded());
        assert!(file.document().is_empty());

        file.load_str("good.ini", "k=v\n").unwrap();
        assert_eq!(file.origin(), Some("good.ini"));
    }

    #[test]
    fn test_merge_after_load() {
        let mut file = IniFile::new();
        file.load_str("base.ini", "[s]\na=1\nb=2\n").unwrap();
        file.merge_str("over.ini", "[s]\nb=20\n").unwrap();
        file.merge_str("more.ini", "[t]\nc=3\n").unwrap();

        let doc = file.document();
        assert_eq!(doc.get_int(Some("s"), "b", 0).unwrap(), 20);
        assert_eq!(doc.get_string(Some("t"), "c", ""), "3");
    }

    #[test]
    fn test_failed_merge_keeps_document() {
        let mut file = IniFile::new();
        file.load_str("base.ini", "[s]\na=1\n").unwrap();

        let err = file.merge_str("bad.ini", "[s]\na=2\n!!\n").unwrap_err();
        assert_eq!(err.line_number(), Some(3));
        assert_eq!(file.document().get_string(Some("s"), "a", ""), "1");
    }

    #[test]
    fn test_save_and_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.ini");

        let mut file = IniFile::new();
        file.document_mut()
            .set_string(Some("server"), "host", "localhost")
            .unwrap();
        file.save(&path, true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[server]\n\nhost = localhost\n");

        let (reopened, report) = IniFile::open(&path).unwrap();
        assert!(report.warnings.is_empty());
        assert_eq!(reopened.document(), file.document());
    }
}
