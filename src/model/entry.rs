//! Entry data structures for INI key/value lines

/// Leading characters that mark a comment line (and a reserved key prefix).
pub const COMMENT_MARKERS: [char; 2] = ['#', ';'];

/// A single key/value pair, or a standalone comment, within a section.
///
/// # Field Semantics
/// - `key`: Fixed at creation. Keys starting with `#` or `;` are synthetic
///   markers for standalone comments (see [`Entry::standalone_comment`]);
///   such keys can never be produced by user data because the key grammar
///   excludes both characters.
/// - `value`: `None` for comment-only entries, otherwise the trimmed text after `=`.
/// - `comment`: The comment block written immediately above the key, including
///   its `#`/`;` markers. Multiple comment lines are joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    pub value: Option<String>,
    pub comment: Option<String>,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Build a comment-only entry for a comment block that precedes nothing.
    ///
    /// The key is the first character of the comment followed by the line
    /// number of the line that terminated the block, e.g. `#12`.
    pub fn standalone_comment(comment: String, line_number: usize) -> Self {
        let marker = comment.chars().next().unwrap_or('#');
        Self {
            key: format!("{}{}", marker, line_number),
            value: None,
            comment: Some(comment),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Check if the key uses the reserved comment prefix.
    pub fn is_standalone_comment(&self) -> bool {
        self.key.starts_with(COMMENT_MARKERS)
    }
}
