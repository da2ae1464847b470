//! Single-line classification

use super::patterns::LINE_RE;

/// Classification of one line of INI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// `[name]`, name already trimmed (may be empty).
    Section(&'a str),
    /// Comment line, marker included.
    Comment(&'a str),
    /// `key=value`, both parts untrimmed.
    KeyValue { key: &'a str, value: &'a str },
    /// Anything the grammar does not recognize.
    Tail(&'a str),
}

/// Classify a line using the composite [`LINE_RE`] pattern.
pub fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }

    let Some(caps) = LINE_RE.captures(line) else {
        return Line::Tail(line);
    };

    if let Some(name) = caps.name("section") {
        Line::Section(name.as_str().trim())
    } else if let Some(comment) = caps.name("comment") {
        Line::Comment(comment.as_str())
    } else if let (Some(key), Some(value)) = (caps.name("key"), caps.name("value")) {
        Line::KeyValue {
            key: key.as_str(),
            value: value.as_str(),
        }
    } else {
        Line::Tail(caps.name("tail").map_or(line, |m| m.as_str()))
    }
}
