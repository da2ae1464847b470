//! Section: one `[name]` block or the implicit global block

use super::entry::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: Option<String>,
    pub comment: Option<String>,
    entries: Vec<Entry>,
}

impl Section {
    /// The unnamed section holding keys that appear before any header.
    pub fn global() -> Self {
        Self::new(None, None)
    }

    pub fn new(name: Option<String>, comment: Option<String>) -> Self {
        Self {
            name,
            comment,
            entries: Vec::new(),
        }
    }

    /// Section name, `None` for the global section.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_global(&self) -> bool {
        self.name.is_none()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key() == key)
    }

    /// Return the entry for `key`, appending a value-less one if missing.
    pub fn entry_or_insert(&mut self, key: &str) -> &mut Entry {
        let idx = match self.entries.iter().position(|e| e.key() == key) {
            Some(idx) => idx,
            None => {
                self.entries.push(Entry::new(key, None));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx]
    }

    /// Append or replace an entry, keeping the original position on replace.
    pub fn push(&mut self, entry: Entry) {
        match self.get_mut(entry.key()) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let idx = self.entries.iter().position(|e| e.key() == key)?;
        Some(self.entries.remove(idx))
    }

    /// Number of real key/value entries, standalone comments excluded.
    pub fn key_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.is_standalone_comment())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_or_insert_keeps_order() {
        let mut section = Section::new(Some("db".into()), None);
        section.entry_or_insert("host").value = Some("localhost".into());
        section.entry_or_insert("port").value = Some("5432".into());
        section.entry_or_insert("host").value = Some("db.local".into());

        let keys: Vec<&str> = section.entries().iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["host", "port"]);
        assert_eq!(
            section.get("host").and_then(|e| e.value.as_deref()),
            Some("db.local")
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut section = Section::global();
        for key in ["a", "b", "c"] {
            section.push(Entry::new(key, Some(String::new())));
        }

        assert!(section.remove("b").is_some());
        assert!(section.remove("missing").is_none());

        let keys: Vec<&str> = section.entries().iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_key_count_skips_comments() {
        let mut section = Section::global();
        section.push(Entry::new("a", Some("1".into())));
        section.push(Entry::standalone_comment("# note".into(), 4));

        assert_eq!(section.entries().len(), 2);
        assert_eq!(section.key_count(), 1);
    }
}
