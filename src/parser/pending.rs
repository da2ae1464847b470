//! Pending comment block tracking
//!
//! Comment lines are not stored as they are read. They accumulate in a
//! [`PendingComment`] until the next non-comment line decides their owner:
//!
//! | Next line | Owner of the comment block |
//! |-----------|----------------------------|
//! | `[section]` | that section |
//! | `key=value` | that key |
//! | blank / end of input | a standalone comment entry in the current section |

/// Adjacent comment lines waiting for an owner.
#[derive(Debug)]
pub struct PendingComment {
    /// Comment lines as written, markers included.
    pub lines: Vec<String>,
}

impl PendingComment {
    pub fn new(first_line: &str) -> Self {
        Self {
            lines: vec![first_line.to_string()],
        }
    }

    pub fn add_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// The block joined with `\n` (separator, not terminator).
    pub fn into_comment(self) -> String {
        self.lines.join("\n")
    }
}
