//! Parse report returned by every load or merge

/// Summary of one parsed source.
#[derive(Debug, Default)]
pub struct ParseReport {
    /// Number of lines read.
    pub lines: usize,
    /// Section headers encountered.
    pub sections: usize,
    /// Key/value lines encountered.
    pub keys: usize,
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }
}

/// Non-fatal finding, e.g. a key defined twice in one source.
#[derive(Debug)]
pub struct ParseWarning {
    pub line_number: usize,
    pub message: String,
    pub raw_line: String,
}

impl ParseWarning {
    pub fn new(
        line_number: usize,
        message: impl Into<String>,
        raw_line: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            message: message.into(),
            raw_line: raw_line.into(),
        }
    }
}
