//! Extraction options configuration.

/// How text runs are located in the document part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Pattern scan; inner content is kept verbatim, entities included
    #[default]
    Literal,
    /// XML tokenizer; entities are decoded and malformed markup is rejected
    Xml,
}

/// Options for extracting text.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Strategy used to find text runs
    pub mode: ScanMode,

    /// Inserted between adjacent runs
    pub separator: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: ScanMode::Literal,
            separator: " ".to_string(),
        }
    }
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan mode.
    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the run separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
