//! Parsing and classification options.

use crate::model::MAX_HEADING_LEVEL;

/// Options controlling how parsed blocks are classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Promote a leading level-1 heading to the document title
    pub promote_first_heading: bool,

    /// Deepest heading level kept; deeper headings collapse to it (1-6)
    pub max_heading_level: u8,
}

impl ClassifyOptions {
    /// Create new classify options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable title promotion.
    pub fn with_title_promotion(mut self, promote: bool) -> Self {
        self.promote_first_heading = promote;
        self
    }

    /// Never produce a title block.
    pub fn without_title(mut self) -> Self {
        self.promote_first_heading = false;
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, MAX_HEADING_LEVEL);
        self
    }
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            promote_first_heading: true,
            max_heading_level: MAX_HEADING_LEVEL,
        }
    }
}

/// Input syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// CommonMark with tables, task lists, strikethrough and footnotes
    #[default]
    Markdown,
    /// Plain text, one paragraph per line
    PlainText,
}

impl InputFormat {
    /// Guess the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "md" | "markdown" | "mdown" | "mkd" => Some(InputFormat::Markdown),
            "txt" | "text" => Some(InputFormat::PlainText),
            _ => None,
        }
    }
}
