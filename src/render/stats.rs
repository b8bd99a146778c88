//! Conversion statistics.

use crate::model::SemanticBlock;
use serde::Serialize;

/// Statistics collected while assembling a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyStats {
    /// Number of title elements (0 or 1)
    pub title_count: u32,

    /// Number of heading elements
    pub heading_count: u32,

    /// Number of body paragraphs
    pub paragraph_count: u32,

    /// Number of code blocks
    pub code_block_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,

    /// Parsed nodes dropped during classification
    pub skipped_nodes: u32,

    /// Headings collapsed to the maximum level
    pub clamped_headings: u32,
}

impl AssemblyStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one emitted block.
    pub fn record(&mut self, block: &SemanticBlock) {
        match block {
            SemanticBlock::Title { .. } => self.title_count += 1,
            SemanticBlock::Heading { .. } => self.heading_count += 1,
            SemanticBlock::Paragraph { .. } => self.paragraph_count += 1,
            SemanticBlock::Code { .. } => self.code_block_count += 1,
        }
        self.count_text(block.text());
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of emitted elements.
    pub fn element_count(&self) -> u32 {
        self.title_count + self.heading_count + self.paragraph_count + self.code_block_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &AssemblyStats) {
        self.title_count += other.title_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.code_block_count += other.code_block_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
        self.skipped_nodes += other.skipped_nodes;
        self.clamped_headings += other.clamped_headings;
    }
}
