//! Semantic block types.

use super::style::Role;
use serde::Serialize;

/// One classified unit of document content, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SemanticBlock {
    /// The document title
    Title {
        /// Title text
        text: String,
    },

    /// A heading
    Heading {
        /// Heading level (1-based)
        level: u8,
        /// Heading text
        text: String,
    },

    /// A body paragraph
    Paragraph {
        /// Whitespace-normalized text
        text: String,
    },

    /// A code block, line breaks preserved
    Code {
        /// Verbatim code text
        text: String,
        /// Info string language, if any
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
}

impl SemanticBlock {
    /// Create a title block.
    pub fn title(text: impl Into<String>) -> Self {
        SemanticBlock::Title { text: text.into() }
    }

    /// Create a heading block.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        SemanticBlock::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        SemanticBlock::Paragraph { text: text.into() }
    }

    /// Create a code block without a language.
    pub fn code(text: impl Into<String>) -> Self {
        SemanticBlock::Code {
            text: text.into(),
            language: None,
        }
    }

    /// Block text.
    pub fn text(&self) -> &str {
        match self {
            SemanticBlock::Title { text }
            | SemanticBlock::Heading { text, .. }
            | SemanticBlock::Paragraph { text }
            | SemanticBlock::Code { text, .. } => text,
        }
    }

    /// Kind of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            SemanticBlock::Title { .. } => BlockKind::Title,
            SemanticBlock::Heading { level, .. } => BlockKind::Heading(*level),
            SemanticBlock::Paragraph { .. } => BlockKind::Paragraph,
            SemanticBlock::Code { .. } => BlockKind::Code,
        }
    }

    /// Style role this block is rendered with.
    pub fn role(&self) -> Role {
        match self {
            SemanticBlock::Title { .. } => Role::Title,
            SemanticBlock::Heading { level, .. } => Role::Heading(*level),
            SemanticBlock::Paragraph { .. } => Role::Normal,
            SemanticBlock::Code { .. } => Role::Code,
        }
    }

    /// Check if the block has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }
}

/// Discriminant of a [`SemanticBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Document title
    Title,
    /// Heading at a level
    Heading(u8),
    /// Body paragraph
    Paragraph,
    /// Code block
    Code,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_roles() {
        assert_eq!(SemanticBlock::title("T").role(), Role::Title);
        assert_eq!(SemanticBlock::heading(2, "H").role(), Role::Heading(2));
        assert_eq!(SemanticBlock::paragraph("P").role(), Role::Normal);
        assert_eq!(SemanticBlock::code("c()").role(), Role::Code);
    }

    #[test]
    fn test_block_text_and_kind() {
        let block = SemanticBlock::heading(3, "Section");
        assert_eq!(block.text(), "Section");
        assert_eq!(block.kind(), BlockKind::Heading(3));
        assert!(SemanticBlock::paragraph("  ").is_empty());
    }

    #[test]
    fn test_block_serde_tag() {
        let json = serde_json::to_string(&SemanticBlock::heading(2, "Intro")).unwrap();
        assert_eq!(json, r#"{"kind":"heading","level":2,"text":"Intro"}"#);
    }
}
