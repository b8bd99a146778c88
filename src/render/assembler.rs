//! Document assembly: semantic blocks to styled writer calls.

use super::stats::AssemblyStats;
use super::writer::{DocumentWriter, StyledParagraph};
use crate::error::Result;
use crate::model::{SemanticBlock, StyleSet};

/// Emits one styled paragraph per semantic block, in order.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    styles: &'a StyleSet,
}

impl<'a> Assembler<'a> {
    /// Create an assembler over a resolved style set.
    pub fn new(styles: &'a StyleSet) -> Self {
        Self { styles }
    }

    /// Write `blocks` to `writer`, page layout first.
    ///
    /// Each block's style is looked up before anything for that block reaches
    /// the writer, so a failed lookup leaves no partial element behind.
    pub fn assemble<W: DocumentWriter>(
        &self,
        blocks: &[SemanticBlock],
        writer: &mut W,
    ) -> Result<AssemblyStats> {
        writer.set_page(&self.styles.page)?;
        if self.styles.header.is_active() {
            writer.set_header(&self.styles.header)?;
        }
        if self.styles.footer.is_active() {
            writer.set_footer(&self.styles.footer)?;
        }

        let mut stats = AssemblyStats::new();
        for block in blocks {
            writer.append_paragraph(&self.styled(block)?)?;
            stats.record(block);
        }

        log::debug!("Assembled {} elements", stats.element_count());
        Ok(stats)
    }

    /// Resolve the style for one block.
    pub fn styled(&self, block: &SemanticBlock) -> Result<StyledParagraph> {
        let role = block.role();
        let style = self.styles.get(role)?.clone();
        Ok(match block {
            SemanticBlock::Code { text, .. } => StyledParagraph::verbatim(role, text, style),
            SemanticBlock::Title { text }
            | SemanticBlock::Heading { text, .. }
            | SemanticBlock::Paragraph { text } => StyledParagraph::new(role, text.as_str(), style),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{HeaderFooterSpec, Role};
    use crate::render::ElementRecorder;
    use crate::style::Template;

    #[test]
    fn test_assemble_in_order_with_roles() {
        let styles = Template::Technical.style_set();
        let blocks = vec![
            SemanticBlock::title("My Title"),
            SemanticBlock::paragraph("Hello world."),
            SemanticBlock::heading(2, "Section"),
            SemanticBlock::code("a()\nb()"),
        ];
        let mut recorder = ElementRecorder::new();
        let stats = Assembler::new(styles).assemble(&blocks, &mut recorder).unwrap();

        let roles: Vec<Role> = recorder.elements().iter().map(|e| e.role).collect();
        assert_eq!(
            roles,
            vec![Role::Title, Role::Normal, Role::Heading(2), Role::Code]
        );
        assert_eq!(recorder.elements()[2].style, styles.headings[1]);
        assert_eq!(recorder.elements()[3].lines, vec!["a()", "b()"]);
        assert_eq!(stats.element_count(), 4);
        assert_eq!(recorder.page.as_ref(), Some(&styles.page));
    }

    #[test]
    fn test_bad_heading_level_emits_nothing_for_block() {
        let styles = Template::Default.style_set();
        let blocks = vec![
            SemanticBlock::paragraph("kept"),
            SemanticBlock::heading(9, "too deep"),
        ];
        let mut recorder = ElementRecorder::new();
        let err = Assembler::new(styles)
            .assemble(&blocks, &mut recorder)
            .unwrap_err();
        assert!(matches!(err, Error::StyleResolution(_)));
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_header_footer_only_when_active() {
        let mut styles = Template::Default.style_set().clone();
        styles.footer = HeaderFooterSpec {
            enabled: true,
            content: "Page footer".into(),
            ..HeaderFooterSpec::default()
        };
        let mut recorder = ElementRecorder::new();
        Assembler::new(&styles).assemble(&[], &mut recorder).unwrap();
        assert!(recorder.header.is_none());
        assert_eq!(recorder.footer.unwrap().content, "Page footer");
    }

    #[test]
    fn test_empty_blocks() {
        let mut recorder = ElementRecorder::new();
        let stats = Assembler::new(Template::Default.style_set())
            .assemble(&[], &mut recorder)
            .unwrap();
        assert!(recorder.is_empty());
        assert_eq!(stats, AssemblyStats::default());
    }
}
