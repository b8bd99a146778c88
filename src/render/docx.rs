//! DOCX output backed by `docx-rs`.

use super::writer::{DocumentWriter, StyledParagraph};
use crate::error::{Error, Result};
use crate::model::{Alignment, ElementStyle, FontSpec, HeaderFooterSpec, Orientation, PageSpec};
use docx_rs::{
    AlignmentType, BreakType, Docx, Footer, Header, LineSpacing, LineSpacingType, PageMargin,
    PageOrientationType, Paragraph, Run, RunFonts, SpecialIndentType,
};
use std::io::Cursor;

/// MIME type of the produced documents.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const TWIPS_PER_POINT: f32 = 20.0;
const TWIPS_PER_INCH: f32 = 1440.0;
const MM_PER_INCH: f32 = 25.4;
const AUTO_LINE_UNIT: f32 = 240.0;

/// Writes styled paragraphs into an in-memory `.docx` package.
#[derive(Debug, Default)]
pub struct DocxWriter {
    page: Option<PageSpec>,
    header: Option<Paragraph>,
    footer: Option<Paragraph>,
    body: Vec<Paragraph>,
}

impl DocxWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of body paragraphs written so far.
    pub fn paragraph_count(&self) -> usize {
        self.body.len()
    }
}

impl DocumentWriter for DocxWriter {
    type Output = Vec<u8>;

    fn set_page(&mut self, page: &PageSpec) -> Result<()> {
        self.page = Some(page.clone());
        Ok(())
    }

    fn set_header(&mut self, header: &HeaderFooterSpec) -> Result<()> {
        self.header = Some(page_text(header)?);
        Ok(())
    }

    fn set_footer(&mut self, footer: &HeaderFooterSpec) -> Result<()> {
        self.footer = Some(page_text(footer)?);
        Ok(())
    }

    fn append_paragraph(&mut self, paragraph: &StyledParagraph) -> Result<()> {
        for line in &paragraph.lines {
            check_xml_text(line)?;
        }
        self.body.push(build_paragraph(&paragraph.lines, &paragraph.style)?);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>> {
        let mut docx = Docx::new();

        if let Some(page) = &self.page {
            let (width, height) = page.oriented_size();
            docx = docx
                .page_size(mm_to_twips(width) as u32, mm_to_twips(height) as u32)
                .page_margin(
                    PageMargin::new()
                        .top(mm_to_twips(page.margin_top))
                        .bottom(mm_to_twips(page.margin_bottom))
                        .left(mm_to_twips(page.margin_left))
                        .right(mm_to_twips(page.margin_right)),
                );
            if page.orientation == Orientation::Landscape {
                docx = docx.page_orient(PageOrientationType::Landscape);
            }
        }
        if let Some(header) = self.header {
            docx = docx.header(Header::new().add_paragraph(header));
        }
        if let Some(footer) = self.footer {
            docx = docx.footer(Footer::new().add_paragraph(footer));
        }

        let count = self.body.len();
        for paragraph in self.body {
            docx = docx.add_paragraph(paragraph);
        }

        let mut buffer = Vec::new();
        docx.build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| Error::WriterFailure(format!("failed to pack document: {}", e)))?;

        log::debug!("Packed {} paragraphs into {} bytes", count, buffer.len());
        Ok(buffer)
    }
}

fn page_text(spec: &HeaderFooterSpec) -> Result<Paragraph> {
    check_xml_text(&spec.content)?;
    check_xml_text(&spec.font.family)?;
    let run = styled_run(Run::new().add_text(spec.content.as_str()), &spec.font);
    Ok(Paragraph::new()
        .add_run(run)
        .align(alignment_type(spec.alignment)))
}

fn build_paragraph(lines: &[String], style: &ElementStyle) -> Result<Paragraph> {
    check_xml_text(&style.font.family)?;

    let mut run = Run::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line.as_str());
    }
    let run = styled_run(run, &style.font);

    let spec = &style.paragraph;
    let spacing = LineSpacing::new()
        .before(pt_to_twips(spec.space_before) as u32)
        .after(pt_to_twips(spec.space_after) as u32)
        .line((spec.line_spacing * AUTO_LINE_UNIT).round() as _)
        .line_rule(LineSpacingType::Auto);

    let mut paragraph = Paragraph::new()
        .add_run(run)
        .align(alignment_type(spec.alignment))
        .line_spacing(spacing);

    if spec.indent_left > 0.0 || spec.indent_right > 0.0 || spec.indent_first_line > 0.0 {
        let first_line = (spec.indent_first_line > 0.0)
            .then(|| SpecialIndentType::FirstLine(pt_to_twips(spec.indent_first_line)));
        paragraph = paragraph.indent(
            Some(pt_to_twips(spec.indent_left)),
            first_line,
            Some(pt_to_twips(spec.indent_right)),
            None,
        );
    }

    Ok(paragraph)
}

fn styled_run(run: Run, font: &FontSpec) -> Run {
    let family = font.family.as_str();
    let mut run = run
        .fonts(
            RunFonts::new()
                .ascii(family)
                .hi_ansi(family)
                .east_asia(family)
                .cs(family),
        )
        .size(half_points(font.size));
    if font.bold {
        run = run.bold();
    }
    if font.italic {
        run = run.italic();
    }
    if let Some(color) = font.color {
        run = run.color(color.to_hex());
    }
    run
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

/// Points to twentieths of a point.
fn pt_to_twips(points: f32) -> i32 {
    (points * TWIPS_PER_POINT).round() as i32
}

/// Millimetres to twentieths of a point.
fn mm_to_twips(mm: f32) -> i32 {
    (mm / MM_PER_INCH * TWIPS_PER_INCH).round() as i32
}

/// Font size in points to half-points.
fn half_points(size: f32) -> usize {
    (size * 2.0).round() as usize
}

/// Reject characters that cannot appear in an XML 1.0 document.
fn check_xml_text(text: &str) -> Result<()> {
    match text.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(Error::WriterFailure(format!(
            "text contains character U+{:04X} which is not allowed in XML",
            c as u32
        ))),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn paragraph(text: &str) -> StyledParagraph {
        StyledParagraph::new(Role::Normal, text, ElementStyle::default())
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(pt_to_twips(12.0), 240);
        assert_eq!(pt_to_twips(0.5), 10);
        assert_eq!(mm_to_twips(25.4), 1440);
        assert_eq!(mm_to_twips(210.0), 11906);
        assert_eq!(half_points(10.5), 21);
    }

    #[test]
    fn test_is_xml_char() {
        assert!(is_xml_char('a'));
        assert!(is_xml_char('\t'));
        assert!(is_xml_char('中'));
        assert!(!is_xml_char('\u{0}'));
        assert!(!is_xml_char('\u{1B}'));
        assert!(!is_xml_char('\u{FFFE}'));
    }

    #[test]
    fn test_writer_rejects_control_characters() {
        let mut writer = DocxWriter::new();
        let err = writer.append_paragraph(&paragraph("bad \u{7} bell")).unwrap_err();
        assert!(matches!(err, Error::WriterFailure(_)));
        assert_eq!(writer.paragraph_count(), 0);
    }

    #[test]
    fn test_finish_produces_zip_package() {
        let mut writer = DocxWriter::new();
        writer.set_page(&PageSpec::a4()).unwrap();
        writer.append_paragraph(&paragraph("Hello")).unwrap();
        let bytes = writer.finish().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_finish_empty_document() {
        let bytes = DocxWriter::new().finish().unwrap();
        assert!(!bytes.is_empty());
    }
}
