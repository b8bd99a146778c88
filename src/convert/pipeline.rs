//! The staged conversion pipeline.
//!
//! parse -> classify -> resolve-style -> assemble -> serialize. The first
//! failing stage aborts the run and tags its error with the stage name.

use super::{ConvertOptions, ConvertResult};
use crate::error::{Error, Result, Stage, StageExt};
use crate::parser::{self, Classifier};
use crate::render::{
    Assembler, AssemblyStats, DocumentWriter, DocxWriter, ElementRecorder, StyledParagraph,
};
use std::time::Instant;

/// Run every stage, handing assembled elements to `writer`.
pub(crate) fn run<W: DocumentWriter>(
    input: &[u8],
    options: &ConvertOptions,
    mut writer: W,
) -> Result<(W::Output, AssemblyStats)> {
    let started = Instant::now();

    let text = decode(input).at_stage(Stage::Parse)?;
    let tree = parser::parse(text, options.format);
    log::debug!("parse: {} nodes in {:?}", tree.root.node_count(), started.elapsed());

    let report = Classifier::new(options.classify.clone()).classify_report(&tree);
    log::debug!("classify: {} blocks in {:?}", report.blocks.len(), started.elapsed());

    let styles = options.resolve_styles().at_stage(Stage::ResolveStyle)?;

    let mut stats = Assembler::new(&styles)
        .assemble(&report.blocks, &mut writer)
        .at_stage(Stage::Assemble)?;
    stats.skipped_nodes = report.skipped_nodes as u32;
    stats.clamped_headings = report.clamped_headings as u32;

    let output = writer.finish().at_stage(Stage::Serialize)?;
    log::debug!("serialize: done in {:?}", started.elapsed());

    Ok((output, stats))
}

/// Convert input into a `.docx` result.
pub(crate) fn to_docx(input: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
    let (bytes, stats) = run(input, options, DocxWriter::new())?;
    log::info!(
        "Converted {} bytes of input into a {} byte document ({} elements)",
        input.len(),
        bytes.len(),
        stats.element_count()
    );

    let mut result = ConvertResult::new(bytes);
    if options.collect_stats {
        result = result.with_stats(stats);
    }
    Ok(result)
}

/// Run the pipeline without producing a document, returning the styled elements.
pub fn outline(input: &[u8], options: &ConvertOptions) -> Result<Vec<StyledParagraph>> {
    run(input, options, ElementRecorder::new()).map(|(elements, _)| elements)
}

fn decode(input: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(input)
        .map_err(|e| Error::ParseFailure(format!("input is not valid UTF-8: {}", e)))?;
    Ok(text)
}
