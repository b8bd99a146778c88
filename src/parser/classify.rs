//! Block classification.
//!
//! Walks a [`DocumentTree`] in document order and maps each node to a
//! [`SemanticBlock`]. Containers (lists, quotes, tables) are flattened into
//! the blocks they contain; nodes with no semantic counterpart are skipped.

use super::options::ClassifyOptions;
use super::tree::{DocumentTree, Node, NodeKind};
use crate::model::SemanticBlock;

/// Result of classifying a tree, with bookkeeping for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyReport {
    /// Classified blocks in reading order
    pub blocks: Vec<SemanticBlock>,
    /// Nodes dropped because they have no semantic counterpart
    pub skipped_nodes: usize,
    /// Headings whose level was reduced to the configured maximum
    pub clamped_headings: usize,
}

/// Maps parsed nodes to semantic blocks.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    options: ClassifyOptions,
}

impl Classifier {
    /// Create a classifier with the given options.
    pub fn new(options: ClassifyOptions) -> Self {
        Self { options }
    }

    /// Classify a tree into semantic blocks.
    pub fn classify(&self, tree: &DocumentTree) -> Vec<SemanticBlock> {
        self.classify_report(tree).blocks
    }

    /// Classify a tree and report skipped and clamped nodes.
    pub fn classify_report(&self, tree: &DocumentTree) -> ClassifyReport {
        let mut report = ClassifyReport::default();
        for node in tree.blocks() {
            self.visit(node, &mut report);
        }

        log::debug!(
            "Classified {} blocks ({} skipped, {} clamped)",
            report.blocks.len(),
            report.skipped_nodes,
            report.clamped_headings
        );
        report
    }

    fn visit(&self, node: &Node, report: &mut ClassifyReport) {
        match &node.kind {
            NodeKind::Heading(level) => {
                let text = normalize(&node.text);
                // Decided on the source level, before any clamping.
                if *level == 1 && self.options.promote_first_heading && report.blocks.is_empty() {
                    push_block(report, SemanticBlock::title(text));
                    return;
                }

                let max = self.options.max_heading_level;
                let level = if *level > max {
                    log::debug!("Clamping heading level {} to {}", level, max);
                    report.clamped_headings += 1;
                    max
                } else {
                    *level
                };
                push_block(report, SemanticBlock::heading(level, text));
            }
            NodeKind::Paragraph => {
                push_block(report, SemanticBlock::paragraph(normalize(&node.text)));
            }
            NodeKind::CodeBlock { language } => {
                push_block(
                    report,
                    SemanticBlock::Code {
                        text: strip_terminator(&node.text).to_string(),
                        language: language.clone(),
                    },
                );
            }
            NodeKind::ListItem => {
                // Tight list items carry their text directly.
                if !node.text.trim().is_empty() {
                    push_block(report, SemanticBlock::paragraph(normalize(&node.text)));
                }
                self.visit_children(node, report);
            }
            NodeKind::TableRow => {
                let cells: Vec<String> = node
                    .children
                    .iter()
                    .map(|cell| normalize(&cell.text))
                    .filter(|cell| !cell.is_empty())
                    .collect();
                push_block(report, SemanticBlock::paragraph(cells.join(" | ")));
            }
            NodeKind::Document
            | NodeKind::BlockQuote
            | NodeKind::List
            | NodeKind::Table
            | NodeKind::TableCell => self.visit_children(node, report),
            NodeKind::Other(name) => {
                log::debug!("Skipping unsupported node: {}", name);
                report.skipped_nodes += 1;
            }
        }
    }

    fn visit_children(&self, node: &Node, report: &mut ClassifyReport) {
        for child in &node.children {
            self.visit(child, report);
        }
    }
}

/// Classify a tree with default options.
pub fn classify(tree: &DocumentTree) -> Vec<SemanticBlock> {
    Classifier::default().classify(tree)
}

fn push_block(report: &mut ClassifyReport, block: SemanticBlock) {
    if block.text().trim().is_empty() {
        return;
    }
    report.blocks.push(block);
}

/// Collapse runs of whitespace, including line breaks, to single spaces.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop the single line terminator the parser leaves after fenced code.
fn strip_terminator(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}
