//! Plain text input: one paragraph per non-blank line.

use super::tree::{DocumentTree, Node, NodeKind};

/// Parse plain text into a block tree.
pub fn parse(input: &str) -> DocumentTree {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let nodes = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Node::with_text(NodeKind::Paragraph, line))
        .collect();
    DocumentTree::new(nodes)
}
