//! Markdown input parsing.
//!
//! Tokenizing is delegated to `pulldown-cmark`; this module only folds its
//! event stream into a [`DocumentTree`] of block nodes. Inline markup
//! (emphasis, links, inline code) is flattened into the enclosing block's text.

use super::tree::{DocumentTree, Node, NodeKind};
use crate::error::{Error, Result};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// Parse Markdown text into a block tree. Never fails.
pub fn parse(input: &str) -> DocumentTree {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut builder = TreeBuilder::new();

    for event in Parser::new_ext(input, parser_options()) {
        match event {
            Event::Start(tag) => builder.open(&tag),
            Event::End(_) => builder.close(),
            Event::Text(text) | Event::Code(text) | Event::Html(text) => builder.text(&text),
            Event::SoftBreak | Event::HardBreak => builder.text("\n"),
            Event::Rule => builder.leaf(Node::new(NodeKind::Other("thematic_break"))),
            _ => {}
        }
    }

    builder.finish()
}

/// Parse Markdown from raw bytes, which must be UTF-8.
pub fn parse_bytes(input: &[u8]) -> Result<DocumentTree> {
    let text = std::str::from_utf8(input)
        .map_err(|e| Error::ParseFailure(format!("input is not valid UTF-8: {}", e)))?;
    Ok(parse(text))
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Open element on the builder stack.
enum Frame {
    /// A block node being filled
    Block(Node),
    /// An inline tag whose text belongs to the enclosing block
    Inline,
}

struct TreeBuilder {
    stack: Vec<Frame>,
    root: Node,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: Node::new(NodeKind::Document),
        }
    }

    fn open(&mut self, tag: &Tag<'_>) {
        let frame = match block_kind(tag) {
            Some(kind) => Frame::Block(Node::new(kind)),
            None => Frame::Inline,
        };
        self.stack.push(frame);
    }

    fn close(&mut self) {
        match self.stack.pop() {
            Some(Frame::Block(node)) => self.attach(node),
            Some(Frame::Inline) => {}
            None => log::warn!("Unbalanced end event in Markdown stream"),
        }
    }

    fn leaf(&mut self, node: Node) {
        self.attach(node);
    }

    fn attach(&mut self, node: Node) {
        match self.current_block() {
            Some(parent) => parent.push(node),
            None => self.root.push(node),
        }
    }

    fn text(&mut self, text: &str) {
        match self.current_block() {
            Some(block) => block.text.push_str(text),
            None => log::debug!("Dropping text outside any block: {:?}", text),
        }
    }

    fn current_block(&mut self) -> Option<&mut Node> {
        self.stack.iter_mut().rev().find_map(|frame| match frame {
            Frame::Block(node) => Some(node),
            Frame::Inline => None,
        })
    }

    fn finish(mut self) -> DocumentTree {
        if !self.stack.is_empty() {
            log::warn!("Markdown stream ended with {} open elements", self.stack.len());
            while !self.stack.is_empty() {
                self.close();
            }
        }
        DocumentTree { root: self.root }
    }
}

fn block_kind(tag: &Tag<'_>) -> Option<NodeKind> {
    let kind = match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading(heading_level(*level)),
        Tag::BlockQuote(..) => NodeKind::BlockQuote,
        Tag::CodeBlock(kind) => NodeKind::CodeBlock {
            language: match kind {
                CodeBlockKind::Fenced(info) => info
                    .split_whitespace()
                    .next()
                    .map(|lang| lang.to_string()),
                CodeBlockKind::Indented => None,
            },
        },
        Tag::List(_) => NodeKind::List,
        Tag::Item => NodeKind::ListItem,
        Tag::Table(_) => NodeKind::Table,
        Tag::TableHead | Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell,
        Tag::HtmlBlock => NodeKind::Other("html_block"),
        Tag::FootnoteDefinition(_) => NodeKind::Other("footnote_definition"),
        Tag::MetadataBlock(_) => NodeKind::Other("metadata_block"),
        _ => return None,
    };
    Some(kind)
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tree: &DocumentTree) -> Vec<NodeKind> {
        tree.blocks().iter().map(|n| n.kind.clone()).collect()
    }

    #[test]
    fn test_parse_basic_blocks() {
        let tree = parse("# Title\n\nHello *world*.\n\n## Section\n");
        assert_eq!(
            kinds(&tree),
            vec![
                NodeKind::Heading(1),
                NodeKind::Paragraph,
                NodeKind::Heading(2)
            ]
        );
        assert_eq!(tree.blocks()[0].text, "Title");
        assert_eq!(tree.blocks()[1].text, "Hello world.");
    }

    #[test]
    fn test_parse_fenced_code() {
        let tree = parse("```rust\nfn main() {\n    run();\n}\n```\n");
        let node = &tree.blocks()[0];
        assert_eq!(
            node.kind,
            NodeKind::CodeBlock {
                language: Some("rust".into())
            }
        );
        assert_eq!(node.text, "fn main() {\n    run();\n}\n");
    }

    #[test]
    fn test_parse_inline_code_and_links_flatten() {
        let tree = parse("Call `run()` or see [docs](https://example.com).");
        assert_eq!(tree.blocks()[0].text, "Call run() or see docs.");
    }

    #[test]
    fn test_parse_nested_list() {
        let tree = parse("- one\n- two\n  - nested\n");
        let list = &tree.blocks()[0];
        assert_eq!(list.kind, NodeKind::List);
        assert_eq!(list.children.len(), 2);
        assert_eq!(list.children[0].text, "one");
        assert_eq!(list.children[1].children[0].kind, NodeKind::List);
    }

    #[test]
    fn test_parse_html_and_rule_are_other() {
        let tree = parse("<div>raw</div>\n\n---\n\ntext");
        assert_eq!(
            kinds(&tree),
            vec![
                NodeKind::Other("html_block"),
                NodeKind::Other("thematic_break"),
                NodeKind::Paragraph
            ]
        );
    }

    #[test]
    fn test_parse_table_rows() {
        let tree = parse("| a | b |\n|---|---|\n| 1 | 2 |\n");
        let table = &tree.blocks()[0];
        assert_eq!(table.kind, NodeKind::Table);
        assert_eq!(table.children.len(), 2);
        assert!(table.children.iter().all(|row| row.kind == NodeKind::TableRow));
        assert_eq!(table.children[1].children[1].text.trim(), "2");
    }

    #[test]
    fn test_parse_empty_and_bom() {
        assert!(parse("").is_empty());
        let tree = parse("\u{feff}# Heading");
        assert_eq!(tree.blocks()[0].kind, NodeKind::Heading(1));
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let err = parse_bytes(&[0x23, 0x20, 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, Error::ParseFailure(_)));
    }
}
