//! Block tree produced by the input parsers.

/// Kind of a block-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of the tree
    Document,
    /// Heading with its source level
    Heading(u8),
    /// Paragraph of inline text
    Paragraph,
    /// Fenced or indented code
    CodeBlock {
        /// First word of the fence info string
        language: Option<String>,
    },
    /// Block quote container
    BlockQuote,
    /// List container
    List,
    /// List item (tight items carry their text directly)
    ListItem,
    /// Table container
    Table,
    /// Table header or body row
    TableRow,
    /// Table cell
    TableCell,
    /// Any block the classifier does not know how to render
    Other(&'static str),
}

impl NodeKind {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Heading(_) => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::CodeBlock { .. } => "code_block",
            NodeKind::BlockQuote => "block_quote",
            NodeKind::List => "list",
            NodeKind::ListItem => "list_item",
            NodeKind::Table => "table",
            NodeKind::TableRow => "table_row",
            NodeKind::TableCell => "table_cell",
            NodeKind::Other(name) => name,
        }
    }
}

/// A block-level node with its raw text and nested blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Node kind
    pub kind: NodeKind,

    /// Raw text directly inside this node (inline content only)
    pub text: String,

    /// Nested block nodes in source order
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Create a node with text.
    pub fn with_text(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Append a child node.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Count this node and all descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

/// Parsed input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTree {
    /// Root node, always of kind [`NodeKind::Document`]
    pub root: Node,
}

impl DocumentTree {
    /// Create a tree from top-level nodes.
    pub fn new(children: Vec<Node>) -> Self {
        let mut root = Node::new(NodeKind::Document);
        root.children = children;
        Self { root }
    }

    /// Top-level block nodes.
    pub fn blocks(&self) -> &[Node] {
        &self.root.children
    }

    /// Check if the tree has no blocks.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
