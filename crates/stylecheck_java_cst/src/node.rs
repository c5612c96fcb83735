use stylecheck_text_size::{TextRange, TextSize};
use tree_sitter::Node;

/// A syntax node paired with the source text it was parsed from.
#[derive(Debug, Clone, Copy)]
pub struct CstNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> CstNode<'a> {
    pub fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn is_named(&self) -> bool {
        self.node.is_named()
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn range(&self) -> TextRange {
        TextRange::new(
            TextSize::from(self.node.start_byte() as u32),
            TextSize::from(self.node.end_byte() as u32),
        )
    }

    /// Source text covered by this node.
    pub fn text(&self) -> &'a str {
        &self.source[self.range()]
    }

    pub fn parent(&self) -> Option<CstNode<'a>> {
        self.node.parent().map(|node| Self::new(node, self.source))
    }

    pub fn child_by_field_name(&self, field: &str) -> Option<CstNode<'a>> {
        self.node
            .child_by_field_name(field)
            .map(|node| Self::new(node, self.source))
    }

    /// All children, anonymous tokens included, in source order.
    pub fn children(&self) -> impl Iterator<Item = CstNode<'a>> + use<'a> {
        let source = self.source;
        let mut cursor = self.node.walk();
        let children: Vec<_> = self.node.children(&mut cursor).collect();
        children.into_iter().map(move |node| Self::new(node, source))
    }

    /// Named children only, in source order.
    pub fn named_children(&self) -> impl Iterator<Item = CstNode<'a>> + use<'a> {
        self.children().filter(CstNode::is_named)
    }
}
