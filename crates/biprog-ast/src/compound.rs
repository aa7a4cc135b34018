//! Sequence node kinds.
//!
//! [`List`] is comma-separated content (parameter and argument lists,
//! indices); [`Block`] is the content of a body. Both order elementwise:
//! `a <= b` iff they have the same length and every item of `a` is `<=` the
//! item of `b` at the same position.

use std::cmp::Ordering;
use std::fmt;

use biprog_core::order::pairwise;
use biprog_core::{Span, Ty};

use crate::expression::{Expression, Typed};
use crate::node::{Narrow, Node, NodeKind, node_kind};
use crate::visitor::Visitor;

fn write_separated(f: &mut fmt::Formatter<'_>, items: &[Node<'_>], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn items_order(a: &[Node<'_>], b: &[Node<'_>]) -> Option<Ordering> {
    pairwise(a, b, |x, y| x.partial_cmp(y))
}

/// Comma-separated content.
#[derive(Debug, Clone)]
pub struct List<'ast> {
    pub items: &'ast [Node<'ast>],
    pub span: Span,
}

impl<'ast> List<'ast> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'ast> Expression<'ast> for List<'ast> {
    fn kind(&self) -> NodeKind {
        NodeKind::List
    }

    fn span(&self) -> Span {
        self.span
    }

    fn order(&self, other: &Node<'ast>) -> Option<Ordering> {
        let other = List::narrow(other)?;
        items_order(self.items, other.items)
    }
}

impl<'ast> Typed<'ast> for List<'ast> {
    /// The product of the item types.
    fn ty(&self) -> Ty {
        Ty::Tuple(self.items.iter().map(Node::ty).collect())
    }

    fn accept<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) -> Node<'ast> {
        visitor.visit_list(self)
    }
}

impl fmt::Display for List<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, self.items, ", ")
    }
}

node_kind!('ast, List<'ast>, List);

/// Body content.
#[derive(Debug, Clone)]
pub struct Block<'ast> {
    pub items: &'ast [Node<'ast>],
    pub span: Span,
}

impl<'ast> Block<'ast> {
    /// The item that determines the block's type.
    pub fn tail(&self) -> Option<Node<'ast>> {
        self.items.last().copied()
    }
}

impl<'ast> Expression<'ast> for Block<'ast> {
    fn kind(&self) -> NodeKind {
        NodeKind::Block
    }

    fn span(&self) -> Span {
        self.span
    }

    fn order(&self, other: &Node<'ast>) -> Option<Ordering> {
        let other = Block::narrow(other)?;
        items_order(self.items, other.items)
    }
}

impl<'ast> Typed<'ast> for Block<'ast> {
    /// The type of the last item, `Void` when empty.
    fn ty(&self) -> Ty {
        self.tail().map_or(Ty::Void, |tail| tail.ty())
    }

    fn accept<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) -> Node<'ast> {
        visitor.visit_block(self)
    }
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated(f, self.items, "; ")
    }
}

node_kind!('ast, Block<'ast>, Block);
