//! Dimension declarations.

use std::cmp::Ordering;
use std::fmt;

use biprog_core::{Span, StructureError, Ty};

use crate::expression::{Bracketed, Expression, Named, Typed};
use crate::node::{Narrow, Node, NodeKind, node_kind};
use crate::overload::Signature;
use crate::visitor::Visitor;

/// A dimension declaration, `dim name[extent]`.
///
/// Only the extent takes part in the order; the name is the scope key.
/// A dimension indexes with integers, so its type is `Int`.
#[derive(Debug, Clone)]
pub struct Dim<'ast> {
    pub name: &'ast str,
    pub extent: Node<'ast>,
    pub span: Span,
}

impl<'ast> Dim<'ast> {
    /// Build a dimension; the extent is required.
    pub fn new(
        name: &'ast str,
        extent: Option<Node<'ast>>,
        span: Span,
    ) -> Result<Self, StructureError> {
        let extent = Self::require(name, extent, span)?;
        Ok(Self { name, extent, span })
    }

    /// Check that the extent is present.
    pub fn require(
        name: &str,
        extent: Option<Node<'ast>>,
        span: Span,
    ) -> Result<Node<'ast>, StructureError> {
        extent.ok_or_else(|| StructureError::malformed("dim", name, "extent", span))
    }
}

impl<'ast> Expression<'ast> for Dim<'ast> {
    fn kind(&self) -> NodeKind {
        NodeKind::Dim
    }

    fn span(&self) -> Span {
        self.span
    }

    fn order(&self, other: &Node<'ast>) -> Option<Ordering> {
        let other = Dim::narrow(other)?;
        self.extent.partial_cmp(&other.extent)
    }
}

impl<'ast> Named<'ast> for Dim<'ast> {
    fn name(&self) -> &'ast str {
        self.name
    }
}

impl<'ast> Bracketed<'ast> for Dim<'ast> {
    fn brackets(&self) -> Node<'ast> {
        self.extent
    }
}

impl<'ast> Typed<'ast> for Dim<'ast> {
    fn ty(&self) -> Ty {
        Ty::Int
    }

    fn accept<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) -> Node<'ast> {
        visitor.visit_dim(self)
    }
}

impl<'ast> Signature<'ast> for Dim<'ast> {
    fn parameters(&self) -> Node<'ast> {
        self.extent
    }
}

impl fmt::Display for Dim<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dim {}[{}]", self.name, self.extent)
    }
}

node_kind!('ast, Dim<'ast>, Dim);
