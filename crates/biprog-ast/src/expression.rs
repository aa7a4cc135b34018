//! Capability traits layered onto node kinds.
//!
//! A concrete kind implements whichever capabilities it has; there is no
//! shared base state. [`Dim`](crate::Dim), for instance, is
//! [`Named`] + [`Bracketed`] + [`Typed`].

use std::cmp::Ordering;
use std::fmt;

use biprog_core::{Span, Ty};

use crate::node::{Node, NodeKind};
use crate::visitor::Visitor;

/// Root capability: structural comparison against any node, and canonical
/// rendering through [`fmt::Display`].
pub trait Expression<'ast>: fmt::Display {
    fn kind(&self) -> NodeKind;

    fn span(&self) -> Span;

    /// The kind's own rule, applied to a node of any kind.
    ///
    /// Implementations narrow `other` to a kind they understand and return
    /// `None` when the narrowing fails.
    fn order(&self, other: &Node<'ast>) -> Option<Ordering>;

    /// Structural comparison. A node is always `Equal` to itself.
    fn compare(&self, other: &Node<'ast>) -> Option<Ordering> {
        if std::ptr::eq((self as *const Self).cast::<()>(), other.addr()) {
            return Some(Ordering::Equal);
        }
        self.order(other)
    }

    fn lt_node(&self, other: &Node<'ast>) -> bool {
        matches!(self.compare(other), Some(Ordering::Less))
    }

    fn le_node(&self, other: &Node<'ast>) -> bool {
        matches!(self.compare(other), Some(Ordering::Less | Ordering::Equal))
    }

    fn gt_node(&self, other: &Node<'ast>) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater))
    }

    fn ge_node(&self, other: &Node<'ast>) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater | Ordering::Equal))
    }

    fn eq_node(&self, other: &Node<'ast>) -> bool {
        matches!(self.compare(other), Some(Ordering::Equal))
    }

    fn ne_node(&self, other: &Node<'ast>) -> bool {
        !self.eq_node(other)
    }
}

/// A node carrying an identifier used as a scope or overload-set key.
pub trait Named<'ast>: Expression<'ast> {
    fn name(&self) -> &'ast str;
}

/// A node owning one typed child written between brackets or parentheses
/// (extents, indices, a parameter list).
pub trait Bracketed<'ast>: Expression<'ast> {
    fn brackets(&self) -> Node<'ast>;
}

/// A node owning one typed child written between braces (a body).
pub trait Braced<'ast>: Expression<'ast> {
    fn braces(&self) -> Node<'ast>;
}

/// A node carrying a semantic type and taking part in the subtype order.
pub trait Typed<'ast>: Expression<'ast> {
    fn ty(&self) -> Ty;

    /// Double dispatch: the node calls back the handler for its own kind.
    fn accept<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) -> Node<'ast>;
}
