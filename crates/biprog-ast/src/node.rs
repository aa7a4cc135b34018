//! The tagged node reference and the structural comparison protocol.
//!
//! [`Node`] is a `Copy` handle to an arena-allocated node of any kind. It
//! implements [`PartialOrd`] and [`PartialEq`] so `<`, `<=`, `>`, `>=`, `==`
//! and `!=` work between any two nodes, whatever their kinds:
//!
//! - the left operand's kind narrows the right operand with [`Narrow`];
//! - a failed narrowing makes the pair incomparable, so every relational
//!   operator answers `false` and `!=` answers `true`;
//! - a successful narrowing delegates to the kind's componentwise rule.
//!
//! Comparison never panics and never reports an error.

use std::cmp::Ordering;
use std::fmt;

use biprog_core::{Span, Ty};

use crate::compound::{Block, List};
use crate::dim::Dim;
use crate::expression::{Expression, Typed};
use crate::leaf::{Literal, Param, Reference, TypeRef};
use crate::overload::{FunctionOverload, MethodOverload};
use crate::visitor::Visitor;

/// Discriminant of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Literal,
    TypeRef,
    Param,
    Reference,
    List,
    Block,
    Dim,
    MethodOverload,
    FunctionOverload,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Literal => "literal",
            NodeKind::TypeRef => "type",
            NodeKind::Param => "parameter",
            NodeKind::Reference => "reference",
            NodeKind::List => "list",
            NodeKind::Block => "block",
            NodeKind::Dim => "dim",
            NodeKind::MethodOverload => "method",
            NodeKind::FunctionOverload => "function",
        }
    }

    /// Leaf kinds share one comparison domain (values and types).
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Literal | NodeKind::TypeRef | NodeKind::Param | NodeKind::Reference
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to an arena-allocated typed node.
#[derive(Debug, Clone, Copy)]
pub enum Node<'ast> {
    Literal(&'ast Literal),
    TypeRef(&'ast TypeRef),
    Param(&'ast Param<'ast>),
    Reference(&'ast Reference<'ast>),
    List(&'ast List<'ast>),
    Block(&'ast Block<'ast>),
    Dim(&'ast Dim<'ast>),
    MethodOverload(&'ast MethodOverload<'ast>),
    FunctionOverload(&'ast FunctionOverload<'ast>),
}

/// Checked narrowing from a [`Node`] to one concrete kind.
pub trait Narrow<'ast>: Sized {
    /// The node as `Self`, or `None` if it is another kind.
    fn narrow(node: &Node<'ast>) -> Option<&'ast Self>;
}

impl<'ast> Node<'ast> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Literal(_) => NodeKind::Literal,
            Node::TypeRef(_) => NodeKind::TypeRef,
            Node::Param(_) => NodeKind::Param,
            Node::Reference(_) => NodeKind::Reference,
            Node::List(_) => NodeKind::List,
            Node::Block(_) => NodeKind::Block,
            Node::Dim(_) => NodeKind::Dim,
            Node::MethodOverload(_) => NodeKind::MethodOverload,
            Node::FunctionOverload(_) => NodeKind::FunctionOverload,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Literal(n) => n.span(),
            Node::TypeRef(n) => n.span(),
            Node::Param(n) => n.span(),
            Node::Reference(n) => n.span(),
            Node::List(n) => n.span(),
            Node::Block(n) => n.span(),
            Node::Dim(n) => n.span(),
            Node::MethodOverload(n) => n.span(),
            Node::FunctionOverload(n) => n.span(),
        }
    }

    /// The node's semantic type.
    pub fn ty(&self) -> Ty {
        match self {
            Node::Literal(n) => n.ty(),
            Node::TypeRef(n) => n.ty(),
            Node::Param(n) => n.ty(),
            Node::Reference(n) => n.ty(),
            Node::List(n) => n.ty(),
            Node::Block(n) => n.ty(),
            Node::Dim(n) => n.ty(),
            Node::MethodOverload(n) => n.ty(),
            Node::FunctionOverload(n) => n.ty(),
        }
    }

    /// Let the node pick the visitor handler for its own kind.
    pub fn accept<V: Visitor<'ast> + ?Sized>(self, visitor: &mut V) -> Node<'ast> {
        match self {
            Node::Literal(n) => n.accept(visitor),
            Node::TypeRef(n) => n.accept(visitor),
            Node::Param(n) => n.accept(visitor),
            Node::Reference(n) => n.accept(visitor),
            Node::List(n) => n.accept(visitor),
            Node::Block(n) => n.accept(visitor),
            Node::Dim(n) => n.accept(visitor),
            Node::MethodOverload(n) => n.accept(visitor),
            Node::FunctionOverload(n) => n.accept(visitor),
        }
    }

    /// Address of the referenced node, used as its identity.
    pub fn addr(&self) -> *const () {
        match *self {
            Node::Literal(n) => std::ptr::from_ref(n).cast(),
            Node::TypeRef(n) => std::ptr::from_ref(n).cast(),
            Node::Param(n) => std::ptr::from_ref(n).cast(),
            Node::Reference(n) => std::ptr::from_ref(n).cast(),
            Node::List(n) => std::ptr::from_ref(n).cast(),
            Node::Block(n) => std::ptr::from_ref(n).cast(),
            Node::Dim(n) => std::ptr::from_ref(n).cast(),
            Node::MethodOverload(n) => std::ptr::from_ref(n).cast(),
            Node::FunctionOverload(n) => std::ptr::from_ref(n).cast(),
        }
    }

    /// Whether both handles point at the same allocation.
    pub fn same(&self, other: &Node<'ast>) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }

    /// Checked narrowing to a concrete kind.
    pub fn narrow<T: Narrow<'ast>>(&self) -> Option<&'ast T> {
        T::narrow(self)
    }
}

impl PartialOrd for Node<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self {
            Node::Literal(n) => n.compare(other),
            Node::TypeRef(n) => n.compare(other),
            Node::Param(n) => n.compare(other),
            Node::Reference(n) => n.compare(other),
            Node::List(n) => n.compare(other),
            Node::Block(n) => n.compare(other),
            Node::Dim(n) => n.compare(other),
            Node::MethodOverload(n) => n.compare(other),
            Node::FunctionOverload(n) => n.compare(other),
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(n) => fmt::Display::fmt(n, f),
            Node::TypeRef(n) => fmt::Display::fmt(n, f),
            Node::Param(n) => fmt::Display::fmt(n, f),
            Node::Reference(n) => fmt::Display::fmt(n, f),
            Node::List(n) => fmt::Display::fmt(n, f),
            Node::Block(n) => fmt::Display::fmt(n, f),
            Node::Dim(n) => fmt::Display::fmt(n, f),
            Node::MethodOverload(n) => fmt::Display::fmt(n, f),
            Node::FunctionOverload(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// Wire a concrete kind into [`Node`]: narrowing, conversion, and the
/// relational operators against any node.
macro_rules! node_kind {
    ($lt:lifetime, $ty:ty, $variant:ident) => {
        impl<$lt> $crate::node::Narrow<$lt> for $ty {
            fn narrow(node: &$crate::node::Node<$lt>) -> Option<&$lt Self> {
                match *node {
                    $crate::node::Node::$variant(n) => Some(n),
                    _ => None,
                }
            }
        }

        impl<$lt> From<&$lt $ty> for $crate::node::Node<$lt> {
            fn from(n: &$lt $ty) -> Self {
                $crate::node::Node::$variant(n)
            }
        }

        impl<$lt> PartialEq<$crate::node::Node<$lt>> for $ty {
            fn eq(&self, other: &$crate::node::Node<$lt>) -> bool {
                $crate::expression::Expression::eq_node(self, other)
            }
        }

        impl<$lt> PartialOrd<$crate::node::Node<$lt>> for $ty {
            fn partial_cmp(
                &self,
                other: &$crate::node::Node<$lt>,
            ) -> Option<std::cmp::Ordering> {
                $crate::expression::Expression::compare(self, other)
            }
        }
    };
}

pub(crate) use node_kind;
