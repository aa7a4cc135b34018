//! Top-level declarations handed to the declaration pass.

use std::fmt;

use biprog_core::Span;

use crate::dim::Dim;
use crate::expression::Expression;
use crate::node::Node;
use crate::overload::{FunctionOverload, MethodOverload};

/// One declaration in a model.
#[derive(Debug, Clone, Copy)]
pub enum Item<'ast> {
    Dim(&'ast Dim<'ast>),
    Function(&'ast FunctionOverload<'ast>),
    /// A method overload declared inside `receiver`.
    Method {
        receiver: &'ast str,
        overload: &'ast MethodOverload<'ast>,
    },
}

impl<'ast> Item<'ast> {
    pub fn name(&self) -> &'ast str {
        match self {
            Item::Dim(d) => d.name,
            Item::Function(f) => f.name,
            Item::Method { overload, .. } => overload.name,
        }
    }

    pub fn receiver(&self) -> Option<&'ast str> {
        match *self {
            Item::Method { receiver, .. } => Some(receiver),
            _ => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Item::Dim(d) => d.span(),
            Item::Function(f) => f.span(),
            Item::Method { overload, .. } => overload.span(),
        }
    }

    pub fn node(&self) -> Node<'ast> {
        match *self {
            Item::Dim(d) => Node::Dim(d),
            Item::Function(f) => Node::FunctionOverload(f),
            Item::Method { overload, .. } => Node::MethodOverload(overload),
        }
    }
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Method { receiver, overload } => write!(f, "{receiver}: {overload}"),
            _ => fmt::Display::fmt(&self.node(), f),
        }
    }
}
