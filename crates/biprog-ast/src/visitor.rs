//! Double-dispatch traversal of typed nodes.
//!
//! [`Node::accept`] (and [`Typed::accept`](crate::Typed::accept) on a
//! concrete kind) calls the `visit_*` handler for the node's own kind. Every
//! handler returns a node: a rewriting pass returns the replacement, an
//! analysis pass returns its input. The defaults call the matching `walk_*`
//! function, which visits the children in source order and returns the node
//! unchanged.
//!
//! # Example: counting literals
//!
//! ```
//! use biprog_ast::{AstBuilder, Literal, Node, Visitor};
//! use biprog_core::Span;
//! use bumpalo::Bump;
//!
//! struct Literals(usize);
//!
//! impl<'ast> Visitor<'ast> for Literals {
//!     fn visit_literal(&mut self, literal: &'ast Literal) -> Node<'ast> {
//!         self.0 += 1;
//!         Node::Literal(literal)
//!     }
//! }
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let s = Span::default();
//! let list = Node::from(b.list(&[b.int(1, s), b.name_ref("x", s), b.real(2.0, s)], s));
//!
//! let mut counter = Literals(0);
//! list.accept(&mut counter);
//! assert_eq!(counter.0, 2);
//! ```

use crate::compound::{Block, List};
use crate::dim::Dim;
use crate::leaf::{Literal, Param, Reference, TypeRef};
use crate::node::Node;
use crate::overload::{FunctionOverload, MethodOverload};

/// One handler per node kind.
pub trait Visitor<'ast> {
    fn visit_literal(&mut self, literal: &'ast Literal) -> Node<'ast> {
        Node::Literal(literal)
    }

    fn visit_type_ref(&mut self, ty_ref: &'ast TypeRef) -> Node<'ast> {
        Node::TypeRef(ty_ref)
    }

    fn visit_param(&mut self, param: &'ast Param<'ast>) -> Node<'ast> {
        walk_param(self, param)
    }

    fn visit_reference(&mut self, reference: &'ast Reference<'ast>) -> Node<'ast> {
        walk_reference(self, reference)
    }

    fn visit_list(&mut self, list: &'ast List<'ast>) -> Node<'ast> {
        walk_list(self, list)
    }

    fn visit_block(&mut self, block: &'ast Block<'ast>) -> Node<'ast> {
        walk_block(self, block)
    }

    fn visit_dim(&mut self, dim: &'ast Dim<'ast>) -> Node<'ast> {
        walk_dim(self, dim)
    }

    fn visit_method_overload(&mut self, overload: &'ast MethodOverload<'ast>) -> Node<'ast> {
        walk_method_overload(self, overload)
    }

    fn visit_function_overload(&mut self, overload: &'ast FunctionOverload<'ast>) -> Node<'ast> {
        walk_function_overload(self, overload)
    }
}

pub fn walk_param<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    param: &'ast Param<'ast>,
) -> Node<'ast> {
    visitor.visit_type_ref(param.ty_ref);
    Node::Param(param)
}

/// Brackets before parentheses, matching source order.
pub fn walk_reference<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    reference: &'ast Reference<'ast>,
) -> Node<'ast> {
    if let Some(brackets) = reference.brackets {
        brackets.accept(visitor);
    }
    if let Some(parens) = reference.parens {
        parens.accept(visitor);
    }
    Node::Reference(reference)
}

pub fn walk_list<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    list: &'ast List<'ast>,
) -> Node<'ast> {
    for item in list.items {
        item.accept(visitor);
    }
    Node::List(list)
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    block: &'ast Block<'ast>,
) -> Node<'ast> {
    for item in block.items {
        item.accept(visitor);
    }
    Node::Block(block)
}

pub fn walk_dim<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    dim: &'ast Dim<'ast>,
) -> Node<'ast> {
    dim.extent.accept(visitor);
    Node::Dim(dim)
}

pub fn walk_method_overload<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    overload: &'ast MethodOverload<'ast>,
) -> Node<'ast> {
    overload.params.accept(visitor);
    overload.body.accept(visitor);
    Node::MethodOverload(overload)
}

pub fn walk_function_overload<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    overload: &'ast FunctionOverload<'ast>,
) -> Node<'ast> {
    overload.params.accept(visitor);
    overload.body.accept(visitor);
    Node::FunctionOverload(overload)
}
