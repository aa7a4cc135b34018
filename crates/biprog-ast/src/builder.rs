//! Arena constructors for every node kind.
//!
//! The builder is what a parser drives. Identifiers are copied into the
//! arena, so callers may pass borrowed input of any lifetime.

use bumpalo::Bump;
use ordered_float::OrderedFloat;

use biprog_core::{Span, StructureError, Ty};

use crate::compound::{Block, List};
use crate::dim::Dim;
use crate::leaf::{Literal, LiteralValue, Param, Reference, TypeRef};
use crate::node::Node;
use crate::overload::{FunctionOverload, MethodOverload};

/// Allocates nodes in a borrowed arena.
#[derive(Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
}

impl<'ast> AstBuilder<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    pub fn ident(&self, name: &str) -> &'ast str {
        self.arena.alloc_str(name)
    }

    fn literal(&self, value: LiteralValue, span: Span) -> Node<'ast> {
        Node::Literal(self.arena.alloc(Literal { value, span }))
    }

    pub fn int(&self, value: i64, span: Span) -> Node<'ast> {
        self.literal(LiteralValue::Int(value), span)
    }

    pub fn real(&self, value: f64, span: Span) -> Node<'ast> {
        self.literal(LiteralValue::Real(OrderedFloat(value)), span)
    }

    pub fn boolean(&self, value: bool, span: Span) -> Node<'ast> {
        self.literal(LiteralValue::Bool(value), span)
    }

    pub fn type_ref(&self, ty: Ty, span: Span) -> &'ast TypeRef {
        self.arena.alloc(TypeRef { ty, span })
    }

    /// A type reference for a builtin type name, or `None` if `name` is not one.
    pub fn builtin(&self, name: &str, span: Span) -> Option<&'ast TypeRef> {
        Ty::builtin(name).map(|ty| self.type_ref(ty, span))
    }

    pub fn param(&self, name: &str, ty_ref: &'ast TypeRef, span: Span) -> &'ast Param<'ast> {
        self.arena.alloc(Param {
            name: self.ident(name),
            ty_ref,
            span,
        })
    }

    /// A bare identifier use, `name`.
    pub fn name_ref(&self, name: &str, span: Span) -> Node<'ast> {
        Node::Reference(self.reference(None, name, None, None, span))
    }

    /// An unresolved use site.
    pub fn reference(
        &self,
        receiver: Option<&str>,
        name: &str,
        brackets: Option<Node<'ast>>,
        parens: Option<Node<'ast>>,
        span: Span,
    ) -> &'ast Reference<'ast> {
        self.arena.alloc(Reference {
            receiver: receiver.map(|r| self.ident(r)),
            name: self.ident(name),
            brackets,
            parens,
            ty: Ty::Unknown,
            target: None,
            span,
        })
    }

    pub fn list(&self, items: &[Node<'ast>], span: Span) -> &'ast List<'ast> {
        self.arena.alloc(List {
            items: self.arena.alloc_slice_copy(items),
            span,
        })
    }

    pub fn block(&self, items: &[Node<'ast>], span: Span) -> &'ast Block<'ast> {
        self.arena.alloc(Block {
            items: self.arena.alloc_slice_copy(items),
            span,
        })
    }

    /// `dim name[extent]`. Nothing is allocated when the extent is missing.
    pub fn dim(
        &self,
        name: &str,
        extent: Option<Node<'ast>>,
        span: Span,
    ) -> Result<&'ast Dim<'ast>, StructureError> {
        let extent = Dim::require(name, extent, span)?;
        Ok(self.arena.alloc(Dim {
            name: self.ident(name),
            extent,
            span,
        }))
    }

    pub fn function_overload(
        &self,
        name: &str,
        params: Option<Node<'ast>>,
        body: Option<Node<'ast>>,
        span: Span,
    ) -> Result<&'ast FunctionOverload<'ast>, StructureError> {
        let (params, body) = FunctionOverload::require(name, params, body, span)?;
        Ok(self.arena.alloc(FunctionOverload {
            name: self.ident(name),
            params,
            body,
            span,
        }))
    }

    pub fn method_overload(
        &self,
        name: &str,
        params: Option<Node<'ast>>,
        body: Option<Node<'ast>>,
        span: Span,
    ) -> Result<&'ast MethodOverload<'ast>, StructureError> {
        let (params, body) = MethodOverload::require(name, params, body, span)?;
        Ok(self.arena.alloc(MethodOverload {
            name: self.ident(name),
            params,
            body,
            span,
        }))
    }
}
