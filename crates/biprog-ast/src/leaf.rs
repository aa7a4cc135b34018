//! Leaf node kinds: literals, type references, parameters and use sites.
//!
//! All leaves share one comparison domain. A literal is a singleton type
//! sitting just below the type of its value, so `3 <= Int <= Real`; two
//! literals are equal only when they hold the same typed value. Type
//! references, parameters and resolved references compare by their [`Ty`].
//! A reference that has not been resolved yet is equal only to a reference
//! spelled the same way, and incomparable to everything else.

use std::cmp::Ordering;
use std::fmt;

use biprog_core::{Span, Ty};
use ordered_float::OrderedFloat;

use crate::dim::Dim;
use crate::expression::{Expression, Named, Typed};
use crate::node::{Node, NodeKind, node_kind};
use crate::overload::{FunctionOverload, MethodOverload};
use crate::visitor::Visitor;

// ============================================================================
// Literal
// ============================================================================

/// The value held by a [`Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    Int(i64),
    Real(OrderedFloat<f64>),
    Bool(bool),
}

impl LiteralValue {
    pub fn ty(&self) -> Ty {
        match self {
            LiteralValue::Int(_) => Ty::Int,
            LiteralValue::Real(_) => Ty::Real,
            LiteralValue::Bool(_) => Ty::Bool,
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(v) => write!(f, "{v}"),
            // Keep a decimal point so `3.0` never renders like the integer `3`.
            LiteralValue::Real(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v.0),
            LiteralValue::Real(v) => write!(f, "{}", v.0),
            LiteralValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// A literal value.
#[derive(Debug, Clone)]
pub struct Literal {
    pub value: LiteralValue,
    pub span: Span,
}

impl<'ast> Expression<'ast> for Literal {
    fn kind(&self) -> NodeKind {
        NodeKind::Literal
    }

    fn span(&self) -> Span {
        self.span
    }

    fn order(&self, other: &Node<'ast>) -> Option<Ordering> {
        leaf_order(Leaf::Value(&self.value), Leaf::of(other)?)
    }
}

impl<'ast> Typed<'ast> for Literal {
    fn ty(&self) -> Ty {
        self.value.ty()
    }

    fn accept<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) -> Node<'ast> {
        visitor.visit_literal(self)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

node_kind!('ast, Literal, Literal);

// ============================================================================
// TypeRef
// ============================================================================

/// A written type, e.g. the `Real` in `x:Real`.
#[derive(Debug, Clone)]
pub struct TypeRef {
    pub ty: Ty,
    pub span: Span,
}

impl<'ast> Expression<'ast> for TypeRef {
    fn kind(&self) -> NodeKind {
        NodeKind::TypeRef
    }

    fn span(&self) -> Span {
        self.span
    }

    fn order(&self, other: &Node<'ast>) -> Option<Ordering> {
        leaf_order(Leaf::Type(&self.ty), Leaf::of(other)?)
    }
}

impl<'ast> Typed<'ast> for TypeRef {
    fn ty(&self) -> Ty {
        self.ty.clone()
    }

    fn accept<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) -> Node<'ast> {
        visitor.visit_type_ref(self)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ty, f)
    }
}

node_kind!('ast, TypeRef, TypeRef);

// ============================================================================
// Param
// ============================================================================

/// A declared parameter, `name:Type`.
#[derive(Debug, Clone)]
pub struct Param<'ast> {
    pub name: &'ast str,
    pub ty_ref: &'ast TypeRef,
    pub span: Span,
}

impl<'ast> Expression<'ast> for Param<'ast> {
    fn kind(&self) -> NodeKind {
        NodeKind::Param
    }

    fn span(&self) -> Span {
        self.span
    }

    fn order(&self, other: &Node<'ast>) -> Option<Ordering> {
        leaf_order(Leaf::Type(&self.ty_ref.ty), Leaf::of(other)?)
    }
}

impl<'ast> Named<'ast> for Param<'ast> {
    fn name(&self) -> &'ast str {
        self.name
    }
}

impl<'ast> Typed<'ast> for Param<'ast> {
    fn ty(&self) -> Ty {
        self.ty_ref.ty.clone()
    }

    fn accept<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) -> Node<'ast> {
        visitor.visit_param(self)
    }
}

impl fmt::Display for Param<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.ty_ref)
    }
}

node_kind!('ast, Param<'ast>, Param);

// ============================================================================
// Reference
// ============================================================================

/// The declaration a [`Reference`] resolved to.
///
/// This is a non-owning back-reference into the scope that declared it.
#[derive(Debug, Clone, Copy)]
pub enum Target<'ast> {
    Dim(&'ast Dim<'ast>),
    Param(&'ast Param<'ast>),
    Function(&'ast FunctionOverload<'ast>),
    Method(&'ast MethodOverload<'ast>),
}

impl<'ast> Target<'ast> {
    pub fn node(&self) -> Node<'ast> {
        match *self {
            Target::Dim(n) => Node::Dim(n),
            Target::Param(n) => Node::Param(n),
            Target::Function(n) => Node::FunctionOverload(n),
            Target::Method(n) => Node::MethodOverload(n),
        }
    }
}

/// A use site: `x`, `x[i]`, `f(a, b)` or `recv.f(a)`.
///
/// The parser builds references with [`Ty::Unknown`] and no target; the
/// resolution pass replaces them with resolved copies.
#[derive(Debug, Clone)]
pub struct Reference<'ast> {
    pub receiver: Option<&'ast str>,
    pub name: &'ast str,
    /// Index content, written between brackets.
    pub brackets: Option<Node<'ast>>,
    /// Call arguments, written between parentheses.
    pub parens: Option<Node<'ast>>,
    pub ty: Ty,
    pub target: Option<Target<'ast>>,
    pub span: Span,
}

impl<'ast> Reference<'ast> {
    pub fn is_call(&self) -> bool {
        self.parens.is_some()
    }

    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }

    /// Same spelling: receiver, name and structurally equal children.
    fn same_spelling(&self, other: &Reference<'ast>) -> bool {
        fn same_child(a: Option<Node<'_>>, b: Option<Node<'_>>) -> bool {
            match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
        self.receiver == other.receiver
            && self.name == other.name
            && same_child(self.brackets, other.brackets)
            && same_child(self.parens, other.parens)
    }
}

impl<'ast> Expression<'ast> for Reference<'ast> {
    fn kind(&self) -> NodeKind {
        NodeKind::Reference
    }

    fn span(&self) -> Span {
        self.span
    }

    fn order(&self, other: &Node<'ast>) -> Option<Ordering> {
        leaf_order(Leaf::of_reference(self), Leaf::of(other)?)
    }
}

impl<'ast> Named<'ast> for Reference<'ast> {
    fn name(&self) -> &'ast str {
        self.name
    }
}

impl<'ast> Typed<'ast> for Reference<'ast> {
    fn ty(&self) -> Ty {
        self.ty.clone()
    }

    fn accept<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) -> Node<'ast> {
        visitor.visit_reference(self)
    }
}

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(receiver) = self.receiver {
            write!(f, "{receiver}.")?;
        }
        f.write_str(self.name)?;
        if let Some(brackets) = &self.brackets {
            write!(f, "[{brackets}]")?;
        }
        if let Some(parens) = &self.parens {
            write!(f, "({parens})")?;
        }
        Ok(())
    }
}

node_kind!('ast, Reference<'ast>, Reference);

// ============================================================================
// Leaf ordering
// ============================================================================

/// What a leaf contributes to the comparison.
#[derive(Clone, Copy)]
enum Leaf<'a, 'ast> {
    Value(&'a LiteralValue),
    Type(&'a Ty),
    Pending(&'a Reference<'ast>),
}

impl<'a, 'ast> Leaf<'a, 'ast> {
    /// Narrow a node to the leaf domain; `None` for compound kinds.
    fn of(node: &Node<'ast>) -> Option<Leaf<'ast, 'ast>> {
        match *node {
            Node::Literal(n) => Some(Leaf::Value(&n.value)),
            Node::TypeRef(n) => Some(Leaf::Type(&n.ty)),
            Node::Param(n) => Some(Leaf::Type(&n.ty_ref.ty)),
            Node::Reference(n) => Some(Leaf::of_reference(n)),
            _ => None,
        }
    }

    fn of_reference(reference: &'a Reference<'ast>) -> Leaf<'a, 'ast> {
        if reference.is_resolved() {
            Leaf::Type(&reference.ty)
        } else {
            Leaf::Pending(reference)
        }
    }
}

fn leaf_order(a: Leaf<'_, '_>, b: Leaf<'_, '_>) -> Option<Ordering> {
    match (a, b) {
        (Leaf::Value(x), Leaf::Value(y)) => (x == y).then_some(Ordering::Equal),
        (Leaf::Value(x), Leaf::Type(t)) => value_below(x, t).then_some(Ordering::Less),
        (Leaf::Type(t), Leaf::Value(x)) => value_below(x, t).then_some(Ordering::Greater),
        (Leaf::Type(s), Leaf::Type(t)) => s.partial_cmp(t),
        (Leaf::Pending(x), Leaf::Pending(y)) => {
            (std::ptr::eq(x, y) || x.same_spelling(y)).then_some(Ordering::Equal)
        }
        _ => None,
    }
}

fn value_below(value: &LiteralValue, ty: &Ty) -> bool {
    matches!(
        value.ty().partial_cmp(ty),
        Some(Ordering::Less | Ordering::Equal)
    )
}
