//! Concrete signatures: one candidate of a function or method overload set.
//!
//! A signature owns a parameter list (bracketed) and a body (braced) and
//! orders as their product: `a <= b` iff `a.params <= b.params` and
//! `a.body <= b.body`. Strict `<` follows from that (`<=` and not `==`),
//! so a pair that improves one component and worsens the other is
//! incomparable.

use std::cmp::Ordering;
use std::fmt;

use biprog_core::order::conjoin;
use biprog_core::{Span, StructureError, Ty};

use crate::expression::{Braced, Bracketed, Expression, Named, Typed};
use crate::node::{Narrow, Node, NodeKind, node_kind};
use crate::visitor::Visitor;

/// A candidate that can live in an [`Overloaded`](crate::Overloaded) set.
pub trait Signature<'ast>: Named<'ast> + Typed<'ast> {
    /// The node an argument list is matched against.
    fn parameters(&self) -> Node<'ast>;
}

fn signature_ty(params: &Node<'_>, body: &Node<'_>) -> Ty {
    Ty::Function {
        params: Box::new(params.ty()),
        result: Box::new(body.ty()),
    }
}

/// Generates one signature kind; functions and methods differ only in the
/// keyword they render with and the visitor handler they dispatch to.
macro_rules! signature_kind {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $keyword:literal, $visit:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<'ast> {
            pub name: &'ast str,
            pub params: Node<'ast>,
            pub body: Node<'ast>,
            pub span: Span,
        }

        impl<'ast> $name<'ast> {
            /// Build a signature; both the parameter list and the body are required.
            pub fn new(
                name: &'ast str,
                params: Option<Node<'ast>>,
                body: Option<Node<'ast>>,
                span: Span,
            ) -> Result<Self, StructureError> {
                let (params, body) = Self::require(name, params, body, span)?;
                Ok(Self {
                    name,
                    params,
                    body,
                    span,
                })
            }

            /// Check that both children are present; `name` may be borrowed
            /// from anywhere, since it only feeds the error.
            pub fn require(
                name: &str,
                params: Option<Node<'ast>>,
                body: Option<Node<'ast>>,
                span: Span,
            ) -> Result<(Node<'ast>, Node<'ast>), StructureError> {
                let params = params.ok_or_else(|| {
                    StructureError::malformed($keyword, name, "parameter list", span)
                })?;
                let body =
                    body.ok_or_else(|| StructureError::malformed($keyword, name, "body", span))?;
                Ok((params, body))
            }

            /// The body's type, i.e. what a call evaluates to.
            pub fn result_ty(&self) -> Ty {
                self.body.ty()
            }
        }

        impl<'ast> Expression<'ast> for $name<'ast> {
            fn kind(&self) -> NodeKind {
                NodeKind::$variant
            }

            fn span(&self) -> Span {
                self.span
            }

            fn order(&self, other: &Node<'ast>) -> Option<Ordering> {
                let other = $name::narrow(other)?;
                conjoin(
                    self.params.partial_cmp(&other.params),
                    self.body.partial_cmp(&other.body),
                )
            }
        }

        impl<'ast> Named<'ast> for $name<'ast> {
            fn name(&self) -> &'ast str {
                self.name
            }
        }

        impl<'ast> Bracketed<'ast> for $name<'ast> {
            fn brackets(&self) -> Node<'ast> {
                self.params
            }
        }

        impl<'ast> Braced<'ast> for $name<'ast> {
            fn braces(&self) -> Node<'ast> {
                self.body
            }
        }

        impl<'ast> Typed<'ast> for $name<'ast> {
            fn ty(&self) -> Ty {
                signature_ty(&self.params, &self.body)
            }

            fn accept<V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) -> Node<'ast> {
                visitor.$visit(self)
            }
        }

        impl<'ast> Signature<'ast> for $name<'ast> {
            fn parameters(&self) -> Node<'ast> {
                self.params
            }
        }

        impl fmt::Display for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!($keyword, " {}({}) {{{}}}"),
                    self.name, self.params, self.body
                )
            }
        }

        node_kind!('ast, $name<'ast>, $variant);
    };
}

signature_kind!(
    /// One overload of a free function: `function name(params) {body}`.
    FunctionOverload,
    FunctionOverload,
    "function",
    visit_function_overload
);

signature_kind!(
    /// One overload of a method. The receiver it belongs to is recorded by
    /// the enclosing [`Method`](crate::Method).
    MethodOverload,
    MethodOverload,
    "method",
    visit_method_overload
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AstBuilder;
    use bumpalo::Bump;

    fn sig<'a>(
        b: &AstBuilder<'a>,
        params: &[Ty],
        body: Ty,
    ) -> &'a MethodOverload<'a> {
        let s = Span::default();
        let params: Vec<Node<'a>> = params
            .iter()
            .enumerate()
            .map(|(i, ty)| Node::from(b.param(&format!("p{i}"), b.type_ref(ty.clone(), s), s)))
            .collect();
        let body = b.block(&[Node::from(b.type_ref(body, s))], s);
        b.method_overload("f", Some(b.list(&params, s).into()), Some(body.into()), s)
            .unwrap()
    }

    #[test]
    fn conjunctive_order() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let int_int = sig(&b, &[Ty::Int], Ty::Int);
        let real_real = sig(&b, &[Ty::Real], Ty::Real);
        let int_real = sig(&b, &[Ty::Int], Ty::Real);
        let real_int = sig(&b, &[Ty::Real], Ty::Int);

        assert!(int_int.lt_node(&real_real.into()));
        assert!(int_int.le_node(&int_real.into()));
        assert!(real_real.gt_node(&int_real.into()));
        // Better parameters, worse body: incomparable.
        assert_eq!(int_real.compare(&real_int.into()), None);
        assert!(!int_real.le_node(&real_int.into()));
        assert!(!int_real.ge_node(&real_int.into()));
        assert!(int_real.ne_node(&real_int.into()));
    }

    #[test]
    fn rendering() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let m = sig(&b, &[Ty::Int, Ty::Real], Ty::Real);
        assert_eq!(m.to_string(), "method f(p0:Int, p1:Real) {Real}");
        assert_eq!(m.ty().to_string(), "(Int, Real) -> Real");
        assert_eq!(m.result_ty().to_string(), "Real");
    }

    #[test]
    fn missing_children_are_malformed() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let s = Span::new(4, 1, 10);
        let body = b.block(&[], s);

        let err = MethodOverload::new("f", None, Some(body.into()), s).unwrap_err();
        assert_eq!(
            err,
            StructureError::malformed("method", "f", "parameter list", s)
        );

        let params = b.list(&[], s);
        let err = FunctionOverload::new("g", Some(params.into()), None, s).unwrap_err();
        assert_eq!(err, StructureError::malformed("function", "g", "body", s));
    }
}
