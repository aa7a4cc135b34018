//! Declaration scopes.
//!
//! A [`Scope`] is the global namespace of one unit: dims and functions by
//! name, plus one [`ReceiverScope`] per receiver holding its methods. It is
//! filled by the declaration pass and only read afterwards.

use log::debug;
use rustc_hash::FxHashMap;

use biprog_ast::{Dim, Function, FunctionOverload, Method, MethodOverload};
use biprog_core::CompilationError;

/// Methods declared inside one receiver.
#[derive(Debug, Clone)]
pub struct ReceiverScope<'ast> {
    pub name: &'ast str,
    methods: FxHashMap<&'ast str, Method<'ast>>,
}

impl<'ast> ReceiverScope<'ast> {
    pub fn new(name: &'ast str) -> Self {
        Self {
            name,
            methods: FxHashMap::default(),
        }
    }

    pub fn method(&self, name: &str) -> Option<&Method<'ast>> {
        self.methods.get(name)
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn declare_method(
        &mut self,
        overload: &'ast MethodOverload<'ast>,
    ) -> Result<(), CompilationError> {
        let receiver = self.name;
        self.methods
            .entry(overload.name)
            .or_insert_with(|| Method::new(receiver, overload.name))
            .insert(overload)
    }
}

/// The global scope of a unit.
#[derive(Debug, Clone, Default)]
pub struct Scope<'ast> {
    dims: FxHashMap<&'ast str, &'ast Dim<'ast>>,
    functions: FxHashMap<&'ast str, Function<'ast>>,
    receivers: FxHashMap<&'ast str, ReceiverScope<'ast>>,
}

impl<'ast> Scope<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dim(&self, name: &str) -> Option<&'ast Dim<'ast>> {
        self.dims.get(name).copied()
    }

    pub fn function(&self, name: &str) -> Option<&Function<'ast>> {
        self.functions.get(name)
    }

    pub fn receiver(&self, name: &str) -> Option<&ReceiverScope<'ast>> {
        self.receivers.get(name)
    }

    pub fn dim_count(&self) -> usize {
        self.dims.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn receiver_count(&self) -> usize {
        self.receivers.len()
    }

    /// Declare a dim, unifying with an earlier declaration of the same name.
    ///
    /// An equal extent unifies. Otherwise the declarations conflict with
    /// `TypeMismatch`, unless `strict` is off and the extents are comparable,
    /// in which case the earlier declaration is kept. Returns the dim the
    /// name is bound to.
    pub fn declare_dim(
        &mut self,
        dim: &'ast Dim<'ast>,
        strict: bool,
    ) -> Result<&'ast Dim<'ast>, CompilationError> {
        let Some(&existing) = self.dims.get(dim.name) else {
            debug!("declared {dim}");
            self.dims.insert(dim.name, dim);
            return Ok(dim);
        };

        let unifies = if strict {
            existing.extent == dim.extent
        } else {
            existing.extent.partial_cmp(&dim.extent).is_some()
        };
        if unifies {
            debug!("unified {dim} with {existing}");
            Ok(existing)
        } else {
            Err(CompilationError::TypeMismatch {
                name: dim.name.to_string(),
                expected: existing.extent.to_string(),
                found: dim.extent.to_string(),
                span: dim.span,
            })
        }
    }

    pub fn declare_function(
        &mut self,
        overload: &'ast FunctionOverload<'ast>,
    ) -> Result<(), CompilationError> {
        self.functions
            .entry(overload.name)
            .or_insert_with(|| Function::new(overload.name))
            .insert(overload)?;
        debug!("declared {overload}");
        Ok(())
    }

    pub fn declare_method(
        &mut self,
        receiver: &'ast str,
        overload: &'ast MethodOverload<'ast>,
    ) -> Result<(), CompilationError> {
        self.receivers
            .entry(receiver)
            .or_insert_with(|| ReceiverScope::new(receiver))
            .declare_method(overload)?;
        debug!("declared {receiver}.{}", overload.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biprog_ast::{AstBuilder, Node};
    use biprog_core::{Span, Ty};
    use bumpalo::Bump;

    #[test]
    fn equal_dims_unify() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let s = Span::default();
        let first = b.dim("x", Some(b.int(3, s)), s).unwrap();
        let second = b.dim("x", Some(b.int(3, s)), s).unwrap();

        let mut scope = Scope::new();
        scope.declare_dim(first, true).unwrap();
        let bound = scope.declare_dim(second, true).unwrap();
        assert!(std::ptr::eq(bound, first));
        assert_eq!(scope.dim_count(), 1);
    }

    #[test]
    fn different_dims_mismatch() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let s = Span::new(7, 1, 12);
        let mut scope = Scope::new();
        scope.declare_dim(b.dim("x", Some(b.int(3, s)), s).unwrap(), true).unwrap();

        let err = scope
            .declare_dim(b.dim("x", Some(b.int(4, s)), s).unwrap(), true)
            .unwrap_err();
        assert_eq!(
            err,
            CompilationError::TypeMismatch {
                name: "x".into(),
                expected: "3".into(),
                found: "4".into(),
                span: s,
            }
        );
    }

    #[test]
    fn lenient_dims_accept_comparable_extents() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let s = Span::default();
        let first = b.dim("x", Some(b.int(3, s)), s).unwrap();
        let wider = b.dim("x", Some(Node::from(b.type_ref(Ty::Int, s))), s).unwrap();
        let other = b.dim("x", Some(b.boolean(true, s)), s).unwrap();

        let mut scope = Scope::new();
        scope.declare_dim(first, false).unwrap();
        let bound = scope.declare_dim(wider, false).unwrap();
        assert!(std::ptr::eq(bound, first));
        assert!(scope.declare_dim(other, false).is_err());
        assert!(scope.declare_dim(wider, true).is_err());
    }

    #[test]
    fn methods_live_in_their_receiver() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let s = Span::default();
        let m = b
            .method_overload("step", Some(b.list(&[], s).into()), Some(b.block(&[], s).into()), s)
            .unwrap();

        let mut scope = Scope::new();
        scope.declare_method("model", m).unwrap();
        assert!(scope.declare_method("model", m).is_err());
        scope.declare_method("observer", m).unwrap();

        assert_eq!(scope.receiver_count(), 2);
        let model = scope.receiver("model").unwrap();
        assert_eq!(model.method("step").unwrap().to_string(), "model.step");
        assert!(scope.function("step").is_none());
    }
}
