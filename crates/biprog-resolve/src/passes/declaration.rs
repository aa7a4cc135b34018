//! Declaration Pass (Pass 1) - build the unit's scope.
//!
//! Every item is inserted in source order. Conflicts (`DuplicateSignature`,
//! `TypeMismatch`) are collected and the pass carries on with the next item,
//! so one build reports all of them.

use log::debug;

use biprog_ast::Item;
use biprog_core::{CompilationError, UnitOptions};

use crate::scope::Scope;

/// Output of the declaration pass.
#[derive(Debug, Default)]
pub struct DeclarationOutput {
    /// Dims bound to a new name.
    pub dims_declared: usize,
    /// Function overloads added.
    pub functions_declared: usize,
    /// Method overloads added.
    pub methods_declared: usize,
    /// Collected errors.
    pub errors: Vec<CompilationError>,
}

/// Pass 1: populate a [`Scope`].
pub struct DeclarationPass<'a, 'ast> {
    scope: &'a mut Scope<'ast>,
    strict_dims: bool,
    output: DeclarationOutput,
}

impl<'a, 'ast> DeclarationPass<'a, 'ast> {
    pub fn new(scope: &'a mut Scope<'ast>, options: &UnitOptions) -> Self {
        Self {
            scope,
            strict_dims: options.strict_dim_unify(),
            output: DeclarationOutput::default(),
        }
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(mut self, items: &[Item<'ast>]) -> DeclarationOutput {
        for item in items {
            self.declare(*item);
        }
        debug!(
            "declaration pass: {} dims, {} functions, {} methods, {} errors",
            self.output.dims_declared,
            self.output.functions_declared,
            self.output.methods_declared,
            self.output.errors.len()
        );
        self.output
    }

    fn declare(&mut self, item: Item<'ast>) {
        let result = match item {
            Item::Dim(dim) => {
                let before = self.scope.dim_count();
                self.scope.declare_dim(dim, self.strict_dims).map(|_| {
                    if self.scope.dim_count() > before {
                        self.output.dims_declared += 1;
                    }
                })
            }
            Item::Function(overload) => self
                .scope
                .declare_function(overload)
                .map(|()| self.output.functions_declared += 1),
            Item::Method { receiver, overload } => self
                .scope
                .declare_method(receiver, overload)
                .map(|()| self.output.methods_declared += 1),
        };
        if let Err(err) = result {
            self.output.errors.push(err);
        }
    }
}
