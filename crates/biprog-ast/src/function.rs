//! Named overload sets: free functions and receiver-scoped methods.

use std::fmt;

use biprog_core::{CompilationError, Span};

use crate::node::Node;
use crate::overload::{FunctionOverload, MethodOverload};
use crate::overloaded::Overloaded;

/// A free function: a name and every overload declared under it.
#[derive(Debug, Clone)]
pub struct Function<'ast> {
    pub overloads: Overloaded<'ast, FunctionOverload<'ast>>,
}

impl<'ast> Function<'ast> {
    pub fn new(name: &'ast str) -> Self {
        Self {
            overloads: Overloaded::new(name),
        }
    }

    pub fn name(&self) -> &'ast str {
        self.overloads.name()
    }

    pub fn insert(
        &mut self,
        overload: &'ast FunctionOverload<'ast>,
    ) -> Result<(), CompilationError> {
        self.overloads.insert(overload)
    }

    pub fn resolve(
        &self,
        args: &Node<'ast>,
        span: Span,
    ) -> Result<&'ast FunctionOverload<'ast>, CompilationError> {
        self.overloads.resolve(args, span)
    }
}

/// A method: overloads scoped to one receiver.
///
/// Callers find the receiver's scope first; resolution inside it is the
/// same as for a [`Function`].
#[derive(Debug, Clone)]
pub struct Method<'ast> {
    pub receiver: &'ast str,
    pub overloads: Overloaded<'ast, MethodOverload<'ast>>,
}

impl<'ast> Method<'ast> {
    pub fn new(receiver: &'ast str, name: &'ast str) -> Self {
        Self {
            receiver,
            overloads: Overloaded::new(name),
        }
    }

    pub fn name(&self) -> &'ast str {
        self.overloads.name()
    }

    pub fn insert(&mut self, overload: &'ast MethodOverload<'ast>) -> Result<(), CompilationError> {
        self.overloads.insert(overload)
    }

    pub fn resolve(
        &self,
        args: &Node<'ast>,
        span: Span,
    ) -> Result<&'ast MethodOverload<'ast>, CompilationError> {
        self.overloads.resolve(args, span).map_err(|err| match err {
            // Report the qualified name at method call sites.
            CompilationError::NoApplicableOverload {
                args,
                candidates,
                span,
                ..
            } => CompilationError::NoApplicableOverload {
                name: self.to_string(),
                args,
                candidates,
                span,
            },
            CompilationError::AmbiguousOverload {
                args,
                candidates,
                span,
                ..
            } => CompilationError::AmbiguousOverload {
                name: self.to_string(),
                args,
                candidates,
                span,
            },
            other => other,
        })
    }
}

impl fmt::Display for Function<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Method<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.receiver, self.name())
    }
}
