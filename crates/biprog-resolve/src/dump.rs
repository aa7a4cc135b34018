//! Textual dump of resolved declarations.
//!
//! [`TypeDump`] is a side-effect [`Visitor`]: it appends to its buffer and
//! returns every node unchanged. Each declaration is written on one line
//! with its type, followed by its resolved use sites, indented:
//!
//! ```text
//! dim n[10] : Int
//! function f(x:Real) {x} : (Real) -> Real
//!     x : Real
//! ```

use std::fmt::Write;

use biprog_ast::{
    Dim, FunctionOverload, Item, MethodOverload, Node, Reference, Typed, Visitor, visitor,
};

/// Renders declarations and use sites with their types.
#[derive(Debug, Default)]
pub struct TypeDump {
    out: String,
    depth: usize,
}

impl TypeDump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dump a list of items, one declaration per line.
    pub fn items(items: &[Item<'_>]) -> String {
        let mut dump = Self::new();
        for item in items {
            dump.item(item);
        }
        dump.finish()
    }

    pub fn item(&mut self, item: &Item<'_>) {
        if let Some(receiver) = item.receiver() {
            let _ = write!(self.out, "{receiver}: ");
        }
        item.node().accept(self);
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: &dyn std::fmt::Display, ty: &dyn std::fmt::Display) {
        let _ = writeln!(self.out, "{:indent$}{text} : {ty}", "", indent = self.depth * 4);
    }

    fn nested<'ast>(&mut self, walk: impl FnOnce(&mut Self) -> Node<'ast>) -> Node<'ast> {
        self.depth += 1;
        let node = walk(self);
        self.depth -= 1;
        node
    }
}

impl<'ast> Visitor<'ast> for TypeDump {
    fn visit_reference(&mut self, reference: &'ast Reference<'ast>) -> Node<'ast> {
        // Arguments first, so a call line follows the lines of its arguments.
        visitor::walk_reference(self, reference);
        self.line(reference, &reference.ty);
        Node::Reference(reference)
    }

    fn visit_dim(&mut self, dim: &'ast Dim<'ast>) -> Node<'ast> {
        self.line(dim, &dim.ty());
        self.nested(|dump| visitor::walk_dim(dump, dim))
    }

    fn visit_function_overload(&mut self, overload: &'ast FunctionOverload<'ast>) -> Node<'ast> {
        self.line(overload, &overload.ty());
        self.nested(|dump| {
            overload.body.accept(dump);
            Node::FunctionOverload(overload)
        })
    }

    fn visit_method_overload(&mut self, overload: &'ast MethodOverload<'ast>) -> Node<'ast> {
        self.line(overload, &overload.ty());
        self.nested(|dump| {
            overload.body.accept(dump);
            Node::MethodOverload(overload)
        })
    }
}
