//! biprog: the typed AST and overload-resolution front end of a
//! statistical modeling language.
//!
//! The workspace is split like a compiler pipeline:
//!
//! - [`biprog_core`]: spans, the [`Ty`] lattice, errors and options
//! - [`biprog_ast`]: node kinds, their structural partial order, overload
//!   sets and the [`Visitor`] protocol
//! - [`biprog_resolve`]: scopes, the declaration and resolution passes and
//!   the type dump
//!
//! This crate adds the [`Unit`] driver and re-exports the public API.

pub mod unit;

pub use biprog_ast::{
    AstBuilder, Block, Braced, Bracketed, Dim, Expression, Function, FunctionOverload, Item, List,
    Literal, LiteralValue, Method, MethodOverload, Named, Narrow, Node, NodeKind, Overloaded,
    Param, Reference, Signature, Target, TypeRef, Typed, Visitor,
};
pub use biprog_core::{
    BiprogError, CompilationError, Diagnostics, Span, StructureError, Ty, UnitOptions,
    UnitProperty,
};
pub use biprog_resolve::{Scope, TypeDump};
pub use unit::{BuildOutput, Unit};
