//! Typed abstract syntax for the biprog model language.
//!
//! Nodes are allocated in a [`bumpalo::Bump`] arena by [`AstBuilder`] and
//! referenced as `&'ast` thereafter, so a resolved node can be shared by
//! every use site without reference counting. Nodes are never mutated once
//! built; passes that need a different node allocate a new one.
//!
//! ## Modules
//!
//! - [`node`]: the [`Node`] tagged reference, [`NodeKind`] and checked narrowing
//! - [`expression`]: capability traits ([`Expression`], [`Named`], [`Bracketed`],
//!   [`Braced`], [`Typed`])
//! - [`leaf`], [`compound`], [`dim`], [`overload`]: the concrete node kinds
//! - [`overloaded`]: overload sets and resolution
//! - [`function`]: [`Function`] and [`Method`]
//! - [`builder`]: arena constructors used by the parser
//! - [`visitor`]: double-dispatch traversal
//!
//! # Example
//!
//! ```
//! use biprog_ast::{AstBuilder, Expression};
//! use biprog_core::{Span, Ty};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let int = b.type_ref(Ty::Int, Span::default());
//! let real = b.type_ref(Ty::Real, Span::default());
//! assert!(int.le_node(&real.into()));
//! assert!(!real.le_node(&int.into()));
//! ```

pub mod builder;
pub mod compound;
pub mod decl;
pub mod dim;
pub mod expression;
pub mod function;
pub mod leaf;
pub mod node;
pub mod overload;
pub mod overloaded;
pub mod visitor;

pub use builder::AstBuilder;
pub use compound::{Block, List};
pub use decl::Item;
pub use dim::Dim;
pub use expression::{Braced, Bracketed, Expression, Named, Typed};
pub use function::{Function, Method};
pub use leaf::{Literal, LiteralValue, Param, Reference, Target, TypeRef};
pub use node::{Narrow, Node, NodeKind};
pub use overload::{FunctionOverload, MethodOverload, Signature};
pub use overloaded::Overloaded;
pub use visitor::Visitor;
