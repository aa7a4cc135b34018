//! biprog core crate.
//!
//! Shared building blocks for the model front end:
//!
//! - [`Span`]: source locations carried by every node and error
//! - [`Ty`]: the semantic type facet and its partial order
//! - [`error`]: structural, compilation and unified error types
//! - [`Diagnostics`]: ordered collection of non-fatal errors from one pass
//! - [`UnitOptions`]: per-unit configuration

pub mod diagnostics;
pub mod error;
pub mod options;
pub mod order;
pub mod span;
pub mod ty;

pub use diagnostics::Diagnostics;
pub use error::{BiprogError, CompilationError, StructureError};
pub use options::{UnitOptions, UnitProperty};
pub use span::Span;
pub use ty::Ty;
