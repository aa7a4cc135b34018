//! Compiler passes.
//!
//! - [`declaration`]: Pass 1 - insert every item into the unit's [`Scope`](crate::Scope)
//! - [`resolution`]: Pass 2 - resolve every use site and rewrite it with its type

pub mod declaration;
pub mod resolution;

pub use declaration::{DeclarationOutput, DeclarationPass};
pub use resolution::{ResolutionOutput, ResolutionPass};
