//! Name resolution for the biprog front end.
//!
//! Two passes run over the items of a unit:
//!
//! 1. [`DeclarationPass`] inserts every item into a [`Scope`], collecting
//!    duplicate signatures and conflicting dims.
//! 2. [`ResolutionPass`] rewrites every use site with its type and target,
//!    resolving calls through the overload sets of the scope.
//!
//! [`TypeDump`] renders the result for debugging.

pub mod dump;
pub mod passes;
pub mod scope;

pub use dump::TypeDump;
pub use passes::{DeclarationOutput, DeclarationPass, ResolutionOutput, ResolutionPass};
pub use scope::{ReceiverScope, Scope};
