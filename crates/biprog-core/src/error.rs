//! Error types for the model front end.
//!
//! ## Error Hierarchy
//!
//! ```text
//! BiprogError (top-level wrapper)
//! ├── StructureError    - a compound node built without a required child (fatal)
//! └── CompilationError  - declaration and resolution diagnostics (collected)
//! ```
//!
//! Every variant carries the offending nodes as canonical text, rendered
//! with the same `Display` implementation used for debug dumps, so a
//! diagnostic reads exactly like the source construct it points at.

use thiserror::Error;

use crate::Span;

// ============================================================================
// Structure Errors
// ============================================================================

/// Errors raised while constructing a node.
///
/// These are unrecoverable for the node being built: the node is never
/// allocated and the current pass stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A compound node was built without one of its required children.
    #[error("at {span}: malformed {construct} '{name}': missing {missing}")]
    MalformedStructure {
        /// The construct being built (e.g. "method", "dim").
        construct: &'static str,
        /// The name given to the construct.
        name: String,
        /// The missing child (e.g. "parameter list", "body").
        missing: &'static str,
        /// Where the construct starts.
        span: Span,
    },
}

impl StructureError {
    /// Create a malformed-structure error.
    pub fn malformed(
        construct: &'static str,
        name: impl Into<String>,
        missing: &'static str,
        span: Span,
    ) -> Self {
        StructureError::MalformedStructure {
            construct,
            name: name.into(),
            missing,
            span,
        }
    }

    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            StructureError::MalformedStructure { span, .. } => *span,
        }
    }
}

// ============================================================================
// Compilation Errors
// ============================================================================

/// Declaration and resolution errors.
///
/// These are collected as diagnostics; they never abort a pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilationError {
    /// A candidate with an equal parameter list is already in the overload set.
    #[error("at {span}: duplicate signature '{signature}' (previously declared at {previous_span} as '{previous}')")]
    DuplicateSignature {
        /// The overload set name.
        name: String,
        /// The rejected candidate.
        signature: String,
        /// The existing candidate it collides with.
        previous: String,
        /// Where the rejected candidate was declared.
        span: Span,
        /// Where the existing candidate was declared.
        previous_span: Span,
    },

    /// Two declarations expected to unify have different types.
    #[error("at {span}: type mismatch for '{name}': expected '{expected}', found '{found}'")]
    TypeMismatch {
        /// The declared name.
        name: String,
        /// The declaration already in scope.
        expected: String,
        /// The conflicting declaration.
        found: String,
        /// Where the conflicting declaration occurred.
        span: Span,
    },

    /// No candidate accepts the call's arguments.
    #[error(
        "at {span}: no applicable overload for '{name}({args})'{}",
        format_candidates(candidates)
    )]
    NoApplicableOverload {
        /// The overload set name.
        name: String,
        /// The rendered argument list.
        args: String,
        /// Every declared candidate.
        candidates: Vec<String>,
        /// Where the call occurred.
        span: Span,
    },

    /// Several incomparable candidates are equally specific.
    #[error("at {span}: ambiguous call to '{name}({args})'{}", format_candidates(candidates))]
    AmbiguousOverload {
        /// The overload set name.
        name: String,
        /// The rendered argument list.
        args: String,
        /// The competing minimal candidates, in declaration order.
        candidates: Vec<String>,
        /// Where the call occurred.
        span: Span,
    },

    /// A reference names nothing visible from its scope.
    #[error("at {span}: unknown name '{name}'")]
    UnknownName {
        /// The name that wasn't found.
        name: String,
        /// Where it was referenced.
        span: Span,
    },

    /// A method call names a receiver that was never declared.
    #[error("at {span}: unknown receiver '{receiver}' in call to '{name}'")]
    UnknownReceiver {
        /// The receiver name.
        receiver: String,
        /// The method being called.
        name: String,
        /// Where the call occurred.
        span: Span,
    },
}

fn format_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        return String::new();
    }
    let mut out = String::from("; candidates:");
    for candidate in candidates {
        out.push_str("\n    ");
        out.push_str(candidate);
    }
    out
}

impl CompilationError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CompilationError::DuplicateSignature { span, .. }
            | CompilationError::TypeMismatch { span, .. }
            | CompilationError::NoApplicableOverload { span, .. }
            | CompilationError::AmbiguousOverload { span, .. }
            | CompilationError::UnknownName { span, .. }
            | CompilationError::UnknownReceiver { span, .. } => *span,
        }
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// The unified error type for a compilation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BiprogError {
    /// A node could not be constructed; the pass was aborted.
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// A declaration or resolution error.
    #[error(transparent)]
    Compilation(#[from] CompilationError),
}

impl BiprogError {
    /// Check if this is a fatal structure error.
    pub fn is_structure(&self) -> bool {
        matches!(self, BiprogError::Structure(_))
    }

    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            BiprogError::Structure(e) => e.span(),
            BiprogError::Compilation(e) => e.span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_structure_display() {
        let err = StructureError::malformed("method", "f", "parameter list", Span::new(3, 1, 6));
        assert_eq!(
            err.to_string(),
            "at 3:1: malformed method 'f': missing parameter list"
        );
        assert_eq!(err.span(), Span::new(3, 1, 6));
    }

    #[test]
    fn ambiguous_overload_lists_candidates() {
        let err = CompilationError::AmbiguousOverload {
            name: "f".into(),
            args: "Int, Int".into(),
            candidates: vec![
                "function f(a:Int, b:Real) {}".into(),
                "function f(a:Real, b:Int) {}".into(),
            ],
            span: Span::new(9, 4, 1),
        };
        let text = err.to_string();
        assert!(text.starts_with("at 9:4: ambiguous call to 'f(Int, Int)'; candidates:"));
        assert!(text.contains("\n    function f(a:Int, b:Real) {}"));
        assert!(text.contains("\n    function f(a:Real, b:Int) {}"));
    }

    #[test]
    fn no_applicable_overload_without_candidates() {
        let err = CompilationError::NoApplicableOverload {
            name: "g".into(),
            args: "true".into(),
            candidates: vec![],
            span: Span::default(),
        };
        assert_eq!(err.to_string(), "at 0:0: no applicable overload for 'g(true)'");
    }

    #[test]
    fn unified_conversion() {
        let err: BiprogError =
            StructureError::malformed("dim", "n", "extent", Span::new(1, 1, 3)).into();
        assert!(err.is_structure());
        assert_eq!(err.span(), Span::new(1, 1, 3));

        let err: BiprogError = CompilationError::UnknownName {
            name: "y".into(),
            span: Span::new(7, 2, 1),
        }
        .into();
        assert!(!err.is_structure());
        assert_eq!(err.to_string(), "at 7:2: unknown name 'y'");
    }
}
