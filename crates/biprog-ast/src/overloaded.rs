//! Overload sets and overload resolution.
//!
//! An [`Overloaded`] set holds every candidate declared under one name, in
//! declaration order. Candidates are arena nodes; the set only grows.
//!
//! ## Algorithm
//!
//! 1. Filter candidates to those whose parameter list the argument node is
//!    `<=` (the arguments are assignable to the parameters)
//! 2. Keep the minimal filtered candidates: those with no other filtered
//!    candidate whose parameter list is strictly more specific
//! 3. Exactly one minimal candidate is the resolution
//! 4. An empty filter reports `NoApplicableOverload`
//! 5. Several incomparable minimal candidates report `AmbiguousOverload`
//!
//! There is no further tie-break: incomparable candidates are never ranked.

use log::trace;

use biprog_core::{CompilationError, Span};

use crate::node::Node;
use crate::overload::Signature;

/// Candidates sharing one name.
#[derive(Debug, Clone)]
pub struct Overloaded<'ast, S> {
    name: &'ast str,
    candidates: Vec<&'ast S>,
}

impl<'ast, S: Signature<'ast>> Overloaded<'ast, S> {
    pub fn new(name: &'ast str) -> Self {
        Self {
            name,
            candidates: Vec::new(),
        }
    }

    pub fn name(&self) -> &'ast str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in declaration order.
    pub fn candidates(&self) -> &[&'ast S] {
        &self.candidates
    }

    /// Add a candidate.
    ///
    /// A candidate whose parameter list equals an existing one is rejected
    /// with `DuplicateSignature` and the set is left unchanged.
    pub fn insert(&mut self, candidate: &'ast S) -> Result<(), CompilationError> {
        let params = candidate.parameters();
        if let Some(previous) = self
            .candidates
            .iter()
            .find(|existing| existing.parameters() == params)
        {
            return Err(CompilationError::DuplicateSignature {
                name: self.name.to_string(),
                signature: candidate.to_string(),
                previous: previous.to_string(),
                span: candidate.span(),
                previous_span: previous.span(),
            });
        }
        self.candidates.push(candidate);
        Ok(())
    }

    /// Candidates whose parameters accept `args`, in declaration order.
    pub fn applicable(&self, args: &Node<'ast>) -> Vec<&'ast S> {
        self.candidates
            .iter()
            .copied()
            .filter(|candidate| *args <= candidate.parameters())
            .collect()
    }

    /// Select the unique most specific candidate accepting `args`.
    ///
    /// `span` is the call site, used for diagnostics.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve(&self, args: &Node<'ast>, span: Span) -> Result<&'ast S, CompilationError> {
        let applicable = self.applicable(args);
        trace!(
            "resolving {}({}): {} of {} candidates applicable",
            self.name,
            args,
            applicable.len(),
            self.candidates.len()
        );

        if applicable.is_empty() {
            return Err(CompilationError::NoApplicableOverload {
                name: self.name.to_string(),
                args: args.to_string(),
                candidates: render(&self.candidates),
                span,
            });
        }

        let minimal = minimal(&applicable);
        match minimal.as_slice() {
            [best] => Ok(*best),
            // A finite strict order always has a minimal element; an empty
            // result can only come from an inconsistent candidate order, so
            // report every applicable candidate.
            [] => Err(self.ambiguous(args, &applicable, span)),
            _ => Err(self.ambiguous(args, &minimal, span)),
        }
    }

    fn ambiguous(&self, args: &Node<'ast>, candidates: &[&'ast S], span: Span) -> CompilationError {
        CompilationError::AmbiguousOverload {
            name: self.name.to_string(),
            args: args.to_string(),
            candidates: render(candidates),
            span,
        }
    }
}

/// Candidates with no strictly more specific competitor.
fn minimal<'ast, S: Signature<'ast>>(candidates: &[&'ast S]) -> Vec<&'ast S> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| {
            let params = candidate.parameters();
            !candidates
                .iter()
                .any(|other| other.parameters() < params)
        })
        .collect()
}

fn render<S: std::fmt::Display>(candidates: &[&S]) -> Vec<String> {
    candidates.iter().map(|c| c.to_string()).collect()
}
