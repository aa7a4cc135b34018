//! Collected diagnostics for one compilation attempt.
//!
//! Declaration and resolution errors do not abort traversal. Passes push
//! them here so the driver can report every problem from one pass at once.

use std::fmt;

use crate::CompilationError;

/// An ordered collection of non-fatal compilation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<CompilationError>,
    /// Errors dropped because the collection was capped.
    dropped: usize,
    /// Maximum number of errors kept (`0` = unlimited).
    limit: usize,
}

impl Diagnostics {
    /// Create an empty, uncapped collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection that keeps at most `limit` errors (`0` = unlimited).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Add an error. Returns `false` if it was dropped because of the cap.
    pub fn push(&mut self, error: CompilationError) -> bool {
        if self.limit != 0 && self.errors.len() >= self.limit {
            self.dropped += 1;
            return false;
        }
        self.errors.push(error);
        true
    }

    /// Add every error from a pass.
    pub fn extend<I: IntoIterator<Item = CompilationError>>(&mut self, errors: I) {
        for error in errors {
            self.push(error);
        }
    }

    /// Check if there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors kept.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Number of errors dropped by the cap.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Iterate over the kept errors in the order they were reported.
    pub fn iter(&self) -> impl Iterator<Item = &CompilationError> {
        self.errors.iter()
    }

    /// Convert to a Vec of errors.
    pub fn into_vec(self) -> Vec<CompilationError> {
        self.errors
    }

    /// `Ok(())` if empty, otherwise the first error.
    pub fn into_result(self) -> Result<(), CompilationError> {
        match self.errors.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = CompilationError;
    type IntoIter = std::vec::IntoIter<CompilationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a CompilationError;
    type IntoIter = std::slice::Iter<'a, CompilationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        if self.dropped > 0 {
            if !self.errors.is_empty() {
                writeln!(f)?;
            }
            write!(f, "... and {} more", self.dropped)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
