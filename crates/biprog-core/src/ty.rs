//! Semantic types carried by typed nodes.
//!
//! [`Ty`] is a partial order expressing assignability: `a <= b` means a
//! value of type `a` may be used where `b` is expected. The order is not
//! total, so comparisons go through [`PartialOrd::partial_cmp`] and
//! incomparable pairs answer `false` to every relational operator.

use std::cmp::Ordering;
use std::fmt;

use crate::order::{conjoin, pairwise};

/// A semantic type.
#[derive(Debug, Clone)]
pub enum Ty {
    /// Placeholder carried by a node whose type is not known yet.
    ///
    /// Like a floating-point NaN, it is comparable to nothing, itself
    /// included; resolution replaces the node before it takes part in
    /// overload selection.
    Unknown,
    /// The type of an empty body.
    Void,
    /// Boolean.
    Bool,
    /// Integer; assignable to `Real`.
    Int,
    /// Real number.
    Real,
    /// Ordered product, e.g. a parameter or argument list.
    Tuple(Vec<Ty>),
    /// A signature: parameter product and result type.
    Function { params: Box<Ty>, result: Box<Ty> },
}

impl Ty {
    /// Look up a builtin type by its source spelling.
    pub fn builtin(name: &str) -> Option<Ty> {
        match name {
            "Void" | "void" => Some(Ty::Void),
            "Bool" | "bool" => Some(Ty::Bool),
            "Int" | "int" => Some(Ty::Int),
            "Real" | "real" => Some(Ty::Real),
            _ => None,
        }
    }

    /// Whether this is the unresolved placeholder, or contains one.
    pub fn is_unknown(&self) -> bool {
        match self {
            Ty::Unknown => true,
            Ty::Tuple(items) => items.iter().any(Ty::is_unknown),
            Ty::Function { params, result } => params.is_unknown() || result.is_unknown(),
            _ => false,
        }
    }

    fn scalar_rank(&self) -> Option<u8> {
        match self {
            Ty::Int => Some(0),
            Ty::Real => Some(1),
            _ => None,
        }
    }
}

impl PartialEq for Ty {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Ty {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Ty::Unknown, _) | (_, Ty::Unknown) => None,
            (Ty::Void, Ty::Void) | (Ty::Bool, Ty::Bool) => Some(Ordering::Equal),
            (Ty::Tuple(a), Ty::Tuple(b)) => pairwise(a, b, |x, y| x.partial_cmp(y)),
            (
                Ty::Function { params: pa, result: ra },
                Ty::Function { params: pb, result: rb },
            ) => conjoin(pa.partial_cmp(pb), ra.partial_cmp(rb)),
            _ => match (self.scalar_rank(), other.scalar_rank()) {
                (Some(a), Some(b)) => Some(a.cmp(&b)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Unknown => write!(f, "?"),
            Ty::Void => write!(f, "Void"),
            Ty::Bool => write!(f, "Bool"),
            Ty::Int => write!(f, "Int"),
            Ty::Real => write!(f, "Real"),
            Ty::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Ty::Function { params, result } => write!(f, "{params} -> {result}"),
        }
    }
}
