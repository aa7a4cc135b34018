//! Helpers for componentwise (product) partial orders.
//!
//! A compound value is `<=` another iff every component is `<=` its
//! counterpart. Folding the per-component [`Ordering`]s with [`conjoin`]
//! yields exactly that order: `Equal` is the identity, agreeing strict
//! components stay strict, and disagreeing or incomparable components make
//! the whole pair incomparable.

use std::cmp::Ordering;

/// Combine the orderings of two components of a product.
#[inline]
pub fn conjoin(a: Option<Ordering>, b: Option<Ordering>) -> Option<Ordering> {
    match (a?, b?) {
        (Ordering::Equal, other) | (other, Ordering::Equal) => Some(other),
        (x, y) if x == y => Some(x),
        _ => None,
    }
}

/// Fold a sequence of component orderings. An empty sequence is `Equal`.
pub fn conjoin_all<I>(components: I) -> Option<Ordering>
where
    I: IntoIterator<Item = Option<Ordering>>,
{
    let mut acc = Some(Ordering::Equal);
    for component in components {
        acc = conjoin(acc, component);
        if acc.is_none() {
            break;
        }
    }
    acc
}

/// Compare two slices elementwise; slices of different length are incomparable.
pub fn pairwise<T, F>(a: &[T], b: &[T], mut cmp: F) -> Option<Ordering>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    if a.len() != b.len() {
        return None;
    }
    conjoin_all(a.iter().zip(b).map(|(x, y)| cmp(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Ordering::*;

    #[test]
    fn equal_is_identity() {
        assert_eq!(conjoin(Some(Equal), Some(Less)), Some(Less));
        assert_eq!(conjoin(Some(Greater), Some(Equal)), Some(Greater));
        assert_eq!(conjoin(Some(Equal), Some(Equal)), Some(Equal));
    }

    #[test]
    fn disagreement_is_incomparable() {
        assert_eq!(conjoin(Some(Less), Some(Greater)), None);
        assert_eq!(conjoin(Some(Less), None), None);
    }

    #[test]
    fn fold_and_pairwise() {
        assert_eq!(conjoin_all(Vec::<Option<Ordering>>::new()), Some(Equal));
        assert_eq!(conjoin_all([Some(Less), Some(Equal), Some(Less)]), Some(Less));
        assert_eq!(pairwise(&[1, 2], &[1, 3], |a, b| a.partial_cmp(b)), Some(Less));
        assert_eq!(pairwise(&[1, 2], &[1], |a, b| a.partial_cmp(b)), None);
    }
}
