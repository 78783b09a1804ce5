//! Index types for "the list the user last saw".
//!
//! User-facing text is one-based; everything internal is zero-based. The
//! conversion happens exactly once, at construction, so the rest of the
//! codebase never reasons about bases.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// A single zero-based position into the currently displayed list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index(usize);

impl Index {
    /// Build from a one-based user-facing number. Zero is rejected.
    pub fn from_one_based(n: usize) -> RosterResult<Self> {
        if n == 0 {
            return Err(RosterError::parse_index("0"));
        }
        Ok(Self(n - 1))
    }

    pub fn from_zero_based(n: usize) -> Self {
        Self(n)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

/// A resolved, deduplicated, ordered set of zero-based positions.
///
/// Built from either a single one-based number (`"3"`) or a one-based
/// inclusive range (`"2:5"`). Equality is structural: same positions, same
/// order, so `"2:2"` and `"2"` resolve to equal sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSet {
    positions: Vec<Index>,
}

impl IndexSet {
    /// Single-position set from a one-based number.
    pub fn single(index: Index) -> Self {
        Self { positions: vec![index] }
    }

    /// Inclusive one-based range `lo..=hi`, requires `lo <= hi`.
    pub fn range(lo: Index, hi: Index) -> RosterResult<Self> {
        if lo > hi {
            return Err(RosterError::parse_index(format!(
                "{}:{}",
                lo.one_based(),
                hi.one_based()
            )));
        }
        let positions = (lo.zero_based()..=hi.zero_based())
            .map(Index::from_zero_based)
            .collect();
        Ok(Self { positions })
    }

    /// Resolve a raw user token: `"n"` or `"lo:hi"`, all one-based.
    pub fn resolve(token: &str) -> RosterResult<Self> {
        let token = token.trim();
        let parse_err = || RosterError::parse_index(token);

        match token.split_once(':') {
            None => {
                let n: usize = token.parse().map_err(|_| parse_err())?;
                Ok(Self::single(Index::from_one_based(n).map_err(|_| parse_err())?))
            }
            Some((lo, hi)) => {
                let lo: usize = lo.trim().parse().map_err(|_| parse_err())?;
                let hi: usize = hi.trim().parse().map_err(|_| parse_err())?;
                let lo = Index::from_one_based(lo).map_err(|_| parse_err())?;
                let hi = Index::from_one_based(hi).map_err(|_| parse_err())?;
                Self::range(lo, hi).map_err(|_| parse_err())
            }
        }
    }

    /// Check every position against the displayed list size **before** any
    /// mutation is attempted, so a batch never partially applies because of
    /// an out-of-range member discovered mid-iteration.
    pub fn validate_against(&self, list_size: usize) -> RosterResult<()> {
        if self.positions.iter().any(|p| p.zero_based() >= list_size) {
            return Err(RosterError::InvalidStudentIndex { max_one_based: list_size });
        }
        Ok(())
    }

    /// Positions in ascending order (the batch processing order).
    pub fn iter(&self) -> impl Iterator<Item = Index> + '_ {
        self.positions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromStr for IndexSet {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_single_token_yields_one_zero_based_position() {
        let set = IndexSet::resolve("3").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Index::from_zero_based(2)]);
    }

    #[test]
    fn resolve_range_yields_inclusive_ascending_positions() {
        let set = IndexSet::resolve("2:5").unwrap();
        let zero_based: Vec<usize> = set.iter().map(Index::zero_based).collect();
        assert_eq!(zero_based, vec![1, 2, 3, 4]);
    }

    #[test]
    fn single_element_range_collapses_to_single_index() {
        assert_eq!(IndexSet::resolve("2:2").unwrap(), IndexSet::resolve("2").unwrap());
    }

    #[test]
    fn resolve_rejects_malformed_tokens() {
        for token in ["", "0", "-1", "abc", "1:x", "x:1", "0:3", "1:2:3", "1.5"] {
            let err = IndexSet::resolve(token).unwrap_err();
            assert!(
                matches!(err, RosterError::ParseIndex { .. }),
                "expected ParseIndex for {token:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn resolve_rejects_descending_range() {
        let err = IndexSet::resolve("5:2").unwrap_err();
        assert_eq!(err, RosterError::parse_index("5:2"));
    }

    #[test]
    fn validate_against_accepts_in_range_set() {
        let set = IndexSet::resolve("1:4").unwrap();
        assert!(set.validate_against(4).is_ok());
    }

    #[test]
    fn validate_against_reports_one_based_bound() {
        let set = IndexSet::resolve("1:5").unwrap();
        let err = set.validate_against(4).unwrap_err();
        assert_eq!(err, RosterError::InvalidStudentIndex { max_one_based: 4 });
    }

    #[test]
    fn index_converts_between_bases() {
        let index = Index::from_one_based(7).unwrap();
        assert_eq!(index.zero_based(), 6);
        assert_eq!(index.one_based(), 7);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every one-based token n resolves to exactly [n-1].
            #[test]
            fn single_resolution_is_one_based(n in 1usize..10_000) {
                let set = IndexSet::resolve(&n.to_string()).unwrap();
                let positions: Vec<usize> = set.iter().map(Index::zero_based).collect();
                prop_assert_eq!(positions, vec![n - 1]);
            }

            /// Property: lo:hi resolves to [lo-1 ..= hi-1] ascending, no gaps
            /// or duplicates.
            #[test]
            fn range_resolution_is_inclusive_and_ascending(lo in 1usize..500, span in 0usize..500) {
                let hi = lo + span;
                let set = IndexSet::resolve(&format!("{lo}:{hi}")).unwrap();
                let positions: Vec<usize> = set.iter().map(Index::zero_based).collect();
                let expected: Vec<usize> = (lo - 1..=hi - 1).collect();
                prop_assert_eq!(positions, expected);
            }

            /// Property: validation fails iff some position falls outside the
            /// list, and the reported bound equals the list size.
            #[test]
            fn validation_bound_matches_list_size(lo in 1usize..100, span in 0usize..100, len in 0usize..250) {
                let hi = lo + span;
                let set = IndexSet::resolve(&format!("{lo}:{hi}")).unwrap();
                match set.validate_against(len) {
                    Ok(()) => prop_assert!(hi <= len),
                    Err(RosterError::InvalidStudentIndex { max_one_based }) => {
                        prop_assert!(hi > len);
                        prop_assert_eq!(max_one_based, len);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                }
            }
        }
    }
}
