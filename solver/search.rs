//! Exhaustive search for minimum covers of a residual problem.
//!
//! Combinations of the residual subsets are tried by increasing width;
//! the first width with any covering combination is the minimum, and
//! every covering combination of that width is a solution. Worst case
//! is exponential in the number of residual subsets, which is why the
//! reductions run first.

use std::cmp::Reverse;
use std::fmt;
use std::hash::Hash;

use mincover_tracer::*;

use crate::id::SubsetId;
use crate::reduce::Snapshot;

/// Advance `mask` to its lexicographic successor, ordering `true` before
/// `false`, and return `true`; or return `false` if `mask` is the last
/// arrangement of its bits. This is Knuth's Algorithm 7.2.1.2L applied
/// to a multiset of booleans, so the number of `true` bits never changes.
pub(crate) fn next_combination(mask: &mut [bool]) -> bool {
    let n = mask.len();
    if n < 2 {
        return false;
    }

    // L2: find the last j with mask[j] > mask[j + 1].
    let Some(j) = (0..n - 1).rev().find(|&j| mask[j] && !mask[j + 1]) else {
        return false;
    };

    // L3: swap it with the last false bit; mask[j + 1] is one such.
    let Some(l) = (j + 1..n).rev().find(|&l| !mask[l]) else {
        return false;
    };
    mask.swap(j, l);

    // L4: reverse the tail.
    mask[j + 1..].reverse();
    true
}

/// Iterate over the `k`-element combinations of `0..n`, as sorted
/// index vectors in lexicographic order.
#[derive(Clone, Debug)]
pub(crate) struct Combinations {
    mask: Vec<bool>,
    done: bool,
}

impl Combinations {
    pub fn of_len(n: usize, k: usize) -> Self {
        Self {
            mask: (0..n).map(|i| i < k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let chosen = self
            .mask
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect();
        self.done = !next_combination(&mut self.mask);
        Some(chosen)
    }
}

/// Find every minimum cover of a simplified snapshot, each one listing
/// the essential subsets first and then the chosen residual subsets.
pub(crate) fn search<S, E>(snapshot: &Snapshot<S, E>, trace: Trace) -> Vec<Vec<SubsetId>>
where
    S: Clone + Eq + Hash + fmt::Debug,
    E: Clone + Eq + Hash + fmt::Debug,
{
    let store = snapshot.store();

    // Larger subsets are likelier members of small covers. The sort is
    // stable, so ties stay in insertion order.
    let mut residual = snapshot.subsets().collect::<Vec<SubsetId>>();
    residual.sort_by_key(|&s| Reverse(snapshot.degree(s)));
    let elements = snapshot.elements().collect::<Vec<_>>();
    let essential = snapshot.essential().collect::<Vec<SubsetId>>();
    debug_assert!(
        !residual.is_empty() && !elements.is_empty(),
        "search on a snapshot that simplify() solved"
    );
    trace!(
        trace,
        Search,
        "Searching {} residual subset(s) for {} element(s): {:?}",
        residual.len(),
        elements.len(),
        residual.iter().map(|&s| store.subset(s)).collect::<Vec<_>>()
    );

    for width in 1..=residual.len() {
        let covers = Combinations::of_len(residual.len(), width)
            .filter(|chosen| {
                elements
                    .iter()
                    .all(|&e| chosen.iter().any(|&i| snapshot.covers(residual[i], e)))
            })
            .map(|chosen| {
                essential
                    .iter()
                    .copied()
                    .chain(chosen.into_iter().map(|i| residual[i]))
                    .collect::<Vec<SubsetId>>()
            })
            .collect::<Vec<_>>();
        trace!(
            trace,
            Search,
            "Width {width}: {} cover(s)",
            covers.len()
        );
        if !covers.is_empty() {
            return covers;
        }
    }

    // The full residual covers every residual element.
    Vec::new()
}
