//! Minimum set cover: given subsets of a universe of elements, find
//! every combination of the fewest subsets whose union is the universe.
//!
//! The problem is NP-hard, but most instances that come up in practice
//! (e.g., choosing prime implicants in two-level logic minimization)
//! shrink a great deal under two reductions: dominated subsets are
//! dropped, and essential subsets (the only covers of some element) are
//! taken. Whatever remains is solved by exhaustive search over
//! combinations of increasing width, so the answers are always exact,
//! and ties are all reported.
//!
//! ```
//! use mincover_solver::Cover;
//!
//! let mut cover = Cover::new();
//! cover.add("A", ['x']);
//! cover.add("B", ['x', 'y', 'z']);
//! assert_eq!(cover.minimize(), [["B"]]);
//! ```

mod id;
mod incidence;
mod reduce;
mod search;

#[cfg(test)]
mod fixtures;

use std::fmt;
use std::hash::Hash;

pub use incidence::Incidence;
pub use mincover_tracer::Trace;

use id::SubsetId;
use reduce::Snapshot;
use search::search;

use mincover_tracer::trace;

/// Build a [`Cover`] from `subset => [elements]` pairs.
///
/// ```
/// use mincover_solver::cover;
///
/// let cover = cover! {
///     "A" => ['x'],
///     "B" => ['x'],
/// };
/// assert_eq!(cover.minimize().len(), 2);
/// ```
#[macro_export]
macro_rules! cover {
    ($($subset:expr => [$($element:expr),* $(,)?]),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut cover = $crate::Cover::new();
        $(cover.add($subset, [$($element),*]);)*
        cover
    }};
}

/// Subsets and the elements they cover, to be minimized.
#[derive(Clone, Debug)]
pub struct Cover<S, E> {
    incidence: Incidence<S, E>,
    trace: Trace,
}

/// How far reduction alone gets: the subsets in every minimum cover,
/// and the subsets left to choose among.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reduction<S> {
    pub essential: Vec<S>,
    pub residual: Vec<S>,

    /// Do the essential subsets cover everything by themselves?
    pub unique: bool,
}

impl<S, E> Default for Cover<S, E> {
    fn default() -> Self {
        Self {
            incidence: Incidence::default(),
            trace: Trace::none(),
        }
    }
}

impl<S, E> Cover<S, E>
where
    S: Clone + Eq + Hash + fmt::Debug,
    E: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace(trace: Trace) -> Self {
        Self {
            incidence: Incidence::new(),
            trace,
        }
    }

    /// Record that `subset` contains `elements`.
    /// If `elements` is empty, this is a no-op.
    pub fn add(&mut self, subset: S, elements: impl IntoIterator<Item = E>) {
        self.incidence.add(subset, elements)
    }

    pub fn incidence(&self) -> &Incidence<S, E> {
        &self.incidence
    }

    /// Number of recorded subsets.
    pub fn len(&self) -> usize {
        self.incidence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidence.is_empty()
    }

    /// Reduce a private copy of the problem to its fixed point.
    pub fn reduce(&self) -> Reduction<S> {
        let mut snapshot = Snapshot::new(&self.incidence, self.trace);
        let unique = snapshot.simplify();
        Reduction {
            essential: self.values(snapshot.essential()),
            residual: self.values(snapshot.subsets()),
            unique,
        }
    }

    /// Return all minimum-length combinations of subsets that cover
    /// every element. With no subsets, the only cover is empty.
    /// In general, the cost grows exponentially with the size of
    /// the residual problem left after reduction.
    pub fn minimize(&self) -> Vec<Vec<S>> {
        let mut snapshot = Snapshot::new(&self.incidence, self.trace);
        if snapshot.simplify() {
            // The essential subsets are the unique minimum cover.
            return vec![self.values(snapshot.essential())];
        }
        let covers = search(&snapshot, self.trace);
        trace!(
            self.trace,
            Search,
            "Found {} minimum cover(s) of width {}",
            covers.len(),
            covers.first().map_or(0, Vec::len)
        );
        covers
            .into_iter()
            .map(|cover| self.values(cover))
            .collect()
    }

    fn values(&self, ids: impl IntoIterator<Item = SubsetId>) -> Vec<S> {
        ids.into_iter()
            .map(|s| self.incidence.subset(s).clone())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::fixtures::*;

    fn from_input(input: Input) -> Cover<&'static str, char> {
        let mut cover = Cover::new();
        for &(subset, elements) in input {
            cover.add(subset, elements.chars());
        }
        cover
    }

    fn want(covers: &[&[&'static str]]) -> BTreeSet<BTreeSet<&'static str>> {
        cover_set(&covers.iter().map(|c| c.to_vec()).collect::<Vec<_>>())
    }

    /// Every cover covers every element, and no cover is bigger than another.
    fn check_sound(cover: &Cover<u8, u8>, covers: &[Vec<u8>]) {
        for c in covers {
            for e in cover.incidence().elements() {
                assert!(
                    c.iter().any(|s| cover.incidence().covers(s, e)),
                    "{c:?} misses {e}"
                );
            }
            assert_eq!(c.len(), covers[0].len());
        }
    }

    /// Every cover found is a minimum cover, and there is at least one.
    /// Domination may drop a subset from a tied minimum cover, so not
    /// every minimum cover need be found.
    fn check_minimum<S, E>(cover: &Cover<S, E>, covers: &[Vec<S>])
    where
        S: Clone + Eq + Hash + Ord + fmt::Debug,
        E: Clone + Eq + Hash + fmt::Debug,
    {
        let all = brute_force(cover.incidence());
        let found = cover_set(covers);
        assert!(!found.is_empty());
        let width = all.iter().map(BTreeSet::len).min();
        for c in found.iter() {
            assert!(all.contains(c), "{c:?} is not a minimum cover of {all:?}");
            assert_eq!(Some(c.len()), width);
        }
    }

    #[test]
    fn minimize() {
        for fixture in FIXTURES {
            let cover = from_input(fixture.input);
            let got = cover.minimize();
            assert_eq!(cover_set(&got), want(fixture.minimize), "{}", fixture.name);
        }
    }

    #[test]
    fn minimize_finds_only_minimum_covers() {
        for fixture in FIXTURES {
            let cover = from_input(fixture.input);
            check_minimum(&cover, &cover.minimize());
        }
    }

    #[test]
    fn dominated_ties_are_dropped() {
        let cover = cover! {
            "a" => [1, 2],
            "b" => [1, 2, 3],
            "c" => [3, 4],
        };
        assert_eq!(cover.minimize(), [["b", "c"]]);
        assert_eq!(
            brute_force(cover.incidence()),
            want(&[&["a", "c"], &["b", "c"]])
        );

        // 11-0 is as good as 1--0 for covering c, but 1--0 dominates it.
        let cover = from_input(FIXTURES[6].input);
        assert_eq!(cover.minimize().len(), 1);
        assert_eq!(brute_force(cover.incidence()).len(), 2);
    }

    #[test]
    fn empty() {
        let cover = Cover::<&str, char>::new();
        assert!(cover.is_empty());
        assert_eq!(cover.minimize(), [Vec::<&str>::new()]);

        let mut cover = Cover::<&str, char>::new();
        cover.add("Odd perfect numbers", []);
        assert!(cover.is_empty());
        assert_eq!(cover.minimize(), [Vec::<&str>::new()]);
    }

    #[test]
    fn tautology() {
        let cover = cover! { true => [true] };
        assert_eq!(cover.minimize(), [[true]]);
    }

    #[test]
    fn domination() {
        let cover = cover! {
            "A" => ['x'],
            "B" => ['x', 'y', 'z'],
        };
        assert_eq!(cover.minimize(), [["B"]]);
        assert_eq!(
            cover.reduce(),
            Reduction {
                essential: vec!["B"],
                residual: vec![],
                unique: true,
            }
        );
    }

    #[test]
    fn tie() {
        let cover = cover! {
            "A" => ['x'],
            "B" => ['x'],
        };
        assert_eq!(cover_set(&cover.minimize()), want(&[&["A"], &["B"]]));
        assert_eq!(
            cover.reduce(),
            Reduction {
                essential: vec![],
                residual: vec!["A", "B"],
                unique: false,
            }
        );
    }

    #[test]
    fn minimize_is_repeatable() {
        let cover = from_input(FIXTURES[FIXTURES.len() - 1].input);
        let first = cover.minimize();
        assert_eq!(cover.minimize(), first);
        assert_eq!(cover.len(), 8);
    }

    #[test]
    fn add_after_minimize() {
        let mut cover = cover! {
            "A" => ['x'],
            "B" => ['x'],
        };
        assert_eq!(cover.minimize().len(), 2);
        cover.add("B", ['y']);
        assert_eq!(cover.minimize(), [["B"]]);
    }

    #[test]
    fn reduction_of_seven_segment_g() {
        let reduction = from_input(FIXTURES[FIXTURES.len() - 1].input).reduce();
        assert!(!reduction.unique);
        assert_eq!(reduction.essential, ["-01-", "10--"]);
        assert_eq!(
            reduction.residual,
            ["010-", "01-0", "--10", "-101", "1--1", "1-1-"]
        );
    }

    #[test]
    fn concurrent_minimize() {
        let cover = from_input(FIXTURES[FIXTURES.len() - 1].input);
        let want = cover_set(&cover.minimize());
        std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| cover_set(&cover.minimize())))
                .collect::<Vec<_>>();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), want);
            }
        });
    }

    #[test]
    fn random_problems_have_minimum_covers() {
        let mut rng = StdRng::seed_from_u64(0x5e7c0fe5);
        for _ in 0..200 {
            let subsets = rng.gen_range(1..=9u8);
            let elements = rng.gen_range(1..=8u8);
            let mut cover = Cover::<u8, u8>::new();
            for s in 0..subsets {
                cover.add(s, (0..elements).filter(|_| rng.gen_bool(0.35)));
            }
            let covers = cover.minimize();
            check_sound(&cover, &covers);
            check_minimum(&cover, &covers);
        }
    }
}
