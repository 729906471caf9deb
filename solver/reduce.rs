//! Reduction of a set cover problem by two mutually triggering rules.
//!
//! A subset is *dominated* if another subset covers a proper superset
//! of its elements; any cover that uses it may use the larger subset
//! instead, so it is never uniquely required and may be dropped.
//! An element covered by exactly one subset makes that subset
//! *essential*: it belongs to every cover, so it is moved to the
//! result and the elements it covers are dropped from the problem.
//! Dropping elements shrinks subsets and may expose new dominations;
//! dropping dominated subsets may expose new essential subsets.
//! Alternating the two reaches a fixed point, the *residual* problem.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

use mincover_tracer::*;

use crate::id::*;
use crate::incidence::Incidence;

/// A private, mutable copy of an incidence relation. Subsets and
/// elements are removed from it as reduction proceeds; the store it
/// was taken from is never touched.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot<'a, S, E> {
    store: &'a Incidence<S, E>,

    /// Remaining elements of each subset.
    coverage: IdVec<BTreeSet<ElementId>, Subset>,

    /// Remaining subsets covering each element.
    coverers: IdVec<BTreeSet<SubsetId>, Element>,

    /// Subsets not yet found to be dominated or essential.
    subsets: BTreeSet<SubsetId>,

    /// Elements not yet covered by an essential subset.
    elements: BTreeSet<ElementId>,

    /// Subsets that must belong to every minimum cover.
    essential: BTreeSet<SubsetId>,

    trace: Trace,
}

impl<'a, S, E> Snapshot<'a, S, E>
where
    S: Clone + Eq + Hash + fmt::Debug,
    E: Clone + Eq + Hash + fmt::Debug,
{
    pub fn new(store: &'a Incidence<S, E>, trace: Trace) -> Self {
        Self {
            store,
            coverage: store.coverage_table().clone(),
            coverers: store.coverer_table().clone(),
            subsets: store.subset_ids().collect(),
            elements: store.element_ids().collect(),
            essential: BTreeSet::new(),
            trace,
        }
    }

    pub fn store(&self) -> &'a Incidence<S, E> {
        self.store
    }

    /// The remaining subsets, in insertion order.
    pub fn subsets(&self) -> impl Iterator<Item = SubsetId> + '_ {
        self.subsets.iter().copied()
    }

    /// The remaining (uncovered) elements, in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().copied()
    }

    pub fn essential(&self) -> impl Iterator<Item = SubsetId> + '_ {
        self.essential.iter().copied()
    }

    /// How many remaining elements `subset` covers.
    pub fn degree(&self, subset: SubsetId) -> usize {
        self.coverage[subset].len()
    }

    pub fn covers(&self, subset: SubsetId, element: ElementId) -> bool {
        self.coverage[subset].contains(&element)
    }

    /// Does `d` dominate `s`, i.e., cover a strict superset of its elements?
    /// Subsets with equal coverage do not dominate each other.
    pub fn dominates(&self, d: SubsetId, s: SubsetId) -> bool {
        let (d, s) = (&self.coverage[d], &self.coverage[s]);
        d.len() > s.len() && s.is_subset(d)
    }

    /// Remove all dominated subsets, and report whether there were any.
    /// Removing a subset leaves the coverage of the others unchanged,
    /// so one pass over all pairs suffices.
    pub fn reduce_dominated(&mut self) -> bool {
        let mut reduced = false;
        let subsets = self.subsets.iter().copied().collect::<Vec<SubsetId>>();
        for &d in subsets.iter() {
            if !self.subsets.contains(&d) {
                continue;
            }
            for &s in subsets.iter() {
                if d == s || !self.subsets.contains(&s) || !self.dominates(d, s) {
                    continue;
                }
                trace!(
                    self.trace,
                    Reduce,
                    "{:?} dominates {:?}",
                    self.store.subset(d),
                    self.store.subset(s)
                );
                self.remove_subset(s);
                reduced = true;
            }
        }
        reduced
    }

    /// Move every subset that is the sole cover of some element into the
    /// essential set, remove the elements it covers, and report whether
    /// any were found. Afterwards every remaining element is covered by
    /// at least two subsets.
    pub fn extract_essential(&mut self) -> bool {
        let mut extracted = false;
        let elements = self.elements.iter().copied().collect::<Vec<ElementId>>();
        for e in elements {
            if self.coverers[e].len() != 1 {
                continue;
            }
            let Some(&s) = self.coverers[e].first() else {
                continue;
            };
            trace!(
                self.trace,
                Reduce,
                "{:?} is essential: sole cover of {:?}",
                self.store.subset(s),
                self.store.element(e)
            );
            let covered = self.coverage[s].iter().copied().collect::<Vec<ElementId>>();
            for element in covered {
                self.remove_element(element);
            }
            self.remove_subset(s);
            self.essential.insert(s);
            extracted = true;
        }
        extracted
    }

    /// Alternate both reductions until neither applies, and report
    /// whether the essential subsets alone cover every element (and
    /// are therefore the unique minimum cover).
    pub fn simplify(&mut self) -> bool {
        self.reduce_dominated();

        // Extraction never leaves an element with a single cover, so if
        // nothing was then dominated, another extraction would find nothing.
        while self.extract_essential() && self.reduce_dominated() {}

        trace!(
            self.trace,
            Reduce,
            "Reduced to {} essential, {} residual subset(s) over {} element(s)",
            self.essential.len(),
            self.subsets.len(),
            self.elements.len()
        );
        self.elements.is_empty()
    }

    fn remove_subset(&mut self, s: SubsetId) {
        for e in std::mem::take(&mut self.coverage[s]) {
            self.coverers[e].remove(&s);
        }
        self.subsets.remove(&s);
    }

    /// Remove a covered element. A subset left with nothing to cover
    /// cannot belong to any minimum cover, so it goes too.
    fn remove_element(&mut self, e: ElementId) {
        for s in std::mem::take(&mut self.coverers[e]) {
            self.coverage[s].remove(&e);
            if self.coverage[s].is_empty() {
                self.subsets.remove(&s);
            }
        }
        self.elements.remove(&e);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn snapshot_leaves_store_alone() {
        let store = build(&[("A", "x"), ("B", "xyz")]);
        let mut snapshot = Snapshot::new(&store, Trace::none());
        assert!(snapshot.simplify());
        assert_eq!(snapshot.subsets().count(), 0);
        assert_eq!(snapshot.elements().count(), 0);
        assert_eq!(store.len(), 2);
        assert!(store.covers(&"A", &'x'));
        assert_eq!(Snapshot::new(&store, Trace::none()).subsets().count(), 2);
    }

    #[test]
    fn dominates() {
        let cases: &[(Input, &[(&str, &str)])] = &[
            (&[("T", "t")], &[]),
            (&[("A", "x"), ("B", "y")], &[]),
            (&[("A", "x"), ("B", "x")], &[]),
            (&[("A", "x"), ("B", "xyz")], &[("B", "A")]),
            (
                &[
                    ("A", "2"),
                    ("B", "26"),
                    ("C", "26"),
                    ("D", "124"),
                    ("E", "357"),
                    ("F", "01247"),
                ],
                &[("B", "A"), ("C", "A"), ("D", "A"), ("F", "A"), ("F", "D")],
            ),
        ];
        for (input, dominations) in cases {
            let store = build(input);
            let snapshot = Snapshot::new(&store, Trace::none());
            for a in snapshot.subsets() {
                for b in snapshot.subsets() {
                    let (a_name, b_name) = (*store.subset(a), *store.subset(b));
                    let want = dominations.contains(&(a_name, b_name));
                    assert_eq!(
                        snapshot.dominates(a, b),
                        want,
                        "{a_name} dominates {b_name} in {input:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn reduce_dominated() {
        for fixture in FIXTURES {
            let store = build(fixture.input);
            let mut snapshot = Snapshot::new(&store, Trace::none());
            let (reduced, residual) = fixture.reduce_dominated;
            assert_eq!(snapshot.reduce_dominated(), reduced, "{}", fixture.name);
            assert_eq!(state(&snapshot), expected(residual), "{}", fixture.name);
            assert_eq!(essential(&snapshot), names(&[]), "{}", fixture.name);
        }
    }

    #[test]
    fn extract_essential() {
        for fixture in FIXTURES {
            let store = build(fixture.input);
            let mut snapshot = Snapshot::new(&store, Trace::none());
            let (extracted, residual, ess) = fixture.extract_essential;
            assert_eq!(snapshot.extract_essential(), extracted, "{}", fixture.name);
            assert_eq!(state(&snapshot), expected(residual), "{}", fixture.name);
            assert_eq!(essential(&snapshot), names(ess), "{}", fixture.name);
            for e in snapshot.elements() {
                assert!(
                    snapshot.coverers[e].len() >= 2,
                    "{}: {:?}",
                    fixture.name,
                    store.element(e)
                );
            }
        }
    }

    #[test]
    fn simplify() {
        for fixture in FIXTURES {
            let store = build(fixture.input);
            let mut snapshot = Snapshot::new(&store, Trace::none());
            let (unique, residual, ess) = fixture.simplify;
            assert_eq!(snapshot.simplify(), unique, "{}", fixture.name);
            assert_eq!(state(&snapshot), expected(residual), "{}", fixture.name);
            assert_eq!(essential(&snapshot), names(ess), "{}", fixture.name);
        }
    }

    #[test]
    fn simplify_is_a_fixed_point() {
        for fixture in FIXTURES {
            let store = build(fixture.input);
            let mut snapshot = Snapshot::new(&store, Trace::none());
            snapshot.simplify();
            let before = state(&snapshot);
            assert!(!snapshot.reduce_dominated(), "{}", fixture.name);
            assert!(!snapshot.extract_essential(), "{}", fixture.name);
            assert_eq!(state(&snapshot), before, "{}", fixture.name);
        }
    }

    #[test]
    fn essential_cascade() {
        // Covering u and a shrinks T and V into U, which is then
        // the sole cover of b.
        let store = build(&[("S", "ua"), ("T", "ab"), ("U", "bc"), ("V", "ca")]);
        let mut snapshot = Snapshot::new(&store, Trace::none());
        assert!(!snapshot.reduce_dominated());
        assert!(snapshot.extract_essential());
        assert_eq!(essential(&snapshot), names(&["S"]));
        assert!(snapshot.reduce_dominated());
        assert_eq!(state(&snapshot), expected(&[("U", "bc")]));
        assert!(snapshot.extract_essential());
        assert_eq!(essential(&snapshot), names(&["S", "U"]));
        assert_eq!(snapshot.elements().count(), 0);
    }
}
