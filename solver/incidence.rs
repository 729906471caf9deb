//! The bipartite incidence relation between subsets and the elements
//! they cover, as supplied by the caller. Values are interned in the
//! order they are first seen, and all relations are kept by id in both
//! directions: `s` covers `e` if and only if `e` is covered by `s`.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crate::id::*;

/// Append-only record of which subsets cover which elements.
#[derive(Clone, Debug)]
pub struct Incidence<S, E> {
    /// Interned subsets; ids are assigned by their position here.
    subsets: IdVec<S, Subset>,

    /// Interned elements; ids are assigned by their position here.
    elements: IdVec<E, Element>,

    subset_ids: HashMap<S, SubsetId>,
    element_ids: HashMap<E, ElementId>,

    /// Which elements each subset covers, by id.
    coverage: IdVec<BTreeSet<ElementId>, Subset>,

    /// Which subsets cover each element, by id.
    coverers: IdVec<BTreeSet<SubsetId>, Element>,
}

impl<S, E> Default for Incidence<S, E> {
    fn default() -> Self {
        Self {
            subsets: IdVec::new(),
            elements: IdVec::new(),
            subset_ids: HashMap::new(),
            element_ids: HashMap::new(),
            coverage: IdVec::new(),
            coverers: IdVec::new(),
        }
    }
}

impl<S, E> Incidence<S, E>
where
    S: Clone + Eq + Hash,
    E: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `subset` covers every one of `elements`. Repeated calls
    /// accumulate, and a subset with no elements is never recorded.
    pub fn add(&mut self, subset: S, elements: impl IntoIterator<Item = E>) {
        let mut elements = elements.into_iter().peekable();
        if elements.peek().is_none() {
            return;
        }
        let s = self.intern_subset(subset);
        for element in elements {
            let e = self.intern_element(element);
            self.coverage[s].insert(e);
            self.coverers[e].insert(s);
        }
    }

    fn intern_subset(&mut self, subset: S) -> SubsetId {
        if let Some(&id) = self.subset_ids.get(&subset) {
            return id;
        }
        let id = self.subsets.push(subset.clone());
        self.coverage.push(BTreeSet::new());
        self.subset_ids.insert(subset, id);
        id
    }

    fn intern_element(&mut self, element: E) -> ElementId {
        if let Some(&id) = self.element_ids.get(&element) {
            return id;
        }
        let id = self.elements.push(element.clone());
        self.coverers.push(BTreeSet::new());
        self.element_ids.insert(element, id);
        id
    }

    /// Does `subset` cover `element`?
    pub fn covers(&self, subset: &S, element: &E) -> bool {
        match (self.subset_ids.get(subset), self.element_ids.get(element)) {
            (Some(&s), Some(e)) => self.coverage[s].contains(e),
            _ => false,
        }
    }

    /// The elements covered by `subset`, in the order they were first
    /// added to any subset.
    pub fn coverage(&self, subset: &S) -> impl Iterator<Item = &E> {
        self.subset_ids
            .get(subset)
            .into_iter()
            .flat_map(move |&s| self.coverage[s].iter().map(move |&e| &self.elements[e]))
    }
}

impl<S, E> Incidence<S, E> {
    /// Number of recorded subsets.
    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    pub fn subsets(&self) -> impl Iterator<Item = &S> {
        self.subsets.iter()
    }

    pub fn elements(&self) -> impl Iterator<Item = &E> {
        self.elements.iter()
    }

    pub(crate) fn subset(&self, id: SubsetId) -> &S {
        &self.subsets[id]
    }

    pub(crate) fn element(&self, id: ElementId) -> &E {
        &self.elements[id]
    }

    pub(crate) fn subset_ids(&self) -> impl Iterator<Item = SubsetId> {
        self.subsets.ids()
    }

    pub(crate) fn element_ids(&self) -> impl Iterator<Item = ElementId> {
        self.elements.ids()
    }

    pub(crate) fn coverage_table(&self) -> &IdVec<BTreeSet<ElementId>, Subset> {
        &self.coverage
    }

    pub(crate) fn coverer_table(&self) -> &IdVec<BTreeSet<SubsetId>, Element> {
        &self.coverers
    }
}
