//! A [newtype](https://rust-unofficial.github.io/patterns/patterns/behavioural/newtype.html)
//! wrapper around unsigned integers used as dense ids for interned subsets
//! and elements. Subsets and elements may share a Rust type (say, both
//! `&str`), but their ids live in different spaces and must never mix.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Marker for subset ids.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Subset {}

/// Marker for element ids.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Element {}

pub(crate) type SubsetId = Id<Subset>;
pub(crate) type ElementId = Id<Element>;

/// An unsigned integer id with type-level information about its space.
pub(crate) struct Id<T>(usize, PhantomData<T>);

impl<T> Id<T> {
    pub fn new(id: usize) -> Self {
        Self(id, PhantomData)
    }
}

// Derives would demand the same traits of the marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vector indexed by typed id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct IdVec<T, I>(Vec<T>, PhantomData<I>);

impl<T, I> IdVec<T, I> {
    pub fn new() -> Self {
        Self(Vec::new(), PhantomData)
    }

    pub fn ids(&self) -> impl Iterator<Item = Id<I>> {
        (0..self.0.len()).map(Id::new)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append `value` and return its id.
    pub fn push(&mut self, value: T) -> Id<I> {
        self.0.push(value);
        Id::new(self.0.len() - 1)
    }
}

impl<T, I> Default for IdVec<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I> Index<Id<I>> for IdVec<T, I> {
    type Output = T;

    fn index(&self, index: Id<I>) -> &Self::Output {
        self.0.index(index.0)
    }
}

impl<T, I> IndexMut<Id<I>> for IdVec<T, I> {
    fn index_mut(&mut self, index: Id<I>) -> &mut Self::Output {
        self.0.index_mut(index.0)
    }
}
