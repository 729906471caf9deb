//! Shared test problems, and a brute-force oracle to check answers against.
//!
//! Elements are single characters. The seven-segment problems cover the
//! minterms `0`-`f` of a 4-bit function with its prime implicants, which
//! are named by their cube notation (`1-0-` covers 8, 9, c, and d).

use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;

use gray_codes::{InclusionExclusion, SetMutation};

use crate::id::ElementId;
use crate::incidence::Incidence;
use crate::reduce::Snapshot;

/// Subsets paired with the elements they cover.
pub type Input = &'static [(&'static str, &'static str)];

/// A problem, its state after each reduction, and its minimum covers.
pub struct Fixture {
    pub name: &'static str,
    pub input: Input,

    /// Progress and residual after one domination pass.
    pub reduce_dominated: (bool, Input),

    /// Progress, residual, and essential subsets after one extraction pass.
    pub extract_essential: (bool, Input, &'static [&'static str]),

    /// Uniqueness, residual, and essential subsets at the fixed point.
    pub simplify: (bool, Input, &'static [&'static str]),

    pub minimize: &'static [&'static [&'static str]],
}

pub fn build(input: Input) -> Incidence<&'static str, char> {
    let mut incidence = Incidence::new();
    for &(subset, elements) in input {
        incidence.add(subset, elements.chars());
    }
    incidence
}

/// The residual subsets of a snapshot and their remaining elements.
pub fn state(snapshot: &Snapshot<&'static str, char>) -> BTreeMap<&'static str, BTreeSet<char>> {
    let store = snapshot.store();
    snapshot
        .subsets()
        .map(|s| {
            let elements = store
                .element_ids()
                .filter(|&e| snapshot.covers(s, e))
                .map(|e| *store.element(e));
            (*store.subset(s), elements.collect())
        })
        .collect()
}

pub fn expected(input: Input) -> BTreeMap<&'static str, BTreeSet<char>> {
    input
        .iter()
        .map(|&(subset, elements)| (subset, elements.chars().collect()))
        .collect()
}

pub fn essential(snapshot: &Snapshot<&'static str, char>) -> BTreeSet<&'static str> {
    snapshot
        .essential()
        .map(|s| *snapshot.store().subset(s))
        .collect()
}

pub fn names(names: &[&'static str]) -> BTreeSet<&'static str> {
    names.iter().copied().collect()
}

/// Compare covers as sets of sets, after checking that neither the
/// covers nor their members repeat.
pub fn cover_set<S: Clone + Ord>(covers: &[Vec<S>]) -> BTreeSet<BTreeSet<S>> {
    let set = covers
        .iter()
        .map(|cover| {
            let members = cover.iter().cloned().collect::<BTreeSet<S>>();
            assert_eq!(members.len(), cover.len(), "repeated subset in a cover");
            members
        })
        .collect::<BTreeSet<_>>();
    assert_eq!(set.len(), covers.len(), "repeated cover");
    set
}

/// All minimum covers, found by trying every combination of subsets.
pub fn brute_force<S, E>(store: &Incidence<S, E>) -> BTreeSet<BTreeSet<S>>
where
    S: Clone + Eq + Hash + Ord,
    E: Clone + Eq + Hash,
{
    let subsets = store.subset_ids().collect::<Vec<_>>();
    let universe = store.element_ids().collect::<BTreeSet<ElementId>>();
    let mut best = usize::MAX;
    let mut found = BTreeSet::new();
    let mut consider = |chosen: &BTreeSet<usize>| {
        let covered = chosen
            .iter()
            .flat_map(|&i| store.coverage_table()[subsets[i]].iter().copied())
            .collect::<BTreeSet<ElementId>>();
        if covered != universe || chosen.len() > best {
            return;
        }
        if chosen.len() < best {
            best = chosen.len();
            found.clear();
        }
        found.insert(
            chosen
                .iter()
                .map(|&i| store.subset(subsets[i]).clone())
                .collect::<BTreeSet<S>>(),
        );
    };

    let mut chosen = BTreeSet::new();
    consider(&chosen);
    if !subsets.is_empty() {
        for mutation in InclusionExclusion::of_len(subsets.len()) {
            match mutation {
                SetMutation::Insert(i) => chosen.insert(i),
                SetMutation::Remove(i) => chosen.remove(&i),
            };
            consider(&chosen);
        }
    }
    found
}

pub static FIXTURES: &[Fixture] = &[
    Fixture {
        name: "empty set",
        input: &[],
        reduce_dominated: (false, &[]),
        extract_essential: (false, &[], &[]),
        simplify: (true, &[], &[]),
        minimize: &[&[]],
    },
    Fixture {
        name: "tautology",
        input: &[("T", "t")],
        reduce_dominated: (false, &[("T", "t")]),
        extract_essential: (true, &[], &["T"]),
        simplify: (true, &[], &["T"]),
        minimize: &[&["T"]],
    },
    Fixture {
        name: "disjoint A and B",
        input: &[("A", "x"), ("B", "y")],
        reduce_dominated: (false, &[("A", "x"), ("B", "y")]),
        extract_essential: (true, &[], &["A", "B"]),
        simplify: (true, &[], &["A", "B"]),
        minimize: &[&["A", "B"]],
    },
    Fixture {
        name: "1 subset contains 2 elements",
        input: &[("A", "xy")],
        reduce_dominated: (false, &[("A", "xy")]),
        extract_essential: (true, &[], &["A"]),
        simplify: (true, &[], &["A"]),
        minimize: &[&["A"]],
    },
    Fixture {
        name: "2 subsets contain 1 element",
        input: &[("A", "x"), ("B", "x")],
        reduce_dominated: (false, &[("A", "x"), ("B", "x")]),
        extract_essential: (false, &[("A", "x"), ("B", "x")], &[]),
        simplify: (false, &[("A", "x"), ("B", "x")], &[]),
        minimize: &[&["A"], &["B"]],
    },
    Fixture {
        name: "B contains A",
        input: &[("A", "x"), ("B", "xyz")],
        reduce_dominated: (true, &[("B", "xyz")]),
        extract_essential: (true, &[], &["B"]),
        simplify: (true, &[], &["B"]),
        minimize: &[&["B"]],
    },
    Fixture {
        name: "seven-segment A",
        input: &[
            ("0-1-", "2367"),
            ("01-1", "57"),
            ("-0-0", "028a"),
            ("--10", "26ae"),
            ("-11-", "67ef"),
            ("100-", "89"),
            ("1--0", "8ace"),
            ("11-0", "ce"),
        ],
        reduce_dominated: (
            true,
            &[
                ("0-1-", "2367"),
                ("01-1", "57"),
                ("-0-0", "028a"),
                ("--10", "26ae"),
                ("-11-", "67ef"),
                ("100-", "89"),
                ("1--0", "8ace"),
            ],
        ),
        extract_essential: (
            true,
            &[("1--0", "c"), ("11-0", "c")],
            &["0-1-", "01-1", "-0-0", "-11-", "100-"],
        ),
        simplify: (true, &[], &["0-1-", "01-1", "-0-0", "-11-", "100-", "1--0"]),
        minimize: &[&["0-1-", "01-1", "-0-0", "-11-", "100-", "1--0"]],
    },
    Fixture {
        name: "seven-segment B",
        input: &[
            ("00--", "0123"),
            ("0-00", "04"),
            ("0-11", "37"),
            ("-00-", "0189"),
            ("-0-0", "028a"),
            ("1-01", "9d"),
        ],
        reduce_dominated: (
            false,
            &[
                ("00--", "0123"),
                ("0-00", "04"),
                ("0-11", "37"),
                ("-00-", "0189"),
                ("-0-0", "028a"),
                ("1-01", "9d"),
            ],
        ),
        extract_essential: (
            true,
            &[("00--", "1"), ("-00-", "1")],
            &["0-00", "0-11", "-0-0", "1-01"],
        ),
        simplify: (
            false,
            &[("00--", "1"), ("-00-", "1")],
            &["0-00", "0-11", "-0-0", "1-01"],
        ),
        minimize: &[
            &["0-00", "0-11", "-0-0", "1-01", "00--"],
            &["0-00", "0-11", "-0-0", "1-01", "-00-"],
        ],
    },
    Fixture {
        name: "seven-segment C",
        input: &[
            ("0-0-", "0145"),
            ("0--1", "1357"),
            ("01--", "4567"),
            ("-00-", "0189"),
            ("-0-1", "139b"),
            ("--01", "159d"),
            ("10--", "89ab"),
        ],
        reduce_dominated: (
            false,
            &[
                ("0-0-", "0145"),
                ("0--1", "1357"),
                ("01--", "4567"),
                ("-00-", "0189"),
                ("-0-1", "139b"),
                ("--01", "159d"),
                ("10--", "89ab"),
            ],
        ),
        extract_essential: (
            true,
            &[("0-0-", "0"), ("0--1", "3"), ("-00-", "0"), ("-0-1", "3")],
            &["01--", "--01", "10--"],
        ),
        simplify: (
            false,
            &[("0-0-", "0"), ("0--1", "3"), ("-00-", "0"), ("-0-1", "3")],
            &["01--", "--01", "10--"],
        ),
        minimize: &[
            &["01--", "--01", "10--", "0-0-", "0--1"],
            &["01--", "--01", "10--", "0-0-", "-0-1"],
            &["01--", "--01", "10--", "-00-", "0--1"],
            &["01--", "--01", "10--", "-00-", "-0-1"],
        ],
    },
    Fixture {
        name: "seven-segment D",
        input: &[
            ("001-", "23"),
            ("00-0", "02"),
            ("0-10", "26"),
            ("-000", "08"),
            ("-011", "3b"),
            ("-101", "5d"),
            ("-110", "6e"),
            ("10-1", "9b"),
            ("1-0-", "89cd"),
            ("1-01", "9d"),
        ],
        reduce_dominated: (
            true,
            &[
                ("001-", "23"),
                ("00-0", "02"),
                ("0-10", "26"),
                ("-000", "08"),
                ("-011", "3b"),
                ("-101", "5d"),
                ("-110", "6e"),
                ("10-1", "9b"),
                ("1-0-", "89cd"),
            ],
        ),
        extract_essential: (
            true,
            &[
                ("001-", "23"),
                ("00-0", "02"),
                ("0-10", "2"),
                ("-000", "0"),
                ("-011", "3b"),
                ("10-1", "b"),
            ],
            &["-101", "-110", "1-0-"],
        ),
        simplify: (true, &[], &["-101", "-110", "00-0", "-011", "1-0-"]),
        minimize: &[&["-101", "-110", "00-0", "-011", "1-0-"]],
    },
    Fixture {
        name: "seven-segment G",
        input: &[
            ("010-", "45"),
            ("01-0", "46"),
            ("--10", "26ae"),
            ("-01-", "23ab"),
            ("-101", "5d"),
            ("10--", "89ab"),
            ("1--1", "9bdf"),
            ("1-1-", "abef"),
        ],
        reduce_dominated: (
            false,
            &[
                ("010-", "45"),
                ("01-0", "46"),
                ("--10", "26ae"),
                ("-01-", "23ab"),
                ("-101", "5d"),
                ("10--", "89ab"),
                ("1--1", "9bdf"),
                ("1-1-", "abef"),
            ],
        ),
        extract_essential: (
            true,
            &[
                ("010-", "45"),
                ("01-0", "46"),
                ("--10", "6e"),
                ("-101", "5d"),
                ("1--1", "df"),
                ("1-1-", "ef"),
            ],
            &["-01-", "10--"],
        ),
        simplify: (
            false,
            &[
                ("010-", "45"),
                ("01-0", "46"),
                ("--10", "6e"),
                ("-101", "5d"),
                ("1--1", "df"),
                ("1-1-", "ef"),
            ],
            &["-01-", "10--"],
        ),
        minimize: &[
            &["-01-", "10--", "010-", "--10", "1--1"],
            &["-01-", "10--", "01-0", "-101", "1-1-"],
        ],
    },
];
