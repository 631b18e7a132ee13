//! Proposer -> acceptor assignment.
//!
//! [`Matching`] is produced by [`crate::Engine::solve`] or built by callers (e.g. to check
//! a hand-written assignment with [`crate::Engine::is_stable`]). Equality ignores pair order.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Assignment of proposers to acceptors. Pairs keep insertion order for display.
#[derive(Clone, Debug)]
pub struct Matching<P, A> {
    pairs: Vec<(P, A)>,
    index: HashMap<P, usize>,
}

impl<P: Clone + Eq + Hash, A> Matching<P, A> {
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Assigns `acceptor` to `proposer`, returning the previous partner if any.
    pub fn insert(&mut self, proposer: P, acceptor: A) -> Option<A> {
        match self.index.get(&proposer) {
            Some(&i) => Some(std::mem::replace(&mut self.pairs[i].1, acceptor)),
            None => {
                self.index.insert(proposer.clone(), self.pairs.len());
                self.pairs.push((proposer, acceptor));
                None
            }
        }
    }

    /// Partner of `proposer`.
    pub fn get(&self, proposer: &P) -> Option<&A> {
        self.index.get(proposer).map(|&i| &self.pairs[i].1)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// (proposer, acceptor) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&P, &A)> {
        self.pairs.iter().map(|(p, a)| (p, a))
    }

    /// Acceptor -> proposer view. Later pairs win if an acceptor is assigned twice.
    pub fn inverse(&self) -> HashMap<&A, &P>
    where
        A: Eq + Hash,
    {
        self.pairs.iter().map(|(p, a)| (a, p)).collect()
    }

    /// Same pairs with two proposers' partners exchanged. No-op if either is unmatched.
    pub fn swapped(&self, first: &P, second: &P) -> Self
    where
        A: Clone,
    {
        let mut out = self.clone();
        if let (Some(&i), Some(&j)) = (self.index.get(first), self.index.get(second)) {
            let a = out.pairs[i].1.clone();
            out.pairs[i].1 = std::mem::replace(&mut out.pairs[j].1, a);
        }
        out
    }
}

impl<P: Clone + Eq + Hash, A> Default for Matching<P, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone + Eq + Hash, A> FromIterator<(P, A)> for Matching<P, A> {
    fn from_iter<I: IntoIterator<Item = (P, A)>>(iter: I) -> Self {
        let mut m = Self::new();
        for (p, a) in iter {
            m.insert(p, a);
        }
        m
    }
}

impl<P: Clone + Eq + Hash, A: PartialEq> PartialEq for Matching<P, A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(p, a)| other.get(p) == Some(a))
    }
}

impl<P: Clone + Eq + Hash, A: Eq> Eq for Matching<P, A> {}

impl<P: fmt::Display, A: fmt::Display> fmt::Display for Matching<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (p, a)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", p, a)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_partner() {
        let mut m = Matching::new();
        assert_eq!(m.insert("A", "a"), None);
        assert_eq!(m.insert("B", "b"), None);
        assert_eq!(m.insert("A", "c"), Some("a"));
        assert_eq!(m.len(), 2);
        assert_eq!(m.get(&"A"), Some(&"c"));
        assert_eq!(m.to_string(), "{A: c, B: b}");
    }

    #[test]
    fn equality_ignores_order() {
        let m1: Matching<_, _> = vec![(1, 'x'), (2, 'y')].into_iter().collect();
        let m2: Matching<_, _> = vec![(2, 'y'), (1, 'x')].into_iter().collect();
        let m3: Matching<_, _> = vec![(2, 'x'), (1, 'y')].into_iter().collect();
        assert_eq!(m1, m2);
        assert_ne!(m1, m3);
    }

    #[test]
    fn swapped_exchanges_partners() {
        let m: Matching<_, _> = vec![(1, 'x'), (2, 'y'), (3, 'z')].into_iter().collect();
        let s = m.swapped(&1, &3);
        assert_eq!(s.get(&1), Some(&'z'));
        assert_eq!(s.get(&3), Some(&'x'));
        assert_eq!(s.get(&2), Some(&'y'));
        assert_eq!(m.swapped(&1, &9), m);
    }

    #[test]
    fn inverse_maps_back() {
        let m: Matching<_, _> = vec![("A", "d"), ("B", "a")].into_iter().collect();
        let inv = m.inverse();
        assert_eq!(inv[&"d"], &"A");
        assert_eq!(inv[&"a"], &"B");
    }
}
