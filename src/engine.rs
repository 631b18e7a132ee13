//! Stable matching engine: deferred acceptance over two cross-validated preference tables.
//!
//! Build with [`Engine::new`], then call [`Engine::solve`]. [`Engine::is_stable`] and
//! [`Engine::compute_score`] work on any complete matching, not only on solve results.

use std::collections::{HashSet, VecDeque};

use crate::error::ValidationError;
use crate::matching::Matching;
use crate::table::PreferenceTable;
use crate::types::{Agent, Rank, Score};
use log::{debug, info, trace};

/// Matching engine for one problem instance.
///
/// Holds the two tables plus dense index tables derived from them at construction.
/// Nothing changes after construction, so every query is a pure function of its input.
#[derive(Clone, Debug)]
pub struct Engine<P, A> {
    proposers: PreferenceTable<P, A>,
    acceptors: PreferenceTable<A, P>,
    /// proposals[p] = proposer p's preference list as acceptor indices.
    proposals: Vec<Vec<usize>>,
    /// acceptor_ranks[a][p] = rank acceptor a gives proposer p.
    acceptor_ranks: Vec<Vec<Rank>>,
}

impl<P: Agent, A: Agent> Engine<P, A> {
    /// Cross-validates the tables and precomputes rank lookups.
    ///
    /// Returns `Err(SymbolSetMismatch)` unless both tables have the same size, every proposer
    /// ranks exactly the acceptor keys, and every acceptor ranks exactly the proposer keys.
    pub fn new(
        proposers: PreferenceTable<P, A>,
        acceptors: PreferenceTable<A, P>,
    ) -> Result<Self, ValidationError> {
        let n = proposers.len();
        if acceptors.len() != n {
            return Err(ValidationError::SymbolSetMismatch(format!(
                "{} proposers but {} acceptors",
                n,
                acceptors.len()
            )));
        }
        // Lists have n distinct entries, so finding every entry among the other side's n keys
        // means each list ranges over exactly those keys.
        let proposals = proposers
            .iter()
            .map(|(p, prefs)| {
                prefs
                    .iter()
                    .map(|a| {
                        acceptors.position(a).ok_or_else(|| {
                            ValidationError::SymbolSetMismatch(format!("{} ranks unknown acceptor {}", p, a))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let acceptor_ranks = acceptors
            .agents()
            .iter()
            .zip(acceptors.rank_index())
            .map(|(a, ranks)| {
                proposers
                    .agents()
                    .iter()
                    .map(|p| {
                        ranks.get(p).copied().ok_or_else(|| {
                            ValidationError::SymbolSetMismatch(format!("{} does not rank proposer {}", a, p))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        proposers.rank_index();

        info!("engine constructed size={}", n);
        Ok(Self {
            proposers,
            acceptors,
            proposals,
            acceptor_ranks,
        })
    }

    /// Number of agents per side.
    pub fn size(&self) -> usize {
        self.proposers.len()
    }

    pub fn proposers(&self) -> &PreferenceTable<P, A> {
        &self.proposers
    }

    pub fn acceptors(&self) -> &PreferenceTable<A, P> {
        &self.acceptors
    }

    /// Proposer-optimal stable matching by deferred acceptance.
    ///
    /// Free proposers wait in a FIFO queue, seeded in proposer-table order. Each proposes to
    /// the next acceptor on its list; the acceptor keeps whichever proposer it ranks strictly
    /// better and the loser rejoins the queue. Deterministic: same engine, same result.
    pub fn solve(&self) -> Matching<P, A> {
        let n = self.size();
        let no_partner = self.acceptors.no_partner_rank();
        let mut cursor = vec![0usize; n];
        let mut partner: Vec<Option<usize>> = vec![None; n];
        let mut held_by: Vec<Option<usize>> = vec![None; n];
        let mut free: VecDeque<usize> = (0..n).collect();
        let mut proposals_made = 0usize;

        while let Some(p) = free.pop_front() {
            // A proposer is rejected at most n - 1 times, so the cursor stays in bounds.
            let a = self.proposals[p][cursor[p]];
            proposals_made += 1;
            let ranks = &self.acceptor_ranks[a];
            let current = held_by[a].map_or(no_partner, |q| ranks[q]);
            if ranks[p] < current {
                trace!("acceptor {} accepts proposer {}", a, p);
                if let Some(q) = held_by[a].replace(p) {
                    partner[q] = None;
                    cursor[q] += 1;
                    free.push_back(q);
                }
                partner[p] = Some(a);
            } else {
                trace!("acceptor {} rejects proposer {}", a, p);
                cursor[p] += 1;
                free.push_back(p);
            }
        }

        let matching: Matching<P, A> = partner
            .iter()
            .enumerate()
            .filter_map(|(p, a)| {
                a.map(|a| {
                    (
                        self.proposers.agents()[p].clone(),
                        self.acceptors.agents()[a].clone(),
                    )
                })
            })
            .collect();
        debug!("solve finished size={} proposals={}", n, proposals_made);
        matching
    }

    /// True when the matching has no blocking pair.
    ///
    /// # Panics
    ///
    /// If `matching` is not complete (see [`Engine::is_complete`]).
    pub fn is_stable(&self, matching: &Matching<P, A>) -> bool {
        self.blocking_pairs(matching).next().is_none()
    }

    /// Every (proposer, acceptor) pair that would both rather be together than with their
    /// partners in `matching`.
    ///
    /// Scans each acceptor's list down to its own partner; every proposer ranked above that
    /// partner who also prefers this acceptor to its own partner forms a blocking pair.
    ///
    /// # Panics
    ///
    /// If `matching` is not complete (see [`Engine::is_complete`]).
    pub fn blocking_pairs<'a>(&'a self, matching: &'a Matching<P, A>) -> impl Iterator<Item = (&'a P, &'a A)> + 'a {
        self.assert_complete(matching);
        self.acceptors.iter().flat_map(move |(a, prefs)| {
            prefs
                .iter()
                .take_while(move |p| self.partner(matching, p) != a)
                .filter(move |p| {
                    let current = self.partner(matching, p);
                    self.proposer_rank(p, a) < self.proposer_rank(p, current)
                })
                .map(move |p| (p, a))
        })
    }

    /// Sum of ranks each side achieves under `matching`.
    ///
    /// # Panics
    ///
    /// If `matching` is not complete (see [`Engine::is_complete`]).
    pub fn compute_score(&self, matching: &Matching<P, A>) -> Score {
        self.assert_complete(matching);
        self.proposers
            .agents()
            .iter()
            .fold(Score::default(), |mut score, p| {
                let a = self.partner(matching, p);
                score.proposer += self.proposer_rank(p, a);
                score.acceptor += self.acceptor_rank(a, p);
                score
            })
    }

    /// True when `matching` pairs every proposer with a distinct acceptor of this instance.
    pub fn is_complete(&self, matching: &Matching<P, A>) -> bool {
        if matching.len() != self.size() {
            return false;
        }
        let mut used = HashSet::with_capacity(self.size());
        self.proposers.agents().iter().all(|p| match matching.get(p) {
            Some(a) => self.acceptors.contains(a) && used.insert(a),
            None => false,
        })
    }

    fn assert_complete(&self, matching: &Matching<P, A>) {
        if !self.is_complete(matching) {
            panic!(
                "matching is not a complete pairing of this instance's {} proposers and acceptors: {}",
                self.size(),
                matching
            );
        }
    }

    fn partner<'a>(&self, matching: &'a Matching<P, A>, proposer: &P) -> &'a A {
        match matching.get(proposer) {
            Some(a) => a,
            None => panic!("matching has no partner for proposer {}", proposer),
        }
    }

    fn proposer_rank(&self, proposer: &P, acceptor: &A) -> Rank {
        match self.proposers.rank_of(proposer, Some(acceptor)) {
            Some(r) => r,
            None => panic!("{} is not an agent pair of this instance", format_pair(proposer, acceptor)),
        }
    }

    fn acceptor_rank(&self, acceptor: &A, proposer: &P) -> Rank {
        match self.acceptors.rank_of(acceptor, Some(proposer)) {
            Some(r) => r,
            None => panic!("{} is not an agent pair of this instance", format_pair(proposer, acceptor)),
        }
    }
}

fn format_pair(p: &impl std::fmt::Display, a: &impl std::fmt::Display) -> String {
    format!("({}, {})", p, a)
}
