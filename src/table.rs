//! Preference tables: validated, read-only mapping from agent to a strict ranking of the other side.
//!
//! A table is built once with [`PreferenceTable::new`] and never mutated; there are no
//! mutating methods. The rank index (agent -> opposite agent -> rank) is computed on first
//! use and cached for the table's lifetime.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use crate::error::ValidationError;
use crate::types::{Agent, Rank};

/// Ranking of every opposite-side agent by one agent.
pub type RankMap<V> = HashMap<V, Rank>;

/// Validated preference table. `K` identifies this side, `V` the opposite side.
///
/// Invariants (checked by [`PreferenceTable::new`]):
/// - at least one agent; every preference list has exactly `len()` entries;
/// - no identifier repeats within a list, and no key repeats;
/// - all lists range over the same symbol set;
/// - all keys share one [`crate::SymbolKind`], and so do all entries.
#[derive(Clone, Debug)]
pub struct PreferenceTable<K, V> {
    agents: Vec<K>,
    preferences: Vec<Vec<V>>,
    positions: HashMap<K, usize>,
    ranks: OnceLock<Vec<RankMap<V>>>,
}

impl<K: Agent, V: Agent> PreferenceTable<K, V> {
    /// Validates and builds a table. Key order is preserved for iteration and rendering.
    ///
    /// Checks run in order: identifier kinds, dimensions, duplicates, symbol sets. The first
    /// violated check decides the error.
    pub fn new(entries: impl IntoIterator<Item = (K, Vec<V>)>) -> Result<Self, ValidationError> {
        let (agents, preferences): (Vec<K>, Vec<Vec<V>>) = entries.into_iter().unzip();
        check_kinds(&agents, &preferences)?;
        check_dimensions(&agents, &preferences)?;
        let positions = check_duplicates(&agents, &preferences)?;
        check_symbols(&agents, &preferences)?;
        Ok(Self {
            agents,
            preferences,
            positions,
            ranks: OnceLock::new(),
        })
    }

    /// Number of agents on this side (also the length of every preference list).
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Always `false` for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents in insertion order.
    pub fn agents(&self) -> &[K] {
        &self.agents
    }

    pub fn contains(&self, agent: &K) -> bool {
        self.positions.contains_key(agent)
    }

    /// Index of `agent` in insertion order.
    pub fn position(&self, agent: &K) -> Option<usize> {
        self.positions.get(agent).copied()
    }

    /// Preference list of `agent`, most preferred first.
    pub fn preferences(&self, agent: &K) -> Option<&[V]> {
        self.position(agent).map(|i| self.preferences[i].as_slice())
    }

    /// (agent, preference list) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.agents
            .iter()
            .zip(self.preferences.iter().map(Vec::as_slice))
    }

    /// The opposite-side symbol set every preference list ranges over.
    pub fn symbols(&self) -> HashSet<&V> {
        self.preferences[0].iter().collect()
    }

    /// Rank index for all agents, in insertion order. Built on first call, then cached.
    pub fn rank_index(&self) -> &[RankMap<V>] {
        self.ranks.get_or_init(|| {
            self.preferences
                .iter()
                .map(|prefs| {
                    prefs
                        .iter()
                        .enumerate()
                        .map(|(rank, v)| (v.clone(), rank))
                        .collect()
                })
                .collect()
        })
    }

    /// Ranking of every opposite agent by `agent`.
    pub fn rank(&self, agent: &K) -> Option<&RankMap<V>> {
        self.position(agent).map(|i| &self.rank_index()[i])
    }

    /// Rank `agent` gives to `other`. `None` for `other` means "no partner" and yields
    /// [`PreferenceTable::no_partner_rank`], which is worse than every real rank.
    pub fn rank_of(&self, agent: &K, other: Option<&V>) -> Option<Rank> {
        let ranks = self.rank(agent)?;
        match other {
            Some(v) => ranks.get(v).copied(),
            None => Some(self.no_partner_rank()),
        }
    }

    /// Sentinel rank for an unmatched agent: the table size.
    pub fn no_partner_rank(&self) -> Rank {
        self.len()
    }
}

impl<K: Agent, V: Agent> TryFrom<Vec<(K, Vec<V>)>> for PreferenceTable<K, V> {
    type Error = ValidationError;

    fn try_from(entries: Vec<(K, Vec<V>)>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for PreferenceTable<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.agents == other.agents && self.preferences == other.preferences
    }
}

impl<K: Eq, V: Eq> Eq for PreferenceTable<K, V> {}

fn check_kinds<K: Agent, V: Agent>(agents: &[K], preferences: &[Vec<V>]) -> Result<(), ValidationError> {
    if let Some(first) = agents.first() {
        let expected = first.kind();
        if let Some(bad) = agents.iter().find(|k| k.kind() != expected) {
            return Err(ValidationError::TypeMismatch {
                agent: bad.to_string(),
                value: bad.to_string(),
                expected,
                found: bad.kind(),
            });
        }
    }
    let Some(expected) = preferences.iter().flatten().next().map(Agent::kind) else {
        return Ok(());
    };
    for (agent, prefs) in agents.iter().zip(preferences) {
        if let Some(bad) = prefs.iter().find(|v| v.kind() != expected) {
            return Err(ValidationError::TypeMismatch {
                agent: agent.to_string(),
                value: bad.to_string(),
                expected,
                found: bad.kind(),
            });
        }
    }
    Ok(())
}

fn check_dimensions<K: Agent, V>(agents: &[K], preferences: &[Vec<V>]) -> Result<(), ValidationError> {
    let n = agents.len();
    if n == 0 {
        return Err(ValidationError::DimensionMismatch {
            agent: "<empty table>".into(),
            expected: 1,
            found: 0,
        });
    }
    for (agent, prefs) in agents.iter().zip(preferences) {
        if prefs.len() != n {
            return Err(ValidationError::DimensionMismatch {
                agent: agent.to_string(),
                expected: n,
                found: prefs.len(),
            });
        }
    }
    Ok(())
}

fn check_duplicates<K: Agent, V: Agent>(
    agents: &[K],
    preferences: &[Vec<V>],
) -> Result<HashMap<K, usize>, ValidationError> {
    let mut positions = HashMap::with_capacity(agents.len());
    for (i, agent) in agents.iter().enumerate() {
        if positions.insert(agent.clone(), i).is_some() {
            return Err(ValidationError::DuplicateEntry {
                agent: "<table keys>".into(),
                value: agent.to_string(),
            });
        }
    }
    for (agent, prefs) in agents.iter().zip(preferences) {
        let mut seen = HashSet::with_capacity(prefs.len());
        if let Some(dup) = prefs.iter().find(|v| !seen.insert(*v)) {
            return Err(ValidationError::DuplicateEntry {
                agent: agent.to_string(),
                value: dup.to_string(),
            });
        }
    }
    Ok(positions)
}

fn check_symbols<K: Agent, V: Agent>(agents: &[K], preferences: &[Vec<V>]) -> Result<(), ValidationError> {
    let reference: HashSet<&V> = preferences[0].iter().collect();
    for (agent, prefs) in agents.iter().zip(preferences).skip(1) {
        if let Some(stray) = prefs.iter().find(|v| !reference.contains(v)) {
            return Err(ValidationError::SymbolSetMismatch(format!(
                "{} ranks {}, which {} does not",
                agent, stray, agents[0]
            )));
        }
    }
    Ok(())
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st, ...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

impl<K: Agent, V: Agent> fmt::Display for PreferenceTable<K, V> {
    /// Grid with one row per agent and one ordinal column per preference position.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = std::iter::once(String::new())
            .chain((1..=self.len()).map(ordinal))
            .collect();
        let rows: Vec<Vec<String>> = self
            .iter()
            .map(|(k, prefs)| {
                std::iter::once(k.to_string())
                    .chain(prefs.iter().map(ToString::to_string))
                    .collect()
            })
            .collect();
        let widths: Vec<usize> = (0..header.len())
            .map(|c| {
                rows.iter()
                    .map(|r| r[c].chars().count())
                    .chain(std::iter::once(header[c].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write_rule(f, &widths, '-')?;
        write_row(f, &widths, &header)?;
        write_rule(f, &widths, '=')?;
        for row in &rows {
            write_row(f, &widths, row)?;
            write_rule(f, &widths, '-')?;
        }
        Ok(())
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize], fill: char) -> fmt::Result {
    for w in widths {
        write!(f, "+{}", fill.to_string().repeat(w + 2))?;
    }
    writeln!(f, "+")
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    for (cell, w) in cells.iter().zip(widths) {
        write!(f, "| {:<width$} ", cell, width = w)?;
    }
    writeln!(f, "|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Symbol, SymbolKind};

    fn men() -> PreferenceTable<&'static str, &'static str> {
        PreferenceTable::new(vec![
            ("A", vec!["c", "b", "d", "a"]),
            ("B", vec!["b", "a", "c", "d"]),
            ("C", vec!["b", "d", "a", "c"]),
            ("D", vec!["c", "a", "d", "b"]),
        ])
        .unwrap()
    }

    #[test]
    fn valid_table_preserves_order() {
        let t = men();
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
        assert_eq!(t.agents(), &["A", "B", "C", "D"]);
        assert_eq!(t.preferences(&"C"), Some(&["b", "d", "a", "c"][..]));
        assert_eq!(t.position(&"D"), Some(3));
        assert!(t.preferences(&"E").is_none());
        assert_eq!(t.symbols().len(), 4);
    }

    #[test]
    fn rank_inverts_preferences() {
        let t = men();
        let r = t.rank(&"A").unwrap();
        assert_eq!(r[&"c"], 0);
        assert_eq!(r[&"b"], 1);
        assert_eq!(r[&"d"], 2);
        assert_eq!(r[&"a"], 3);
        assert_eq!(t.rank_of(&"B", Some(&"a")), Some(1));
        assert_eq!(t.rank_of(&"B", None), Some(4));
        assert_eq!(t.no_partner_rank(), 4);
    }

    #[test]
    fn rank_index_is_cached() {
        let t = men();
        let first = t.rank_index().as_ptr();
        let second = t.rank_index().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_table_rejected() {
        let err = PreferenceTable::<u32, u32>::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ValidationError::DimensionMismatch { found: 0, .. }));
    }

    #[test]
    fn short_list_is_dimension_mismatch() {
        let err = PreferenceTable::new(vec![(0u32, vec![0u32, 1]), (1, vec![1])]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DimensionMismatch {
                agent: "1".into(),
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn duplicate_in_list_rejected() {
        let err = PreferenceTable::new(vec![(0u32, vec![0u32, 0]), (1, vec![1, 0])]).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateEntry { .. }));
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = PreferenceTable::new(vec![(0u32, vec![0u32, 1]), (0, vec![1, 0])]).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateEntry { .. }));
    }

    #[test]
    fn disagreeing_symbols_rejected() {
        let err = PreferenceTable::new(vec![("A", vec!["a", "b"]), ("B", vec!["a", "e"])]).unwrap_err();
        assert!(matches!(err, ValidationError::SymbolSetMismatch(_)));
    }

    #[test]
    fn mixed_kinds_rejected() {
        // Stricter than accepting any int-or-string mix: one table uses one identifier kind.
        let raw: Vec<(Symbol, Vec<Symbol>)> =
            serde_json::from_str(r#"[["A", ["a", 1]], ["B", [1, "a"]]]"#).unwrap();
        let err = PreferenceTable::new(raw).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TypeMismatch {
                expected: SymbolKind::Text,
                found: SymbolKind::Integer,
                ..
            }
        ));
    }

    #[test]
    fn type_check_runs_before_dimension_check() {
        let raw: Vec<(Symbol, Vec<Symbol>)> =
            serde_json::from_str(r#"[["A", ["a"]], [2, ["a", "b"]]]"#).unwrap();
        let err = PreferenceTable::new(raw).unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
    }

    #[test]
    fn try_from_vec() {
        let t: PreferenceTable<char, char> = vec![('x', vec!['p'])].try_into().unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101, 111].iter().map(|&n| ordinal(n)).collect();
        assert_eq!(
            got,
            vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st", "111th"]
        );
    }

    #[test]
    fn display_renders_grid() {
        let t = PreferenceTable::new(vec![("A", vec!["x", "y"]), ("B", vec!["y", "x"])]).unwrap();
        let out = t.to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "+---+-----+-----+");
        assert_eq!(lines[1], "|   | 1st | 2nd |");
        assert_eq!(lines[2], "+===+=====+=====+");
        assert_eq!(lines[3], "| A | x   | y   |");
        assert_eq!(lines.len(), 7);
    }
}
