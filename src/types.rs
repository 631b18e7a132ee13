//! Core types shared by tables and the engine.
//!
//! Agent identifiers are generic: anything implementing [`Agent`] can key a
//! [`crate::PreferenceTable`]. [`Symbol`] covers raw integer-or-string input.

use std::fmt;
use std::hash::Hash;

/// Zero-based position of an agent in another agent's preference list. 0 is most preferred.
pub type Rank = usize;

/// Identifier domain of an agent value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SymbolKind {
    Integer,
    Text,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Integer => f.write_str("integer"),
            SymbolKind::Text => f.write_str("text"),
        }
    }
}

/// Bound for agent identifiers. Only equality, hashing and display are used; never arithmetic.
pub trait Agent: Clone + Eq + Hash + fmt::Debug + fmt::Display {
    /// Domain of this value. All keys of one table share a kind, as do all its entries.
    fn kind(&self) -> SymbolKind;
}

macro_rules! integer_agent {
    ($($t:ty),*) => {
        $(
            impl Agent for $t {
                fn kind(&self) -> SymbolKind {
                    SymbolKind::Integer
                }
            }
        )*
    };
}

integer_agent!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Agent for char {
    fn kind(&self) -> SymbolKind {
        SymbolKind::Text
    }
}

impl Agent for String {
    fn kind(&self) -> SymbolKind {
        SymbolKind::Text
    }
}

impl Agent for &'static str {
    fn kind(&self) -> SymbolKind {
        SymbolKind::Text
    }
}

/// Raw identifier as it arrives from untyped input: an integer or a string.
///
/// Deserializes untagged, so `[["A", ["c", 1]]]` yields one text key and mixed entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Symbol {
    Integer(i64),
    Text(String),
}

impl Agent for Symbol {
    fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Integer(_) => SymbolKind::Integer,
            Symbol::Text(_) => SymbolKind::Text,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Integer(i) => write!(f, "{}", i),
            Symbol::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Symbol {
    fn from(value: i64) -> Self {
        Symbol::Integer(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol::Text(value.to_string())
    }
}

/// Aggregate satisfaction of each side under a matching: sum of ranks achieved.
///
/// 0 means every member of that side got its first choice; the worst case for
/// `n` agents per side is [`Score::max_for`]`(n)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Score {
    pub proposer: usize,
    pub acceptor: usize,
}

impl Score {
    /// Largest possible score for one side with `n` agents per side: `n * (n - 1)`.
    pub fn max_for(n: usize) -> usize {
        n * n.saturating_sub(1)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.proposer, self.acceptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_deserializes_untagged() {
        let raw: Vec<Symbol> = serde_json::from_str(r#"["a", 3]"#).unwrap();
        assert_eq!(raw, vec![Symbol::from("a"), Symbol::from(3)]);
        assert_eq!(raw[0].kind(), SymbolKind::Text);
        assert_eq!(raw[1].kind(), SymbolKind::Integer);
    }

    #[test]
    fn score_max_for() {
        assert_eq!(Score::max_for(0), 0);
        assert_eq!(Score::max_for(1), 0);
        assert_eq!(Score::max_for(4), 12);
    }

    #[test]
    fn kinds_of_primitives() {
        assert_eq!(7usize.kind(), SymbolKind::Integer);
        assert_eq!("A".kind(), SymbolKind::Text);
        assert_eq!('a'.kind(), SymbolKind::Text);
        assert_eq!(String::from("x").kind(), SymbolKind::Text);
    }
}
