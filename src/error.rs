//! Construction-time validation errors.
//!
//! Every error is raised while building a [`crate::PreferenceTable`] or an
//! [`crate::Engine`]; queries on a constructed engine never fail.

use crate::types::SymbolKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An identifier is not of the kind the rest of its table uses.
    #[error("type mismatch: {agent} has {found} value {value}, table uses {expected}")]
    TypeMismatch {
        agent: String,
        value: String,
        expected: SymbolKind,
        found: SymbolKind,
    },

    /// A preference list length differs from the number of agents in its table.
    #[error("dimension mismatch: {agent} ranks {found} agents, expected {expected}")]
    DimensionMismatch {
        agent: String,
        expected: usize,
        found: usize,
    },

    /// An identifier appears twice in one preference list (or twice as a key).
    #[error("duplicate entry: {agent} lists {value} more than once")]
    DuplicateEntry { agent: String, value: String },

    /// Preference lists do not range over one common set, or two tables disagree on their symbols.
    #[error("symbol set mismatch: {0}")]
    SymbolSetMismatch(String),
}
