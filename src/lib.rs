//! # Stable Matching Engine
//!
//! Deterministic solver for the stable matching problem (Gale-Shapley deferred acceptance):
//! validated preference tables, proposer-optimal matching, stability checking and scoring.
//!
//! ## Entry point
//!
//! Build two [`PreferenceTable`]s, wrap them in an [`Engine`] with [`Engine::new`], then call
//! [`Engine::solve`]. [`Engine::is_stable`] and [`Engine::compute_score`] accept any complete
//! [`Matching`].
//!
//! ## Example
//!
//! ```rust
//! use stable_matching_engine::{Engine, Matching, PreferenceTable, Score};
//!
//! let proposers = PreferenceTable::new(vec![
//!     ("A", vec!["c", "b", "d", "a"]),
//!     ("B", vec!["b", "a", "c", "d"]),
//!     ("C", vec!["b", "d", "a", "c"]),
//!     ("D", vec!["c", "a", "d", "b"]),
//! ])
//! .unwrap();
//! let acceptors = PreferenceTable::new(vec![
//!     ("a", vec!["A", "B", "D", "C"]),
//!     ("b", vec!["C", "A", "D", "B"]),
//!     ("c", vec!["C", "B", "D", "A"]),
//!     ("d", vec!["B", "A", "C", "D"]),
//! ])
//! .unwrap();
//! let engine = Engine::new(proposers, acceptors).unwrap();
//! let matching = engine.solve();
//! let expected: Matching<_, _> = vec![("A", "d"), ("B", "a"), ("C", "b"), ("D", "c")].into_iter().collect();
//! assert_eq!(matching, expected);
//! assert!(engine.is_stable(&matching));
//! assert_eq!(engine.compute_score(&matching), Score { proposer: 3, acceptor: 4 });
//! ```
//!
//! ## Tooling
//!
//! [`TableGenerator`] draws seeded random tables; [`scores`] and [`timing`] sample score
//! distributions and execution times over random instances.

pub mod config;
pub mod engine;
pub mod error;
pub mod matching;
pub mod random_table;
pub mod report;
pub mod scores;
pub mod table;
pub mod timing;
pub mod types;

pub use config::Config;
pub use engine::Engine;
pub use error::ValidationError;
pub use matching::Matching;
pub use random_table::{RandomTableConfig, TableGenerator};
pub use report::{InMemoryReportSink, InstanceReport, ReportSink, StdoutReportSink};
pub use scores::{random_score, random_scores, Histogram, ScoreSummary};
pub use table::{PreferenceTable, RankMap};
pub use timing::{average_execution_time, fit_power_law, time_random_solves, PowerLawFit, TimingSample};
pub use types::{Agent, Rank, Score, Symbol, SymbolKind};
