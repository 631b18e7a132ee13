//! Instance reports: one JSON line per solved instance.
//!
//! Fields: label, size, matching pairs, stability flag, score. Sink: stdout or in-memory (tests).

use serde::Serialize;
use std::sync::{Arc, Mutex};

use crate::engine::Engine;
use crate::matching::Matching;
use crate::types::{Agent, Score};

/// Outcome of checking one matching against one engine.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InstanceReport {
    pub label: String,
    pub size: usize,
    /// (proposer, acceptor) rendered with `Display`, in matching order.
    pub matching: Vec<(String, String)>,
    pub stable: bool,
    pub score: Score,
}

impl InstanceReport {
    /// Evaluates `matching` on `engine`. Panics on an incomplete matching, like the engine queries.
    pub fn new<P: Agent, A: Agent>(label: impl Into<String>, engine: &Engine<P, A>, matching: &Matching<P, A>) -> Self {
        Self {
            label: label.into(),
            size: engine.size(),
            matching: matching
                .iter()
                .map(|(p, a)| (p.to_string(), a.to_string()))
                .collect(),
            stable: engine.is_stable(matching),
            score: engine.compute_score(matching),
        }
    }
}

/// Destination for instance reports.
pub trait ReportSink: Send + Sync {
    fn emit(&self, report: &InstanceReport);
}

/// Writes one JSON line per report to stdout.
pub struct StdoutReportSink;

impl ReportSink for StdoutReportSink {
    fn emit(&self, report: &InstanceReport) {
        match serde_json::to_string(report) {
            Ok(line) => println!("{}", line),
            Err(e) => log::warn!("report not serialisable: {}", e),
        }
    }
}

/// Keeps reports in memory. Clones share the buffer.
#[derive(Clone, Default)]
pub struct InMemoryReportSink {
    reports: Arc<Mutex<Vec<InstanceReport>>>,
}

impl InMemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<InstanceReport> {
        self.reports.lock().expect("lock").clone()
    }
}

impl ReportSink for InMemoryReportSink {
    fn emit(&self, report: &InstanceReport) {
        self.reports.lock().expect("lock").push(report.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_table::{RandomTableConfig, TableGenerator};

    #[test]
    fn report_serialises_to_one_line() {
        let engine = TableGenerator::new(RandomTableConfig { seed: 5, size: 4 }).engine();
        let report = InstanceReport::new("random", &engine, &engine.solve());
        assert!(report.stable);
        assert_eq!(report.matching.len(), 4);
        let line = serde_json::to_string(&report).unwrap();
        assert!(!line.contains('\n'));
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["label"], "random");
        assert_eq!(v["size"], 4);
        assert_eq!(v["stable"], true);
        assert!(v["score"]["proposer"].is_u64());
    }

    #[test]
    fn in_memory_sink_shares_buffer() {
        let engine = TableGenerator::new(RandomTableConfig { seed: 9, size: 3 }).engine();
        let sink = InMemoryReportSink::new();
        let clone = sink.clone();
        clone.emit(&InstanceReport::new("a", &engine, &engine.solve()));
        assert_eq!(sink.reports().len(), 1);
        assert_eq!(sink.reports()[0].label, "a");
    }
}
