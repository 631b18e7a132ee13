//! Demo runner: textbook and random instances, score distribution, timing sweep.
//!
//! Configuration comes from `MATCHING_*` environment variables; see [`stable_matching_engine::config`].

use stable_matching_engine::{
    fit_power_law, random_scores, time_random_solves, Config, Engine, Histogram, InstanceReport, PreferenceTable,
    RandomTableConfig, ReportSink, ScoreSummary, StdoutReportSink, TableGenerator, ValidationError,
};

fn textbook() -> Result<Engine<&'static str, &'static str>, ValidationError> {
    let proposers = PreferenceTable::new(vec![
        ("A", vec!["c", "b", "d", "a"]),
        ("B", vec!["b", "a", "c", "d"]),
        ("C", vec!["b", "d", "a", "c"]),
        ("D", vec!["c", "a", "d", "b"]),
    ])?;
    let acceptors = PreferenceTable::new(vec![
        ("a", vec!["A", "B", "D", "C"]),
        ("b", vec!["C", "A", "D", "B"]),
        ("c", vec!["C", "B", "D", "A"]),
        ("d", vec!["B", "A", "C", "D"]),
    ])?;
    Engine::new(proposers, acceptors)
}

fn main() {
    let _ = env_logger::try_init();
    let config = Config::from_env();
    let sink = StdoutReportSink;

    let engine = textbook().expect("textbook tables are valid");
    println!("Proposer table\n{}", engine.proposers());
    println!("Acceptor table\n{}", engine.acceptors());
    sink.emit(&InstanceReport::new("textbook", &engine, &engine.solve()));

    let mut generator = TableGenerator::new(RandomTableConfig {
        seed: config.seed,
        size: config.size,
    });
    let engine = generator.engine();
    println!("Proposer table\n{}", engine.proposers());
    println!("Acceptor table\n{}", engine.acceptors());
    sink.emit(&InstanceReport::new("random", &engine, &engine.solve()));

    let scores = random_scores(&mut generator, config.score_samples);
    if let Some(summary) = ScoreSummary::from_scores(config.size, &scores) {
        println!("{}", serde_json::to_string(&summary).unwrap_or_default());
        let proposer: Vec<usize> = scores.iter().map(|s| s.proposer).collect();
        let acceptor: Vec<usize> = scores.iter().map(|s| s.acceptor).collect();
        if let Some(h) = Histogram::new(&proposer, config.histogram_bins) {
            println!("Proposer scores (n={})\n{}", config.size, h);
        }
        if let Some(h) = Histogram::new(&acceptor, config.histogram_bins) {
            println!("Acceptor scores (n={})\n{}", config.size, h);
        }
    }

    if !config.timing_sizes.is_empty() {
        let samples = time_random_solves(config.seed, &config.timing_sizes, config.timing_repetitions);
        for s in &samples {
            eprintln!("size={} mean={:?}", s.size, s.mean);
        }
        match fit_power_law(&samples) {
            Some(fit) => eprintln!("fitted exponent={:.3} coefficient={:.3e}", fit.exponent, fit.coefficient),
            None => eprintln!("not enough timing samples for a fit"),
        }
    }
}
