//! End-to-end scenarios against the built-in catalog.
//!
//! Expected traces are derived from the literal transition tables, not
//! from the regex labels.

use dfa_lab::artifacts::{Artifacts, TableCell};
use dfa_lab::catalog::Catalog;
use dfa_lab::report::Report;
use dfa_lab::simulation::{run, SimulationTrace, Verdict};
use dfa_lab::validation::validate;
use dfa_lab::StateId;

fn trace(name: &str, input: &str) -> SimulationTrace {
    run(&Catalog::builtin().lookup(name), input)
}

fn path(trace: &SimulationTrace) -> Vec<&str> {
    trace.path().into_iter().map(StateId::name).collect()
}

#[test]
fn every_catalog_entry_is_structurally_valid() {
    for name in Catalog::builtin().names() {
        let dfa = Catalog::builtin().lookup(name);
        assert!(validate(&dfa).is_success(), "{name} failed validation");
        assert!(dfa.has_state(dfa.start().name()));
        assert!(dfa.accepting().iter().all(|s| dfa.has_state(s.name())));
    }
}

#[test]
fn contains_01_accepts_001() {
    let trace = trace("contains_01", "001");

    assert_eq!(path(&trace), vec!["q0", "q1", "q1", "q2"]);
    assert_eq!(trace.verdict(), &Verdict::Accepted);
    assert_eq!(trace.final_state(), Some(&StateId::from("q2")));
}

#[test]
fn contains_01_rejects_111_on_final_state() {
    let trace = trace("contains_01", "111");

    assert_eq!(path(&trace), vec!["q0", "q0", "q0", "q0"]);
    assert_eq!(trace.verdict(), &Verdict::RejectedFinalState);
}

#[test]
fn contains_01_halts_on_invalid_symbol() {
    let trace = trace("contains_01", "0a1");

    assert_eq!(
        trace.verdict(),
        &Verdict::RejectedInvalidSymbol {
            symbol: 'a',
            position: 2,
            state: StateId::from("q1"),
        }
    );
    assert_eq!(trace.steps().len(), 1);
    assert_eq!(trace.final_state(), None);
}

#[test]
fn odd_1s_rejects_101() {
    let trace = trace("odd_1s", "101");

    assert_eq!(path(&trace), vec!["q0", "q1", "q1", "q0"]);
    assert_eq!(trace.verdict(), &Verdict::RejectedFinalState);
}

#[test]
fn odd_1s_accepts_single_one() {
    assert!(trace("odd_1s", "0010").is_accepted());
}

#[test]
fn not_ends_01_follows_its_table() {
    assert!(trace("not_ends_01", "").is_accepted());
    assert!(trace("not_ends_01", "010").is_accepted());
    assert!(trace("not_ends_01", "11").is_accepted());

    let rejected = trace("not_ends_01", "001");
    assert_eq!(path(&rejected), vec!["q0", "q1", "q1", "q2"]);
    assert_eq!(rejected.verdict(), &Verdict::RejectedFinalState);

    // q2 on '1' returns to q0, so "011" is accepted.
    assert_eq!(path(&trace("not_ends_01", "011")), vec!["q0", "q1", "q2", "q0"]);
}

#[test]
fn alternating_falls_into_dead_state() {
    assert!(trace("alternating", "").is_accepted());
    assert!(trace("alternating", "0101").is_accepted());
    assert!(trace("alternating", "10").is_accepted());

    let dead = trace("alternating", "0110");
    assert_eq!(path(&dead), vec!["q0", "q1", "q2", "qDead", "qDead"]);
    assert_eq!(dead.verdict(), &Verdict::RejectedFinalState);
}

#[test]
fn even_0s_counts_zeros() {
    assert!(trace("even_0s", "").is_accepted());
    assert!(trace("even_0s", "1001").is_accepted());
    assert!(!trace("even_0s", "10").is_accepted());
}

#[test]
fn letter_alphabets_reject_digits() {
    assert!(trace("contains_ab", "bbab").is_accepted());
    assert!(!trace("contains_ab", "bbba").is_accepted());
    assert!(trace("contains_aa", "abaa").is_accepted());
    assert!(!trace("contains_aa", "abab").is_accepted());

    let digits = trace("contains_aa", "a0");
    assert_eq!(digits.verdict().halt_position(), Some(2));
    assert_eq!(digits.verdict().halt_state(), Some(&StateId::from("q1")));
}

#[test]
fn unknown_name_uses_fallback() {
    let dfa = Catalog::builtin().lookup("nonexistent");
    assert_eq!(dfa.states().len(), 1);
    assert!(dfa.is_accepting(dfa.start().name()));

    assert!(run(&dfa, "").is_accepted());

    let trace = run(&dfa, "01");
    assert_eq!(
        trace.verdict(),
        &Verdict::RejectedNoTransition {
            symbol: '0',
            position: 1,
            state: StateId::from("q0"),
        }
    );
    assert_eq!(trace.steps()[0].to, None);
    assert_eq!(
        trace.narration(),
        vec!["Start State: q0", "Read '0': q0 → [No transition]"]
    );
}

#[test]
fn contains_01_artifacts() {
    let dfa = Catalog::builtin().lookup("contains_01");
    let artifacts = Artifacts::generate(&dfa);

    assert_eq!(
        artifacts.function.lines(),
        vec![
            "δ(q0, 0) = q1",
            "δ(q0, 1) = q0",
            "δ(q1, 0) = q1",
            "δ(q1, 1) = q2",
            "δ(q2, 0) = q2",
            "δ(q2, 1) = q2",
        ]
    );

    assert_eq!(
        artifacts.table.cell("q1", '1'),
        Some(&TableCell::Next(StateId::from("q2")))
    );
    assert_eq!(
        artifacts.table.to_string(),
        "State | 0  | 1\n→ q0  | q1 | q0\nq1    | q1 | q2\nq2 +  | q2 | q2"
    );

    let labels: Vec<(&str, &str, &str)> = artifacts
        .graph
        .edges()
        .iter()
        .map(|e| (e.from.name(), e.to.name(), e.label.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("q0", "q1", "0"),
            ("q0", "q0", "1"),
            ("q1", "q1", "0"),
            ("q1", "q2", "1"),
            ("q2", "q2", "0, 1"),
        ]
    );
}

#[test]
fn alternating_graph_coalesces_dead_loop() {
    let artifacts = Artifacts::generate(&Catalog::builtin().lookup("alternating"));

    assert_eq!(artifacts.graph.edges().len(), 7);
    assert_eq!(artifacts.graph.edge("qDead", "qDead").unwrap().label, "0, 1");

    let kinds: Vec<&str> = artifacts.graph.nodes().iter().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec!["start final", "final", "final", ""]);
}

#[test]
fn report_bundles_a_request() {
    let report = Report::analyze(Catalog::builtin(), "contains_01", Some("001"));

    assert!(report.known);
    assert_eq!(report.dfa.name, "contains_01");
    assert_eq!(
        report.trace.as_ref().map(|t| t.narration()),
        Some(vec![
            "Start State: q0".to_string(),
            "Read '0': q0 → q1".to_string(),
            "Read '0': q1 → q1".to_string(),
            "Read '1': q1 → q2".to_string(),
            "Final State: q2".to_string(),
        ])
    );
    assert_eq!(
        report.artifacts,
        Artifacts::generate(&Catalog::builtin().lookup("contains_01"))
    );
}
