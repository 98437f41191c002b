//! Simulate a String
//!
//! This example runs one input through a catalog DFA and prints every
//! view a front end would render.
//!
//! Key concepts:
//! - Catalog lookup with fallback for unknown names
//! - Step-by-step trace and verdict
//! - Transition table, transition function and graph views
//!
//! Run with: cargo run --example simulate -- contains_01 001

use dfa_lab::catalog::Catalog;
use dfa_lab::report::Report;

fn main() {
    let mut args = std::env::args().skip(1);
    let name = args
        .next()
        .unwrap_or_else(|| Catalog::DEFAULT_ENTRY.to_string());
    let input = args.next();

    println!("=== DFA Simulation Example ===\n");

    println!("Available automata:");
    for entry in Catalog::builtin().names() {
        println!("  {entry}");
    }

    let report = Report::analyze(Catalog::builtin(), &name, input.as_deref());

    println!("\nDFA: {} ({})", report.requested, report.dfa.description);
    if !report.known {
        println!("  (unknown name, showing fallback automaton)");
    }
    println!("Regex: {}", report.dfa.regex);

    println!("\nTransition table:\n{}", report.artifacts.table);
    println!("\nTransition function:\n{}", report.artifacts.function);

    println!("\nGraph edges:");
    for edge in report.artifacts.graph.edges() {
        println!("  {} --[{}]--> {}", edge.from, edge.label, edge.to);
    }

    if let Some(trace) = &report.trace {
        println!("\nSteps:");
        for line in trace.narration() {
            println!("  {line}");
        }
    }

    if let Some(headline) = report.headline() {
        println!("\n{headline}");
    }

    println!("\n=== Example Complete ===");
}
