//! Structural checks for DFA definitions using Validation.

use crate::core::Dfa;
use crate::validation::violations::DfaViolation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking one invariant.
pub type Check = Validation<(), NonEmptyVec<DfaViolation>>;

fn check(violation: Option<DfaViolation>) -> Check {
    match violation {
        Some(violation) => Validation::fail(violation),
        None => Validation::success(()),
    }
}

/// Check every structural invariant, accumulating ALL violations.
///
/// Returns `Validation::Success(())` when:
/// - the start state is declared,
/// - every accepting state is declared,
/// - every transition leaves and targets declared states,
/// - every transition reads a symbol of the alphabet,
/// - no (state, symbol) pair is defined twice.
///
/// Otherwise returns `Validation::Failure` with every violation found,
/// in declaration order.
pub fn validate(dfa: &Dfa) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    checks.push(check((!dfa.has_state(dfa.start().name())).then(|| {
        DfaViolation::UnknownStartState {
            start: dfa.start().clone(),
        }
    })));

    for state in dfa.accepting() {
        checks.push(check((!dfa.has_state(state.name())).then(|| {
            DfaViolation::UnknownAcceptingState {
                state: state.clone(),
            }
        })));
    }

    let mut seen: HashSet<(&str, char)> = HashSet::new();
    for transition in dfa.transitions() {
        let from = &transition.from;
        let symbol = transition.symbol;

        if !dfa.has_state(from.name()) {
            checks.push(check(Some(DfaViolation::UnknownSourceState {
                from: from.clone(),
                symbol,
            })));
        }

        if !dfa.in_alphabet(symbol) {
            checks.push(check(Some(DfaViolation::SymbolOutsideAlphabet {
                from: from.clone(),
                symbol,
            })));
        }

        if !dfa.has_state(transition.to.name()) {
            checks.push(check(Some(DfaViolation::UnknownTargetState {
                from: from.clone(),
                symbol,
                to: transition.to.clone(),
            })));
        }

        if !seen.insert((from.name(), symbol)) {
            checks.push(check(Some(DfaViolation::DuplicateTransition {
                from: from.clone(),
                symbol,
            })));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Collect the violations of a failed validation into a plain list.
pub fn collect_violations(result: &Check) -> Vec<DfaViolation> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
