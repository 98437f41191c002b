//! The built-in automata.
//!
//! Transition tables here are authoritative. The `regex` labels are
//! descriptive only and are not checked against the tables.

use crate::catalog::DfaDescriptor;
use crate::dfa;

pub(crate) fn descriptors() -> Vec<DfaDescriptor> {
    vec![
        dfa! {
            name: "contains_01",
            description: "Contains '01' as substring",
            regex: "(0|1)*01(0|1)*",
            states: [q0, q1, q2],
            alphabet: ['0', '1'],
            start: q0,
            accepting: [q2],
            transitions: [
                (q0, '0') => q1,
                (q0, '1') => q0,
                (q1, '0') => q1,
                (q1, '1') => q2,
                (q2, '0') => q2,
                (q2, '1') => q2,
            ],
        },
        dfa! {
            name: "alternating",
            description: "Alternating 0s and 1s",
            regex: "ε | 0 | 1 | (01)* | (10)* | 0(10)* | 1(01)*",
            states: [q0, q1, q2, qDead],
            alphabet: ['0', '1'],
            start: q0,
            accepting: [q0, q1, q2],
            transitions: [
                (q0, '0') => q1,
                (q0, '1') => q2,
                (q1, '0') => qDead,
                (q1, '1') => q2,
                (q2, '0') => q1,
                (q2, '1') => qDead,
                (qDead, '0') => qDead,
                (qDead, '1') => qDead,
            ],
        },
        dfa! {
            name: "even_0s",
            description: "Even number of 0s",
            regex: "1*(01*01*)*",
            states: [q0, q1],
            alphabet: ['0', '1'],
            start: q0,
            accepting: [q0],
            transitions: [
                (q0, '0') => q1,
                (q0, '1') => q0,
                (q1, '0') => q0,
                (q1, '1') => q1,
            ],
        },
        dfa! {
            name: "contains_ab",
            description: "Contains 'ab' as substring",
            regex: "(a|b)*ab(a|b)*",
            states: [q0, q1, q2],
            alphabet: ['a', 'b'],
            start: q0,
            accepting: [q2],
            transitions: [
                (q0, 'a') => q1,
                (q0, 'b') => q0,
                (q1, 'a') => q1,
                (q1, 'b') => q2,
                (q2, 'a') => q2,
                (q2, 'b') => q2,
            ],
        },
        dfa! {
            name: "not_ends_01",
            description: "Does NOT end with '01'",
            regex: "ε | (0|1)*(00|10|11)",
            states: [q0, q1, q2],
            alphabet: ['0', '1'],
            start: q0,
            accepting: [q0, q1],
            transitions: [
                (q0, '0') => q1,
                (q0, '1') => q0,
                (q1, '0') => q1,
                (q1, '1') => q2,
                (q2, '0') => q1,
                (q2, '1') => q0,
            ],
        },
        dfa! {
            name: "odd_1s",
            description: "Odd number of 1s",
            regex: "0*1(0|10*1)*0*",
            states: [q0, q1],
            alphabet: ['0', '1'],
            start: q0,
            accepting: [q1],
            transitions: [
                (q0, '0') => q0,
                (q0, '1') => q1,
                (q1, '0') => q1,
                (q1, '1') => q0,
            ],
        },
        dfa! {
            name: "contains_aa",
            description: "Contains 'aa' as substring",
            regex: "(a|b)*aa(a|b)*",
            states: [q0, q1, q2],
            alphabet: ['a', 'b'],
            start: q0,
            accepting: [q2],
            transitions: [
                (q0, 'a') => q1,
                (q0, 'b') => q0,
                (q1, 'a') => q2,
                (q1, 'b') => q0,
                (q2, 'a') => q2,
                (q2, 'b') => q2,
            ],
        },
    ]
}

/// Degenerate automaton served for names the catalog does not know.
pub(crate) fn fallback(name: &str) -> DfaDescriptor {
    let mut descriptor = dfa! {
        name: "",
        description: "Unknown",
        regex: "",
        states: [q0],
        alphabet: ['0', '1'],
        start: q0,
        accepting: [q0],
        transitions: [],
    };
    descriptor.name = name.to_string();
    descriptor
}
