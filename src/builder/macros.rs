//! Macros for declaring DFA definitions as data.

/// Declare a [`DfaDescriptor`](crate::catalog::DfaDescriptor) as a table.
///
/// State labels are written as bare identifiers; symbols are `char`
/// literals. Transitions keep the order they are written in.
///
/// # Example
///
/// ```
/// use dfa_lab::dfa;
///
/// let descriptor = dfa! {
///     name: "odd_1s",
///     description: "Odd number of 1s",
///     regex: "0*1(0|10*1)*0*",
///     states: [q0, q1],
///     alphabet: ['0', '1'],
///     start: q0,
///     accepting: [q1],
///     transitions: [
///         (q0, '0') => q0,
///         (q0, '1') => q1,
///         (q1, '0') => q1,
///         (q1, '1') => q0,
///     ],
/// };
///
/// let dfa = descriptor.to_dfa().unwrap();
/// assert_eq!(dfa.transitions().len(), 4);
/// ```
#[macro_export]
macro_rules! dfa {
    (
        name: $name:expr,
        description: $description:expr,
        regex: $regex:expr,
        states: [$($state:ident),* $(,)?],
        alphabet: [$($symbol:literal),* $(,)?],
        start: $start:ident,
        accepting: [$($accepting:ident),* $(,)?],
        transitions: [
            $(($from:ident, $on:literal) => $to:ident),* $(,)?
        ] $(,)?
    ) => {
        $crate::catalog::DfaDescriptor {
            name: ::std::string::String::from($name),
            description: ::std::string::String::from($description),
            regex: ::std::string::String::from($regex),
            states: ::std::vec![$($crate::core::StateId::from(stringify!($state))),*],
            alphabet: ::std::vec![$($symbol),*],
            start: $crate::core::StateId::from(stringify!($start)),
            accepting: ::std::vec![$($crate::core::StateId::from(stringify!($accepting))),*],
            transitions: ::std::vec![
                $($crate::core::Transition::new(stringify!($from), $on, stringify!($to))),*
            ],
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{StateId, Transition};

    #[test]
    fn dfa_macro_builds_descriptor() {
        let descriptor = dfa! {
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
            ],
        };

        assert_eq!(descriptor.name, "contains_aa");
        assert_eq!(descriptor.states.len(), 3);
        assert_eq!(descriptor.alphabet, vec!['a', 'b']);
        assert_eq!(descriptor.start, StateId::from("q0"));
        assert_eq!(descriptor.accepting, vec![StateId::from("q2")]);
        assert_eq!(descriptor.transitions[2], Transition::new("q1", 'a', "q2"));
    }

    #[test]
    fn dfa_macro_accepts_empty_lists() {
        let descriptor = dfa! {
            name: "lonely",
            description: "",
            regex: "",
            states: [qOnly],
            alphabet: [],
            start: qOnly,
            accepting: [],
            transitions: [],
        };

        assert!(descriptor.accepting.is_empty());
        assert!(descriptor.transitions.is_empty());
        assert!(descriptor.to_dfa().is_ok());
    }
}
