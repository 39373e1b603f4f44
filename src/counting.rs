//! Argument-counting macros.
//!
//! `MANGROVE_PP_NARG(...)` appends `MANGROVE_PP_RSEQ_N()` to its arguments and
//! hands the lot to `MANGROVE_PP_ARG_N`. With K real arguments in front, the
//! descending sequence is shifted right by K, so the parameter named `N` lands
//! on the value K. Both definitions are sized from the same depth here; if the
//! selector and the sequence ever disagree in length the count is silently
//! wrong for the largest arities.

use crate::depth::Depth;
use std::fmt::Write as _;

pub const SELECTOR_NAME: &str = "MANGROVE_PP_ARG_N";
pub const SEQUENCE_NAME: &str = "MANGROVE_PP_RSEQ_N";

/// Placeholders beyond the maximum depth.
const MARGIN: usize = 2;

/// The selector / reverse-sequence pair for one maximum depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountingMacros {
    max_depth: Depth,
    selector: String,
    sequence: String,
}

impl CountingMacros {
    pub fn new(max_depth: Depth) -> Self {
        let slots = max_depth.get() + MARGIN;

        let mut selector = format!("#define {SELECTOR_NAME}(");
        for i in 0..slots {
            let _ = write!(selector, "_{i}, ");
        }
        selector.push_str("N, ...) N");

        let numbers: Vec<String> = (0..=slots).rev().map(|i| i.to_string()).collect();
        let sequence = format!("#define {SEQUENCE_NAME}() {}", numbers.join(", "));

        Self {
            max_depth,
            selector,
            sequence,
        }
    }

    pub fn max_depth(&self) -> Depth {
        self.max_depth
    }

    /// The `MANGROVE_PP_ARG_N` definition.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The `MANGROVE_PP_RSEQ_N` definition.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of `_i` placeholders before the `N` result parameter.
    pub fn selector_placeholders(&self) -> usize {
        self.max_depth.get() + MARGIN
    }

    /// Number of integers the reverse sequence expands to.
    pub fn sequence_len(&self) -> usize {
        self.selector_placeholders() + 1
    }

    /// Both definitions, each followed by a blank line.
    pub fn render(&self) -> String {
        format!("{}\n\n{}\n\n", self.selector, self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(selector: &str) -> Vec<&str> {
        let open = selector.find('(').unwrap();
        let close = selector.find(')').unwrap();
        selector[open + 1..close].split(", ").collect()
    }

    fn sequence_values(sequence: &str) -> Vec<usize> {
        let body = sequence.split("() ").nth(1).unwrap();
        body.split(", ").map(|n| n.parse().unwrap()).collect()
    }

    #[test]
    fn depth_two_matches_expected_text() {
        let macros = CountingMacros::new(Depth::new(2).unwrap());
        assert_eq!(
            macros.selector(),
            "#define MANGROVE_PP_ARG_N(_0, _1, _2, _3, N, ...) N"
        );
        assert_eq!(macros.sequence(), "#define MANGROVE_PP_RSEQ_N() 4, 3, 2, 1, 0");
    }

    #[test]
    fn selector_and_sequence_sizes_track_depth() {
        for d in [1, 2, 7, 100, 150] {
            let macros = CountingMacros::new(Depth::new(d).unwrap());
            let params = params(macros.selector());
            // placeholders, then N, then the variadic tail
            assert_eq!(params.len(), d + 2 + 2);
            assert_eq!(params[params.len() - 2], "N");
            assert_eq!(params[params.len() - 1], "...");
            assert_eq!(macros.selector_placeholders(), d + 2);

            let values = sequence_values(macros.sequence());
            assert_eq!(values.len(), d + 3);
            assert_eq!(macros.sequence_len(), d + 3);
            assert_eq!(values.first(), Some(&(d + 2)));
            assert_eq!(values.last(), Some(&0));
        }
    }

    /// Simulates the preprocessor's positional shift for every supported arity.
    #[test]
    fn shifting_yields_argument_count() {
        let d = 5;
        let macros = CountingMacros::new(Depth::new(d).unwrap());
        let slots = params(macros.selector());
        let n_index = slots.iter().position(|p| *p == "N").unwrap();
        let sequence = sequence_values(macros.sequence());

        for k in 1..=d + 1 {
            let mut args: Vec<String> = (0..k).map(|i| format!("a{i}")).collect();
            args.extend(sequence.iter().map(|n| n.to_string()));
            assert_eq!(args[n_index], k.to_string(), "arity {k}");
        }
    }
}
