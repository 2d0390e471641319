use crate::types::Symbol;
use serde::{Deserialize, Serialize};

/// A single production rule: an input symbol and its replacement string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductionRule {
    pub input: Symbol,
    pub output: String,
}

/// An ordered table of production rules.
///
/// Lookup is first-match-wins: when several rules share an input symbol,
/// the earliest one in the table applies. Keeping that tie-break stable is
/// what makes expansion reproducible across runs. A symbol with no
/// matching rule is handled by the rewriter's identity fallback, not by
/// the table itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub rules: Vec<ProductionRule>,
}

impl ProductionRule {
    pub fn new(input: Symbol, output: impl Into<String>) -> Self {
        Self {
            input,
            output: output.into(),
        }
    }
}

impl RuleTable {
    pub fn new(rules: Vec<ProductionRule>) -> Self {
        Self { rules }
    }

    /// A table with no rules; every symbol maps to itself under it.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds a table from `(symbol, replacement)` pairs, preserving order.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (Symbol, S)>) -> Self {
        Self {
            rules: pairs
                .into_iter()
                .map(|(input, output)| ProductionRule::new(input, output))
                .collect(),
        }
    }

    /// Returns the replacement for `symbol` from the first matching rule,
    /// or `None` if no rule matches.
    pub fn replacement(&self, symbol: Symbol) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.input == symbol)
            .map(|r| r.output.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_returns_none_for_unknown_symbol() {
        let table = RuleTable::from_pairs([('F', "FF")]);
        assert_eq!(table.replacement('F'), Some("FF"));
        assert_eq!(table.replacement('X'), None);
    }

    #[test]
    fn replacement_is_first_match_wins() {
        // Two rules for the same input symbol; only the first may apply.
        let table = RuleTable::new(vec![
            ProductionRule::new('F', "F[+F]"),
            ProductionRule::new('F', "FF"),
        ]);
        assert_eq!(table.replacement('F'), Some("F[+F]"));
    }

    #[test]
    fn empty_table_has_no_replacements() {
        let table = RuleTable::empty();
        assert_eq!(table.replacement('F'), None);
        assert_eq!(table.replacement('+'), None);
    }
}
