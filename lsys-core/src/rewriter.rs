//! Deterministic string rewriting for L-system grammars.

use crate::{error::GenError, rules::RuleTable};

/// Expands `axiom` by applying `rules` for `iterations` generations.
///
/// Each generation scans the current string left to right and builds a
/// fresh one: for every symbol, the output of the first matching rule is
/// appended, or the symbol itself when no rule matches (identity
/// fallback). Neither the axiom nor the rule table is mutated, and the
/// result is byte-identical across repeated calls with the same inputs.
///
/// String length grows exponentially when rule outputs are longer than
/// their inputs. Bounding `iterations` is the caller's responsibility;
/// the practical range for the built-in grammars is 0–6.
///
/// ### Parameters
/// - `axiom` - Initial symbol string before any rewriting.
/// - `rules` - Ordered rule table; earlier rules win ties.
/// - `iterations` - Number of generations to apply; `0` returns the
///   axiom unchanged.
///
/// ### Returns
/// The expanded string, or [`GenError::InvalidIterationCount`] when
/// `iterations` is negative.
pub fn expand(axiom: &str, rules: &RuleTable, iterations: i32) -> Result<String, GenError> {
    if iterations < 0 {
        return Err(GenError::InvalidIterationCount { iterations });
    }

    let mut current = axiom.to_owned();
    for _ in 0..iterations {
        let mut next = String::with_capacity(current.len() * 2);
        for symbol in current.chars() {
            match rules.replacement(symbol) {
                Some(output) => next.push_str(output),
                None => next.push(symbol),
            }
        }
        current = next;
    }

    tracing::debug!(iterations, len = current.len(), "expanded grammar");
    Ok(current)
}

/// A grammar together with its current expansion.
///
/// Holds the original axiom and rule table unchanged so the expansion can
/// be re-run or reset at any time. The `current` string is only replaced
/// by [`Grammar::rewrite`]; rewriting twice with the same iteration count
/// yields the same string.
#[derive(Clone, Debug)]
pub struct Grammar {
    pub axiom: String,
    pub rules: RuleTable,
    pub current: String,
}

impl Grammar {
    pub fn new(axiom: impl Into<String>, rules: RuleTable) -> Self {
        let axiom = axiom.into();
        let current = axiom.clone();
        Self {
            axiom,
            rules,
            current,
        }
    }

    /// Replaces `current` with the expansion of the axiom over
    /// `iterations` generations and returns a view of it.
    pub fn rewrite(&mut self, iterations: i32) -> Result<&str, GenError> {
        self.current = expand(&self.axiom, &self.rules, iterations)?;
        Ok(&self.current)
    }

    /// Restores `current` to the axiom.
    pub fn reset(&mut self) {
        self.current.clone_from(&self.axiom);
    }
}
