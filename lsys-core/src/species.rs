//! Built-in species presets and one-call structure generation.
//!
//! Each species bundles a grammar (axiom + rule table) with tuned
//! drawing parameters and generation caps. The bundles are plain data
//! with serde derives, so an external preset loader can supply its own
//! variants in the same shape.

use crate::{
    builder::{self, Structure},
    error::GenError,
    params::DrawParams,
    rewriter,
    rules::RuleTable,
};
use serde::{Deserialize, Serialize};

/// Tree species with built-in grammar and drawing presets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Species {
    Oak,
    Pine,
    Willow,
}

/// The full named parameter bundle for one species or variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesParams {
    pub axiom: String,
    pub rules: RuleTable,
    pub draw: DrawParams,
    /// Rewriting generations; growth is exponential, keep this small
    /// (the presets use 4, the practical ceiling is about 6).
    pub iterations: i32,
    /// Hard cap on branch nesting depth during interpretation.
    pub max_depth: u32,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Oak, Species::Pine, Species::Willow];

    pub fn name(self) -> &'static str {
        match self {
            Species::Oak => "oak",
            Species::Pine => "pine",
            Species::Willow => "willow",
        }
    }

    /// The tuned parameter bundle for this species.
    pub fn params(self) -> SpeciesParams {
        let (rule, turn_angle_deg, length_decay) = match self {
            Species::Oak => ("F[+F]F[-F][F]", 25.7, 0.7),
            Species::Pine => ("FF-[-F+F+F]+[+F-F-F]", 20.0, 0.8),
            Species::Willow => ("F[+F][-F]F[+F][-F]", 22.5, 0.6),
        };

        SpeciesParams {
            axiom: "F".to_owned(),
            rules: RuleTable::from_pairs([('F', rule)]),
            draw: DrawParams {
                turn_angle_deg,
                length_decay,
                ..DrawParams::default()
            },
            iterations: 4,
            max_depth: 5,
        }
    }
}

impl SpeciesParams {
    /// Expands the grammar and interprets the result in one call.
    pub fn generate(&self) -> Result<Structure, GenError> {
        let expanded = rewriter::expand(&self.axiom, &self.rules, self.iterations)?;
        builder::build(&expanded, &self.draw, self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_species_generates_a_nonempty_structure() {
        for species in Species::ALL {
            let structure = species.params().generate().unwrap();
            assert!(
                !structure.nodes.is_empty(),
                "{} produced no nodes",
                species.name()
            );
        }
    }

    #[test]
    fn generated_structures_respect_the_depth_cap() {
        for species in Species::ALL {
            let params = species.params();
            let structure = params.generate().unwrap();
            assert!(structure.nodes.iter().all(|n| n.depth <= params.max_depth));
        }
    }

    #[test]
    fn generation_is_deterministic_per_species() {
        let a = Species::Willow.params().generate().unwrap();
        let b = Species::Willow.params().generate().unwrap();
        assert_eq!(a.nodes, b.nodes);
    }

    #[test]
    fn zero_iterations_draws_the_bare_axiom() {
        let params = SpeciesParams {
            iterations: 0,
            ..Species::Oak.params()
        };
        let structure = params.generate().unwrap();
        assert_eq!(structure.nodes.len(), 1);
    }

    #[test]
    fn negative_iterations_surface_the_rewriter_error() {
        let params = SpeciesParams {
            iterations: -2,
            ..Species::Oak.params()
        };
        assert_eq!(
            params.generate().unwrap_err(),
            GenError::InvalidIterationCount { iterations: -2 }
        );
    }
}
