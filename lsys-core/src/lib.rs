//! Grammar-driven procedural tree generation library.
//!
//! An axiom string is expanded through L-system production rules and the
//! result is interpreted as turtle-graphics commands, producing a branching
//! structure of oriented, tapering segments.
//!
//! Main components:
//! - [`rules`] — production rules and ordered rule tables.
//! - [`rewriter`] — L-system string expansion.
//! - [`params`] — drawing parameters for interpretation.
//! - [`turtle`] — cursor state, emitted nodes, and spatial bounds.
//! - [`builder`] — turtle-graphics geometry synthesis.
//! - [`species`] — built-in species presets and one-call generation.
//! - [`error`] — error type shared by the fallible operations.
//! - [`types`] — the command alphabet and shared aliases.

pub mod builder;
pub mod error;
pub mod params;
pub mod rewriter;
pub mod rules;
pub mod species;
pub mod turtle;
pub mod types;
