use thiserror::Error;

/// Errors from the rewriting and geometry-building operations.
///
/// Only caller-supplied parameters can fail validation, and they are
/// rejected before any processing starts. Irregular *inputs* (empty
/// axioms, empty rule tables, unknown symbols, unbalanced brackets) are
/// deliberately not errors: they fall back to identity or no-op handling
/// so a malformed grammar yields a smaller structure instead of aborting
/// a whole scene-population pass.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenError {
    /// A negative iteration count was passed to [`crate::rewriter::expand`].
    #[error("invalid iteration count {iterations}: must be >= 0")]
    InvalidIterationCount { iterations: i32 },

    /// A non-positive base length or thickness in
    /// [`crate::params::DrawParams`].
    #[error("invalid draw parameter {field} = {value}: must be > 0")]
    InvalidDrawParams { field: &'static str, value: f32 },
}
