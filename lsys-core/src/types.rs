/// A single character in an L-system string.
///
/// Symbols outside the command alphabet below are legal everywhere; the
/// geometry builder skips them and the rewriter copies them through
/// unchanged unless a rule matches.
pub type Symbol = char;

/// Draw-forward command: emit a node and advance the cursor.
pub const DRAW_FORWARD: Symbol = 'F';

/// Turn command: add the configured turn angle to the heading.
pub const TURN_POSITIVE: Symbol = '+';

/// Turn command: subtract the configured turn angle from the heading.
pub const TURN_NEGATIVE: Symbol = '-';

/// Push the cursor onto the branch stack and enter a deeper branch.
pub const PUSH_STATE: Symbol = '[';

/// Pop the branch stack and restore the saved cursor, if any.
pub const POP_STATE: Symbol = ']';
