//! Turtle-graphics interpretation of expanded L-system strings.
//!
//! A single left-to-right scan drives a cursor ([`TurtleState`]) over the
//! symbol string. Draw-forward symbols emit one [`StructureNode`] each,
//! brackets push and pop the cursor on an explicit stack, and turn
//! symbols accumulate a scalar angle that is folded into the heading at
//! draw time. The bracket structure makes the walk a depth-first
//! traversal of the implicit branch tree encoded by the string.

use crate::{
    error::GenError,
    params::DrawParams,
    turtle::{Bounds, StructureNode, TurtleState},
    types,
};
use glam::{Quat, Vec3};

/// A generated branching structure: the emitted nodes in processing
/// order plus their spatial bounds.
///
/// Owned exclusively by the caller; nothing is shared or retained
/// between [`build`] calls.
#[derive(Clone, Debug)]
pub struct Structure {
    pub nodes: Vec<StructureNode>,
    pub bounds: Bounds,
}

/// Interprets `symbols` as turtle-graphics commands and synthesizes a
/// branching structure.
///
/// The cursor starts at the origin with the configured base direction,
/// base thickness, and depth 0. For each symbol:
///
/// 1. Draw-forward: emit a node at the pre-move position with the
///    current heading, thickness, and depth; advance by
///    [`DrawParams::step_len`] for the current depth; multiply thickness
///    by `thickness_decay` (once per draw, regardless of depth).
/// 2. Turn-positive / turn-negative: add / subtract `turn_angle_deg` to
///    the accumulated angle. The angle is applied to the heading by
///    rotating `dir` about `turn_axis`; it is not part of the pushed
///    cursor, so a pop does not rewind turns.
/// 3. Push-state: copy the cursor onto the branch stack, then increment
///    depth.
/// 4. Pop-state: restore the most recently pushed cursor; popping an
///    empty stack is a no-op.
/// 5. Anything else is skipped, so grammars may carry decorative
///    symbols.
///
/// Scanning stops permanently the moment the cursor depth exceeds
/// `max_depth`, even if later pops would bring it back under the cap.
///
/// ### Parameters
/// - `symbols` - Expanded symbol string to interpret.
/// - `params` - Drawing parameters; validated before any processing.
/// - `max_depth` - Hard cap on branch nesting depth.
///
/// ### Returns
/// The emitted nodes and their bounds, or
/// [`GenError::InvalidDrawParams`] when `params` fails validation. An
/// empty or command-free string yields zero nodes and degenerate bounds.
pub fn build(symbols: &str, params: &DrawParams, max_depth: u32) -> Result<Structure, GenError> {
    params.validate()?;

    let mut cursor = TurtleState {
        pos: Vec3::ZERO,
        dir: params.base_direction.normalize_or(Vec3::Y),
        thickness: params.base_thickness,
        depth: 0,
    };
    let turn_axis = params.turn_axis.normalize_or(Vec3::Z);
    let mut current_angle = 0.0_f32;
    let mut stack: Vec<TurtleState> = Vec::with_capacity(16);
    let mut nodes: Vec<StructureNode> = Vec::new();

    for symbol in symbols.chars() {
        // Hard depth cutoff: once tripped, the rest of the string is
        // dropped.
        if cursor.depth > max_depth {
            break;
        }

        match symbol {
            types::DRAW_FORWARD => {
                let heading =
                    Quat::from_axis_angle(turn_axis, current_angle.to_radians()) * cursor.dir;
                nodes.push(StructureNode {
                    pos: cursor.pos,
                    dir: heading,
                    thickness: cursor.thickness,
                    depth: cursor.depth,
                });
                cursor.pos += heading * params.step_len(cursor.depth);
                cursor.thickness *= params.thickness_decay;
            }
            types::TURN_POSITIVE => current_angle += params.turn_angle_deg,
            types::TURN_NEGATIVE => current_angle -= params.turn_angle_deg,
            types::PUSH_STATE => {
                stack.push(cursor);
                cursor.depth += 1;
            }
            types::POP_STATE => {
                // Excess pops are no-ops.
                if let Some(saved) = stack.pop() {
                    cursor = saved;
                }
            }
            _ => {}
        }
    }

    let bounds = Bounds::of_nodes(&nodes);
    tracing::debug!(nodes = nodes.len(), "built structure");
    Ok(Structure { nodes, bounds })
}
