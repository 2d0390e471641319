use crate::error::GenError;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Drawing parameters for the geometry builder.
///
/// These are per-species configuration; a preset loader fills them in
/// from a parameter bundle and [`DrawParams::validate`] guards the two
/// values that must be strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawParams {
    /// Turn angle in degrees added or subtracted per turn symbol.
    pub turn_angle_deg: f32,
    /// Per-depth step length multiplier, in `(0, 1]`.
    pub length_decay: f32,
    /// Per-draw thickness multiplier, in `(0, 1]`.
    pub thickness_decay: f32,
    /// Thickness of the first emitted segment; must be > 0.
    pub base_thickness: f32,
    /// Step length at depth 0; must be > 0.
    pub base_step_len: f32,
    /// Initial heading of the cursor.
    pub base_direction: Vec3,
    /// Axis the accumulated turn angle rotates headings about.
    ///
    /// Turning is tracked as a single scalar angle, so the rotation axis
    /// is explicit configuration rather than implied by the grammar. The
    /// default keeps all geometry in the XY plane.
    pub turn_axis: Vec3,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            turn_angle_deg: 25.7,
            length_decay: 0.7,
            thickness_decay: 0.7,
            base_thickness: 0.5,
            base_step_len: 1.0,
            base_direction: Vec3::Y,
            turn_axis: Vec3::Z,
        }
    }
}

impl DrawParams {
    /// Checks the defensive invariants: `base_step_len` and
    /// `base_thickness` must be strictly positive (NaN fails too).
    pub fn validate(&self) -> Result<(), GenError> {
        if !(self.base_step_len > 0.0) {
            return Err(GenError::InvalidDrawParams {
                field: "base_step_len",
                value: self.base_step_len,
            });
        }
        if !(self.base_thickness > 0.0) {
            return Err(GenError::InvalidDrawParams {
                field: "base_thickness",
                value: self.base_thickness,
            });
        }
        Ok(())
    }

    /// Step length for a draw at the given branch depth:
    /// `base_step_len * length_decay^depth`.
    #[inline]
    pub fn step_len(&self, depth: u32) -> f32 {
        self.base_step_len * self.length_decay.powi(depth as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_validate() {
        assert_eq!(DrawParams::default().validate(), Ok(()));
    }

    #[test]
    fn non_positive_step_len_is_rejected() {
        let params = DrawParams {
            base_step_len: 0.0,
            ..DrawParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(GenError::InvalidDrawParams {
                field: "base_step_len",
                value: 0.0,
            })
        );
    }

    #[test]
    fn negative_thickness_is_rejected() {
        let params = DrawParams {
            base_thickness: -0.5,
            ..DrawParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(GenError::InvalidDrawParams {
                field: "base_thickness",
                value: -0.5,
            })
        );
    }

    #[test]
    fn nan_step_len_is_rejected() {
        let params = DrawParams {
            base_step_len: f32::NAN,
            ..DrawParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn step_len_decays_per_depth() {
        let params = DrawParams {
            base_step_len: 2.0,
            length_decay: 0.5,
            ..DrawParams::default()
        };
        assert_eq!(params.step_len(0), 2.0);
        assert_eq!(params.step_len(1), 1.0);
        assert_eq!(params.step_len(2), 0.5);
    }
}
