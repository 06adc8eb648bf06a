// Zoom-target bookkeeping and the focus-preserving pan math.
//
// Zooming never moves the live boom directly: input retargets the arm
// length and the per-frame smoothing step chases it. The pan solver runs
// once per zoom-in event and shifts the pawn so the world point under the
// cursor stays put while the boom travels.

use nalgebra_glm as glm;

use crate::curve::FloatCurve;
use crate::settings::ZoomSettings;

/// Zoom axis magnitudes below this are treated as input noise.
pub const ZOOM_AXIS_EPSILON: f32 = 1e-4;

/// Minimum ground-plane distance between pawn and focus point for a pan
/// direction to exist.
const PAN_DIRECTION_EPSILON: f32 = 1e-3;

/// Arm-length target the smoothing step pursues. Always inside the
/// configured zoom range.
#[derive(Debug, Clone, Copy)]
pub struct ZoomTarget {
    length: f32,
}

impl ZoomTarget {
    pub fn new(length: f32, settings: &ZoomSettings) -> Self {
        Self {
            length: length.clamp(settings.min_zoom_length, settings.max_zoom_length),
        }
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Step the target from the live boom arm length. Returns the new
    /// target; noise-level axis values leave it untouched.
    pub fn apply_zoom_delta(
        &mut self,
        live_arm_length: f32,
        axis_value: f32,
        settings: &ZoomSettings,
    ) -> f32 {
        if axis_value.abs() < ZOOM_AXIS_EPSILON {
            return self.length;
        }
        self.length = (live_arm_length - axis_value * settings.zoom_step_amount)
            .clamp(settings.min_zoom_length, settings.max_zoom_length);
        self.length
    }
}

/// Horizontal magnitude of the boom's offset vector once yaw is factored
/// out. Only pitch bends the arm out of the ground plane.
pub fn ground_footprint(arm_length: f32, pitch_degrees: f32) -> f32 {
    arm_length * pitch_degrees.to_radians().cos()
}

/// One zoom-in event's worth of before/after boom geometry. Built when the
/// event fires, used for the pan solve, then discarded.
#[derive(Debug, Clone, Copy)]
pub struct FocusSample {
    pub focus_point: glm::Vec3,
    pub pawn_location: glm::Vec3,
    pub arm_before: f32,
    pub pitch_before: f32,
    pub arm_after: f32,
    pub pitch_after: f32,
}

impl FocusSample {
    /// Capture the what-if geometry for a zoom step: where the boom is now
    /// and where this axis value would send it. Without a curve the pitch
    /// rides along unchanged.
    pub fn capture(
        focus_point: glm::Vec3,
        pawn_location: glm::Vec3,
        arm_before: f32,
        pitch_before: f32,
        axis_value: f32,
        curve: Option<&FloatCurve>,
        settings: &ZoomSettings,
    ) -> Self {
        let arm_after = (arm_before - axis_value * settings.zoom_step_amount)
            .clamp(settings.min_zoom_length, settings.max_zoom_length);
        let pitch_after = match curve {
            Some(curve) => -curve.evaluate(arm_after),
            None => pitch_before,
        };
        Self {
            focus_point,
            pawn_location,
            arm_before,
            pitch_before,
            arm_after,
            pitch_after,
        }
    }

    /// World-space pawn translation that keeps the focus point visually
    /// stationary once the boom reaches its new target. None when the focus
    /// point sits on the pawn's vertical axis: no pan direction exists.
    pub fn solve_pan(&self) -> Option<glm::Vec3> {
        let to_focus = self.focus_point - self.pawn_location;
        let flat = glm::vec3(to_focus.x, to_focus.y, 0.0);
        let distance = glm::length(&flat);
        if distance < PAN_DIRECTION_EPSILON {
            return None;
        }
        let direction = flat / distance;
        let magnitude = ground_footprint(self.arm_before, self.pitch_before)
            - ground_footprint(self.arm_after, self.pitch_after);
        Some(direction * magnitude)
    }
}
