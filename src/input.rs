// Discrete input-action payloads delivered by the host. Mapping raw devices
// onto these actions happens outside the rig; by the time an event reaches
// the controller it is already a resolved value.

use nalgebra_glm as glm;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Planar move request: x is right, y is forward, conventionally in [-1, 1].
    Move(glm::Vec2),
    /// Signed zoom axis; positive zooms in.
    Zoom(f32),
    /// Rotation gesture edge, with the cursor position at press/release.
    RotateTrigger { pressed: bool, cursor: glm::Vec2 },
    /// Pointer delta, meaningful only while the rotation gesture is held.
    RotateDelta(glm::Vec2),
}
