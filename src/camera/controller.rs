// Player-side camera controller. Owns the zoom target, the control yaw, and
// the rotation gesture; drives the possessed pawn's components once per
// frame and turns discrete input events into camera motion.
//
// The pawn reference is weak and re-resolved on every call: losing the pawn
// downgrades every operation to a logged no-op rather than an error.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, error, trace};
use nalgebra_glm as glm;

use crate::camera::zoom::{FocusSample, ZOOM_AXIS_EPSILON, ZoomTarget};
use crate::curve::FloatCurve;
use crate::math::{interp_angle_to, interp_to, normalize_angle};
use crate::pawn::CameraPawn;
use crate::scene::SceneQuery;
use crate::settings::Settings;

/// Frames between verbose status log lines.
const STATUS_LOG_INTERVAL: u64 = 120;

/// Pointer deltas below this length are discarded as noise.
const POINTER_DELTA_EPSILON: f32 = 1e-4;

/// Orbit-rotation gesture. Pointer deltas only become yaw input while the
/// gesture button is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotateGesture {
    Idle,
    Rotating { anchor: glm::Vec2 },
}

pub struct RigController {
    settings: Settings,
    pitch_curve: Option<FloatCurve>,
    pawn: Weak<RefCell<CameraPawn>>,
    zoom_target: ZoomTarget,
    control_yaw: f32,
    gesture: RotateGesture,
    frame: u64,
}

impl RigController {
    pub fn new(settings: Settings, pitch_curve: Option<FloatCurve>) -> Self {
        let zoom_target = ZoomTarget::new(settings.boom.initial_arm_length, &settings.zoom);
        Self {
            settings,
            pitch_curve,
            pawn: Weak::new(),
            zoom_target,
            control_yaw: 0.0,
            gesture: RotateGesture::Idle,
            frame: 0,
        }
    }

    pub fn control_yaw(&self) -> f32 {
        self.control_yaw
    }

    pub fn zoom_target_length(&self) -> f32 {
        self.zoom_target.length()
    }

    pub fn gesture(&self) -> RotateGesture {
        self.gesture
    }

    /// Take control of a pawn: cache a weak reference, pull the zoom target
    /// into the configured range, and snap the boom pitch onto the curve.
    pub fn on_possess(&mut self, pawn: &Rc<RefCell<CameraPawn>>) {
        self.pawn = Rc::downgrade(pawn);
        let mut pawn = pawn.borrow_mut();
        self.zoom_target = ZoomTarget::new(pawn.boom.arm_length, &self.settings.zoom);
        if let Some(curve) = &self.pitch_curve {
            pawn.boom.pitch = -curve.evaluate(self.zoom_target.length());
        }
        self.control_yaw = normalize_angle(pawn.yaw);
        debug!(
            "possessed camera pawn at {:?} (target arm length {:.1})",
            pawn.location(),
            self.zoom_target.length()
        );
    }

    pub fn on_unpossess(&mut self) {
        self.pawn = Weak::new();
        debug!("camera pawn released");
    }

    /// Per-frame update. Safe to call without a possessed pawn.
    pub fn on_tick(&mut self, delta_time: f32) {
        self.frame += 1;
        let Some(pawn) = self.pawn.upgrade() else {
            if self.frame % STATUS_LOG_INTERVAL == 0 {
                error!("tick without a possessed pawn; camera update skipped");
            }
            return;
        };
        let mut pawn = pawn.borrow_mut();

        // The pawn's actor yaw follows control yaw; the boom inherits it.
        pawn.yaw = self.control_yaw;
        pawn.tick_movement(delta_time);
        self.update_zoom_and_pitch(&mut pawn, delta_time);
        pawn.tick_boom(delta_time);

        if self.frame % STATUS_LOG_INTERVAL == 0 {
            trace!(
                "frame {}: pivot {:?} yaw {:.1} arm {:.1} (target {:.1}) pitch {:.1}",
                self.frame,
                pawn.location(),
                pawn.yaw,
                pawn.boom.arm_length,
                self.zoom_target.length(),
                pawn.boom.pitch
            );
        }
    }

    /// Smoothing step: the live arm length chases the target, and the pitch
    /// chases the curve's value for the arm length it just reached.
    fn update_zoom_and_pitch(&mut self, pawn: &mut CameraPawn, delta_time: f32) {
        let boom = &mut pawn.boom;
        boom.arm_length = interp_to(
            boom.arm_length,
            self.zoom_target.length(),
            delta_time,
            self.settings.zoom.zoom_interp_speed,
        );
        if let Some(curve) = &self.pitch_curve {
            let desired_pitch = -curve.evaluate(boom.arm_length);
            boom.pitch = interp_angle_to(
                boom.pitch,
                desired_pitch,
                delta_time,
                self.settings.rotation.rotation_interp_speed,
            );
        }
    }

    /// Move input in the camera's yaw frame: `value.y` forward, `value.x`
    /// to the right.
    pub fn on_move(&mut self, value: glm::Vec2) {
        let Some(pawn) = self.pawn.upgrade() else {
            return;
        };
        let mut pawn = pawn.borrow_mut();

        let yaw = self.control_yaw.to_radians();
        let forward = glm::vec3(yaw.cos(), yaw.sin(), 0.0);
        let right = glm::cross(&forward, &glm::vec3(0.0, 0.0, 1.0));
        let speed = self.settings.movement.camera_move_speed;
        pawn.add_movement_input(forward, value.y * speed);
        pawn.add_movement_input(right, value.x * speed);
        trace!("move input {:?}", value);
    }

    /// Zoom input. Positive values zoom in and pan the pawn so the point
    /// under the cursor stays fixed; negative values only retarget the arm
    /// length. Zooming out never chases the cursor.
    pub fn on_zoom(&mut self, axis_value: f32, scene: &dyn SceneQuery) {
        if axis_value.abs() < ZOOM_AXIS_EPSILON {
            return;
        }
        let Some(pawn) = self.pawn.upgrade() else {
            return;
        };
        let mut pawn = pawn.borrow_mut();

        if axis_value > 0.0 {
            match scene.raycast_under_cursor() {
                Some(hit) => {
                    let sample = FocusSample::capture(
                        hit.point,
                        pawn.location(),
                        pawn.boom.arm_length,
                        pawn.boom.pitch,
                        axis_value,
                        self.pitch_curve.as_ref(),
                        &self.settings.zoom,
                    );
                    match sample.solve_pan() {
                        Some(offset) => {
                            pawn.add_world_offset(offset);
                            debug!(
                                "zoom focus pan {:?} toward {:?} (arm {:.1} -> {:.1})",
                                offset, sample.focus_point, sample.arm_before, sample.arm_after
                            );
                        }
                        None => trace!("focus point above the pivot; pan skipped"),
                    }
                }
                None => trace!("no cursor hit; zoom-in without pan"),
            }
        }

        let new_target =
            self.zoom_target
                .apply_zoom_delta(pawn.boom.arm_length, axis_value, &self.settings.zoom);
        debug!("zoom axis {:+.2} -> target arm length {:.1}", axis_value, new_target);
    }

    /// Rotation gesture edge. Pressing records the cursor anchor; releasing
    /// drops back to idle.
    pub fn on_rotate_trigger(&mut self, pressed: bool, cursor: glm::Vec2) {
        if pressed {
            debug!("rotation started at cursor {:?}", cursor);
            self.gesture = RotateGesture::Rotating { anchor: cursor };
        } else {
            if let RotateGesture::Rotating { anchor } = self.gesture {
                debug!("rotation ended (pressed at {:?}, released at {:?})", anchor, cursor);
            }
            self.gesture = RotateGesture::Idle;
        }
    }

    /// Pointer delta while the rotation gesture is held becomes yaw input.
    pub fn on_rotate_delta(&mut self, delta: glm::Vec2) {
        if !matches!(self.gesture, RotateGesture::Rotating { .. }) {
            return;
        }
        if glm::length(&delta) < POINTER_DELTA_EPSILON {
            return;
        }
        self.control_yaw = normalize_angle(
            self.control_yaw + delta.x * self.settings.rotation.camera_rotation_speed,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::CursorHit;

    const DT: f32 = 1.0 / 60.0;

    struct StubScene(Option<glm::Vec3>);

    impl SceneQuery for StubScene {
        fn raycast_under_cursor(&self) -> Option<CursorHit> {
            self.0.map(|point| CursorHit { point })
        }
    }

    fn pitch_curve() -> FloatCurve {
        FloatCurve::from_keys([(500.0, 25.0), (1300.0, 40.0), (1500.0, 45.0), (5000.0, 75.0)])
            .unwrap()
    }

    fn rig(curve: Option<FloatCurve>) -> (RigController, Rc<RefCell<CameraPawn>>) {
        let settings = Settings::default();
        let pawn = Rc::new(RefCell::new(CameraPawn::new(&settings)));
        let mut controller = RigController::new(settings, curve);
        controller.on_possess(&pawn);
        (controller, pawn)
    }

    #[test]
    fn possess_clamps_the_target_and_snaps_pitch_onto_the_curve() {
        let settings = Settings::default();
        let pawn = Rc::new(RefCell::new(CameraPawn::new(&settings)));
        pawn.borrow_mut().boom.arm_length = 9000.0;
        pawn.borrow_mut().boom.pitch = 0.0;

        let mut controller = RigController::new(settings, Some(pitch_curve()));
        controller.on_possess(&pawn);

        assert_eq!(controller.zoom_target_length(), 5000.0);
        assert!((pawn.borrow().boom.pitch - -75.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_in_pans_the_pawn_toward_the_focus_point() {
        let (mut controller, pawn) = rig(Some(pitch_curve()));
        let scene = StubScene(Some(glm::vec3(1000.0, 0.0, 0.0)));

        controller.on_zoom(1.0, &scene);

        let location = pawn.borrow().location();
        let expected = 1500.0 * 45f32.to_radians().cos() - 1300.0 * 40f32.to_radians().cos();
        assert!((location.x - expected).abs() < 1e-3);
        assert_eq!(controller.zoom_target_length(), 1300.0);
    }

    #[test]
    fn zoom_out_never_pans_even_with_a_cursor_hit() {
        let (mut controller, pawn) = rig(Some(pitch_curve()));
        let scene = StubScene(Some(glm::vec3(1000.0, 0.0, 0.0)));

        controller.on_zoom(-1.0, &scene);

        assert_eq!(pawn.borrow().location(), glm::Vec3::zeros());
        assert_eq!(controller.zoom_target_length(), 1700.0);
    }

    #[test]
    fn zoom_in_without_a_hit_still_retargets() {
        let (mut controller, pawn) = rig(Some(pitch_curve()));
        let scene = StubScene(None);

        controller.on_zoom(1.0, &scene);

        assert_eq!(pawn.borrow().location(), glm::Vec3::zeros());
        assert_eq!(controller.zoom_target_length(), 1300.0);
    }

    #[test]
    fn noise_level_zoom_axis_changes_nothing() {
        let (mut controller, pawn) = rig(None);
        let scene = StubScene(Some(glm::vec3(1000.0, 0.0, 0.0)));

        controller.on_zoom(5e-5, &scene);

        assert_eq!(controller.zoom_target_length(), 1500.0);
        assert_eq!(pawn.borrow().location(), glm::Vec3::zeros());
    }

    #[test]
    fn smoothing_converges_arm_and_pitch_onto_the_curve() {
        let (mut controller, pawn) = rig(Some(pitch_curve()));
        let scene = StubScene(None);
        controller.on_zoom(1.0, &scene);

        // Four simulated seconds at interp speed 5 settles well within epsilon.
        for _ in 0..240 {
            controller.on_tick(DT);
        }
        let pawn = pawn.borrow();
        assert!((pawn.boom.arm_length - 1300.0).abs() < 0.5);
        assert!((pawn.boom.pitch - -40.0).abs() < 0.1);
    }

    #[test]
    fn without_a_curve_pitch_holds_steady() {
        let (mut controller, pawn) = rig(None);
        let scene = StubScene(None);
        controller.on_zoom(1.0, &scene);
        for _ in 0..240 {
            controller.on_tick(DT);
        }
        assert_eq!(pawn.borrow().boom.pitch, -45.0);
        assert!((pawn.borrow().boom.arm_length - 1300.0).abs() < 0.5);
    }

    #[test]
    fn rotation_gesture_gates_pointer_deltas() {
        let (mut controller, _pawn) = rig(None);

        // Deltas while idle do nothing.
        controller.on_rotate_delta(glm::vec2(40.0, 0.0));
        assert_eq!(controller.control_yaw(), 0.0);

        controller.on_rotate_trigger(true, glm::vec2(640.0, 360.0));
        assert_eq!(
            controller.gesture(),
            RotateGesture::Rotating { anchor: glm::vec2(640.0, 360.0) }
        );

        controller.on_rotate_delta(glm::vec2(40.0, 0.0));
        assert!((controller.control_yaw() - 20.0).abs() < 1e-3);

        // Zero delta is a no-op, not an error.
        controller.on_rotate_delta(glm::vec2(0.0, 0.0));
        assert!((controller.control_yaw() - 20.0).abs() < 1e-3);

        controller.on_rotate_trigger(false, glm::vec2(700.0, 360.0));
        assert_eq!(controller.gesture(), RotateGesture::Idle);
        controller.on_rotate_delta(glm::vec2(40.0, 0.0));
        assert!((controller.control_yaw() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn control_yaw_reaches_the_pawn_on_tick() {
        let (mut controller, pawn) = rig(None);
        controller.on_rotate_trigger(true, glm::Vec2::zeros());
        controller.on_rotate_delta(glm::vec2(90.0, 0.0));
        controller.on_tick(DT);
        assert!((pawn.borrow().yaw - 45.0).abs() < 1e-3);
    }

    #[test]
    fn move_input_runs_along_the_control_yaw_frame() {
        let (mut controller, pawn) = rig(None);
        // Face +Y, then push forward.
        controller.on_rotate_trigger(true, glm::Vec2::zeros());
        controller.on_rotate_delta(glm::vec2(180.0, 0.0));
        controller.on_move(glm::vec2(0.0, 1.0));
        controller.on_tick(DT);

        let location = pawn.borrow().location();
        assert!(location.y > 0.0);
        assert!(location.x.abs() < location.y * 1e-3);
    }

    #[test]
    fn everything_is_a_no_op_without_a_pawn() {
        let settings = Settings::default();
        let mut controller = RigController::new(settings, None);
        let scene = StubScene(Some(glm::vec3(1.0, 0.0, 0.0)));

        // None of these may panic or change the target.
        controller.on_tick(DT);
        controller.on_move(glm::vec2(1.0, 1.0));
        controller.on_zoom(1.0, &scene);
        assert_eq!(controller.zoom_target_length(), 1500.0);
    }

    #[test]
    fn unpossess_drops_back_to_no_ops() {
        let (mut controller, pawn) = rig(None);
        controller.on_unpossess();
        let scene = StubScene(Some(glm::vec3(1000.0, 0.0, 0.0)));
        controller.on_zoom(1.0, &scene);
        assert_eq!(pawn.borrow().location(), glm::Vec3::zeros());
        assert_eq!(controller.zoom_target_length(), 1500.0);
    }
}
