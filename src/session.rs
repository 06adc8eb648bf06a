// Demo host wiring scene, pawn, and controller together; the stand-in for
// the game mode that spawns both. Frames are fixed-step, and input events
// are always dispatched before the controller tick within a frame.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use nalgebra_glm as glm;

use crate::camera::RigController;
use crate::curve::FloatCurve;
use crate::input::InputEvent;
use crate::pawn::CameraPawn;
use crate::scene::GroundPlane;
use crate::settings::Settings;

pub const FRAME_DT: f32 = 1.0 / 60.0;

pub struct Session {
    scene: GroundPlane,
    pawn: Rc<RefCell<CameraPawn>>,
    controller: RigController,
}

impl Session {
    pub fn new(settings: Settings, pitch_curve: Option<FloatCurve>) -> Self {
        let pawn = Rc::new(RefCell::new(CameraPawn::new(&settings)));
        let mut controller = RigController::new(settings, pitch_curve);
        controller.on_possess(&pawn);
        Self {
            scene: GroundPlane::new(0.0),
            pawn,
            controller,
        }
    }

    pub fn scene_mut(&mut self) -> &mut GroundPlane {
        &mut self.scene
    }

    pub fn pawn(&self) -> &Rc<RefCell<CameraPawn>> {
        &self.pawn
    }

    pub fn controller(&self) -> &RigController {
        &self.controller
    }

    /// Advance one frame: deliver input, then tick.
    pub fn step(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::Move(value) => self.controller.on_move(value),
                InputEvent::Zoom(axis) => self.controller.on_zoom(axis, &self.scene),
                InputEvent::RotateTrigger { pressed, cursor } => {
                    self.controller.on_rotate_trigger(pressed, cursor)
                }
                InputEvent::RotateDelta(delta) => self.controller.on_rotate_delta(delta),
            }
        }
        self.controller.on_tick(FRAME_DT);
    }

    pub fn run_for(&mut self, frames: u32) {
        for _ in 0..frames {
            self.step(&[]);
        }
    }

    fn log_status(&self, label: &str) {
        let pawn = self.pawn.borrow();
        let camera = pawn
            .boom
            .camera_location()
            .unwrap_or_else(|| pawn.boom.desired_camera_location(pawn.location(), pawn.yaw));
        info!(
            "{label}: pivot ({:.1}, {:.1}) yaw {:.1} arm {:.1} (target {:.1}) pitch {:.1} camera ({:.1}, {:.1}, {:.1})",
            pawn.location().x,
            pawn.location().y,
            pawn.yaw,
            pawn.boom.arm_length,
            self.controller.zoom_target_length(),
            pawn.boom.pitch,
            camera.x,
            camera.y,
            camera.z,
        );
    }

    /// Scripted showcase used by the binary: fly across the map, orbit the
    /// camera, then zoom in over a landmark and back out.
    pub fn run_demo(&mut self) {
        self.log_status("spawn");

        // A second of northeast flight, then coast to rest.
        for _ in 0..60 {
            self.step(&[InputEvent::Move(glm::vec2(0.5, 1.0))]);
        }
        self.run_for(90);
        self.log_status("after flight");

        // Hold the rotate gesture and drag a quarter turn.
        self.step(&[InputEvent::RotateTrigger {
            pressed: true,
            cursor: glm::vec2(640.0, 360.0),
        }]);
        for _ in 0..45 {
            self.step(&[InputEvent::RotateDelta(glm::vec2(4.0, 0.0))]);
        }
        self.step(&[InputEvent::RotateTrigger {
            pressed: false,
            cursor: glm::vec2(820.0, 360.0),
        }]);
        self.run_for(60);
        self.log_status("after orbit");

        // Zoom toward a landmark in four notches, letting the boom settle
        // between notches.
        let landmark = glm::vec2(900.0, 400.0);
        self.scene.point_cursor_at(landmark);
        for _ in 0..4 {
            self.step(&[InputEvent::Zoom(1.0)]);
            self.run_for(45);
        }
        self.log_status("zoomed in on landmark");

        // Cursor drifts over the sky; zooming back out never chases it.
        self.scene.move_cursor_off_world();
        for _ in 0..3 {
            self.step(&[InputEvent::Zoom(-1.0)]);
            self.run_for(45);
        }
        self.run_for(120);
        self.log_status("zoomed back out");
    }
}
