// The floating camera pawn: a pivot point in the world carrying the spring
// arm and a movement component. The pawn never ticks itself; the possessing
// controller drives its components each frame.

pub mod boom;
pub mod movement;

pub use boom::CameraBoom;
pub use movement::FloatingMovement;

use nalgebra_glm as glm;

use crate::settings::Settings;

pub struct CameraPawn {
    location: glm::Vec3,
    /// Actor yaw in degrees; mirrors the controller's control yaw.
    pub yaw: f32,
    pub boom: CameraBoom,
    pub movement: FloatingMovement,
}

impl CameraPawn {
    pub fn new(settings: &Settings) -> Self {
        Self::spawn_at(settings, glm::Vec3::zeros())
    }

    pub fn spawn_at(settings: &Settings, location: glm::Vec3) -> Self {
        Self {
            location,
            yaw: 0.0,
            boom: CameraBoom::new(&settings.boom),
            movement: FloatingMovement::new(&settings.movement),
        }
    }

    pub fn location(&self) -> glm::Vec3 {
        self.location
    }

    pub fn add_movement_input(&mut self, world_direction: glm::Vec3, scale: f32) {
        self.movement.add_input(world_direction, scale);
    }

    /// Instantaneous world-space translation, teleport semantics: no sweep,
    /// no interaction with the movement component's velocity.
    pub fn add_world_offset(&mut self, delta: glm::Vec3) {
        self.location += delta;
    }

    pub fn tick_movement(&mut self, delta_time: f32) {
        let Self {
            location, movement, ..
        } = self;
        movement.tick(delta_time, location);
    }

    pub fn tick_boom(&mut self, delta_time: f32) {
        let pivot = self.location;
        let yaw = self.yaw;
        self.boom.tick(delta_time, pivot, yaw);
    }
}
