// Floating pawn movement: accelerate toward the requested direction while
// input is held, brake to a stop when it ends. Control input accumulates
// between ticks and is consumed whole each frame.

use nalgebra_glm as glm;

use crate::settings::MovementSettings;

pub struct FloatingMovement {
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    velocity: glm::Vec3,
    pending_input: glm::Vec3,
}

impl FloatingMovement {
    pub fn new(settings: &MovementSettings) -> Self {
        Self {
            max_speed: settings.max_speed,
            acceleration: settings.acceleration,
            deceleration: settings.deceleration,
            velocity: glm::Vec3::zeros(),
            pending_input: glm::Vec3::zeros(),
        }
    }

    /// Queue control input for the next tick. Direction is world-space;
    /// scale follows the input-action value.
    pub fn add_input(&mut self, world_direction: glm::Vec3, scale: f32) {
        self.pending_input += world_direction * scale;
    }

    pub fn velocity(&self) -> glm::Vec3 {
        self.velocity
    }

    /// Consume accumulated input and advance `location` by one step.
    pub fn tick(&mut self, delta_time: f32, location: &mut glm::Vec3) {
        let mut input = self.pending_input;
        self.pending_input = glm::Vec3::zeros();

        let input_len = glm::length(&input);
        if input_len > 1.0 {
            input /= input_len;
        }

        if input_len < f32::EPSILON {
            // No control input: brake toward rest.
            let speed = glm::length(&self.velocity);
            if speed > 0.0 {
                let drop = self.deceleration * delta_time;
                self.velocity = if drop >= speed {
                    glm::Vec3::zeros()
                } else {
                    self.velocity * ((speed - drop) / speed)
                };
            }
        } else {
            self.velocity += input * self.acceleration * delta_time;
            let limit = self.max_speed * input_len.min(1.0);
            let speed = glm::length(&self.velocity);
            if speed > limit {
                self.velocity *= limit / speed;
            }
        }

        *location += self.velocity * delta_time;
    }
}
