// Spring-arm boom: an arm length plus a pivot-relative rotation, with
// optional positional lag on the camera it carries. Yaw is inherited from
// the pawn; pitch is the boom's own; roll stays fixed at zero.

use nalgebra_glm as glm;

use crate::math::interp_vec3_to;
use crate::settings::BoomSettings;

pub struct CameraBoom {
    pub arm_length: f32,
    /// Relative pitch in degrees; negative pitch looks down at the pivot.
    pub pitch: f32,
    /// Relative yaw in degrees, on top of the pawn's world yaw.
    pub yaw: f32,
    enable_camera_lag: bool,
    camera_lag_speed: f32,
    camera_world: Option<glm::Vec3>,
}

impl CameraBoom {
    pub fn new(settings: &BoomSettings) -> Self {
        Self {
            arm_length: settings.initial_arm_length,
            pitch: settings.initial_pitch,
            yaw: 0.0,
            enable_camera_lag: settings.enable_camera_lag,
            camera_lag_speed: settings.camera_lag_speed,
            camera_world: None,
        }
    }

    /// Unit forward vector of the boom for a given pawn world yaw.
    pub fn forward_vector(&self, world_yaw: f32) -> glm::Vec3 {
        let pitch = self.pitch.to_radians();
        let yaw = (world_yaw + self.yaw).to_radians();
        glm::vec3(pitch.cos() * yaw.cos(), pitch.cos() * yaw.sin(), pitch.sin())
    }

    /// Where the camera wants to sit this frame: behind the pivot along the
    /// boom's view direction.
    pub fn desired_camera_location(&self, pivot: glm::Vec3, world_yaw: f32) -> glm::Vec3 {
        pivot - self.forward_vector(world_yaw) * self.arm_length
    }

    /// Advance the published camera position. With lag enabled the camera
    /// pursues its desired spot; the first tick always snaps.
    pub fn tick(&mut self, delta_time: f32, pivot: glm::Vec3, world_yaw: f32) {
        let desired = self.desired_camera_location(pivot, world_yaw);
        let next = match self.camera_world {
            Some(current) if self.enable_camera_lag => {
                interp_vec3_to(current, desired, delta_time, self.camera_lag_speed)
            }
            _ => desired,
        };
        self.camera_world = Some(next);
    }

    pub fn camera_location(&self) -> Option<glm::Vec3> {
        self.camera_world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::BoomSettings;

    fn boom() -> CameraBoom {
        CameraBoom::new(&BoomSettings::default())
    }

    #[test]
    fn level_boom_offsets_horizontally() {
        let mut boom = boom();
        boom.pitch = 0.0;
        boom.arm_length = 1000.0;
        let camera = boom.desired_camera_location(glm::vec3(0.0, 0.0, 50.0), 0.0);
        assert!((camera.x - -1000.0).abs() < 1e-2);
        assert!(camera.y.abs() < 1e-2);
        assert!((camera.z - 50.0).abs() < 1e-2);
    }

    #[test]
    fn downward_pitch_lifts_the_camera_above_the_pivot() {
        let boom = boom();
        let pivot = glm::vec3(0.0, 0.0, 0.0);
        let camera = boom.desired_camera_location(pivot, 0.0);
        assert!(camera.z > pivot.z);
        // At pitch -45 the horizontal and vertical offsets match.
        let horizontal = glm::length(&glm::vec2(camera.x, camera.y));
        assert!((camera.z - horizontal).abs() < 1.0);
    }

    #[test]
    fn yaw_rotates_the_footprint_without_changing_its_size() {
        let boom = boom();
        let pivot = glm::Vec3::zeros();
        let a = boom.desired_camera_location(pivot, 0.0);
        let b = boom.desired_camera_location(pivot, 135.0);
        let flat_a = glm::length(&glm::vec2(a.x, a.y));
        let flat_b = glm::length(&glm::vec2(b.x, b.y));
        assert!((flat_a - flat_b).abs() < 1e-2);
        assert!((a.z - b.z).abs() < 1e-3);
    }

    #[test]
    fn camera_lag_snaps_first_then_pursues() {
        let mut boom = boom();
        let pivot = glm::Vec3::zeros();
        boom.tick(1.0 / 60.0, pivot, 0.0);
        let settled = boom.camera_location().unwrap();
        assert_eq!(settled, boom.desired_camera_location(pivot, 0.0));

        // Move the pivot; the lagged camera trails behind, then catches up.
        let moved = glm::vec3(500.0, 0.0, 0.0);
        boom.tick(1.0 / 60.0, moved, 0.0);
        let trailing = boom.camera_location().unwrap();
        let desired = boom.desired_camera_location(moved, 0.0);
        assert!(glm::length(&(desired - trailing)) > 1.0);

        for _ in 0..600 {
            boom.tick(1.0 / 60.0, moved, 0.0);
        }
        let caught_up = boom.camera_location().unwrap();
        assert!(glm::length(&(desired - caught_up)) < 0.5);
    }
}
