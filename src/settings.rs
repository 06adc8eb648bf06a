use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoomSettings {
    pub min_zoom_length: f32,
    pub max_zoom_length: f32,
    pub zoom_step_amount: f32,
    pub zoom_interp_speed: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min_zoom_length: 500.0,
            max_zoom_length: 5000.0,
            zoom_step_amount: 200.0,
            zoom_interp_speed: 5.0,
        }
    }
}

impl ZoomSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "zoom").unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationSettings {
    pub rotation_interp_speed: f32,
    /// Degrees of yaw per unit of pointer delta while the gesture is held.
    pub camera_rotation_speed: f32,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            rotation_interp_speed: 5.0,
            camera_rotation_speed: 0.5,
        }
    }
}

impl RotationSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "rotation").unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementSettings {
    /// Multiplier applied to move-action values before they reach the pawn.
    pub camera_move_speed: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            camera_move_speed: 1.0,
            max_speed: 3000.0,
            acceleration: 1500.0,
            deceleration: 3000.0,
        }
    }
}

impl MovementSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "movement").unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoomSettings {
    pub initial_arm_length: f32,
    /// Negative pitch looks down at the pivot.
    pub initial_pitch: f32,
    pub enable_camera_lag: bool,
    pub camera_lag_speed: f32,
}

impl Default for BoomSettings {
    fn default() -> Self {
        Self {
            initial_arm_length: 1500.0,
            initial_pitch: -45.0,
            enable_camera_lag: true,
            camera_lag_speed: 5.0,
        }
    }
}

impl BoomSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "boom").unwrap_or_default()
    }
}

// Aggregate struct for convenience
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub zoom: ZoomSettings,
    pub rotation: RotationSettings,
    pub movement: MovementSettings,
    pub boom: BoomSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            zoom: ZoomSettings::load(),
            rotation: RotationSettings::load(),
            movement: MovementSettings::load(),
            boom: BoomSettings::load(),
        }
    }
}
