// World-query seam. The rig asks the scene exactly one question: which
// world point sits under the mouse cursor right now. The answer comes from
// whatever host owns the actual picture of the world.

use nalgebra_glm as glm;

#[derive(Debug, Clone, Copy)]
pub struct CursorHit {
    pub point: glm::Vec3,
}

pub trait SceneQuery {
    /// Synchronous raycast from the cursor into the scene. None when the
    /// cursor is over empty sky or outside the viewport.
    fn raycast_under_cursor(&self) -> Option<CursorHit>;
}

/// Flat-ground demo scene. The session script aims the virtual cursor at a
/// spot on the plane, or off the world entirely.
pub struct GroundPlane {
    pub height: f32,
    cursor_target: Option<glm::Vec2>,
}

impl GroundPlane {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            cursor_target: None,
        }
    }

    pub fn point_cursor_at(&mut self, xy: glm::Vec2) {
        self.cursor_target = Some(xy);
    }

    pub fn move_cursor_off_world(&mut self) {
        self.cursor_target = None;
    }
}

impl SceneQuery for GroundPlane {
    fn raycast_under_cursor(&self) -> Option<CursorHit> {
        self.cursor_target.map(|xy| CursorHit {
            point: glm::vec3(xy.x, xy.y, self.height),
        })
    }
}
