use crate::heart::Heart;
use crate::types::Vec2;

/// Read-only view of the values shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusSnapshot {
    pub moving: bool,
    pub direction: Vec2,
    pub aspect_ratio: f32,
    pub speed: f32,
    pub position: Vec2,
}

impl From<&Heart> for StatusSnapshot {
    fn from(heart: &Heart) -> Self {
        Self {
            moving: heart.is_moving(),
            direction: heart.direction(),
            aspect_ratio: heart.aspect_ratio(),
            speed: heart.speed(),
            position: heart.position(),
        }
    }
}

impl StatusSnapshot {
    /// One-line summary, e.g.
    /// `moving  dir (+0.00,-1.00)  aspect 2.0  speed 0.30  pos (40.0,11.1)`.
    pub fn line(&self) -> String {
        format!(
            "{}  dir ({:+.2},{:+.2})  aspect {:.1}  speed {:.2}  pos ({:.1},{:.1})",
            if self.moving { "moving " } else { "stopped" },
            self.direction.x,
            self.direction.y,
            self.aspect_ratio,
            self.speed,
            self.position.x,
            self.position.y,
        )
    }
}
