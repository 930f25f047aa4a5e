//! Demo state - what the frame loop owns and mutates.
//!
//! Everything here is deterministic: the binary feeds it actions and calls
//! `step` and `draw` once per frame. Range limits on speed and aspect ratio
//! are enforced here rather than in `Heart`.

use log::debug;

use crate::arena::BattleBox;
use crate::canvas::Canvas;
use crate::heart::Heart;
use crate::snapshot::StatusSnapshot;
use crate::types::{
    Action, CellPos, ASPECT_RATIO_MAX, ASPECT_RATIO_MIN, ASPECT_RATIO_STEP, BOX_HEIGHT, BOX_WIDTH,
    SPEED_MAX, SPEED_MIN, SPEED_STEP,
};

/// Heart, battle box and the running flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Demo {
    heart: Heart,
    arena: BattleBox,
    running: bool,
}

impl Demo {
    /// Lay out the demo for a terminal of `width` x `height` cells.
    ///
    /// The box is centered and the heart starts at the exact center.
    pub fn new(width: u16, height: u16) -> Self {
        let cx = i32::from(width) / 2;
        let cy = i32::from(height) / 2;
        let origin = CellPos::new(cx - BOX_WIDTH / 2, cy - BOX_HEIGHT / 2);
        Self::with_parts(
            Heart::new(CellPos::new(cx, cy)),
            BattleBox::new(origin, BOX_WIDTH, BOX_HEIGHT),
        )
    }

    pub fn with_parts(heart: Heart, arena: BattleBox) -> Self {
        Self {
            heart,
            arena,
            running: true,
        }
    }

    /// Apply one input action.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.running = false;
            }
            Action::ToggleMotion => {
                self.heart.toggle();
                debug!("motion toggled, moving={}", self.heart.is_moving());
            }
            Action::Steer(dir) => {
                let v = dir.vector();
                self.heart.set_direction(v.x, v.y);
                debug!("steer {}", dir.as_str());
            }
            Action::IncreaseAspectRatio => self.adjust_aspect_ratio(ASPECT_RATIO_STEP),
            Action::DecreaseAspectRatio => self.adjust_aspect_ratio(-ASPECT_RATIO_STEP),
            Action::IncreaseSpeed => self.adjust_speed(SPEED_STEP),
            Action::DecreaseSpeed => self.adjust_speed(-SPEED_STEP),
        }
    }

    /// Change the aspect ratio by `delta`, saturating at its range.
    pub fn adjust_aspect_ratio(&mut self, delta: f32) {
        let ratio = (self.heart.aspect_ratio() + delta).clamp(ASPECT_RATIO_MIN, ASPECT_RATIO_MAX);
        self.heart.set_aspect_ratio(ratio);
        debug!("aspect ratio {:.2}", ratio);
    }

    /// Change the speed by `delta`, saturating at its range.
    pub fn adjust_speed(&mut self, delta: f32) {
        let speed = (self.heart.speed() + delta).clamp(SPEED_MIN, SPEED_MAX);
        self.heart.set_speed(speed);
        debug!("speed {:.2}", speed);
    }

    /// Advance the heart one frame and keep it inside the box.
    pub fn step(&mut self) {
        self.heart.update();
        self.clamp_heart();
    }

    /// Pin the heart to the box interior. Direction and moving flag are kept,
    /// so a heart pushing into a wall stays pinned there frame after frame.
    pub fn clamp_heart(&mut self) {
        let (x, y) = self.arena.interior().clamp(self.heart.x(), self.heart.y());
        if x != self.heart.x() || y != self.heart.y() {
            self.heart.set_position(x, y);
        }
    }

    /// Draw the box (if dirty) and then the heart.
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        self.arena.draw(canvas);
        self.heart.draw(canvas);
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot::from(&self.heart)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn heart(&self) -> &Heart {
        &self.heart
    }

    pub fn heart_mut(&mut self) -> &mut Heart {
        &mut self.heart
    }

    pub fn arena(&self) -> &BattleBox {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut BattleBox {
        &mut self.arena
    }
}
