use crate::geom::Angle;
use crate::pose::Pose;
use crate::view::JittoView;

/// Duration of one demo step, matching the original example scene.
pub const DEMO_STEP_SECONDS: f32 = 0.3;

/// Replays a fixed list of target poses forever: each frame it advances
/// the view's transition and, on the tick a transition completes, starts
/// the next target immediately. Transitions are serialized by
/// construction; the loop never issues an overlapping one.
pub struct PoseLoop {
    targets: Vec<Pose>,
    next: usize,
    step_duration: f32,
}

impl PoseLoop {
    pub fn new(targets: Vec<Pose>, step_duration: f32) -> Self {
        Self {
            targets,
            next: 0,
            step_duration,
        }
    }

    /// The two-pose wave script of the original demo scene.
    pub fn demo() -> Self {
        let wave_right = Pose {
            left_hand: Angle::degrees(14.0),
            right_hand: Angle::degrees(10.0),
            left_leg: 1.0,
            right_leg: -1.0,
            rotation: Angle::degrees(45.0),
            left_eye_dist: 0.0,
            left_eye_angle: Angle::ZERO,
            right_eye_dist: 0.0,
            right_eye_angle: Angle::ZERO,
        };
        let wave_left = Pose {
            left_hand: Angle::degrees(-14.0),
            right_hand: Angle::degrees(-10.0),
            left_leg: -1.0,
            right_leg: 1.0,
            ..Pose::default()
        };
        Self::new(vec![wave_right, wave_left], DEMO_STEP_SECONDS)
    }

    /// Drive `view` by `dt` seconds.
    pub fn advance(&mut self, view: &mut JittoView, dt: f32) {
        if self.targets.is_empty() {
            return;
        }
        if view.transition().is_none() {
            self.start_next(view);
        }
        if view.advance(dt) {
            self.start_next(view);
        }
    }

    fn start_next(&mut self, view: &mut JittoView) {
        let target = self.targets[self.next];
        self.next = (self.next + 1) % self.targets.len();
        view.animate_to(target, self.step_duration);
    }
}
