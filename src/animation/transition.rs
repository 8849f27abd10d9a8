use crate::pose::Pose;

/// A tween from the pose captured at start time toward a target pose
/// over a fixed duration. Advanced once per frame with the elapsed delta
/// time; elapsed time is capped at the duration so the final tick yields
/// exactly the target pose. There is no cancellation: a transition ends
/// only by completing.
#[derive(Debug, Clone)]
pub struct Transition {
    start: Pose,
    target: Pose,
    elapsed: f32,
    duration: f32,
}

impl Transition {
    pub fn new(start: Pose, target: Pose, duration: f32) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    pub fn target(&self) -> &Pose {
        &self.target
    }

    /// Advance by `dt` seconds and return the pose for the new time.
    /// Zero-duration transitions complete on the first call.
    pub fn advance(&mut self, dt: f32) -> Pose {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.is_finished() {
            self.target
        } else {
            Pose::interpolate(&self.start, &self.target, self.elapsed / self.duration)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
