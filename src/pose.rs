// The Jitto pose model: nine parameters describing limb swing, eye gaze
// and whole-body rotation at one instant. A pose is a plain value;
// animation produces new poses via interpolation instead of mutating.

use crate::geom::{Angle, lerp_f32};

/// One pose of the character.
///
/// `left_leg`/`right_leg` are swing factors in [-1, 1] (multiplied by the
/// 38° leg arc when drawn). `left_eye_dist`/`right_eye_dist` are pupil
/// offsets in [0, 1] as a fraction of the available travel inside the
/// eye socket; the matching `*_eye_angle` gives the offset direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub left_hand: Angle,
    pub right_hand: Angle,
    pub left_leg: f32,
    pub right_leg: f32,
    pub rotation: Angle,
    pub left_eye_dist: f32,
    pub left_eye_angle: Angle,
    pub right_eye_dist: f32,
    pub right_eye_angle: Angle,
}

impl Default for Pose {
    /// The rest pose the character starts in.
    fn default() -> Self {
        Self {
            left_hand: Angle::ZERO,
            right_hand: Angle::ZERO,
            left_leg: -1.0,
            right_leg: 1.0,
            rotation: Angle::ZERO,
            left_eye_dist: 0.75,
            left_eye_angle: Angle::degrees(90.0),
            right_eye_dist: 0.75,
            right_eye_angle: Angle::degrees(90.0),
        }
    }
}

impl Pose {
    /// Field-wise interpolation from `a` to `b`. Angles travel along the
    /// shorter arc, scalars linearly; ratio 0 yields `a`, ratio 1 yields
    /// `b`, ratios outside [0, 1] extrapolate. Pure and deterministic.
    pub fn interpolate(a: &Pose, b: &Pose, ratio: f32) -> Pose {
        Pose {
            left_hand: a.left_hand.lerp(b.left_hand, ratio),
            right_hand: a.right_hand.lerp(b.right_hand, ratio),
            left_leg: lerp_f32(a.left_leg, b.left_leg, ratio),
            right_leg: lerp_f32(a.right_leg, b.right_leg, ratio),
            rotation: a.rotation.lerp(b.rotation, ratio),
            left_eye_dist: lerp_f32(a.left_eye_dist, b.left_eye_dist, ratio),
            left_eye_angle: a.left_eye_angle.lerp(b.left_eye_angle, ratio),
            right_eye_dist: lerp_f32(a.right_eye_dist, b.right_eye_dist, ratio),
            right_eye_angle: a.right_eye_angle.lerp(b.right_eye_angle, ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_a() -> Pose {
        Pose {
            left_hand: Angle::degrees(-14.0),
            right_hand: Angle::degrees(-10.0),
            left_leg: -1.0,
            right_leg: 1.0,
            rotation: Angle::degrees(350.0),
            left_eye_dist: 0.25,
            left_eye_angle: Angle::degrees(45.0),
            right_eye_dist: 1.0,
            right_eye_angle: Angle::degrees(-90.0),
        }
    }

    fn sample_b() -> Pose {
        Pose {
            left_hand: Angle::degrees(14.0),
            right_hand: Angle::degrees(10.0),
            left_leg: 1.0,
            right_leg: -1.0,
            rotation: Angle::degrees(10.0),
            left_eye_dist: 0.75,
            left_eye_angle: Angle::degrees(90.0),
            right_eye_dist: 0.0,
            right_eye_angle: Angle::degrees(0.0),
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ratio_zero_yields_the_start_pose() {
        let a = sample_a();
        let b = sample_b();
        assert_eq!(Pose::interpolate(&a, &b, 0.0), a);
    }

    #[test]
    fn ratio_one_yields_the_target_pose() {
        let a = sample_a();
        let b = sample_b();
        let out = Pose::interpolate(&a, &b, 1.0);
        assert_close(out.left_leg, b.left_leg);
        assert_close(out.right_leg, b.right_leg);
        assert_close(out.left_eye_dist, b.left_eye_dist);
        assert_close(out.right_eye_dist, b.right_eye_dist);
        // Angles land on the same direction; the raw value may differ by
        // a full turn when the shorter arc crossed the 0° seam.
        let rot = (out.rotation.normalized() - b.rotation.normalized())
            .to_degrees()
            .abs();
        assert!(rot < 1e-3 || (360.0 - rot) < 1e-3, "rotation off by {rot}");
        assert_close(out.left_hand.to_degrees(), b.left_hand.to_degrees());
    }

    #[test]
    fn scalar_fields_follow_the_linear_formula() {
        let a = sample_a();
        let b = sample_b();
        for ratio in [-0.5, 0.0, 0.25, 0.5, 0.75, 1.0, 1.5] {
            let out = Pose::interpolate(&a, &b, ratio);
            assert_close(out.left_leg, a.left_leg + ratio * (b.left_leg - a.left_leg));
            assert_close(
                out.right_leg,
                a.right_leg + ratio * (b.right_leg - a.right_leg),
            );
            assert_close(
                out.left_eye_dist,
                a.left_eye_dist + ratio * (b.left_eye_dist - a.left_eye_dist),
            );
            assert_close(
                out.right_eye_dist,
                a.right_eye_dist + ratio * (b.right_eye_dist - a.right_eye_dist),
            );
        }
    }

    #[test]
    fn rotation_crosses_the_seam_along_the_shorter_arc() {
        let out = Pose::interpolate(&sample_a(), &sample_b(), 0.5);
        let rot = out.rotation.normalized().to_degrees();
        assert!(rot < 1e-3 || (360.0 - rot) < 1e-3, "rotation was {rot}");
    }

    #[test]
    fn interpolation_is_deterministic() {
        let a = sample_a();
        let b = sample_b();
        assert_eq!(
            Pose::interpolate(&a, &b, 0.37),
            Pose::interpolate(&a, &b, 0.37)
        );
    }

    #[test]
    fn halfway_between_rest_and_wave() {
        let rest = Pose::default();
        let wave = Pose {
            left_hand: Angle::degrees(10.0),
            right_hand: Angle::degrees(-10.0),
            left_leg: 1.0,
            right_leg: -1.0,
            rotation: Angle::degrees(90.0),
            ..Pose::default()
        };
        let mid = Pose::interpolate(&rest, &wave, 0.5);
        assert_close(mid.left_hand.to_degrees(), 5.0);
        assert_close(mid.right_hand.to_degrees(), -5.0);
        assert_close(mid.left_leg, 0.0);
        assert_close(mid.right_leg, 0.0);
        assert_close(mid.rotation.to_degrees(), 45.0);
    }
}
