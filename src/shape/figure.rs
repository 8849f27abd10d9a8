// Procedural stick-figure geometry. Emits the character for one pose as
// three back-to-front passes (shadow, border, fill), each independently
// toggleable. All coordinates live in a fixed 512-unit local space; the
// caller's scale factor maps them to the final shape size.

use egui::Color32;
use nalgebra_glm as glm;

use crate::geom::{Angle, from_polar};
use crate::pose::Pose;
use crate::shape::{ShapeBuilder, ShapeCommand};

const ARM_LENGTH: f32 = 220.0;
const LEG_LENGTH: f32 = 250.0;
const LEG_ARC_DEGREES: f32 = 38.0;
const EYE_RADIUS: f32 = 72.0;
const PUPIL_RADIUS: f32 = 32.0;
const EYE_BOB: f32 = 40.0;
const BORDER_THICKNESS: f32 = 120.0;
const FILL_THICKNESS: f32 = 60.0;
// Shadow stroke when the border pass is disabled and the shadow peeks
// out around the thinner fill stroke.
const SHADOW_SOLO_THICKNESS: f32 = 64.0;
const OUTLINE_RATIO: f32 = 0.6;

/// Drawing passes, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Border,
    Fill,
}

/// Which passes to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerToggles {
    pub shadow: bool,
    pub border: bool,
    pub fill: bool,
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            shadow: true,
            border: true,
            fill: true,
        }
    }
}

/// Per-pass colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureColors {
    pub shadow: Color32,
    pub border: Color32,
    pub fill: Color32,
}

impl Default for FigureColors {
    fn default() -> Self {
        Self {
            shadow: Color32::BLACK,
            border: Color32::WHITE,
            fill: Color32::from_rgb(0x47, 0x00, 0x9C),
        }
    }
}

/// Build the full command list for `pose` at `scale`.
pub fn build(
    pose: &Pose,
    toggles: LayerToggles,
    colors: &FigureColors,
    scale: f32,
) -> Vec<ShapeCommand> {
    let mut shape = ShapeBuilder::new();
    if toggles.shadow {
        let thickness = if toggles.border {
            BORDER_THICKNESS
        } else {
            SHADOW_SOLO_THICKNESS
        };
        render_layer(
            &mut shape,
            pose,
            Layer::Background,
            colors.shadow,
            thickness,
            glm::vec2(0.0, 20.0),
            scale,
        );
    }
    if toggles.border {
        render_layer(
            &mut shape,
            pose,
            Layer::Border,
            colors.border,
            BORDER_THICKNESS,
            glm::vec2(0.0, 0.0),
            scale,
        );
    }
    if toggles.fill {
        render_layer(
            &mut shape,
            pose,
            Layer::Fill,
            colors.fill,
            FILL_THICKNESS,
            glm::vec2(0.0, 0.0),
            scale,
        );
    }
    shape.finish()
}

/// Eye socket centers for `pose`: fixed base points bobbed vertically by
/// the same-side arm swing.
fn eye_centers(pose: &Pose) -> (glm::Vec2, glm::Vec2) {
    let left = glm::vec2(-100.0, -150.0) - glm::vec2(0.0, pose.left_hand.sine() * EYE_BOB);
    let right = glm::vec2(100.0, -150.0) - glm::vec2(0.0, pose.right_hand.sine() * EYE_BOB);
    (left, right)
}

fn render_layer(
    shape: &mut ShapeBuilder,
    pose: &Pose,
    layer: Layer,
    color: Color32,
    thickness: f32,
    displacement: glm::Vec2,
    scale: f32,
) {
    shape.set_transform(scale, displacement);

    let origin = glm::vec2(0.0, 0.0);
    let leg_arc = Angle::degrees(LEG_ARC_DEGREES);
    let left_arm = from_polar(Angle::degrees(180.0) + pose.left_hand, ARM_LENGTH);
    let right_arm = from_polar(-pose.right_hand, ARM_LENGTH);
    let left_leg = from_polar(Angle::degrees(90.0) - leg_arc * pose.left_leg, LEG_LENGTH);
    let right_leg = from_polar(Angle::degrees(90.0) - leg_arc * pose.right_leg, LEG_LENGTH);

    let stroke = thickness * scale;
    shape.line(origin, right_arm, stroke, color);
    shape.line(origin, left_arm, stroke, color);
    shape.line(origin, left_leg, stroke, color);
    shape.line(origin, right_leg, stroke, color);

    // The shadow pass draws limbs only.
    if layer == Layer::Background {
        return;
    }

    let (left_eye, right_eye) = eye_centers(pose);

    if layer == Layer::Border {
        shape.fill_circle(left_eye, EYE_RADIUS, color);
        shape.fill_circle(right_eye, EYE_RADIUS, color);
    }

    if layer == Layer::Fill {
        // Pupil travel is bounded by the socket: at most 72 - 32 units.
        let travel = EYE_RADIUS - PUPIL_RADIUS;
        let left_pupil = from_polar(pose.left_eye_angle, pose.left_eye_dist * travel);
        let right_pupil = from_polar(pose.right_eye_angle, pose.right_eye_dist * travel);
        shape.fill_circle(left_eye + left_pupil, PUPIL_RADIUS, color);
        shape.fill_circle(right_eye + right_pupil, PUPIL_RADIUS, color);
    }

    let outline = thickness * scale * OUTLINE_RATIO;
    shape.stroke_circle(left_eye, EYE_RADIUS, outline, color);
    shape.stroke_circle(right_eye, EYE_RADIUS, outline, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(toggles: LayerToggles, pose: &Pose, scale: f32) -> Vec<ShapeCommand> {
        build(pose, toggles, &FigureColors::default(), scale)
    }

    const FILL_ONLY: LayerToggles = LayerToggles {
        shadow: false,
        border: false,
        fill: true,
    };
    const SHADOW_ONLY: LayerToggles = LayerToggles {
        shadow: true,
        border: false,
        fill: false,
    };

    #[test]
    fn left_arm_endpoint_at_rest() {
        let commands = only(FILL_ONLY, &Pose::default(), 1.0);
        // Limb order: right arm, left arm, left leg, right leg.
        match &commands[1] {
            ShapeCommand::Line { from, to, .. } => {
                assert_eq!(*from, glm::vec2(0.0, 0.0));
                assert!((to.x - -220.0).abs() < 1e-3, "x was {}", to.x);
                assert!(to.y.abs() < 1e-3, "y was {}", to.y);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rest_legs_swing_opposite_ways() {
        let commands = only(FILL_ONLY, &Pose::default(), 1.0);
        let (left, right) = match (&commands[2], &commands[3]) {
            (ShapeCommand::Line { to: l, .. }, ShapeCommand::Line { to: r, .. }) => (*l, *r),
            other => panic!("unexpected commands {other:?}"),
        };
        // left_leg = -1 swings to 90° + 38°, right_leg = +1 to 90° - 38°;
        // both point downward.
        assert!(left.x < 0.0 && right.x > 0.0);
        assert!(left.y > 0.0 && right.y > 0.0);
        assert!((left.x + right.x).abs() < 1e-3);
    }

    #[test]
    fn pupil_travel_stays_inside_the_socket() {
        for dist in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let pose = Pose {
                left_eye_dist: dist,
                left_eye_angle: Angle::degrees(37.0),
                right_eye_dist: dist,
                right_eye_angle: Angle::degrees(220.0),
                ..Pose::default()
            };
            let commands = only(FILL_ONLY, &pose, 1.0);
            let (left_eye, right_eye) = eye_centers(&pose);
            let pupils: Vec<glm::Vec2> = commands
                .iter()
                .filter_map(|c| match c {
                    ShapeCommand::FillCircle { center, radius, .. }
                        if (*radius - PUPIL_RADIUS).abs() < 1e-3 =>
                    {
                        Some(*center)
                    }
                    _ => None,
                })
                .collect();
            assert_eq!(pupils.len(), 2);
            let bound = dist * (EYE_RADIUS - PUPIL_RADIUS) + 1e-3;
            assert!(glm::length(&(pupils[0] - left_eye)) <= bound);
            assert!(glm::length(&(pupils[1] - right_eye)) <= bound);
        }
    }

    #[test]
    fn eye_bob_follows_the_same_side_arm() {
        let pose = Pose {
            left_hand: Angle::degrees(90.0),
            ..Pose::default()
        };
        let (left_eye, right_eye) = eye_centers(&pose);
        assert!((left_eye.y - (-150.0 - EYE_BOB)).abs() < 1e-3);
        assert!((right_eye.y - -150.0).abs() < 1e-3);
    }

    #[test]
    fn shadow_pass_is_limbs_only_and_displaced() {
        let commands = only(SHADOW_ONLY, &Pose::default(), 1.0);
        assert_eq!(commands.len(), 4);
        for command in &commands {
            match command {
                ShapeCommand::Line { from, thickness, .. } => {
                    assert_eq!(*from, glm::vec2(0.0, 20.0));
                    assert_eq!(*thickness, SHADOW_SOLO_THICKNESS);
                }
                other => panic!("shadow pass emitted {other:?}"),
            }
        }
    }

    #[test]
    fn shadow_thickens_when_the_border_is_drawn() {
        let toggles = LayerToggles {
            shadow: true,
            border: true,
            fill: false,
        };
        let commands = only(toggles, &Pose::default(), 1.0);
        match &commands[0] {
            ShapeCommand::Line { thickness, .. } => assert_eq!(*thickness, BORDER_THICKNESS),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn disabled_layers_emit_nothing() {
        let none = LayerToggles {
            shadow: false,
            border: false,
            fill: false,
        };
        assert!(only(none, &Pose::default(), 1.0).is_empty());
    }

    #[test]
    fn full_build_orders_passes_back_to_front() {
        let commands = only(LayerToggles::default(), &Pose::default(), 1.0);
        // shadow: 4 limbs; border: 4 limbs + 2 socket fills + 2 outlines;
        // fill: 4 limbs + 2 pupils + 2 outlines.
        assert_eq!(commands.len(), 4 + 8 + 8);
        let colors = FigureColors::default();
        match &commands[0] {
            ShapeCommand::Line { color, .. } => assert_eq!(*color, colors.shadow),
            other => panic!("unexpected command {other:?}"),
        }
        match &commands[4] {
            ShapeCommand::Line { color, .. } => assert_eq!(*color, colors.border),
            other => panic!("unexpected command {other:?}"),
        }
        match commands.last().unwrap() {
            ShapeCommand::StrokeCircle { color, .. } => assert_eq!(*color, colors.fill),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rebuilding_the_same_pose_is_idempotent() {
        let pose = Pose {
            left_hand: Angle::degrees(14.0),
            right_hand: Angle::degrees(-10.0),
            left_leg: 0.3,
            ..Pose::default()
        };
        let first = only(LayerToggles::default(), &pose, 0.25);
        let second = only(LayerToggles::default(), &pose, 0.25);
        assert_eq!(first, second);
    }

    #[test]
    fn scale_applies_to_points_and_thickness() {
        let commands = only(FILL_ONLY, &Pose::default(), 0.5);
        match &commands[1] {
            ShapeCommand::Line { to, thickness, .. } => {
                assert!((to.x - -110.0).abs() < 1e-3);
                assert_eq!(*thickness, FILL_THICKNESS * 0.5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
