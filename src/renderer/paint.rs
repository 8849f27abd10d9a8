// Turns the view's retained ShapeCommands into epaint shapes. The
// whole-surface rotation happens here, applied uniformly to every
// command, so the builder's local coordinates stay rotation-free.

use egui::{Painter, Pos2, Stroke};
use nalgebra_glm as glm;

use crate::geom::Angle;
use crate::shape::ShapeCommand;
use crate::view::JittoView;

/// Map a local-space point to screen space: rotate about the local
/// origin, then translate to `origin`.
pub(crate) fn place(origin: Pos2, rotation: Angle, p: &glm::Vec2) -> Pos2 {
    let (sin, cos) = (rotation.sine(), rotation.cosine());
    Pos2::new(
        origin.x + p.x * cos - p.y * sin,
        origin.y + p.x * sin + p.y * cos,
    )
}

/// Paint the view's commands with its local origin at `origin` (screen
/// points).
pub fn paint_view(painter: &Painter, view: &JittoView, origin: Pos2) {
    let rotation = view.rotation();
    for command in view.commands() {
        match command {
            ShapeCommand::Line {
                from,
                to,
                thickness,
                color,
            } => {
                let a = place(origin, rotation, from);
                let b = place(origin, rotation, to);
                painter.line_segment([a, b], Stroke::new(*thickness, *color));
                // epaint strokes have no cap style; a disc at each
                // endpoint gives the round caps.
                let cap = thickness / 2.0;
                painter.circle_filled(a, cap, *color);
                painter.circle_filled(b, cap, *color);
            }
            ShapeCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(place(origin, rotation, center), *radius, *color);
            }
            ShapeCommand::StrokeCircle {
                center,
                radius,
                thickness,
                color,
            } => {
                painter.circle_stroke(
                    place(origin, rotation, center),
                    *radius,
                    Stroke::new(*thickness, *color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn unrotated_points_translate_only() {
        let p = place(Pos2::new(320.0, 240.0), Angle::ZERO, &glm::vec2(-220.0, 0.0));
        assert_close(p.x, 100.0);
        assert_close(p.y, 240.0);
    }

    #[test]
    fn rotation_spins_the_whole_shape() {
        // 90° in y-down screen space sends +x to +y.
        let p = place(
            Pos2::new(0.0, 0.0),
            Angle::degrees(90.0),
            &glm::vec2(100.0, 0.0),
        );
        assert_close(p.x, 0.0);
        assert_close(p.y, 100.0);
    }
}
