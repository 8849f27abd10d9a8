// Retained vector-path commands. The view rebuilds a command list from
// its pose and the renderer turns the commands into epaint shapes; the
// commands themselves stay painter-agnostic so geometry is testable.

pub mod figure;

use egui::Color32;
use nalgebra_glm as glm;

/// One drawing primitive in local shape space. All strokes have round
/// caps.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeCommand {
    /// Straight stroke from `from` to `to`.
    Line {
        from: glm::Vec2,
        to: glm::Vec2,
        thickness: f32,
        color: Color32,
    },
    /// Filled disc.
    FillCircle {
        center: glm::Vec2,
        radius: f32,
        color: Color32,
    },
    /// Circle outline.
    StrokeCircle {
        center: glm::Vec2,
        radius: f32,
        thickness: f32,
        color: Color32,
    },
}

/// Scale-then-translate transform applied to every pushed coordinate:
/// `p -> (p + displacement) * scale`. Thickness is the caller's concern
/// and is passed through untouched.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub scale: f32,
    pub displacement: glm::Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            displacement: glm::vec2(0.0, 0.0),
        }
    }
}

impl Transform {
    fn apply(&self, p: glm::Vec2) -> glm::Vec2 {
        (p + self.displacement) * self.scale
    }

    fn apply_len(&self, len: f32) -> f32 {
        len * self.scale
    }
}

/// Accumulates [`ShapeCommand`]s under the current transform.
#[derive(Debug, Default)]
pub struct ShapeBuilder {
    commands: Vec<ShapeCommand>,
    transform: Transform,
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_transform(&mut self, scale: f32, displacement: glm::Vec2) {
        self.transform = Transform {
            scale,
            displacement,
        };
    }

    pub fn line(&mut self, from: glm::Vec2, to: glm::Vec2, thickness: f32, color: Color32) {
        self.commands.push(ShapeCommand::Line {
            from: self.transform.apply(from),
            to: self.transform.apply(to),
            thickness,
            color,
        });
    }

    pub fn fill_circle(&mut self, center: glm::Vec2, radius: f32, color: Color32) {
        self.commands.push(ShapeCommand::FillCircle {
            center: self.transform.apply(center),
            radius: self.transform.apply_len(radius),
            color,
        });
    }

    pub fn stroke_circle(
        &mut self,
        center: glm::Vec2,
        radius: f32,
        thickness: f32,
        color: Color32,
    ) {
        self.commands.push(ShapeCommand::StrokeCircle {
            center: self.transform.apply(center),
            radius: self.transform.apply_len(radius),
            thickness,
            color,
        });
    }

    pub fn finish(self) -> Vec<ShapeCommand> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_scales_after_translating() {
        let mut builder = ShapeBuilder::new();
        builder.set_transform(0.5, glm::vec2(0.0, 20.0));
        builder.line(glm::vec2(0.0, 0.0), glm::vec2(-220.0, 0.0), 60.0, Color32::BLACK);
        let commands = builder.finish();
        match &commands[0] {
            ShapeCommand::Line {
                from,
                to,
                thickness,
                ..
            } => {
                assert_eq!(*from, glm::vec2(0.0, 10.0));
                assert_eq!(*to, glm::vec2(-110.0, 10.0));
                // Thickness is pre-scaled by the caller, not the builder.
                assert_eq!(*thickness, 60.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn circle_radius_scales() {
        let mut builder = ShapeBuilder::new();
        builder.set_transform(2.0, glm::vec2(0.0, 0.0));
        builder.fill_circle(glm::vec2(-100.0, -150.0), 72.0, Color32::WHITE);
        match &builder.finish()[0] {
            ShapeCommand::FillCircle { center, radius, .. } => {
                assert_eq!(*center, glm::vec2(-200.0, -300.0));
                assert_eq!(*radius, 144.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
