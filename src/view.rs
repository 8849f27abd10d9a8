// The character view: current pose plus retained draw commands. Every
// pose or scale mutation goes through a setter that reassigns and then
// rebuilds the command list, so the geometry is never stale.

use crate::animation::Transition;
use crate::geom::Angle;
use crate::pose::Pose;
use crate::shape::ShapeCommand;
use crate::shape::figure::{self, FigureColors, LayerToggles};

/// Side length of the local coordinate space the figure is authored in.
pub const BASE_SIDE: f32 = 512.0;

pub struct JittoView {
    model: Pose,
    shape_side: f32,
    toggles: LayerToggles,
    colors: FigureColors,
    commands: Vec<ShapeCommand>,
    transition: Option<Transition>,
}

impl JittoView {
    pub fn new(shape_side: f32) -> Self {
        let mut view = Self {
            model: Pose::default(),
            shape_side,
            toggles: LayerToggles::default(),
            colors: FigureColors::default(),
            commands: Vec::new(),
            transition: None,
        };
        view.refresh();
        view
    }

    pub fn model(&self) -> &Pose {
        &self.model
    }

    pub fn set_model(&mut self, pose: Pose) {
        self.model = pose;
        self.refresh();
    }

    pub fn set_shape_side(&mut self, side: f32) {
        self.shape_side = side;
        self.refresh();
    }

    pub fn set_toggles(&mut self, toggles: LayerToggles) {
        self.toggles = toggles;
        self.refresh();
    }

    pub fn set_colors(&mut self, colors: FigureColors) {
        self.colors = colors;
        self.refresh();
    }

    pub fn shape_scale(&self) -> f32 {
        self.shape_side / BASE_SIDE
    }

    /// Whole-surface rotation, applied by the painter to the assembled
    /// shape rather than to individual points.
    pub fn rotation(&self) -> Angle {
        self.model.rotation
    }

    pub fn commands(&self) -> &[ShapeCommand] {
        &self.commands
    }

    fn refresh(&mut self) {
        self.commands = figure::build(&self.model, self.toggles, &self.colors, self.shape_scale());
    }

    /// Start tweening toward `target` over `duration` seconds, from the
    /// pose at call time. An already-running transition is replaced.
    pub fn animate_to(&mut self, target: Pose, duration: f32) {
        self.transition = Some(Transition::new(self.model, target, duration));
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Advance the active transition by `dt` seconds, assigning the
    /// interpolated pose through the rebuilding setter. Returns true on
    /// the tick the transition completes.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        let pose = transition.advance(dt);
        let finished = transition.is_finished();
        if finished {
            self.transition = None;
        }
        self.set_model(pose);
        finished
    }
}

impl Default for JittoView {
    fn default() -> Self {
        Self::new(BASE_SIDE)
    }
}
