use std::sync::Arc;
use std::time::Instant;

use egui_wgpu::ScreenDescriptor;
use winit::window::Window;

use crate::animation::PoseLoop;
use crate::error::JittoError;
use crate::renderer::{Renderer, paint};
use crate::settings::Settings;
use crate::ui::Ui;
use crate::view::JittoView;

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

pub struct App {
    pub window: Arc<Window>,
    renderer: Renderer,
    egui_state: egui_winit::State,
    ui: Ui,
    view: JittoView,
    pose_loop: PoseLoop,
    settings: Settings,
    last_frame: Instant,
}

impl App {
    pub async fn new(window: Arc<Window>) -> Result<Self, JittoError> {
        let ui = Ui::new();

        let renderer = Renderer::new(&window).await?;

        let egui_ctx = renderer.egui_context();
        egui_ctx.options_mut(|options| {
            options.max_passes = std::num::NonZero::new(2).unwrap();
        });

        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::viewport::ViewportId::ROOT,
            &*window,
            None,
            None,
            None,
        );

        let settings = Settings::load();

        let mut view = JittoView::new(settings.display.shape_side);
        view.set_toggles(settings.display.toggles());
        view.set_colors(settings.colors.figure_colors());

        Ok(Self {
            window,
            renderer,
            egui_state,
            ui,
            view,
            pose_loop: PoseLoop::demo(),
            settings,
            last_frame: Instant::now(),
        })
    }

    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> EventResponse {
        let egui_response = self.egui_state.on_window_event(&self.window, event);

        match event {
            winit::event::WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            winit::event::WindowEvent::KeyboardInput { event, .. } => {
                if !egui_response.consumed
                    && event.logical_key
                        == winit::keyboard::Key::Named(winit::keyboard::NamedKey::Escape)
                {
                    return EventResponse {
                        repaint: false,
                        exit: true,
                    };
                }
            }
            winit::event::WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
            }
            _ => {}
        }

        EventResponse {
            repaint: egui_response.repaint,
            exit: false,
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        // Advance animation before the UI reads the pose.
        if self.settings.display.play_demo {
            self.pose_loop.advance(&mut self.view, dt);
        } else {
            self.view.advance(dt);
        }

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();
        let background = self.settings.colors.background32();

        let Self {
            ui, view, settings, ..
        } = self;

        let full_output = egui_ctx.run(raw_input, |ctx| {
            ui.show(ctx, settings, view);

            egui::CentralPanel::default()
                .frame(egui::Frame::NONE.fill(background))
                .show(ctx, |ui| {
                    let rect = ui.max_rect();
                    paint::paint_view(ui.painter(), view, rect.center());
                });
        });

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [
                self.window.inner_size().width,
                self.window.inner_size().height,
            ],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        let background = self.settings.colors.background_color;
        match self.renderer.render(
            paint_jobs,
            full_output.textures_delta,
            screen_descriptor,
            background,
        ) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
