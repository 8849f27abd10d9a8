use crate::animation::pose_loop::DEMO_STEP_SECONDS;
use crate::geom::Angle;
use crate::pose::Pose;
use crate::settings::Settings;
use crate::view::JittoView;

pub struct Ui;

impl Ui {
    pub fn new() -> Self {
        Self
    }

    /// Show the control panels. Display and color changes are applied to
    /// the view immediately and persisted through confy.
    pub fn show(&mut self, ctx: &egui::Context, settings: &mut Settings, view: &mut JittoView) {
        let mut ui_changed = false;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui
                    .selectable_label(settings.display.play_demo, "▶ Demo")
                    .clicked()
                {
                    settings.display.play_demo = !settings.display.play_demo;
                    settings.display.save();
                }

                ui.separator();
                ui.label("Windows:");

                if ui
                    .selectable_label(settings.ui.show_display_settings, "Display")
                    .clicked()
                {
                    settings.ui.show_display_settings = !settings.ui.show_display_settings;
                    ui_changed = true;
                }
                if ui
                    .selectable_label(settings.ui.show_colors, "Colors")
                    .clicked()
                {
                    settings.ui.show_colors = !settings.ui.show_colors;
                    ui_changed = true;
                }
                if ui.selectable_label(settings.ui.show_pose, "Pose").clicked() {
                    settings.ui.show_pose = !settings.ui.show_pose;
                    ui_changed = true;
                }
            });
        });

        if ui_changed {
            settings.ui.save();
        }

        self.show_display_window(ctx, settings, view);
        self.show_colors_window(ctx, settings, view);
        self.show_pose_window(ctx, settings, view);
    }

    fn show_display_window(
        &mut self,
        ctx: &egui::Context,
        settings: &mut Settings,
        view: &mut JittoView,
    ) {
        let mut open = settings.ui.show_display_settings;
        let mut changed = false;

        egui::Window::new("Display")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                changed |= ui
                    .checkbox(&mut settings.display.draw_shadow, "Shadow layer")
                    .changed();
                changed |= ui
                    .checkbox(&mut settings.display.draw_border, "Border layer")
                    .changed();
                changed |= ui
                    .checkbox(&mut settings.display.draw_fill, "Fill layer")
                    .changed();
                ui.separator();
                changed |= ui
                    .add(
                        egui::Slider::new(&mut settings.display.shape_side, 64.0..=512.0)
                            .text("Shape side"),
                    )
                    .changed();
            });

        if open != settings.ui.show_display_settings {
            settings.ui.show_display_settings = open;
            settings.ui.save();
        }
        if changed {
            settings.display.save();
            view.set_toggles(settings.display.toggles());
            view.set_shape_side(settings.display.shape_side);
        }
    }

    fn show_colors_window(
        &mut self,
        ctx: &egui::Context,
        settings: &mut Settings,
        view: &mut JittoView,
    ) {
        let mut open = settings.ui.show_colors;
        let mut changed = false;

        egui::Window::new("Colors")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    changed |= ui
                        .color_edit_button_rgb(&mut settings.colors.background_color)
                        .changed();
                    ui.label("Background");
                });
                ui.horizontal(|ui| {
                    changed |= ui
                        .color_edit_button_rgb(&mut settings.colors.shadow_color)
                        .changed();
                    ui.label("Shadow");
                });
                ui.horizontal(|ui| {
                    changed |= ui
                        .color_edit_button_rgb(&mut settings.colors.border_color)
                        .changed();
                    ui.label("Border");
                });
                ui.horizontal(|ui| {
                    changed |= ui
                        .color_edit_button_rgb(&mut settings.colors.fill_color)
                        .changed();
                    ui.label("Fill");
                });
                if ui.button("Reset to defaults").clicked() {
                    settings.colors = Default::default();
                    changed = true;
                }
            });

        if open != settings.ui.show_colors {
            settings.ui.show_colors = open;
            settings.ui.save();
        }
        if changed {
            settings.colors.save();
            view.set_colors(settings.colors.figure_colors());
        }
    }

    fn show_pose_window(
        &mut self,
        ctx: &egui::Context,
        settings: &mut Settings,
        view: &mut JittoView,
    ) {
        let mut open = settings.ui.show_pose;
        let playing = settings.display.play_demo;

        egui::Window::new("Pose")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                if playing {
                    ui.label("Pause the demo to pose by hand.");
                }
                ui.add_enabled_ui(!playing, |ui| {
                    let mut pose = *view.model();
                    let mut changed = false;

                    changed |= angle_slider(ui, &mut pose.left_hand, -90.0..=90.0, "Left hand");
                    changed |= angle_slider(ui, &mut pose.right_hand, -90.0..=90.0, "Right hand");
                    changed |= ui
                        .add(egui::Slider::new(&mut pose.left_leg, -1.0..=1.0).text("Left leg"))
                        .changed();
                    changed |= ui
                        .add(egui::Slider::new(&mut pose.right_leg, -1.0..=1.0).text("Right leg"))
                        .changed();
                    changed |= angle_slider(ui, &mut pose.rotation, -180.0..=180.0, "Rotation");
                    ui.separator();
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut pose.left_eye_dist, 0.0..=1.0).text("Left gaze"),
                        )
                        .changed();
                    changed |= angle_slider(
                        ui,
                        &mut pose.left_eye_angle,
                        -180.0..=180.0,
                        "Left gaze angle",
                    );
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut pose.right_eye_dist, 0.0..=1.0)
                                .text("Right gaze"),
                        )
                        .changed();
                    changed |= angle_slider(
                        ui,
                        &mut pose.right_eye_angle,
                        -180.0..=180.0,
                        "Right gaze angle",
                    );

                    if changed {
                        view.set_model(pose);
                    }

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Rest").clicked() {
                            view.animate_to(Pose::default(), DEMO_STEP_SECONDS);
                        }
                        if ui.button("Snap to rest").clicked() {
                            view.set_model(Pose::default());
                        }
                    });
                });
            });

        if open != settings.ui.show_pose {
            settings.ui.show_pose = open;
            settings.ui.save();
        }
    }
}

fn angle_slider(
    ui: &mut egui::Ui,
    angle: &mut Angle,
    range: std::ops::RangeInclusive<f32>,
    label: &str,
) -> bool {
    let mut degrees = angle.to_degrees();
    let changed = ui
        .add(egui::Slider::new(&mut degrees, range).suffix("°").text(label))
        .changed();
    if changed {
        *angle = Angle::degrees(degrees);
    }
    changed
}
