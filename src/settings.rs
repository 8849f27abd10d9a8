use crate::CONFY_APP_NAME;
use crate::shape::figure::{FigureColors, LayerToggles};

use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub draw_shadow: bool,
    pub draw_border: bool,
    pub draw_fill: bool,
    pub shape_side: f32,
    pub play_demo: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            draw_shadow: true,
            draw_border: true,
            draw_fill: true,
            shape_side: 360.0,
            play_demo: true,
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "display").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "display", self);
    }

    pub fn toggles(&self) -> LayerToggles {
        LayerToggles {
            shadow: self.draw_shadow,
            border: self.draw_border,
            fill: self.draw_fill,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSettings {
    pub background_color: [f32; 3],
    pub shadow_color: [f32; 3],
    pub border_color: [f32; 3],
    pub fill_color: [f32; 3],
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            // Window background of the original demo (#2b2b2b).
            background_color: [0.169, 0.169, 0.169],
            shadow_color: [0.0, 0.0, 0.0],
            border_color: [1.0, 1.0, 1.0],
            // #47009C
            fill_color: [0.278, 0.0, 0.612],
        }
    }
}

fn to_color32(rgb: [f32; 3]) -> Color32 {
    Color32::from_rgb(
        (rgb[0] * 255.0).round() as u8,
        (rgb[1] * 255.0).round() as u8,
        (rgb[2] * 255.0).round() as u8,
    )
}

impl ColorSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "colors").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "colors", self);
    }

    pub fn figure_colors(&self) -> FigureColors {
        FigureColors {
            shadow: to_color32(self.shadow_color),
            border: to_color32(self.border_color),
            fill: to_color32(self.fill_color),
        }
    }

    pub fn background32(&self) -> Color32 {
        to_color32(self.background_color)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    pub show_display_settings: bool,
    pub show_colors: bool,
    pub show_pose: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_display_settings: true,
            show_colors: false,
            show_pose: false,
        }
    }
}

impl UiSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "ui").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "ui", self);
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub display: DisplaySettings,
    pub colors: ColorSettings,
    pub ui: UiSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            display: DisplaySettings::load(),
            colors: ColorSettings::load(),
            ui: UiSettings::load(),
        }
    }
}
