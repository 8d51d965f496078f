//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded geometry, limits and colors

/// Perceptron sizing and limits
pub mod perceptron {
    /// Body width
    pub const WIDTH: f32 = 60.0;

    /// Body height
    pub const HEIGHT: f32 = 80.0;

    /// Fewest inputs a perceptron may have
    pub const MIN_INPUTS: usize = 1;

    /// Most inputs a perceptron may have
    pub const MAX_INPUTS: usize = 8;

    /// Side length of the square +/- buttons
    pub const BUTTON_SIZE: f32 = 15.0;

    /// Gap between buttons and between a button and the body edge
    pub const BUTTON_MARGIN: f32 = 3.0;
}

/// Switch sizing
pub mod switch {
    /// Body side length
    pub const SIZE: f32 = 40.0;

    /// Inset of the toggle region from every body edge
    pub const TOGGLE_MARGIN: f32 = 8.0;
}

/// Light sizing
pub mod light {
    pub const RADIUS: f32 = 20.0;
}

/// Port marker radii, which double as hit radii
pub mod port {
    pub const INPUT_RADIUS: f32 = 5.0;
    pub const OUTPUT_RADIUS: f32 = 6.0;
}

/// Window and frame clock defaults
pub mod window {
    pub const DEFAULT_SIZE: [f32; 2] = [800.0, 600.0];
    pub const DEFAULT_FRAME_RATE: u32 = 60;
    pub const TITLE: &str = "Perceptron Playground";
}

/// Palette shared by the renderer
pub mod color {
    use egui::Color32;

    pub const BACKGROUND: Color32 = Color32::WHITE;
    pub const OUTLINE: Color32 = Color32::BLACK;
    pub const ACTIVE: Color32 = Color32::from_rgb(0, 200, 0);
    pub const SWITCH_OFF: Color32 = Color32::from_rgb(255, 0, 0);
    pub const IDLE: Color32 = Color32::from_rgb(150, 150, 150);
    pub const LIT: Color32 = Color32::from_rgb(200, 200, 0);
    pub const WIRE: Color32 = Color32::from_rgb(0, 0, 255);
    pub const PENDING_WIRE: Color32 = Color32::from_rgb(200, 200, 0);
    pub const BUTTON: Color32 = Color32::from_rgb(100, 100, 200);
}
