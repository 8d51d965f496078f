//! Boolean source node

use super::node::HasOutput;
use crate::constants::switch;
use egui::{Rect, Vec2};

/// A manually toggled source with one output and no inputs
#[derive(Debug, Clone, Default)]
pub struct Switch {
    pub output_value: bool,
}

impl Switch {
    /// Creates a switch that starts off
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the output and returns the new value
    pub fn toggle(&mut self) -> bool {
        self.output_value = !self.output_value;
        self.output_value
    }

    /// Centred area inside the body that toggles rather than drags
    pub fn toggle_rect(bounds: Rect) -> Rect {
        bounds.shrink2(Vec2::splat(switch::TOGGLE_MARGIN))
    }
}

impl HasOutput for Switch {
    fn output_value(&self) -> bool {
        self.output_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_toggle_twice_restores_value() {
        let mut switch = Switch::new();
        assert!(switch.toggle());
        assert!(!switch.toggle());
        assert!(!switch.output_value());
    }

    #[test]
    fn test_toggle_rect_is_inset() {
        let bounds = Rect::from_min_size(Pos2::new(50.0, 50.0), Vec2::splat(40.0));
        let toggle = Switch::toggle_rect(bounds);
        assert_eq!(toggle.min, Pos2::new(58.0, 58.0));
        assert_eq!(toggle.max, Pos2::new(82.0, 82.0));
    }
}
