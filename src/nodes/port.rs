//! Port geometry for node connections

use super::node::EntityId;
use egui::{Pos2, Rect, Vec2};

/// Direction of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

/// A connection point derived from its owner's bounds and input count
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub owner: EntityId,
    pub direction: PortDirection,
    pub index: usize,
    pub position: Pos2,
    pub hit_radius: f32,
}

impl Port {
    /// Creates a port at the given position
    pub fn new(
        owner: EntityId,
        direction: PortDirection,
        index: usize,
        position: Pos2,
        hit_radius: f32,
    ) -> Self {
        Self {
            owner,
            direction,
            index,
            position,
            hit_radius,
        }
    }

    /// Square clickable area centred on the port
    pub fn hit_rect(&self) -> Rect {
        Rect::from_center_size(self.position, Vec2::splat(self.hit_radius * 2.0))
    }

    /// Checks if a point falls in this port's hit area
    pub fn contains(&self, point: Pos2) -> bool {
        self.hit_rect().contains(point)
    }
}

/// All ports of one node, rebuilt whenever the node moves or resizes its inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortLayout {
    pub inputs: Vec<Port>,
    pub output: Option<Port>,
}

impl PortLayout {
    /// Input port by index; out-of-range indices yield `None`
    pub fn input(&self, index: usize) -> Option<&Port> {
        self.inputs.get(index)
    }

    /// Index of the first input port whose hit region contains `point`
    pub fn input_at(&self, point: Pos2) -> Option<usize> {
        self.inputs
            .iter()
            .position(|port| port.contains(point))
    }

    pub fn output_contains(&self, point: Pos2) -> bool {
        self.output
            .as_ref()
            .is_some_and(|port| port.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rect_is_square_around_position() {
        let port = Port::new(EntityId(0), PortDirection::Input, 0, Pos2::new(10.0, 10.0), 5.0);
        assert!(port.contains(Pos2::new(14.0, 6.0)));
        assert!(port.contains(Pos2::new(15.0, 15.0)));
        assert!(!port.contains(Pos2::new(16.0, 10.0)));
        assert_eq!(port.direction, PortDirection::Input);
    }

    #[test]
    fn test_out_of_range_input_is_absent() {
        let layout = PortLayout {
            inputs: vec![Port::new(EntityId(3), PortDirection::Input, 0, Pos2::ZERO, 5.0)],
            output: None,
        };
        assert!(layout.input(0).is_some());
        assert!(layout.input(1).is_none());
        assert!(!layout.output_contains(Pos2::ZERO));
    }
}
