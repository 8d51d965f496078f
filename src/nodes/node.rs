//! Node types and core node functionality

use super::light::Light;
use super::perceptron::Perceptron;
use super::port::{Port, PortDirection, PortLayout};
use super::switch::Switch;
use crate::constants::port;
use egui::{Pos2, Rect, Vec2};
use std::fmt;

/// Unique identifier for a node, also its position in the graph's node list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub usize);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something that can be dragged around the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub bounds: Rect,
}

/// Capability of nodes that drive a single output port
pub trait HasOutput {
    fn output_value(&self) -> bool;
}

/// Capability of nodes with indexed input slots
///
/// Slots mirror the graph's connection registry: `input_slots()[i]` is the
/// node feeding input `i`, if any.
pub trait HasInputs {
    fn input_slots(&self) -> &[Option<EntityId>];

    fn input_slots_mut(&mut self) -> &mut [Option<EntityId>];

    fn num_inputs(&self) -> usize {
        self.input_slots().len()
    }

    fn input_source(&self, index: usize) -> Option<EntityId> {
        self.input_slots().get(index).copied().flatten()
    }

    /// Replaces the source of an input, returning the previous one.
    /// Returns `None` when `index` is out of range.
    fn set_input_source(
        &mut self,
        index: usize,
        source: Option<EntityId>,
    ) -> Option<Option<EntityId>> {
        self.input_slots_mut()
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, source))
    }
}

/// Per-variant node state
#[derive(Debug, Clone)]
pub enum NodeKind {
    Switch(Switch),
    Perceptron(Perceptron),
    Light(Light),
}

/// Region of a node hit by the pointer, in hit-test priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    IncrementButton,
    DecrementButton,
    OutputPort,
    InputPort(usize),
    Toggle,
    Body,
}

/// A node on the canvas: its draggable entity, variant state and derived ports
#[derive(Debug, Clone)]
pub struct Node {
    pub entity: Entity,
    pub kind: NodeKind,
    ports: PortLayout,
}

impl Node {
    /// Wraps variant state in a node with the given bounds
    pub fn new(id: EntityId, bounds: Rect, kind: NodeKind) -> Self {
        let mut node = Self {
            entity: Entity { id, bounds },
            kind,
            ports: PortLayout::default(),
        };
        node.update_port_positions();
        node
    }

    /// Id of this node, also its z-order position
    pub fn id(&self) -> EntityId {
        self.entity.id
    }

    /// Current body rectangle
    pub fn bounds(&self) -> Rect {
        self.entity.bounds
    }

    /// Ports derived from the current bounds
    pub fn ports(&self) -> &PortLayout {
        &self.ports
    }

    /// Display name of the node kind
    pub fn title(&self) -> &'static str {
        match self.kind {
            NodeKind::Switch(_) => "Switch",
            NodeKind::Perceptron(_) => "Perceptron",
            NodeKind::Light(_) => "Light",
        }
    }

    /// Switch state, if this node is a switch
    pub fn as_switch(&self) -> Option<&Switch> {
        match &self.kind {
            NodeKind::Switch(switch) => Some(switch),
            _ => None,
        }
    }

    /// Perceptron state, if this node is a perceptron
    pub fn as_perceptron(&self) -> Option<&Perceptron> {
        match &self.kind {
            NodeKind::Perceptron(perceptron) => Some(perceptron),
            _ => None,
        }
    }

    /// Mutable perceptron state, if this node is a perceptron
    pub fn as_perceptron_mut(&mut self) -> Option<&mut Perceptron> {
        match &mut self.kind {
            NodeKind::Perceptron(perceptron) => Some(perceptron),
            _ => None,
        }
    }

    /// Light state, if this node is a light
    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Output capability, absent for lights
    pub fn output(&self) -> Option<&dyn HasOutput> {
        match &self.kind {
            NodeKind::Switch(switch) => Some(switch),
            NodeKind::Perceptron(perceptron) => Some(perceptron),
            NodeKind::Light(_) => None,
        }
    }

    /// Input capability, absent for switches
    pub fn inputs(&self) -> Option<&dyn HasInputs> {
        match &self.kind {
            NodeKind::Switch(_) => None,
            NodeKind::Perceptron(perceptron) => Some(perceptron),
            NodeKind::Light(light) => Some(light),
        }
    }

    pub fn inputs_mut(&mut self) -> Option<&mut dyn HasInputs> {
        match &mut self.kind {
            NodeKind::Switch(_) => None,
            NodeKind::Perceptron(perceptron) => Some(perceptron),
            NodeKind::Light(light) => Some(light),
        }
    }

    pub fn output_value(&self) -> Option<bool> {
        self.output().map(|output| output.output_value())
    }

    /// Moves the node so its top-left corner sits at `min`
    pub fn move_to(&mut self, min: Pos2) {
        self.entity.bounds = Rect::from_min_size(min, self.entity.bounds.size());
        self.update_port_positions();
    }

    /// Recomputes port positions from the current bounds and input count
    pub fn update_port_positions(&mut self) {
        let id = self.entity.id;
        let rect = self.entity.bounds;

        let input_positions: Vec<Pos2> = match &self.kind {
            NodeKind::Switch(_) => Vec::new(),
            NodeKind::Perceptron(perceptron) => {
                let count = perceptron.num_inputs();
                let spacing = rect.height() / (count + 1) as f32;
                (0..count)
                    .map(|i| {
                        Pos2::new(
                            rect.left() - port::INPUT_RADIUS,
                            rect.top() + (spacing * (i + 1) as f32).floor(),
                        )
                    })
                    .collect()
            }
            NodeKind::Light(_) => vec![Pos2::new(rect.left() - port::INPUT_RADIUS, rect.center().y)],
        };

        self.ports.inputs = input_positions
            .into_iter()
            .enumerate()
            .map(|(i, pos)| Port::new(id, PortDirection::Input, i, pos, port::INPUT_RADIUS))
            .collect();

        self.ports.output = self.output().map(|_| {
            Port::new(
                id,
                PortDirection::Output,
                0,
                Pos2::new(rect.right() + port::OUTPUT_RADIUS, rect.center().y),
                port::OUTPUT_RADIUS,
            )
        });
    }

    /// Finds the highest-priority region under `point`
    ///
    /// Order: count buttons, output port, input ports or toggle area, body.
    pub fn hit_test(&self, point: Pos2) -> Option<HitRegion> {
        let rect = self.entity.bounds;

        if let NodeKind::Perceptron(_) = self.kind {
            if Perceptron::increment_button_rect(rect).contains(point) {
                return Some(HitRegion::IncrementButton);
            }
            if Perceptron::decrement_button_rect(rect).contains(point) {
                return Some(HitRegion::DecrementButton);
            }
        }

        if self.ports.output_contains(point) {
            return Some(HitRegion::OutputPort);
        }

        if let Some(index) = self.ports.input_at(point) {
            return Some(HitRegion::InputPort(index));
        }

        if let NodeKind::Switch(_) = self.kind {
            if Switch::toggle_rect(rect).contains(point) {
                return Some(HitRegion::Toggle);
            }
        }

        rect.contains(point).then_some(HitRegion::Body)
    }

    /// Offset from the node's top-left corner to `point`
    pub fn grab_offset(&self, point: Pos2) -> Vec2 {
        point - self.entity.bounds.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn perceptron_node(inputs: usize) -> Node {
        let mut rng = StdRng::seed_from_u64(1);
        let perceptron = Perceptron::new(inputs, None, None, &mut rng).unwrap();
        Node::new(
            EntityId(0),
            Rect::from_min_size(Pos2::new(200.0, 100.0), Vec2::new(60.0, 80.0)),
            NodeKind::Perceptron(perceptron),
        )
    }

    #[test]
    fn test_perceptron_port_layout() {
        let node = perceptron_node(2);
        let ports = node.ports();
        assert_eq!(ports.inputs.len(), 2);
        // spacing = 80 / 3 = 26.67 -> floor(26.67) and floor(53.33)
        assert_eq!(ports.inputs[0].position, Pos2::new(195.0, 126.0));
        assert_eq!(ports.inputs[1].position, Pos2::new(195.0, 153.0));
        assert_eq!(ports.output.as_ref().unwrap().position, Pos2::new(266.0, 140.0));
        assert!(ports.input(2).is_none());
    }

    #[test]
    fn test_ports_follow_move() {
        let mut node = perceptron_node(1);
        node.move_to(Pos2::new(0.0, 0.0));
        assert_eq!(node.ports().inputs[0].position, Pos2::new(-5.0, 40.0));
        assert_eq!(node.ports().output.as_ref().unwrap().position, Pos2::new(66.0, 40.0));
    }

    #[test]
    fn test_light_has_one_input_and_no_output() {
        let node = Node::new(
            EntityId(4),
            Rect::from_center_size(Pos2::new(600.0, 100.0), Vec2::splat(40.0)),
            NodeKind::Light(Light::new()),
        );
        assert!(node.output().is_none());
        assert!(node.ports().output.is_none());
        assert_eq!(node.inputs().unwrap().num_inputs(), 1);
        assert_eq!(node.ports().inputs[0].position, Pos2::new(575.0, 100.0));
    }

    #[test]
    fn test_hit_priority_on_perceptron() {
        let node = perceptron_node(2);
        let rect = node.bounds();
        let plus = Perceptron::increment_button_rect(rect).center();
        let minus = Perceptron::decrement_button_rect(rect).center();
        assert_eq!(node.hit_test(plus), Some(HitRegion::IncrementButton));
        assert_eq!(node.hit_test(minus), Some(HitRegion::DecrementButton));
        assert_eq!(node.hit_test(Pos2::new(266.0, 140.0)), Some(HitRegion::OutputPort));
        assert_eq!(node.hit_test(Pos2::new(195.0, 153.0)), Some(HitRegion::InputPort(1)));
        // Input port region overlaps the body edge; the port wins
        assert_eq!(node.hit_test(Pos2::new(200.0, 126.0)), Some(HitRegion::InputPort(0)));
        assert_eq!(node.hit_test(Pos2::new(230.0, 170.0)), Some(HitRegion::Body));
        assert_eq!(node.hit_test(Pos2::new(100.0, 100.0)), None);
    }

    #[test]
    fn test_set_input_source_out_of_range() {
        let mut node = perceptron_node(1);
        let inputs = node.inputs_mut().unwrap();
        assert_eq!(inputs.set_input_source(0, Some(EntityId(9))), Some(None));
        assert_eq!(inputs.set_input_source(1, Some(EntityId(9))), None);
        assert_eq!(inputs.input_source(0), Some(EntityId(9)));
    }
}
