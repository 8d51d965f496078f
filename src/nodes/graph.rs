//! Node graph data structures and operations

use super::error::NodeError;
use super::light::Light;
use super::node::{EntityId, HasInputs, Node, NodeKind};
use super::perceptron::Perceptron;
use super::switch::Switch;
use crate::constants::{light, perceptron, switch};
use egui::{Pos2, Rect, Vec2};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A wire from a node's output to one input of another (or the same) node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub source: EntityId,
    pub target: EntityId,
    pub target_input_index: usize,
}

impl Connection {
    pub fn new(source: EntityId, target: EntityId, target_input_index: usize) -> Self {
        Self {
            source,
            target,
            target_input_index,
        }
    }
}

/// The set of active wires, keyed by target port.
///
/// At most one connection exists per `(target, target_input_index)`; an
/// output may fan out to any number of connections.
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    connections: Vec<Connection>,
}

impl ConnectionRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, target: EntityId, index: usize) -> Option<usize> {
        self.connections
            .iter()
            .position(|conn| conn.target == target && conn.target_input_index == index)
    }

    /// Inserts a connection, replacing any existing one on the same target port.
    /// Returns the replaced connection.
    pub fn upsert(&mut self, connection: Connection) -> Option<Connection> {
        match self.position(connection.target, connection.target_input_index) {
            Some(idx) => Some(std::mem::replace(&mut self.connections[idx], connection)),
            None => {
                self.connections.push(connection);
                None
            }
        }
    }

    /// Removes the connection feeding `(target, index)`, if any
    pub fn remove(&mut self, target: EntityId, index: usize) -> Option<Connection> {
        self.position(target, index)
            .map(|idx| self.connections.remove(idx))
    }

    /// Connection feeding `(target, index)`, if any
    pub fn get(&self, target: EntityId, index: usize) -> Option<&Connection> {
        self.position(target, index).map(|idx| &self.connections[idx])
    }

    /// Iterates connections in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    /// Number of established connections
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

/// What an input-count button press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCountChange {
    Changed(usize),
    AtLimit,
    NotAPerceptron,
}

/// All nodes in creation order plus the wires between them
#[derive(Debug, Clone)]
pub struct NodeGraph {
    nodes: Vec<Node>,
    pub connections: ConnectionRegistry,
    rng: StdRng,
}

impl NodeGraph {
    /// Creates an empty graph seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an empty graph with reproducible weight sampling
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            nodes: Vec::new(),
            connections: ConnectionRegistry::new(),
            rng,
        }
    }

    /// Builds the starting scene: two switches, two perceptrons, two lights
    pub fn with_default_scene(seed: Option<u64>) -> Result<Self, NodeError> {
        let mut graph = match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        graph.add_switch(Pos2::new(50.0, 50.0));
        graph.add_switch(Pos2::new(50.0, 150.0));
        graph.add_perceptron(Pos2::new(200.0, 100.0), 2, None, None)?;
        graph.add_perceptron(Pos2::new(400.0, 200.0), 1, None, None)?;
        graph.add_light(Pos2::new(600.0, 100.0));
        graph.add_light(Pos2::new(600.0, 250.0));
        info!("Created default scene with {} nodes", graph.nodes.len());
        Ok(graph)
    }

    fn push(&mut self, bounds: Rect, kind: NodeKind) -> EntityId {
        let id = EntityId(self.nodes.len());
        self.nodes.push(Node::new(id, bounds, kind));
        id
    }

    /// Adds a switch with its top-left corner at `position`
    pub fn add_switch(&mut self, position: Pos2) -> EntityId {
        let bounds = Rect::from_min_size(position, Vec2::splat(switch::SIZE));
        self.push(bounds, NodeKind::Switch(Switch::new()))
    }

    /// Adds a perceptron with its top-left corner at `position`
    pub fn add_perceptron(
        &mut self,
        position: Pos2,
        num_inputs: usize,
        weights: Option<Vec<f32>>,
        bias: Option<f32>,
    ) -> Result<EntityId, NodeError> {
        let unit = Perceptron::new(num_inputs, weights, bias, &mut self.rng)?;
        let bounds = Rect::from_min_size(
            position,
            Vec2::new(perceptron::WIDTH, perceptron::HEIGHT),
        );
        Ok(self.push(bounds, NodeKind::Perceptron(unit)))
    }

    /// Adds a light centred on `center`
    pub fn add_light(&mut self, center: Pos2) -> EntityId {
        let bounds = Rect::from_center_size(center, Vec2::splat(light::RADIUS * 2.0));
        self.push(bounds, NodeKind::Light(Light::new()))
    }

    pub fn node(&self, id: EntityId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: EntityId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Nodes in creation (and z) order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current output of `id`; unknown ids and output-less nodes read as 0
    pub fn output_of(&self, id: EntityId) -> bool {
        self.node(id)
            .and_then(Node::output_value)
            .unwrap_or(false)
    }

    /// Wires `source`'s output to `target`'s input `index`, replacing any
    /// existing wire on that input. Returns the previous source.
    pub fn connect(
        &mut self,
        source: EntityId,
        target: EntityId,
        index: usize,
    ) -> Result<Option<EntityId>, NodeError> {
        let source_node = self.node(source).ok_or(NodeError::UnknownEntity(source))?;
        if source_node.output().is_none() {
            return Err(NodeError::NoOutputPort(source));
        }

        let target_node = self
            .node_mut(target)
            .ok_or(NodeError::UnknownEntity(target))?;
        let previous = target_node
            .inputs_mut()
            .and_then(|inputs| inputs.set_input_source(index, Some(source)))
            .ok_or(NodeError::NoInputPort {
                entity: target,
                index,
            })?;

        if let Some(previous) = previous {
            warn!(
                "Input {} of {} already connected to {}; overwriting",
                index, target, previous
            );
        }
        self.connections
            .upsert(Connection::new(source, target, index));
        info!("Connected {} output -> {} input {}", source, target, index);
        Ok(previous)
    }

    /// Clears input `index` of `target` and its registry entry.
    /// Returns the source that was removed, if any.
    pub fn disconnect(&mut self, target: EntityId, index: usize) -> Option<EntityId> {
        let previous = self
            .node_mut(target)
            .and_then(Node::inputs_mut)
            .and_then(|inputs| inputs.set_input_source(index, None))
            .flatten();
        if self.connections.remove(target, index).is_none() && previous.is_some() {
            warn!("Input {} of {} had no registry entry", index, target);
        }
        if let Some(source) = previous {
            info!("Removed connection {} -> {} input {}", source, target, index);
        }
        previous
    }

    /// Adds an input to a perceptron
    pub fn increment_inputs(&mut self, id: EntityId) -> InputCountChange {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return InputCountChange::NotAPerceptron;
        };
        let Some(unit) = node.as_perceptron_mut() else {
            return InputCountChange::NotAPerceptron;
        };
        if !unit.increment_inputs(&mut self.rng) {
            debug!("Perceptron {}: max inputs ({}) reached", id, perceptron::MAX_INPUTS);
            return InputCountChange::AtLimit;
        }
        let count = unit.num_inputs();
        node.update_port_positions();
        info!("Perceptron {}: increased inputs to {}", id, count);
        InputCountChange::Changed(count)
    }

    /// Removes a perceptron's last input, dropping the wire that fed it
    pub fn decrement_inputs(&mut self, id: EntityId) -> InputCountChange {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return InputCountChange::NotAPerceptron;
        };
        let Some(unit) = node.as_perceptron_mut() else {
            return InputCountChange::NotAPerceptron;
        };
        let Some(removed) = unit.decrement_inputs() else {
            debug!("Perceptron {}: min inputs ({}) reached", id, perceptron::MIN_INPUTS);
            return InputCountChange::AtLimit;
        };
        let count = unit.num_inputs();
        node.update_port_positions();

        if removed.source.is_some() && self.connections.remove(id, removed.index).is_some() {
            debug!("Removed connection to input {} of {}", removed.index, id);
        }
        info!("Perceptron {}: decreased inputs to {}", id, count);
        InputCountChange::Changed(count)
    }

    /// First `(target, index)` in creation order whose input port contains `point`
    pub fn input_port_at(&self, point: Pos2) -> Option<(EntityId, usize)> {
        self.nodes.iter().find_map(|node| {
            node.ports()
                .input_at(point)
                .map(|index| (node.id(), index))
        })
    }

    /// `(source port, target port)` positions for every established wire
    pub fn wire_segments(&self) -> Vec<(Pos2, Pos2)> {
        self.connections
            .iter()
            .filter_map(|conn| {
                let start = self.node(conn.source)?.ports().output.as_ref()?.position;
                let end = self
                    .node(conn.target)?
                    .ports()
                    .input(conn.target_input_index)?
                    .position;
                Some((start, end))
            })
            .collect()
    }
}

impl Default for NodeGraph {
    fn default() -> Self {
        Self::new()
    }
}
