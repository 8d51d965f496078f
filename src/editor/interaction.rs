//! Node interaction handling (dragging, toggling, connections)
//!
//! The controller owns a single [`Manipulation`] token, so at most one node
//! is ever being dragged and at most one wire is ever being drawn.

use super::input::{InputEvent, PointerButton};
use crate::nodes::{EntityId, HitRegion, NodeGraph, NodeKind};
use egui::{Pos2, Vec2};
use log::{debug, warn};

/// What the pointer currently owns
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Manipulation {
    Idle,
    Dragging { entity: EntityId, grab_offset: Vec2 },
    ConnectingFrom { source: EntityId, start: Pos2 },
}

/// Result of offering one event to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Ignored,
    Quit,
}

impl EventOutcome {
    fn from_handled(handled: bool) -> Self {
        if handled {
            Self::Handled
        } else {
            Self::Ignored
        }
    }
}

/// Turns pointer events into graph mutations
#[derive(Debug, Clone)]
pub struct InteractionController {
    manipulation: Manipulation,
    pointer: Pos2,
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            manipulation: Manipulation::Idle,
            pointer: Pos2::ZERO,
        }
    }

    pub fn manipulation(&self) -> Manipulation {
        self.manipulation
    }

    /// Node currently being dragged
    pub fn dragging(&self) -> Option<EntityId> {
        match self.manipulation {
            Manipulation::Dragging { entity, .. } => Some(entity),
            _ => None,
        }
    }

    pub fn is_drawing_connection(&self) -> bool {
        matches!(self.manipulation, Manipulation::ConnectingFrom { .. })
    }

    /// Start port and pointer position of the wire being drawn
    pub fn pending_wire(&self) -> Option<(Pos2, Pos2)> {
        match self.manipulation {
            Manipulation::ConnectingFrom { start, .. } => Some((start, self.pointer)),
            _ => None,
        }
    }

    /// Applies one input event to `graph`
    pub fn handle_event(&mut self, graph: &mut NodeGraph, event: &InputEvent) -> EventOutcome {
        match *event {
            InputEvent::PointerDown { button, pos } => {
                self.pointer = pos;
                EventOutcome::from_handled(self.pointer_down(graph, button, pos))
            }
            InputEvent::PointerUp { button, pos } => {
                self.pointer = pos;
                EventOutcome::from_handled(self.pointer_up(graph, button, pos))
            }
            InputEvent::PointerMove(pos) => {
                self.pointer = pos;
                EventOutcome::from_handled(self.pointer_move(graph, pos))
            }
            InputEvent::Quit => EventOutcome::Quit,
        }
    }

    /// Offers a press to nodes from topmost to bottommost; the first taker wins
    fn pointer_down(&mut self, graph: &mut NodeGraph, button: PointerButton, pos: Pos2) -> bool {
        for index in (0..graph.len()).rev() {
            let id = EntityId(index);
            let Some(region) = graph.node(id).and_then(|node| node.hit_test(pos)) else {
                continue;
            };
            let handled = match button {
                PointerButton::Primary => self.primary_press(graph, id, region, pos),
                PointerButton::Secondary => self.secondary_press(graph, id, region),
            };
            if handled {
                return true;
            }
        }
        false
    }

    fn primary_press(
        &mut self,
        graph: &mut NodeGraph,
        id: EntityId,
        region: HitRegion,
        pos: Pos2,
    ) -> bool {
        match region {
            HitRegion::IncrementButton => {
                graph.increment_inputs(id);
                true
            }
            HitRegion::DecrementButton => {
                graph.decrement_inputs(id);
                true
            }
            HitRegion::OutputPort => {
                if self.manipulation == Manipulation::Idle {
                    self.begin_connection(graph, id);
                }
                true
            }
            // Consumed so a port click never becomes a drag
            HitRegion::InputPort(_) => !self.is_drawing_connection(),
            HitRegion::Toggle => {
                if self.is_drawing_connection() {
                    return false;
                }
                if let Some(NodeKind::Switch(switch)) = graph.node_mut(id).map(|node| &mut node.kind)
                {
                    let value = switch.toggle();
                    debug!("Toggled switch {} to {}", id, u8::from(value));
                }
                true
            }
            HitRegion::Body => {
                if self.manipulation != Manipulation::Idle {
                    return false;
                }
                if let Some(node) = graph.node(id) {
                    self.manipulation = Manipulation::Dragging {
                        entity: id,
                        grab_offset: node.grab_offset(pos),
                    };
                    debug!("Started drag for {} {}", node.title(), id);
                }
                true
            }
        }
    }

    fn secondary_press(&mut self, graph: &mut NodeGraph, id: EntityId, region: HitRegion) -> bool {
        match region {
            HitRegion::InputPort(index) => {
                self.remove_connection(graph, id, index);
                true
            }
            HitRegion::Toggle | HitRegion::Body => {
                matches!(graph.node(id).map(|node| &node.kind), Some(NodeKind::Switch(_)))
            }
            _ => false,
        }
    }

    fn pointer_up(&mut self, graph: &mut NodeGraph, button: PointerButton, pos: Pos2) -> bool {
        match self.manipulation {
            Manipulation::ConnectingFrom { .. } => {
                self.complete_or_cancel(graph, pos);
                true
            }
            Manipulation::Dragging { entity, .. } if button == PointerButton::Primary => {
                self.manipulation = Manipulation::Idle;
                debug!("Stopped drag for {}", entity);
                true
            }
            _ => false,
        }
    }

    fn pointer_move(&mut self, graph: &mut NodeGraph, pos: Pos2) -> bool {
        let Manipulation::Dragging {
            entity,
            grab_offset,
        } = self.manipulation
        else {
            return false;
        };
        match graph.node_mut(entity) {
            Some(node) => {
                node.move_to(pos - grab_offset);
                true
            }
            None => {
                self.manipulation = Manipulation::Idle;
                false
            }
        }
    }

    /// Starts drawing a wire from `source`'s output port
    pub fn begin_connection(&mut self, graph: &NodeGraph, source: EntityId) -> bool {
        let Some(start) = graph
            .node(source)
            .and_then(|node| node.ports().output.as_ref())
            .map(|port| port.position)
        else {
            return false;
        };
        self.manipulation = Manipulation::ConnectingFrom { source, start };
        debug!("Started connection from {}", source);
        true
    }

    /// Finishes the wire on the input port under `pos`, or drops it.
    /// Always returns the controller to idle.
    pub fn complete_or_cancel(&mut self, graph: &mut NodeGraph, pos: Pos2) -> Option<(EntityId, usize)> {
        let Manipulation::ConnectingFrom { source, .. } = self.manipulation else {
            return None;
        };
        self.manipulation = Manipulation::Idle;

        let Some((target, index)) = graph.input_port_at(pos) else {
            debug!("Connection cancelled");
            return None;
        };
        match graph.connect(source, target, index) {
            Ok(_) => Some((target, index)),
            Err(err) => {
                warn!("Connection rejected: {}", err);
                None
            }
        }
    }

    /// Removes the wire feeding `target`'s input `index`, if any
    pub fn remove_connection(&mut self, graph: &mut NodeGraph, target: EntityId, index: usize) -> Option<EntityId> {
        let removed = graph.disconnect(target, index);
        if removed.is_none() {
            debug!("Input {} of {} is not connected", index, target);
        }
        removed
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}
