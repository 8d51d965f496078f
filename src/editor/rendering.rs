//! Painting of nodes, ports and wires

use super::interaction::InteractionController;
use crate::constants::{color, light};
use crate::nodes::{Light, Node, NodeGraph, NodeKind, Perceptron, Port, Switch};
use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke, StrokeKind};

/// Fill color of a node's body for its current state
pub fn body_color(node: &Node) -> Color32 {
    match &node.kind {
        NodeKind::Switch(switch) if switch.output_value => color::ACTIVE,
        NodeKind::Switch(_) => color::SWITCH_OFF,
        NodeKind::Perceptron(perceptron) if perceptron.output_value => color::ACTIVE,
        NodeKind::Perceptron(_) => color::IDLE,
        NodeKind::Light(light) if light.input_value => color::LIT,
        NodeKind::Light(_) => color::IDLE,
    }
}

/// Port markers are filled for a 1 and hollow for a 0
pub fn port_fill(value: bool) -> Color32 {
    if value {
        color::ACTIVE
    } else {
        Color32::WHITE
    }
}

/// Draws the whole scene in z-order, wires underneath
pub fn render_scene(painter: &Painter, graph: &NodeGraph, controller: &InteractionController) {
    painter.rect_filled(painter.clip_rect(), 0.0, color::BACKGROUND);

    let wire = Stroke::new(2.0, color::WIRE);
    for (start, end) in graph.wire_segments() {
        painter.line_segment([start, end], wire);
    }
    if let Some((start, end)) = controller.pending_wire() {
        painter.line_segment([start, end], Stroke::new(2.0, color::PENDING_WIRE));
    }

    for node in graph.nodes() {
        match &node.kind {
            NodeKind::Switch(switch) => render_switch(painter, node, switch),
            NodeKind::Perceptron(perceptron) => render_perceptron(painter, node, perceptron),
            NodeKind::Light(light) => render_light(painter, node, light),
        }
    }
}

fn render_port(painter: &Painter, port: &Port, value: bool) {
    painter.circle_filled(port.position, port.hit_radius, color::OUTLINE);
    painter.circle_filled(port.position, port.hit_radius - 2.0, port_fill(value));
}

fn render_body(painter: &Painter, node: &Node) {
    let rect = node.bounds();
    painter.rect_filled(rect, 0.0, body_color(node));
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, color::OUTLINE), StrokeKind::Inside);
}

fn render_switch(painter: &Painter, node: &Node, switch: &Switch) {
    render_body(painter, node);
    let toggle = Switch::toggle_rect(node.bounds());
    painter.rect_filled(toggle, 0.0, color::OUTLINE);
    painter.rect_stroke(toggle, 0.0, Stroke::new(1.0, Color32::WHITE), StrokeKind::Inside);
    if let Some(port) = &node.ports().output {
        render_port(painter, port, switch.output_value);
    }
}

fn render_perceptron(painter: &Painter, node: &Node, perceptron: &Perceptron) {
    render_body(painter, node);

    for port in &node.ports().inputs {
        let value = perceptron.input_values.get(port.index).copied().unwrap_or(false);
        render_port(painter, port, value);
    }
    if let Some(port) = &node.ports().output {
        render_port(painter, port, perceptron.output_value);
    }

    let bounds = node.bounds();
    for (rect, label) in [
        (Perceptron::increment_button_rect(bounds), "+"),
        (Perceptron::decrement_button_rect(bounds), "-"),
    ] {
        painter.rect_filled(rect, 2.0, color::BUTTON);
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, Color32::WHITE), StrokeKind::Inside);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(12.0),
            Color32::WHITE,
        );
    }
}

fn render_light(painter: &Painter, node: &Node, light_state: &Light) {
    let center: Pos2 = node.bounds().center();
    painter.circle_filled(center, light::RADIUS, body_color(node));
    painter.circle_stroke(center, light::RADIUS, Stroke::new(1.0, color::OUTLINE));
    if let Some(port) = node.ports().input(0) {
        render_port(painter, port, light_state.input_value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_colors_follow_state() {
        let mut graph = NodeGraph::with_seed(4);
        let s = graph.add_switch(Pos2::new(0.0, 0.0));
        let l = graph.add_light(Pos2::new(100.0, 100.0));
        assert_eq!(body_color(graph.node(s).unwrap()), color::SWITCH_OFF);
        assert_eq!(body_color(graph.node(l).unwrap()), color::IDLE);

        if let NodeKind::Switch(switch) = &mut graph.node_mut(s).unwrap().kind {
            switch.toggle();
        }
        assert_eq!(body_color(graph.node(s).unwrap()), color::ACTIVE);
    }

    #[test]
    fn test_port_fill() {
        assert_eq!(port_fill(true), color::ACTIVE);
        assert_eq!(port_fill(false), Color32::WHITE);
    }
}
