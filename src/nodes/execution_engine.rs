//! Per-frame evaluation of node outputs
//!
//! Each tick makes two fixed-order passes over the node list:
//! 1. every perceptron, in creation order, recomputes its output from the
//!    values its sources hold *right now*;
//! 2. every light refreshes its displayed input.
//!
//! There is deliberately no topological sort. A perceptron fed by a
//! perceptron created after it sees that source's value from the previous
//! tick, so each such hop adds one tick of lag. Cycles cannot loop forever
//! because each tick is a single bounded pass.

use super::graph::NodeGraph;
use super::node::{HasInputs, NodeKind};

/// Counters from one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub perceptrons: usize,
    pub lights: usize,
    /// Perceptrons whose weights had to be padded or truncated
    pub repaired: usize,
}

/// Drives evaluation ticks and counts them
#[derive(Debug, Clone, Default)]
pub struct ExecutionEngine {
    ticks: u64,
}

impl ExecutionEngine {
    /// Creates an engine that has not ticked yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one two-pass evaluation over `graph`
    pub fn tick(&mut self, graph: &mut NodeGraph) -> TickReport {
        let mut report = TickReport::default();

        for index in 0..graph.len() {
            let inputs = match &graph.nodes()[index].kind {
                NodeKind::Perceptron(perceptron) => perceptron
                    .input_slots()
                    .iter()
                    .map(|slot| slot.is_some_and(|source| graph.output_of(source)))
                    .collect::<Vec<bool>>(),
                _ => continue,
            };
            if let NodeKind::Perceptron(perceptron) = &mut graph.nodes_mut()[index].kind {
                if perceptron.repair_weights() {
                    report.repaired += 1;
                }
                perceptron.evaluate(inputs);
                report.perceptrons += 1;
            }
        }

        for index in 0..graph.len() {
            let source_output = match &graph.nodes()[index].kind {
                NodeKind::Light(light) => light.input_source(0).map(|source| graph.output_of(source)),
                _ => continue,
            };
            if let NodeKind::Light(light) = &mut graph.nodes_mut()[index].kind {
                light.update_state(source_output);
                report.lights += 1;
            }
        }

        self.ticks += 1;
        report
    }
}
