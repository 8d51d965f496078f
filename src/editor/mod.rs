//! Node editor implementation
//!
//! Each frame the editor drains pointer events in arrival order into the
//! interaction controller, runs one evaluation tick, then paints.

pub mod input;
pub mod interaction;
pub mod rendering;

// Re-exports
pub use input::{InputEvent, PointerButton};
pub use interaction::{EventOutcome, InteractionController, Manipulation};

use crate::config::EditorConfig;
use crate::constants::color;
use crate::nodes::{ExecutionEngine, NodeError, NodeGraph};
use eframe::egui;
use log::{debug, info};

/// Main application state for the node editor
pub struct NodeEditor {
    graph: NodeGraph,
    interaction: InteractionController,
    engine: ExecutionEngine,
    config: EditorConfig,
}

impl NodeEditor {
    /// Creates an editor holding the default scene
    pub fn new(config: EditorConfig) -> Result<Self, NodeError> {
        let graph = NodeGraph::with_default_scene(config.seed)?;
        Ok(Self::with_graph(graph, config))
    }

    pub fn with_graph(graph: NodeGraph, config: EditorConfig) -> Self {
        Self {
            graph,
            interaction: InteractionController::new(),
            engine: ExecutionEngine::new(),
            config,
        }
    }

    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    /// Applies a frame's events in order, then evaluates once.
    /// Returns `false` once a quit event has been seen.
    pub fn step(&mut self, events: &[InputEvent]) -> bool {
        let mut running = true;
        for event in events {
            if self.interaction.handle_event(&mut self.graph, event) == EventOutcome::Quit {
                running = false;
            }
        }
        let report = self.engine.tick(&mut self.graph);
        if report.repaired > 0 {
            debug!(
                "Tick {}: repaired weights on {} of {} perceptrons",
                self.engine.ticks(),
                report.repaired,
                report.perceptrons
            );
        }
        running
    }
}

impl eframe::App for NodeEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<InputEvent> = ctx.input(|i| {
            i.events.iter().filter_map(InputEvent::from_egui).collect()
        });
        if ctx.input(|i| i.viewport().close_requested()) {
            events.push(InputEvent::Quit);
        }

        if !self.step(&events) {
            info!("Quit after {} ticks", self.engine.ticks());
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(color::BACKGROUND))
            .show(ctx, |ui| {
                rendering::render_scene(ui.painter(), &self.graph, &self.interaction);
            });

        ctx.request_repaint_after(self.config.frame_interval());
    }
}
