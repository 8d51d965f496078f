//! Neurotic core library
//!
//! An interactive editor for wiring switches, perceptrons and lights into
//! small signal graphs that are re-evaluated every frame.

pub mod config;
pub mod constants;
pub mod editor;
pub mod nodes;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editor::{EventOutcome, InputEvent, InteractionController, NodeEditor, PointerButton};
pub use nodes::{Connection, EntityId, ExecutionEngine, NodeError, NodeGraph};
