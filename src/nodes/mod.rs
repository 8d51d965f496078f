//! Node system - entities, ports, node variants, wiring and evaluation

pub mod error;
pub mod execution_engine;
pub mod graph;
pub mod light;
pub mod node;
pub mod perceptron;
pub mod port;
pub mod switch;

// Re-export core types
pub use error::NodeError;
pub use execution_engine::{ExecutionEngine, TickReport};
pub use graph::{Connection, ConnectionRegistry, InputCountChange, NodeGraph};
pub use light::Light;
pub use node::{Entity, EntityId, HasInputs, HasOutput, HitRegion, Node, NodeKind};
pub use perceptron::{Perceptron, RemovedInput};
pub use port::{Port, PortDirection, PortLayout};
pub use switch::Switch;
