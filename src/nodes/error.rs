use super::node::EntityId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeError {
    #[error("initial weights length ({actual}) != num_inputs ({expected})")]
    WeightCountMismatch { expected: usize, actual: usize },
    #[error("no entity with id {0}")]
    UnknownEntity(EntityId),
    #[error("entity {0} has no output port")]
    NoOutputPort(EntityId),
    #[error("entity {entity} has no input port {index}")]
    NoInputPort { entity: EntityId, index: usize },
}
