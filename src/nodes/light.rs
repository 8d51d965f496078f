//! Display-only sink node

use super::node::{EntityId, HasInputs};

/// A sink with a single input that lights up when driven high
#[derive(Debug, Clone, Default)]
pub struct Light {
    pub input_slot: Option<EntityId>,
    /// Value read on the last tick; display cache only
    pub input_value: bool,
}

impl Light {
    /// Creates an unconnected, unlit light
    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshes the cached input from the connected source's output
    pub fn update_state(&mut self, source_output: Option<bool>) {
        self.input_value = self.input_slot.is_some() && source_output.unwrap_or(false);
    }
}

impl HasInputs for Light {
    fn input_slots(&self) -> &[Option<EntityId>] {
        std::slice::from_ref(&self.input_slot)
    }

    fn input_slots_mut(&mut self) -> &mut [Option<EntityId>] {
        std::slice::from_mut(&mut self.input_slot)
    }
}
