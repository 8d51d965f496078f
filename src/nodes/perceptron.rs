//! Threshold unit node
//!
//! A perceptron sums its weighted inputs plus a bias and fires (outputs 1)
//! when the sum is non-negative. Its input count can be changed at runtime
//! between [`perceptron::MIN_INPUTS`] and [`perceptron::MAX_INPUTS`]; only the
//! highest-index input is ever removed, so surviving connection indices stay
//! valid without renumbering.

use super::error::NodeError;
use super::node::{EntityId, HasInputs, HasOutput};
use crate::constants::perceptron;
use egui::{Pos2, Rect, Vec2};
use log::warn;
use rand::Rng;

/// Input slot dropped by [`Perceptron::decrement_inputs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedInput {
    pub index: usize,
    pub source: Option<EntityId>,
}

#[derive(Debug, Clone)]
pub struct Perceptron {
    pub weights: Vec<f32>,
    pub bias: f32,
    pub(crate) input_slots: Vec<Option<EntityId>>,
    /// Inputs read on the last evaluation, for port markers
    pub input_values: Vec<bool>,
    pub output_value: bool,
}

fn sample_weight(rng: &mut impl Rng) -> f32 {
    rng.random_range(-1.0..=1.0)
}

/// Step activation
pub fn step(weighted_sum: f32) -> bool {
    weighted_sum >= 0.0
}

impl Perceptron {
    /// Creates a perceptron with `num_inputs` unconnected inputs.
    ///
    /// Missing weights and bias are sampled uniformly from [-1, 1]. Explicit
    /// weights must match the (clamped) input count.
    pub fn new(
        num_inputs: usize,
        weights: Option<Vec<f32>>,
        bias: Option<f32>,
        rng: &mut impl Rng,
    ) -> Result<Self, NodeError> {
        let clamped = num_inputs.clamp(perceptron::MIN_INPUTS, perceptron::MAX_INPUTS);
        if num_inputs > perceptron::MAX_INPUTS {
            warn!(
                "Requested {} perceptron inputs, limiting to {}",
                num_inputs,
                perceptron::MAX_INPUTS
            );
        }

        let weights = match weights {
            Some(weights) if weights.len() == clamped => weights,
            Some(weights) => {
                return Err(NodeError::WeightCountMismatch {
                    expected: clamped,
                    actual: weights.len(),
                })
            }
            None => (0..clamped).map(|_| sample_weight(rng)).collect(),
        };
        let bias = bias.unwrap_or_else(|| sample_weight(rng));

        Ok(Self {
            weights,
            bias,
            input_slots: vec![None; clamped],
            input_values: vec![false; clamped],
            output_value: false,
        })
    }

    /// Adds one unconnected input with a fresh random weight.
    /// Returns `false` (no change) at the maximum.
    pub fn increment_inputs(&mut self, rng: &mut impl Rng) -> bool {
        if self.num_inputs() >= perceptron::MAX_INPUTS {
            return false;
        }
        self.weights.push(sample_weight(rng));
        self.input_slots.push(None);
        self.input_values.push(false);
        true
    }

    /// Drops the highest-index input. Returns `None` (no change) at the minimum.
    pub fn decrement_inputs(&mut self) -> Option<RemovedInput> {
        if self.num_inputs() <= perceptron::MIN_INPUTS {
            return None;
        }
        let index = self.num_inputs() - 1;
        self.weights.pop();
        self.input_values.truncate(index);
        let source = self.input_slots.pop().flatten();
        Some(RemovedInput { index, source })
    }

    /// Pads with zero or truncates `weights` to the input count.
    /// Returns whether a repair was needed.
    pub fn repair_weights(&mut self) -> bool {
        let expected = self.input_slots.len();
        if self.weights.len() == expected {
            return false;
        }
        warn!(
            "Weight count ({}) != input count ({}); repairing",
            self.weights.len(),
            expected
        );
        self.weights.resize(expected, 0.0);
        true
    }

    /// Weighted sum of `inputs` plus bias
    pub fn weighted_sum(&self, inputs: &[bool]) -> f32 {
        self.weights
            .iter()
            .zip(inputs)
            .map(|(weight, &input)| if input { *weight } else { 0.0 })
            .sum::<f32>()
            + self.bias
    }

    /// Applies one evaluation given the current values of each input slot
    pub fn evaluate(&mut self, inputs: Vec<bool>) -> bool {
        self.repair_weights();
        self.output_value = step(self.weighted_sum(&inputs));
        self.input_values = inputs;
        self.output_value
    }

    /// "+" button, inset from the top-right corner
    pub fn increment_button_rect(bounds: Rect) -> Rect {
        let top_right = Pos2::new(
            bounds.right() - perceptron::BUTTON_MARGIN,
            bounds.top() + perceptron::BUTTON_MARGIN,
        );
        Self::button_from_top_right(top_right)
    }

    /// "-" button, immediately left of the "+" button
    pub fn decrement_button_rect(bounds: Rect) -> Rect {
        let plus = Self::increment_button_rect(bounds);
        let top_right = Pos2::new(plus.left() - perceptron::BUTTON_MARGIN, plus.top());
        Self::button_from_top_right(top_right)
    }

    fn button_from_top_right(top_right: Pos2) -> Rect {
        let size = perceptron::BUTTON_SIZE;
        Rect::from_min_size(Pos2::new(top_right.x - size, top_right.y), Vec2::splat(size))
    }
}

impl HasOutput for Perceptron {
    fn output_value(&self) -> bool {
        self.output_value
    }
}

impl HasInputs for Perceptron {
    fn input_slots(&self) -> &[Option<EntityId>] {
        &self.input_slots
    }

    fn input_slots_mut(&mut self) -> &mut [Option<EntityId>] {
        &mut self.input_slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_explicit_weight_mismatch_fails() {
        let result = Perceptron::new(2, Some(vec![1.0]), Some(0.0), &mut rng());
        assert_eq!(
            result.unwrap_err(),
            NodeError::WeightCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_input_count_clamped_at_construction() {
        let zero = Perceptron::new(0, None, None, &mut rng()).unwrap();
        assert_eq!(zero.num_inputs(), 1);
        assert_eq!(zero.weights.len(), 1);

        let many = Perceptron::new(20, None, None, &mut rng()).unwrap();
        assert_eq!(many.num_inputs(), 8);
    }

    #[test]
    fn test_random_weights_in_range() {
        let p = Perceptron::new(8, None, None, &mut rng()).unwrap();
        assert!(p.weights.iter().all(|w| (-1.0..=1.0).contains(w)));
        assert!((-1.0..=1.0).contains(&p.bias));
    }

    #[test]
    fn test_count_limits_hold_under_any_sequence() {
        let mut rng = rng();
        let mut p = Perceptron::new(1, None, None, &mut rng).unwrap();
        // Deterministic pseudo-random walk of increments and decrements
        for step in 0..200u32 {
            if (step * 7 + step / 3) % 5 < 3 {
                p.increment_inputs(&mut rng);
            } else {
                p.decrement_inputs();
            }
            assert!((1..=8).contains(&p.num_inputs()));
            assert_eq!(p.weights.len(), p.num_inputs());
            assert_eq!(p.input_slots.len(), p.num_inputs());
        }
    }

    #[test]
    fn test_limits_are_no_ops() {
        let mut rng = rng();
        let mut p = Perceptron::new(8, None, None, &mut rng).unwrap();
        let weights = p.weights.clone();
        assert!(!p.increment_inputs(&mut rng));
        assert_eq!(p.weights, weights);

        let mut single = Perceptron::new(1, Some(vec![0.5]), Some(0.0), &mut rng).unwrap();
        assert_eq!(single.decrement_inputs(), None);
        assert_eq!(single.weights, vec![0.5]);
    }

    #[test]
    fn test_decrement_removes_last_slot() {
        let mut p = Perceptron::new(3, Some(vec![0.1, 0.2, 0.3]), Some(0.0), &mut rng()).unwrap();
        p.set_input_source(0, Some(EntityId(4)));
        p.set_input_source(2, Some(EntityId(5)));
        let removed = p.decrement_inputs().unwrap();
        assert_eq!(
            removed,
            RemovedInput {
                index: 2,
                source: Some(EntityId(5))
            }
        );
        assert_eq!(p.weights, vec![0.1, 0.2]);
        assert_eq!(p.input_source(0), Some(EntityId(4)));
    }

    #[test]
    fn test_and_gate() {
        let mut p = Perceptron::new(2, Some(vec![1.0, 1.0]), Some(-1.5), &mut rng()).unwrap();
        assert!(p.evaluate(vec![true, true]));
        assert!(!p.evaluate(vec![true, false]));
        assert!(!p.evaluate(vec![false, true]));
        assert!(!p.evaluate(vec![false, false]));
    }

    #[test]
    fn test_zero_sum_fires() {
        let mut p = Perceptron::new(1, Some(vec![1.0]), Some(0.0), &mut rng()).unwrap();
        assert!(p.evaluate(vec![false]));
    }

    #[test]
    fn test_weight_mismatch_repaired() {
        let mut p = Perceptron::new(3, Some(vec![1.0, 1.0, 1.0]), Some(-2.5), &mut rng()).unwrap();
        p.weights.truncate(1);
        assert!(!p.evaluate(vec![true, true, true]));
        assert_eq!(p.weights, vec![1.0, 0.0, 0.0]);

        p.weights = vec![1.0, 1.0, 1.0, 5.0, 5.0];
        assert!(p.evaluate(vec![true, true, true]));
        assert_eq!(p.weights.len(), 3);
    }
}
