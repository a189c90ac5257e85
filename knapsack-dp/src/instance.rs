use crate::error::{KnapsackError, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Items are 0-indexed everywhere in this crate. Reports show item numbers,
/// which start at 1.
pub const ITEM_NUMBER_OFFSET: usize = 1;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub value: u32,
    pub weight: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    pub items: Vec<Item>,
    pub capacity: u32,
}

/// Parameters for generating a random instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub num_items: usize,
    /// Capacity as a percentage of the total item weight.
    #[serde(default = "default_budget_percent")]
    pub budget_percent: u32,
    #[serde(default = "default_max_item_weight")]
    pub max_item_weight: u32,
    #[serde(default = "default_max_item_value")]
    pub max_item_value: u32,
}

fn default_budget_percent() -> u32 {
    50
}

fn default_max_item_weight() -> u32 {
    50
}

fn default_max_item_value() -> u32 {
    100
}

impl Track {
    pub fn new(num_items: usize) -> Self {
        Self {
            num_items,
            budget_percent: default_budget_percent(),
            max_item_weight: default_max_item_weight(),
            max_item_value: default_max_item_value(),
        }
    }
}

impl ProblemInstance {
    pub fn new(items: Vec<Item>, capacity: u32) -> Self {
        Self { items, capacity }
    }

    pub fn from_parallel(values: &[u32], weights: &[u32], capacity: u32) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(KnapsackError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        let items = values
            .iter()
            .zip(weights)
            .map(|(&value, &weight)| Item { value, weight })
            .collect();
        Ok(Self { items, capacity })
    }

    /// Builds an instance from signed input, rejecting negative or oversized numbers.
    pub fn from_signed(values: &[i64], weights: &[i64], capacity: i64) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(KnapsackError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        if capacity < 0 {
            return Err(KnapsackError::NegativeCapacity { capacity });
        }
        let capacity = to_u32("capacity", capacity)?;
        let values = to_u32s("value", values)?;
        let weights = to_u32s("weight", weights)?;
        Self::from_parallel(&values, &weights, capacity)
    }

    pub fn generate(seed: &[u8; 32], track: &Track) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let max_item_weight = track.max_item_weight.max(1);
        let max_item_value = track.max_item_value.max(1);

        // Weights and values are drawn independently in [1, max]
        let items: Vec<Item> = (0..track.num_items)
            .map(|_| {
                let weight = rng.gen_range(1..=max_item_weight);
                let value = rng.gen_range(1..=max_item_value);
                Item { value, weight }
            })
            .collect();

        let total_weight: u64 = items.iter().map(|item| item.weight as u64).sum();
        let capacity = total_weight
            .checked_mul(track.budget_percent as u64)
            .ok_or(KnapsackError::OutOfRange {
                field: "budget_percent",
                value: track.budget_percent as i64,
            })?
            / 100;
        let capacity = u32::try_from(capacity).map_err(|_| KnapsackError::OutOfRange {
            field: "capacity",
            value: i64::try_from(capacity).unwrap_or(i64::MAX),
        })?;

        Ok(Self { items, capacity })
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn values(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.value).collect()
    }

    pub fn weights(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.weight).collect()
    }

    pub fn total_weight(&self, indices: &[usize]) -> u64 {
        indices.iter().map(|&i| self.items[i].weight as u64).sum()
    }

    pub fn total_value(&self, indices: &[usize]) -> u64 {
        indices.iter().map(|&i| self.items[i].value as u64).sum()
    }
}

fn to_u32(field: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| KnapsackError::OutOfRange { field, value })
}

fn to_u32s(field: &'static str, input: &[i64]) -> Result<Vec<u32>> {
    input
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value < 0 {
                return Err(KnapsackError::NegativeInput {
                    field,
                    index,
                    value,
                });
            }
            to_u32(field, value)
        })
        .collect()
}
