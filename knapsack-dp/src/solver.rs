use crate::{
    error::{KnapsackError, Result},
    instance::{ProblemInstance, ITEM_NUMBER_OFFSET},
    table::DpTable,
};
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, info};

/// Upper bound on the number of DP cells a solver will allocate.
pub const MAX_TABLE_CELLS: usize = 1 << 28;

/// Size of the full subset search space, `2^num_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetCount {
    pub num_items: usize,
}

impl SubsetCount {
    pub fn count(&self) -> BigUint {
        BigUint::from(1u32) << self.num_items
    }
}

impl fmt::Display for SubsetCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl Serialize for SubsetCount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.count().to_str_radix(10))
    }
}

impl<'de> Deserialize<'de> for SubsetCount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let count = s.parse::<BigUint>().map_err(serde::de::Error::custom)?;
        if count.count_ones() != 1 {
            return Err(serde::de::Error::custom(format!(
                "Subset count ({}) is not a power of two",
                count
            )));
        }
        let num_items = count
            .trailing_zeros()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| serde::de::Error::custom("Subset count is too large"))?;
        Ok(SubsetCount { num_items })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub theoretical_subsets: SubsetCount,
    pub matrix_cells: usize,
    pub matrix_rows: usize,
    pub matrix_cols: usize,
    /// 0-based indices of the chosen items, ascending.
    pub chosen_items: Vec<usize>,
    pub total_weight: u64,
    pub total_value: u64,
    pub capacity: u32,
}

impl Summary {
    /// Chosen items as the 1-based numbers shown in reports.
    pub fn item_numbers(&self) -> Vec<usize> {
        self.chosen_items
            .iter()
            .map(|&i| i + ITEM_NUMBER_OFFSET)
            .collect()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Museum Knapsack Solution =====")?;
        writeln!(f, "Theoretical number of subsets: {}", self.theoretical_subsets)?;
        writeln!(
            f,
            "Size of DP matrix S: {} cells ({} x {})",
            self.matrix_cells, self.matrix_rows, self.matrix_cols
        )?;
        writeln!(
            f,
            "Number of items in optimal subset: {}",
            self.chosen_items.len()
        )?;
        writeln!(f, "Items chosen: {:?}", self.item_numbers())?;
        writeln!(
            f,
            "Total weight: {} (capacity = {})",
            self.total_weight, self.capacity
        )?;
        writeln!(f, "Total value: {}", self.total_value)?;
        write!(f, "===================================")
    }
}

#[derive(Debug, Clone)]
pub struct KnapsackSolver {
    instance: ProblemInstance,
}

impl KnapsackSolver {
    pub fn new(instance: ProblemInstance) -> Result<Self> {
        let rows = instance.num_items().checked_add(1);
        let cols = (instance.capacity as usize).checked_add(1);
        let cells = rows.zip(cols).and_then(|(r, c)| r.checked_mul(c));
        match cells {
            Some(cells) if cells <= MAX_TABLE_CELLS => Ok(Self { instance }),
            _ => Err(KnapsackError::TableTooLarge {
                rows: instance.num_items().saturating_add(1),
                cols: (instance.capacity as usize).saturating_add(1),
                limit: MAX_TABLE_CELLS,
            }),
        }
    }

    pub fn from_parallel(values: &[u32], weights: &[u32], capacity: u32) -> Result<Self> {
        Self::new(ProblemInstance::from_parallel(values, weights, capacity)?)
    }

    pub fn instance(&self) -> &ProblemInstance {
        &self.instance
    }

    pub fn solve(&self) -> Summary {
        let instance = &self.instance;
        info!(
            event = "solve_start",
            num_items = instance.num_items(),
            capacity = instance.capacity,
        );

        let table = DpTable::build(instance);
        debug!(
            event = "table_built",
            rows = table.rows(),
            cols = table.cols(),
            best_value = table.best_value(),
        );

        let chosen_items = table.reconstruct(instance);
        let total_weight = instance.total_weight(&chosen_items);
        let total_value = instance.total_value(&chosen_items);
        assert!(
            total_weight <= instance.capacity as u64,
            "chosen items weigh {} but capacity is {}",
            total_weight,
            instance.capacity
        );
        assert_eq!(
            total_value,
            table.best_value(),
            "chosen items do not add up to the table optimum"
        );

        let summary = Summary {
            theoretical_subsets: SubsetCount {
                num_items: instance.num_items(),
            },
            matrix_cells: table.rows() * table.cols(),
            matrix_rows: table.rows(),
            matrix_cols: table.cols(),
            chosen_items,
            total_weight,
            total_value,
            capacity: instance.capacity,
        };
        info!(
            event = "solve_end",
            chosen = summary.chosen_items.len(),
            total_weight = summary.total_weight,
            total_value = summary.total_value,
        );
        summary
    }
}
