use crate::instance::ProblemInstance;

/// Best achievable value for every (items considered, capacity) pair.
///
/// Row `i` covers the first `i` items, column `c` a weight bound of `c`, so the
/// grid is `(n + 1) x (capacity + 1)` and stored row-major. Row 0 and column 0
/// stay zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<u64>,
}

impl DpTable {
    pub(crate) fn build(instance: &ProblemInstance) -> Self {
        let rows = instance.num_items() + 1;
        let cols = instance.capacity as usize + 1;
        let mut cells = vec![0u64; rows * cols];

        for i in 1..rows {
            let item = &instance.items[i - 1];
            let weight = item.weight as usize;
            let (prev, curr) = cells[(i - 1) * cols..(i + 1) * cols].split_at_mut(cols);
            for c in 1..cols {
                if weight > c {
                    curr[c] = prev[c];
                    continue;
                }
                let exclude = prev[c];
                let include = item.value as u64 + prev[c - weight];
                // Ties keep the item out
                curr[c] = if exclude >= include { exclude } else { include };
            }
        }

        Self { rows, cols, cells }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn get(&self, i: usize, c: usize) -> u64 {
        self.cells[i * self.cols + c]
    }

    pub(crate) fn best_value(&self) -> u64 {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Walks back from the bottom-right cell and returns the chosen item
    /// indices in ascending order.
    pub(crate) fn reconstruct(&self, instance: &ProblemInstance) -> Vec<usize> {
        let mut subset = Vec::new();
        let mut i = self.rows - 1;
        let mut c = self.cols - 1;

        while i > 0 && c > 0 {
            if self.get(i, c) == self.get(i - 1, c) {
                i -= 1;
                continue;
            }
            let item = i - 1;
            let weight = instance.items[item].weight as usize;
            assert!(
                weight <= c,
                "backtracking took item {} (weight {}) with only {} capacity left",
                item,
                weight,
                c
            );
            subset.push(item);
            c -= weight;
            i -= 1;
        }

        subset.reverse();
        subset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{Item, ProblemInstance, Track};

    fn museum() -> ProblemInstance {
        ProblemInstance::from_parallel(&[10, 5, 16, 11], &[3, 2, 4, 4], 10).unwrap()
    }

    fn assert_monotone(table: &DpTable) {
        for i in 0..table.rows() {
            for c in 0..table.cols() {
                if c > 0 {
                    assert!(table.get(i, c) >= table.get(i, c - 1));
                }
                if i > 0 {
                    assert!(table.get(i, c) >= table.get(i - 1, c));
                }
            }
        }
    }

    #[test]
    fn test_museum_table_rows() {
        let table = DpTable::build(&museum());
        assert_eq!((table.rows(), table.cols()), (5, 11));

        let row = |i: usize| (0..table.cols()).map(|c| table.get(i, c)).collect::<Vec<_>>();
        assert_eq!(row(0), vec![0; 11]);
        assert_eq!(row(1), vec![0, 0, 0, 10, 10, 10, 10, 10, 10, 10, 10]);
        assert_eq!(row(2), vec![0, 0, 5, 10, 10, 15, 15, 15, 15, 15, 15]);
        assert_eq!(row(3), vec![0, 0, 5, 10, 16, 16, 21, 26, 26, 31, 31]);
        assert_eq!(row(4), vec![0, 0, 5, 10, 16, 16, 21, 26, 27, 31, 32]);
        assert_eq!(table.best_value(), 32);
    }

    #[test]
    fn test_museum_reconstruct() {
        let instance = museum();
        let table = DpTable::build(&instance);
        assert_eq!(table.reconstruct(&instance), vec![1, 2, 3]);
    }

    #[test]
    fn test_borders_are_zero() {
        let table = DpTable::build(&museum());
        for c in 0..table.cols() {
            assert_eq!(table.get(0, c), 0);
        }
        for i in 0..table.rows() {
            assert_eq!(table.get(i, 0), 0);
        }
    }

    #[test]
    fn test_generated_tables_are_monotone() {
        for n in [0, 1, 7, 20] {
            let seed = [n as u8; 32];
            let instance = ProblemInstance::generate(&seed, &Track::new(n)).unwrap();
            let table = DpTable::build(&instance);
            assert_monotone(&table);
        }
    }

    #[test]
    fn test_tie_prefers_exclusion() {
        // Both items are worth 7 and fit alone, never together
        let instance = ProblemInstance::new(
            vec![
                Item { value: 7, weight: 3 },
                Item { value: 7, weight: 3 },
            ],
            4,
        );
        let table = DpTable::build(&instance);
        assert_eq!(table.get(2, 4), table.get(1, 4));
        assert_eq!(table.reconstruct(&instance), vec![0]);
    }

    #[test]
    fn test_zero_weight_item_keeps_zero_column() {
        // Column 0 is never filled, so a weightless item cannot stack on a full knapsack
        let instance = ProblemInstance::new(
            vec![
                Item { value: 4, weight: 0 },
                Item { value: 9, weight: 2 },
            ],
            2,
        );
        let table = DpTable::build(&instance);
        assert_eq!(table.get(1, 0), 0);
        assert_eq!(table.get(1, 1), 4);
        assert_eq!(table.best_value(), 9);
        assert_eq!(table.reconstruct(&instance), vec![1]);
    }

    #[test]
    fn test_empty_instance() {
        let instance = ProblemInstance::new(Vec::new(), 5);
        let table = DpTable::build(&instance);
        assert_eq!((table.rows(), table.cols()), (1, 6));
        assert_eq!(table.best_value(), 0);
        assert!(table.reconstruct(&instance).is_empty());
    }
}
