//! 0/1 knapsack solved by dynamic programming.
//!
//! A [`KnapsackSolver`] fills the full `(n + 1) x (capacity + 1)` value table,
//! walks it back to recover one optimal subset, and reports a [`Summary`].
//!
//! ```
//! use knapsack_dp::KnapsackSolver;
//!
//! let solver = KnapsackSolver::from_parallel(&[10, 5, 16, 11], &[3, 2, 4, 4], 10).unwrap();
//! let summary = solver.solve();
//! assert_eq!(summary.total_value, 32);
//! assert_eq!(summary.item_numbers(), vec![2, 3, 4]);
//! ```

mod error;
pub use error::*;
mod instance;
pub use instance::*;
mod json;
pub use json::*;
mod solver;
pub use solver::*;
mod table;
