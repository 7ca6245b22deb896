//! Command implementations

pub mod solve;
pub mod test_all;

pub use solve::{SolveConfig, solve_query};
pub use test_all::{TestAllStatistics, run_test_all};
