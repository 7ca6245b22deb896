//! Terminal output formatting
//!
//! Per-game result lines, colored feedback rows and run summaries.

pub mod display;
pub mod formatters;

pub use display::{print_session_report, print_test_all_statistics};
