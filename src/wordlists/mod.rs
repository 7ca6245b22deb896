//! Word lists for Wordle solving
//!
//! Word lists are plain text files with one word per line.

pub mod loader;

/// Default word-list file, relative to the working directory
pub const DEFAULT_WORD_LIST: &str = "WORDS";
