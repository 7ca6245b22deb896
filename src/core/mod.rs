//! Core domain types for Wordle
//!
//! Words, per-round feedback, accumulated constraints and their protocol
//! encoding. Nothing here performs I/O.

mod codec;
mod constraints;
mod feedback;
mod word;

pub use codec::{CodecError, ProtocolTriple};
pub use constraints::{ConstraintSet, LetterSet};
pub use feedback::{Feedback, FeedbackRow};
pub use word::{WORD_LENGTH, Word, WordError};
