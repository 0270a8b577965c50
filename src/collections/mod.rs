//! Lookup adapters over maps and sequences.

pub mod dictionary;
pub mod sequence;

pub use dictionary::{get_value, Dictionary, DictionaryExt};
pub use sequence::{IteratorExt, SliceExt};
