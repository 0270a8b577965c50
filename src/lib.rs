pub mod error;
pub mod macros;
pub mod nullable;
pub mod option;
pub mod culture;
pub mod styles;
pub mod parse;
pub mod collections;
pub mod util;

pub use chrono;
pub use rust_decimal;

pub use error::MaybeError;
pub use error::MaybeResult;
pub use option::Maybe;
pub use nullable::Nullable;
pub use culture::Culture;
pub use styles::{NumberStyles, DateTimeStyles, TimeSpanStyles};
pub use collections::{get_value, DictionaryExt, IteratorExt, SliceExt};
